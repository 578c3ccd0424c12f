//! One conversion run, from validated arguments to written output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use vcardconv_core::config::Settings;
use vcardconv_service::convert::convert;
use vcardconv_service::export::{write_contacts, write_csv, write_json, write_unknown_report};

use crate::cli::Cli;
use crate::error::{AppError, AppResult};
use crate::output::{OutputPlan, current_stamp, output_base, stamp_base};

/// Extension an input file must carry.
const INPUT_EXTENSION: &str = "vcf";

/// ## Summary
/// Checks that the input is an existing `.vcf` file.
///
/// ## Errors
/// Returns [`AppError::InputNotFound`] or [`AppError::NotVcf`].
pub fn validate_input(input: &Path) -> AppResult<()> {
    if !input.is_file() {
        return Err(AppError::InputNotFound(input.to_path_buf()));
    }
    if input.extension().and_then(|e| e.to_str()) != Some(INPUT_EXTENSION) {
        return Err(AppError::NotVcf(input.to_path_buf()));
    }
    Ok(())
}

/// ## Summary
/// Works out which files to write and refuses to replace existing ones
/// without `--overwrite`. Every conflict is reported at once.
///
/// ## Errors
/// Returns [`AppError::OutputExists`] listing all conflicting files.
pub fn plan_outputs(cli: &Cli) -> AppResult<OutputPlan> {
    let mut base = output_base(&cli.input, cli.output.as_deref());
    if cli.stamp1 || cli.stamp2 {
        base = stamp_base(&base, &current_stamp(cli.zulu), cli.stamp1, cli.stamp2);
    }

    let plan = OutputPlan::new(&base, cli.csv, cli.json);
    if !cli.overwrite {
        let existing = plan.existing();
        if !existing.is_empty() {
            return Err(AppError::OutputExists(existing));
        }
    }
    Ok(plan)
}

/// ## Summary
/// Runs a conversion: parse, normalize, then write or print the results.
///
/// With `--unknown` only the unknown report is printed.
///
/// ## Errors
/// Returns an error if validation, parsing or writing fails.
#[tracing::instrument(skip_all, fields(input = %cli.input.display()))]
pub fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    validate_input(&cli.input)?;
    let plan = if cli.unknown {
        OutputPlan::default()
    } else {
        plan_outputs(cli)?
    };

    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read '{}'", cli.input.display()))?;

    let options = cli.normalize_options(settings.normalize);
    let conversion = convert(&raw, &options)?;
    tracing::info!(
        contacts = conversion.contacts.len(),
        unknown = conversion.report.len(),
        "Converted input"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.unknown {
        write_unknown_report(&mut out, &conversion.contacts, &conversion.report)?;
        out.flush()?;
        return Ok(());
    }

    let layout = conversion.layout();

    if let Some(path) = &plan.csv {
        write_csv(
            create(path)?,
            &conversion.contacts,
            &layout,
            &settings.export.value_separator,
        )
        .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "Wrote CSV");
    }

    if let Some(path) = &plan.json {
        write_json(create(path)?, &conversion.contacts, &layout)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "Wrote JSON");
    }

    if cli.display {
        write_contacts(&mut out, &conversion.contacts, &layout)?;
    }

    out.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("failed to create '{}'", path.display()))?;
    Ok(BufWriter::new(file))
}
