//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use vcardconv_core::config::NormalizeConfig;
use vcardconv_rfc::rfc::vcard::NormalizeOptions;

#[derive(Parser, Debug)]
#[command(
    name = "vcardconv",
    version,
    about = "Parse and convert Apple Contacts vCard exports to CSV or JSON",
    long_about = "Parse and convert Apple Contacts vCard exports to CSV or JSON.\n\n\
                  Properties outside the Apple Contacts export format are reported as unknown fields.",
    group(
        ArgGroup::new("mode")
            .args(["csv", "json", "display", "unknown"])
            .required(true)
            .multiple(true)
    )
)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent command-line switch"
)]
pub struct Cli {
    /// The vCard file to parse
    pub input: PathBuf,

    /// Output file, defaults to the input file with the extension appended
    pub output: Option<PathBuf>,

    /// Save parsed data to a CSV file
    #[arg(short, long)]
    pub csv: bool,

    /// Save parsed data to a JSON file
    #[arg(short, long)]
    pub json: bool,

    /// Display parsed data in the console
    #[arg(short, long)]
    pub display: bool,

    /// Display unknown properties, then exit without creating files
    #[arg(short, long)]
    pub unknown: bool,

    /// Prepend a date/time stamp to output file names
    #[arg(long)]
    pub stamp1: bool,

    /// Append a date/time stamp to output file names
    #[arg(long)]
    pub stamp2: bool,

    /// Use UTC for file name stamps
    #[arg(long)]
    pub zulu: bool,

    /// Overwrite output files that already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Duplicate fields marked "pref" into an extra "(Preferred)" field
    #[arg(long)]
    pub preferred: bool,

    /// Order fields as Organization, Name, Phone, Email, Address, Date, Relationship, Other
    #[arg(long)]
    pub reorder: bool,

    /// Reformat addresses as postal blocks
    #[arg(long)]
    pub address: bool,

    /// Reformat US phone numbers as NPA-NXX-XXXX
    #[arg(long)]
    pub phone: bool,
}

impl Cli {
    /// Flags switch options on; configured defaults can't be switched off here.
    #[must_use]
    pub fn normalize_options(&self, defaults: NormalizeConfig) -> NormalizeOptions {
        let defaults = NormalizeOptions::from(&defaults);
        NormalizeOptions {
            apply_address_reformat: self.address || defaults.apply_address_reformat,
            apply_phone_reformat: self.phone || defaults.apply_phone_reformat,
            include_preferred_duplicates: self.preferred || defaults.include_preferred_duplicates,
            apply_reorder: self.reorder || defaults.apply_reorder,
        }
    }
}
