//! Output file naming.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime, Utc};

/// Extensions removed from a user-supplied output name before new ones are added.
const STRIPPED_EXTENSIONS: &[&str] = &["csv", "json"];

const LOCAL_STAMP_FORMAT: &str = "%Y%m%dT%H%M%S";
const ZULU_STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Formats a file name stamp, `Z`-suffixed for UTC.
#[must_use]
pub fn format_stamp(time: NaiveDateTime, zulu: bool) -> String {
    let format = if zulu {
        ZULU_STAMP_FORMAT
    } else {
        LOCAL_STAMP_FORMAT
    };
    time.format(format).to_string()
}

/// Stamp for the current time, local or UTC.
#[must_use]
pub fn current_stamp(zulu: bool) -> String {
    let now = if zulu {
        Utc::now().naive_utc()
    } else {
        Local::now().naive_local()
    };
    format_stamp(now, zulu)
}

/// ## Summary
/// Picks the path that output extensions are appended to: `output` when
/// given, else `input`. A trailing `.csv` or `.json` is removed.
#[must_use]
pub fn output_base(input: &Path, output: Option<&Path>) -> PathBuf {
    let base = output.unwrap_or(input);
    match base.extension().and_then(|e| e.to_str()) {
        Some(ext) if STRIPPED_EXTENSIONS.contains(&ext) => base.with_extension(""),
        _ => base.to_path_buf(),
    }
}

/// Adds `stamp-` before and/or `-stamp` after the file name of `base`.
#[must_use]
pub fn stamp_base(base: &Path, stamp: &str, prepend: bool, append: bool) -> PathBuf {
    let Some(name) = base.file_name() else {
        return base.to_path_buf();
    };

    let mut stamped = OsString::new();
    if prepend {
        stamped.push(stamp);
        stamped.push("-");
    }
    stamped.push(name);
    if append {
        stamped.push("-");
        stamped.push(stamp);
    }
    base.with_file_name(stamped)
}

/// Appends `.ext` to the full path, keeping any extension already there.
#[must_use]
pub fn with_appended_extension(base: &Path, ext: &str) -> PathBuf {
    let mut path = base.as_os_str().to_owned();
    path.push(".");
    path.push(ext);
    PathBuf::from(path)
}

/// Files a run is going to write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPlan {
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

impl OutputPlan {
    #[must_use]
    pub fn new(base: &Path, csv: bool, json: bool) -> Self {
        Self {
            csv: csv.then(|| with_appended_extension(base, "csv")),
            json: json.then(|| with_appended_extension(base, "json")),
        }
    }

    /// Planned files that already exist.
    #[must_use]
    pub fn existing(&self) -> Vec<PathBuf> {
        [&self.csv, &self.json]
            .into_iter()
            .flatten()
            .filter(|path| path.exists())
            .cloned()
            .collect()
    }
}
