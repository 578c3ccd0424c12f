use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors (command-line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input file '{}' must have a .vcf extension", .0.display())]
    NotVcf(PathBuf),

    #[error("{}", output_exists_message(.0))]
    OutputExists(Vec<PathBuf>),
}

fn output_exists_message(paths: &[PathBuf]) -> String {
    let files = paths
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Output already exists: {files}; use --overwrite to replace")
}

pub type AppResult<T> = std::result::Result<T, AppError>;
