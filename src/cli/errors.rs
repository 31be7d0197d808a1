use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file does not exist or is not a regular file: {path:?}")]
    InputNotFound { path: PathBuf },

    #[error("Could not derive an output name from input: {path:?}")]
    NoOutputName { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Dpres(#[from] dpres::Error),
}
