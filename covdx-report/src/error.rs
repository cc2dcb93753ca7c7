use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for covdx-report operations.
#[derive(Error, Debug)]
pub enum ReportError {
    /// One of the template, stylesheet or script files is not where it should be.
    #[error("Missing report asset: {0:?}")]
    MissingAsset(PathBuf),

    /// IO error occurred while reading assets or writing the report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The statistics payload could not be serialized.
    #[error("Failed to serialize report data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for covdx-report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
