use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CovdxError {
    #[error("Malformed region: {0}")]
    MalformedRegion(String),

    #[error("Duplicate region identifier in region set: {0}")]
    DuplicateRegion(String),

    #[error("Can't read alignment file: {0}")]
    FileReadError(String),

    #[error("Invalid input path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("Invalid region config: {0}")]
    InvalidConfig(String),

    #[error("Can't build worker pool: {0}")]
    ThreadPool(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CovdxError>;
