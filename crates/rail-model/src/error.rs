use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RailError {
    /// The reference dataset could not be located at any known path.
    #[error("dataset not found; searched: {searched:?}")]
    NotFound { searched: Vec<PathBuf> },
    /// Required columns missing or a required numeric field holds
    /// non-numeric data. Fatal at load time.
    #[error("schema error: {details}")]
    Schema { details: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, RailError>;
