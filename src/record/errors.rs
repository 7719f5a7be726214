//! Dataset error types
//!
//! Error codes:
//! - PORTFOLIO_DATASET_IO
//! - PORTFOLIO_DATASET_INVALID_CSV
//! - PORTFOLIO_DATASET_MISSING_ID

use thiserror::Error;

/// Errors raised while loading a project dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset source could not be read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV text is malformed
    #[error("Invalid CSV: {0}")]
    InvalidCsv(#[from] csv::Error),

    /// The header has no identity column
    #[error("Dataset header has no '{0}' column")]
    MissingIdColumn(String),
}

impl DatasetError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            DatasetError::Io(_) => "PORTFOLIO_DATASET_IO",
            DatasetError::InvalidCsv(_) => "PORTFOLIO_DATASET_INVALID_CSV",
            DatasetError::MissingIdColumn(_) => "PORTFOLIO_DATASET_MISSING_ID",
        }
    }
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
