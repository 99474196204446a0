//! Errors raised while loading survey data from disk.
//!
//! The aggregation pipeline itself never fails; only reading an external
//! dataset can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    /// Failed to open or read the file.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid CSV or a row is missing a column.
    #[error("invalid survey CSV: {0}")]
    Csv(#[from] csv::Error),
}
