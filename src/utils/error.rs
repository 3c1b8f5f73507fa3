//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs
//! and server startup.

use thiserror::Error;

/// Errors that can occur while loading the launch dataset.
///
/// All of these are fatal at startup: the process does not serve
/// without a valid dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: outcome class must be 0 or 1, got {value}")]
    InvalidOutcome { row: usize, value: i64 },

    #[error("Row {row}: payload mass must be non-negative, got {value}")]
    NegativePayload { row: usize, value: f64 },

    #[error("Dataset contains no launch records")]
    Empty,
}

/// Errors that can occur while answering a chart query.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Unknown site code: {0}")]
    UnknownSite(String),
}
