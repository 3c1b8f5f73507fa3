//! Shared utilities: error types and configuration constants.

pub mod config;
pub mod error;

pub use error::{DatasetError, QueryError};
