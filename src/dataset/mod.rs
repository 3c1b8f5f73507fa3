//! Launch dataset schema and CSV loading.
//!
//! The dataset is read exactly once at startup and is immutable for
//! the life of the process.

pub mod loader;
pub mod schema;

// Re-export main types and functions
pub use loader::{load_records, read_records};
pub use schema::LaunchRecord;
