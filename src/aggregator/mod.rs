//! Aggregation of launch records into chart-ready statistics.
//!
//! This module transforms the loaded dataset into:
//! - A site code registry (stable short codes for the UI)
//! - Per-site success/failure aggregates
//! - Each site's share of all successful launches
//! - Payload bounds and slider tick marks
//!
//! Everything here is computed exactly once at startup and is
//! immutable afterwards.

pub mod metrics;
pub mod sites;

// Re-export main types and functions
pub use metrics::{build_aggregates, payload_marks, Aggregates, PayloadMark, SiteAggregate};
pub use sites::SiteRegistry;
