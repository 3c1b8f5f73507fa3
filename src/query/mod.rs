//! The query layer: per-interaction chart data.
//!
//! Each user interaction (site selection or slider change) maps to one
//! synchronous call here. Both queries are pure functions over the
//! immutable dataset and the precomputed aggregates; there is no
//! cross-call state.

pub mod pie;
pub mod scatter;

use crate::utils::config::ALL_SITES;

// Re-export main functions
pub use pie::pie_chart_data;
pub use scatter::scatter_data;

/// The site selector's value: either all sites or one site code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Code(String),
}

impl SiteSelection {
    /// Parse the raw UI value (`"ALL"` or a site code)
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Code(value.to_string())
        }
    }
}
