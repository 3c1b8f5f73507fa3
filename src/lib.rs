//! Launch Records Dashboard
//!
//! An interactive dashboard over a static table of rocket launch
//! records. The process loads the dataset once at startup, precomputes
//! per-site success aggregates, and serves a single-page dashboard with
//! two reactive charts: a success pie chart driven by a launch-site
//! selector, and a payload/outcome scatter chart driven by the selector
//! plus a payload-range slider.
//!
//! ## Getting Started
//!
//! Most users should run the bundled binary:
//!
//! ```bash
//! launch-dash --data spacex_launch_dash.csv
//! ```
//!
//! then open the printed URL in a browser. Charts render client-side
//! with Plotly.js; this crate serves the page and the chart-ready JSON
//! behind it.

pub mod aggregator;
pub mod chart;
pub mod dataset;
pub mod query;
pub mod server;
pub mod utils;
