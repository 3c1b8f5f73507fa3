//! Chart-ready data handed to the rendering collaborator.
//!
//! These types are the wire contract between the query layer and the
//! Plotly.js frontend: the frontend turns a [`PieChart`] into a pie
//! trace and a [`ScatterChart`] into one scatter trace per series.

use serde::Serialize;

/// A pie chart: parallel label/value slices plus a title.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieChart {
    pub title: String,

    /// Slice labels, parallel to `values`
    pub labels: Vec<String>,

    /// Slice values, parallel to `labels`
    pub values: Vec<f64>,
}

impl PieChart {
    /// An empty chart carrying only a title, used as the user-visible
    /// "no data" state.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            labels: Vec::new(),
            values: Vec::new(),
        }
    }
}

/// A scatter chart: one series per color key plus axis ranges.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterChart {
    pub title: String,

    /// One series per booster version category
    pub series: Vec<ScatterSeries>,

    /// Requested payload range, used as the x-axis display range
    pub x_range: (f64, f64),

    /// Outcome display range, padded beyond 0..1
    pub y_range: (f64, f64),
}

impl ScatterChart {
    pub fn empty(title: impl Into<String>, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
            x_range,
            y_range,
        }
    }

    /// Total number of points across all series
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.x.len()).sum()
    }
}

/// One colored point group within a scatter chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterSeries {
    /// Display name (the booster version category)
    pub name: String,

    /// Payload masses in kilograms
    pub x: Vec<f64>,

    /// Launch outcomes (0 or 1), parallel to `x`
    pub y: Vec<u8>,
}
