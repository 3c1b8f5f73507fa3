//! Configuration and constants for the dashboard.

/// Default dataset path when no `--data` flag is given
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

/// Default port for the dashboard server
pub const DEFAULT_PORT: u16 = 8050;

// Payload-range slider bounds. The slider is a fixed UI control and
// deliberately wider than the observed data range.
pub const PAYLOAD_SLIDER_MIN_KG: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX_KG: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP_KG: f64 = 1_000.0;

// Display padding for the scatter chart's outcome axis, so the 0/1
// points do not sit on the plot border.
pub const SCATTER_Y_MIN: f64 = -1.0;
pub const SCATTER_Y_MAX: f64 = 2.0;

/// Prefix for synthetic site codes (`site1`, `site2`, ...)
pub const SITE_CODE_PREFIX: &str = "site";

/// Selector value meaning "all sites"
pub const ALL_SITES: &str = "ALL";
