//! Row schema for the launch records dataset.

use serde::{Deserialize, Serialize};

/// One row of the source dataset.
///
/// Immutable once loaded; the full collection is read-only state
/// initialized at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Human-readable launch site name
    pub site: String,

    /// Payload mass in kilograms, non-negative
    pub payload_mass_kg: f64,

    /// Launch outcome: 1 = success, 0 = failure
    pub outcome: u8,

    /// Booster version category, used only for scatter coloring
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.outcome == 1
    }
}

/// Raw CSV row as it appears in the source file.
///
/// **Private to the dataset module** - converted into [`LaunchRecord`]
/// after validation by the loader. The outcome column is kept wide
/// here so out-of-range values produce a clear error instead of a
/// serde type mismatch.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(rename = "Launch Site")]
    pub site: String,

    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,

    #[serde(rename = "class")]
    pub outcome: i64,

    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        let record = LaunchRecord {
            site: "CCAFS LC-40".to_string(),
            payload_mass_kg: 2500.0,
            outcome: 1,
            booster_category: "FT".to_string(),
        };
        assert!(record.is_success());

        let failed = LaunchRecord { outcome: 0, ..record };
        assert!(!failed.is_success());
    }
}
