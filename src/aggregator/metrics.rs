//! Per-site aggregate computation.
//!
//! One pass over the loaded records produces everything the query
//! layer needs: success/failure fractions per site, each site's share
//! of the global success total, and the observed payload bounds that
//! seed the range slider.

use std::collections::HashMap;

use log::{debug, warn};

use super::sites::SiteRegistry;
use crate::dataset::LaunchRecord;
use crate::utils::config::{
    PAYLOAD_SLIDER_MAX_KG, PAYLOAD_SLIDER_MIN_KG, PAYLOAD_SLIDER_STEP_KG,
};
use crate::utils::error::DatasetError;

/// Success statistics for one launch site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteAggregate {
    /// Number of successful launches at this site
    pub successes: u64,

    /// Total number of launches at this site
    pub launches: u64,

    /// `successes / launches`
    pub success_fraction: f64,

    /// `1 - success_fraction`
    pub failure_fraction: f64,

    /// This site's share of all successes across every site.
    /// Defined as 0.0 when the dataset has no successful launches.
    pub share_of_total: f64,
}

/// Startup context object: everything derived from the dataset.
///
/// Built once by [`build_aggregates`], then injected into the query
/// handlers. Never mutated after startup.
#[derive(Debug, Clone)]
pub struct Aggregates {
    /// Site code <-> name bijection, first-encounter order
    pub sites: SiteRegistry,

    /// Total successful launches across all sites
    pub total_successes: u64,

    /// Smallest payload mass observed in the dataset
    pub payload_min_kg: f64,

    /// Largest payload mass observed in the dataset
    pub payload_max_kg: f64,

    per_site: HashMap<String, SiteAggregate>,
}

impl Aggregates {
    /// Look up the aggregate for a site code
    pub fn for_code(&self, code: &str) -> Option<&SiteAggregate> {
        self.per_site.get(code)
    }

    /// Iterate `(code, site name, aggregate)` in code-assignment order
    pub fn iter_sites(&self) -> impl Iterator<Item = (&str, &str, &SiteAggregate)> {
        self.sites.codes().iter().filter_map(move |code| {
            let name = self.sites.name_for(code)?;
            let aggregate = self.per_site.get(code)?;
            Some((code.as_str(), name, aggregate))
        })
    }
}

/// Build all derived statistics from the loaded dataset.
///
/// **Public** - pure function over the records, run exactly once at
/// startup.
///
/// # Arguments
/// * `records` - the full, validated launch dataset
///
/// # Returns
/// The startup [`Aggregates`] context, or [`DatasetError::Empty`] for
/// an empty dataset.
pub fn build_aggregates(records: &[LaunchRecord]) -> Result<Aggregates, DatasetError> {
    if records.is_empty() {
        return Err(DatasetError::Empty);
    }

    let sites = SiteRegistry::from_site_names(records.iter().map(|r| r.site.as_str()));
    debug!("Assigned codes for {} distinct sites", sites.len());

    // Counts keyed by site name, one pass
    let mut successes: HashMap<&str, u64> = HashMap::new();
    let mut launches: HashMap<&str, u64> = HashMap::new();
    let mut payload_min = f64::INFINITY;
    let mut payload_max = f64::NEG_INFINITY;

    for record in records {
        *launches.entry(record.site.as_str()).or_insert(0) += 1;
        *successes.entry(record.site.as_str()).or_insert(0) += u64::from(record.outcome);
        payload_min = payload_min.min(record.payload_mass_kg);
        payload_max = payload_max.max(record.payload_mass_kg);
    }

    let total_successes: u64 = successes.values().sum();
    if total_successes == 0 {
        warn!("Dataset contains no successful launches; all-sites shares are defined as 0");
    }

    let mut per_site = HashMap::new();
    for (code, name) in sites.iter() {
        let site_successes = successes.get(name).copied().unwrap_or(0);
        let site_launches = launches.get(name).copied().unwrap_or(0);

        // Registry and count maps come from the same records, so a
        // registered name always has at least one launch.
        let success_fraction = if site_launches > 0 {
            site_successes as f64 / site_launches as f64
        } else {
            0.0
        };
        let share_of_total = if total_successes > 0 {
            site_successes as f64 / total_successes as f64
        } else {
            0.0
        };

        per_site.insert(
            code.to_string(),
            SiteAggregate {
                successes: site_successes,
                launches: site_launches,
                success_fraction,
                failure_fraction: 1.0 - success_fraction,
                share_of_total,
            },
        );
    }

    Ok(Aggregates {
        sites,
        total_successes,
        payload_min_kg: payload_min,
        payload_max_kg: payload_max,
        per_site,
    })
}

/// One tick mark on the payload slider.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PayloadMark {
    /// Bucket boundary in kilograms
    pub value: f64,

    /// Display label (the plain number)
    pub label: String,
}

/// Tick marks for the payload slider: multiples of 1000 from 0 to the
/// configured maximum. Purely presentational.
pub fn payload_marks() -> Vec<PayloadMark> {
    let mut marks = Vec::new();
    let mut value = PAYLOAD_SLIDER_MIN_KG;
    while value <= PAYLOAD_SLIDER_MAX_KG {
        marks.push(PayloadMark {
            value,
            label: format!("{}", value as u64),
        });
        value += PAYLOAD_SLIDER_STEP_KG;
    }
    marks
}
