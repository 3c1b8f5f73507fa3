//! The "payload correlation" query behind the scatter chart.

use log::debug;

use super::SiteSelection;
use crate::aggregator::Aggregates;
use crate::chart::{ScatterChart, ScatterSeries};
use crate::dataset::LaunchRecord;
use crate::utils::config::{SCATTER_Y_MAX, SCATTER_Y_MIN};
use crate::utils::error::QueryError;

/// Chart data for the payload/outcome scatter chart.
///
/// **Public** - invoked on every site-selector or slider change.
///
/// Rows are restricted to payloads within `range` inclusive, and for a
/// single-site selection to that site's rows. Points are grouped into
/// one series per booster version category (the color key). An
/// inverted range (`low > high`) is defined behavior: no row passes
/// the inclusive-between test, so the chart is empty, not an error.
pub fn scatter_data(
    records: &[LaunchRecord],
    aggregates: &Aggregates,
    selection: &SiteSelection,
    range: (f64, f64),
) -> Result<ScatterChart, QueryError> {
    let (low, high) = range;

    let (title, site_filter) = match selection {
        SiteSelection::All => (
            "Correlation between Payload and Success for all Sites".to_string(),
            None,
        ),
        SiteSelection::Code(code) => {
            let name = aggregates
                .sites
                .name_for(code)
                .ok_or_else(|| QueryError::UnknownSite(code.clone()))?;
            (
                format!("Correlation between Payload and Success for Site {}", name),
                Some(name),
            )
        }
    };

    // One series per booster category, in first-encounter order so the
    // frontend's color assignment is stable across refreshes.
    let mut series: Vec<ScatterSeries> = Vec::new();
    let mut point_count = 0usize;

    for record in records {
        if record.payload_mass_kg < low || record.payload_mass_kg > high {
            continue;
        }
        if let Some(site_name) = site_filter {
            if record.site != site_name {
                continue;
            }
        }

        let position = match series.iter().position(|s| s.name == record.booster_category) {
            Some(position) => position,
            None => {
                series.push(ScatterSeries {
                    name: record.booster_category.clone(),
                    x: Vec::new(),
                    y: Vec::new(),
                });
                series.len() - 1
            }
        };
        series[position].x.push(record.payload_mass_kg);
        series[position].y.push(record.outcome);
        point_count += 1;
    }

    debug!(
        "Scatter query: {} points in {} series for range [{}, {}]",
        point_count,
        series.len(),
        low,
        high
    );

    Ok(ScatterChart {
        title,
        series,
        x_range: range,
        y_range: (SCATTER_Y_MIN, SCATTER_Y_MAX),
    })
}
