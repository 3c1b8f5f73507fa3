//! The "success distribution" query behind the pie chart.

use log::debug;

use super::SiteSelection;
use crate::aggregator::Aggregates;
use crate::chart::PieChart;
use crate::utils::error::QueryError;

/// Chart data for the success pie chart.
///
/// **Public** - invoked on every site-selector change.
///
/// For `All`, the chart shows the distribution of successes *across*
/// sites: one slice per site, valued at that site's share of the
/// global success total. For a single site it shows success vs
/// failure for that site alone.
pub fn pie_chart_data(
    aggregates: &Aggregates,
    selection: &SiteSelection,
) -> Result<PieChart, QueryError> {
    match selection {
        SiteSelection::All => {
            let mut labels = Vec::with_capacity(aggregates.sites.len());
            let mut values = Vec::with_capacity(aggregates.sites.len());
            for (_, name, site) in aggregates.iter_sites() {
                labels.push(name.to_string());
                values.push(site.share_of_total);
            }
            debug!("Pie query: all sites, {} slices", labels.len());
            Ok(PieChart {
                title: "Total Success Launches by Site".to_string(),
                labels,
                values,
            })
        }
        SiteSelection::Code(code) => {
            let name = aggregates
                .sites
                .name_for(code)
                .ok_or_else(|| QueryError::UnknownSite(code.clone()))?;
            // Registry and aggregate map are built together, so a
            // resolvable code always has an aggregate.
            let site = aggregates
                .for_code(code)
                .ok_or_else(|| QueryError::UnknownSite(code.clone()))?;
            debug!("Pie query: site {} ({})", code, name);
            Ok(PieChart {
                title: format!("Total Success Launches for Site {}", name),
                labels: vec!["Success".to_string(), "Failure".to_string()],
                values: vec![site.success_fraction, site.failure_fraction],
            })
        }
    }
}
