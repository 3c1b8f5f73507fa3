use pretty_assertions::assert_eq;

use launch_records_dashboard::aggregator::{build_aggregates, Aggregates};
use launch_records_dashboard::dataset::LaunchRecord;
use launch_records_dashboard::query::{pie_chart_data, scatter_data, SiteSelection};
use launch_records_dashboard::utils::error::QueryError;

fn record(site: &str, payload: f64, outcome: u8, booster: &str) -> LaunchRecord {
    LaunchRecord {
        site: site.to_string(),
        payload_mass_kg: payload,
        outcome,
        booster_category: booster.to_string(),
    }
}

// A: 2 successes / 3 launches, B: 1 success / 4 launches
fn sample_dataset() -> Vec<LaunchRecord> {
    vec![
        record("A", 1000.0, 1, "FT"),
        record("A", 2000.0, 1, "FT"),
        record("A", 3000.0, 0, "v1.1"),
        record("B", 4000.0, 1, "FT"),
        record("B", 5000.0, 0, "v1.1"),
        record("B", 6000.0, 0, "B4"),
        record("B", 7000.0, 0, "B4"),
    ]
}

fn aggregates_for(records: &[LaunchRecord]) -> Aggregates {
    build_aggregates(records).unwrap()
}

#[test]
fn test_all_sites_pie_is_success_share() {
    let records = sample_dataset();
    let aggregates = aggregates_for(&records);
    let chart = pie_chart_data(&aggregates, &SiteSelection::All).unwrap();

    assert_eq!(chart.title, "Total Success Launches by Site");
    assert_eq!(chart.labels, vec!["A".to_string(), "B".to_string()]);
    assert!((chart.values[0] - 2.0 / 3.0).abs() < 1e-12);
    assert!((chart.values[1] - 1.0 / 3.0).abs() < 1e-12);
    // The ALL view shows success distribution across sites, so the
    // slices sum to 1.
    assert!((chart.values.iter().sum::<f64>() - 1.0).abs() < 1e-12);
}

#[test]
fn test_single_site_pie_is_success_vs_failure() {
    let records = sample_dataset();
    let aggregates = aggregates_for(&records);
    let code = aggregates.sites.code_for("A").unwrap().to_string();
    let chart = pie_chart_data(&aggregates, &SiteSelection::Code(code)).unwrap();

    assert_eq!(chart.title, "Total Success Launches for Site A");
    assert_eq!(
        chart.labels,
        vec!["Success".to_string(), "Failure".to_string()]
    );
    assert!((chart.values[0] - 2.0 / 3.0).abs() < 1e-12);
    assert!((chart.values[1] - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_scatter_full_range_keeps_all_site_rows() {
    let records = sample_dataset();
    let aggregates = aggregates_for(&records);
    let code = aggregates.sites.code_for("B").unwrap().to_string();

    let chart = scatter_data(
        &records,
        &aggregates,
        &SiteSelection::Code(code),
        (aggregates.payload_min_kg, aggregates.payload_max_kg),
    )
    .unwrap();

    // No filtering loss: cardinality equals B's row count
    assert_eq!(chart.point_count(), 4);
}

#[test]
fn test_scatter_inverted_range_is_empty() {
    let records = sample_dataset();
    let aggregates = aggregates_for(&records);

    let chart = scatter_data(
        &records,
        &aggregates,
        &SiteSelection::All,
        (5000.0, 3000.0),
    )
    .unwrap();

    assert_eq!(chart.point_count(), 0);
}

#[test]
fn test_scatter_groups_by_booster_category() {
    let records = sample_dataset();
    let aggregates = aggregates_for(&records);

    let chart = scatter_data(
        &records,
        &aggregates,
        &SiteSelection::All,
        (0.0, 10_000.0),
    )
    .unwrap();

    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["FT", "v1.1", "B4"]);
    assert_eq!(chart.point_count(), records.len());
}

#[test]
fn test_unknown_code_is_an_explicit_error() {
    let records = sample_dataset();
    let aggregates = aggregates_for(&records);
    let bogus = SiteSelection::Code("site99".to_string());

    assert!(matches!(
        pie_chart_data(&aggregates, &bogus),
        Err(QueryError::UnknownSite(_))
    ));
    assert!(matches!(
        scatter_data(&records, &aggregates, &bogus, (0.0, 10_000.0)),
        Err(QueryError::UnknownSite(_))
    ));
}
