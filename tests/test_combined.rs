//! Combined report tests.

mod common;

use sales_insights::queries::CombinedQuery;
use sales_insights::{Dataset, ReportPart, SalesError};

use common::record;

#[test]
fn may_example_combined_report() {
    let data = Dataset::new(common::may_june_records());
    let report = data.combined().get(Some("may")).unwrap();

    assert_eq!(report.transactions.len(), 2);
    assert_eq!(report.statistics.total_sale_amount, 200.0);
    assert_eq!(report.statistics.total_sold_items, 2);
    assert_eq!(report.statistics.total_not_sold_items, 1);
    assert_eq!(report.bar_chart.len(), 10);
    assert_eq!(report.bar_chart[0].count, 1);
    assert_eq!(report.bar_chart[1].count, 1);
    assert_eq!(report.pie_chart.len(), 2);
}

#[test]
fn combined_parts_match_individual_queries() {
    let data = common::sample_dataset();
    let report = CombinedQuery::new(&data).get(Some("March")).unwrap();

    assert_eq!(report.statistics, data.statistics().get(Some("march")).unwrap());
    assert_eq!(report.bar_chart, data.bar_chart().get(Some("march")).unwrap());
    assert_eq!(report.pie_chart, data.pie_chart().get(Some("march")).unwrap());
}

#[test]
fn combined_transactions_are_first_default_page() {
    let records: Vec<_> = (0..15)
        .map(|i| record(i, &format!("item {i}"), 10.0, Some("c"), "2023-08-05"))
        .collect();
    let data = Dataset::new(records);
    let report = data.combined().get(Some("august")).unwrap();

    assert_eq!(report.transactions.len(), 10);
    assert_eq!(report.statistics.total_sold_items, 15);
    assert_eq!(report.pie_chart[0].item_count, 15);
}

#[test]
fn missing_month_fails_before_aggregation() {
    let data = common::sample_dataset();
    let err = data.combined().get(None).unwrap_err();

    assert!(matches!(err, SalesError::MissingParameter("month")));
}

#[test]
fn aggregation_failure_names_the_part() {
    let err = SalesError::MissingParameter("month");
    let wrapped = SalesError::AggregationFailed {
        part: ReportPart::BarChart,
        source: Box::new(err),
    };

    assert_eq!(wrapped.code(), "AGGREGATION_FAILED");
    assert_eq!(
        wrapped.to_string(),
        "Failed to compute barChart: Missing required parameter: month"
    );
}

#[test]
fn combined_serializes_named_keys() {
    let data = Dataset::new(common::may_june_records());
    let report = data.combined().get(Some("may")).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["transactions"].is_array());
    assert_eq!(json["statistics"]["totalSoldItems"], 2);
    assert_eq!(json["barChart"][9]["range"], "901-above");
    assert_eq!(json["pieChart"][0]["itemCount"], 1);
}
