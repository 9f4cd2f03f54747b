//! Bar chart (price histogram) and pie chart (category counts) tests.

mod common;

use sales_insights::queries::bar_chart::{bucket_index, histogram};
use sales_insights::queries::pie_chart::category_counts;
use sales_insights::queries::PRICE_RANGE_LABELS;
use sales_insights::{Dataset, SalesError};

use common::record;

// ---------------------------------------------------------------------------
// bucket boundaries
// ---------------------------------------------------------------------------

#[test]
fn bucket_upper_bounds_are_inclusive() {
    assert_eq!(bucket_index(0.0), 0);
    assert_eq!(bucket_index(100.0), 0);
    assert_eq!(bucket_index(100.5), 1);
    assert_eq!(bucket_index(101.0), 1);
    assert_eq!(bucket_index(200.0), 1);
    assert_eq!(bucket_index(900.0), 8);
    assert_eq!(bucket_index(900.01), 9);
    assert_eq!(bucket_index(1_000_000.0), 9);
}

#[test]
fn negative_prices_land_in_first_bucket() {
    assert_eq!(bucket_index(-5.0), 0);
    assert_eq!(bucket_index(f64::NEG_INFINITY), 0);
}

#[test]
fn nan_lands_in_last_bucket() {
    assert_eq!(bucket_index(f64::NAN), 9);
}

// ---------------------------------------------------------------------------
// bar chart
// ---------------------------------------------------------------------------

#[test]
fn may_example_bar_chart() {
    let data = Dataset::new(common::may_june_records());
    let chart = data.bar_chart().get(Some("may")).unwrap();

    assert_eq!(chart.len(), 10);
    assert_eq!(chart[0].range, "0-100");
    assert_eq!(chart[0].count, 1);
    assert_eq!(chart[1].range, "101-200");
    assert_eq!(chart[1].count, 1);
    assert!(chart[2..].iter().all(|b| b.count == 0));
}

#[test]
fn bar_chart_labels_are_fixed() {
    let chart = Dataset::default().bar_chart().get(Some("may")).unwrap();
    let labels: Vec<&str> = chart.iter().map(|b| b.range.as_str()).collect();

    assert_eq!(labels, PRICE_RANGE_LABELS);
    assert_eq!(labels[9], "901-above");
}

#[test]
fn march_histogram() {
    let data = common::sample_dataset();
    let chart = data.bar_chart().get(Some("march")).unwrap();
    let counts: Vec<usize> = chart.iter().map(|b| b.count).collect();

    assert_eq!(counts, [3, 1, 0, 0, 0, 0, 1, 0, 0, 1]);
}

#[test]
fn histogram_counts_every_record() {
    let records = vec![
        record(1, "a", -10.0, None, "2023-01-01"),
        record(2, "b", 0.0, None, "2023-01-01"),
        record(3, "c", 450.0, None, "2023-01-01"),
        record(4, "d", 5000.0, None, "2023-01-01"),
    ];
    let view: Vec<_> = records.iter().collect();
    let chart = histogram(&view);

    assert_eq!(chart.iter().map(|b| b.count).sum::<usize>(), 4);
    assert_eq!(chart[0].count, 2);
    assert_eq!(chart[4].count, 1);
    assert_eq!(chart[9].count, 1);
}

#[test]
fn bar_chart_requires_month() {
    let err = common::sample_dataset().bar_chart().get(None).unwrap_err();
    assert!(matches!(err, SalesError::MissingParameter(_)));
}

// ---------------------------------------------------------------------------
// pie chart
// ---------------------------------------------------------------------------

#[test]
fn may_example_pie_chart() {
    let data = Dataset::new(common::may_june_records());
    let chart = data.pie_chart().get(Some("may")).unwrap();

    assert_eq!(chart.len(), 2);
    assert_eq!(chart[0].category, "A");
    assert_eq!(chart[0].item_count, 1);
    assert_eq!(chart[1].category, "B");
    assert_eq!(chart[1].item_count, 1);
}

#[test]
fn pie_chart_keeps_first_seen_order_and_skips_blank_categories() {
    let data = common::sample_dataset();
    let chart = data.pie_chart().get(Some("march")).unwrap();
    let pairs: Vec<(&str, usize)> = chart
        .iter()
        .map(|c| (c.category.as_str(), c.item_count))
        .collect();

    assert_eq!(
        pairs,
        [
            ("men's clothing", 1),
            ("jewelery", 2),
            ("electronics", 1),
            ("women's clothing", 1),
        ]
    );
}

#[test]
fn empty_string_category_is_skipped() {
    let data = common::sample_dataset();
    let chart = data.pie_chart().get(Some("july")).unwrap();
    assert!(chart.is_empty());
}

#[test]
fn category_counts_groups_repeats() {
    let records = vec![
        record(1, "a", 1.0, Some("x"), "2023-01-01"),
        record(2, "b", 1.0, Some("y"), "2023-01-01"),
        record(3, "c", 1.0, Some("x"), "2023-01-01"),
        record(4, "d", 1.0, None, "2023-01-01"),
    ];
    let view: Vec<_> = records.iter().collect();
    let counts = category_counts(&view);

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].category, "x");
    assert_eq!(counts[0].item_count, 2);
    assert_eq!(counts[1].category, "y");
}

#[test]
fn pie_chart_serializes_item_count_key() {
    let data = Dataset::new(common::may_june_records());
    let chart = data.pie_chart().get(Some("may")).unwrap();
    let json = serde_json::to_value(&chart).unwrap();

    assert_eq!(json[0]["category"], "A");
    assert_eq!(json[0]["itemCount"], 1);
}
