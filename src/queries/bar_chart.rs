//! Price-range histogram over ten fixed buckets.

use crate::error::Result;
use crate::models::{PriceRangeCount, SaleRecord};
use crate::queries::filter::MonthFilter;

/// Bucket labels in output order.
pub const PRICE_RANGE_LABELS: [&str; 10] = [
    "0-100",
    "101-200",
    "201-300",
    "301-400",
    "401-500",
    "501-600",
    "601-700",
    "701-800",
    "801-900",
    "901-above",
];

/// Inclusive upper bounds of every bucket except the last.
const UPPER_BOUNDS: [f64; 9] = [
    100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0,
];

/// Index of the bucket `price` falls into.
///
/// Prices go to the first bucket whose upper bound is at least the price, so
/// negative prices land in `0-100` and anything above 900 (or NaN) lands in
/// `901-above`.
pub fn bucket_index(price: f64) -> usize {
    UPPER_BOUNDS
        .iter()
        .position(|bound| price <= *bound)
        .unwrap_or(UPPER_BOUNDS.len())
}

/// Count a filtered view into the ten buckets, zero-count buckets included.
pub fn histogram(view: &[&SaleRecord]) -> Vec<PriceRangeCount> {
    let mut counts = [0usize; PRICE_RANGE_LABELS.len()];
    for record in view {
        counts[bucket_index(record.price)] += 1;
    }

    PRICE_RANGE_LABELS
        .iter()
        .zip(counts)
        .map(|(label, count)| PriceRangeCount {
            range: (*label).to_string(),
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// BarChartQuery
// ---------------------------------------------------------------------------

pub struct BarChartQuery<'a> {
    records: &'a [SaleRecord],
}

impl<'a> BarChartQuery<'a> {
    pub fn new(records: &'a [SaleRecord]) -> Self {
        Self { records }
    }

    /// Price histogram of the records sold in `month`.
    pub fn get(&self, month: Option<&str>) -> Result<Vec<PriceRangeCount>> {
        let filter = MonthFilter::new(month, None)?;
        Ok(self.get_filtered(&filter))
    }

    pub fn get_filtered(&self, filter: &MonthFilter) -> Vec<PriceRangeCount> {
        histogram(&filter.apply(self.records))
    }
}
