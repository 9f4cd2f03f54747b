//! Monthly sale totals.

use crate::error::Result;
use crate::models::{SaleRecord, Statistics};
use crate::queries::filter::MonthFilter;

/// Summarize a filtered view against the size of the full collection.
///
/// `total_not_sold_items` counts every record outside `view`; the `sold`
/// flag is not consulted.
pub fn summarize(view: &[&SaleRecord], collection_len: usize) -> Statistics {
    Statistics {
        total_sale_amount: view.iter().map(|r| r.price).sum(),
        total_sold_items: view.len(),
        total_not_sold_items: collection_len.saturating_sub(view.len()),
    }
}

// ---------------------------------------------------------------------------
// StatisticsQuery
// ---------------------------------------------------------------------------

pub struct StatisticsQuery<'a> {
    records: &'a [SaleRecord],
}

impl<'a> StatisticsQuery<'a> {
    pub fn new(records: &'a [SaleRecord]) -> Self {
        Self { records }
    }

    /// Sale amount and item counts for `month`.
    pub fn get(&self, month: Option<&str>) -> Result<Statistics> {
        let filter = MonthFilter::new(month, None)?;
        Ok(self.get_filtered(&filter))
    }

    pub fn get_filtered(&self, filter: &MonthFilter) -> Statistics {
        summarize(&filter.apply(self.records), self.records.len())
    }
}
