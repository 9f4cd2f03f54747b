//! Per-category item counts.

use std::collections::HashMap;

use crate::error::Result;
use crate::models::{CategoryCount, SaleRecord};
use crate::queries::filter::MonthFilter;

/// Count records per category in first-seen order, skipping records with an
/// absent or empty category.
pub fn category_counts(view: &[&SaleRecord]) -> Vec<CategoryCount> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for label in view.iter().filter_map(|r| r.category_label()) {
        match slots.get(label) {
            Some(&idx) => counts[idx].item_count += 1,
            None => {
                slots.insert(label, counts.len());
                counts.push(CategoryCount {
                    category: label.to_string(),
                    item_count: 1,
                });
            }
        }
    }

    counts
}

// ---------------------------------------------------------------------------
// PieChartQuery
// ---------------------------------------------------------------------------

pub struct PieChartQuery<'a> {
    records: &'a [SaleRecord],
}

impl<'a> PieChartQuery<'a> {
    pub fn new(records: &'a [SaleRecord]) -> Self {
        Self { records }
    }

    /// Category breakdown of the records sold in `month`.
    pub fn get(&self, month: Option<&str>) -> Result<Vec<CategoryCount>> {
        let filter = MonthFilter::new(month, None)?;
        Ok(self.get_filtered(&filter))
    }

    pub fn get_filtered(&self, filter: &MonthFilter) -> Vec<CategoryCount> {
        category_counts(&filter.apply(self.records))
    }
}
