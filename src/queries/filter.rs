//! Month and free-text predicates shared by every query.

use crate::error::{Result, SalesError};
use crate::models::SaleRecord;

// ---------------------------------------------------------------------------
// MonthFilter
// ---------------------------------------------------------------------------

/// Selects the records sold in a given month, optionally narrowed by a
/// free-text search term.
///
/// The month is matched loosely: the record's English month name (lowercase)
/// must *contain* the requested text, so `"may"` matches May and `"ju"`
/// matches both June and July.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthFilter {
    month: String,
    search: String,
}

impl MonthFilter {
    /// Build a filter from raw caller input.
    ///
    /// Fails with [`SalesError::MissingParameter`] when `month` is absent or
    /// blank. Otherwise the month text is kept as given, surrounding spaces
    /// included. A missing `search` matches every record.
    pub fn new(month: Option<&str>, search: Option<&str>) -> Result<Self> {
        let month = month
            .filter(|m| !m.trim().is_empty())
            .ok_or(SalesError::MissingParameter("month"))?;

        Ok(Self {
            month: month.to_lowercase(),
            search: search.unwrap_or_default().to_string(),
        })
    }

    /// Shorthand for a month-only filter.
    pub fn for_month(month: &str) -> Result<Self> {
        Self::new(Some(month), None)
    }

    /// The requested month, lowercased.
    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn matches_month(&self, record: &SaleRecord) -> bool {
        record
            .sale_month()
            .map(|m| m.name().to_lowercase().contains(&self.month))
            .unwrap_or(false)
    }

    /// Case-sensitive substring match against title, description or price.
    pub fn matches_search(&self, record: &SaleRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        record.title.contains(&self.search)
            || record.description.contains(&self.search)
            || record.price_text().contains(&self.search)
    }

    pub fn matches(&self, record: &SaleRecord) -> bool {
        self.matches_month(record) && self.matches_search(record)
    }

    /// Borrow the matching records, preserving source order.
    pub fn apply<'a>(&self, records: &'a [SaleRecord]) -> Vec<&'a SaleRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
