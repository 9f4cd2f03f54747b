//! Paged transaction listing with month and free-text filtering.

use crate::error::Result;
use crate::models::{SaleRecord, TransactionPage};
use crate::queries::filter::MonthFilter;
use crate::queries::pagination::PageRequest;

// ---------------------------------------------------------------------------
// TransactionQuery
// ---------------------------------------------------------------------------

/// Query interface for listing sale records month by month.
pub struct TransactionQuery<'a> {
    records: &'a [SaleRecord],
}

impl<'a> TransactionQuery<'a> {
    /// Create a new `TransactionQuery` over the given records.
    pub fn new(records: &'a [SaleRecord]) -> Self {
        Self { records }
    }

    /// List one page of the records sold in `month` that match `search`.
    ///
    /// `totalTransactions` in the result is the size of the filtered set,
    /// not of the returned page.
    pub fn list(
        &self,
        month: Option<&str>,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<TransactionPage> {
        let filter = MonthFilter::new(month, search)?;
        Ok(self.list_filtered(&filter, page))
    }

    /// List one page using an already validated filter.
    pub fn list_filtered(&self, filter: &MonthFilter, page: PageRequest) -> TransactionPage {
        let view = filter.apply(self.records);
        let page = page.paginate(&view);

        TransactionPage {
            transactions: page.items.iter().map(|r| (*r).clone()).collect(),
            total_transactions: page.total,
        }
    }

    /// Count the records matching `month` and `search`.
    pub fn count(&self, month: Option<&str>, search: Option<&str>) -> Result<usize> {
        let filter = MonthFilter::new(month, search)?;
        Ok(self.records.iter().filter(|r| filter.matches(r)).count())
    }
}
