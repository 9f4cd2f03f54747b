//! Combined month report: first transaction page, statistics, and both charts.

use crate::error::{ReportPart, Result};
use crate::models::{CombinedReport, SaleRecord};
use crate::queries::bar_chart::BarChartQuery;
use crate::queries::filter::MonthFilter;
use crate::queries::pagination::PageRequest;
use crate::queries::pie_chart::PieChartQuery;
use crate::queries::statistics::StatisticsQuery;
use crate::queries::transactions::TransactionQuery;

// ---------------------------------------------------------------------------
// CombinedQuery
// ---------------------------------------------------------------------------

/// Runs the four month queries against the same records and merges them.
pub struct CombinedQuery<'a> {
    records: &'a [SaleRecord],
}

impl<'a> CombinedQuery<'a> {
    pub fn new(records: &'a [SaleRecord]) -> Self {
        Self { records }
    }

    /// Build the combined report for `month`.
    ///
    /// A missing month fails up front with `MissingParameter`. Any failing
    /// sub-query aborts the whole report with `AggregationFailed` naming the
    /// part; partial reports are never returned.
    pub fn get(&self, month: Option<&str>) -> Result<CombinedReport> {
        let filter = MonthFilter::new(month, None)?;
        let month = Some(filter.month());

        let transactions = TransactionQuery::new(self.records)
            .list(month, None, PageRequest::default())
            .map_err(|e| e.in_part(ReportPart::Transactions))?;
        let statistics = StatisticsQuery::new(self.records)
            .get(month)
            .map_err(|e| e.in_part(ReportPart::Statistics))?;
        let bar_chart = BarChartQuery::new(self.records)
            .get(month)
            .map_err(|e| e.in_part(ReportPart::BarChart))?;
        let pie_chart = PieChartQuery::new(self.records)
            .get(month)
            .map_err(|e| e.in_part(ReportPart::PieChart))?;

        tracing::debug!(
            month = filter.month(),
            matched = statistics.total_sold_items,
            "built combined report"
        );

        Ok(CombinedReport {
            transactions: transactions.transactions,
            statistics,
            bar_chart,
            pie_chart,
        })
    }
}
