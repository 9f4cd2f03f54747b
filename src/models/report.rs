use serde::{Deserialize, Serialize};

use super::sale::SaleRecord;

// ---------------------------------------------------------------------------
// TransactionPage — One page of the filtered listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub transactions: Vec<SaleRecord>,
    /// Size of the filtered set before pagination.
    pub total_transactions: usize,
}

// ---------------------------------------------------------------------------
// Statistics — Monthly sale totals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_sale_amount: f64,
    pub total_sold_items: usize,
    /// Records outside the month view, not records with `sold == false`.
    pub total_not_sold_items: usize,
}

// ---------------------------------------------------------------------------
// PriceRangeCount — One histogram bucket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRangeCount {
    pub range: String,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// CategoryCount — One pie chart slice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: String,
    pub item_count: usize,
}

// ---------------------------------------------------------------------------
// CombinedReport — All four month views in one payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedReport {
    pub transactions: Vec<SaleRecord>,
    pub statistics: Statistics,
    pub bar_chart: Vec<PriceRangeCount>,
    pub pie_chart: Vec<CategoryCount>,
}
