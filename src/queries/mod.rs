//! Query modules for the sales dataset.
//!
//! Each module provides a query struct that borrows a slice of
//! [`SaleRecord`](crate::models::SaleRecord)s (usually a
//! [`Dataset`](crate::store::Dataset) snapshot) and exposes methods returning
//! `Result<T>` with serializable report types. The underlying aggregations
//! are also exposed as free functions over a filtered view.

pub mod bar_chart;
pub mod combined;
pub mod filter;
pub mod pagination;
pub mod pie_chart;
pub mod statistics;
pub mod transactions;

pub use bar_chart::{BarChartQuery, PRICE_RANGE_LABELS};
pub use combined::CombinedQuery;
pub use filter::MonthFilter;
pub use pagination::{Page, PageRequest};
pub use pie_chart::PieChartQuery;
pub use statistics::StatisticsQuery;
pub use transactions::TransactionQuery;
