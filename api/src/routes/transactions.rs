use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use sales_insights::models::TransactionPage;
use sales_insights::queries::PageRequest;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListTransactionsParams {
    pub month: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
}

/// GET /api/transactions?month=march&search=shirt&page=2&perPage=10
///
/// One page of the month's transactions, optionally narrowed by a search
/// term matched against title, description and price.
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListTransactionsParams>,
) -> Result<Json<TransactionPage>, AppError> {
    let page = PageRequest::parse(params.page.as_deref(), params.per_page.as_deref());
    let result = state
        .sdk
        .transactions(params.month, params.search, page)
        .await?;

    Ok(Json(result))
}
