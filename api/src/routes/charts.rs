use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use sales_insights::models::{CategoryCount, CombinedReport, PriceRangeCount, Statistics};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MonthParams {
    pub month: Option<String>,
}

/// GET /api/statistics?month=march
pub async fn statistics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthParams>,
) -> Result<Json<Statistics>, AppError> {
    Ok(Json(state.sdk.statistics(params.month).await?))
}

/// GET /api/bar-chart?month=march
///
/// Item counts per price range, all ten ranges in fixed order.
pub async fn bar_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthParams>,
) -> Result<Json<Vec<PriceRangeCount>>, AppError> {
    Ok(Json(state.sdk.bar_chart(params.month).await?))
}

/// GET /api/pie-chart?month=march
///
/// Item counts per category, in the order categories first appear.
pub async fn pie_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthParams>,
) -> Result<Json<Vec<CategoryCount>>, AppError> {
    Ok(Json(state.sdk.pie_chart(params.month).await?))
}

/// GET /api/combined-response?month=march
///
/// First transaction page, statistics, bar chart and pie chart in one body.
pub async fn combined(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthParams>,
) -> Result<Json<CombinedReport>, AppError> {
    Ok(Json(state.sdk.combined(params.month).await?))
}
