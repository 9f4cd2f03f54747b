pub mod charts;
pub mod database;
pub mod transactions;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/initialize-database", get(database::initialize))
        .route("/api/transactions", get(transactions::list_transactions))
        .route("/api/statistics", get(charts::statistics))
        .route("/api/bar-chart", get(charts::bar_chart))
        .route("/api/pie-chart", get(charts::pie_chart))
        .route("/api/combined-response", get(charts::combined))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
