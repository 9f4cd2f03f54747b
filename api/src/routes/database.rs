use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/initialize-database
///
/// Fetch the dataset from the source and replace the in-memory records.
/// On failure the previously loaded records keep being served.
pub async fn initialize(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let records = state.sdk.initialize().await?;

    Ok(Json(json!({
        "message": "Database initialized successfully",
        "records": records
    })))
}
