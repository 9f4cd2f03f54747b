use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use sales_insights::SalesError;
use serde_json::json;

/// Unified error type that renders as a JSON `{"error": CODE, "message": "..."}`
/// response with an appropriate HTTP status code.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl AppError {
    pub fn bad_request(code: &'static str, msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code,
            message: msg.into(),
        }
    }

    pub fn bad_gateway(code: &'static str, msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            code,
            message: msg.into(),
        }
    }

    pub fn internal(code: &'static str, msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({ "error": self.code, "message": self.message })),
        )
            .into_response()
    }
}

impl From<SalesError> for AppError {
    fn from(e: SalesError) -> Self {
        let code = e.code();
        match &e {
            SalesError::MissingParameter(_) => AppError::bad_request(code, e.to_string()),
            SalesError::DataSourceUnavailable(_) => AppError::bad_gateway(code, e.to_string()),
            _ => {
                tracing::error!(error = %e, "request failed");
                AppError::internal(code, e.to_string())
            }
        }
    }
}
