//! API server HTTP handlers.

mod health;
mod metrics;
mod parse;
mod status;
mod write;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::warn;

use super::types::{AppState, ErrorResponse};
use crate::error_handling::ErrorType;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use parse::parse_handler;
pub use status::status_handler;
pub use write::write_handler;

/// Fallback for the `/api/*` routes when the method is not POST.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            success: false,
            message: "Only POST requests are supported".to_string(),
        }),
    )
        .into_response()
}

/// 400 response for a body that is not the expected JSON.
fn invalid_body(state: &AppState, rejection: JsonRejection) -> Response {
    warn!("Rejected request body: {}", rejection.body_text());
    state.stats.increment_error(ErrorType::InvalidRequestBody);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            success: false,
            message: format!("Invalid request body: {}", rejection.body_text()),
        }),
    )
        .into_response()
}
