//! JSON status handler.

use axum::extract::State;
use axum::Json;

use super::super::types::{AppState, CategoryCounts, StatusResponse};

/// Uptime, request counters and error/warning breakdowns.
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        store_configured: state.store.is_configured(),
        requests: state.requests.snapshot(),
        errors: CategoryCounts {
            total: state.stats.total_errors(),
            by_type: state.stats.error_breakdown(),
        },
        warnings: CategoryCounts {
            total: state.stats.total_warnings(),
            by_type: state.stats.warning_breakdown(),
        },
    })
}
