//! Prometheus metrics handler.

use std::fmt::Write;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use super::super::types::AppState;

/// Prometheus-compatible metrics endpoint
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    let requests = state.requests.snapshot();
    let mut metrics = format!(
        r#"# HELP page_digest_uptime_seconds Seconds since the server started
# TYPE page_digest_uptime_seconds gauge
page_digest_uptime_seconds {:.3}

# HELP page_digest_requests_total Requests received per endpoint
# TYPE page_digest_requests_total counter
page_digest_requests_total{{endpoint="parse"}} {}
page_digest_requests_total{{endpoint="write"}} {}

# HELP page_digest_request_failures_total Failed requests per endpoint
# TYPE page_digest_request_failures_total counter
page_digest_request_failures_total{{endpoint="parse"}} {}
page_digest_request_failures_total{{endpoint="write"}} {}

# HELP page_digest_errors_total Errors by type
# TYPE page_digest_errors_total counter
"#,
        state.start_time.elapsed().as_secs_f64(),
        requests.parse_total,
        requests.write_total,
        requests.parse_failed,
        requests.write_failed,
    );

    for (label, count) in state.stats.error_breakdown() {
        let _ = writeln!(metrics, "page_digest_errors_total{{type=\"{label}\"}} {count}");
    }
    metrics.push_str(
        "\n# HELP page_digest_warnings_total Degraded extractions by type\n# TYPE page_digest_warnings_total counter\n",
    );
    for (label, count) in state.stats.warning_breakdown() {
        let _ = writeln!(metrics, "page_digest_warnings_total{{type=\"{label}\"}} {count}");
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics,
    )
        .into_response()
}
