//! `POST /api/parse`: fetch a page and return its digest.

use std::sync::atomic::Ordering;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Local;
use log::{error, info};

use super::super::types::{AppState, ParseRequest, ParseResponse};
use super::invalid_body;
use crate::config::TIMESTAMP_FORMAT;
use crate::error_handling::record_fetch_error;
use crate::extract::extract_with_options;
use crate::fetch::fetch_page;
use crate::utils::sanitize_and_truncate_error_message;

pub async fn parse_handler(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Response {
    state.requests.parse_total.fetch_add(1, Ordering::SeqCst);
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            state.requests.parse_failed.fetch_add(1, Ordering::SeqCst);
            return invalid_body(&state, rejection);
        }
    };
    info!("Parse request for {}", request.url);

    let page = match fetch_page(&state.http, &request.url).await {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to parse {}: {e}", request.url);
            record_fetch_error(&state.stats, &e);
            state.requests.parse_failed.fetch_add(1, Ordering::SeqCst);
            let response = ParseResponse {
                success: false,
                title: String::new(),
                url: request.url,
                content: String::new(),
                message: sanitize_and_truncate_error_message(&format!(
                    "Failed to parse URL: {e}"
                )),
                timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            };
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let result = extract_with_options(&page.markup, &page.url, &state.options);
    for warning in result.diagnostics.warnings() {
        state.stats.increment_warning(warning);
    }

    Json(ParseResponse {
        success: true,
        title: result.title,
        url: request.url,
        content: result.final_content,
        message: "Parsed successfully".to_string(),
        timestamp: result.timestamp,
    })
    .into_response()
}
