//! `POST /api/write`: file a digest in the document store.

use std::sync::atomic::Ordering;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, info};

use super::super::types::{AppState, WriteRequest, WriteResponse};
use super::invalid_body;
use crate::error_handling::{record_store_error, WarningType};
use crate::utils::sanitize_and_truncate_error_message;

pub async fn write_handler(
    State(state): State<AppState>,
    payload: Result<Json<WriteRequest>, JsonRejection>,
) -> Response {
    state.requests.write_total.fetch_add(1, Ordering::SeqCst);
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            state.requests.write_failed.fetch_add(1, Ordering::SeqCst);
            return invalid_body(&state, rejection);
        }
    };
    info!(
        "Write request: {:?} ({} chars) to direction {:?}",
        request.title,
        request.content.chars().count(),
        request.direction
    );

    match state
        .store
        .write_digest(&request.title, &request.content, &request.direction)
        .await
    {
        Ok(written) => {
            if !written.ready {
                state.stats.increment_warning(WarningType::DocumentNotReady);
            }
            info!(
                "Wrote document {} under {}",
                written.document_id, written.direction_name
            );
            Json(WriteResponse {
                success: true,
                message: format!(
                    "Written to the \"{}\" document in the wiki",
                    written.direction_name
                ),
                document_id: written.document_id,
                document_name: written.direction_name,
            })
            .into_response()
        }
        Err(e) => {
            error!("Failed to write {:?}: {e}", request.title);
            record_store_error(&state.stats, &e);
            state.requests.write_failed.fetch_add(1, Ordering::SeqCst);
            let response = WriteResponse {
                success: false,
                message: sanitize_and_truncate_error_message(&format!(
                    "Failed to write to the document store: {e}"
                )),
                document_id: String::new(),
                document_name: String::new(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}
