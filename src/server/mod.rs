//! HTTP API server.
//!
//! Endpoints:
//! - `GET /health` - liveness
//! - `GET /status` - JSON counters (requests, errors, warnings, uptime)
//! - `GET /metrics` - the same counters in Prometheus text format
//! - `POST /api/parse` - fetch a page and return its digest
//! - `POST /api/write` - file a digest in the Feishu wiki
//!
//! Every route answers CORS preflight requests and carries permissive CORS
//! headers.

mod cors;
mod handlers;
mod types;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use handlers::{
    health_handler, method_not_allowed, metrics_handler, parse_handler, status_handler,
    write_handler,
};
pub use types::{
    AppState, ParseRequest, ParseResponse, RequestCounters, StatusResponse, WriteRequest,
    WriteResponse,
};

/// Builds the router with all routes and the CORS middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api/parse", post(parse_handler).fallback(method_not_allowed))
        .route("/api/write", post(write_handler).fallback(method_not_allowed))
        .layer(middleware::from_fn(cors::cors))
        .with_state(state)
}

/// Serves the API on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), anyhow::Error> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))
}

/// Binds `addr` and serves the API.
pub async fn start_server(addr: &str, state: AppState) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}: {}", addr, e))?;

    log::info!("API server listening on http://{}/", addr);
    log::info!("  - Health: http://{}/health", addr);
    log::info!("  - Status: http://{}/status", addr);
    log::info!("  - Metrics: http://{}/metrics", addr);
    log::info!("  - Parse:  POST http://{}/api/parse", addr);
    log::info!("  - Write:  POST http://{}/api/write", addr);
    if !state.store.is_configured() {
        log::warn!("Feishu credentials are not configured, /api/write will fail");
    }

    serve(listener, state).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        // Without a signal handler, keep serving
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down API server");
}
