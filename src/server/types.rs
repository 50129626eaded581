//! Server state and JSON bodies.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::docstore::FeishuClient;
use crate::error_handling::ProcessingStats;
use crate::extract::ExtractOptions;

/// Shared state of the API server.
#[derive(Clone)]
pub struct AppState {
    /// Client used for page fetches.
    pub http: Arc<reqwest::Client>,
    pub store: Arc<FeishuClient>,
    pub options: ExtractOptions,
    pub stats: Arc<ProcessingStats>,
    pub requests: Arc<RequestCounters>,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(http: Arc<reqwest::Client>, store: Arc<FeishuClient>, options: ExtractOptions) -> Self {
        Self {
            http,
            store,
            options,
            stats: Arc::new(ProcessingStats::new()),
            requests: Arc::new(RequestCounters::default()),
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// Per-endpoint request counters.
#[derive(Debug, Default)]
pub struct RequestCounters {
    pub parse_total: AtomicUsize,
    pub parse_failed: AtomicUsize,
    pub write_total: AtomicUsize,
    pub write_failed: AtomicUsize,
}

impl RequestCounters {
    pub fn snapshot(&self) -> RequestCounts {
        RequestCounts {
            parse_total: self.parse_total.load(Ordering::SeqCst),
            parse_failed: self.parse_failed.load(Ordering::SeqCst),
            write_total: self.write_total.load(Ordering::SeqCst),
            write_failed: self.write_failed.load(Ordering::SeqCst),
        }
    }
}

/// Body of `POST /api/parse`.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub url: String,
}

/// Response of `POST /api/parse`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResponse {
    pub success: bool,
    pub title: String,
    pub url: String,
    pub content: String,
    pub message: String,
    pub timestamp: String,
}

/// Body of `POST /api/write`.
#[derive(Debug, Deserialize)]
pub struct WriteRequest {
    pub title: String,
    pub content: String,
    /// Destination category; empty or absent means the default one.
    #[serde(default)]
    pub direction: String,
}

/// Response of `POST /api/write`.
#[derive(Debug, Serialize, Deserialize)]
pub struct WriteResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "documentID")]
    pub document_id: String,
    #[serde(rename = "documentName")]
    pub document_name: String,
}

/// Body of failures that have no endpoint-specific shape (bad method, bad JSON).
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// JSON response for `/status`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub uptime_seconds: f64,
    pub store_configured: bool,
    pub requests: RequestCounts,
    pub errors: CategoryCounts,
    pub warnings: CategoryCounts,
}

#[derive(Debug, Serialize)]
pub struct RequestCounts {
    pub parse_total: usize,
    pub parse_failed: usize,
    pub write_total: usize,
    pub write_failed: usize,
}

/// Total plus non-zero counts by label.
#[derive(Debug, Serialize)]
pub struct CategoryCounts {
    pub total: usize,
    pub by_type: BTreeMap<&'static str, usize>,
}
