//! HTTP client initialization.
//!
//! Two clients are built from the configuration: one for page fetches, with
//! the browser User-Agent and the fetch timeout, and one for the document
//! store API with its own timeout.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the page-fetch client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Timeout from `fetch_timeout_seconds`
/// - Redirect following (reqwest default, up to 10 hops)
/// - Transparent gzip decoding
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.fetch_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .gzip(true)
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the document-store API client.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_store_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.store_timeout_seconds))
        .build()
}
