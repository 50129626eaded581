//! Page fetching.
//!
//! Retrieves raw markup for the extraction pipeline: validates the URL, sends
//! one GET with a browser-like request profile and reads the body under a
//! size cap. There are no retries; a failed fetch fails the request.

mod request;

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::FetchError;
use crate::utils::validate_and_normalize_url;

use request::apply_browser_headers;

/// Raw markup of a fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The normalized URL that was requested.
    pub url: String,
    /// The URL after redirects.
    pub final_url: String,
    /// Response body decoded as UTF-8 (invalid sequences replaced).
    pub markup: String,
    pub elapsed: Duration,
}

/// Fetches `url` and returns its markup.
///
/// # Errors
///
/// - `FetchError::InvalidUrl` if the URL fails validation
/// - `FetchError::Request` if the request could not be completed
/// - `FetchError::Status` for any status other than 200
/// - `FetchError::Body` if reading the body failed
/// - `FetchError::EmptyBody` / `FetchError::BodyTooLarge` for unusable bodies
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<FetchedPage, FetchError> {
    fetch_page_with_limit(client, url, MAX_RESPONSE_BODY_SIZE).await
}

pub(crate) async fn fetch_page_with_limit(
    client: &reqwest::Client,
    url: &str,
    max_body_size: usize,
) -> Result<FetchedPage, FetchError> {
    let url = validate_and_normalize_url(url)?;
    let start = Instant::now();
    info!("Fetching {url}");

    let mut response = apply_browser_headers(client.get(&url))
        .send()
        .await
        .map_err(FetchError::Request)?;

    let status = response.status();
    let final_url = response.url().to_string();
    debug!(
        "Response from {final_url}: {status} after {}ms",
        start.elapsed().as_millis()
    );
    if status != reqwest::StatusCode::OK {
        warn!("Fetching {url} returned {status}");
        return Err(FetchError::Status(status));
    }

    if let Some(length) = response.content_length() {
        let length = usize::try_from(length).unwrap_or(usize::MAX);
        if length > max_body_size {
            return Err(FetchError::BodyTooLarge {
                size: length,
                limit: max_body_size,
            });
        }
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(FetchError::Body)? {
        if body.len() + chunk.len() > max_body_size {
            return Err(FetchError::BodyTooLarge {
                size: body.len() + chunk.len(),
                limit: max_body_size,
            });
        }
        body.extend_from_slice(&chunk);
    }

    if body.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    let markup = String::from_utf8_lossy(&body).into_owned();
    let elapsed = start.elapsed();
    info!(
        "Fetched {} bytes from {final_url} in {}ms",
        markup.len(),
        elapsed.as_millis()
    );

    Ok(FetchedPage {
        url,
        final_url,
        markup,
        elapsed,
    })
}
