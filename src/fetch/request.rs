//! Browser-like request profile for page fetches.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, PRAGMA};

/// Accept header sent with page requests.
pub(crate) const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Accept-Language header sent with page requests (Chinese first, English fallback).
pub(crate) const ACCEPT_LANGUAGE_VALUE: &str = "zh-CN,zh;q=0.9,en;q=0.8";

/// Applies the browser request headers to a `reqwest::RequestBuilder`.
///
/// The User-Agent comes from the client. Accept-Encoding is left to reqwest
/// so that it only advertises encodings it can decode.
pub(crate) fn apply_browser_headers(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder
        .header(ACCEPT, ACCEPT_HTML)
        .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_VALUE)
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
}
