//! Error categorization.
//!
//! Maps collaborator errors onto the counters kept by [`ProcessingStats`].

use super::stats::ProcessingStats;
use super::types::{DocStoreError, ErrorType, FetchError};

/// Categorizes a [`FetchError`] into an [`ErrorType`].
///
/// Transport errors are split by the underlying `reqwest` error kind so that
/// timeouts and connection failures can be told apart in `/status`.
pub fn categorize_fetch_error(error: &FetchError) -> ErrorType {
    match error {
        FetchError::InvalidUrl(_) => ErrorType::FetchInvalidUrl,
        FetchError::Request(e) if e.is_timeout() => ErrorType::FetchTimeout,
        FetchError::Request(e) if e.is_connect() => ErrorType::FetchConnectError,
        FetchError::Request(_) => ErrorType::FetchRequestError,
        FetchError::Status(_) => ErrorType::FetchHttpStatus,
        FetchError::Body(e) if e.is_timeout() => ErrorType::FetchTimeout,
        FetchError::Body(_) => ErrorType::FetchBodyError,
        FetchError::EmptyBody => ErrorType::FetchEmptyBody,
        FetchError::BodyTooLarge { .. } => ErrorType::FetchBodyTooLarge,
    }
}

/// Categorizes a [`DocStoreError`] into an [`ErrorType`].
pub fn categorize_store_error(error: &DocStoreError) -> ErrorType {
    match error {
        DocStoreError::NotConfigured(_) => ErrorType::StoreNotConfigured,
        DocStoreError::Transport(_) => ErrorType::StoreTransportError,
        DocStoreError::Decode(_)
        | DocStoreError::Api { .. }
        | DocStoreError::HttpStatus { .. }
        | DocStoreError::MissingRootBlock(_) => ErrorType::StoreApiError,
    }
}

/// Records a fetch failure in the stats.
pub fn record_fetch_error(stats: &ProcessingStats, error: &FetchError) {
    stats.increment_error(categorize_fetch_error(error));
}

/// Records a document-store failure in the stats.
pub fn record_store_error(stats: &ProcessingStats, error: &DocStoreError) {
    stats.increment_error(categorize_store_error(error));
}
