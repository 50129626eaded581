//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for the fetch and document-store collaborators
//! - Processing statistics tracking (errors, warnings)
//! - Categorization of collaborator errors into counters
//!
//! Counters are categorized into:
//! - **Errors**: Failures that abort a request
//! - **Warnings**: Degraded extractions that still completed

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_fetch_error, categorize_store_error, record_fetch_error, record_store_error,
};
pub use stats::ProcessingStats;
pub use types::{DocStoreError, ErrorType, FetchError, InitializationError, WarningType};
