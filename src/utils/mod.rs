//! Utility functions.
//!
//! This module provides:
//! - URL validation and normalization
//! - Sanitization of error messages returned by the API

mod sanitize;
mod url;

pub use sanitize::{sanitize_and_truncate_error_message, sanitize_error_message};
pub use url::validate_and_normalize_url;
