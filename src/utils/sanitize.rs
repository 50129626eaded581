//! Sanitizing of error messages echoed back to API clients.
//!
//! Upstream errors can carry control characters and arbitrarily long bodies
//! (for example a remote API's error response). Messages are cleaned and
//! capped before they are placed in a JSON response.

use crate::config::MAX_ERROR_MESSAGE_LENGTH;

/// Removes control characters other than tab, newline and carriage return.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Sanitizes a message and caps it at [`MAX_ERROR_MESSAGE_LENGTH`] characters.
///
/// A truncated message ends with a marker giving the original length.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    let total = sanitized.chars().count();
    if total <= MAX_ERROR_MESSAGE_LENGTH {
        return sanitized;
    }

    // Leave room for the marker
    let keep = MAX_ERROR_MESSAGE_LENGTH.saturating_sub(50);
    let prefix: String = sanitized.chars().take(keep).collect();
    format!("{prefix}... (truncated, original length: {total} chars)")
}
