//! Application configuration and constants.
//!
//! This module provides:
//! - Extraction pipeline constants (thresholds, budgets, keyword set)
//! - Fetch and document-store limits
//! - CLI/environment option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Command, Config, Locale, LogFormat, LogLevel};
