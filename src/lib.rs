//! page_digest library: web page fetching, text extraction and summarization
//!
//! This library fetches a page, turns its raw markup into a title, a
//! description, a list of readable paragraphs and a short digest, and can file
//! that digest as a document in a Feishu wiki.
//!
//! The extraction core ([`extract`]) is synchronous and infallible. Fetching
//! ([`fetch`]) and the document store ([`docstore`]) are async and return typed
//! errors.
//!
//! # Example
//!
//! ```
//! use page_digest::extract::extract;
//!
//! let html = r#"<title>Hi</title><p>This is a long enough paragraph.</p>"#;
//! let result = extract(html, "https://example.com/hi");
//! assert_eq!(result.title, "Hi");
//! assert!(result.summary.starts_with("【Hi】"));
//! ```
//!
//! # Requirements
//!
//! Fetching, the document store and the server require a Tokio runtime.

pub mod config;
pub mod docstore;
pub mod error_handling;
pub mod extract;
pub mod fetch;
pub mod initialization;
mod run;
pub mod server;
pub mod utils;

// Re-export public API
pub use config::{Cli, Command, Config, Locale, LogFormat, LogLevel};
pub use extract::{extract, extract_with_options, ExtractOptions, ExtractionResult};
pub use run::{init_app_state, run_digest, run_server};
