//! Configuration constants.
//!
//! This module defines the fixed parameters of the extraction pipeline and the
//! operational limits of the fetch and document-store collaborators.

use std::time::Duration;

// Extraction pipeline
/// Upper bound on removal iterations per tag name in the tag stripper.
/// Hitting it stops stripping for that tag name and records a degradation.
pub const MAX_STRIP_ITERATIONS: usize = 10_000;

/// Tags whose entire span (start tag, content, end tag) is dropped before text extraction.
pub const NOISE_TAGS: &[&str] = &["script", "style", "iframe", "noscript"];

/// Fallback block tags, scanned in this order when a page has no paragraphs.
pub const FALLBACK_BLOCK_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "li"];

/// A normalized block must be longer than this many characters to survive filtering.
pub const MIN_BLOCK_CHARS: usize = 10;

/// Body lines shorter than this many characters are ignored by the summarizer.
pub const MIN_SUMMARY_LINE_CHARS: usize = 10;

/// Lines of plain-text fallback shorter than this many characters are dropped.
pub const MIN_PLAIN_TEXT_LINE_CHARS: usize = 10;

/// Maximum characters kept per key-point bullet.
pub const BULLET_CHAR_BUDGET: usize = 150;

/// Number of leading body lines always collected regardless of keyword match.
pub const KEY_POINTS_ALWAYS: usize = 3;

/// Collection of key paragraphs stops once this many lines were gathered.
pub const KEY_POINTS_COLLECT_LIMIT: usize = 5;

/// Maximum number of bullets emitted into a summary.
pub const KEY_POINTS_EMITTED: usize = 3;

/// Keywords that mark a body line as a key point (case-insensitive substring match).
pub const SUMMARY_KEYWORDS: &[&str] = &[
    "重要", "关键", "注意", "总结", "结论", "因此", "所以", "首先", "其次", "最后",
    "important", "key", "note", "summary", "conclusion", "therefore", "thus", "first",
    "second", "finally",
];

/// Timestamp layout of an extraction result.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Fetch
/// Default User-Agent string for page fetches.
///
/// Mimics desktop Chrome so that sites serve the same markup a reader would see.
/// Can be overridden via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Page fetch timeout in seconds (slow pages are common, so this is generous)
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 60;

/// Maximum response body size in bytes (5MB)
pub const MAX_RESPONSE_BODY_SIZE: usize = 5 * 1024 * 1024;

/// Maximum accepted URL length
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum length of an error message echoed back in an API response.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;

// Document store
/// Default Feishu open platform endpoint.
pub const DEFAULT_FEISHU_BASE_URL: &str = "https://open.feishu.cn";

/// Document-store request timeout in seconds
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;

/// Destination category used when a write request names none.
pub const DEFAULT_DIRECTION: &str = "自动总结";

/// Page size for wiki node listings (the API maximum).
pub const WIKI_NODE_PAGE_SIZE: u32 = 50;

/// Attempts made while waiting for a freshly created document to become readable.
pub const DOCUMENT_READY_ATTEMPTS: usize = 10;

/// Delay between document readiness checks.
pub const DOCUMENT_READY_INTERVAL: Duration = Duration::from_secs(1);

/// Tenant tokens are refreshed this long before the API-reported expiry.
pub const TOKEN_EXPIRY_MARGIN_SECS: u64 = 60;

// Server
/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
