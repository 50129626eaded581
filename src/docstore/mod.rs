//! Remote document store (Feishu wiki).
//!
//! Digests are filed as `docx` documents under a root node of a wiki space
//! named after their destination category ("direction"). This module provides:
//! - Tenant token acquisition and caching
//! - Direction lookup (paginated) and creation, with a shared token cache
//! - Document creation, readiness polling and content writing

mod cache;
mod client;
mod types;

// Re-export public API
pub use cache::DirectionCache;
pub use client::{FeishuClient, FeishuSettings};
pub use types::{CreatedDocument, Direction, WrittenDocument};
