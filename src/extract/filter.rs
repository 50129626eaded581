//! Relevance filtering of normalized blocks.

use crate::config::MIN_BLOCK_CHARS;

/// True when `text` is longer than [`MIN_BLOCK_CHARS`] characters.
pub fn is_relevant(text: &str) -> bool {
    text.chars().count() > MIN_BLOCK_CHARS
}

/// Keeps relevant blocks in their original order.
pub fn filter_relevant(blocks: Vec<String>) -> Vec<String> {
    blocks.into_iter().filter(|block| is_relevant(block)).collect()
}
