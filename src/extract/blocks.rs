//! Block extraction: inner spans of paragraphs, or of headings and list items
//! when a page has no paragraphs.

use super::scan::{find_from, find_open_tag};
use crate::config::FALLBACK_BLOCK_TAGS;

/// Yields the inner markup of every `<p ...>...</p>`, left to right.
///
/// When there are no paragraphs, falls back to `h1`..`h6` and `li`, grouped
/// by tag name: all `h1` spans come before any `h2` span, and so on. Inner
/// spans keep their inline markup and are trimmed of surrounding whitespace.
pub fn extract_blocks(markup: &str) -> Vec<String> {
    let lowered = markup.to_ascii_lowercase();

    let paragraphs = element_spans(markup, &lowered, "p");
    if !paragraphs.is_empty() {
        return paragraphs;
    }

    FALLBACK_BLOCK_TAGS
        .iter()
        .flat_map(|tag| element_spans(markup, &lowered, tag))
        .collect()
}

/// Non-overlapping inner spans of `<tag ...>...</tag>`.
///
/// Scanning stops at the first start tag that has no closing `>` or no
/// matching end tag.
fn element_spans(markup: &str, lowered: &str, tag: &str) -> Vec<String> {
    let end_tag = format!("</{tag}>");
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(open) = find_open_tag(lowered, tag, cursor) {
        let Some(tag_end) = find_from(lowered, ">", open) else {
            break;
        };
        let inner_start = tag_end + 1;
        let Some(inner_end) = find_from(lowered, &end_tag, inner_start) else {
            break;
        };

        spans.push(markup[inner_start..inner_end].trim().to_string());
        cursor = inner_end + end_tag.len();
    }

    spans
}
