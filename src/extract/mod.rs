//! Markup-to-text extraction and summarization.
//!
//! This module turns raw page markup into a digest:
//! - Tag stripping of noise elements (script, style, iframe, noscript)
//! - Field extraction (title, meta description, meta properties)
//! - Block extraction (paragraphs, or headings and list items as fallback)
//! - Text normalization and relevance filtering
//! - Summary and final content assembly
//!
//! Everything here is synchronous, pure and infallible. Absent fields degrade
//! to empty strings or a sentinel, and malformed markup yields a degraded
//! result instead of an error.

mod blocks;
mod fields;
mod filter;
mod normalize;
mod scan;
mod strip;
mod summary;

use chrono::Local;
use log::{debug, info};
use serde::Serialize;

use crate::config::{Locale, FALLBACK_BLOCK_TAGS, NOISE_TAGS, TIMESTAMP_FORMAT};
use crate::error_handling::WarningType;

// Re-export public API
pub use blocks::extract_blocks;
pub use fields::{
    extract_description, extract_meta_property, extract_title, extract_title_or, find_title,
};
pub use filter::{filter_relevant, is_relevant};
pub use normalize::{extract_plain_text, normalize_text};
pub use strip::{strip_tags, strip_tags_with_report};
pub use summary::{
    contains_keyword, key_paragraphs, labels, summarize, summarize_with, truncate_chars, Labels,
};

/// Options for one extraction call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Language of the sentinel, labels and closing note.
    pub locale: Locale,
}

/// Counters describing how an extraction went.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionDiagnostics {
    pub markup_len: usize,
    pub cleaned_len: usize,
    pub paragraph_tags: usize,
    pub heading_tags: usize,
    pub list_tags: usize,
    pub script_tags: usize,
    pub style_tags: usize,
    /// Blocks found before filtering.
    pub candidate_blocks: usize,
    pub surviving_blocks: usize,
    /// Tag names whose stripping stopped at the iteration cap.
    pub capped_tags: Vec<String>,
    pub used_plain_text_fallback: bool,
    pub title_found: bool,
    pub description_found: bool,
}

impl ExtractionDiagnostics {
    /// Degradations observed during the extraction, one entry per kind.
    pub fn warnings(&self) -> Vec<WarningType> {
        let mut warnings = Vec::new();
        if !self.title_found {
            warnings.push(WarningType::MissingTitle);
        }
        if !self.description_found {
            warnings.push(WarningType::MissingDescription);
        }
        if self.surviving_blocks == 0 {
            warnings.push(WarningType::NoRelevantBlocks);
        }
        if !self.capped_tags.is_empty() {
            warnings.push(WarningType::StripIterationCap);
        }
        warnings
    }
}

/// Result of one extraction call.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    pub title: String,
    pub description: String,
    pub source_url: String,
    /// Normalized blocks that survived relevance filtering, in document order.
    pub blocks: Vec<String>,
    pub summary: String,
    /// Title, description, source and summary formatted for archival.
    pub final_content: String,
    pub timestamp: String,
    pub diagnostics: ExtractionDiagnostics,
}

/// Runs the full pipeline over `markup` with default options.
pub fn extract(markup: &str, source_url: &str) -> ExtractionResult {
    extract_with_options(markup, source_url, &ExtractOptions::default())
}

/// Runs the full pipeline over `markup`.
///
/// The caller is expected to pass non-empty markup; empty markup still
/// produces a result (sentinel title, empty body).
pub fn extract_with_options(
    markup: &str,
    source_url: &str,
    options: &ExtractOptions,
) -> ExtractionResult {
    let labels = labels(options.locale);
    let lowered = markup.to_ascii_lowercase();

    let mut diagnostics = ExtractionDiagnostics {
        markup_len: markup.len(),
        paragraph_tags: scan::count_open_tags(&lowered, "p"),
        heading_tags: FALLBACK_BLOCK_TAGS
            .iter()
            .filter(|tag| tag.starts_with('h'))
            .map(|tag| scan::count_open_tags(&lowered, tag))
            .sum(),
        list_tags: scan::count_open_tags(&lowered, "li"),
        script_tags: scan::count_open_tags(&lowered, "script"),
        style_tags: scan::count_open_tags(&lowered, "style"),
        ..Default::default()
    };
    debug!(
        "Markup for {}: {} bytes, {} paragraphs, {} headings, {} list items, {} scripts, {} styles",
        source_url,
        diagnostics.markup_len,
        diagnostics.paragraph_tags,
        diagnostics.heading_tags,
        diagnostics.list_tags,
        diagnostics.script_tags,
        diagnostics.style_tags
    );

    let found_title = find_title(markup);
    diagnostics.title_found = found_title.is_some();
    let title = found_title.unwrap_or_else(|| labels.no_title.to_string());

    let description = extract_description(markup);
    diagnostics.description_found = !description.is_empty();
    debug!("Title: {title:?}, description: {} bytes", description.len());

    let (cleaned, capped_tags) = strip_tags_with_report(markup, NOISE_TAGS);
    diagnostics.cleaned_len = cleaned.len();
    diagnostics.capped_tags = capped_tags;

    let candidates = extract_blocks(&cleaned);
    diagnostics.candidate_blocks = candidates.len();
    let blocks = filter_relevant(candidates.iter().map(|block| normalize_text(block)).collect());
    diagnostics.surviving_blocks = blocks.len();
    debug!(
        "Found {} candidate blocks, {} relevant",
        diagnostics.candidate_blocks, diagnostics.surviving_blocks
    );

    let body = if blocks.is_empty() {
        diagnostics.used_plain_text_fallback = true;
        debug!("No relevant blocks for {source_url}, using plain-text fallback");
        extract_plain_text(&cleaned)
    } else {
        blocks.join("\n\n")
    };

    let summary = summarize_with(&title, &description, &body, labels);
    let final_content = compose_final_content(&title, &description, source_url, &summary, labels);

    info!(
        "Extracted {:?} from {} ({} blocks, summary {} chars)",
        title,
        source_url,
        blocks.len(),
        summary.chars().count()
    );

    ExtractionResult {
        title,
        description,
        source_url: source_url.to_string(),
        blocks,
        summary,
        final_content,
        timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        diagnostics,
    }
}

/// Formats the archival content: title, description, source and summary sections.
pub fn compose_final_content(
    title: &str,
    description: &str,
    source_url: &str,
    summary: &str,
    labels: &Labels,
) -> String {
    let description = if description.is_empty() {
        labels.no_description
    } else {
        description
    };
    format!(
        "{}{title}\n\n{}{description}\n\n{}{source_url}\n\n{}\n{summary}",
        labels.title_label, labels.description_label, labels.source_label, labels.summary_label
    )
}
