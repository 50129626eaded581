//! Scalar field extraction: document title, meta description, meta properties.
//!
//! None of these fail. A missing field becomes an empty string, except the
//! title which falls back to `og:title` and then to a human-readable sentinel.

use super::scan::find_from;
use super::summary::labels;
use crate::config::Locale;

/// Titles shorter than this (in characters) are replaced by `og:title` when available.
const MIN_TITLE_CHARS: usize = 2;

/// Extracts the document title, using the default locale's sentinel when absent.
pub fn extract_title(markup: &str) -> String {
    extract_title_or(markup, labels(Locale::default()).no_title)
}

/// Extracts the document title, returning `sentinel` when neither `<title>`
/// nor `og:title` yields one.
pub fn extract_title_or(markup: &str, sentinel: &str) -> String {
    find_title(markup).unwrap_or_else(|| sentinel.to_string())
}

/// Title resolution without the sentinel: `<title>` text, else `og:title`.
pub fn find_title(markup: &str) -> Option<String> {
    let title = title_element_text(markup).unwrap_or_default();
    if title.chars().count() >= MIN_TITLE_CHARS {
        return Some(title);
    }

    let og_title = extract_meta_property(markup, "og:title");
    if og_title.is_empty() {
        None
    } else {
        Some(og_title)
    }
}

/// Inner text of the first `<title ...>...</title>`, line breaks collapsed and trimmed.
fn title_element_text(markup: &str) -> Option<String> {
    let lowered = markup.to_ascii_lowercase();
    let open = lowered.find("<title")?;
    let start = find_from(markup, ">", open)? + 1;
    let end = find_from(&lowered, "</title>", start)?;

    Some(collapse_line_breaks(&markup[start..end]).trim().to_string())
}

/// Replaces each run of tab/CR/LF characters with a single space.
fn collapse_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if matches!(c, '\t' | '\r' | '\n') {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Extracts the `content` of `<meta name="description">` verbatim.
///
/// Both quote styles are accepted; the attribute name matches
/// case-insensitively. No entity decoding is done. Returns an empty string
/// when absent.
pub fn extract_description(markup: &str) -> String {
    let lowered = markup.to_ascii_lowercase();

    for quote in ['"', '\''] {
        let marker = format!("name={quote}description{quote}");
        if let Some(idx) = lowered.find(&marker) {
            if let Some(value) = quoted_content_after(markup, &lowered, idx, quote) {
                return value.to_string();
            }
        }
    }

    String::new()
}

/// Extracts the `content` following `property="<name>"` (either quote style), trimmed.
///
/// Returns an empty string when the property or its content is absent.
pub fn extract_meta_property(markup: &str, property: &str) -> String {
    let lowered = markup.to_ascii_lowercase();
    let property = property.to_ascii_lowercase();

    let idx = ['"', '\''].iter().find_map(|quote| {
        lowered.find(&format!("property={quote}{property}{quote}"))
    });
    let Some(idx) = idx else {
        return String::new();
    };

    // Nearest content attribute, whichever quote style it uses
    let double = find_from(&lowered, "content=\"", idx).map(|pos| (pos, '"'));
    let single = find_from(&lowered, "content='", idx).map(|pos| (pos, '\''));
    let nearest = match (double, single) {
        (Some(d), Some(s)) => Some(if d.0 <= s.0 { d } else { s }),
        (d, s) => d.or(s),
    };

    nearest
        .and_then(|(_, quote)| quoted_content_after(markup, &lowered, idx, quote))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Value of the first `content=<quote>...<quote>` at or after `from`.
fn quoted_content_after<'a>(
    markup: &'a str,
    lowered: &str,
    from: usize,
    quote: char,
) -> Option<&'a str> {
    let attr = format!("content={quote}");
    let start = find_from(lowered, &attr, from)? + attr.len();
    let end = find_from(markup, &quote.to_string(), start)?;
    Some(&markup[start..end])
}
