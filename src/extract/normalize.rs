//! Plain-text recovery from inline markup.
//!
//! Tag spans are dropped without regard to tag identity and without inserting
//! a word boundary, so adjacent inline elements can merge (`<b>a</b><i>b</i>`
//! becomes `ab`).
//!
//! A `<` with no `>` anywhere after it is not markup as far as this module is
//! concerned: it and the rest of the text are kept verbatim. A block holding
//! an unterminated tag (`an <b unterminated tag`) therefore keeps the
//! fragment.

use crate::config::MIN_PLAIN_TEXT_LINE_CHARS;

/// Strips every `<...>` span from a block, collapses runs of spaces and trims.
pub fn normalize_text(block: &str) -> String {
    collapse_spaces(&strip_tag_spans(block)).trim().to_string()
}

/// Removes `<` .. first following `>` spans, left to right.
///
/// A `<` with no `>` after it ends the scan and the remainder is kept as text.
pub(crate) fn strip_tag_spans(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out
}

/// Collapses runs of the space character to a single space.
fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !previous_space {
                out.push(c);
            }
            previous_space = true;
        } else {
            out.push(c);
            previous_space = false;
        }
    }
    out
}

/// Last-resort text of a whole document: all tag spans removed, lines
/// trimmed, short lines dropped, remaining lines separated by a blank line.
pub fn extract_plain_text(markup: &str) -> String {
    strip_tag_spans(markup)
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() >= MIN_PLAIN_TEXT_LINE_CHARS)
        .collect::<Vec<_>>()
        .join("\n\n")
}
