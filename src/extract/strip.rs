//! Removal of whole element spans (`<tag ...> ... </tag>`) from markup.

use log::warn;

use super::scan::floor_boundary;
use crate::config::MAX_STRIP_ITERATIONS;

/// Removes every `<tag ...> ... </tag>` span for each name in `tag_names`.
///
/// Tag names match case-insensitively; text outside removed spans keeps its
/// original case. A start tag without a matching end tag loses only the
/// start tag itself. Passes over all names repeat until one removes nothing,
/// so a span formed by joining the text around another name's span is
/// removed too. Stripping of a name stops early (with a warning) when a span
/// is still pending after [`MAX_STRIP_ITERATIONS`] removals.
pub fn strip_tags(markup: &str, tag_names: &[&str]) -> String {
    strip_tags_with_report(markup, tag_names).0
}

/// Like [`strip_tags`], also returning the tag names whose stripping hit the
/// iteration cap.
pub fn strip_tags_with_report(markup: &str, tag_names: &[&str]) -> (String, Vec<String>) {
    strip_tags_capped(markup, tag_names, MAX_STRIP_ITERATIONS)
}

pub(crate) fn strip_tags_capped(
    markup: &str,
    tag_names: &[&str],
    max_iterations: usize,
) -> (String, Vec<String>) {
    let mut content = markup.to_string();
    let mut lowered = markup.to_ascii_lowercase();
    let tags: Vec<String> = tag_names.iter().map(|tag| tag.to_ascii_lowercase()).collect();
    let mut removals = vec![0usize; tags.len()];
    let mut capped: Vec<String> = Vec::new();

    loop {
        let mut removed_in_pass = false;

        for (tag, removed) in tags.iter().zip(removals.iter_mut()) {
            if capped.contains(tag) {
                continue;
            }
            let start_tag = format!("<{tag}");
            let end_tag = format!("</{tag}>");
            let mut cursor = 0;

            while let Some(start) = lowered[cursor..].find(&start_tag).map(|rel| cursor + rel) {
                let end = match lowered[start..].find(&end_tag) {
                    Some(rel) => start + rel + end_tag.len(),
                    // Unterminated element: drop the start tag only
                    None => match content[start..].find('>') {
                        Some(rel) => start + rel + 1,
                        None => break,
                    },
                };

                if *removed >= max_iterations {
                    warn!(
                        "Stopped removing <{}> after {} iterations, markup may be malformed",
                        tag, max_iterations
                    );
                    capped.push(tag.clone());
                    break;
                }

                content.replace_range(start..end, "");
                lowered.replace_range(start..end, "");
                *removed += 1;
                removed_in_pass = true;

                // The join may form a new start tag that begins just before `start`
                cursor = floor_boundary(&lowered, start.saturating_sub(start_tag.len()));
            }
        }

        if !removed_in_pass {
            break;
        }
    }

    (content, capped)
}
