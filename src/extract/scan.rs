//! Positional scanning helpers shared by the extraction passes.
//!
//! Matching is case-insensitive by searching an ASCII-lowercased copy of the
//! markup. `to_ascii_lowercase` never changes byte lengths, so every offset
//! found in the lowered copy is valid in the original text.

/// Finds `needle` in `haystack` starting at byte offset `from`.
pub(crate) fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack
        .get(from..)
        .and_then(|rest| rest.find(needle))
        .map(|rel| from + rel)
}

/// True when the byte following a tag name ends the name (`<p>`, `<p class=..>`, `<br/>`).
fn ends_tag_name(next: Option<u8>) -> bool {
    match next {
        None => true,
        Some(b) => b == b'>' || b == b'/' || b.is_ascii_whitespace(),
    }
}

/// Finds the next opening tag `<name` whose name is exactly `name`.
///
/// `lowered` must be ASCII-lowercased and `name` lowercase. `<p` does not
/// match `<pre>` and `<li` does not match `<link>`.
pub(crate) fn find_open_tag(lowered: &str, name: &str, from: usize) -> Option<usize> {
    let needle = format!("<{name}");
    let bytes = lowered.as_bytes();
    let mut cursor = from;
    while let Some(pos) = find_from(lowered, &needle, cursor) {
        let after = pos + needle.len();
        if ends_tag_name(bytes.get(after).copied()) {
            return Some(pos);
        }
        cursor = after;
    }
    None
}

/// Counts opening tags named exactly `name`.
pub(crate) fn count_open_tags(lowered: &str, name: &str) -> usize {
    let mut count = 0;
    let mut cursor = 0;
    while let Some(pos) = find_open_tag(lowered, name, cursor) {
        count += 1;
        cursor = pos + name.len() + 1;
    }
    count
}

/// Moves `index` back to the nearest char boundary of `text`.
pub(crate) fn floor_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
