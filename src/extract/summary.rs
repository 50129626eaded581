//! Digest assembly: title line, description, key-point bullets and a closing note.

use crate::config::{
    Locale, BULLET_CHAR_BUDGET, KEY_POINTS_ALWAYS, KEY_POINTS_COLLECT_LIMIT, KEY_POINTS_EMITTED,
    MIN_SUMMARY_LINE_CHARS, SUMMARY_KEYWORDS,
};

/// Human-readable strings used in titles, summaries and the final content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub no_title: &'static str,
    pub no_description: &'static str,
    pub title_label: &'static str,
    pub description_label: &'static str,
    pub source_label: &'static str,
    pub summary_label: &'static str,
    pub key_points_header: &'static str,
    pub closing_note: &'static str,
}

static ZH_LABELS: Labels = Labels {
    no_title: "无标题",
    no_description: "无描述",
    title_label: "标题：",
    description_label: "描述：",
    source_label: "来源链接：",
    summary_label: "内容总结：",
    key_points_header: "【关键要点】",
    closing_note: "（此内容为自动生成的总结，详细信息请查看原文）",
};

static EN_LABELS: Labels = Labels {
    no_title: "No title",
    no_description: "No description",
    title_label: "Title: ",
    description_label: "Description: ",
    source_label: "Source: ",
    summary_label: "Summary:",
    key_points_header: "【Key Points】",
    closing_note: "(This is an automatically generated summary; see the original for details.)",
};

/// Returns the label set for `locale`.
pub fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::Zh => &ZH_LABELS,
        Locale::En => &EN_LABELS,
    }
}

/// Builds a digest with the default (Chinese) labels.
pub fn summarize(title: &str, description: &str, body: &str) -> String {
    summarize_with(title, description, body, labels(Locale::default()))
}

/// Builds a digest from a title, an optional description and the body text.
///
/// Sections are joined with `\n`. The key-point header and the closing note
/// are each preceded by a blank line.
pub fn summarize_with(title: &str, description: &str, body: &str, labels: &Labels) -> String {
    let mut parts = vec![format!("【{title}】")];

    if !description.is_empty() {
        parts.push(description.to_string());
    }

    let key_points = key_paragraphs(body);
    if !key_points.is_empty() {
        parts.push(format!("\n{}", labels.key_points_header));
        parts.extend(
            key_points
                .iter()
                .take(KEY_POINTS_EMITTED)
                .map(|line| format!("• {}", truncate_chars(line, BULLET_CHAR_BUDGET))),
        );
    }

    parts.push(format!("\n{}", labels.closing_note));
    parts.join("\n")
}

/// Selects candidate bullet lines from the body.
///
/// Lines are trimmed; lines shorter than [`MIN_SUMMARY_LINE_CHARS`] are
/// skipped. The first [`KEY_POINTS_ALWAYS`] remaining lines are always taken,
/// later ones only when they contain a keyword. Collection stops at
/// [`KEY_POINTS_COLLECT_LIMIT`] lines.
pub fn key_paragraphs(body: &str) -> Vec<&str> {
    let mut collected = Vec::new();

    for line in body.lines().map(str::trim) {
        if line.chars().count() < MIN_SUMMARY_LINE_CHARS {
            continue;
        }
        if collected.len() < KEY_POINTS_ALWAYS || contains_keyword(line) {
            collected.push(line);
            if collected.len() >= KEY_POINTS_COLLECT_LIMIT {
                break;
            }
        }
    }

    collected
}

/// Case-insensitive substring match against the bilingual keyword set.
pub fn contains_keyword(line: &str) -> bool {
    let lowered = line.to_lowercase();
    SUMMARY_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(&keyword.to_lowercase()))
}

/// Prefix of `text` holding at most `max_chars` characters.
///
/// Never splits a multi-byte character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTE: &str = "（此内容为自动生成的总结，详细信息请查看原文）";

    #[test]
    fn test_summary_title_and_description_lead() {
        let summary = summarize("Hi", "Desc", "This is a long enough paragraph.");
        assert!(summary.starts_with("【Hi】\nDesc\n"));
        assert!(summary.ends_with(NOTE));
    }

    #[test]
    fn test_summary_without_description() {
        let summary = summarize("T", "", "");
        assert_eq!(summary, format!("【T】\n\n{NOTE}"));
    }

    #[test]
    fn test_summary_bullets_are_bounded() {
        let body = "line one here\nthis is line two\nthis is line three\nthis is line four";
        let summary = summarize("T", "", body);

        assert!(summary.starts_with("【T】"));
        assert!(summary.contains("\n\n【关键要点】\n"));
        let bullets: Vec<&str> = summary.lines().filter(|l| l.starts_with("• ")).collect();
        assert_eq!(
            bullets,
            vec!["• line one here", "• this is line two", "• this is line three"]
        );
        assert!(bullets.iter().all(|b| b.chars().count() <= 152));
        assert!(summary.ends_with(NOTE));
    }

    #[test]
    fn test_key_paragraphs_keeps_leading_lines_then_keywords() {
        let body = [
            "first plain line of text",
            "second plain line of text",
            "third plain line of text",
            "fourth plain line, ignored",
            "an Important fourth pick",
            "因此这一行也会被选中的内容",
            "the conclusion is the fifth",
            "Finally, never reached",
        ]
        .join("\n");

        let picked = key_paragraphs(&body);
        assert_eq!(picked.len(), 5);
        assert_eq!(picked[3], "an Important fourth pick");
        assert_eq!(picked[4], "因此这一行也会被选中的内容");
    }

    #[test]
    fn test_key_paragraphs_skips_short_and_trims() {
        let picked = key_paragraphs("  short  \n\n   a long enough line   \n");
        assert_eq!(picked, vec!["a long enough line"]);
    }

    #[test]
    fn test_bullets_truncate_on_character_boundary() {
        let long = "长".repeat(200);
        let summary = summarize("T", "", &long);
        let bullet = summary
            .lines()
            .find(|l| l.starts_with("• "))
            .expect("bullet present");
        assert_eq!(bullet.chars().count(), 2 + BULLET_CHAR_BUDGET);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("中文字符", 2), "中文");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_contains_keyword_is_case_insensitive() {
        assert!(contains_keyword("A KEY observation"));
        assert!(contains_keyword("请注意这一点"));
        assert!(!contains_keyword("nothing to see"));
    }

    #[test]
    fn test_english_labels() {
        let summary = summarize_with("T", "", "a long enough line", labels(Locale::En));
        assert!(summary.contains("【Key Points】"));
        assert!(summary.ends_with(labels(Locale::En).closing_note));
        assert_eq!(labels(Locale::En).no_title, "No title");
    }
}
