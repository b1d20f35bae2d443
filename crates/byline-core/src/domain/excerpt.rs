//! Excerpt derivation for posts created without one.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum length of a derived excerpt, in characters.
pub const EXCERPT_LEN: usize = 150;

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup tag pattern is valid"));

/// Derive an excerpt from post content: strip markup tags, keep the first
/// [`EXCERPT_LEN`] characters, and append `...` when the stripped text was
/// longer than that.
///
/// The create path calls this exactly once, before persistence, and only
/// when the caller supplied no excerpt. Updates never re-derive.
pub fn derive_excerpt(content: &str) -> String {
    let plain = MARKUP_TAG.replace_all(content, "");

    // Count characters, not bytes, so truncation cannot split a code point.
    let mut excerpt = String::new();
    let mut chars = plain.chars();
    excerpt.extend(chars.by_ref().take(EXCERPT_LEN));
    if chars.next().is_some() {
        excerpt.push_str("...");
    }
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup_tags() {
        assert_eq!(derive_excerpt("<p>Hello world</p>"), "Hello world");
    }

    #[test]
    fn strips_nested_and_attributed_tags() {
        assert_eq!(
            derive_excerpt(r#"<div class="intro"><b>Bold</b> and <i>italic</i></div>"#),
            "Bold and italic"
        );
    }

    #[test]
    fn short_content_is_kept_verbatim() {
        assert_eq!(derive_excerpt("Just a short note"), "Just a short note");
    }

    #[test]
    fn long_content_is_truncated_with_ellipsis() {
        let content = "a".repeat(400);
        let excerpt = derive_excerpt(&content);
        assert_eq!(excerpt.chars().count(), EXCERPT_LEN + 3);
        assert!(excerpt.ends_with("..."));
        assert!(excerpt.starts_with(&"a".repeat(EXCERPT_LEN)));
    }

    #[test]
    fn exactly_max_len_gets_no_ellipsis() {
        let content = "b".repeat(EXCERPT_LEN);
        assert_eq!(derive_excerpt(&content), content);
    }

    #[test]
    fn one_past_max_len_gets_ellipsis() {
        let content = "c".repeat(EXCERPT_LEN + 1);
        let excerpt = derive_excerpt(&content);
        assert_eq!(excerpt.chars().count(), EXCERPT_LEN + 3);
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let content = "é".repeat(200);
        let excerpt = derive_excerpt(&content);
        assert!(excerpt.starts_with(&"é".repeat(EXCERPT_LEN)));
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn tags_are_stripped_before_measuring_length() {
        // 140 visible chars wrapped in markup that would push the raw
        // string past the limit.
        let visible = "x".repeat(140);
        let content = format!("<article><p>{visible}</p></article>");
        assert_eq!(derive_excerpt(&content), visible);
    }

    #[test]
    fn empty_content_yields_empty_excerpt() {
        assert_eq!(derive_excerpt(""), "");
        assert_eq!(derive_excerpt("<br>"), "");
    }
}
