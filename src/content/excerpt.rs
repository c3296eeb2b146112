use lazy_static::lazy_static;
use regex::Regex;

use crate::content::{extract_text, ContentBody};

pub const DEFAULT_EXCERPT_LENGTH: usize = 155;

// A preamble segment shorter than this is skipped
const MIN_SEGMENT_LEN: usize = 30;

const BOILERPLATE_PHRASES: [&str; 2] = [
    "originally published on linkedin",
    "read it there",
];

lazy_static! {
    static ref MARKDOWN_SYMBOLS: Regex = Regex::new(r"[#*_\[\]()>`~]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!] ").unwrap();
    static ref TRAILING_WORD: Regex = Regex::new(r"\s+\S*$").unwrap();
}

/// Plain text summary of a body, at most `max_length` characters plus an ellipsis.
///
/// Markdown symbols are removed, repost notices in front of the text are
/// skipped and the result is cut at a word boundary.
pub fn excerpt(body: Option<&ContentBody>, max_length: usize) -> String {
    let text = extract_text(body);
    let text = sanitize(&text);
    let text = skip_preamble(text);
    truncate_at_word(text, max_length)
}

/// Removes markdown formatting symbols and collapses whitespace.
pub fn sanitize(text: &str) -> String {
    let text = MARKDOWN_SYMBOLS.replace_all(text, "");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// True when a sentence is real content and not a "this was posted elsewhere" notice.
pub fn is_content_segment(segment: &str) -> bool {
    let lower = segment.to_lowercase();
    if BOILERPLATE_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
        return false;
    }
    segment.trim().chars().count() > MIN_SEGMENT_LEN
}

fn skip_preamble(text: String) -> String {
    let skipped = {
        let segments: Vec<&str> = SENTENCE_BREAK.split(&text).collect();
        match segments.iter().position(|s| is_content_segment(s)) {
            Some(start) if start > 0 => Some(segments[start..].join(". ")),
            _ => None,
        }
    };
    skipped.unwrap_or(text)
}

fn truncate_at_word(text: String, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text;
    }

    let cut: String = text.chars().take(max_length).collect();
    let cut = TRAILING_WORD.replace(&cut, "");
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use crate::content::{Block, Span};
    use crate::test_data::{LINKEDIN_REPOST, POST_DATA_MD};

    use super::*;

    fn plain(text: &str) -> ContentBody {
        ContentBody::PlainText(text.to_string())
    }

    #[test]
    fn test_empty() {
        assert_eq!(excerpt(None, DEFAULT_EXCERPT_LENGTH), "");
        assert_eq!(excerpt(Some(&plain("")), DEFAULT_EXCERPT_LENGTH), "");
        assert_eq!(excerpt(Some(&plain("  ## ** \n")), DEFAULT_EXCERPT_LENGTH), "");
    }

    #[test]
    fn test_sanitize() {
        let res = sanitize("## A [link](http://x.com) and `code`, ~~gone~~ > quoted\n\n**bold** _it_");
        assert_eq!(res, "A linkhttp://x.com and code, gone quoted bold it");
    }

    #[test]
    fn test_sanitize_plain_text_only_collapses_whitespace() {
        let text = "Nothing to strip here,\n  just   some words.";
        assert_eq!(sanitize(text), "Nothing to strip here, just some words.");
    }

    #[test]
    fn test_skip_linkedin_preamble() {
        let res = excerpt(Some(&plain(LINKEDIN_REPOST)), DEFAULT_EXCERPT_LENGTH);
        assert_eq!(res, "This is the real content of the post which is long enough to pass the length check easily.");
    }

    #[test]
    fn test_skip_short_segments() {
        let text = "Hi! Quick note. This sentence is definitely longer than thirty characters. And so on";
        let res = excerpt(Some(&plain(text)), DEFAULT_EXCERPT_LENGTH);
        assert_eq!(res, "This sentence is definitely longer than thirty characters. And so on");
    }

    #[test]
    fn test_boilerplate_is_case_insensitive() {
        assert!(!is_content_segment("This post was ORIGINALLY PUBLISHED ON LINKEDIN last week"));
        assert!(!is_content_segment("If you prefer, you can read it there instead of here"));
        assert!(is_content_segment("A perfectly normal sentence about cricket scores"));
        assert!(!is_content_segment("   short   "));
    }

    #[test]
    fn test_first_segment_accepted_keeps_text() {
        let text = "The very first sentence is long enough to count. Short. Another one";
        let res = excerpt(Some(&plain(text)), DEFAULT_EXCERPT_LENGTH);
        assert_eq!(res, text);
    }

    #[test]
    fn test_no_segment_accepted_keeps_text() {
        let text = "Originally published on LinkedIn. Read it there. Tiny";
        let res = excerpt(Some(&plain(text)), DEFAULT_EXCERPT_LENGTH);
        assert_eq!(res, text);
    }

    #[test]
    fn test_truncate_at_word_boundary() {
        let text = "word ".repeat(40);
        let res = excerpt(Some(&plain(&text)), 22);
        assert_eq!(res, "word word word word...");

        let res = excerpt(Some(&plain(&text)), 23);
        assert_eq!(res, "word word word word...");

        let res = excerpt(Some(&plain(&text)), DEFAULT_EXCERPT_LENGTH);
        assert!(res.ends_with("word..."));
        assert!(res.chars().count() <= DEFAULT_EXCERPT_LENGTH + 3);
    }

    #[test]
    fn test_truncate_single_long_word() {
        let text = "x".repeat(200);
        let res = excerpt(Some(&plain(&text)), DEFAULT_EXCERPT_LENGTH);
        assert_eq!(res, format!("{}...", "x".repeat(155)));
    }

    #[test]
    fn test_exact_length_has_no_ellipsis() {
        let text = "a".repeat(DEFAULT_EXCERPT_LENGTH);
        let res = excerpt(Some(&plain(&text)), DEFAULT_EXCERPT_LENGTH);
        assert_eq!(res, text);
    }

    #[test]
    fn test_multibyte_characters() {
        let text = "café ".repeat(10);
        let res = excerpt(Some(&plain(&text)), 12);
        assert_eq!(res, "café café...");
    }

    #[test]
    fn test_rich_blocks() {
        let body = ContentBody::RichBlocks(vec![
            Block::Text { spans: vec![Span { text: "Originally published on LinkedIn".to_string() }] },
            Block::Other,
            Block::Text { spans: vec![Span { text: "! The block based body has enough text to be the excerpt".to_string() }] },
        ]);
        let res = excerpt(Some(&body), DEFAULT_EXCERPT_LENGTH);
        assert_eq!(res, "The block based body has enough text to be the excerpt");
    }

    #[test]
    fn test_markdown_post() {
        let res = excerpt(Some(&plain(POST_DATA_MD)), DEFAULT_EXCERPT_LENGTH);
        assert_eq!(res, "What I learned after 20+ years of software development How to be a great software engineer? Someone asked me this question today and I didn’t have an...");
    }
}
