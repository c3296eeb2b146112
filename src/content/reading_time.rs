use crate::content::{extract_text, ContentBody};

pub const WORDS_PER_MINUTE: usize = 225;

/// Estimated reading time in minutes, never less than one.
pub fn reading_time(body: Option<&ContentBody>) -> u32 {
    let text = extract_text(body);
    let word_count = text.split_whitespace().count();
    let minutes = word_count.div_ceil(WORDS_PER_MINUTE);
    minutes.max(1) as u32
}
