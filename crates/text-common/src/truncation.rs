//! Character- and word-budget truncation of display text.

use crate::markup::strip_tags;
use crate::normalization::truncate_at_char_boundary;

pub const ELLIPSIS: &str = "...";

/// Shorten `input` after stripping markup.
///
/// In character mode the budget counts UTF-8 bytes and the cut backs off to
/// a char boundary, so the result never exceeds `limit` bytes. In word mode
/// the text is split on single spaces and at most `limit` words are kept;
/// the ellipsis is only appended when `add_ellipsis` is set and words were
/// actually dropped. Negative limits behave like zero.
pub fn shorten(input: &str, limit: i64, use_words: bool, add_ellipsis: bool) -> String {
    if input.is_empty() {
        return String::new();
    }
    let text = strip_tags(input);
    let limit = usize::try_from(limit).unwrap_or(0);

    if !use_words {
        return truncate_at_char_boundary(&text, limit).to_string();
    }

    let words: Vec<&str> = text.split(' ').collect();
    if words.len() <= limit {
        return words.join(" ");
    }
    let mut out = words[..limit].join(" ");
    if add_ellipsis {
        out.push_str(ELLIPSIS);
    }
    out
}
