use unicode_normalization::UnicodeNormalization;

use crate::markup::strip_tags;

/// Prepare one input field for tokenization: strip tags, remove BOMs,
/// NFC-normalize and lowercase.
pub fn normalize_field(text: &str) -> String {
    let stripped = strip_tags(text);
    let no_bom = stripped.replace('\u{FEFF}', "");
    let nfc: String = no_bom.nfc().collect();
    nfc.to_lowercase()
}

/// Cut `s` to at most `limit` bytes, backing off to the previous char boundary.
pub fn truncate_at_char_boundary(s: &str, limit: usize) -> &str {
    if s.len() <= limit {
        return s;
    }
    let mut end = limit;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
