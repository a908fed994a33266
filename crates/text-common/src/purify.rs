//! Purification: lowercase slug-like canonical form with a chosen separator.

use unicode_normalization::char::is_combining_mark;

use crate::config::PurifyMode;

/// Separator used between stages, swapped for the caller's at the end.
const INTERNAL_SEPARATOR: char = '-';

/// HTML entity leftovers treated like whitespace. `&#039;` must precede `#039;`.
const ENTITY_ARTIFACTS: &[&str] = &["&quot;", "&#039;", "#039;", "#39;", "&amp;"];

/// Purify with [`PurifyMode::Corrected`].
pub fn purify(input: &str, separator: &str) -> String {
    purify_with_mode(input, separator, PurifyMode::Corrected)
}

/// Lowercase `input`, turn spaces and entity artifacts into separators,
/// collapse separator runs, then emit `separator` between the pieces.
pub fn purify_with_mode(input: &str, separator: &str, mode: PurifyMode) -> String {
    let internal = INTERNAL_SEPARATOR.to_string();
    let mut s = input.to_lowercase().replace(' ', &internal);
    for artifact in ENTITY_ARTIFACTS {
        s = s.replace(artifact, &internal);
    }

    let collapsed = match mode {
        PurifyMode::Corrected => collapse_non_alphanumeric(&s),
        PurifyMode::Compatible => collapse_stepwise(s),
    };

    collapsed.replace(INTERNAL_SEPARATOR, separator)
}

/// Letters, digits and the combining marks attached to them.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c)
}

/// Map every run of non-word characters, separators included, to one separator.
fn collapse_non_alphanumeric(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if is_word_char(c) {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push(INTERNAL_SEPARATOR);
            in_run = true;
        }
    }
    out
}

/// Replace runs of 5, then 4, 3 and 2 separators with one, each pass
/// left to right without overlap. Runs longer than 5 may leave pairs behind.
fn collapse_stepwise(mut s: String) -> String {
    let internal = INTERNAL_SEPARATOR.to_string();
    for width in (2..=5).rev() {
        let run = internal.repeat(width);
        s = s.replace(&run, &internal);
    }
    s
}
