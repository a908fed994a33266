//! Markup helpers: tag stripping for indexing and light HTML decoration for display.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(http|ftp|https)://([\w\-]+(?:(?:\.[\w\-]+)+))([\w\-.,@?^=%&;:/~+#]*[\w\-@?^=%&;/~+#])?",
    )
    .unwrap()
});

/// Remove closed `<...>` tags, keeping the text between them.
///
/// A `<` only opens a tag when followed by a letter, `/`, `!` or `?`, so
/// comparisons like `a < b` survive. An opening tag with no closing `>`
/// is kept verbatim.
pub fn strip_tags(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find('<') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let starts_tag = after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'));
        if !starts_tag {
            result.push('<');
            rest = after;
            continue;
        }
        match after.find('>') {
            Some(close) => rest = &after[close + 1..],
            None => {
                result.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

/// Replace every newline with `<br />`.
pub fn nl2br(s: &str) -> String {
    s.replace('\n', "<br />")
}

/// Wrap bare http, https and ftp URLs in anchors opening a new tab.
pub fn add_hrefs(s: &str) -> String {
    URL_RE
        .replace_all(s, r#"<a href="$0" target="_blank">$0</a>"#)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unterminated_tag_is_kept() {
        assert_eq!(strip_tags("hello <b"), "hello <b");
    }

    #[test]
    fn lone_angle_bracket_is_text() {
        assert_eq!(strip_tags("1 < 2 and <i>3</i> > 2"), "1 < 2 and 3 > 2");
    }

    #[test]
    fn comments_and_declarations_are_removed() {
        assert_eq!(strip_tags("<!DOCTYPE html><!-- x -->body"), "body");
    }
}
