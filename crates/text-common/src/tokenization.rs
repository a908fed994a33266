//! Search-index token strings built from one or more free-text fields.

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::config::TextConfig;
use crate::dedupe::dedupe;
use crate::normalization::normalize_field;
use crate::purify::purify_with_mode;
use crate::stop_words::StopWordTable;

/// Symbols blanked out after stop-word removal.
const EXTRA_REPLACEMENTS: &[char] = &[
    '~', '`', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '_', '=', '+', '<', ',', '>',
    '.', '?', '/', ':', ';', '\'', '{', '[', '}', ']', '\\', '|',
];

static DEFAULT_TOKENIZER: Lazy<Tokenizer> =
    Lazy::new(|| Tokenizer::from_config(TextConfig::default()));

/// Tokenize with the default configuration and the built-in stop-word lists.
pub fn tokenize<S: AsRef<str>>(fields: &[S]) -> String {
    DEFAULT_TOKENIZER.tokenize(fields)
}

/// Tokenizer bound to a configuration and an injected stop-word table.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    config: TextConfig,
    stop_words: StopWordTable,
}

impl Tokenizer {
    /// The language code is trimmed and lowercased to match the table's keys.
    pub fn new(mut config: TextConfig, stop_words: StopWordTable) -> Self {
        config.language = config.language.trim().to_ascii_lowercase();
        if !stop_words.has_language(&config.language) {
            warn!(
                language = %config.language,
                "no stop words registered, stop-word removal disabled"
            );
        }
        Self { config, stop_words }
    }

    /// Built-in lists extended with the words listed in `config.stop_words`.
    pub fn from_config(config: TextConfig) -> Self {
        let stop_words = StopWordTable::builtin().extend(&config.stop_words);
        Self::new(config, stop_words)
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWordTable {
        &self.stop_words
    }

    /// Merge `fields` into a sorted, de-duplicated, stop-word-free token string.
    ///
    /// With [`crate::config::PurifyMode::Corrected`] the output tokens are unique and in
    /// ascending byte order. In [`crate::config::PurifyMode::Compatible`] punctuation is only
    /// blanked after sorting, so tokens like `fox.` and `fox` may both end up
    /// as `fox`.
    pub fn tokenize<S: AsRef<str>>(&self, fields: &[S]) -> String {
        let mode = self.config.purify_mode;

        let mut full_text = String::new();
        for field in fields {
            full_text.push(' ');
            full_text.push_str(&normalize_field(field.as_ref()));
        }

        let purified = purify_with_mode(&full_text, " ", mode);
        let candidates: Vec<&str> = purified.split_whitespace().collect();
        let mut unique = dedupe(&candidates);
        unique.sort_unstable();
        debug!(
            candidates = candidates.len(),
            unique = unique.len(),
            "deduplicated tokens"
        );

        let mut padded = format!(" {} ", unique.join(" "));
        for stop_word in self.stop_words.words(&self.config.language) {
            padded = padded.replace(&format!(" {stop_word} "), " ");
        }

        let blanked: String = padded
            .trim_matches(' ')
            .chars()
            .map(|c| if EXTRA_REPLACEMENTS.contains(&c) { ' ' } else { c })
            .collect();

        purify_with_mode(&blanked, " ", mode)
            .trim_matches(' ')
            .to_string()
    }
}
