//! Immutable configuration shared by the purifier and tokenizer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SEPARATOR: &str = "-";
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("language code must be two ASCII letters, got {0:?}")]
    InvalidLanguage(String),
    #[error("purify separator must not be empty")]
    EmptySeparator,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// How [`crate::purify::purify_with_mode`] treats non-alphanumeric runs.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PurifyMode {
    /// Collapse every non-alphanumeric run and every separator run to one separator.
    #[default]
    Corrected,
    /// Leave punctuation in place and collapse separator runs in fixed 5,4,3,2 steps.
    Compatible,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TextConfig {
    pub purify_separator: String,
    pub language: String,
    pub purify_mode: PurifyMode,
    /// Extra stop words per language, appended to the built-in lists.
    pub stop_words: BTreeMap<String, Vec<String>>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            purify_separator: DEFAULT_SEPARATOR.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            purify_mode: PurifyMode::default(),
            stop_words: BTreeMap::new(),
        }
    }
}

impl TextConfig {
    /// Parse a TOML document, apply defaults, and validate the result.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let mut config: TextConfig = toml::from_str(source)?;
        config.apply_defaults();
        config.validate()?;
        Ok(config)
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self.apply_defaults();
        self
    }

    pub fn with_purify_mode(mut self, mode: PurifyMode) -> Self {
        self.purify_mode = mode;
        self
    }

    fn apply_defaults(&mut self) {
        if self.language.trim().is_empty() {
            self.language = DEFAULT_LANGUAGE.to_string();
        }
        self.language = self.language.trim().to_ascii_lowercase();
    }

    /// Reject values the pipeline cannot use. Language codes must be two
    /// lowercase ASCII letters. A language without a stop-word list is
    /// accepted; tokenization then skips stop-word removal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.language.len() != 2 || !self.language.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ConfigError::InvalidLanguage(self.language.clone()));
        }
        if self.purify_separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(())
    }
}
