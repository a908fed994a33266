//! Text preparation helpers for storage, display, and search indexing.
//!
//! The core is a pure pipeline: markup stripping, purification into
//! slug-like form, order-preserving de-duplication, and stop-word removal,
//! producing a sorted token string for full-text indexing. Word-aware
//! truncation and a handful of formatting helpers sit alongside it.

pub mod config;
pub mod dates;
pub mod dedupe;
pub mod hashing;
pub mod markup;
pub mod names;
pub mod normalization;
pub mod purify;
pub mod reporting;
pub mod stop_words;
pub mod tokenization;
pub mod truncation;

pub use config::{ConfigError, PurifyMode, TextConfig};
pub use dedupe::dedupe;
pub use purify::{purify, purify_with_mode};
pub use stop_words::StopWordTable;
pub use tokenization::{tokenize, Tokenizer};
pub use truncation::shorten;
