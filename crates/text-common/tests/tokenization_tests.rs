use std::collections::BTreeMap;

use text_common::config::{PurifyMode, TextConfig};
use text_common::stop_words::StopWordTable;
use text_common::tokenization::*;

fn without_stop_words(mode: PurifyMode) -> Tokenizer {
    Tokenizer::new(
        TextConfig::default().with_purify_mode(mode),
        StopWordTable::empty(),
    )
}

#[test]
fn tokenize_merges_sorts_and_dedupes_fields() {
    let tokenizer = without_stop_words(PurifyMode::Corrected);
    let result = tokenizer.tokenize(&["Café au Lait", "A Recipe For Café"]);
    assert_eq!(result, "a au café for lait recipe");
}

#[test]
fn tokenize_merges_fields_in_compatible_mode() {
    let tokenizer = without_stop_words(PurifyMode::Compatible);
    let result = tokenizer.tokenize(&["Café au Lait", "A Recipe For Café"]);
    assert_eq!(result, "a au café for lait recipe");
}

#[test]
fn tokenize_removes_stop_words() {
    let result = tokenize(&["the quick the fox"]);
    assert_eq!(result, "fox quick");
}

#[test]
fn tokenize_sentence_with_builtin_english() {
    let result = tokenize(&["The Quick Brown Fox jumps over the lazy dog"]);
    assert_eq!(result, "brown dog fox jumps lazy quick");
}

#[test]
fn tokenize_keeps_tokens_containing_stop_words() {
    assert_eq!(tokenize(&["the theory"]), "theory");
}

#[test]
fn tokenize_strips_markup() {
    assert_eq!(tokenize(&["<p>Hello <b>World</b></p>"]), "hello world");
}

#[test]
fn tokenize_replaces_entities() {
    assert_eq!(tokenize(&["Tom &amp; Jerry"]), "jerry tom");
}

#[test]
fn tokenize_splits_numbers_on_punctuation() {
    assert_eq!(
        tokenize(&["Version 2.0 released 2024"]),
        "0 2 2024 released version"
    );
}

#[test]
fn tokenize_composes_decomposed_accents() {
    assert_eq!(tokenize(&["Cafe\u{0301}", "Café"]), "café");
}

#[test]
fn tokenize_compatible_mode_blanks_symbols_last() {
    let tokenizer = without_stop_words(PurifyMode::Compatible);
    assert_eq!(tokenizer.tokenize(&["Hello, World!"]), "hello world");
}

#[test]
fn tokenize_empty() {
    let none: [&str; 0] = [];
    assert_eq!(tokenize(&none), "");
    assert_eq!(tokenize(&[""]), "");
    assert_eq!(tokenize(&["   ", "<br/>"]), "");
}

#[test]
fn tokenize_only_stop_words() {
    assert_eq!(tokenize(&["the and or"]), "");
}

// ============================================================================
// Language selection
// ============================================================================

#[test]
fn tokenize_unregistered_language_skips_removal() {
    let tokenizer = Tokenizer::from_config(TextConfig::default().with_language("xx"));
    assert_eq!(tokenizer.tokenize(&["the fox"]), "fox the");
}

#[test]
fn tokenize_german() {
    let tokenizer = Tokenizer::from_config(TextConfig::default().with_language("de"));
    assert_eq!(
        tokenizer.tokenize(&["Der Hund und die Katze"]),
        "hund katze"
    );
}

#[test]
fn tokenize_configured_extra_stop_words() {
    let mut extra = BTreeMap::new();
    extra.insert("en".to_string(), vec!["fox".to_string()]);
    let config = TextConfig {
        stop_words: extra,
        ..TextConfig::default()
    };
    let tokenizer = Tokenizer::from_config(config);
    assert_eq!(tokenizer.tokenize(&["the quick fox"]), "quick");
}

#[test]
fn tokenize_injected_table() {
    let table = StopWordTable::empty().with_words("en", ["quick"]);
    let tokenizer = Tokenizer::new(TextConfig::default(), table);
    assert_eq!(tokenizer.tokenize(&["the quick fox"]), "fox the");
}

#[test]
fn tokenize_keeps_turkish_words_whole() {
    assert_eq!(
        tokenize(&["İstanbul ŞEHİR the-end a.b"]),
        "b end i\u{0307}stanbul şehi\u{0307}r"
    );
}

#[test]
fn tokenize_keeps_devanagari_words_whole() {
    let tokenizer = without_stop_words(PurifyMode::Corrected);
    assert_eq!(tokenizer.tokenize(&["नमस्ते दुनिया"]), "दुनिया नमस्ते");
}

#[test]
fn tokenize_uppercase_language_still_removes_stop_words() {
    let config = TextConfig {
        language: "EN".to_string(),
        ..TextConfig::default()
    };
    let tokenizer = Tokenizer::from_config(config);
    assert_eq!(tokenizer.config().language, "en");
    assert_eq!(tokenizer.tokenize(&["the fox"]), "fox");
}

#[test]
fn from_config_merges_extra_words_into_builtin_table() {
    let mut extra = BTreeMap::new();
    extra.insert("en".to_string(), vec!["lorem".to_string()]);
    let config = TextConfig {
        stop_words: extra,
        ..TextConfig::default()
    };
    let tokenizer = Tokenizer::from_config(config);
    assert!(tokenizer.stop_words().contains("en", "lorem"));
    assert!(tokenizer.stop_words().contains("en", "the"));
    assert!(tokenizer.stop_words().has_language("de"));
}
