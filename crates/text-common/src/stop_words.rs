//! Per-language stop-word lists consulted by the tokenizer.

use std::collections::BTreeMap;

pub const EN: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours", "yourself", "yourselves",
];

pub const DE: &[&str] = &[
    "aber", "alle", "als", "also", "am", "an", "auch", "auf", "aus", "bei", "bin", "bis", "bist",
    "da", "damit", "dann", "das", "dass", "dein", "dem", "den", "der", "des", "die", "dies",
    "doch", "du", "durch", "ein", "eine", "einem", "einen", "einer", "eines", "er", "es", "für",
    "hat", "hatte", "ich", "ihr", "im", "in", "ist", "ja", "kein", "mit", "nach", "nicht", "noch",
    "nur", "ob", "oder", "sein", "sich", "sie", "sind", "so", "über", "um", "und", "uns", "unter",
    "vom", "von", "vor", "war", "was", "weil", "wenn", "wie", "wir", "wird", "zu", "zum", "zur",
];

pub const FR: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux", "il",
    "ils", "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "même", "mes", "moi",
    "mon", "ne", "nos", "notre", "nous", "on", "ou", "par", "pas", "pour", "qu", "que", "qui",
    "sa", "se", "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos",
    "votre", "vous",
];

pub const ES: &[&str] = &[
    "al", "algo", "como", "con", "de", "del", "el", "ella", "ellos", "en", "era", "es", "esta",
    "este", "fue", "ha", "hay", "la", "las", "le", "les", "lo", "los", "mas", "me", "mi", "muy",
    "ni", "no", "nos", "o", "para", "pero", "por", "que", "se", "sin", "sobre", "su", "sus",
    "también", "te", "tu", "un", "una", "uno", "y", "ya", "yo",
];

pub const IT: &[&str] = &[
    "a", "ai", "al", "alla", "anche", "che", "chi", "come", "con", "da", "dal", "del", "della",
    "di", "e", "è", "gli", "ha", "i", "il", "in", "io", "la", "le", "lo", "ma", "mi", "ne", "nel",
    "nella", "non", "o", "per", "più", "se", "si", "sono", "su", "sul", "tra", "un", "una", "uno",
];

pub const NL: &[&str] = &[
    "aan", "al", "als", "bij", "dat", "de", "die", "dit", "een", "en", "er", "het", "hij", "ik",
    "in", "is", "je", "maar", "met", "naar", "niet", "nog", "of", "om", "ook", "op", "te", "tot",
    "uit", "van", "voor", "was", "wat", "we", "wel", "zij", "zijn", "zo",
];

/// Read-only mapping from two-letter language code to an ordered word list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopWordTable {
    lists: BTreeMap<String, Vec<String>>,
}

impl StopWordTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table with the bundled lists for en, de, fr, es, it and nl.
    pub fn builtin() -> Self {
        [("en", EN), ("de", DE), ("fr", FR), ("es", ES), ("it", IT), ("nl", NL)]
            .into_iter()
            .fold(Self::empty(), |table, (lang, words)| {
                table.with_words(lang, words.iter().copied())
            })
    }

    /// Append `words` to the list for `language`, keeping order and skipping repeats.
    pub fn with_words<I, S>(mut self, language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = self.lists.entry(language.to_ascii_lowercase()).or_default();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && !list.contains(&word) {
                list.push(word);
            }
        }
        self
    }

    /// Merge every list in `extra` into this table.
    pub fn extend(self, extra: &BTreeMap<String, Vec<String>>) -> Self {
        extra
            .iter()
            .fold(self, |table, (lang, words)| table.with_words(lang, words))
    }

    /// Words registered for `language`; empty when none are.
    pub fn words(&self, language: &str) -> &[String] {
        self.lists.get(language).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.lists.contains_key(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    pub fn contains(&self, language: &str, word: &str) -> bool {
        self.words(language).iter().any(|w| w == word)
    }
}
