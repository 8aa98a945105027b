use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::stopwords::{Language, StopWords};
use crate::index::SearchConfig;

/// Lowercase `text` and strip diacritics.
///
/// Accents are removed by canonical decomposition followed by dropping every
/// combining mark, so "Café" and "cafe" fold to the same string.
/// Every General_Category=Mark character goes, spacing marks included, so
/// Indic vowel signs are dropped along with Latin diacritics.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split folded text into maximal runs of word characters.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(|c: char| !is_word_char(c))
        .filter(|s| !s.is_empty())
}

/// Fold, tokenize and drop stop words.
///
/// Tokens keep source order and duplicates. Never fails: empty or
/// punctuation-only input yields an empty sequence.
pub fn normalize(text: &str, stop_words: &StopWords) -> Vec<String> {
    let folded = fold(text);
    tokenize(&folded)
        .filter(|token| !stop_words.contains(token))
        .map(str::to_string)
        .collect()
}

/// Text normalizer bound to one stop-word configuration.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    stop_words: StopWords,
}

impl Normalizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    pub fn for_language(language: Language) -> Self {
        Self::new(StopWords::for_language(language))
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        let mut stop_words = StopWords::for_language(config.language);
        stop_words.extend(&config.extra_stop_words);
        Self::new(stop_words)
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn normalize(&self, text: &str) -> Vec<String> {
        normalize(text, &self.stop_words)
    }
}
