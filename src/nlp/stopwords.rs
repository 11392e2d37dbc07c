//! Stopword filtering
//!
//! The default list is a fixed set of common English words. Lists for other
//! languages come from the `stop-words` crate, and custom lists can be built
//! from any slice of words.

use crate::types::StopwordSource;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;
use stop_words::{get, LANGUAGE};

/// The built-in English stopword list.
pub const BUILTIN_STOPWORDS: &[&str] = &[
    "a", "an", "and", "the", "is", "are", "was", "were", "he", "she", "it", "i", "you", "we",
    "they", "him", "her", "us", "them", "my", "your", "our", "their", "this", "that", "these",
    "those", "of", "in", "on", "at", "to", "for", "with", "as", "by", "but", "so", "if", "or",
    "up", "down", "out", "into", "from", "about", "just", "can", "will", "would", "should",
    "has", "have", "had", "do", "does", "did", "be", "being", "been",
];

static BUILTIN: OnceLock<StopwordFilter> = OnceLock::new();

/// A filter for removing stopwords from lower-cased word tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl StopwordFilter {
    /// The process-wide built-in list, built on first use
    pub fn builtin() -> &'static StopwordFilter {
        BUILTIN.get_or_init(|| Self::from_list(BUILTIN_STOPWORDS))
    }

    /// Create a filter from the `stop-words` list for the given language
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl, ar
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Resolve a configured stopword source
    pub fn from_source(source: &StopwordSource) -> Self {
        match source {
            StopwordSource::Builtin => Self::builtin().clone(),
            StopwordSource::Language(language) => Self::new(language),
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Extend the filter with more words, lower-cased
    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Builder form of [`add_stopwords`](Self::add_stopwords)
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_stopwords(words);
        self
    }

    /// Check if an already lower-cased token is a stopword
    #[inline]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            other => {
                tracing::warn!(language = other, "unknown stopword language, using English");
                LANGUAGE::English
            }
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}
