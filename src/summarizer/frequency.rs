//! Word frequency counting
//!
//! Counts every non-stop word across the whole text. Stop words never become
//! keys, so every count is at least one.

use crate::nlp::StopwordFilter;
use rustc_hash::FxHashMap;

/// Mapping from non-stop word to its number of occurrences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: FxHashMap<String, u64>,
}

impl WordFrequencies {
    /// Frequency of `word`, or `None` if it never occurred (or is a stop word)
    #[inline]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `true` when the text had no non-stop word at all
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted occurrences
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Words sorted by descending count, ties broken alphabetically
    pub fn top_n(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

/// Count non-stop words.
pub fn count_frequencies<I, S>(words: I, stopwords: &StopwordFilter) -> WordFrequencies
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: FxHashMap<String, u64> = FxHashMap::default();
    for word in words {
        let word = word.as_ref();
        if stopwords.is_stopword(word) {
            continue;
        }
        match counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                counts.insert(word.to_string(), 1);
            }
        }
    }
    WordFrequencies { counts }
}
