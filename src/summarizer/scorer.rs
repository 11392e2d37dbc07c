//! Sentence scoring
//!
//! A sentence's score is the sum of the frequencies of its words, repeats
//! included. Words missing from the frequency map are skipped. The map is
//! sparse: a sentence with no known word gets no entry at all, and only
//! sentences with an entry are eligible for selection.

use super::frequency::WordFrequencies;
use crate::nlp::tokenizer::word_iter;
use crate::types::Sentence;
use std::collections::BTreeMap;

/// Sparse mapping from sentence index to score, iterated in index order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceScores {
    scores: BTreeMap<usize, u64>,
}

impl SentenceScores {
    /// Score of sentence `index`, or `None` if it is not eligible
    pub fn get(&self, index: usize) -> Option<u64> {
        self.scores.get(&index).copied()
    }

    pub fn is_eligible(&self, index: usize) -> bool {
        self.scores.contains_key(&index)
    }

    /// Number of eligible sentences
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// `(index, score)` pairs in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.scores.iter().map(|(&i, &s)| (i, s))
    }
}

impl FromIterator<(usize, u64)> for SentenceScores {
    fn from_iter<T: IntoIterator<Item = (usize, u64)>>(iter: T) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Score a single sentence; `None` if none of its words has a frequency.
pub fn score_sentence(sentence: &str, freq: &WordFrequencies) -> Option<u64> {
    let mut score = None;
    for word in word_iter(sentence) {
        if let Some(count) = freq.get(&word) {
            *score.get_or_insert(0) += count;
        }
    }
    score
}

/// Score every sentence against the frequency map.
pub fn score_sentences(sentences: &[Sentence<'_>], freq: &WordFrequencies) -> SentenceScores {
    sentences
        .iter()
        .filter_map(|s| score_sentence(s.text, freq).map(|score| (s.index, score)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{split_sentences, words, StopwordFilter};
    use crate::summarizer::frequency::count_frequencies;

    fn scores_for(text: &str) -> SentenceScores {
        let freq = count_frequencies(words(text), StopwordFilter::builtin());
        score_sentences(&split_sentences(text), &freq)
    }

    #[test]
    fn test_scores_sum_frequencies() {
        let scores = scores_for("The cat sat. Dogs bark loudly. Cats and dogs are pets.");

        assert_eq!(scores.get(0), Some(2));
        assert_eq!(scores.get(1), Some(4));
        assert_eq!(scores.get(2), Some(4));
        assert_eq!(scores.len(), 3);
    }

    #[test]
    fn test_repeated_words_count_each_time() {
        let scores = scores_for("Rust rust rust. Go.");

        // "rust" occurs 3 times overall and 3 times in the first sentence
        assert_eq!(scores.get(0), Some(9));
        assert_eq!(scores.get(1), Some(1));
    }

    #[test]
    fn test_stop_word_sentence_is_absent_not_zero() {
        let scores = scores_for("Compilers are fun. It is as it is. Compilers win.");

        assert!(scores.is_eligible(0));
        assert!(!scores.is_eligible(1));
        assert_eq!(scores.get(1), None);
        assert!(scores.is_eligible(2));
        assert_eq!(scores.len(), 2);
    }

    #[test]
    fn test_iter_in_index_order() {
        let scores = scores_for("Zeta. Alpha beta. The. Gamma.");
        let indices: Vec<usize> = scores.iter().map(|(i, _)| i).collect();

        assert_eq!(indices, vec![0, 1, 3]);
    }

    #[test]
    fn test_score_sentence_with_empty_frequencies() {
        assert_eq!(score_sentence("Anything at all.", &WordFrequencies::default()), None);
    }
}
