//! Top-N sentence selection for summarization
//!
//! Picks the highest-scoring eligible sentences and returns them in document
//! order. The number to pick is derived from the total sentence count, but
//! only sentences with a score can be picked, so a summary may come out
//! shorter than requested.
//!
//! Ties are broken by original sentence index: among equal scores the earlier
//! sentence wins.

use super::scorer::SentenceScores;
use crate::error::{Result, SummarizeError};
use crate::types::{SelectedSentence, Sentence, Summary, SummaryRatio};

/// Configuration for sentence selection
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorConfig {
    /// Fraction of the original sentences to keep
    pub ratio: SummaryRatio,
}

/// Frequency-score sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set the summary ratio
    pub fn with_ratio(mut self, ratio: SummaryRatio) -> Self {
        self.config.ratio = ratio;
        self
    }

    pub fn ratio(&self) -> SummaryRatio {
        self.config.ratio
    }

    /// Select the summary sentences.
    ///
    /// Fails with [`SummarizeError::NoScorableContent`] when no sentence is
    /// eligible.
    pub fn select<'a>(
        &self,
        sentences: &[Sentence<'a>],
        scores: &SentenceScores,
    ) -> Result<Summary<'a>> {
        if scores.is_empty() {
            return Err(SummarizeError::NoScorableContent);
        }

        let requested = self.config.ratio.desired_count(sentences.len());
        let chosen = top_indices(scores, requested);

        let selected = chosen
            .into_iter()
            .filter_map(|(index, score)| {
                sentences
                    .get(index)
                    .map(|s| SelectedSentence::new(s, score))
            })
            .collect();

        Ok(Summary {
            sentences: selected,
            total_sentences: sentences.len(),
            requested,
            ratio: self.config.ratio,
        })
    }
}

/// The `n` best `(index, score)` pairs, returned in ascending index order.
///
/// Ranking is by score descending, then index ascending.
pub fn top_indices(scores: &SentenceScores, n: usize) -> Vec<(usize, u64)> {
    let mut ranked: Vec<(usize, u64)> = scores.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked.sort_by_key(|&(index, _)| index);
    ranked
}

/// Select and join the summary sentences.
pub fn select_summary(
    sentences: &[Sentence<'_>],
    scores: &SentenceScores,
    ratio: SummaryRatio,
) -> Result<String> {
    SentenceSelector::new()
        .with_ratio(ratio)
        .select(sentences, scores)
        .map(|summary| summary.text())
}
