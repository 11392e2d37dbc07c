//! Summarization components
//!
//! Extractive summarization by word frequency, in four stages:
//! tokenize, count, score, select. Each stage's output is the next stage's
//! only input, and all state is local to one call, so a [`Summarizer`] can be
//! shared freely across threads.

pub mod frequency;
pub mod scorer;
pub mod selector;

use crate::error::{Result, SummarizeError};
use crate::nlp::{tokenize, StopwordFilter};
use crate::types::{Summary, SummarizerConfig, SummaryRatio};
use frequency::count_frequencies;
use rayon::prelude::*;
use scorer::score_sentences;
use selector::SentenceSelector;
use std::path::Path;
use tracing::{debug, debug_span};

/// Frequency-based extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    stopwords: StopwordFilter,
    selector: SentenceSelector,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Built-in stopwords, default ratio
    pub fn new() -> Self {
        Self {
            stopwords: StopwordFilter::default(),
            selector: SentenceSelector::new(),
        }
    }

    /// Create from a config; extra stopwords are added on top of the chosen list
    pub fn with_config(config: &SummarizerConfig) -> Self {
        Self {
            stopwords: StopwordFilter::from_source(&config.stopwords)
                .with_stopwords(&config.extra_stopwords),
            selector: SentenceSelector::new().with_ratio(config.ratio),
        }
    }

    pub fn with_ratio(mut self, ratio: SummaryRatio) -> Self {
        self.selector = self.selector.with_ratio(ratio);
        self
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn ratio(&self) -> SummaryRatio {
        self.selector.ratio()
    }

    /// Summarize `text`.
    ///
    /// Fails with [`SummarizeError::EmptyInput`] for an empty string and
    /// [`SummarizeError::NoScorableContent`] when the text has no non-stop word.
    pub fn summarize<'a>(&self, text: &'a str) -> Result<Summary<'a>> {
        if text.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let tokenized = {
            let _span = debug_span!("tokenize").entered();
            tokenize(text)
        };
        debug!(
            sentences = tokenized.sentences.len(),
            words = tokenized.words.len(),
            "tokenized"
        );

        let freq = {
            let _span = debug_span!("count_frequencies").entered();
            count_frequencies(&tokenized.words, &self.stopwords)
        };
        if freq.is_empty() {
            return Err(SummarizeError::NoScorableContent);
        }
        debug!(distinct = freq.len(), top = ?freq.top_n(5), "counted words");

        let scores = {
            let _span = debug_span!("score_sentences").entered();
            score_sentences(&tokenized.sentences, &freq)
        };
        debug!(eligible = scores.len(), "scored sentences");

        let _span = debug_span!("select").entered();
        let summary = self.selector.select(&tokenized.sentences, &scores)?;
        debug!(
            requested = summary.requested,
            selected = summary.len(),
            "selected sentences"
        );
        Ok(summary)
    }

    /// Summarize many independent texts in parallel, keeping input order.
    pub fn summarize_batch<'a, S>(&self, texts: &'a [S]) -> Vec<Result<Summary<'a>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref()))
            .collect()
    }
}

/// Summarize `text` with the built-in stopwords and return the summary text.
pub fn summarize(text: &str, ratio: SummaryRatio) -> Result<String> {
    Summarizer::new()
        .with_ratio(ratio)
        .summarize(text)
        .map(|summary| summary.text())
}

/// Read a UTF-8 text file.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| SummarizeError::from_io(path, e))
}
