//! Core types shared by the summarization stages.

use crate::error::{Result, SummarizeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A sentence borrowed from the source text.
///
/// Produced once by the tokenizer and referenced by index afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Sentence text, terminal punctuation included
    pub text: &'a str,
    /// Position in the original sentence sequence
    pub index: usize,
    /// Byte offset of the first character in the source text
    pub start: usize,
    /// Byte offset one past the last character in the source text
    pub end: usize,
}

impl<'a> Sentence<'a> {
    pub fn new(text: &'a str, index: usize, start: usize) -> Self {
        Self {
            text,
            index,
            start,
            end: start + text.len(),
        }
    }
}

/// Fraction of the original sentences to keep, in `(0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SummaryRatio(f64);

impl SummaryRatio {
    pub const DEFAULT: SummaryRatio = SummaryRatio(0.2);

    /// Validate a raw ratio.
    pub fn new(ratio: f64) -> Result<Self> {
        // NaN fails both comparisons
        if ratio > 0.0 && ratio <= 1.0 {
            Ok(Self(ratio))
        } else {
            Err(SummarizeError::invalid_ratio(
                "must be between 0.0 (exclusive) and 1.0 (inclusive)",
            ))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Number of sentences to aim for out of `total`: `max(1, floor(total * ratio))`.
    pub fn desired_count(self, total: usize) -> usize {
        ((total as f64 * self.0).floor() as usize).max(1)
    }
}

impl Default for SummaryRatio {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for SummaryRatio {
    type Error = SummarizeError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SummaryRatio> for f64 {
    fn from(ratio: SummaryRatio) -> Self {
        ratio.0
    }
}

impl FromStr for SummaryRatio {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| SummarizeError::invalid_ratio("must be a number"))?;
        Self::new(value)
    }
}

impl fmt::Display for SummaryRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Where the stopword list comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordSource {
    /// The fixed built-in English list
    #[default]
    Builtin,
    /// A language list from the `stop-words` crate (e.g. "en", "de")
    Language(String),
}

impl FromStr for StopwordSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("builtin") {
            Ok(Self::Builtin)
        } else {
            Ok(Self::Language(s.to_lowercase()))
        }
    }
}

/// Configuration for a [`Summarizer`](crate::summarizer::Summarizer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Fraction of sentences to keep
    #[serde(default)]
    pub ratio: SummaryRatio,
    /// Stopword list to filter with
    #[serde(default)]
    pub stopwords: StopwordSource,
    /// Words filtered in addition to the chosen list
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl SummarizerConfig {
    pub fn with_ratio(mut self, ratio: SummaryRatio) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_stopwords(mut self, stopwords: StopwordSource) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords.extend(words.into_iter().map(Into::into));
        self
    }
}

/// A sentence chosen for the summary, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectedSentence<'a> {
    /// Position in the original sentence sequence
    pub index: usize,
    /// Sum of the frequencies of the sentence's non-stop words
    pub score: u64,
    /// Byte offset of the sentence in the source text
    pub start: usize,
    /// Byte offset one past the sentence's end
    pub end: usize,
    pub text: &'a str,
}

impl<'a> SelectedSentence<'a> {
    pub fn new(sentence: &Sentence<'a>, score: u64) -> Self {
        Self {
            index: sentence.index,
            score,
            start: sentence.start,
            end: sentence.end,
            text: sentence.text,
        }
    }
}

/// Result of summarizing one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary<'a> {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence<'a>>,
    /// Number of sentences in the source text
    pub total_sentences: usize,
    /// `max(1, floor(total * ratio))`; may exceed `sentences.len()`
    pub requested: usize,
    pub ratio: SummaryRatio,
}

impl Summary<'_> {
    /// The summary text: selected sentences joined by single spaces.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Original indices of the selected sentences, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_bounds() {
        assert!(SummaryRatio::new(0.0).is_err());
        assert!(SummaryRatio::new(-0.5).is_err());
        assert!(SummaryRatio::new(1.01).is_err());
        assert!(SummaryRatio::new(f64::NAN).is_err());
        assert!(SummaryRatio::new(1.0).is_ok());
        assert!(SummaryRatio::new(0.001).is_ok());
    }

    #[test]
    fn test_ratio_parse_distinguishes_reasons() {
        let not_number = "abc".parse::<SummaryRatio>().unwrap_err().to_string();
        let out_of_range = "1.5".parse::<SummaryRatio>().unwrap_err().to_string();

        assert!(not_number.contains("must be a number"));
        assert!(out_of_range.contains("between"));
        assert_eq!("0.5".parse::<SummaryRatio>().unwrap().get(), 0.5);
    }

    #[test]
    fn test_desired_count_floor_and_minimum() {
        let ratio = SummaryRatio::new(0.34).unwrap();
        assert_eq!(ratio.desired_count(3), 1);
        assert_eq!(ratio.desired_count(10), 3);

        let tiny = SummaryRatio::new(0.01).unwrap();
        assert_eq!(tiny.desired_count(1), 1);
        assert_eq!(tiny.desired_count(0), 1);

        let full = SummaryRatio::new(1.0).unwrap();
        assert_eq!(full.desired_count(7), 7);
    }

    #[test]
    fn test_ratio_display_two_decimals() {
        assert_eq!(SummaryRatio::DEFAULT.to_string(), "0.20");
    }

    #[test]
    fn test_stopword_source_parse() {
        assert_eq!(
            "builtin".parse::<StopwordSource>().unwrap(),
            StopwordSource::Builtin
        );
        assert_eq!(
            "DE".parse::<StopwordSource>().unwrap(),
            StopwordSource::Language("de".to_string())
        );
    }

    #[test]
    fn test_config_serde_defaults() {
        let cfg: SummarizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SummarizerConfig::default());

        let cfg: SummarizerConfig =
            serde_json::from_str(r#"{"ratio": 0.5, "stopwords": {"language": "fr"}}"#).unwrap();
        assert_eq!(cfg.ratio.get(), 0.5);
        assert_eq!(cfg.stopwords, StopwordSource::Language("fr".to_string()));
        assert!(cfg.extra_stopwords.is_empty());

        let cfg: SummarizerConfig =
            serde_json::from_str(r#"{"extra_stopwords": ["lorem", "ipsum"]}"#).unwrap();
        assert_eq!(cfg.extra_stopwords, vec!["lorem", "ipsum"]);
    }

    #[test]
    fn test_config_rejects_bad_ratio() {
        let result: std::result::Result<SummarizerConfig, _> =
            serde_json::from_str(r#"{"ratio": 2.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_text_joins_with_single_space() {
        let summary = Summary {
            sentences: vec![
                SelectedSentence::new(&Sentence::new("One.", 0, 0), 3),
                SelectedSentence::new(&Sentence::new("Three!", 2, 10), 5),
            ],
            total_sentences: 3,
            requested: 2,
            ratio: SummaryRatio::new(0.7).unwrap(),
        };

        assert_eq!(summary.text(), "One. Three!");
        assert_eq!(summary.indices(), vec![0, 2]);
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_selected_sentence_borrows_source() {
        let source = String::from("Alpha. Beta.");
        let sentence = Sentence::new(&source[7..], 1, 7);
        let selected = SelectedSentence::new(&sentence, 1);

        assert_eq!(selected.text.as_ptr(), source[7..].as_ptr());
        assert_eq!((selected.start, selected.end), (7, 12));
        assert_eq!(&source[selected.start..selected.end], selected.text);
    }
}
