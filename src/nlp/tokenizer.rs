//! Sentence and word tokenization
//!
//! Sentences end at `.`, `!` or `?` followed by whitespace; the punctuation
//! stays with the sentence it closes. Words are maximal runs of Unicode word
//! characters (letters, digits, underscore), lower-cased. There is no
//! stemming, so "cat" and "cats" are different words.

use crate::types::Sentence;
use regex::Regex;
use std::sync::OnceLock;

static SENTENCE_BOUNDARY: OnceLock<Regex> = OnceLock::new();
static WORD: OnceLock<Regex> = OnceLock::new();

fn sentence_boundary() -> &'static Regex {
    SENTENCE_BOUNDARY
        .get_or_init(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"))
}

fn word_pattern() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Output of [`tokenize`]: sentence spans plus the word tokens of the whole text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedText<'a> {
    pub sentences: Vec<Sentence<'a>>,
    pub words: Vec<String>,
}

/// Split `text` into sentences and into lower-cased words.
///
/// Words are taken from the entire text rather than sentence by sentence.
pub fn tokenize(text: &str) -> TokenizedText<'_> {
    TokenizedText {
        sentences: split_sentences(text),
        words: words(text),
    }
}

/// Split text into sentences, trimming surrounding whitespace first.
///
/// Text without terminal punctuation is a single sentence. Whitespace-only
/// text has no sentences.
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    // Offsets are reported against the untrimmed text
    let base = text.len() - text.trim_start().len();

    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in sentence_boundary().find_iter(trimmed) {
        // Terminal punctuation is one ASCII byte
        let end = boundary.start() + 1;
        let index = sentences.len();
        sentences.push(Sentence::new(&trimmed[start..end], index, base + start));
        start = boundary.end();
    }
    let index = sentences.len();
    sentences.push(Sentence::new(&trimmed[start..], index, base + start));

    sentences
}

/// Lower-cased word tokens of `text`, in order of appearance.
pub fn words(text: &str) -> Vec<String> {
    word_iter(text).collect()
}

/// Lazy version of [`words`], used when scoring a single sentence.
pub fn word_iter(text: &str) -> impl Iterator<Item = String> + '_ {
    word_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
}
