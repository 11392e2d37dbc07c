//! Natural Language Processing components
//!
//! This module provides tokenization and stopword filtering.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordFilter;
pub use tokenizer::{split_sentences, tokenize, words, TokenizedText};
