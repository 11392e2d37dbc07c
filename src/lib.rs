//! # freq-summarizer
//!
//! Extractive text summarization by word frequency.
//!
//! Sentences are scored by summing the frequencies of their non-stop words
//! across the whole text; the best-scoring sentences are kept in their
//! original order.
//!
//! ```rust
//! use freq_summarizer::{summarize, SummaryRatio};
//!
//! let text = "The cat sat. Dogs bark loudly. Cats and dogs are pets.";
//! let ratio = SummaryRatio::new(0.34).unwrap();
//! assert_eq!(summarize(text, ratio).unwrap(), "Dogs bark loudly.");
//! ```

pub mod error;
pub mod matrix;
pub mod nlp;
pub mod report;
pub mod summarizer;
pub mod types;

pub use error::{Result, SummarizeError};
pub use nlp::StopwordFilter;
pub use report::SummaryReport;
pub use summarizer::{read_text, summarize, Summarizer};
pub use types::{
    SelectedSentence, Sentence, StopwordSource, Summary, SummarizerConfig, SummaryRatio,
};
