//! Console and JSON rendering of a [`Summary`].

use crate::types::{Summary, SummaryRatio};
use serde::Serialize;
use std::fmt;
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// Per-sentence entry in the JSON report
#[derive(Debug, Clone, Serialize)]
pub struct ReportSentence {
    pub index: usize,
    pub score: u64,
    /// Byte range of the sentence in the source text
    pub start: usize,
    pub end: usize,
}

/// Everything the `summarize` command prints
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub ratio: SummaryRatio,
    pub original_sentences: usize,
    pub requested_sentences: usize,
    pub summary_sentences: usize,
    pub selected: Vec<ReportSentence>,
    pub summary: String,
}

impl SummaryReport {
    pub fn new(summary: &Summary<'_>) -> Self {
        Self {
            source: None,
            ratio: summary.ratio,
            original_sentences: summary.total_sentences,
            requested_sentences: summary.requested,
            summary_sentences: summary.len(),
            selected: summary
                .sentences
                .iter()
                .map(|s| ReportSentence {
                    index: s.index,
                    score: s.score,
                    start: s.start,
                    end: s.end,
                })
                .collect(),
            summary: summary.text(),
        }
    }

    pub fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.display().to_string());
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "Text Summarization Report (Ratio: {})", self.ratio)?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "Original Text Sentence Count: {}", self.original_sentences)?;
        writeln!(f, "Summary Sentence Count: {}", self.summary_sentences)?;
        writeln!(f, "{light}")?;
        writeln!(f)?;
        writeln!(f, "--- GENERATED SUMMARY ---")?;
        writeln!(f)?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        write!(f, "{heavy}")
    }
}
