use clap::Parser;
use freq_summarizer::{StopwordSource, SummaryRatio};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "summarize",
    version,
    about = "Summarize a text file by word-frequency sentence scoring"
)]
pub struct Cli {
    #[arg(help = "Path to the UTF-8 text file to summarize")]
    pub file: PathBuf,
    #[arg(
        value_parser = parse_ratio,
        help = "Fraction of sentences to keep, in (0.0, 1.0] [default: 0.2]"
    )]
    pub ratio: Option<SummaryRatio>,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        default_value = "builtin",
        help = "Stopword list: 'builtin' or a language code (en, de, fr, ...)"
    )]
    pub stopwords: StopwordSource,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Additional comma-separated words to ignore when scoring"
    )]
    pub extra_stopwords: Vec<String>,
    #[arg(short, long, help = "Log pipeline stages to stderr")]
    pub verbose: bool,
}

fn parse_ratio(raw: &str) -> Result<SummaryRatio, String> {
    raw.parse::<SummaryRatio>().map_err(|e| e.to_string())
}
