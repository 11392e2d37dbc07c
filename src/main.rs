use clap::Parser;
use freq_summarizer::{read_text, Summarizer, SummarizerConfig, SummaryReport};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = SummarizerConfig::default()
        .with_ratio(cli.ratio.unwrap_or_default())
        .with_stopwords(cli.stopwords)
        .with_extra_stopwords(cli.extra_stopwords);
    let summarizer = Summarizer::with_config(&config);

    let text = read_text(&cli.file)?;
    tracing::debug!(path = %cli.file.display(), bytes = text.len(), "read input");

    let summary = summarizer.summarize(&text)?;
    let report = SummaryReport::new(&summary).with_source(&cli.file);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}
