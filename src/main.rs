use anyhow::Result;
use clap::Parser;
use tracing::info;

use wordtally::config::Config;
use wordtally::host::{host_address, SystemResolver};
use wordtally::output::{report, terminal};
use wordtally::pipeline::analyze_file;

/// Wordtally: word count and top-word summary for fixed text inputs.
///
/// Reads two text files, counts their words, ranks the three most
/// frequent words in each, and writes a combined summary to a report
/// file and to stdout.
#[derive(Parser)]
#[command(name = "wordtally", version, about)]
struct Cli;

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordtally=info")),
        )
        .init();

    let _cli = Cli::parse();

    let config = Config::load()?;

    // The first file is counted as-is; the second gets contraction
    // handling, so "can't" and friends count as their expanded words.
    let first = analyze_file(&config.first_input, false)?;
    let second = analyze_file(&config.second_input, true)?;

    info!(
        first = first.total_words,
        second = second.total_words,
        "Both inputs analyzed"
    );

    // Host lookup is the one fallible step that never aborts the run.
    let address = host_address(&SystemResolver);

    let summary = report::render(&first, &second, &address);
    report::write(&summary, &config.output_path)?;

    terminal::display_summary(&summary, &config.output_path);

    Ok(())
}
