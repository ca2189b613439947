// Per-file analysis pipeline: read -> expand -> tokenize -> count -> rank.
//
// Each input file runs through the pipeline independently and produces a
// FileSummary. The two summaries are combined by the report module.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::text::contractions::expand_contractions;
use crate::text::frequency::{count_frequencies, rank_top, TOP_WORDS};
use crate::text::tokenizer::tokenize;

/// Analysis result for one input file.
#[derive(Debug, Clone)]
pub struct FileSummary {
    /// Display label — the input's file name.
    pub label: String,
    /// Total token count.
    pub total_words: usize,
    /// Up to three (word, count) pairs, highest count first.
    pub top_words: Vec<(String, usize)>,
    /// Whether contraction expansion ran before tokenization.
    pub contractions_handled: bool,
}

/// Tokenize `text` and rank its words, optionally expanding contractions
/// first. Pure — no I/O.
pub fn analyze_text(text: &str, expand: bool) -> (usize, Vec<(String, usize)>) {
    let tokens = if expand {
        tokenize(&expand_contractions(text))
    } else {
        tokenize(text)
    };
    let frequencies = count_frequencies(&tokens);
    (tokens.len(), rank_top(&frequencies, TOP_WORDS))
}

/// Read `path` as UTF-8 and analyze it.
///
/// A read failure aborts the whole run — the report is only rendered once
/// every input has been analyzed, so no partial output is ever written.
pub fn analyze_file(path: &Path, handle_contractions: bool) -> Result<FileSummary> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let (total_words, top_words) = analyze_text(&text, handle_contractions);

    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    info!(
        file = %label,
        words = total_words,
        contractions = handle_contractions,
        "Analyzed input file"
    );

    Ok(FileSummary {
        label,
        total_words,
        top_words,
        contractions_handled: handle_contractions,
    })
}
