// Frequency counting and ranking.

use std::collections::HashMap;

/// How many top words the summary reports per file.
pub const TOP_WORDS: usize = 3;

/// Count how often each token occurs. One pass; insertion order is
/// irrelevant, the map only needs increment-by-key and full enumeration.
pub fn count_frequencies(tokens: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Extract the `n` highest-count entries, highest first.
///
/// Ties break by token value ascending, so equally-frequent words rank
/// alphabetically and the result is deterministic across runs. Fewer than
/// `n` distinct tokens returns all of them — no padding.
pub fn rank_top(frequencies: &HashMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = frequencies
        .iter()
        .map(|(word, &count)| (word.clone(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}
