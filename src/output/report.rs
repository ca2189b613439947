// Summary report — renders the fixed-format text and writes it to disk.
//
// The report body is identical on disk and on the console; anything
// decorative stays in the terminal module.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::output::format_top_words;
use crate::pipeline::FileSummary;

/// Render the complete summary: both per-file sections separated by blank
/// lines, the grand total, and the host address line, newline-joined.
pub fn render(first: &FileSummary, second: &FileSummary, host_address: &str) -> String {
    let grand_total = first.total_words + second.total_words;

    let mut lines = Vec::new();
    push_file_section(&mut lines, first);
    lines.push(String::new());
    push_file_section(&mut lines, second);
    lines.push(String::new());
    lines.push(format!("Grand total of words across both files: {grand_total}"));
    lines.push(format!("Container IP address: {host_address}"));

    lines.join("\n")
}

/// Append the two summary lines for one file. The top-words line carries
/// the "(with contractions handled)" suffix when expansion ran.
fn push_file_section(lines: &mut Vec<String>, summary: &FileSummary) {
    let suffix = if summary.contractions_handled {
        " (with contractions handled)"
    } else {
        ""
    };
    lines.push(format!(
        "Total words in {}: {}",
        summary.label, summary.total_words
    ));
    lines.push(format!(
        "Top 3 frequent words in {}{}: {}",
        summary.label,
        suffix,
        format_top_words(&summary.top_words)
    ));
}

/// Write the rendered report to `path`, creating the parent directory if
/// it does not exist. Any failure here is fatal to the run.
pub fn write(report: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }
    fs::write(path, report)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    info!(path = %path.display(), bytes = report.len(), "Report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(label: &str, total: usize, top: &[(&str, usize)], handled: bool) -> FileSummary {
        FileSummary {
            label: label.to_string(),
            total_words: total,
            top_words: top.iter().map(|(w, c)| (w.to_string(), *c)).collect(),
            contractions_handled: handled,
        }
    }

    #[test]
    fn test_render_matches_fixed_format() {
        let first = summary("a.txt", 3, &[("cats", 2), ("dogs", 1)], false);
        let second = summary("b.txt", 5, &[("not", 2), ("can", 1), ("i", 1)], true);

        let report = render(&first, &second, "172.17.0.2");
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Total words in a.txt: 3");
        assert_eq!(lines[1], "Top 3 frequent words in a.txt: {cats: 2, dogs: 1}");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Total words in b.txt: 5");
        assert_eq!(
            lines[4],
            "Top 3 frequent words in b.txt (with contractions handled): {not: 2, can: 1, i: 1}"
        );
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Grand total of words across both files: 8");
        assert_eq!(lines[7], "Container IP address: 172.17.0.2");
        assert_eq!(lines.len(), 8);
    }
}
