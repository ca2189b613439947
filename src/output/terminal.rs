// Terminal echo — prints the summary to stdout with a console-only footer.

use std::path::Path;

use colored::Colorize;

/// Echo the report body to stdout, followed by a dimmed note naming the
/// file the same text was written to. The note is never part of the
/// report file.
pub fn display_summary(report: &str, output_path: &Path) {
    println!("{report}");
    println!();
    println!(
        "{}",
        format!("Summary written to: {}", output_path.display()).dimmed()
    );
}
