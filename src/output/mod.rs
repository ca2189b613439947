// Output formatting — report rendering and terminal echo.

pub mod report;
pub mod terminal;

/// Render ranked (word, count) pairs as a brace-enclosed listing:
/// `{cats: 2, dogs: 1}`. Ranking order is preserved.
pub fn format_top_words(top: &[(String, usize)]) -> String {
    let entries: Vec<String> = top
        .iter()
        .map(|(word, count)| format!("{word}: {count}"))
        .collect();
    format!("{{{}}}", entries.join(", "))
}
