// Contraction expansion — ordered literal replacement rules.
//
// The rules run in sequence over the cumulative result: each rule replaces
// every occurrence before the next rule sees the text. Ordering is part of
// the contract — specific forms ("can't", "won't") must run before the
// generic suffix rules ("n't", "'d") that would otherwise corrupt them.

/// Expansion rules, applied top to bottom.
///
/// "won't" before "n't" is load-bearing: the generic rule alone would turn
/// it into "wo not".
pub const CONTRACTION_RULES: &[(&str, &str)] = &[
    ("I'm", "I am"),
    ("i'm", "i am"),
    ("can't", "can not"),
    ("won't", "will not"),
    ("n't", " not"),
    ("'re", " are"),
    ("'ll", " will"),
    ("'ve", " have"),
    ("'m", " am"),
    ("'d", " would"),
];

/// Expand every known contraction in `text`.
///
/// Each rule is a global replacement over the output of the rules before
/// it. Running the expansion twice equals running it once: no rule's
/// expansion re-introduces a pattern any rule matches.
pub fn expand_contractions(text: &str) -> String {
    let mut expanded = text.to_string();
    for (contraction, expansion) in CONTRACTION_RULES {
        expanded = expanded.replace(contraction, expansion);
    }
    expanded
}
