//! Keyword-driven functionality explanations

/// Keyword groups and the clause each contributes, in output order
const BEHAVIOR_SIGNALS: &[(&[&str], &str)] = &[
    (&["if", "else"], "contains conditional logic. "),
    (&["for", "while"], "includes looping or iteration. "),
    (&["try", "catch"], "handles errors or exceptions. "),
    (&["return"], "returns a value. "),
    (&["await", "async"], "performs asynchronous operations. "),
];

/// Purpose inference checklist; the first group with a hit wins
const PURPOSE_SIGNALS: &[(&[&str], &str)] = &[
    (&["fetch", "http"], "interact with an external API or service"),
    (
        &["fs", "readFile", "writeFile"],
        "perform file system operations",
    ),
    (&["Math", "calculate"], "perform mathematical calculations"),
];

/// Purpose reported when no checklist entry matches
pub const DEFAULT_PURPOSE: &str = "process data or perform a specific task";

fn any_line_contains(lines: &[&str], needles: &[&str]) -> bool {
    lines
        .iter()
        .any(|line| needles.iter().any(|needle| line.contains(needle)))
}

/// Explain what a function body does from the keywords it contains
///
/// One clause per behavior present (conditional, loop, error handling,
/// return, async), then "It appears to <purpose>.".
pub fn explain_functionality(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let mut explanation = String::from("This function ");
    for (needles, clause) in BEHAVIOR_SIGNALS {
        if any_line_contains(&lines, needles) {
            explanation.push_str(clause);
        }
    }

    explanation.push_str(&format!("It appears to {}.", infer_main_purpose(&lines)));
    explanation
}

/// First matching purpose clause for a function's lines
pub fn infer_main_purpose(lines: &[&str]) -> &'static str {
    PURPOSE_SIGNALS
        .iter()
        .find(|(needles, _)| any_line_contains(lines, needles))
        .map(|(_, purpose)| *purpose)
        .unwrap_or(DEFAULT_PURPOSE)
}
