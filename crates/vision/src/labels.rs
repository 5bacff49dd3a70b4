//! Thin comparison layer between detected labels and prompt words.

/// Check the prompt's adjective and noun against detected labels.
///
/// Returns `(adjective_matched, noun_matched)`. Matching is a
/// case-insensitive equality check against each label description;
/// synonym handling is the external service's problem, not ours.
pub fn match_prompt(labels: &[String], adjective: &str, noun: &str) -> (bool, bool) {
    let adjective_matched = contains_word(labels, adjective);
    let noun_matched = contains_word(labels, noun);
    (adjective_matched, noun_matched)
}

fn contains_word(labels: &[String], word: &str) -> bool {
    labels.iter().any(|label| label.eq_ignore_ascii_case(word))
}
