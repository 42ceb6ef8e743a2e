/// Third person English turned into first person.
const TO_FIRST_PERSON: &[(&str, &str)] = &[
    ("she's", "I'm"),
    ("she is", "I am"),
    ("he's", "I'm"),
    ("he is", "I am"),
    ("it's", "I'm"),
    ("it is", "I am"),
    ("you're", "I'm"),
    ("you are", "I am"),
    ("they're", "We're"),
    ("they are", "We are"),
];

/// Third person English turned into second person.
const TO_SECOND_PERSON: &[(&str, &str)] = &[
    ("she's", "you're"),
    ("she is", "you are"),
    ("he's", "you're"),
    ("he is", "you are"),
    ("it's", "you're"),
    ("it is", "you are"),
    ("they're", "you're"),
    ("they are", "you are"),
];

/// Marks a translation that still needs review
pub const REVIEW_MARKER: &str = "FIXME";

/// Re-person a third person headword translation to match a first or second
/// person prefix gloss.
///
/// Returns `None` for any other gloss.
pub fn provisional_translation(headword: &str, prefix_gloss: &str) -> Option<String> {
    let replacements = if prefix_gloss.starts_with('1') {
        TO_FIRST_PERSON
    } else if prefix_gloss.starts_with('2') {
        TO_SECOND_PERSON
    } else {
        return None;
    };

    let translation = replacements
        .iter()
        .fold(headword.to_lowercase(), |text, (from, to)| text.replace(from, to));
    Some(format!("{translation} ({REVIEW_MARKER})"))
}
