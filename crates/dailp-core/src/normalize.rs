use std::borrow::Cow;
use std::fmt::Display;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical decomposition (NFD) of anything that renders as text.
///
/// Every comparison and pattern match in the pipeline runs on NFD strings, so
/// a precomposed `á` from one spreadsheet and `a` + U+0301 from another compare
/// equal.
pub fn normalize(value: impl Display) -> String {
    value.to_string().nfd().collect()
}

/// Normalize a string together with an optional clue.
pub fn normalize_pair(value: &str, clue: Option<&str>) -> (String, Option<String>) {
    (normalize(value), clue.map(normalize))
}

/// Normalize raw bytes. Input that is not valid UTF-8 is handed back untouched.
pub fn normalize_bytes(bytes: &[u8]) -> Cow<'_, [u8]> {
    match std::str::from_utf8(bytes) {
        Ok(text) => {
            let normalized = normalize(text);
            if normalized.as_bytes() == bytes {
                Cow::Borrowed(bytes)
            } else {
                Cow::Owned(normalized.into_bytes())
            }
        }
        Err(_) => Cow::Borrowed(bytes),
    }
}

/// Comma-separated description of each character, used in trace output.
///
/// Combining marks are spelled out by code point so a reader can tell an acute
/// (U+0301) from a grave (U+0300) in a log line.
pub fn unicode_names(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if is_combining_mark(c) {
                format!("<combining U+{:04X}>", c as u32)
            } else if c.is_ascii_graphic() {
                format!("'{c}'")
            } else {
                format!("'{c}' U+{:04X}", c as u32)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
