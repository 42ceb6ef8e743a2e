//! Column-header cleaning shared by every table loader.
//!
//! Spreadsheet headers such as `PRS (h-grade): SG SF` become stable keys such
//! as `prs_lparen_h_grade_rparen_colon_sg_sf`, so lookups by key string behave
//! identically across files.

use std::sync::LazyLock;

use regex::Regex;

static UNDERSCORE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_{2,}").unwrap());

const HEADER_REPLACEMENTS: &[(&str, &str)] = &[
    (" ", "_"),
    ("-", "_"),
    ("(", "_lparen_"),
    (")", "_rparen_"),
    (":", "_colon_"),
    ("/", "_fslash_"),
    ("+", "_plus_"),
    (".", "_point_"),
    ("'", "_quote_"),
    ("[", "_lbrack_"),
    ("]", "_rbrack_"),
    ("ʔ", "_glottstop_"),
];

/// Lowercase a header and expand punctuation into named tokens.
pub fn clean_header(header: &str) -> String {
    HEADER_REPLACEMENTS
        .iter()
        .fold(header.to_lowercase(), |acc, (from, to)| acc.replace(from, to))
}

/// Combine a two-row header (group row + column row) into one key per column.
///
/// Blank cells are skipped, runs of `_` collapse to one and the result is
/// trimmed of `_`.
pub fn merge_header_rows(group_row: &[String], column_row: &[String]) -> Vec<String> {
    group_row
        .iter()
        .zip(column_row.iter())
        .map(|(group, column)| {
            let group = clean_header(group);
            let column = clean_header(column);
            let joined = [group.as_str(), column.as_str()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("_");
            UNDERSCORE_RUN.replace_all(&joined, "_").trim_matches('_').to_string()
        })
        .collect()
}

/// Header cleaning for single-header tables: lowercase, whitespace runs to `_`.
///
/// Leading and trailing whitespace is dropped rather than turned into `_`.
pub fn simple_header(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
