use dailp_core::{DiagnosticCategory, IngestContext, RawRecord, Table};
use serde::{Deserialize, Serialize};

use crate::fuzzy::rank_by_distance;

/// Column shared by the verb table and every auxiliary table
pub const ALL_ENTRIES_KEY: &str = "all_entries_key";
/// Extension column holding the curated morpheme gloss
pub const MORPHEME_GLOSS: &str = "morphemegloss";

/// Glosses that are spelled differently in the historical stem table.
const GLOSS_CORRECTIONS: &[(&str, &str)] = &[
    ("sandwich", "sandwitch"),
    ("snore", "snort"),
    ("break LG, cut LG", "break LG, vut LG"),
];

/// One row of the historical stem/gloss table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemGloss {
    pub stem: String,
    pub gloss: String,
}

impl StemGloss {
    pub fn new(stem: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            gloss: gloss.into(),
        }
    }

    /// Rows of a loaded stems table with `stem` and `gloss` columns
    pub fn from_table(table: &Table) -> Vec<StemGloss> {
        table
            .rows
            .iter()
            .map(|row| StemGloss::new(row.value("stem"), row.value("gloss")))
            .collect()
    }
}

/// The gloss as spelled in the historical table
pub fn historical_spelling(gloss: &str) -> &str {
    GLOSS_CORRECTIONS
        .iter()
        .find(|(correct, _)| *correct == gloss)
        .map(|(_, misspelled)| *misspelled)
        .unwrap_or(gloss)
}

/// First row, across `tables` in order, whose key column equals `key`.
///
/// A miss is logged under `category` and yields an empty record.
pub fn find_extension(
    key: &str,
    tables: &[Table],
    category: DiagnosticCategory,
    ctx: &mut IngestContext,
) -> RawRecord {
    let hit = tables
        .iter()
        .find_map(|table| table.rows.iter().find(|row| row.value(ALL_ENTRIES_KEY) == key));

    match hit {
        Some(row) => row.clone(),
        None => {
            ctx.warn(
                category,
                format!("Unable to find \"Source 3\" match for key \"{key}\""),
            );
            RawRecord::new()
        }
    }
}

/// Curated gloss from the extension, falling back to the row's own gloss.
pub fn true_gloss<'a>(extension: &'a RawRecord, fallback: &'a str) -> &'a str {
    extension.non_blank(MORPHEME_GLOSS).unwrap_or(fallback)
}

/// Match a gloss to a unique historical stem.
///
/// Exact gloss matches win. With several matches the distances between `root`
/// and each stem are computed but the first match in table order is returned.
/// With none, the known misspelling of the gloss is tried once.
pub fn find_gloss_match<'a>(
    gloss: &str,
    root: &str,
    candidates: &'a [StemGloss],
    ctx: &mut IngestContext,
) -> Option<&'a StemGloss> {
    if let Some(found) = select_match(gloss, root, candidates) {
        return Some(found);
    }

    let respelled = historical_spelling(gloss);
    if respelled != gloss
        && let Some(found) = select_match(respelled, root, candidates)
    {
        return Some(found);
    }

    ctx.warn(
        DiagnosticCategory::UnmatchedGloss,
        format!(
            "Unable to match \"{root}\" \"{gloss}\" to anything in the original Uchihara database spreadsheet."
        ),
    );
    None
}

fn select_match<'a>(gloss: &str, root: &str, candidates: &'a [StemGloss]) -> Option<&'a StemGloss> {
    let matches: Vec<&StemGloss> = candidates.iter().filter(|c| c.gloss == gloss).collect();
    match matches.as_slice() {
        [] => None,
        [only] => Some(*only),
        _ => {
            let ranked = rank_by_distance(root, &matches, |c| c.stem.as_str());
            tracing::debug!(
                gloss,
                root,
                candidates = ?ranked.iter().map(|(d, c)| (c.stem.as_str(), *d)).collect::<Vec<_>>(),
                "several stems share this gloss; taking the first"
            );
            ranked.first().map(|(_, c)| *c)
        }
    }
}
