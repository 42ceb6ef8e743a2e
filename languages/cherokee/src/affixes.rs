//! Affix tables: one row per affix, one column per allomorph.
//!
//! Each allomorph becomes its own lexical entry tagged with the phonological
//! environment that conditions it.

use std::fmt;

use dailp_core::normalize::normalize;
use dailp_core::{DiagnosticCategory, IngestContext, LexicalEntry, RawRecord};

/// Column holding the affix's gloss tag
pub const GLOSS_TAG_COLUMN: &str = "tag";
/// Namespace of environment tags
pub const ENVIRONMENT_TAG: &str = "allomorph-environment";

/// Negative prefixes whose allomorph data is incomplete
const OMITTED_GLOSSES: [&str; 2] = ["NEG1", "NEG2"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    PreConsonantal,
    PreVocalic,
    PreLaryngeal,
    /// Before `a`
    PreA,
    PostConsonantal,
    PostVocalic,
    Elsewhere,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::PreConsonantal => "pre-consonantal",
            Environment::PreVocalic => "pre-vocalic",
            Environment::PreLaryngeal => "pre-laryngeal",
            Environment::PreA => "pre-a",
            Environment::PostConsonantal => "post-consonantal",
            Environment::PostVocalic => "post-vocalic",
            Environment::Elsewhere => "elsewhere",
        }
    }

    /// Tag name attached to entries of this environment
    pub fn tag(&self) -> String {
        format!("{ENVIRONMENT_TAG}:{}", self.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixCategory {
    PronominalPrefix,
    PrepronominalPrefix,
    /// Reflexive and middle prefixes share one table
    ReflexiveMiddle,
    ModalSuffix,
    Clitic,
}

pub type ColumnMap = &'static [(&'static str, Environment)];

const PRONOMINAL_COLUMNS: ColumnMap = &[
    ("pre_consonantal", Environment::PreConsonantal),
    ("pre_vocalic", Environment::PreVocalic),
];

const PREPRONOMINAL_COLUMNS: ColumnMap = &[
    ("pre_consonantal", Environment::PreConsonantal),
    ("pre_vocalic", Environment::PreVocalic),
    ("pre_laryngeal", Environment::PreLaryngeal),
    ("elsewhere", Environment::Elsewhere),
];

const REFLEXIVE_COLUMNS: ColumnMap = &[
    ("allomorph_1", Environment::PreConsonantal),
    ("allomorph_2", Environment::PreVocalic),
    ("allomorph_3", Environment::PreA),
];

const MIDDLE_COLUMNS: ColumnMap = &[
    ("allomorph_1", Environment::PreConsonantal),
    ("allomorph_2", Environment::PreA),
    ("allomorph_3", Environment::PreVocalic),
];

const SUFFIX_COLUMNS: ColumnMap = &[
    ("post_consonantal", Environment::PostConsonantal),
    ("post_vocalic", Environment::PostVocalic),
    ("elsewhere", Environment::Elsewhere),
];

pub type ReferenceFields = &'static [(&'static str, &'static str)];

const PREFIX_REFERENCES: ReferenceFields = &[
    ("df_1975_page", "Feeling 1975"),
    ("cook_1979_page", "Cook 1979"),
    ("bma_2008_page", "Montgomery-Anderson 2008"),
    ("notes", "Notes"),
];

const GRAMMAR_REFERENCES: ReferenceFields = &[
    ("bma_2008_page", "Montgomery-Anderson 2008"),
    ("cook_1979_page", "Cook 1979"),
    ("df_1975_page", "Feeling 1975"),
    ("notes", "Notes"),
];

impl AffixCategory {
    /// Syntactic category of the entries
    pub fn syntactic_tag(&self) -> &'static str {
        match self {
            AffixCategory::PronominalPrefix => "PRO",
            AffixCategory::PrepronominalPrefix => "PPP",
            AffixCategory::ReflexiveMiddle => "RFX",
            AffixCategory::ModalSuffix => "MOD",
            AffixCategory::Clitic => "CLT",
        }
    }

    /// Allomorph columns and their environments for an affix of this category.
    ///
    /// Reflexive and middle prefixes use the same columns in a different
    /// order.
    pub fn columns(&self, gloss: &str) -> ColumnMap {
        match self {
            AffixCategory::PronominalPrefix => PRONOMINAL_COLUMNS,
            AffixCategory::PrepronominalPrefix => PREPRONOMINAL_COLUMNS,
            AffixCategory::ReflexiveMiddle if gloss == "MID" => MIDDLE_COLUMNS,
            AffixCategory::ReflexiveMiddle => REFLEXIVE_COLUMNS,
            AffixCategory::ModalSuffix | AffixCategory::Clitic => SUFFIX_COLUMNS,
        }
    }

    /// Cross-reference fields in the order they appear in comments
    pub fn references(&self) -> ReferenceFields {
        match self {
            AffixCategory::PronominalPrefix | AffixCategory::PrepronominalPrefix => {
                PREFIX_REFERENCES
            }
            AffixCategory::ReflexiveMiddle
            | AffixCategory::ModalSuffix
            | AffixCategory::Clitic => GRAMMAR_REFERENCES,
        }
    }
}

/// One affix row read through its category's column layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixAllomorphSet {
    pub gloss: String,
    pub allomorphs: Vec<(Environment, String)>,
    /// `(label, value)` cross-references that are present
    pub references: Vec<(&'static str, String)>,
}

impl AffixAllomorphSet {
    pub fn from_record(record: &RawRecord, category: AffixCategory) -> Self {
        let gloss = normalize(record.value(GLOSS_TAG_COLUMN).trim());

        let allomorphs = category
            .columns(&gloss)
            .iter()
            .filter_map(|(column, environment)| {
                let allomorph = clean_allomorph(record.value(column));
                (!allomorph.is_empty()).then_some((*environment, allomorph))
            })
            .collect();

        let references = category
            .references()
            .iter()
            .filter_map(|(column, label)| {
                record
                    .non_blank(column)
                    .map(|value| (*label, normalize(value.trim())))
            })
            .collect();

        Self {
            gloss,
            allomorphs,
            references,
        }
    }

    /// `Label: value.` for each present reference
    pub fn comments(&self) -> String {
        self.references
            .iter()
            .map(|(label, value)| format!("{label}: {value}."))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// NFD, trimmed, without the `-` marking the affix boundary
fn clean_allomorph(raw: &str) -> String {
    normalize(raw.trim().trim_matches('-').trim())
}

/// One entry per allomorph of an affix row.
pub fn split(record: &RawRecord, category: AffixCategory, ctx: &mut IngestContext) -> Vec<LexicalEntry> {
    let set = AffixAllomorphSet::from_record(record, category);
    if OMITTED_GLOSSES.contains(&set.gloss.as_str()) {
        ctx.warn(
            DiagnosticCategory::NegativeOmitted,
            format!("Omitting {} allomorphs: negative prefix data is incomplete", set.gloss),
        );
        return Vec::new();
    }

    let comments = set.comments();
    set.allomorphs
        .iter()
        .map(|(environment, allomorph)| LexicalEntry {
            transcription: allomorph.clone(),
            morpheme_break: allomorph.clone(),
            morpheme_gloss: set.gloss.clone(),
            syntactic_category: category.syntactic_tag().to_string(),
            tags: vec![ctx.ingest_tag.clone(), environment.tag()],
            comments: comments.clone(),
            ..Default::default()
        })
        .collect()
}

/// Split every row of an affix table.
pub fn process_affixes(
    rows: &[RawRecord],
    category: AffixCategory,
    ctx: &mut IngestContext,
) -> Vec<LexicalEntry> {
    let entries: Vec<LexicalEntry> = rows
        .iter()
        .flat_map(|row| split(row, category, ctx))
        .collect();
    tracing::info!(
        category = category.syntactic_tag(),
        rows = rows.len(),
        entries = entries.len(),
        "processed affix table"
    );
    entries
}
