//! Where each surface form of a verb lives in the source spreadsheets.
//!
//! The verb table spreads a paradigm over column groups such as
//! `PRS (h-grade): SG SF` / `PRS (h-grade): SG TAG`; the "source 3" extension
//! tables carry the syllabary spelling and the Feeling 1975 entry number.

use std::fmt;

use dailp_core::{IngestError, RawRecord, Table};

/// Verb-table columns every row must have, whatever forms are extracted
pub const REQUIRED_ROW_COLUMNS: [&str; 4] = ["all_entries_key", "root_lparen_mod_rparen", "gloss", "pp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbClass {
    HGrade,
    GlottalGrade,
}

impl VerbClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerbClass::HGrade => "hgrade",
            VerbClass::GlottalGrade => "glottgrade",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    Present,
}

impl Tense {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tense::Present => "PRS",
        }
    }

    /// Gloss of the aspect suffix for this tense
    pub fn aspect_gloss(&self) -> &'static str {
        match self {
            Tense::Present => "PRS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Plural,
    DualPlural,
}

impl Number {
    pub fn as_str(&self) -> &'static str {
        match self {
            Number::Singular => "SG",
            Number::Plural => "PL",
            Number::DualPlural => "DU/PL",
        }
    }
}

/// One cell of the verb paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceFormKind {
    pub class: VerbClass,
    pub tense: Tense,
    pub number: Number,
}

impl SurfaceFormKind {
    pub const fn new(class: VerbClass, tense: Tense, number: Number) -> Self {
        Self {
            class,
            tense,
            number,
        }
    }

    /// Same class and tense, different number
    pub const fn with_number(self, number: Number) -> Self {
        Self::new(self.class, self.tense, number)
    }
}

impl fmt::Display for SurfaceFormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.class.as_str(),
            self.tense.as_str(),
            self.number.as_str()
        )
    }
}

/// Surface forms extracted for every verb root
pub const VERB_SURFACE_FORMS: [SurfaceFormKind; 2] = [
    SurfaceFormKind::new(VerbClass::HGrade, Tense::Present, Number::Singular),
    SurfaceFormKind::new(VerbClass::GlottalGrade, Tense::Present, Number::Singular),
];

/// Verb-table columns of one paradigm cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormColumns {
    pub narrow_transcription: &'static str,
    pub phonetic_transcription: &'static str,
    pub aspect: &'static str,
    /// Person/number tag of the pronominal prefix; some cells have none
    pub prefix_gloss: Option<&'static str>,
}

/// Column names for one paradigm cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParadigmCell {
    /// Absent for cells that only exist in the extension tables
    pub form: Option<FormColumns>,
    pub syllabary: Option<&'static str>,
    pub numeric: Option<&'static str>,
}

/// Typed lookup from paradigm cell to column names.
#[derive(Debug, Clone)]
pub struct ParadigmTable {
    cells: Vec<(SurfaceFormKind, ParadigmCell)>,
}

impl ParadigmTable {
    pub fn new(cells: Vec<(SurfaceFormKind, ParadigmCell)>) -> Self {
        Self { cells }
    }

    /// Column layout of the Feeling 1975 verb spreadsheets
    pub fn feeling_1975() -> Self {
        use Number::*;
        use Tense::Present;
        use VerbClass::*;

        Self::new(vec![
            (
                SurfaceFormKind::new(HGrade, Present, Singular),
                ParadigmCell {
                    form: Some(FormColumns {
                        narrow_transcription: "prs_prs_lparen_h_grade_rparen_colon_sg_sf",
                        phonetic_transcription: "simple_phonetics_lparen_with_fslash_h_fslash_plus_fslash_glottstop_fslash_rparen_1",
                        aspect: "prs_asp",
                        prefix_gloss: Some("prs_prs_lparen_h_grade_rparen_colon_sg_tag"),
                    }),
                    syllabary: Some("source_3_3sg_prs_syllabary"),
                    numeric: Some("source_3_3sg_prs_numeric"),
                },
            ),
            (
                SurfaceFormKind::new(HGrade, Present, Plural),
                ParadigmCell {
                    form: None,
                    syllabary: Some("source_3_3pl_prs_syllabary"),
                    numeric: Some("source_3_3pl_prs_numeric"),
                },
            ),
            (
                SurfaceFormKind::new(GlottalGrade, Present, Singular),
                ParadigmCell {
                    form: Some(FormColumns {
                        narrow_transcription: "prs_prs_lparen_glottstop_grade_rparen_sf",
                        phonetic_transcription: "simple_phonetics_lparen_with_fslash_h_fslash_plus_fslash_glottstop_fslash_rparen_2",
                        aspect: "prs_asp",
                        prefix_gloss: Some("prs_prs_lparen_glottstop_grade_rparen_tag"),
                    }),
                    syllabary: Some("source_3_1sg_prs_syllabary"),
                    numeric: Some("source_3_1sg_prs_numeric"),
                },
            ),
            (
                SurfaceFormKind::new(GlottalGrade, Present, Plural),
                ParadigmCell {
                    form: None,
                    syllabary: Some("source_3_1pl_prs_syllabary"),
                    numeric: None,
                },
            ),
            (
                SurfaceFormKind::new(HGrade, Present, DualPlural),
                ParadigmCell {
                    form: Some(FormColumns {
                        narrow_transcription: "prs_prs_lparen_h_grade_rparen_colon_du_fslash_pl_sf",
                        phonetic_transcription: "simple_phonetics_lparen_with_fslash_h_fslash_plus_fslash_glottstop_fslash_rparen_3",
                        aspect: "prs_asp",
                        prefix_gloss: None,
                    }),
                    syllabary: None,
                    numeric: None,
                },
            ),
        ])
    }

    pub fn get(&self, kind: SurfaceFormKind) -> Option<&ParadigmCell> {
        self.cells
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, cell)| cell)
    }

    /// Verb-table columns of a cell
    pub fn form(&self, kind: SurfaceFormKind) -> Option<&FormColumns> {
        self.get(kind).and_then(|cell| cell.form.as_ref())
    }

    /// Check that every requested form has a layout and that the verb table
    /// carries all the columns the layout names.
    pub fn validate(&self, forms: &[SurfaceFormKind], table: &Table) -> Result<(), IngestError> {
        let missing = |column: &str| IngestError::MissingColumn {
            table: table.name.clone(),
            column: column.to_string(),
        };

        for column in REQUIRED_ROW_COLUMNS {
            if !table.has_column(column) {
                return Err(missing(column));
            }
        }

        for &kind in forms {
            let form = self
                .form(kind)
                .ok_or_else(|| IngestError::UnknownParadigm(kind.to_string()))?;
            let columns = [
                Some(form.narrow_transcription),
                Some(form.phonetic_transcription),
                Some(form.aspect),
                form.prefix_gloss,
            ];
            for column in columns.into_iter().flatten() {
                if !table.has_column(column) {
                    return Err(missing(column));
                }
            }
        }
        Ok(())
    }

    /// Extension value for `kind`, falling back to the plural cell.
    pub fn extension_value<'a>(
        &self,
        extension: &'a RawRecord,
        kind: SurfaceFormKind,
        column: impl Fn(&ParadigmCell) -> Option<&'static str>,
    ) -> Option<&'a str> {
        [kind, kind.with_number(Number::Plural)]
            .into_iter()
            .filter_map(|k| self.get(k).and_then(&column))
            .find_map(|key| extension.get(key))
    }

    /// Grammatical number of a surface form, judged from the extension row.
    ///
    /// A singular syllabary spelling is taken to mean the form is singular.
    /// This is a stand-in signal and is kept in one place so it can be swapped
    /// for a real number feature.
    pub fn infer_number(&self, extension: &RawRecord, kind: SurfaceFormKind) -> Number {
        let singular = self
            .get(kind.with_number(Number::Singular))
            .and_then(|cell| cell.syllabary)
            .is_some_and(|key| extension.contains(key));
        if singular {
            Number::Singular
        } else {
            Number::Plural
        }
    }
}

impl Default for ParadigmTable {
    fn default() -> Self {
        Self::feeling_1975()
    }
}
