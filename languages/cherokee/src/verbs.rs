//! Verb-table rows to lexical entries: one verb root plus its surface forms.

use dailp_core::entry::{FEELING_SOURCE, UCHIHARA_DB_SOURCE};
use dailp_core::normalize::normalize;
use dailp_core::{DiagnosticCategory, IngestContext, LexicalEntry, RawRecord, Table, Transcriber, Translation};

use crate::analyzer::{MorphemeAnalyzer, RootMorpheme, Transcriptions, UNRESOLVED};
use crate::paradigm::{ParadigmTable, SurfaceFormKind, Tense, VERB_SURFACE_FORMS, VerbClass};
use crate::resolver::{ALL_ENTRIES_KEY, StemGloss, find_extension, find_gloss_match, true_gloss};
use crate::translation::{REVIEW_MARKER, provisional_translation};

pub const ROOT_COLUMN: &str = "root_lparen_mod_rparen";
pub const GLOSS_COLUMN: &str = "gloss";
pub const HEADWORD_TRANSLATION: &str = "source_3_headword_translation";
pub const PAGE_REFERENCE: &str = "df75_page_ref";

/// Category of verb roots
pub const ROOT_CATEGORY: &str = "V";
/// Category of surface verb forms
pub const SURFACE_CATEGORY: &str = "S";

const DEFAULT_COMMENTS: &str = "narrow phonetic transcription source: Uchihara DB.";

/// Verb-table columns copied onto root entries as `namespace:value` tags
const ROOT_TAG_NAMESPACES: [(&str, &str); 5] = [
    (ALL_ENTRIES_KEY, "all-entries-key"),
    ("class", "uchihara-db-class"),
    ("tr", "transitivity"),
    ("pp", "pp-set"),
    ("ppp", "prepronominal-prefix"),
];

/// Tables consulted while processing the verb table.
#[derive(Debug, Clone, Default)]
pub struct AuxiliaryTables {
    /// Feeling 1975 extraction tables, searched in order
    pub source_3: Vec<Table>,
    /// Stem and gloss columns of the original Uchihara database
    pub stems_glosses: Vec<StemGloss>,
}

/// Turns verb-table rows into root and surface-form entries.
pub struct VerbProcessor<'a> {
    tables: &'a AuxiliaryTables,
    converter: &'a dyn Transcriber,
    paradigm: ParadigmTable,
    forms: Vec<SurfaceFormKind>,
}

impl<'a> VerbProcessor<'a> {
    pub fn new(tables: &'a AuxiliaryTables, converter: &'a dyn Transcriber) -> Self {
        Self {
            tables,
            converter,
            paradigm: ParadigmTable::feeling_1975(),
            forms: VERB_SURFACE_FORMS.to_vec(),
        }
    }

    pub fn paradigm(&self) -> &ParadigmTable {
        &self.paradigm
    }

    pub fn forms(&self) -> &[SurfaceFormKind] {
        &self.forms
    }

    /// Root entry followed by the surface forms of every keyed row.
    pub fn process(&self, rows: &[RawRecord], ctx: &mut IngestContext) -> Vec<LexicalEntry> {
        let mut entries = Vec::new();
        for row in rows {
            if row.value(ALL_ENTRIES_KEY).trim().is_empty() {
                continue;
            }
            entries.extend(self.process_row(row, ctx));
        }
        tracing::info!(rows = rows.len(), entries = entries.len(), "processed verb table");
        entries
    }

    pub fn process_row(&self, row: &RawRecord, ctx: &mut IngestContext) -> Vec<LexicalEntry> {
        let key = row.value(ALL_ENTRIES_KEY);
        let extension = find_extension(
            key,
            &self.tables.source_3,
            DiagnosticCategory::MissingExtension,
            ctx,
        );

        let root = self.verb_root_entry(row, &extension, ctx);
        let morpheme = RootMorpheme {
            transcription: root.morpheme_break.clone(),
            gloss: root.morpheme_gloss.clone(),
        };

        let mut entries = vec![root];
        for &kind in &self.forms {
            if let Some(entry) = self.surface_form_entry(kind, row, &extension, &morpheme, ctx) {
                entries.push(entry);
            }
        }
        entries
    }

    /// The verb root as recorded in the Uchihara database.
    pub fn verb_root_entry(
        &self,
        row: &RawRecord,
        extension: &RawRecord,
        ctx: &mut IngestContext,
    ) -> LexicalEntry {
        let root = row.value(ROOT_COLUMN);
        let gloss = row.value(GLOSS_COLUMN);
        let morpheme_gloss = true_gloss(extension, gloss).to_string();

        let transcription = match find_gloss_match(gloss, root, &self.tables.stems_glosses, ctx) {
            Some(matched) => {
                let converted = self.converter.convert(&matched.stem, Some(root));
                if converted != normalize(root) {
                    ctx.warn(
                        DiagnosticCategory::ClueMismatch,
                        format!(
                            "Converted stem \"{converted}\" (from {} \"{}\") differs from root \"{root}\" for gloss \"{gloss}\"; keeping the converted stem.",
                            self.converter.notation(),
                            matched.stem
                        ),
                    );
                }
                converted
            }
            None => root.to_string(),
        };

        let mut tags = vec![ctx.ingest_tag.clone()];
        tags.extend(root_tags(row));

        LexicalEntry {
            transcription: transcription.clone(),
            morpheme_break: transcription,
            morpheme_gloss,
            translations: vec![Translation::new(gloss)],
            syntactic_category: ROOT_CATEGORY.to_string(),
            source: UCHIHARA_DB_SOURCE.to_string(),
            tags,
            ..Default::default()
        }
    }

    /// A Feeling 1975 surface form, or `None` when the row has no such form.
    pub fn surface_form_entry(
        &self,
        kind: SurfaceFormKind,
        row: &RawRecord,
        extension: &RawRecord,
        root: &RootMorpheme,
        ctx: &mut IngestContext,
    ) -> Option<LexicalEntry> {
        let form = self.paradigm.form(kind)?;
        let key = row.value(ALL_ENTRIES_KEY);

        let narrow = self.converter.convert_plain(row.value(form.narrow_transcription).trim());
        if narrow.is_empty() {
            ctx.warn(
                DiagnosticCategory::MissingSurfaceForm,
                format!(
                    "No {kind} narrow phonetic transcription for all entries key {key}. Assuming that it has no {kind} form."
                ),
            );
            return None;
        }
        let phonetic = row.value(form.phonetic_transcription);

        let number = self.paradigm.infer_number(extension, kind);
        let transcription = match self
            .paradigm
            .extension_value(extension, kind.with_number(number), |cell| cell.syllabary)
        {
            Some(syllabary) => syllabary.to_string(),
            None => {
                ctx.warn(
                    DiagnosticCategory::MissingTranscription,
                    format!("Unable to find {kind} syllabary transcription for {key}"),
                );
                UNRESOLVED.to_string()
            }
        };

        let analyzer = MorphemeAnalyzer::new(&self.paradigm, self.converter);
        let transcriptions = Transcriptions {
            narrow: &narrow,
            phonetic,
        };
        let analysis = analyzer.analyze(kind, row, root, transcriptions, number, ctx)?;

        let translation = self.translation(kind, extension, key, analysis.prefix_gloss(), ctx);
        let comments = self.comments(kind, extension, key, ctx);

        Some(LexicalEntry {
            transcription,
            phonetic_transcription: phonetic.to_string(),
            narrow_phonetic_transcription: narrow.clone(),
            morpheme_break: analysis.morpheme_break(),
            morpheme_gloss: analysis.morpheme_gloss(),
            syntactic_category_string: analysis.category_string(),
            translations: vec![Translation::new(translation)],
            syntactic_category: SURFACE_CATEGORY.to_string(),
            source: FEELING_SOURCE.to_string(),
            tags: vec![ctx.ingest_tag.clone()],
            comments,
        })
    }

    fn translation(
        &self,
        kind: SurfaceFormKind,
        extension: &RawRecord,
        key: &str,
        prefix_gloss: &str,
        ctx: &mut IngestContext,
    ) -> String {
        let headword = match extension.get(HEADWORD_TRANSLATION) {
            Some(headword) => headword.to_string(),
            None => {
                ctx.warn(
                    DiagnosticCategory::MissingTranslation,
                    format!("Unable to find translation for \"{key}\"; using \"{UNRESOLVED}\" provisionally."),
                );
                UNRESOLVED.to_string()
            }
        };

        if (kind.class, kind.tense) == (VerbClass::HGrade, Tense::Present) {
            return headword;
        }

        provisional_translation(&headword, prefix_gloss).unwrap_or_else(|| {
            ctx.warn(
                DiagnosticCategory::MissingTranslation,
                format!("Unable to construct translation for {kind} from \"{headword}\"."),
            );
            REVIEW_MARKER.to_string()
        })
    }

    /// Feeling 1975 page and entry number, when the extension has them.
    fn comments(
        &self,
        kind: SurfaceFormKind,
        extension: &RawRecord,
        key: &str,
        ctx: &mut IngestContext,
    ) -> String {
        let Some(page) = extension.get(PAGE_REFERENCE) else {
            ctx.warn(
                DiagnosticCategory::MissingReference,
                format!("Unable to find Feeling 1975 page reference for {key}"),
            );
            return DEFAULT_COMMENTS.to_string();
        };
        let Some(numeric) = self.paradigm.extension_value(extension, kind, |cell| cell.numeric) else {
            ctx.warn(
                DiagnosticCategory::MissingReference,
                format!("Unable to find numeric value for {key}"),
            );
            return DEFAULT_COMMENTS.to_string();
        };
        format!("Feeling 1975:{page} ({numeric}); {DEFAULT_COMMENTS}")
    }
}

/// `namespace:value` tags for the non-blank classification columns of a row.
pub fn root_tags(row: &RawRecord) -> Vec<String> {
    ROOT_TAG_NAMESPACES
        .iter()
        .filter_map(|(column, namespace)| {
            row.non_blank(column)
                .map(|value| normalize(format!("{namespace}:{value}")))
        })
        .collect()
}

/// Process a whole verb table with the default surface forms.
pub fn process_verbs(
    rows: &[RawRecord],
    tables: &AuxiliaryTables,
    converter: &dyn Transcriber,
    ctx: &mut IngestContext,
) -> Vec<LexicalEntry> {
    VerbProcessor::new(tables, converter).process(rows, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::UchiharaConverter;

    #[test]
    fn test_root_tags_skip_blank_values() {
        let row: RawRecord = [
            (ALL_ENTRIES_KEY, "12"),
            ("class", "  "),
            ("tr", "t"),
            ("pp", "ka\u{301}"),
            ("ppp", ""),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            root_tags(&row),
            vec!["all-entries-key:12", "transitivity:t", "pp-set:ka\u{301}"]
        );
    }

    #[test]
    fn test_root_tags_are_normalized() {
        let row: RawRecord = [("pp", "k\u{e1}")].into_iter().collect();
        assert_eq!(root_tags(&row), vec!["pp-set:ka\u{301}"]);
    }

    #[test]
    fn test_root_entry_without_stem_match_keeps_raw_root() {
        let tables = AuxiliaryTables::default();
        let converter = UchiharaConverter::new();
        let processor = VerbProcessor::new(&tables, &converter);
        let mut ctx = IngestContext::new("ingest-uchihara-root:test");

        let row: RawRecord = [
            (ALL_ENTRIES_KEY, "7"),
            (ROOT_COLUMN, "dade:!ga"),
            (GLOSS_COLUMN, "eat"),
        ]
        .into_iter()
        .collect();
        let entry = processor.verb_root_entry(&row, &RawRecord::new(), &mut ctx);

        assert_eq!(entry.transcription, "dade:!ga");
        assert_eq!(entry.morpheme_gloss, "eat");
        assert_eq!(entry.translation(), Some("eat"));
        assert_eq!(entry.syntactic_category, ROOT_CATEGORY);
        assert_eq!(entry.source, UCHIHARA_DB_SOURCE);
        assert_eq!(entry.tags, vec!["ingest-uchihara-root:test", "all-entries-key:7"]);
        assert_eq!(ctx.diagnostics.count(DiagnosticCategory::UnmatchedGloss), 1);
    }

    #[test]
    fn test_root_entry_flags_converted_stem_that_differs_from_root() {
        let tables = AuxiliaryTables {
            stems_glosses: vec![StemGloss::new("dade:!ga", "eat")],
            ..Default::default()
        };
        let converter = UchiharaConverter::new();
        let processor = VerbProcessor::new(&tables, &converter);
        let mut ctx = IngestContext::default();

        let row: RawRecord = [(ALL_ENTRIES_KEY, "7"), (ROOT_COLUMN, "dadeega"), (GLOSS_COLUMN, "eat")]
            .into_iter()
            .collect();
        let entry = processor.verb_root_entry(&row, &RawRecord::new(), &mut ctx);

        assert_eq!(entry.transcription, "dade\u{301}e\u{301}ga");
        assert_eq!(entry.morpheme_break, entry.transcription);
        assert_eq!(ctx.diagnostics.len(), 1);
        let flagged = ctx.diagnostics.in_category(DiagnosticCategory::ClueMismatch);
        assert_eq!(flagged.len(), 1);
        assert_eq!(
            flagged[0],
            "Converted stem \"dade\u{301}e\u{301}ga\" (from uchihara \"dade:!ga\") differs from root \"dadeega\" for gloss \"eat\"; keeping the converted stem."
        );
    }

    #[test]
    fn test_root_entry_matching_root_is_not_flagged() {
        let tables = AuxiliaryTables {
            stems_glosses: vec![StemGloss::new("dadeega", "eat")],
            ..Default::default()
        };
        let converter = UchiharaConverter::new();
        let processor = VerbProcessor::new(&tables, &converter);
        let mut ctx = IngestContext::default();

        let row: RawRecord = [(ROOT_COLUMN, "dadeega"), (GLOSS_COLUMN, "eat")].into_iter().collect();
        let entry = processor.verb_root_entry(&row, &RawRecord::new(), &mut ctx);

        assert_eq!(entry.transcription, "dadeega");
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_comments_fall_back_to_plural_numeric() {
        let tables = AuxiliaryTables::default();
        let converter = UchiharaConverter::new();
        let processor = VerbProcessor::new(&tables, &converter);
        let mut ctx = IngestContext::default();
        let extension: RawRecord = [(PAGE_REFERENCE, "84"), ("source_3_3pl_prs_numeric", "1034")]
            .into_iter()
            .collect();

        let comments = processor.comments(VERB_SURFACE_FORMS[0], &extension, "1", &mut ctx);
        assert_eq!(
            comments,
            "Feeling 1975:84 (1034); narrow phonetic transcription source: Uchihara DB."
        );

        let comments = processor.comments(VERB_SURFACE_FORMS[0], &RawRecord::new(), "1", &mut ctx);
        assert_eq!(comments, DEFAULT_COMMENTS);
        assert_eq!(ctx.diagnostics.count(DiagnosticCategory::MissingReference), 1);
    }

    #[test]
    fn test_glottal_grade_translation_is_provisional() {
        let tables = AuxiliaryTables::default();
        let converter = UchiharaConverter::new();
        let processor = VerbProcessor::new(&tables, &converter);
        let mut ctx = IngestContext::default();
        let extension: RawRecord = [(HEADWORD_TRANSLATION, "He is eating")].into_iter().collect();

        let glottal = VERB_SURFACE_FORMS[1];
        assert_eq!(
            processor.translation(glottal, &extension, "1", "1SG.A", &mut ctx),
            "I am eating (FIXME)"
        );
        assert_eq!(
            processor.translation(VERB_SURFACE_FORMS[0], &extension, "1", "3SG.A.i", &mut ctx),
            "He is eating"
        );
        assert!(ctx.diagnostics.is_empty());

        assert_eq!(
            processor.translation(glottal, &extension, "1", "3SG.A.i", &mut ctx),
            "FIXME"
        );
        assert_eq!(ctx.diagnostics.count(DiagnosticCategory::MissingTranslation), 1);
    }
}
