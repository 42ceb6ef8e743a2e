use dailp_core::{DiagnosticCategory, IngestContext, RawRecord, Table};

use crate::analyzer::{MorphemeAnalyzer, RootMorpheme, Transcriptions};
use crate::converter::UchiharaConverter;
use crate::paradigm::{Number, ParadigmTable, VERB_SURFACE_FORMS};
use crate::resolver::{ALL_ENTRIES_KEY, StemGloss};
use crate::verbs::{AuxiliaryTables, VerbProcessor, process_verbs};

const HGRADE_NARROW: &str = "prs_prs_lparen_h_grade_rparen_colon_sg_sf";
const HGRADE_TAG: &str = "prs_prs_lparen_h_grade_rparen_colon_sg_tag";
const GLOTTAL_NARROW: &str = "prs_prs_lparen_glottstop_grade_rparen_sf";
const GLOTTAL_TAG: &str = "prs_prs_lparen_glottstop_grade_rparen_tag";
const PHONETIC_1: &str =
    "simple_phonetics_lparen_with_fslash_h_fslash_plus_fslash_glottstop_fslash_rparen_1";
const PHONETIC_2: &str =
    "simple_phonetics_lparen_with_fslash_h_fslash_plus_fslash_glottstop_fslash_rparen_2";

fn verb_row(key: &str, narrow: &str, glottal_narrow: &str) -> RawRecord {
    verb_row_with_prefix(key, "ka", "3SG", narrow, glottal_narrow)
}

fn verb_row_with_prefix(
    key: &str,
    pp: &str,
    tag: &str,
    narrow: &str,
    glottal_narrow: &str,
) -> RawRecord {
    [
        (ALL_ENTRIES_KEY, key),
        ("root_lparen_mod_rparen", "dadeega"),
        ("gloss", "eat"),
        ("class", "1"),
        ("tr", "t"),
        ("pp", pp),
        ("ppp", ""),
        ("prs_asp", "h"),
        (HGRADE_NARROW, narrow),
        (HGRADE_TAG, tag),
        (PHONETIC_1, "aadeega"),
        (GLOTTAL_NARROW, glottal_narrow),
        (GLOTTAL_TAG, "1SG"),
        (PHONETIC_2, "ciideega"),
    ]
    .into_iter()
    .collect()
}

fn auxiliary_tables() -> AuxiliaryTables {
    let fields = [
        (ALL_ENTRIES_KEY, "101"),
        ("source_3_3sg_prs_syllabary", "ᎠᏓᏕᎦ"),
        ("source_3_3sg_prs_numeric", "1034"),
        ("source_3_1sg_prs_syllabary", "ᏥᏓᏕᎦ"),
        ("source_3_1sg_prs_numeric", "1035"),
        ("source_3_headword_translation", "He is eating it"),
        ("df75_page_ref", "84"),
    ];
    let headers = fields.iter().map(|(column, _)| column.to_string()).collect();
    let extension: RawRecord = fields.into_iter().collect();

    AuxiliaryTables {
        source_3: vec![
            Table::new("source3outmainverbs", headers, vec![extension]),
            Table::default(),
        ],
        stems_glosses: vec![StemGloss::new("dadeega", "eat")],
    }
}

#[test]
fn test_end_to_end_third_person_form() {
    let tables = auxiliary_tables();
    let converter = UchiharaConverter::new();
    let mut ctx = IngestContext::new("ingest-uchihara-root:test");

    let rows = vec![verb_row("101", "a:`dade:!ga", "")];
    let entries = process_verbs(&rows, &tables, &converter, &mut ctx);
    assert_eq!(entries.len(), 2);

    let root = &entries[0];
    assert_eq!(root.transcription, "dadeega");
    assert_eq!(root.morpheme_gloss, "eat");
    assert_eq!(
        root.tags,
        vec![
            "ingest-uchihara-root:test",
            "all-entries-key:101",
            "uchihara-db-class:1",
            "transitivity:t",
            "pp-set:ka",
        ]
    );

    let surface = &entries[1];
    assert_eq!(
        surface.narrow_phonetic_transcription,
        "a\u{300}a\u{300}dade\u{301}e\u{301}ga"
    );
    assert_eq!(surface.transcription, "ᎠᏓᏕᎦ");
    assert_eq!(surface.morpheme_break, "ka-dadeega-h-a");
    assert_eq!(surface.morpheme_gloss, "3SG.A.i-eat-PRS-IND");
    assert_eq!(surface.syntactic_category_string, "PRO-V-T-MOD");
    assert_eq!(surface.translation(), Some("He is eating it"));
    assert_eq!(
        surface.comments,
        "Feeling 1975:84 (1034); narrow phonetic transcription source: Uchihara DB."
    );
    assert_eq!(surface.syntactic_category, "S");
    assert_eq!(surface.tags, vec!["ingest-uchihara-root:test"]);

    // the glottal-grade cell is empty for this row
    assert_eq!(ctx.diagnostics.len(), 1);
    assert_eq!(ctx.diagnostics.count(DiagnosticCategory::MissingSurfaceForm), 1);
}

#[test]
fn test_end_to_end_first_person_form() {
    let tables = auxiliary_tables();
    let converter = UchiharaConverter::new();
    let mut ctx = IngestContext::default();

    let rows = vec![verb_row("101", "a:`dade:!ga", "ci:de:!gi")];
    let entries = process_verbs(&rows, &tables, &converter, &mut ctx);
    assert_eq!(entries.len(), 3);

    let glottal = &entries[2];
    assert_eq!(glottal.transcription, "ᏥᏓᏕᎦ");
    assert_eq!(glottal.morpheme_break, "ci-dadeega-h-a");
    assert_eq!(glottal.morpheme_gloss, "1SG.A-eat-PRS-IND");
    assert_eq!(glottal.translation(), Some("I am eating it (FIXME)"));
    assert!(glottal.comments.starts_with("Feeling 1975:84 (1035);"));
    assert!(ctx.diagnostics.is_empty());
}

#[test]
fn test_rows_without_key_are_skipped() {
    let tables = auxiliary_tables();
    let converter = UchiharaConverter::new();
    let mut ctx = IngestContext::default();

    let rows = vec![verb_row("", "a:`dade:!ga", ""), verb_row("  ", "ga", "")];
    assert!(process_verbs(&rows, &tables, &converter, &mut ctx).is_empty());
    assert!(ctx.diagnostics.is_empty());
}

#[test]
fn test_missing_extension_is_reported_once_per_row() {
    let tables = auxiliary_tables();
    let converter = UchiharaConverter::new();
    let mut ctx = IngestContext::default();

    let rows = vec![verb_row("999", "a:`dade:!ga", "")];
    let entries = process_verbs(&rows, &tables, &converter, &mut ctx);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].transcription, "???");
    assert_eq!(entries[1].translation(), Some("???"));
    assert_eq!(ctx.diagnostics.count(DiagnosticCategory::MissingExtension), 1);
    assert_eq!(ctx.diagnostics.count(DiagnosticCategory::MissingTranscription), 1);
    assert_eq!(ctx.diagnostics.count(DiagnosticCategory::MissingTranslation), 1);
    assert_eq!(ctx.diagnostics.count(DiagnosticCategory::MissingReference), 1);
}

#[test]
fn test_prefix_usage_report() {
    let tables = auxiliary_tables();
    let converter = UchiharaConverter::new();
    let mut ctx = IngestContext::default();

    let rows = vec![
        verb_row("101", "a:`dade:!ga", "ci:de:!gi"),
        verb_row("101", "ga", ""),
    ];
    VerbProcessor::new(&tables, &converter).process(&rows, &mut ctx);

    let third = ("ka".to_string(), "3SG.A.i".to_string(), "PRO".to_string());
    let first = ("ci".to_string(), "1SG.A".to_string(), "PRO".to_string());
    assert_eq!(ctx.prefix_usage[&third].len(), 2);
    assert_eq!(ctx.prefix_usage[&first].len(), 1);
    assert_eq!(ctx.prefix_usage[&third][0].base, "dadeega");
    assert_eq!(ctx.prefix_usage[&third][0].phonetic, "aadeega");
}

#[test]
fn test_analysis_segments_concatenate_to_break_and_gloss() {
    let paradigm = ParadigmTable::feeling_1975();
    let converter = UchiharaConverter::new();
    let analyzer = MorphemeAnalyzer::new(&paradigm, &converter);
    let mut ctx = IngestContext::default();

    let cases = [
        ("ka", "3SG", "gadeegha"),
        ("uu", "3SG", "uudeeghi"),
        ("kaa/\u{d8}", "1SG", "ciideegha"),
        ("zz", "3SG", "zzdeegho"),
    ];
    for (pp, tag, narrow) in cases {
        let row = verb_row_with_prefix("5", pp, tag, narrow, "");

        let root = RootMorpheme {
            transcription: "dadeega".into(),
            gloss: "eat".into(),
        };
        let analysis = analyzer
            .analyze(
                VERB_SURFACE_FORMS[0],
                &row,
                &root,
                Transcriptions {
                    narrow,
                    phonetic: narrow,
                },
                Number::Singular,
                &mut ctx,
            )
            .expect("row has a root and a pp column");

        let segments = analysis.segments();
        let expected_break: Vec<&str> = segments.iter().map(|s| s.transcription.as_str()).collect();
        let expected_gloss: Vec<&str> = segments.iter().map(|s| s.gloss.as_str()).collect();
        assert_eq!(analysis.morpheme_break(), expected_break.join("-"), "{pp}");
        assert_eq!(analysis.morpheme_gloss(), expected_gloss.join("-"), "{pp}");
        assert_eq!(analysis.morpheme_break().split('-').count(), 4);
        assert_eq!(segments[1].transcription.as_str(), "dadeega");
    }
}
