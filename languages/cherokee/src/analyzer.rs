use std::fmt;

use dailp_core::{DiagnosticCategory, IngestContext, PrefixOccurrence, RawRecord, Transcriber};

use crate::paradigm::{Number, ParadigmTable, SurfaceFormKind};
use crate::prefixes;
use crate::resolver::ALL_ENTRIES_KEY;

/// Placeholder written for a slot that could not be analysed
pub const UNRESOLVED: &str = "???";
/// Verb-table column with the third person pronominal prefix
pub const PREFIX_COLUMN: &str = "pp";

/// Why a slot of an analysis has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnresolvedReason {
    #[error("unrecognized pronominal prefix")]
    UnrecognizedPrefix,
    #[error("modal suffix could not be determined")]
    UndeterminedModal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Known(String),
    Unresolved(UnresolvedReason),
}

impl Slot {
    pub fn known(value: impl Into<String>) -> Self {
        Slot::Known(value.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Slot::Known(value) => value,
            Slot::Unresolved(_) => UNRESOLVED,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Slot::Known(_))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One morpheme of an analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub transcription: Slot,
    pub gloss: Slot,
    pub category: &'static str,
}

impl Segment {
    fn new(transcription: Slot, gloss: Slot, category: &'static str) -> Self {
        Self {
            transcription,
            gloss,
            category,
        }
    }
}

/// Prefix, root, aspect and modal segments of a surface verb form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordformAnalysis {
    pub prefix: Segment,
    pub root: Segment,
    pub aspect: Segment,
    pub modal: Segment,
}

impl WordformAnalysis {
    pub fn segments(&self) -> [&Segment; 4] {
        [&self.prefix, &self.root, &self.aspect, &self.modal]
    }

    fn join(&self, part: impl Fn(&Segment) -> &str) -> String {
        self.segments().map(part).join("-")
    }

    pub fn morpheme_break(&self) -> String {
        self.join(|s| s.transcription.as_str())
    }

    pub fn morpheme_gloss(&self) -> String {
        self.join(|s| s.gloss.as_str())
    }

    pub fn category_string(&self) -> String {
        self.join(|s| s.category)
    }

    /// Person/number gloss of the pronominal prefix
    pub fn prefix_gloss(&self) -> &str {
        self.prefix.gloss.as_str()
    }

    pub fn is_complete(&self) -> bool {
        self.segments()
            .iter()
            .all(|s| s.transcription.is_known() && s.gloss.is_known())
    }
}

/// The verb root a surface form is built on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMorpheme {
    pub transcription: String,
    pub gloss: String,
}

/// Narrow and broad phonetic transcriptions of a surface form.
#[derive(Debug, Clone, Copy)]
pub struct Transcriptions<'a> {
    pub narrow: &'a str,
    pub phonetic: &'a str,
}

/// Splits surface verb forms into prefix, root, aspect and modal morphemes.
pub struct MorphemeAnalyzer<'a> {
    paradigm: &'a ParadigmTable,
    converter: &'a dyn Transcriber,
}

impl<'a> MorphemeAnalyzer<'a> {
    pub fn new(paradigm: &'a ParadigmTable, converter: &'a dyn Transcriber) -> Self {
        Self {
            paradigm,
            converter,
        }
    }

    /// Analyse one surface form of a verb-table row.
    ///
    /// Returns `None` when the root is empty, the row has no `pp` column or
    /// the paradigm has no verb-table columns for `kind`.
    pub fn analyze(
        &self,
        kind: SurfaceFormKind,
        row: &RawRecord,
        root: &RootMorpheme,
        transcriptions: Transcriptions<'_>,
        number: Number,
        ctx: &mut IngestContext,
    ) -> Option<WordformAnalysis> {
        if root.transcription.is_empty() {
            return None;
        }
        let raw_prefix = row.get(PREFIX_COLUMN)?;
        let form = self.paradigm.form(kind)?;
        let key = row.value(ALL_ENTRIES_KEY);

        let tag = form.prefix_gloss.map(|col| row.value(col)).unwrap_or_default();
        let raw_prefix = self.converter.convert_plain(raw_prefix).replace('-', "");
        let prefix = self.prefix_segment(&raw_prefix, tag, root, transcriptions, key, ctx);

        ctx.record_prefix(
            (
                prefix.transcription.to_string(),
                prefix.gloss.to_string(),
                prefix.category.to_string(),
            ),
            PrefixOccurrence {
                base: root.transcription.clone(),
                phonetic: transcriptions.phonetic.to_string(),
                all_entries_key: key.to_string(),
            },
        );

        let aspect = Segment::new(
            Slot::Known(self.converter.convert_plain(row.value(form.aspect))),
            Slot::known(kind.tense.aspect_gloss()),
            "T",
        );

        let analysis = WordformAnalysis {
            prefix,
            root: Segment::new(
                Slot::known(&root.transcription),
                Slot::known(&root.gloss),
                "V",
            ),
            aspect,
            modal: modal_segment(transcriptions, key, ctx),
        };

        tracing::debug!(
            key,
            form = %kind,
            number = number.as_str(),
            morpheme_break = %analysis.morpheme_break(),
            morpheme_gloss = %analysis.morpheme_gloss(),
            categories = %analysis.category_string(),
            "analysed surface form"
        );
        Some(analysis)
    }

    fn prefix_segment(
        &self,
        raw_prefix: &str,
        tag: &str,
        root: &RootMorpheme,
        transcriptions: Transcriptions<'_>,
        key: &str,
        ctx: &mut IngestContext,
    ) -> Segment {
        let Some(classified) = prefixes::classify(raw_prefix, tag, &root.transcription) else {
            ctx.warn(
                DiagnosticCategory::UnrecognizedPrefix,
                format!(
                    "Unrecognized pronominal prefix \"{raw_prefix}\" for \"{}\" with verb root/base \"{}\" ({key})",
                    transcriptions.narrow, root.transcription
                ),
            );
            let unresolved = Slot::Unresolved(UnresolvedReason::UnrecognizedPrefix);
            return Segment::new(unresolved.clone(), unresolved, "PRO");
        };

        if classified.group.is_mixed() {
            ctx.warn(
                DiagnosticCategory::AmbiguousPrefix,
                format!(
                    "Unclear pronominal prefix group \"{raw_prefix}\" for \"{}\" ({key}). Assuming it is \"{}\" \"{}\".",
                    transcriptions.narrow, classified.prefix, classified.gloss
                ),
            );
        }
        Segment::new(
            Slot::Known(classified.prefix),
            Slot::Known(classified.gloss),
            "PRO",
        )
    }
}

/// The modal suffix, read off the final letter of either transcription.
fn modal_segment(transcriptions: Transcriptions<'_>, key: &str, ctx: &mut IngestContext) -> Segment {
    let Transcriptions { narrow, phonetic } = transcriptions;
    let ends_with = |c: char| phonetic.ends_with(c) || narrow.ends_with(c);

    let (suffix, gloss) = if ends_with('a') {
        (Slot::known("a"), Slot::known("IND"))
    } else if ends_with('i') {
        (Slot::known("i"), Slot::known("MOT"))
    } else {
        ctx.warn(
            DiagnosticCategory::UndeterminedModal,
            format!("Unable to determine modal suffix for \"{narrow}\" \"{phonetic}\" ({key})."),
        );
        let unresolved = Slot::Unresolved(UnresolvedReason::UndeterminedModal);
        (unresolved.clone(), unresolved)
    };
    Segment::new(suffix, gloss, "MOD")
}
