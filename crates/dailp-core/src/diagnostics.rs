use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Kinds of non-fatal data-quality issue collected during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCategory {
    /// No auxiliary ("source 3") row for a wordform key
    MissingExtension,
    /// Gloss could not be matched to the historical stem table
    UnmatchedGloss,
    /// Converted historical stem differs from the root recorded in the verb table
    ClueMismatch,
    UnrecognizedPrefix,
    /// Prefix belongs to a mixed group and was resolved to a canonical form
    AmbiguousPrefix,
    UndeterminedModal,
    MissingSurfaceForm,
    MissingTranscription,
    MissingTranslation,
    /// Page reference or numeric id missing from the comments
    MissingReference,
    NegativeOmitted,
    UploadFailed,
}

impl DiagnosticCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCategory::MissingExtension => "missing-extension",
            DiagnosticCategory::UnmatchedGloss => "unmatched-gloss",
            DiagnosticCategory::ClueMismatch => "clue-mismatch",
            DiagnosticCategory::UnrecognizedPrefix => "unrecognized-prefix",
            DiagnosticCategory::AmbiguousPrefix => "ambiguous-prefix",
            DiagnosticCategory::UndeterminedModal => "undetermined-modal",
            DiagnosticCategory::MissingSurfaceForm => "missing-surface-form",
            DiagnosticCategory::MissingTranscription => "missing-transcription",
            DiagnosticCategory::MissingTranslation => "missing-translation",
            DiagnosticCategory::MissingReference => "missing-reference",
            DiagnosticCategory::NegativeOmitted => "negative-omitted",
            DiagnosticCategory::UploadFailed => "upload-failed",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub message: String,
}

/// Append-only log of diagnostics for one run.
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: DiagnosticCategory, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(category = category.as_str(), "{}", message);
        self.entries.push(Diagnostic { category, message });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Messages of one category in the order they were logged
    pub fn in_category(&self, category: DiagnosticCategory) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|d| d.category == category)
            .map(|d| d.message.as_str())
            .collect()
    }

    pub fn count(&self, category: DiagnosticCategory) -> usize {
        self.entries.iter().filter(|d| d.category == category).count()
    }

    /// All messages grouped by category, each group in logging order
    pub fn grouped(&self) -> BTreeMap<DiagnosticCategory, Vec<&str>> {
        let mut groups: BTreeMap<DiagnosticCategory, Vec<&str>> = BTreeMap::new();
        for diagnostic in &self.entries {
            groups
                .entry(diagnostic.category)
                .or_default()
                .push(diagnostic.message.as_str());
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_preserves_order_within_category() {
        let mut log = DiagnosticLog::new();
        log.push(DiagnosticCategory::UnmatchedGloss, "first");
        log.push(DiagnosticCategory::MissingExtension, "other");
        log.push(DiagnosticCategory::UnmatchedGloss, "second");

        let grouped = log.grouped();
        assert_eq!(grouped[&DiagnosticCategory::UnmatchedGloss], vec!["first", "second"]);
        assert_eq!(grouped[&DiagnosticCategory::MissingExtension], vec!["other"]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.count(DiagnosticCategory::UnmatchedGloss), 2);
    }
}
