pub mod affixes;
pub mod analyzer;
pub mod converter;
pub mod fuzzy;
pub mod paradigm;
pub mod prefixes;
pub mod resolver;
pub mod translation;
pub mod verbs;

#[cfg(test)]
mod tests;

pub use affixes::{AffixAllomorphSet, AffixCategory, Environment, process_affixes, split};
pub use analyzer::{MorphemeAnalyzer, RootMorpheme, Segment, Slot, Transcriptions, UnresolvedReason, WordformAnalysis};
pub use converter::UchiharaConverter;
pub use paradigm::{Number, ParadigmTable, SurfaceFormKind, Tense, VERB_SURFACE_FORMS, VerbClass};
pub use prefixes::{PrefixGroup, PronominalPrefix};
pub use resolver::{StemGloss, find_extension, find_gloss_match};
pub use verbs::{AuxiliaryTables, VerbProcessor, process_verbs};
