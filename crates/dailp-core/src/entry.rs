use serde::{Deserialize, Serialize};

/// Key of the Uchihara database source record
pub const UCHIHARA_DB_SOURCE: &str = "uchihara2018cherokee";
/// Key of the Feeling 1975 dictionary source record
pub const FEELING_SOURCE: &str = "feeling1975cherokee";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub transcription: String,
    pub grammaticality: String,
}

impl Translation {
    pub fn new(transcription: impl Into<String>) -> Self {
        Self {
            transcription: transcription.into(),
            grammaticality: String::new(),
        }
    }
}

/// One record ready for upload.
///
/// Categories, sources and tags are carried by name or key; the upload layer
/// resolves them to remote ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalEntry {
    pub transcription: String,
    #[serde(default)]
    pub phonetic_transcription: String,
    #[serde(default)]
    pub narrow_phonetic_transcription: String,
    pub morpheme_break: String,
    pub morpheme_gloss: String,
    /// Category of each morpheme, e.g. `PRO-V-T-MOD`
    #[serde(default)]
    pub syntactic_category_string: String,
    pub translations: Vec<Translation>,
    pub syntactic_category: String,
    pub source: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: String,
}

impl LexicalEntry {
    /// First translation, if any
    pub fn translation(&self) -> Option<&str> {
        self.translations.first().map(|t| t.transcription.as_str())
    }
}
