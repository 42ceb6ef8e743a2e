use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const VERB_FILE: &str = "output-VERB-Uchihara-and-AllDictionaryEntries.csv";
pub const VERB_ORIGINAL_FILE: &str = "uchihara-original-cherokee-database-verb-table.csv";
pub const SOURCE_3_MAIN_FILE: &str = "source3outmainverbs.csv";
pub const SOURCE_3_PLURAL_FILE: &str = "source3outpluralverbs.csv";
pub const SOURCE_3_DEFECTIVE_FILE: &str = "source3outdefectiveverbs.csv";
pub const PRONOMINAL_PREFIXES_FILE: &str = "sets-a-b-pronominal-prefixes.csv";

/// Known SHA-256 of every input file
const EXPECTED_HASHES: [(&str, &str); 6] = [
    (
        VERB_FILE,
        "f934e003de3982c1b66b55b6d800166d13074cbfdf3a8255e065bf7c78dab09b",
    ),
    (
        VERB_ORIGINAL_FILE,
        "5f7c3e411c684891407757112f75bd79d6bacd6c5e337c773f9e10726c2df3f2",
    ),
    (
        SOURCE_3_MAIN_FILE,
        "41440db1db5cfe84c269006e8e9d098785861a526e2350b6ee1820e7d4b85d99",
    ),
    (
        SOURCE_3_PLURAL_FILE,
        "5cd30e0223421d9c9355c4351ecb767fb4fc0a96249c2d8a09d8e3b14371e1cb",
    ),
    (
        SOURCE_3_DEFECTIVE_FILE,
        "ebd4f6db2fb31530a764bbab6a3bd977efd6d1d1e45592364b3a0477e04f831e",
    ),
    (
        PRONOMINAL_PREFIXES_FILE,
        "fa48a325dfadde4c5ef905425d7267558fe1156e5d6eb664f728aa6023380935",
    ),
];

/// One input file and the hash it must have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFile {
    pub path: PathBuf,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsConfig {
    pub dir: PathBuf,
}

impl InputsConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    pub fn verb_table(&self) -> PathBuf {
        self.path(VERB_FILE)
    }

    pub fn stems_table(&self) -> PathBuf {
        self.path(VERB_ORIGINAL_FILE)
    }

    /// Feeling 1975 extraction tables in search order
    pub fn source_3_tables(&self) -> [PathBuf; 3] {
        [
            self.path(SOURCE_3_MAIN_FILE),
            self.path(SOURCE_3_PLURAL_FILE),
            self.path(SOURCE_3_DEFECTIVE_FILE),
        ]
    }

    pub fn pronominal_prefixes(&self) -> PathBuf {
        self.path(PRONOMINAL_PREFIXES_FILE)
    }

    /// Every input with its expected hash
    pub fn expected(&self) -> Vec<InputFile> {
        EXPECTED_HASHES
            .iter()
            .map(|(name, sha256)| InputFile {
                path: self.path(name),
                sha256: sha256.to_string(),
            })
            .collect()
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
