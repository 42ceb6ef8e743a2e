use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::inputs::InputsConfig;
use self::old::OldConfig;

pub mod inputs;
pub mod old;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub old: OldConfig,
    pub inputs: InputsConfig,

    /// Verbose per-form trace output
    pub dev_mode: bool,
    /// Process everything but do not touch the OLD instance
    pub dry_run: bool,
    /// Namespace of the tag that marks every record of a run
    pub ingest_tag_namespace: String,
}

impl Config {
    pub fn new() -> Self {
        let inputs_dir = env::var("INPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("inputs"));

        Config {
            old: OldConfig::new(),
            inputs: InputsConfig::new(inputs_dir),

            dev_mode: env_flag("DEV_MODE"),
            dry_run: env_flag("DRY_RUN"),
            ingest_tag_namespace: "ingest-uchihara-root".to_string(),
        }
    }

    /// Name of the ingest tag for a run started at `timestamp`
    pub fn ingest_tag(&self, timestamp: &str) -> String {
        format!("{}:{}", self.ingest_tag_namespace, timestamp)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Only the literal `true` switches a flag on
pub(crate) fn env_flag(name: &str) -> bool {
    env::var(name).map(|v| v == "true").unwrap_or(false)
}
