use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dailp_config::Config;
use dailp_config::inputs::InputsConfig;

#[derive(Parser, Debug)]
#[clap(
    name = "dailp-ingest",
    about = "Ingest Uchihara database verbs into an OLD instance"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Command>,

    /// Process everything but leave the OLD instance untouched
    #[clap(long, global = true)]
    pub dry_run: bool,

    /// Directory holding the input spreadsheets (overrides INPUTS_DIR)
    #[clap(long, global = true)]
    pub inputs_dir: Option<PathBuf>,

    /// Print the diagnostics as JSON instead of grouped text
    #[clap(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Verify, process and upload (the default)
    #[default]
    Run,
    /// Check the input hashes and exit
    Verify,
    /// Print the current hash of every input
    Hashes,
    /// Delete every form and tag on the OLD instance
    Clean,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }

    /// Flags win over the environment
    pub fn apply(&self, config: &mut Config) {
        if self.dry_run {
            config.dry_run = true;
        }
        if let Some(dir) = &self.inputs_dir {
            config.inputs = InputsConfig::new(dir.clone());
        }
    }
}
