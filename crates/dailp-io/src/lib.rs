pub mod integrity;
pub mod tables;

pub use integrity::{input_hashes, sha256_file, verify_inputs};
pub use tables::{load_table, load_stems_table, load_verb_table};
