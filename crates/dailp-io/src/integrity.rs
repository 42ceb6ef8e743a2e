//! Input files are pinned by SHA-256 so a run never processes data it was not
//! written against.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use dailp_core::IngestError;
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of a file's contents.
pub fn sha256_file(path: &Path) -> Result<String, IngestError> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => IngestError::MissingInput(path.to_path_buf()),
        _ => IngestError::Io(e),
    })?;

    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// Fail on the first file whose hash differs from the expected one.
pub fn verify_inputs<'a, I>(expected: I) -> Result<(), IngestError>
where
    I: IntoIterator<Item = (&'a Path, &'a str)>,
{
    for (path, expected) in expected {
        let actual = sha256_file(path)?;
        if actual != expected {
            return Err(IngestError::InputsChanged {
                path: path.to_path_buf(),
                expected: expected.to_string(),
                actual,
            });
        }
        tracing::debug!(path = %path.display(), "input verified");
    }
    Ok(())
}

/// Current hash of every file.
pub fn input_hashes<'a, I>(paths: I) -> Result<Vec<(PathBuf, String)>, IngestError>
where
    I: IntoIterator<Item = &'a Path>,
{
    paths
        .into_iter()
        .map(|path| Ok((path.to_path_buf(), sha256_file(path)?)))
        .collect()
}
