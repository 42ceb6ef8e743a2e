use std::path::PathBuf;

/// Fatal errors. Anything that is only a data-quality problem is a
/// [`Diagnostic`](crate::diagnostics::Diagnostic) instead.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("File {} is not what we expect it to be. Expected hash {expected}. Got hash {actual}.", .path.display())]
    InputsChanged {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("No paradigm columns defined for {0}")]
    UnknownParadigm(String),

    #[error("Table {table} has no column {column}")]
    MissingColumn { table: String, column: String },

    #[error("CSV error in {}: {message}", .path.display())]
    Csv { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
