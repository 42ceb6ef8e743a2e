pub mod context;
pub mod diagnostics;
pub mod entry;
pub mod error;
pub mod header;
pub mod language;
pub mod normalize;
pub mod record;

pub use context::{EntityCache, EntityKind, IngestContext, PrefixOccurrence};
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticLog};
pub use entry::{LexicalEntry, Translation};
pub use error::IngestError;
pub use language::Transcriber;
pub use record::{RawRecord, Table};
