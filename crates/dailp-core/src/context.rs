use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::diagnostics::{DiagnosticCategory, DiagnosticLog};

/// Kinds of remote entity that records refer to by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Tag,
    SyntacticCategory,
    Source,
}

impl EntityKind {
    /// Collection name on the remote store
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Tag => "tags",
            EntityKind::SyntacticCategory => "syntacticcategories",
            EntityKind::Source => "sources",
        }
    }
}

/// Read-through cache of remote entities resolved during this run.
#[derive(Debug, Default)]
pub struct EntityCache {
    entities: HashMap<(EntityKind, String), Value>,
}

impl EntityCache {
    pub fn get(&self, kind: EntityKind, name: &str) -> Option<&Value> {
        self.entities.get(&(kind, name.to_string()))
    }

    pub fn insert(&mut self, kind: EntityKind, name: impl Into<String>, entity: Value) {
        self.entities.insert((kind, name.into()), entity);
    }

    /// Numeric id of a cached entity
    pub fn id(&self, kind: EntityKind, name: &str) -> Option<u64> {
        self.get(kind, name).and_then(|e| e.get("id")).and_then(Value::as_u64)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

/// Where one analysed pronominal prefix was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixOccurrence {
    pub base: String,
    pub phonetic: String,
    pub all_entries_key: String,
}

/// Prefix, gloss and category triple of an analysed pronominal prefix.
pub type PrefixKey = (String, String, String);

/// Run-scoped state handed to every pipeline component.
#[derive(Debug)]
pub struct IngestContext {
    /// Name of the tag attached to every record created by this run
    pub ingest_tag: String,
    pub entities: EntityCache,
    pub diagnostics: DiagnosticLog,
    pub prefix_usage: BTreeMap<PrefixKey, Vec<PrefixOccurrence>>,
}

impl IngestContext {
    pub fn new(ingest_tag: impl Into<String>) -> Self {
        Self {
            ingest_tag: ingest_tag.into(),
            entities: EntityCache::default(),
            diagnostics: DiagnosticLog::new(),
            prefix_usage: BTreeMap::new(),
        }
    }

    pub fn warn(&mut self, category: DiagnosticCategory, message: impl Into<String>) {
        self.diagnostics.push(category, message);
    }

    pub fn record_prefix(&mut self, key: PrefixKey, occurrence: PrefixOccurrence) {
        self.prefix_usage.entry(key).or_default().push(occurrence);
    }
}

impl Default for IngestContext {
    fn default() -> Self {
        Self::new("ingest")
    }
}
