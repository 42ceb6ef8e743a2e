use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

pub const FORMS: &str = "forms";
pub const TAGS: &str = "tags";
pub const CATEGORIES: &str = "syntacticcategories";
pub const SOURCES: &str = "sources";

/// Remote collections of lexical resources.
#[async_trait]
pub trait LexicalStore: Send + Sync {
    /// Create a record and return it with its assigned id
    async fn create(&self, collection: &str, record: Value) -> Result<Value>;

    async fn get(&self, collection: &str) -> Result<Vec<Value>>;

    async fn delete(&self, collection: &str, id: u64) -> Result<()>;
}

/// Numeric id of a remote record
pub fn record_id(record: &Value) -> Option<u64> {
    record.get("id").and_then(Value::as_u64)
}
