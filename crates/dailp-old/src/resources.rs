//! Tags, syntactic categories and sources, created on first use.

use anyhow::{Context, Result};
use dailp_core::entry::{FEELING_SOURCE, UCHIHARA_DB_SOURCE};
use dailp_core::normalize::normalize;
use dailp_core::{EntityKind, IngestContext};
use serde_json::{Value, json};

use crate::store::{LexicalStore, record_id};

/// Field that identifies an entity of each kind
fn identifying_field(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Tag | EntityKind::SyntacticCategory => "name",
        EntityKind::Source => "key",
    }
}

/// Id of a cached entity, or of the remote one found or created for it.
async fn upsert(
    store: &dyn LexicalStore,
    ctx: &mut IngestContext,
    kind: EntityKind,
    name: &str,
    payload: impl FnOnce() -> Result<Value>,
) -> Result<u64> {
    if let Some(id) = ctx.entities.id(kind, name) {
        return Ok(id);
    }

    let field = identifying_field(kind);
    let existing = store
        .get(kind.collection())
        .await?
        .into_iter()
        .find(|e| e.get(field).and_then(Value::as_str) == Some(name));

    let entity = match existing {
        Some(entity) => entity,
        None => {
            let created = store.create(kind.collection(), payload()?).await?;
            tracing::info!(collection = kind.collection(), name, "created");
            created
        }
    };

    let id = record_id(&entity)
        .with_context(|| format!("{} {name} has no id", kind.collection()))?;
    ctx.entities.insert(kind, name, entity);
    Ok(id)
}

pub async fn upsert_tag(store: &dyn LexicalStore, ctx: &mut IngestContext, name: &str) -> Result<u64> {
    let name = normalize(name);
    upsert(store, ctx, EntityKind::Tag, &name, || {
        Ok(json!({ "name": name, "description": "" }))
    })
    .await
}

/// Description given to a newly created category
fn category_description(name: &str) -> &'static str {
    match name {
        "V" => "Verbs",
        "S" => "Surface verb forms",
        "PRO" => "Pronominal prefixes",
        "PPP" => "Prepronominal prefixes",
        "RFX" => "Reflexive and middle prefixes",
        "MOD" => "Modal suffixes",
        "CLT" => "Clitics",
        _ => "",
    }
}

pub async fn upsert_category(store: &dyn LexicalStore, ctx: &mut IngestContext, name: &str) -> Result<u64> {
    upsert(store, ctx, EntityKind::SyntacticCategory, name, || {
        Ok(json!({
            "name": name,
            "description": category_description(name),
            "type": "lexical",
        }))
    })
    .await
}

/// Bibliographic record of a source this ingest cites
pub fn known_source(key: &str) -> Option<Value> {
    match key {
        FEELING_SOURCE => Some(json!({
            "type": "book",
            "key": FEELING_SOURCE,
            "title": "Cherokee-English Dictionary",
            "author": "Feeling, Durbin",
            "year": 1975,
            "publisher": "Cherokee Nation of Oklahoma",
        })),
        UCHIHARA_DB_SOURCE => Some(json!({
            "type": "unpublished",
            "key": UCHIHARA_DB_SOURCE,
            "title": "Cherokee Database",
            "author": "Uchihara, Hiroto",
            "note": "Do not cite.",
            "year": 2018,
        })),
        _ => None,
    }
}

pub async fn upsert_source(store: &dyn LexicalStore, ctx: &mut IngestContext, key: &str) -> Result<u64> {
    upsert(store, ctx, EntityKind::Source, key, || {
        known_source(key).with_context(|| format!("No source record known for key {key}"))
    })
    .await
}

/// Create this run's ingest tag. A tag of the same name is never reused.
pub async fn create_ingest_tag(store: &dyn LexicalStore, ctx: &mut IngestContext) -> Result<u64> {
    let name = normalize(&ctx.ingest_tag);
    let tag = store
        .create(EntityKind::Tag.collection(), json!({ "name": name, "description": "" }))
        .await
        .context("Failed to create ingest tag")?;
    let id = record_id(&tag).context("Ingest tag has no id")?;
    ctx.entities.insert(EntityKind::Tag, name, tag);
    Ok(id)
}

/// Ingest tag, verb categories and sources, before any form is uploaded.
pub async fn create_auxiliary_resources(store: &dyn LexicalStore, ctx: &mut IngestContext) -> Result<()> {
    create_ingest_tag(store, ctx).await?;
    for category in ["V", "S"] {
        upsert_category(store, ctx, category).await?;
    }
    for source in [FEELING_SOURCE, UCHIHARA_DB_SOURCE] {
        upsert_source(store, ctx, source).await?;
    }
    Ok(())
}
