use anyhow::{Context, Result};
use dailp_core::{DiagnosticCategory, IngestContext, LexicalEntry};
use serde_json::{Map, Value, json};

use crate::resources::{upsert_category, upsert_source, upsert_tag};
use crate::store::{FORMS, LexicalStore, TAGS, record_id};

/// Form fields the OLD expects that entries do not carry
fn form_defaults() -> Map<String, Value> {
    let defaults = json!({
        "grammaticality": "",
        "speaker_comments": "",
        "status": "tested",
        "date_elicited": null,
        "elicitation_method": null,
        "speaker": null,
        "elicitor": null,
        "verifier": null,
        "files": [],
    });
    match defaults {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UploadReport {
    pub created: usize,
    pub failed: usize,
}

/// Form payload with category, source and tag names resolved to ids.
pub async fn form_payload(
    store: &dyn LexicalStore,
    entry: &LexicalEntry,
    ctx: &mut IngestContext,
) -> Result<Value> {
    let mut tag_ids = Vec::with_capacity(entry.tags.len());
    for tag in &entry.tags {
        tag_ids.push(upsert_tag(store, ctx, tag).await?);
    }
    let category = match entry.syntactic_category.as_str() {
        "" => None,
        name => Some(upsert_category(store, ctx, name).await?),
    };
    let source = match entry.source.as_str() {
        "" => None,
        key => Some(upsert_source(store, ctx, key).await?),
    };

    let mut payload = form_defaults();
    let Value::Object(fields) = serde_json::to_value(entry).context("Failed to serialize entry")? else {
        anyhow::bail!("entry did not serialize to an object");
    };
    payload.extend(fields);
    payload.insert("tags".into(), json!(tag_ids));
    payload.insert("syntactic_category".into(), json!(category));
    payload.insert("source".into(), json!(source));
    Ok(Value::Object(payload))
}

/// Create every entry as a form. A failed entry is logged and skipped.
pub async fn upload(
    store: &dyn LexicalStore,
    entries: &[LexicalEntry],
    ctx: &mut IngestContext,
) -> UploadReport {
    let mut report = UploadReport::default();
    for entry in entries {
        let created = match form_payload(store, entry, ctx).await {
            Ok(payload) => store.create(FORMS, payload).await,
            Err(e) => Err(e),
        };
        match created {
            Ok(form) => {
                report.created += 1;
                tracing::debug!(id = ?record_id(&form), morpheme_break = %entry.morpheme_break, "created form");
            }
            Err(e) => {
                report.failed += 1;
                ctx.warn(
                    DiagnosticCategory::UploadFailed,
                    format!("Failed to create form \"{}\": {e:#}", entry.morpheme_break),
                );
            }
        }
    }
    tracing::info!(created = report.created, failed = report.failed, "upload finished");
    report
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupReport {
    pub forms: usize,
    pub tags: usize,
}

/// Delete every form and then every tag on the instance.
///
/// Development instances only; nothing is spared.
pub async fn clean_up(store: &dyn LexicalStore, ctx: &mut IngestContext) -> Result<CleanupReport> {
    let mut report = CleanupReport::default();
    for collection in [FORMS, TAGS] {
        for record in store.get(collection).await? {
            let Some(id) = record_id(&record) else {
                continue;
            };
            store.delete(collection, id).await?;
            if collection == FORMS {
                report.forms += 1;
            } else {
                report.tags += 1;
            }
        }
    }
    ctx.entities.clear();
    tracing::info!(forms = report.forms, tags = report.tags, "cleaned up OLD instance");
    Ok(report)
}
