use dailp_core::entry::{FEELING_SOURCE, UCHIHARA_DB_SOURCE};
use dailp_core::{DiagnosticCategory, EntityKind, IngestContext, LexicalEntry, Translation};

use super::memory_store::MemoryStore;
use crate::resources::{create_auxiliary_resources, upsert_source, upsert_tag};
use crate::store::{CATEGORIES, FORMS, LexicalStore, SOURCES, TAGS};
use crate::upload::{clean_up, form_payload, upload};

fn root_entry(ctx: &IngestContext) -> LexicalEntry {
    LexicalEntry {
        transcription: "dadeega".into(),
        morpheme_break: "dadeega".into(),
        morpheme_gloss: "eat".into(),
        translations: vec![Translation::new("eat")],
        syntactic_category: "V".into(),
        source: UCHIHARA_DB_SOURCE.into(),
        tags: vec![ctx.ingest_tag.clone(), "pp-set:ka\u{301}".into()],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_auxiliary_resources_are_created_once() {
    let store = MemoryStore::default();
    let mut ctx = IngestContext::new("ingest-uchihara-root:2026-10-18T09:30:00");

    create_auxiliary_resources(&store, &mut ctx).await.unwrap();
    assert_eq!(store.records(TAGS).len(), 1);
    assert_eq!(store.records(CATEGORIES).len(), 2);
    assert_eq!(store.records(SOURCES).len(), 2);

    // a fresh run finds the existing categories and sources
    let mut next = IngestContext::new("ingest-uchihara-root:2026-10-18T10:00:00");
    create_auxiliary_resources(&store, &mut next).await.unwrap();
    assert_eq!(store.records(TAGS).len(), 2);
    assert_eq!(store.records(CATEGORIES).len(), 2);
    assert_eq!(store.records(SOURCES).len(), 2);
    assert_eq!(
        next.entities.get(EntityKind::Source, FEELING_SOURCE).unwrap()["year"],
        1975
    );
}

#[tokio::test]
async fn test_tags_are_normalized_and_cached() {
    let store = MemoryStore::default();
    let mut ctx = IngestContext::default();

    let first = upsert_tag(&store, &mut ctx, "pp-set:k\u{e1}").await.unwrap();
    let second = upsert_tag(&store, &mut ctx, "pp-set:ka\u{301}").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(store.records(TAGS).len(), 1);
    assert_eq!(store.records(TAGS)[0]["name"], "pp-set:ka\u{301}");
}

#[tokio::test]
async fn test_unknown_source_is_an_error() {
    let store = MemoryStore::default();
    let mut ctx = IngestContext::default();
    assert!(upsert_source(&store, &mut ctx, "nobody2000").await.is_err());
    assert!(store.records(SOURCES).is_empty());
}

#[tokio::test]
async fn test_payload_resolves_names_to_ids() {
    let store = MemoryStore::default();
    let mut ctx = IngestContext::new("ingest-test");
    create_auxiliary_resources(&store, &mut ctx).await.unwrap();

    let entry = root_entry(&ctx);
    let payload = form_payload(&store, &entry, &mut ctx).await.unwrap();

    let v = ctx.entities.id(EntityKind::SyntacticCategory, "V").unwrap();
    let source = ctx.entities.id(EntityKind::Source, UCHIHARA_DB_SOURCE).unwrap();
    let ingest = ctx.entities.id(EntityKind::Tag, "ingest-test").unwrap();
    assert_eq!(payload["syntactic_category"], v);
    assert_eq!(payload["source"], source);
    assert_eq!(payload["tags"][0], ingest);
    assert_eq!(payload["tags"].as_array().unwrap().len(), 2);
    assert_eq!(payload["morpheme_gloss"], "eat");
    assert_eq!(payload["translations"][0]["transcription"], "eat");
    assert_eq!(payload["status"], "tested");
}

#[tokio::test]
async fn test_affix_entry_without_source() {
    let store = MemoryStore::default();
    let mut ctx = IngestContext::default();
    let entry = LexicalEntry {
        transcription: "ci".into(),
        morpheme_break: "ci".into(),
        morpheme_gloss: "1SG.A".into(),
        syntactic_category: "PRO".into(),
        ..Default::default()
    };
    let payload = form_payload(&store, &entry, &mut ctx).await.unwrap();
    assert!(payload["source"].is_null());
    assert_eq!(
        store.records(CATEGORIES)[0]["description"],
        "Pronominal prefixes"
    );
}

#[tokio::test]
async fn test_failed_upload_is_a_diagnostic() {
    let store = MemoryStore::rejecting(FORMS);
    let mut ctx = IngestContext::new("ingest-test");
    let entries = vec![root_entry(&ctx), root_entry(&ctx)];

    let report = upload(&store, &entries, &mut ctx).await;
    assert_eq!(report.created, 0);
    assert_eq!(report.failed, 2);
    assert_eq!(ctx.diagnostics.count(DiagnosticCategory::UploadFailed), 2);
}

#[tokio::test]
async fn test_upload_and_clean_up() {
    let store = MemoryStore::default();
    let mut ctx = IngestContext::new("ingest-test");
    create_auxiliary_resources(&store, &mut ctx).await.unwrap();

    let entries = vec![root_entry(&ctx)];
    let report = upload(&store, &entries, &mut ctx).await;
    assert_eq!(report.created, 1);
    assert!(ctx.diagnostics.is_empty());

    let cleaned = clean_up(&store, &mut ctx).await.unwrap();
    assert_eq!(cleaned.forms, 1);
    assert_eq!(cleaned.tags, 2);
    assert!(store.get(FORMS).await.unwrap().is_empty());
    assert!(ctx.entities.is_empty());
}
