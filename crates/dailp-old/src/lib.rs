mod client;
pub mod resources;
pub mod store;
mod upload;

#[cfg(test)]
mod tests;

pub use client::OldClient;
pub use resources::{create_auxiliary_resources, create_ingest_tag, upsert_category, upsert_source, upsert_tag};
pub use store::LexicalStore;
pub use upload::{CleanupReport, UploadReport, clean_up, form_payload, upload};
