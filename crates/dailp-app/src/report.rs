use std::collections::BTreeMap;

use anyhow::{Context, Result};
use dailp_core::context::PrefixKey;
use dailp_core::{DiagnosticLog, PrefixOccurrence};

/// Diagnostics grouped by category, each group in the order it was logged.
pub fn diagnostics_text(log: &DiagnosticLog) -> String {
    log.grouped()
        .into_iter()
        .map(|(category, messages)| {
            let mut lines = vec![format!("{category} ({})", messages.len())];
            lines.extend(messages.iter().map(|m| format!("  {m}")));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn diagnostics_json(log: &DiagnosticLog) -> Result<String> {
    let entries: Vec<_> = log.iter().collect();
    serde_json::to_string_pretty(&entries).context("Failed to serialize diagnostics")
}

/// One line per analysed prefix: prefix, gloss, category and how often it was seen.
pub fn prefix_usage_text(usage: &BTreeMap<PrefixKey, Vec<PrefixOccurrence>>) -> String {
    usage
        .iter()
        .map(|((prefix, gloss, category), seen)| {
            format!("{prefix} {gloss} {category} {}", seen.len())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Per-occurrence listing, for dev mode.
pub fn prefix_occurrences_text(usage: &BTreeMap<PrefixKey, Vec<PrefixOccurrence>>) -> String {
    usage
        .iter()
        .map(|((prefix, gloss, category), seen)| {
            let mut lines = vec![format!("{prefix} {gloss} {category}")];
            lines.extend(seen.iter().map(|o| {
                format!("  {} {} {}", o.all_entries_key, o.base, o.phonetic)
            }));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
