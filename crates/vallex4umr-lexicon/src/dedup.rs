//! Removal of entries subsumed by merged identifiers.

use std::collections::BTreeSet;

use tracing::debug;

use crate::entry::EntryMap;
use crate::identifier::UmrId;

/// Drops every simple entry whose identifier is a constituent of some merged
/// entry's key; the merged entry already represents those senses. Returns
/// the removed identifiers.
///
/// All constituents are collected before any membership test, so a
/// constituent that coincidentally exists as its own key is dropped
/// regardless of map order. Merged keys themselves are never dropped.
pub fn dedup(entries: &mut EntryMap) -> Vec<UmrId> {
    let constituents: BTreeSet<String> = entries
        .keys()
        .filter(|id| id.is_merged())
        .flat_map(|id| id.constituents().map(str::to_string))
        .collect();
    if constituents.is_empty() {
        return Vec::new();
    }

    let subsumed: Vec<UmrId> = entries
        .keys()
        .filter(|id| !id.is_merged() && constituents.contains(id.as_str()))
        .cloned()
        .collect();
    for id in &subsumed {
        entries.remove(id);
        debug!(id = %id, "dropping entry subsumed by a merged identifier");
    }
    subsumed
}
