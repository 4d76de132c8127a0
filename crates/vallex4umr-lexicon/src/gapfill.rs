//! Gap-filling from the cross-resource mapping table.
//!
//! The mapping table knows identifiers the annotated corpus never attested.
//! Each such identifier gets a reduced entry built from the table row alone;
//! its role string comes from the legacy lexicon when available. Corpus
//! entries are never touched.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::builder::UNCOMPUTED_ROLES;
use crate::entry::{ConsolidatedEntry, EntryMap, Provenance};
use crate::identifier::{self, UmrId};
use crate::resolve::{self, LegacyFrameTable, SynsetTable};
use crate::roles::{self, UnknownFunctorPolicy, ROLE_PLACEHOLDER};

/// One row of the identifier-to-URI mapping source. The last three fields
/// feed only the gap-fill path and may be absent from URI-only exports.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MappingRow {
    #[serde(rename = "UMR_id")]
    pub umr_id: String,
    pub uri: String,
    #[serde(default)]
    pub lemma: String,
    #[serde(default)]
    pub id_synset: String,
    #[serde(default)]
    pub arguments_set: String,
}

/// Adds a reduced entry for every mapping row whose identifier has no entry
/// yet. Rows for existing identifiers are ignored wholesale; corpus-observed
/// data always wins. Returns the number of entries added.
pub fn fill_gaps(
    rows: &[MappingRow],
    frames: &LegacyFrameTable,
    synsets: &SynsetTable,
    entries: &mut EntryMap,
    policy: UnknownFunctorPolicy,
) -> usize {
    let mut added = 0;
    for row in rows {
        if identifier::is_abstract_predicate(&row.umr_id) {
            debug!(umr = %row.umr_id, "skipping abstract predicate in mapping table");
            continue;
        }
        let id = match UmrId::parse(&row.umr_id) {
            Ok(id) => id,
            Err(err) => {
                warn!(error = %err, "skipping malformed mapping row");
                continue;
            }
        };
        if entries.contains_key(&id) {
            continue;
        }

        let entry = ConsolidatedEntry {
            id: id.clone(),
            locations: Vec::new(),
            v1_frames: Vec::new(),
            examples: Vec::new(),
            roles: gap_roles(row, frames, policy),
            lemma: row.lemma.clone(),
            synset_id: row.id_synset.clone(),
            definition: resolve::resolve_definition(&row.id_synset, synsets),
            uri: row.uri.clone(),
            pos: resolve::resolve_pos(&row.id_synset),
            gramm_info: String::new(),
            provenance: Provenance::GapFilled,
        };
        entries.insert(id, entry);
        added += 1;
    }
    added
}

/// Role string for a gap-filled entry: the legacy lexicon's functor set when
/// present, else the mapping row's own `arguments_set`, else the bare
/// placeholder.
fn gap_roles(row: &MappingRow, frames: &LegacyFrameTable, policy: UnknownFunctorPolicy) -> String {
    let raw = match frames.arguments_for(&row.uri, &row.id_synset) {
        Some(arguments) => arguments,
        None => {
            debug!(umr = %row.umr_id, "no legacy frame for mapping row, using its own arguments");
            row.arguments_set.as_str()
        }
    };
    if raw.trim().is_empty() {
        return ROLE_PLACEHOLDER.to_string();
    }
    let functors = roles::parse_functor_list(raw);
    match roles::roles_to_propbank(&functors, policy) {
        Ok(roles) => roles,
        Err(err) => {
            warn!(umr = %row.umr_id, error = %err, "marking roles NA");
            UNCOMPUTED_ROLES.to_string()
        }
    }
}
