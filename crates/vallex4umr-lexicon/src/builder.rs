//! Entry construction from corpus occurrence records.
//!
//! The builder walks occurrence rows in corpus order, keeping two pieces of
//! per-run state: the entry map under construction and the current
//! paragraph number (updated by paragraph-marker rows, stamped into every
//! location tag). Data conflicts never abort the run; they are collected as
//! [`Conflict`] values for the caller and mirrored to the tracing stream.

use std::fmt;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::entry::{ConsolidatedEntry, EntryMap, Provenance};
use crate::identifier::{self, UmrId};
use crate::resolve::{self, SynsetTable, UriTable};
use crate::roles::{self, UnknownFunctorPolicy};

/// Token in the `id` column marking a paragraph-boundary row.
pub const PARAGRAPH_MARKER: &str = "Par.";

/// Role string stored when the strict policy rejects an occurrence's
/// functor list.
pub const UNCOMPUTED_ROLES: &str = "NA";

/// One row of a frame-occurrence source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrameRecord {
    pub id: String,
    #[serde(rename = "UMR")]
    pub umr: String,
    #[serde(rename = "V1 frame")]
    pub v1_frame: String,
    pub example: String,
    pub roles: String,
    pub lemma: String,
    pub synset_id: String,
    #[serde(rename = "URI lemma")]
    pub uri_lemma: String,
    pub gramm_info: String,
    /// Annotator-supplied gloss; fallback when the synset inventory has no
    /// definition. Absent in older exports.
    #[serde(default)]
    pub definition: String,
}

/// Which scalar two occurrences disagreed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictField {
    Roles,
    GrammInfo,
}

impl fmt::Display for ConflictField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictField::Roles => f.write_str("roles"),
            ConflictField::GrammInfo => f.write_str("gramm_info"),
        }
    }
}

/// A non-fatal mismatch between two occurrences of one identifier. The
/// stored value stays untouched; both location tags are reported so a human
/// can adjudicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub id: UmrId,
    pub field: ConflictField,
    pub kept: String,
    pub observed: String,
    /// Tag of the occurrence that set the kept value.
    pub first_location: String,
    /// Tag of the mismatching occurrence.
    pub location: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} mismatch for `{}`: kept `{}` from {}, saw `{}` at {}",
            self.field, self.id, self.kept, self.first_location, self.observed, self.location
        )
    }
}

/// Streaming entry builder: feed records in corpus order, then [`finish`].
///
/// [`finish`]: EntryBuilder::finish
#[derive(Debug)]
pub struct EntryBuilder<'t> {
    synsets: &'t SynsetTable,
    uris: &'t UriTable,
    policy: UnknownFunctorPolicy,
    entries: EntryMap,
    conflicts: Vec<Conflict>,
    current_par: Option<String>,
}

impl<'t> EntryBuilder<'t> {
    pub fn new(synsets: &'t SynsetTable, uris: &'t UriTable, policy: UnknownFunctorPolicy) -> Self {
        Self {
            synsets,
            uris,
            policy,
            entries: EntryMap::new(),
            conflicts: Vec::new(),
            current_par: None,
        }
    }

    pub fn push_record(&mut self, record: &FrameRecord) {
        if record.id.contains(PARAGRAPH_MARKER) {
            self.current_par = record.id.split_whitespace().last().map(str::to_string);
            return;
        }
        if identifier::is_abstract_predicate(&record.umr) {
            debug!(location = %record.id, umr = %record.umr, "skipping abstract predicate");
            return;
        }
        let id = match UmrId::parse(&record.umr) {
            Ok(id) => id,
            Err(err) => {
                warn!(location = %record.id, error = %err, "skipping malformed identifier");
                return;
            }
        };

        let tag = self.location_tag(&record.id);
        let occurrence_roles = self.occurrence_roles(record, &tag);

        if let Some(existing) = self.entries.get_mut(&id) {
            let first_location = existing.first_location().unwrap_or_default().to_string();
            existing.push_location(tag.clone());
            existing.push_frame(&record.v1_frame);
            existing.push_example(&record.example);

            if occurrence_roles != existing.roles {
                let conflict = Conflict {
                    id: existing.id.clone(),
                    field: ConflictField::Roles,
                    kept: existing.roles.clone(),
                    observed: occurrence_roles,
                    first_location: first_location.clone(),
                    location: tag.clone(),
                };
                warn!(%conflict, "keeping first annotation");
                self.conflicts.push(conflict);
            }
            if record.gramm_info != existing.gramm_info {
                let conflict = Conflict {
                    id: existing.id.clone(),
                    field: ConflictField::GrammInfo,
                    kept: existing.gramm_info.clone(),
                    observed: record.gramm_info.clone(),
                    first_location,
                    location: tag,
                };
                warn!(%conflict, "keeping first annotation");
                self.conflicts.push(conflict);
            }
        } else {
            let entry = self.create_entry(id.clone(), record, tag, occurrence_roles);
            self.entries.insert(id, entry);
        }
    }

    pub fn finish(self) -> (EntryMap, Vec<Conflict>) {
        (self.entries, self.conflicts)
    }

    fn create_entry(
        &self,
        id: UmrId,
        record: &FrameRecord,
        tag: String,
        roles: String,
    ) -> ConsolidatedEntry {
        let mut definition = resolve::resolve_definition(&record.synset_id, self.synsets);
        if definition == resolve::UNKNOWN_DEFINITION
            && !record.synset_id.contains('/')
            && !record.definition.is_empty()
        {
            definition = record.definition.clone();
        }
        let uri = match resolve::resolve_uri(&id, self.uris) {
            Some(uri) => uri.to_string(),
            None => {
                debug!(id = %id, "no canonical URI, synthesizing from lemma fragment");
                resolve::synthesized_uri(&record.uri_lemma)
            }
        };
        ConsolidatedEntry {
            id,
            locations: vec![tag],
            v1_frames: vec![record.v1_frame.clone()],
            examples: vec![record.example.clone()],
            roles,
            lemma: record.lemma.clone(),
            synset_id: record.synset_id.clone(),
            definition,
            uri,
            pos: resolve::resolve_pos(&record.synset_id),
            gramm_info: record.gramm_info.clone(),
            provenance: Provenance::Observed,
        }
    }

    fn location_tag(&self, id: &str) -> String {
        match &self.current_par {
            Some(par) => format!("{id} (par.{par})"),
            None => id.to_string(),
        }
    }

    fn occurrence_roles(&self, record: &FrameRecord, tag: &str) -> String {
        let functors = roles::parse_functor_list(&record.roles);
        match roles::roles_to_propbank(&functors, self.policy) {
            Ok(roles) => roles,
            Err(err) => {
                warn!(id = %record.umr, location = %tag, error = %err, "marking roles NA");
                UNCOMPUTED_ROLES.to_string()
            }
        }
    }
}

/// Consumes all records and returns the entry map plus collected conflicts.
pub fn build(
    records: &[FrameRecord],
    synsets: &SynsetTable,
    uris: &UriTable,
    policy: UnknownFunctorPolicy,
) -> (EntryMap, Vec<Conflict>) {
    let mut builder = EntryBuilder::new(synsets, uris, policy);
    for record in records {
        builder.push_record(record);
    }
    builder.finish()
}
