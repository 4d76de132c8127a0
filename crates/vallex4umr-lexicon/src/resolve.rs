//! Auxiliary lookup tables and resolvers.
//!
//! Three external resources feed the converter: the WordNet-style synset
//! inventory (definitions), the cross-resource mapping table (canonical
//! lemma URIs), and the legacy lexicon (functor sets for gap-filled
//! entries). The readers materialize them into the typed tables below;
//! resolution misses are never fatal and fall back as documented on each
//! resolver.

use std::collections::BTreeMap;

use crate::identifier::UmrId;

/// Literal rendered when a synset has no definition in the inventory.
pub const UNKNOWN_DEFINITION: &str = "Unknown";

/// Namespace prefix for synthesized lemma URIs, used when the mapping table
/// carries no canonical URI for an identifier.
pub const LEMMA_URI_NAMESPACE: &str = "http://lila-erc.eu/data/id/lemma/";

/// Synset definitions keyed `<number>#<pos-letter>`.
#[derive(Debug, Clone, Default)]
pub struct SynsetTable {
    definitions: BTreeMap<String, String>,
}

impl SynsetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, definition: impl Into<String>) {
        self.definitions.insert(key.into(), definition.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.definitions.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl FromIterator<(String, String)> for SynsetTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            definitions: iter.into_iter().collect(),
        }
    }
}

/// Canonical lemma URIs keyed by UMR identifier.
#[derive(Debug, Clone, Default)]
pub struct UriTable {
    uris: BTreeMap<String, String>,
}

impl UriTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, uri: impl Into<String>) {
        self.uris.insert(id.into(), uri.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.uris.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.uris.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }
}

impl FromIterator<(String, String)> for UriTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            uris: iter.into_iter().collect(),
        }
    }
}

/// Legacy-lexicon functor sets keyed `<uri>+<id_synset>`.
#[derive(Debug, Clone, Default)]
pub struct LegacyFrameTable {
    frames: BTreeMap<String, String>,
}

impl LegacyFrameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup key for one legacy frame row.
    pub fn key(uri: &str, id_synset: &str) -> String {
        format!("{uri}+{id_synset}")
    }

    pub fn insert(&mut self, key: impl Into<String>, arguments_set: impl Into<String>) {
        self.frames.insert(key.into(), arguments_set.into());
    }

    /// The stored comma-separated functor list for `<uri>+<id_synset>`.
    pub fn arguments_for(&self, uri: &str, id_synset: &str) -> Option<&str> {
        self.frames.get(&Self::key(uri, id_synset)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FromIterator<(String, String)> for LegacyFrameTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

/// Inventory key for one record-side synset constituent
/// (`v#02553283` -> `02553283#v`). The annotation writes the POS letter
/// first; the inventory keys write it last.
fn inventory_key(constituent: &str) -> Option<String> {
    let (pos, number) = constituent.split_once('#')?;
    Some(format!("{number}#{pos}"))
}

/// Resolves a possibly `/`-merged synset id to its definition text.
///
/// Each constituent resolves independently, to the literal
/// [`UNKNOWN_DEFINITION`] when absent, and the results are joined with
/// ` + `. Callers fall back to the record-supplied gloss when a
/// single-constituent id resolves to exactly `Unknown`.
pub fn resolve_definition(synset_id: &str, table: &SynsetTable) -> String {
    synset_id
        .split('/')
        .map(|constituent| {
            inventory_key(constituent.trim())
                .and_then(|key| table.get(&key))
                .unwrap_or(UNKNOWN_DEFINITION)
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Looks up the canonical URI for an identifier via its URI base.
pub fn resolve_uri<'t>(id: &UmrId, table: &'t UriTable) -> Option<&'t str> {
    table.get(&id.uri_base())
}

/// Default URI for identifiers absent from the mapping table: the fixed
/// namespace prefix plus the record's raw lemma-URI fragment.
pub fn synthesized_uri(fragment: &str) -> String {
    format!("{LEMMA_URI_NAMESPACE}{fragment}")
}

/// Part of speech from the single-letter prefix before `#`; a merged synset
/// id is classified by its first constituent. Unrecognized prefixes pass
/// through unchanged.
pub fn resolve_pos(synset_id: &str) -> String {
    let prefix = match synset_id.split_once('#') {
        Some((prefix, _)) => prefix,
        None => synset_id,
    };
    match prefix {
        "n" => "NOUN".to_string(),
        "v" => "VERB".to_string(),
        "a" => "ADJ".to_string(),
        "r" => "ADV".to_string(),
        other => other.to_string(),
    }
}
