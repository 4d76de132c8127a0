//! Consolidated dictionary entries.

use std::collections::BTreeMap;

use crate::identifier::UmrId;

/// Where an entry's data came from; controls output fullness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Built from at least one corpus occurrence.
    Observed,
    /// Synthesized from the mapping table alone; renders in reduced form.
    GapFilled,
}

/// One dictionary entry per surviving identifier.
///
/// Scalars are fixed by whichever record creates the entry; later
/// occurrences only extend the multi-valued fields. Mismatching scalars are
/// reported upstream, never written here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidatedEntry {
    pub id: UmrId,
    /// Corpus location tags in observation order, duplicates allowed, each
    /// annotated with its paragraph.
    pub locations: Vec<String>,
    /// Legacy frame ids, insertion order, duplicates suppressed.
    pub v1_frames: Vec<String>,
    /// Example sentences, insertion order, duplicates suppressed.
    pub examples: Vec<String>,
    /// PropBank-style role string.
    pub roles: String,
    pub lemma: String,
    pub synset_id: String,
    pub definition: String,
    pub uri: String,
    pub pos: String,
    /// Empty when the source carried none; the rendered block then omits
    /// the line.
    pub gramm_info: String,
    pub provenance: Provenance,
}

impl ConsolidatedEntry {
    pub fn is_observed(&self) -> bool {
        matches!(self.provenance, Provenance::Observed)
    }

    /// Tag of the occurrence that created the entry.
    pub fn first_location(&self) -> Option<&str> {
        self.locations.first().map(String::as_str)
    }

    pub fn push_location(&mut self, tag: impl Into<String>) {
        self.locations.push(tag.into());
    }

    pub fn push_frame(&mut self, frame: &str) {
        if !self.v1_frames.iter().any(|f| f == frame) {
            self.v1_frames.push(frame.to_string());
        }
    }

    pub fn push_example(&mut self, example: &str) {
        if !self.examples.iter().any(|e| e == example) {
            self.examples.push(example.to_string());
        }
    }
}

/// The consolidated entry set, iterated in identifier sort order.
pub type EntryMap = BTreeMap<UmrId, ConsolidatedEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> ConsolidatedEntry {
        ConsolidatedEntry {
            id: UmrId::parse(id).unwrap(),
            locations: Vec::new(),
            v1_frames: Vec::new(),
            examples: Vec::new(),
            roles: String::new(),
            lemma: String::new(),
            synset_id: String::new(),
            definition: String::new(),
            uri: String::new(),
            pos: String::new(),
            gramm_info: String::new(),
            provenance: Provenance::Observed,
        }
    }

    #[test]
    fn frames_and_examples_suppress_duplicates() {
        let mut e = entry("amo-01");
        e.push_frame("amo-1");
        e.push_frame("amo-2");
        e.push_frame("amo-1");
        assert_eq!(e.v1_frames, vec!["amo-1", "amo-2"]);

        e.push_example("amat");
        e.push_example("amat");
        assert_eq!(e.examples, vec!["amat"]);
    }

    #[test]
    fn locations_keep_duplicates_in_order() {
        let mut e = entry("amo-01");
        e.push_location("1.2 (par.1)");
        e.push_location("1.2 (par.1)");
        e.push_location("3.4 (par.3)");
        assert_eq!(e.locations, vec!["1.2 (par.1)", "1.2 (par.1)", "3.4 (par.3)"]);
        assert_eq!(e.first_location(), Some("1.2 (par.1)"));
    }

    #[test]
    fn entry_map_iterates_in_sense_order() {
        let mut map = EntryMap::new();
        for id in ["amo-10", "amo-NEW-01", "amo-02"] {
            let e = entry(id);
            map.insert(e.id.clone(), e);
        }
        let keys: Vec<&str> = map.keys().map(UmrId::as_str).collect();
        assert_eq!(keys, vec!["amo-02", "amo-10", "amo-NEW-01"]);
    }
}
