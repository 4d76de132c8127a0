//! Synset definition inventory reader.
//!
//! The inventory is a comma CSV with `id_synset` and `definition` columns.
//! `id_synset` is a URI whose final path segment reads `<pos-letter>-<number>`;
//! the table is keyed `<number>#<pos-letter>` to match the synset ids carried
//! by occurrence records.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;
use vallex4umr_lexicon::resolve::SynsetTable;

#[derive(Debug, Deserialize)]
struct SynsetRow {
    id_synset: String,
    definition: String,
}

pub fn read_synset_table(path: &Path) -> Result<SynsetTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("failed to open synset inventory {}", path.display()))?;

    let mut table = SynsetTable::new();
    for result in reader.deserialize() {
        let row: SynsetRow = result
            .with_context(|| format!("failed to read synset inventory {}", path.display()))?;
        match inventory_key(&row.id_synset) {
            Some(key) => table.insert(key, row.definition),
            None => warn!(id_synset = %row.id_synset, "skipping unkeyable synset row"),
        }
    }
    Ok(table)
}

/// `.../v-02553283` becomes `02553283#v`.
fn inventory_key(id_synset: &str) -> Option<String> {
    let segment = id_synset.rsplit('/').next().unwrap_or(id_synset);
    let (pos, number) = segment.split_once('-')?;
    if pos.is_empty() || number.is_empty() {
        return None;
    }
    Some(format!("{number}#{pos}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_flip_pos_and_number() {
        assert_eq!(
            inventory_key("https://example.org/wn30/v-02553283"),
            Some("02553283#v".to_string())
        );
        assert_eq!(inventory_key("n-05624029"), Some("05624029#n".to_string()));
        assert_eq!(inventory_key("https://example.org/wn30/opaque"), None);
        assert_eq!(inventory_key("-05624029"), None);
    }

    #[test]
    fn reads_the_inventory_into_a_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synsets.csv");
        std::fs::write(
            &path,
            "id_synset,definition\n\
             https://example.org/wn30/v-02553283,have a great affection or liking for\n\
             https://example.org/wn30/n-05624029,unkeyable row follows\n\
             https://example.org/wn30/broken,should be skipped\n",
        )
        .unwrap();

        let table = read_synset_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("02553283#v"),
            Some("have a great affection or liking for")
        );
        assert_eq!(table.get("05624029#n"), Some("unkeyable row follows"));
    }
}
