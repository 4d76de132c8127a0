//! Legacy lexicon dump reader.
//!
//! Tab-delimited with a header row; each row ties a lemma URI and synset id
//! to the functor list of the legacy frame. Keyed `<uri>+<id_synset>` for
//! the gap-fill lookup.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use vallex4umr_lexicon::resolve::LegacyFrameTable;

#[derive(Debug, Deserialize)]
struct LegacyRow {
    uri: String,
    id_synset: String,
    arguments_set: String,
}

pub fn read_legacy_frames(path: &Path) -> Result<LegacyFrameTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b'\t')
        .from_path(path)
        .with_context(|| format!("failed to open legacy lexicon {}", path.display()))?;

    let mut table = LegacyFrameTable::new();
    for result in reader.deserialize() {
        let row: LegacyRow =
            result.with_context(|| format!("failed to read legacy lexicon {}", path.display()))?;
        table.insert(
            LegacyFrameTable::key(&row.uri, &row.id_synset),
            row.arguments_set,
        );
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_frames_keyed_by_uri_and_synset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.tsv");
        std::fs::write(
            &path,
            "uri\tid_synset\targuments_set\n\
             http://lila-erc.eu/data/id/lemma/87793\tv#02553283\tACT, PAT\n\
             http://lila-erc.eu/data/id/lemma/106235\tv#00746718\tACT, ADDR, PAT\n",
        )
        .unwrap();

        let table = read_legacy_frames(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.arguments_for("http://lila-erc.eu/data/id/lemma/87793", "v#02553283"),
            Some("ACT, PAT")
        );
        assert_eq!(
            table.arguments_for("http://lila-erc.eu/data/id/lemma/87793", "v#00000000"),
            None
        );
    }
}
