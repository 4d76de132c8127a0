//! Curated abstract-predicate frame list reader.
//!
//! Headerless comma CSV exported from the curation sheet. Column 0 is a
//! legacy frame id, column 5 the abstract predicate it was mapped to; the
//! columns in between are working notes. Rows short of six columns read as
//! having no predicate and fall out at grouping time.

use std::path::Path;

use anyhow::{Context, Result};
use vallex4umr_lexicon::sumframes::SumFrameRow;

pub fn read_sum_frame_rows(path: &Path) -> Result<Vec<SumFrameRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open abstract-frame list {}", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record =
            result.with_context(|| format!("failed to read abstract-frame list {}", path.display()))?;
        let Some(v1_frame) = record.get(0) else {
            continue;
        };
        rows.push(SumFrameRow {
            v1_frame: v1_frame.to_string(),
            predicate: record.get(5).unwrap_or_default().to_string(),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_frame_and_predicate_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sum_frames.csv");
        std::fs::write(
            &path,
            "sum-1,x,y,z,w,exist-91\n\
             sum-2,x,y,z,w,\n\
             sum-3,x,y\n\
             sum-4,x,y,z,w,identity-91\n",
        )
        .unwrap();

        let rows = read_sum_frame_rows(&path).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].v1_frame, "sum-1");
        assert_eq!(rows[0].predicate, "exist-91");
        assert_eq!(rows[1].predicate, "");
        assert_eq!(rows[2].predicate, "", "short rows read as predicate-less");
        assert_eq!(rows[3].predicate, "identity-91");
    }
}
