//! Frame-occurrence export reader.
//!
//! One export per stretch of annotated text, comma-separated with a header
//! row. Columns beyond the known set (annotator notes and the like) are
//! ignored; an absent `definition` column deserializes as empty.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use vallex4umr_lexicon::builder::FrameRecord;

/// Reads one occurrence export.
pub fn read_frame_records(path: &Path) -> Result<Vec<FrameRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("failed to open frame export {}", path.display()))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: FrameRecord =
            result.with_context(|| format!("failed to read frame export {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}

/// Reads and concatenates several exports in the given order. Paragraph
/// numbering restarts per file exactly as it does in the annotation.
pub fn read_frame_exports(paths: &[PathBuf]) -> Result<Vec<FrameRecord>> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(read_frame_records(path)?);
    }
    Ok(records)
}
