//! Identifier-to-URI mapping reader.
//!
//! Tab-delimited with a header row. `UMR_id` and `uri` feed URI resolution;
//! the remaining columns only matter on the gap-fill path, so rows are kept
//! whole and the URI table is derived separately.

use std::path::Path;

use anyhow::{Context, Result};
use vallex4umr_lexicon::gapfill::MappingRow;
use vallex4umr_lexicon::resolve::UriTable;

pub fn read_mapping_rows(path: &Path) -> Result<Vec<MappingRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b'\t')
        .from_path(path)
        .with_context(|| format!("failed to open mapping table {}", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: MappingRow =
            result.with_context(|| format!("failed to read mapping table {}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Derives the URI lookup table. A repeated `UMR_id` keeps the last row,
/// matching plain key reassignment in the source sheet.
pub fn uri_table_from_rows(rows: &[MappingRow]) -> UriTable {
    let mut table = UriTable::new();
    for row in rows {
        table.insert(row.umr_id.clone(), row.uri.clone());
    }
    table
}
