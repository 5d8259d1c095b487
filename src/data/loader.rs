//! Wide-format CSV ingestion for the data-loading boundary.
//!
//! The header row supplies year labels; every non-entity column becomes one
//! raw cell per row. Cell text is carried through untouched; parsing and
//! validation happen in the merge step.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::data::json::DEFAULT_ENTITY_FIELD;
use crate::data::rows::WideRow;
use crate::error::{ChartError, ChartResult};

/// Reads wide-format rows from a CSV file, using the default entity column.
pub fn rows_from_csv_path(path: impl AsRef<Path>) -> ChartResult<Vec<WideRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        ChartError::DataFormat(format!("failed to open `{}`: {e}", path.display()))
    })?;
    let rows = rows_from_csv_reader(file, DEFAULT_ENTITY_FIELD)?;
    debug!(path = %path.display(), rows = rows.len(), "loaded wide csv");
    Ok(rows)
}

/// Reads wide-format rows from any CSV source with an explicit entity column.
pub fn rows_from_csv_reader<R: Read>(reader: R, entity_field: &str) -> ChartResult<Vec<WideRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| ChartError::DataFormat(format!("failed to read csv header: {e}")))?
        .clone();

    let entity_index = headers
        .iter()
        .position(|header| header == entity_field)
        .ok_or_else(|| {
            ChartError::DataFormat(format!("csv header has no `{entity_field}` column"))
        })?;

    let mut rows = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record =
            record.map_err(|e| ChartError::DataFormat(format!("failed to read csv row: {e}")))?;

        let entity_name = record.get(entity_index).ok_or_else(|| {
            ChartError::DataFormat(format!("csv row {line} is missing the entity column"))
        })?;

        let mut row = WideRow::new(entity_name);
        for (column, cell) in record.iter().enumerate() {
            if column == entity_index {
                continue;
            }
            let label = headers.get(column).unwrap_or_default();
            row.push_cell(label, cell);
        }
        rows.push(row);
    }

    Ok(rows)
}
