use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::data::rows::{WideRow, parse_cell, parse_year_label};
use crate::data::series::{CombinedDataset, EntitySeries, YearPoint};
use crate::error::{ChartError, ChartResult};

/// Merges the imports and exports tables into one per-entity dataset.
///
/// The imports table is the authoritative spine: its rows decide which
/// entities exist and which years each series carries. Export values are
/// woven in where the (entity, year) pair exists in the exports table;
/// everywhere else `exports` stays `None`. Entities present only in the
/// exports table are dropped.
///
/// Each series comes out sorted by year ascending regardless of source column
/// order. The function never mutates its inputs and is deterministic.
pub fn combine(imports_rows: &[WideRow], exports_rows: &[WideRow]) -> ChartResult<CombinedDataset> {
    let spine = key_by_entity_with_points(imports_rows)?;
    let exports_by_entity = key_by_entity(exports_rows)?;

    let mut dropped_export_only = 0_usize;
    for name in exports_by_entity.keys() {
        if !spine.contains_key(name) {
            dropped_export_only += 1;
        }
    }
    if dropped_export_only > 0 {
        debug!(
            dropped_export_only,
            "entities present only in the exports table are not charted"
        );
    }

    let mut dataset = CombinedDataset::default();
    for (name, mut points) in spine {
        if let Some(export_years) = exports_by_entity.get(&name) {
            for point in &mut points {
                if let Some(value) = export_years.get(&point.year) {
                    point.exports = *value;
                }
            }
        }
        dataset.insert(EntitySeries::new(name, points));
    }

    debug!(
        entities = dataset.len(),
        "combined imports and exports tables"
    );
    Ok(dataset)
}

/// Builds entity → sorted import-only points from the imports table.
fn key_by_entity_with_points(rows: &[WideRow]) -> ChartResult<IndexMap<String, Vec<YearPoint>>> {
    let mut entities: IndexMap<String, Vec<YearPoint>> = IndexMap::with_capacity(rows.len());

    for row in rows {
        let mut points = Vec::with_capacity(row.cells.len());
        for (label, raw) in &row.cells {
            let year = parse_year_label(label, &row.entity_name)?;
            let imports = parse_cell(raw, &row.entity_name, label)?;
            points.push(YearPoint::new(year, imports, None));
        }

        points.sort_by_key(|point| point.year);
        for pair in points.windows(2) {
            if pair[0].year == pair[1].year {
                return Err(ChartError::DataFormat(format!(
                    "row for `{}` lists year {} twice",
                    row.entity_name, pair[0].year
                )));
            }
        }

        if entities.insert(row.entity_name.clone(), points).is_some() {
            warn!(
                entity = %row.entity_name,
                "duplicate imports row; keeping the later one"
            );
        }
    }

    Ok(entities)
}

/// Builds entity → (year → value) lookup from the exports table.
fn key_by_entity(rows: &[WideRow]) -> ChartResult<HashMap<String, HashMap<i32, Option<f64>>>> {
    let mut entities: HashMap<String, HashMap<i32, Option<f64>>> =
        HashMap::with_capacity(rows.len());

    for row in rows {
        let mut years = HashMap::with_capacity(row.cells.len());
        for (label, raw) in &row.cells {
            let year = parse_year_label(label, &row.entity_name)?;
            let value = parse_cell(raw, &row.entity_name, label)?;
            if years.insert(year, value).is_some() {
                return Err(ChartError::DataFormat(format!(
                    "row for `{}` lists year {year} twice",
                    row.entity_name
                )));
            }
        }
        if entities.insert(row.entity_name.clone(), years).is_some() {
            warn!(
                entity = %row.entity_name,
                "duplicate exports row; keeping the later one"
            );
        }
    }

    Ok(entities)
}
