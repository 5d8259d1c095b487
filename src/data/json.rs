use serde_json::Value;

use crate::data::rows::WideRow;
use crate::error::{ChartError, ChartResult};

/// Default name of the entity column in wide-format sources.
pub const DEFAULT_ENTITY_FIELD: &str = "Country";

/// Parses wide-format rows from a JSON array of flat objects.
///
/// Expected shape, one object per entity with arbitrary year keys:
/// `[{"Country": "France", "1999": "15", "2000": ""}, ...]`.
/// Uses [`DEFAULT_ENTITY_FIELD`] as the entity column.
pub fn rows_from_json_str(input: &str) -> ChartResult<Vec<WideRow>> {
    rows_from_json_str_keyed(input, DEFAULT_ENTITY_FIELD)
}

/// Parses wide-format rows from JSON with an explicit entity field name.
///
/// Number and string cell values are accepted; `null` maps to the empty cell
/// ("no reported value"). Cell text is not validated here; the merge step
/// parses and reports per-cell errors.
pub fn rows_from_json_str_keyed(input: &str, entity_field: &str) -> ChartResult<Vec<WideRow>> {
    let parsed: Value = serde_json::from_str(input)
        .map_err(|e| ChartError::DataFormat(format!("failed to parse rows json: {e}")))?;

    let Value::Array(records) = parsed else {
        return Err(ChartError::DataFormat(
            "rows json must be an array of objects".to_owned(),
        ));
    };

    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let Value::Object(fields) = record else {
            return Err(ChartError::DataFormat(format!(
                "rows json entry {index} is not an object"
            )));
        };

        let entity_name = match fields.get(entity_field) {
            Some(Value::String(name)) => name.clone(),
            Some(_) => {
                return Err(ChartError::DataFormat(format!(
                    "rows json entry {index} has a non-string `{entity_field}` field"
                )));
            }
            None => {
                return Err(ChartError::DataFormat(format!(
                    "rows json entry {index} is missing the `{entity_field}` field"
                )));
            }
        };

        let mut row = WideRow::new(entity_name);
        for (key, value) in &fields {
            if key == entity_field {
                continue;
            }
            let cell = match value {
                Value::String(text) => text.clone(),
                Value::Number(number) => number.to_string(),
                Value::Null => String::new(),
                other => {
                    return Err(ChartError::DataFormat(format!(
                        "rows json entry {index} field `{key}` has unsupported value `{other}`"
                    )));
                }
            };
            row.push_cell(key.clone(), cell);
        }
        rows.push(row);
    }

    Ok(rows)
}
