use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One ingested wide-format record: an entity name plus one raw cell per
/// year column, kept in source column order.
///
/// Cells hold the source text untouched; parsing happens in the merge step so
/// errors can name the offending entity and column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WideRow {
    pub entity_name: String,
    pub cells: Vec<(String, String)>,
}

impl WideRow {
    #[must_use]
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            cells: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_cell(mut self, year_label: impl Into<String>, raw: impl Into<String>) -> Self {
        self.cells.push((year_label.into(), raw.into()));
        self
    }

    pub fn push_cell(&mut self, year_label: impl Into<String>, raw: impl Into<String>) {
        self.cells.push((year_label.into(), raw.into()));
    }
}

/// Parses a year column label into a calendar year.
///
/// The raw source coerced labels with unary `+`, silently producing NaN for
/// junk columns; here a non-integer label is rejected up front.
pub(crate) fn parse_year_label(label: &str, entity_name: &str) -> ChartResult<i32> {
    label.trim().parse::<i32>().map_err(|_| {
        ChartError::DataFormat(format!(
            "year label `{label}` in row for `{entity_name}` is not an integer"
        ))
    })
}

/// Parses a raw value cell.
///
/// The empty string means "no reported value" and maps to `None`; anything
/// else must be a decimal number representable as a finite f64.
pub(crate) fn parse_cell(
    raw: &str,
    entity_name: &str,
    year_label: &str,
) -> ChartResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let decimal = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        trimmed.parse::<Decimal>()
    }
    .map_err(|_| {
        ChartError::DataFormat(format!(
            "value `{trimmed}` for `{entity_name}` year `{year_label}` is not numeric"
        ))
    })?;

    let value = decimal.to_f64().ok_or_else(|| {
        ChartError::DataFormat(format!(
            "value `{trimmed}` for `{entity_name}` year `{year_label}` cannot be represented as f64"
        ))
    })?;
    if !value.is_finite() {
        return Err(ChartError::DataFormat(format!(
            "value `{trimmed}` for `{entity_name}` year `{year_label}` is not finite"
        )));
    }
    Ok(Some(value))
}
