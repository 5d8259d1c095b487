use crate::core::types::PlotArea;
use crate::core::value_scale::ValueScale;
use crate::core::year_scale::YearScale;
use crate::data::EntitySeries;
use crate::error::ChartResult;

/// Immutable per-pass scale context shared by geometry and label placement.
///
/// Recomputed wholesale from the selection on every render pass; nothing is
/// updated incrementally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    pub year: YearScale,
    pub value: ValueScale,
    pub plot: PlotArea,
}

impl ChartScales {
    /// Fits both scales from the displayed selection.
    ///
    /// Returns `None` when there is nothing to map: an empty selection, or
    /// one whose points report no values at all. Callers short-circuit to an
    /// empty frame in that case rather than failing.
    pub fn compute(selection: &[&EntitySeries], plot: PlotArea) -> ChartResult<Option<Self>> {
        if selection.is_empty() {
            return Ok(None);
        }

        let Some(year) = YearScale::from_selection(selection)? else {
            return Ok(None);
        };
        let Some(value) = ValueScale::from_selection(selection)? else {
            return Ok(None);
        };

        Ok(Some(Self { year, value, plot }))
    }
}
