use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::types::PlotArea;
use crate::data::EntitySeries;
use crate::error::ChartResult;

/// Vertical axis model: trade value onto an inverted `[plot height, 0]`.
///
/// The domain is anchored at zero and reaches the largest reported value
/// (imports or exports) across the selection, so the baseline sits on the
/// plot's bottom edge and larger values climb toward the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_max: f64,
}

impl ValueScale {
    /// Fits the value domain from the displayed selection.
    ///
    /// Unreported values are excluded from the extent. Returns `None` when
    /// the selection reports no values at all; an all-zero extent widens to
    /// `[0, 1]` so the mapping stays invertible.
    pub fn from_selection(selection: &[&EntitySeries]) -> ChartResult<Option<Self>> {
        let mut max: Option<f64> = None;
        for series in selection {
            if let Some(series_max) = series.max_value() {
                max = Some(max.map_or(series_max, |current| current.max(series_max)));
            }
        }

        let Some(max) = max else {
            return Ok(None);
        };

        let domain_max = if max == 0.0 { 1.0 } else { max };
        // Keep the constructor's validation even for the fitted path.
        LinearScale::new(0.0, domain_max)?;
        Ok(Some(Self { domain_max }))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    /// Maps a value to its y pixel inside the plot area (inverted axis).
    pub fn value_to_y(self, value: f64, plot: PlotArea) -> ChartResult<f64> {
        let offset = self.linear()?.to_extent(value, plot.height)?;
        Ok(plot.height - offset)
    }

    /// Maps a y pixel back to a value.
    pub fn y_to_value(self, pixel: f64, plot: PlotArea) -> ChartResult<f64> {
        self.linear()?.from_extent(plot.height - pixel, plot.height)
    }

    /// Pixel y of the zero baseline (the plot's bottom edge).
    #[must_use]
    pub fn baseline_y(self, plot: PlotArea) -> f64 {
        plot.height
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(0.0, self.domain_max)
    }
}
