use serde::{Deserialize, Serialize};

use crate::core::scale::{LinearScale, normalize_range};
use crate::core::types::PlotArea;
use crate::data::EntitySeries;
use crate::error::ChartResult;

/// Horizontal axis model: calendar year onto `[0, plot width]`.
///
/// The domain is the min/max year across every point of every selected
/// series, with no padding; the earliest year lands on the plot's left edge
/// and the latest on its right edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearScale {
    domain_start: f64,
    domain_end: f64,
}

impl YearScale {
    /// Fits the year domain from the displayed selection.
    ///
    /// Returns `None` when the selection carries no points at all. A single
    /// distinct year widens to a one-year span so the mapping stays
    /// invertible.
    pub fn from_selection(selection: &[&EntitySeries]) -> ChartResult<Option<Self>> {
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        let mut seen = false;

        for series in selection {
            if let Some((first, last)) = series.year_span() {
                min = min.min(first);
                max = max.max(last);
                seen = true;
            }
        }

        if !seen {
            return Ok(None);
        }

        let (domain_start, domain_end) = normalize_range(f64::from(min), f64::from(max), 1.0)?;
        Ok(Some(Self {
            domain_start,
            domain_end,
        }))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps a year to its x pixel inside the plot area.
    pub fn year_to_x(self, year: i32, plot: PlotArea) -> ChartResult<f64> {
        self.linear()?.to_extent(f64::from(year), plot.width)
    }

    /// Maps an x pixel back to a (fractional) year.
    pub fn x_to_year(self, pixel: f64, plot: PlotArea) -> ChartResult<f64> {
        self.linear()?.from_extent(pixel, plot.width)
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.domain_start, self.domain_end)
    }
}
