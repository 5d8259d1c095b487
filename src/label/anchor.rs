use serde::{Deserialize, Serialize};

use crate::core::ChartScales;
use crate::data::EntitySeries;
use crate::error::ChartResult;
use crate::label::estimate::estimate_label_extent;

/// One entity label during a placement pass.
///
/// `anchor_y` is the vertical center of the text box and the only coordinate
/// relaxation may move; `anchor_x` stays pinned so labels keep hugging the
/// right edge of their lines. Boxes are rebuilt from scratch every pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelBox {
    pub entity_name: String,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub width: f64,
    pub height: f64,
}

impl LabelBox {
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.anchor_y
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.anchor_y - self.height / 2.0
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.anchor_y + self.height / 2.0
    }

    /// Vertical-collision predicate: boxes collide when their center gap is
    /// smaller than the mean of their heights.
    #[must_use]
    pub fn collides_vertically(&self, other: &LabelBox) -> bool {
        (self.center_y() - other.center_y()).abs() * 2.0 < self.height + other.height
    }
}

/// Computes initial label anchors for the displayed selection.
///
/// Each label anchors at the latest year where both imports and exports are
/// reported: x at that year, y midway between the two values. Entities with
/// no such year get no label.
pub fn place(
    selection: &[&EntitySeries],
    scales: &ChartScales,
    font_size_px: f64,
) -> ChartResult<Vec<LabelBox>> {
    let mut labels = Vec::with_capacity(selection.len());

    for series in selection {
        let Some(point) = series.last_fully_defined() else {
            continue;
        };
        let (Some(imports), Some(exports)) = (point.imports, point.exports) else {
            continue;
        };

        let anchor_x = scales.year.year_to_x(point.year, scales.plot)?;
        let anchor_y = scales
            .value
            .value_to_y((imports + exports) / 2.0, scales.plot)?;
        let (width, height) = estimate_label_extent(&series.name, font_size_px);

        labels.push(LabelBox {
            entity_name: series.name.clone(),
            anchor_x,
            anchor_y,
            width,
            height,
        });
    }

    Ok(labels)
}
