use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual tuning for one chart.
///
/// The defaults follow the reference palette: blue imports, green exports,
/// translucent green surplus and red deficit bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub import_color: Color,
    pub export_color: Color,
    pub surplus_color: Color,
    pub deficit_color: Color,
    pub axis_color: Color,
    pub label_color: Color,
    pub line_stroke_width: f64,
    pub axis_stroke_width: f64,
    pub marker_radius: f64,
    pub marker_alpha: f64,
    pub label_font_size_px: f64,
    pub axis_font_size_px: f64,
    pub axis_tick_length_px: f64,
    pub value_axis_title: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            import_color: Color::rgb(0.12, 0.47, 0.71),
            export_color: Color::rgb(0.17, 0.63, 0.17),
            surplus_color: Color::rgba(0.17, 0.63, 0.17, 0.25),
            deficit_color: Color::rgba(0.84, 0.15, 0.16, 0.25),
            axis_color: Color::rgb(0.25, 0.25, 0.25),
            label_color: Color::rgb(0.10, 0.10, 0.10),
            line_stroke_width: 2.0,
            axis_stroke_width: 1.0,
            marker_radius: 8.0,
            marker_alpha: 0.0,
            label_font_size_px: 12.0,
            axis_font_size_px: 11.0,
            axis_tick_length_px: 6.0,
            value_axis_title: "US$ billion".to_owned(),
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.import_color,
            self.export_color,
            self.surplus_color,
            self.deficit_color,
            self.axis_color,
            self.label_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("line stroke width", self.line_stroke_width),
            ("axis stroke width", self.axis_stroke_width),
            ("marker radius", self.marker_radius),
            ("label font size", self.label_font_size_px),
            ("axis font size", self.axis_font_size_px),
            ("axis tick length", self.axis_tick_length_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        if !self.marker_alpha.is_finite() || !(0.0..=1.0).contains(&self.marker_alpha) {
            return Err(ChartError::InvalidData(
                "marker alpha must be finite and in [0, 1]".to_owned(),
            ));
        }

        Ok(())
    }

    /// Hover-marker fill for the import line; usually fully transparent.
    #[must_use]
    pub fn import_marker_color(&self) -> Color {
        let mut color = self.import_color;
        color.alpha = self.marker_alpha;
        color
    }

    /// Hover-marker fill for the export line; usually fully transparent.
    #[must_use]
    pub fn export_marker_color(&self) -> Color {
        let mut color = self.export_color;
        color.alpha = self.marker_alpha;
        color
    }
}
