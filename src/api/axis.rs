use crate::api::format::{format_billions, format_year};
use crate::core::ChartScales;
use crate::error::ChartResult;
use crate::render::{ChartStyle, PolylinePrimitive, TextHAlign, TextPrimitive, Vertex};

const YEAR_TICK_TARGET_SPACING_PX: f64 = 72.0;
const VALUE_TICK_TARGET_SPACING_PX: f64 = 26.0;
const YEAR_STEP_LADDER: [i32; 8] = [1, 2, 5, 10, 20, 25, 50, 100];

/// Axis scaffolding for one pass, in plot-area coordinates.
///
/// Tick marks and the axis spine are plain polylines; labels are plain
/// texts. Axes consume the scale context and never feed back into it.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGeometry {
    pub lines: Vec<PolylinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

/// Bottom year axis: spine on the baseline, ticks at a nice year cadence.
pub fn build_year_axis(scales: &ChartScales, style: &ChartStyle) -> ChartResult<AxisGeometry> {
    let plot = scales.plot;
    let baseline = plot.height;
    let mut lines = vec![PolylinePrimitive::new(
        vec![Vertex::new(0.0, baseline), Vertex::new(plot.width, baseline)],
        style.axis_stroke_width,
        style.axis_color,
    )];
    let mut texts = Vec::new();

    let (domain_start, domain_end) = scales.year.domain();
    let first_year = domain_start.ceil() as i32;
    let last_year = domain_end.floor() as i32;
    let target = axis_tick_target_count(plot.width, YEAR_TICK_TARGET_SPACING_PX, 2, 12);
    let step = year_tick_step(last_year.saturating_sub(first_year), target);

    let mut year = first_year.div_euclid(step) * step;
    if year < first_year {
        year += step;
    }
    while year <= last_year {
        let x = scales.year.year_to_x(year, plot)?;
        lines.push(PolylinePrimitive::new(
            vec![
                Vertex::new(x, baseline),
                Vertex::new(x, baseline + style.axis_tick_length_px),
            ],
            style.axis_stroke_width,
            style.axis_color,
        ));
        texts.push(TextPrimitive::new(
            format_year(year),
            x,
            baseline + style.axis_tick_length_px + 2.0,
            style.axis_font_size_px,
            style.axis_color,
            TextHAlign::Center,
        ));
        year += step;
    }

    Ok(AxisGeometry { lines, texts })
}

/// Left value axis: spine on the plot edge, evenly spaced value ticks with
/// comma-grouped billion labels, plus the unit title.
pub fn build_value_axis(scales: &ChartScales, style: &ChartStyle) -> ChartResult<AxisGeometry> {
    let plot = scales.plot;
    let mut lines = vec![PolylinePrimitive::new(
        vec![Vertex::new(0.0, 0.0), Vertex::new(0.0, plot.height)],
        style.axis_stroke_width,
        style.axis_color,
    )];
    let mut texts = Vec::new();

    let (_, domain_max) = scales.value.domain();
    let count = axis_tick_target_count(plot.height, VALUE_TICK_TARGET_SPACING_PX, 2, 10);
    for index in 0..count {
        let ratio = (index as f64) / ((count - 1) as f64);
        let value = domain_max * ratio;
        let y = scales.value.value_to_y(value, plot)?;
        lines.push(PolylinePrimitive::new(
            vec![
                Vertex::new(-style.axis_tick_length_px, y),
                Vertex::new(0.0, y),
            ],
            style.axis_stroke_width,
            style.axis_color,
        ));
        texts.push(TextPrimitive::new(
            format_billions(value),
            -style.axis_tick_length_px - 2.0,
            y - style.axis_font_size_px / 2.0,
            style.axis_font_size_px,
            style.axis_color,
            TextHAlign::Right,
        ));
    }

    if !style.value_axis_title.is_empty() {
        texts.push(TextPrimitive::new(
            style.value_axis_title.clone(),
            4.0,
            2.0,
            style.axis_font_size_px,
            style.axis_color,
            TextHAlign::Left,
        ));
    }

    Ok(AxisGeometry { lines, texts })
}

/// Tick count that respects a pixel spacing target over the axis span.
fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Smallest ladder step that keeps the tick count at or under the target.
fn year_tick_step(span_years: i32, target_count: usize) -> i32 {
    for step in YEAR_STEP_LADDER {
        let ticks = span_years / step + 1;
        if ticks as usize <= target_count {
            return step;
        }
    }
    let fallback = span_years / (target_count.max(2) as i32 - 1);
    fallback.max(1)
}
