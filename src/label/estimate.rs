const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Deterministic, backend-independent label extent estimate.
///
/// Relaxation runs headless, so label boxes cannot come from backend text
/// measurement; per-character width classes keep the estimate stable across
/// environments.
#[must_use]
pub fn estimate_label_extent(text: &str, font_size_px: f64) -> (f64, f64) {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    let width = (units * font_size_px).max(font_size_px);
    (width, font_size_px * LINE_HEIGHT_FACTOR)
}
