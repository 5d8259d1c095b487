//! Polygon construction for the surplus/deficit bands.
//!
//! A band is never computed by intersecting the two curves. Instead the fill
//! is a full-height area dropped from one curve to the baseline, masked
//! through a clip window whose boundary runs along one curve and back along
//! the other. Where the curves cross, the window's height passes through
//! zero and the visible band pinches off on its own.

use crate::render::Vertex;

/// Closed clip window between two curves over the same x positions.
///
/// Traces `along` forward, `back` in reverse, then repeats the first vertex
/// so the polygon is explicitly closed.
pub(crate) fn window_between(along: &[Vertex], back: &[Vertex]) -> Vec<Vertex> {
    debug_assert_eq!(along.len(), back.len());

    let mut polygon = Vec::with_capacity(along.len() + back.len() + 1);
    polygon.extend_from_slice(along);
    polygon.extend(back.iter().rev().copied());
    if let Some(first) = polygon.first().copied() {
        polygon.push(first);
    }
    polygon
}

/// Closed fill polygon from a curve down to a horizontal baseline.
pub(crate) fn baseline_fill(curve: &[Vertex], baseline_y: f64) -> Vec<Vertex> {
    let Some(first) = curve.first() else {
        return Vec::new();
    };
    let last = curve[curve.len() - 1];

    let mut polygon = Vec::with_capacity(curve.len() + 3);
    polygon.push(Vertex::new(first.x, baseline_y));
    polygon.extend_from_slice(curve);
    polygon.push(Vertex::new(last.x, baseline_y));
    // Repeat the starting baseline vertex so consumers can treat this as a
    // closed polygon without implicit closure rules.
    polygon.push(Vertex::new(first.x, baseline_y));
    polygon
}
