mod band;
mod frame;
mod geometry;
mod null_renderer;
mod primitives;
mod reconcile;
mod style;

pub use frame::{FrameCounts, LayerKind, LayerPrimitives, RenderFrame};
pub use geometry::{EntityGeometry, EntityMarker, project_entity};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, PolylinePrimitive, RegionPrimitive, TextHAlign, TextPrimitive, Vertex,
};
pub use reconcile::{EntityDiff, reconcile};
pub use style::ChartStyle;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart domain logic; the same frame can go
/// to a real surface or to a headless test harness.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
