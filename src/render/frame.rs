use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, PolylinePrimitive, RegionPrimitive, TextPrimitive};

/// Draw layers in canonical z-order, bottom first.
///
/// Axes sit under the data, area fills under lines, labels on top; surplus
/// and deficit regions share the `Areas` layer because they can never overlap
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    Background,
    Axis,
    Areas,
    Lines,
    Markers,
    Labels,
}

impl LayerKind {
    #[must_use]
    pub fn canonical_order() -> [LayerKind; 6] {
        [
            LayerKind::Background,
            LayerKind::Axis,
            LayerKind::Areas,
            LayerKind::Lines,
            LayerKind::Markers,
            LayerKind::Labels,
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameCounts {
    pub polylines: usize,
    pub regions: usize,
    pub circles: usize,
    pub texts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub kind: LayerKind,
    pub polylines: Vec<PolylinePrimitive>,
    pub regions: Vec<RegionPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    fn empty(kind: LayerKind) -> Self {
        Self {
            kind,
            polylines: Vec::new(),
            regions: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
            && self.regions.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers are kept in canonical order; backends draw them front to back as
/// listed and never reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: LayerKind::canonical_order()
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    pub fn push_polyline(&mut self, kind: LayerKind, polyline: PolylinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.polylines.push(polyline);
        }
    }

    pub fn push_region(&mut self, kind: LayerKind, region: RegionPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.regions.push(region);
        }
    }

    pub fn push_circle(&mut self, kind: LayerKind, circle: CirclePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.circles.push(circle);
        }
    }

    pub fn push_text(&mut self, kind: LayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for polyline in &layer.polylines {
                polyline.validate()?;
            }
            for region in &layer.regions {
                region.validate()?;
            }
            for circle in &layer.circles {
                circle.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    #[must_use]
    pub fn counts(&self) -> FrameCounts {
        let mut counts = FrameCounts::default();
        for layer in &self.layers {
            counts.polylines += layer.polylines.len();
            counts.regions += layer.regions.len();
            counts.circles += layer.circles.len();
            counts.texts += layer.texts.len();
        }
        counts
    }

    fn layer_mut(&mut self, kind: LayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
