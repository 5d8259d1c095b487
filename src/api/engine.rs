use indexmap::{IndexMap, IndexSet};
use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::api::axis::{build_value_axis, build_year_axis};
use crate::api::tooltip::tooltip_text;
use crate::core::{ChartScales, Margins, Viewport};
use crate::data::{CombinedDataset, EntitySeries};
use crate::error::ChartResult;
use crate::label::{RelaxationOutcome, RelaxationTuning, place, resolve_overlap};
use crate::render::{
    ChartStyle, CirclePrimitive, EntityDiff, EntityGeometry, FrameCounts, LayerKind, RenderFrame,
    Renderer, TextHAlign, TextPrimitive, project_entity, reconcile,
};

/// Horizontal gap between a label's anchor and its text, in pixels.
const LABEL_X_OFFSET_PX: f64 = 7.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub margins: Margins,
    pub style: ChartStyle,
    pub label_tuning: RelaxationTuning,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            style: ChartStyle::default(),
            label_tuning: RelaxationTuning::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_label_tuning(mut self, label_tuning: RelaxationTuning) -> Self {
        self.label_tuning = label_tuning;
        self
    }
}

/// Summary of one render pass, for diagnostics and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub diff: EntityDiff,
    pub entities_rendered: usize,
    pub labels_placed: usize,
    pub label_relaxation: RelaxationOutcome,
    pub frame_counts: FrameCounts,
}

/// Facade driving the whole pipeline against one renderer backend.
///
/// The engine owns the immutable combined dataset, the current selection,
/// and the per-entity geometry of the previous pass for reconciliation.
/// `render` is the idempotent entry point: every call is one complete
/// synchronous pass (scales, diff, geometry, labels, frame, backend) and
/// an unchanged selection reproduces the same frame.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    margins: Margins,
    style: ChartStyle,
    label_tuning: RelaxationTuning,
    dataset: CombinedDataset,
    selection: Vec<String>,
    geometries: IndexMap<String, EntityGeometry>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        // Surfaces every config error up front rather than on first render.
        config.viewport.plot_area(config.margins)?;
        config.style.validate()?;
        config.label_tuning.validate()?;

        Ok(Self {
            renderer,
            viewport: config.viewport,
            margins: config.margins,
            style: config.style,
            label_tuning: config.label_tuning,
            dataset: CombinedDataset::default(),
            selection: Vec::new(),
            geometries: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        viewport.plot_area(self.margins)?;
        self.viewport = viewport;
        Ok(())
    }

    /// Installs the combined dataset the chart reads from.
    ///
    /// Selection entries that no longer resolve are dropped; previously
    /// rendered geometry is discarded so the next pass reports every
    /// displayed entity as added.
    pub fn set_dataset(&mut self, dataset: CombinedDataset) {
        debug!(entities = dataset.len(), "set combined dataset");
        self.dataset = dataset;
        let dataset = &self.dataset;
        self.selection.retain(|name| dataset.contains(name));
        self.geometries.clear();
    }

    #[must_use]
    pub fn dataset(&self) -> &CombinedDataset {
        &self.dataset
    }

    /// Replaces the displayed selection, preserving the given order.
    ///
    /// Names that do not resolve in the dataset are skipped with a warning,
    /// as are duplicates; an unknown picker entry must never poison a pass.
    pub fn set_selection<S: AsRef<str>>(&mut self, names: &[S]) {
        let mut resolved: IndexSet<String> = IndexSet::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if !self.dataset.contains(name) {
                warn!(entity = name, "selection names an unknown entity; skipping");
                continue;
            }
            if !resolved.insert(name.to_owned()) {
                warn!(entity = name, "selection repeats an entity; skipping");
            }
        }

        self.selection = resolved.into_iter().collect();
        debug!(selected = self.selection.len(), "selection changed");
    }

    #[must_use]
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Runs one complete render pass against the backend.
    ///
    /// An empty selection (or one with nothing to map) still renders; the
    /// frame is just empty, which clears the chart. A relaxation pass that
    /// hits its sweep cap is logged and its last positions are rendered
    /// anyway; the report carries the convergence flag.
    pub fn render(&mut self) -> ChartResult<RenderReport> {
        let plot = self.viewport.plot_area(self.margins)?;

        let previous: IndexSet<String> = self.geometries.keys().cloned().collect();
        let diff = reconcile(&previous, &self.selection);

        let selected: Vec<&EntitySeries> = self
            .selection
            .iter()
            .filter_map(|name| self.dataset.get(name))
            .collect();

        let mut frame = RenderFrame::new(self.viewport);
        let mut new_geometries: IndexMap<String, EntityGeometry> =
            IndexMap::with_capacity(selected.len());
        let mut relaxation = RelaxationOutcome::default();
        let mut labels_placed = 0_usize;

        if let Some(scales) = ChartScales::compute(&selected, plot)? {
            let year_axis = build_year_axis(&scales, &self.style)?;
            let value_axis = build_value_axis(&scales, &self.style)?;
            for mut line in year_axis.lines.into_iter().chain(value_axis.lines) {
                line.offset(self.margins.left, self.margins.top);
                frame.push_polyline(LayerKind::Axis, line);
            }
            for mut text in year_axis.texts.into_iter().chain(value_axis.texts) {
                text.offset(self.margins.left, self.margins.top);
                frame.push_text(LayerKind::Axis, text);
            }

            for geometry in self.project_selection(&selected, &scales)? {
                self.push_entity(&mut frame, &geometry);
                new_geometries.insert(geometry.name.clone(), geometry);
            }

            let mut labels = place(&selected, &scales, self.style.label_font_size_px)?;
            relaxation = resolve_overlap(&mut labels, self.label_tuning)?;
            if !relaxation.converged {
                warn!(
                    sweeps = relaxation.sweeps,
                    final_movement = relaxation.final_movement,
                    "label relaxation hit the sweep cap; rendering last computed positions"
                );
            }
            labels_placed = labels.len();
            for label in &labels {
                let mut text = TextPrimitive::new(
                    label.entity_name.clone(),
                    label.anchor_x + LABEL_X_OFFSET_PX,
                    label.top(),
                    self.style.label_font_size_px,
                    self.style.label_color,
                    TextHAlign::Left,
                );
                text.offset(self.margins.left, self.margins.top);
                frame.push_text(LayerKind::Labels, text);
            }
        }

        self.renderer.render(&frame)?;
        let frame_counts = frame.counts();
        self.geometries = new_geometries;

        debug!(
            added = diff.added.len(),
            retained = diff.retained.len(),
            removed = diff.removed.len(),
            entities = self.geometries.len(),
            labels = labels_placed,
            "render pass complete"
        );

        Ok(RenderReport {
            diff,
            entities_rendered: self.geometries.len(),
            labels_placed,
            label_relaxation: relaxation,
            frame_counts,
        })
    }

    /// Tooltip text for the marker nearest to a viewport position, if the
    /// pointer is within marker radius of one.
    #[must_use]
    pub fn tooltip_at(&self, x: f64, y: f64) -> Option<String> {
        let plot_x = x - self.margins.left;
        let plot_y = y - self.margins.top;
        let radius = self.style.marker_radius;

        let mut candidates: SmallVec<[(OrderedFloat<f64>, &str, i32); 4]> = SmallVec::new();
        for (name, geometry) in &self.geometries {
            for marker in geometry
                .import_markers
                .iter()
                .chain(&geometry.export_markers)
            {
                let distance_sq =
                    (marker.x - plot_x).powi(2) + (marker.y - plot_y).powi(2);
                if distance_sq <= radius * radius {
                    candidates.push((OrderedFloat(distance_sq), name.as_str(), marker.year));
                }
            }
        }

        let (_, name, year) = candidates.into_iter().min_by_key(|entry| entry.0)?;
        let series = self.dataset.get(name)?;
        let point = series.values.iter().copied().find(|p| p.year == year)?;
        Some(tooltip_text(name, point))
    }

    fn project_selection(
        &self,
        selected: &[&EntitySeries],
        scales: &ChartScales,
    ) -> ChartResult<Vec<EntityGeometry>> {
        #[cfg(feature = "parallel-projection")]
        {
            use rayon::prelude::*;
            selected
                .par_iter()
                .map(|series| project_entity(series, scales, &self.style))
                .collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            selected
                .iter()
                .map(|series| project_entity(series, scales, &self.style))
                .collect()
        }
    }

    /// Pushes one entity's plot-space geometry into the frame, offset into
    /// viewport coordinates.
    fn push_entity(&self, frame: &mut RenderFrame, geometry: &EntityGeometry) {
        let (dx, dy) = (self.margins.left, self.margins.top);

        for region in geometry
            .surplus_regions
            .iter()
            .chain(&geometry.deficit_regions)
        {
            let mut region = region.clone();
            region.offset(dx, dy);
            frame.push_region(LayerKind::Areas, region);
        }

        for line in geometry.import_lines.iter().chain(&geometry.export_lines) {
            let mut line = line.clone();
            line.offset(dx, dy);
            frame.push_polyline(LayerKind::Lines, line);
        }

        for (markers, color) in [
            (&geometry.import_markers, self.style.import_marker_color()),
            (&geometry.export_markers, self.style.export_marker_color()),
        ] {
            for marker in markers.iter() {
                frame.push_circle(
                    LayerKind::Markers,
                    CirclePrimitive::new(
                        marker.x + dx,
                        marker.y + dy,
                        self.style.marker_radius,
                        color,
                    ),
                );
            }
        }
    }
}
