use smallvec::SmallVec;

use crate::core::ChartScales;
use crate::data::EntitySeries;
use crate::error::ChartResult;
use crate::render::band::{baseline_fill, window_between};
use crate::render::{ChartStyle, PolylinePrimitive, RegionPrimitive, Vertex};

/// One projected hover target: a defined sample of one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityMarker {
    pub year: i32,
    pub x: f64,
    pub y: f64,
}

/// Renderable geometry for one displayed entity, in plot-area coordinates.
///
/// Lines come in sub-runs: an unreported value breaks continuity instead of
/// interpolating across the gap. Bands only exist over runs where both
/// fields are reported.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityGeometry {
    pub name: String,
    pub import_lines: Vec<PolylinePrimitive>,
    pub export_lines: Vec<PolylinePrimitive>,
    pub import_markers: Vec<EntityMarker>,
    pub export_markers: Vec<EntityMarker>,
    pub surplus_regions: Vec<RegionPrimitive>,
    pub deficit_regions: Vec<RegionPrimitive>,
}

impl EntityGeometry {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.import_lines.is_empty()
            && self.export_lines.is_empty()
            && self.import_markers.is_empty()
            && self.export_markers.is_empty()
            && self.surplus_regions.is_empty()
            && self.deficit_regions.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct ProjectedPoint {
    year: i32,
    x: f64,
    import_y: Option<f64>,
    export_y: Option<f64>,
}

/// Projects one entity's series into lines, markers, and band regions.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same geometry output.
pub fn project_entity(
    series: &EntitySeries,
    scales: &ChartScales,
    style: &ChartStyle,
) -> ChartResult<EntityGeometry> {
    let mut projected = Vec::with_capacity(series.values.len());
    for point in &series.values {
        let x = scales.year.year_to_x(point.year, scales.plot)?;
        let import_y = match point.imports {
            Some(value) => Some(scales.value.value_to_y(value, scales.plot)?),
            None => None,
        };
        let export_y = match point.exports {
            Some(value) => Some(scales.value.value_to_y(value, scales.plot)?),
            None => None,
        };
        projected.push(ProjectedPoint {
            year: point.year,
            x,
            import_y,
            export_y,
        });
    }

    let import_runs = defined_runs(&projected, |point| point.import_y);
    let export_runs = defined_runs(&projected, |point| point.export_y);

    let import_lines = runs_to_polylines(&import_runs, style.line_stroke_width, style.import_color);
    let export_lines = runs_to_polylines(&export_runs, style.line_stroke_width, style.export_color);

    let import_markers = defined_markers(&projected, |point| point.import_y);
    let export_markers = defined_markers(&projected, |point| point.export_y);

    let baseline = scales.value.baseline_y(scales.plot);
    let mut surplus_regions = Vec::new();
    let mut deficit_regions = Vec::new();
    for (import_curve, export_curve) in both_defined_runs(&projected) {
        // Surplus: fill under the export curve, windowed from the import
        // curve down to the export curve. Deficit mirrors it.
        surplus_regions.push(RegionPrimitive::new(
            window_between(&import_curve, &export_curve),
            baseline_fill(&export_curve, baseline),
            style.surplus_color,
        ));
        deficit_regions.push(RegionPrimitive::new(
            window_between(&export_curve, &import_curve),
            baseline_fill(&import_curve, baseline),
            style.deficit_color,
        ));
    }

    Ok(EntityGeometry {
        name: series.name.clone(),
        import_lines,
        export_lines,
        import_markers,
        export_markers,
        surplus_regions,
        deficit_regions,
    })
}

/// Splits projected points into contiguous runs where `field` is reported.
fn defined_runs(
    projected: &[ProjectedPoint],
    field: impl Fn(&ProjectedPoint) -> Option<f64>,
) -> SmallVec<[Vec<Vertex>; 2]> {
    let mut runs: SmallVec<[Vec<Vertex>; 2]> = SmallVec::new();
    let mut current: Vec<Vertex> = Vec::new();

    for point in projected {
        match field(point) {
            Some(y) => current.push(Vertex::new(point.x, y)),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn runs_to_polylines(
    runs: &SmallVec<[Vec<Vertex>; 2]>,
    stroke_width: f64,
    color: crate::render::Color,
) -> Vec<PolylinePrimitive> {
    runs.iter()
        .filter(|run| run.len() >= 2)
        .map(|run| PolylinePrimitive::new(run.clone(), stroke_width, color))
        .collect()
}

fn defined_markers(
    projected: &[ProjectedPoint],
    field: impl Fn(&ProjectedPoint) -> Option<f64>,
) -> Vec<EntityMarker> {
    projected
        .iter()
        .filter_map(|point| {
            field(point).map(|y| EntityMarker {
                year: point.year,
                x: point.x,
                y,
            })
        })
        .collect()
}

/// Contiguous runs (length >= 2) where both fields are reported, as paired
/// import/export curves over the same x positions.
fn both_defined_runs(projected: &[ProjectedPoint]) -> SmallVec<[(Vec<Vertex>, Vec<Vertex>); 2]> {
    let mut runs: SmallVec<[(Vec<Vertex>, Vec<Vertex>); 2]> = SmallVec::new();
    let mut imports: Vec<Vertex> = Vec::new();
    let mut exports: Vec<Vertex> = Vec::new();

    let mut flush = |imports: &mut Vec<Vertex>, exports: &mut Vec<Vertex>| {
        if imports.len() >= 2 {
            runs.push((std::mem::take(imports), std::mem::take(exports)));
        } else {
            imports.clear();
            exports.clear();
        }
    };

    for point in projected {
        match (point.import_y, point.export_y) {
            (Some(import_y), Some(export_y)) => {
                imports.push(Vertex::new(point.x, import_y));
                exports.push(Vertex::new(point.x, export_y));
            }
            _ => flush(&mut imports, &mut exports),
        }
    }
    flush(&mut imports, &mut exports);
    runs
}
