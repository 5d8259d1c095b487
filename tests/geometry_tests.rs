use impexp_chart::core::{ChartScales, PlotArea};
use impexp_chart::data::{EntitySeries, YearPoint};
use impexp_chart::render::{ChartStyle, project_entity};

fn plot() -> PlotArea {
    PlotArea {
        width: 620.0,
        height: 320.0,
    }
}

fn scales_for(series: &EntitySeries) -> ChartScales {
    ChartScales::compute(&[series], plot())
        .expect("compute")
        .expect("scales")
}

#[test]
fn missing_values_break_lines_into_sub_runs() {
    let series = EntitySeries::new(
        "France",
        vec![
            YearPoint::new(2000, Some(10.0), None),
            YearPoint::new(2001, Some(12.0), None),
            YearPoint::new(2002, None, None),
            YearPoint::new(2003, Some(14.0), None),
            YearPoint::new(2004, Some(16.0), None),
        ],
    );
    let geometry =
        project_entity(&series, &scales_for(&series), &ChartStyle::default()).expect("project");

    // The gap at 2002 splits the import line; nothing interpolates across it.
    assert_eq!(geometry.import_lines.len(), 2);
    assert!(geometry.import_lines.iter().all(|line| line.points.len() == 2));
    assert!(geometry.export_lines.is_empty());
}

#[test]
fn every_defined_point_gets_a_marker() {
    let series = EntitySeries::new(
        "UK",
        vec![
            YearPoint::new(2000, Some(10.0), Some(8.0)),
            YearPoint::new(2001, None, Some(9.0)),
            YearPoint::new(2002, Some(12.0), None),
        ],
    );
    let geometry =
        project_entity(&series, &scales_for(&series), &ChartStyle::default()).expect("project");

    assert_eq!(geometry.import_markers.len(), 2);
    assert_eq!(geometry.export_markers.len(), 2);
    assert_eq!(geometry.import_markers[0].year, 2000);
    assert_eq!(geometry.export_markers[1].year, 2001);
}

#[test]
fn bands_exist_only_over_fully_defined_runs() {
    let series = EntitySeries::new(
        "China",
        vec![
            YearPoint::new(2000, Some(10.0), Some(12.0)),
            YearPoint::new(2001, Some(11.0), Some(14.0)),
            YearPoint::new(2002, Some(12.0), None),
            YearPoint::new(2003, Some(13.0), Some(11.0)),
            YearPoint::new(2004, Some(14.0), Some(10.0)),
        ],
    );
    let geometry =
        project_entity(&series, &scales_for(&series), &ChartStyle::default()).expect("project");

    // 2002 lacks exports, so the band splits into two runs on each side.
    assert_eq!(geometry.surplus_regions.len(), 2);
    assert_eq!(geometry.deficit_regions.len(), 2);
    for region in geometry
        .surplus_regions
        .iter()
        .chain(&geometry.deficit_regions)
    {
        assert!(region.validate().is_ok());
        assert_eq!(region.clip_polygon.first(), region.clip_polygon.last());
        assert_eq!(region.fill_polygon.first(), region.fill_polygon.last());
    }
}

#[test]
fn band_window_runs_between_the_two_curves() {
    let series = EntitySeries::new(
        "Japan",
        vec![
            YearPoint::new(2000, Some(40.0), Some(100.0)),
            YearPoint::new(2001, Some(60.0), Some(80.0)),
        ],
    );
    let scales = scales_for(&series);
    let geometry = project_entity(&series, &scales, &ChartStyle::default()).expect("project");

    let surplus = &geometry.surplus_regions[0];
    // Clip window: import curve forward, export curve back, explicit close.
    assert_eq!(surplus.clip_polygon.len(), 5);
    let import_y0 = scales.value.value_to_y(40.0, plot()).expect("import y");
    let export_y0 = scales.value.value_to_y(100.0, plot()).expect("export y");
    assert!((surplus.clip_polygon[0].y - import_y0).abs() < 1e-9);
    assert!((surplus.clip_polygon[3].y - export_y0).abs() < 1e-9);

    // Fill hangs from the export curve down to the zero baseline.
    let baseline = scales.value.baseline_y(plot());
    assert!((surplus.fill_polygon[0].y - baseline).abs() < 1e-9);
    assert!((surplus.fill_polygon[1].y - export_y0).abs() < 1e-9);
}

#[test]
fn crossing_lines_need_no_special_casing() {
    // Imports and exports swap dominance between the two years; the clip
    // window self-crosses and pinches to zero height at the crossing.
    let series = EntitySeries::new(
        "Brazil",
        vec![
            YearPoint::new(2000, Some(10.0), Some(30.0)),
            YearPoint::new(2001, Some(30.0), Some(10.0)),
        ],
    );
    let geometry =
        project_entity(&series, &scales_for(&series), &ChartStyle::default()).expect("project");

    assert_eq!(geometry.surplus_regions.len(), 1);
    assert_eq!(geometry.deficit_regions.len(), 1);
    assert!(geometry.surplus_regions[0].validate().is_ok());
    assert!(geometry.deficit_regions[0].validate().is_ok());
}

#[test]
fn isolated_defined_points_draw_no_line() {
    let series = EntitySeries::new(
        "Chad",
        vec![
            YearPoint::new(2000, Some(10.0), None),
            YearPoint::new(2001, None, None),
            YearPoint::new(2002, Some(12.0), None),
        ],
    );
    let geometry =
        project_entity(&series, &scales_for(&series), &ChartStyle::default()).expect("project");

    // Two one-point runs: markers yes, polylines no.
    assert!(geometry.import_lines.is_empty());
    assert_eq!(geometry.import_markers.len(), 2);
}
