use approx::assert_relative_eq;
use impexp_chart::core::{ChartScales, Margins, PlotArea, Viewport, YearScale};
use impexp_chart::data::{EntitySeries, YearPoint};

fn plot() -> PlotArea {
    PlotArea {
        width: 620.0,
        height: 320.0,
    }
}

fn series(name: &str, points: Vec<YearPoint>) -> EntitySeries {
    EntitySeries::new(name, points)
}

#[test]
fn year_domain_maps_edge_to_edge() {
    let france = series(
        "France",
        vec![
            YearPoint::new(1999, Some(1.0e10), Some(5.0e9)),
            YearPoint::new(2016, Some(1.0e11), Some(9.0e10)),
        ],
    );
    let scales = ChartScales::compute(&[&france], plot())
        .expect("compute")
        .expect("scales");

    let left = scales.year.year_to_x(1999, plot()).expect("left edge");
    let right = scales.year.year_to_x(2016, plot()).expect("right edge");
    assert_relative_eq!(left, 0.0);
    assert_relative_eq!(right, plot().width);
}

#[test]
fn value_axis_is_inverted_and_zero_anchored() {
    let france = series(
        "France",
        vec![
            YearPoint::new(1999, Some(0.0), Some(5.0e10)),
            YearPoint::new(2016, Some(1.0e11), Some(9.0e10)),
        ],
    );
    let scales = ChartScales::compute(&[&france], plot())
        .expect("compute")
        .expect("scales");

    let bottom = scales.value.value_to_y(0.0, plot()).expect("baseline");
    let top = scales.value.value_to_y(1.0e11, plot()).expect("top");
    assert_relative_eq!(bottom, plot().height);
    assert_relative_eq!(top, 0.0);
    assert_relative_eq!(scales.value.baseline_y(plot()), plot().height);
}

#[test]
fn value_domain_spans_both_fields_of_all_series() {
    let a = series("A", vec![YearPoint::new(2000, Some(10.0), Some(80.0))]);
    let b = series("B", vec![YearPoint::new(2001, Some(55.0), None)]);
    let scales = ChartScales::compute(&[&a, &b], plot())
        .expect("compute")
        .expect("scales");

    // The exports value of A is the global max.
    assert_eq!(scales.value.domain(), (0.0, 80.0));
}

#[test]
fn empty_selection_yields_no_scales() {
    let scales = ChartScales::compute(&[], plot()).expect("compute");
    assert!(scales.is_none());
}

#[test]
fn all_missing_values_yield_no_scales() {
    let ghost = series(
        "Ghost",
        vec![
            YearPoint::new(1999, None, None),
            YearPoint::new(2000, None, None),
        ],
    );
    let scales = ChartScales::compute(&[&ghost], plot()).expect("compute");
    assert!(scales.is_none());
}

#[test]
fn single_year_domain_widens_to_stay_invertible() {
    let single = series("Solo", vec![YearPoint::new(2004, Some(5.0), Some(3.0))]);
    let scale = YearScale::from_selection(&[&single])
        .expect("fit")
        .expect("scale");

    let (start, end) = scale.domain();
    assert_relative_eq!(start, 2003.5);
    assert_relative_eq!(end, 2004.5);
    assert!(scale.year_to_x(2004, plot()).is_ok());
}

#[test]
fn year_round_trip_within_tolerance() {
    let uk = series(
        "UK",
        vec![
            YearPoint::new(1960, Some(1.0), None),
            YearPoint::new(2020, Some(2.0), None),
        ],
    );
    let scales = ChartScales::compute(&[&uk], plot())
        .expect("compute")
        .expect("scales");

    let px = scales.year.year_to_x(1999, plot()).expect("to pixel");
    let recovered = scales.year.x_to_year(px, plot()).expect("from pixel");
    assert_relative_eq!(recovered, 1999.0, epsilon = 1e-9);
}

#[test]
fn value_round_trip_within_tolerance() {
    let uk = series(
        "UK",
        vec![
            YearPoint::new(1960, Some(40.0), None),
            YearPoint::new(2020, Some(90.0), None),
        ],
    );
    let scales = ChartScales::compute(&[&uk], plot())
        .expect("compute")
        .expect("scales");

    let px = scales.value.value_to_y(62.5, plot()).expect("to pixel");
    let recovered = scales.value.y_to_value(px, plot()).expect("from pixel");
    assert_relative_eq!(recovered, 62.5, epsilon = 1e-9);
}

#[test]
fn default_margins_leave_the_reference_plot_area() {
    let plot_area = Viewport::new(800, 350)
        .plot_area(Margins::default())
        .expect("plot area");
    assert_relative_eq!(plot_area.width, 620.0);
    assert_relative_eq!(plot_area.height, 320.0);
}

#[test]
fn oversized_margins_are_rejected() {
    let result = Viewport::new(100, 100).plot_area(Margins {
        top: 60.0,
        right: 10.0,
        bottom: 60.0,
        left: 10.0,
    });
    assert!(result.is_err());
}
