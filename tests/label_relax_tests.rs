use impexp_chart::core::{ChartScales, PlotArea};
use impexp_chart::data::{EntitySeries, YearPoint};
use impexp_chart::label::{LabelBox, RelaxationTuning, place, resolve_overlap};

fn plot() -> PlotArea {
    PlotArea {
        width: 620.0,
        height: 320.0,
    }
}

fn label(name: &str, center_y: f64) -> LabelBox {
    LabelBox {
        entity_name: name.to_owned(),
        anchor_x: 600.0,
        anchor_y: center_y,
        width: 48.0,
        height: 14.0,
    }
}

#[test]
fn anchors_sit_at_the_last_fully_reported_year() {
    let france = EntitySeries::new(
        "France",
        vec![
            YearPoint::new(1999, Some(10.0), Some(20.0)),
            YearPoint::new(2000, Some(40.0), Some(60.0)),
            YearPoint::new(2001, Some(80.0), None),
        ],
    );
    let scales = ChartScales::compute(&[&france], plot())
        .expect("compute")
        .expect("scales");

    let labels = place(&[&france], &scales, 12.0).expect("place");
    assert_eq!(labels.len(), 1);

    // 2001 lacks exports, so the anchor is pinned to 2000.
    let expected_x = scales.year.year_to_x(2000, plot()).expect("anchor x");
    let expected_y = scales.value.value_to_y(50.0, plot()).expect("anchor y");
    assert!((labels[0].anchor_x - expected_x).abs() < 1e-9);
    assert!((labels[0].anchor_y - expected_y).abs() < 1e-9);
}

#[test]
fn entities_without_a_fully_reported_year_get_no_label() {
    let partial = EntitySeries::new(
        "Partial",
        vec![
            YearPoint::new(1999, Some(10.0), None),
            YearPoint::new(2000, None, Some(20.0)),
        ],
    );
    let full = EntitySeries::new(
        "Full",
        vec![YearPoint::new(1999, Some(10.0), Some(20.0))],
    );
    let scales = ChartScales::compute(&[&partial, &full], plot())
        .expect("compute")
        .expect("scales");

    let labels = place(&[&partial, &full], &scales, 12.0).expect("place");
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].entity_name, "Full");
}

#[test]
fn overlapping_pair_separates_within_the_cap() {
    let mut labels = vec![label("France", 100.0), label("UK", 104.0)];
    let outcome = resolve_overlap(&mut labels, RelaxationTuning::default()).expect("relax");

    assert!(outcome.converged);
    assert!(outcome.sweeps <= RelaxationTuning::default().max_sweeps);

    let gap = (labels[0].center_y() - labels[1].center_y()).abs();
    // Separated to the collision threshold, within a relaxed tolerance.
    assert!(gap * 2.0 >= labels[0].height + labels[1].height - 0.1);
    // X never moves.
    assert!(labels.iter().all(|l| l.anchor_x == 600.0));
}

#[test]
fn identical_anchors_still_separate() {
    let mut labels = vec![label("France", 150.0), label("UK", 150.0)];
    let outcome = resolve_overlap(&mut labels, RelaxationTuning::default()).expect("relax");

    assert!(outcome.converged);
    let gap = (labels[0].center_y() - labels[1].center_y()).abs();
    assert!(gap * 2.0 >= labels[0].height + labels[1].height - 0.1);
}

#[test]
fn non_overlapping_labels_do_not_move() {
    let mut labels = vec![label("France", 50.0), label("UK", 120.0), label("China", 200.0)];
    let before = labels.clone();

    let outcome = resolve_overlap(&mut labels, RelaxationTuning::default()).expect("relax");
    assert!(outcome.converged);
    assert_eq!(outcome.final_movement, 0.0);
    assert_eq!(labels, before);
}

#[test]
fn sweep_cap_reports_non_convergence_instead_of_hanging() {
    let tuning = RelaxationTuning {
        max_sweeps: 1,
        ..RelaxationTuning::default()
    };
    let mut labels = vec![label("France", 100.0), label("UK", 100.0)];

    let outcome = resolve_overlap(&mut labels, tuning).expect("relax");
    assert!(!outcome.converged);
    assert_eq!(outcome.sweeps, 1);
    assert!(outcome.final_movement > 0.0);
}

#[test]
fn single_label_is_a_no_op() {
    let mut labels = vec![label("France", 100.0)];
    let outcome = resolve_overlap(&mut labels, RelaxationTuning::default()).expect("relax");
    assert!(outcome.converged);
    assert_eq!(outcome.sweeps, 0);
}

#[test]
fn invalid_tuning_is_rejected() {
    let mut labels = vec![label("France", 100.0), label("UK", 104.0)];
    let zero_fraction = RelaxationTuning {
        correction_fraction: 0.0,
        ..RelaxationTuning::default()
    };
    assert!(resolve_overlap(&mut labels, zero_fraction).is_err());
}
