use impexp_chart::label::{LabelBox, RelaxationTuning, resolve_overlap};
use proptest::prelude::*;

fn labels_at(centers: &[f64]) -> Vec<LabelBox> {
    centers
        .iter()
        .enumerate()
        .map(|(index, center_y)| LabelBox {
            entity_name: format!("entity-{index}"),
            anchor_x: 600.0,
            anchor_y: *center_y,
            width: 48.0,
            height: 14.0,
        })
        .collect()
}

fn colliding_pairs(labels: &[LabelBox]) -> usize {
    let mut count = 0;
    for (index, label) in labels.iter().enumerate() {
        for other in &labels[index + 1..] {
            if label.collides_vertically(other) {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    #[test]
    fn relaxation_always_terminates_within_the_cap(
        centers in proptest::collection::vec(-200.0f64..200.0, 2..12),
    ) {
        let tuning = RelaxationTuning::default();
        let mut labels = labels_at(&centers);

        let outcome = resolve_overlap(&mut labels, tuning).expect("relax");
        prop_assert!(outcome.sweeps <= tuning.max_sweeps);
    }

    #[test]
    fn relaxation_never_touches_x(
        centers in proptest::collection::vec(-200.0f64..200.0, 2..12),
    ) {
        let mut labels = labels_at(&centers);
        resolve_overlap(&mut labels, RelaxationTuning::default()).expect("relax");
        prop_assert!(labels.iter().all(|label| label.anchor_x == 600.0));
    }

    #[test]
    fn pairwise_pushes_conserve_the_center_sum(
        centers in proptest::collection::vec(-200.0f64..200.0, 2..12),
    ) {
        let mut labels = labels_at(&centers);
        let sum_before: f64 = labels.iter().map(LabelBox::center_y).sum();

        resolve_overlap(&mut labels, RelaxationTuning::default()).expect("relax");
        let sum_after: f64 = labels.iter().map(LabelBox::center_y).sum();
        prop_assert!((sum_before - sum_after).abs() <= 1e-5);
    }

    #[test]
    fn converged_runs_leave_no_colliding_pairs(
        centers in proptest::collection::vec(-200.0f64..200.0, 2..8),
    ) {
        let tuning = RelaxationTuning::default();
        let mut labels = labels_at(&centers);

        let outcome = resolve_overlap(&mut labels, tuning).expect("relax");
        if outcome.converged {
            // A converged sweep can leave residual overlap of at most
            // epsilon scaled back by the correction fraction.
            let tolerance = 2.0 * tuning.epsilon / tuning.correction_fraction;
            let mut relaxed = labels.clone();
            for label in &mut relaxed {
                label.height -= tolerance;
            }
            prop_assert_eq!(colliding_pairs(&relaxed), 0);
        }
    }
}
