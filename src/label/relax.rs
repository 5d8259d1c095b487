use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::label::LabelBox;

/// Tuning controls for label-overlap relaxation.
///
/// `correction_fraction` damps each pairwise push to a small share of the
/// overlap depth so sweeps converge instead of oscillating. `epsilon` is the
/// per-sweep total-movement threshold that counts as a fixed point, and
/// `max_sweeps` bounds the loop on pathological configurations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelaxationTuning {
    pub correction_fraction: f64,
    pub epsilon: f64,
    pub max_sweeps: usize,
}

impl Default for RelaxationTuning {
    fn default() -> Self {
        Self {
            correction_fraction: 0.02,
            epsilon: 0.001,
            max_sweeps: 1024,
        }
    }
}

impl RelaxationTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.correction_fraction.is_finite()
            || self.correction_fraction <= 0.0
            || self.correction_fraction >= 1.0
        {
            return Err(ChartError::InvalidData(
                "relaxation correction fraction must be finite and in (0, 1)".to_owned(),
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ChartError::InvalidData(
                "relaxation epsilon must be finite and > 0".to_owned(),
            ));
        }
        if self.max_sweeps == 0 {
            return Err(ChartError::InvalidData(
                "relaxation sweep cap must be >= 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Result of one relaxation run, usable for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelaxationOutcome {
    pub converged: bool,
    pub sweeps: usize,
    pub final_movement: f64,
}

impl Default for RelaxationOutcome {
    /// The nothing-to-do outcome: zero sweeps, already converged.
    fn default() -> Self {
        Self::settled(0, 0.0)
    }
}

impl RelaxationOutcome {
    #[must_use]
    fn settled(sweeps: usize, final_movement: f64) -> Self {
        Self {
            converged: true,
            sweeps,
            final_movement,
        }
    }
}

/// Pushes vertically colliding labels apart until movement dies out.
///
/// Every ordered pair of distinct labels is checked per sweep (O(n²)); each
/// collision moves the pair apart by a damped share of the overlap depth,
/// split between the two. Sweeps stop once the accumulated movement of a
/// full sweep drops to `epsilon`, or at the sweep cap, in which case the
/// outcome reports `converged: false` and callers keep the last positions.
pub fn resolve_overlap(
    labels: &mut [LabelBox],
    tuning: RelaxationTuning,
) -> ChartResult<RelaxationOutcome> {
    let tuning = tuning.validate()?;

    if labels.len() < 2 {
        return Ok(RelaxationOutcome::settled(0, 0.0));
    }

    let mut movement = 0.0;
    for sweep in 1..=tuning.max_sweeps {
        movement = 0.0;

        for first in 0..labels.len() {
            for second in 0..labels.len() {
                if first == second {
                    continue;
                }
                if !labels[first].collides_vertically(&labels[second]) {
                    continue;
                }

                let gap = (labels[first].center_y() - labels[second].center_y()).abs();
                let depth = (labels[first].height + labels[second].height) / 2.0 - gap;
                let half_push = depth * tuning.correction_fraction / 2.0;

                // The upper label moves up, the lower one down; identical
                // centers split by index so sweeps stay deterministic.
                let first_is_upper = match labels[first]
                    .center_y()
                    .partial_cmp(&labels[second].center_y())
                {
                    Some(std::cmp::Ordering::Less) => true,
                    Some(std::cmp::Ordering::Greater) => false,
                    _ => first < second,
                };
                if first_is_upper {
                    labels[first].anchor_y -= half_push;
                    labels[second].anchor_y += half_push;
                } else {
                    labels[first].anchor_y += half_push;
                    labels[second].anchor_y -= half_push;
                }
                movement += half_push * 2.0;
            }
        }

        trace!(sweep, movement, "label relaxation sweep");
        if movement <= tuning.epsilon {
            return Ok(RelaxationOutcome::settled(sweep, movement));
        }
    }

    Ok(RelaxationOutcome {
        converged: false,
        sweeps: tuning.max_sweeps,
        final_movement: movement,
    })
}
