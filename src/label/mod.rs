pub mod anchor;
pub mod estimate;
pub mod relax;

pub use anchor::{LabelBox, place};
pub use estimate::estimate_label_extent;
pub use relax::{RelaxationOutcome, RelaxationTuning, resolve_overlap};
