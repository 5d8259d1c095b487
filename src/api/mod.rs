mod axis;
mod engine;
mod format;
mod tooltip;

pub use axis::{AxisGeometry, build_value_axis, build_year_axis};
pub use engine::{ChartEngine, ChartEngineConfig, RenderReport};
pub use format::format_billions;
pub use tooltip::tooltip_text;
