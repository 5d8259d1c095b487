pub mod scale;
pub mod scales;
pub mod types;
pub mod value_scale;
pub mod year_scale;

pub use scale::LinearScale;
pub use scales::ChartScales;
pub use types::{Margins, PlotArea, Viewport};
pub use value_scale::ValueScale;
pub use year_scale::YearScale;
