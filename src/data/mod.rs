pub mod json;
pub mod merge;
pub mod rows;
pub mod series;

#[cfg(feature = "csv-loader")]
pub mod loader;

pub use merge::combine;
pub use rows::WideRow;
pub use series::{CombinedDataset, EntitySeries, YearPoint};
