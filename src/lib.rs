//! impexp-chart: comparative trade-flow charting core.
//!
//! This crate turns two wide-format tables of yearly import/export values
//! into renderable chart geometry: per-entity line pairs, clip-masked
//! surplus/deficit bands, and overlap-relaxed right-edge labels. Drawing
//! backends sit behind the `render::Renderer` trait; the library itself is
//! backend-agnostic and fully deterministic.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod label;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use data::{CombinedDataset, EntitySeries, WideRow, YearPoint, combine};
pub use error::{ChartError, ChartResult};
