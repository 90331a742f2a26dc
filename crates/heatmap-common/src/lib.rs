//! Common types shared by the heatmap renderer and the CLI service.

pub mod chart;
pub mod color;
pub mod dataset;
pub mod error;
pub mod month;

pub use chart::ChartConfig;
pub use color::{Color, ColorRamp};
pub use dataset::{TemperatureDataset, VarianceRecord};
pub use error::{HeatmapError, HeatmapResult};
pub use month::month_name;
