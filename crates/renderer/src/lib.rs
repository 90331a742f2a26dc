//! Heatmap rendering for monthly temperature variance.
//!
//! - Band, linear and threshold scales
//! - Scene graph construction for axes, cells and legend
//! - Per-cell tooltip content and hover state
//! - SVG, HTML and PNG output

pub mod axis;
pub mod heatmap;
pub mod legend;
pub mod page;
pub mod raster;
pub mod scale;
pub mod scene;
pub mod tooltip;

pub use heatmap::{render_chart, ChartScales, ColorScale, HeatmapCell, RenderedChart};
pub use scene::{Node, Scene};
