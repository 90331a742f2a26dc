//! Temperature heatmap service library.
//!
//! Loads the monthly variance dataset, renders the chart and writes it out.
//! The `heatmap` binary is a thin CLI over these modules.

pub mod loader;
pub mod output;
pub mod pipeline;

pub use loader::{DataSource, DatasetLoader, DEFAULT_DATA_URL};
pub use output::{encode, write_output, OutputFormat};
pub use pipeline::fetch_and_render;
