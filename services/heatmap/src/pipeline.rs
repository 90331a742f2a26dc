//! Fetch-then-render pipeline.

use heatmap_common::{ChartConfig, HeatmapResult};
use renderer::{render_chart, RenderedChart};
use tracing::info;

use crate::loader::{DataSource, DatasetLoader};

/// Load the dataset, then build the chart. Rendering starts only after the
/// load resolves; any load failure is returned untouched.
pub async fn fetch_and_render(
    loader: &DatasetLoader,
    source: &DataSource,
    config: &ChartConfig,
) -> HeatmapResult<RenderedChart> {
    info!(source = %source, "Loading temperature dataset");
    let dataset = loader.load(source).await?;

    let chart = render_chart(&dataset, config)?;
    info!(
        cells = chart.cells.len(),
        description = %chart.description,
        "Rendered heatmap"
    );
    Ok(chart)
}
