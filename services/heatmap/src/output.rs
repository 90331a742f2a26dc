//! Output encoding and writing.

use std::path::Path;

use clap::ValueEnum;
use heatmap_common::{HeatmapError, HeatmapResult};
use renderer::page::render_html;
use renderer::raster::svg_to_png;
use renderer::RenderedChart;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Standalone SVG document
    #[default]
    Svg,
    /// HTML page with title, description and hover tooltip
    Html,
    /// Rasterized PNG
    Png,
    /// Cells and legend buckets as JSON
    Json,
}

impl OutputFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(OutputFormat::Svg),
            "html" | "htm" => Some(OutputFormat::Html),
            "png" => Some(OutputFormat::Png),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Encode a rendered chart in the requested format.
pub fn encode(chart: &RenderedChart, format: OutputFormat, png_scale: f32) -> HeatmapResult<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Svg => chart.to_svg().into_bytes(),
        OutputFormat::Html => render_html(chart)?.into_bytes(),
        OutputFormat::Png => svg_to_png(&chart.to_svg(), png_scale)?,
        OutputFormat::Json => serde_json::to_vec_pretty(&chart.summary())?,
    };
    Ok(bytes)
}

/// Write to `path`, or to stdout when no path is given.
pub async fn write_output(bytes: &[u8], path: Option<&Path>) -> HeatmapResult<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, bytes)
                .await
                .map_err(|e| HeatmapError::Io(format!("{}: {}", path.display(), e)))?;
            info!(path = %path.display(), bytes = bytes.len(), "Wrote chart");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(bytes).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("out/chart.svg")), Some(OutputFormat::Svg));
        assert_eq!(OutputFormat::from_path(Path::new("chart.HTML")), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::from_path(Path::new("chart.png")), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_path(Path::new("chart.json")), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_path(Path::new("chart.txt")), None);
        assert_eq!(OutputFormat::from_path(Path::new("chart")), None);
    }
}
