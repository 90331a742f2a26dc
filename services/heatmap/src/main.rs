//! Monthly global land-surface temperature heatmap.
//!
//! Fetches the temperature variance dataset once, renders the heatmap and
//! writes it as SVG, HTML, PNG or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use heatmap::{encode, fetch_and_render, write_output, DataSource, DatasetLoader, OutputFormat};
use heatmap_common::ChartConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "heatmap")]
#[command(about = "Render the monthly global land-surface temperature heatmap")]
struct Args {
    /// Dataset URL
    #[arg(long, env = "HEATMAP_DATA_URL", default_value = heatmap::DEFAULT_DATA_URL)]
    url: String,

    /// Read the dataset from a local JSON file instead of fetching it
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Chart layout configuration (YAML)
    #[arg(short, long, env = "HEATMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from the output extension, else svg)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Pixel scale factor for PNG output
    #[arg(long, default_value = "1.0")]
    png_scale: f32,

    /// Omit data-temp attributes from cells
    #[arg(long)]
    no_data_temp: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,
}

fn init_tracing(args: &Args) -> Result<()> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so chart output can be piped from stdout.
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    match args.log_format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish())?,
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<ChartConfig> {
    let mut config = match &args.config {
        Some(path) => ChartConfig::from_file(path)
            .with_context(|| format!("Failed to load chart config: {}", path.display()))?,
        None => ChartConfig::default(),
    };

    if args.no_data_temp {
        config.cells.emit_data_temp = false;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args)?;

    let config = load_config(&args)?;

    let source = match &args.input {
        Some(path) => DataSource::File(path.clone()),
        None => DataSource::Url(args.url.clone()),
    };

    let format = args
        .format
        .or_else(|| args.output.as_deref().and_then(OutputFormat::from_path))
        .unwrap_or_default();

    info!(source = %source, format = ?format, "Starting heatmap render");

    let loader = DatasetLoader::new()?;
    let chart = match fetch_and_render(&loader, &source, &config).await {
        Ok(chart) => chart,
        Err(e) => {
            error!(error = %e, "Heatmap render failed");
            return Err(e.into());
        }
    };

    let bytes = encode(&chart, format, args.png_scale).context("Failed to encode chart")?;
    write_output(&bytes, args.output.as_deref())
        .await
        .context("Failed to write chart")?;

    Ok(())
}
