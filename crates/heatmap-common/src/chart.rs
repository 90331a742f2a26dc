//! Chart layout configuration.
//!
//! Every layout constant the renderer needs lives here so that a render is a
//! pure function of `(dataset, config)`. Defaults reproduce the standard
//! 1000x300 chart; a YAML file can override any subset of fields.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::color::ColorRamp;
use crate::error::{HeatmapError, HeatmapResult};

/// Immutable layout configuration passed into the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart heading
    pub title: String,
    /// Width of the cell grid in pixels
    pub plot_width: f64,
    /// Height of the cell grid in pixels
    pub plot_height: f64,
    /// Horizontal padding added to the SVG around the grid
    pub padding_x: f64,
    /// Vertical padding added to the SVG around the grid
    pub padding_y: f64,
    /// Distance from the SVG top edge to the grid
    pub plot_top: f64,
    /// Extra left shift of the grid beyond half the horizontal padding
    pub plot_left_shift: f64,
    pub axes: AxisConfig,
    pub legend: LegendConfig,
    pub cells: CellConfig,
    /// Diverging ramp listed warm to cool
    pub colors: ColorRamp,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Monthly Global Land-Surface Temperature".to_string(),
            plot_width: 1000.0,
            plot_height: 300.0,
            padding_x: 140.0,
            padding_y: 180.0,
            plot_top: 20.0,
            plot_left_shift: 30.0,
            axes: AxisConfig::default(),
            legend: LegendConfig::default(),
            cells: CellConfig::default(),
            colors: ColorRamp::default(),
        }
    }
}

/// Axis tick configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Only years divisible by this get an x-axis label
    pub year_tick_interval: i32,
    pub year_tick_size: f64,
    pub month_tick_size: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            year_tick_interval: 15,
            year_tick_size: 9.0,
            month_tick_size: 7.0,
        }
    }
}

/// Legend layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    /// Pixel width the temperature range is mapped onto
    pub width: f64,
    pub swatch_height: f64,
    pub tick_size: f64,
    pub box_width: f64,
    pub box_height: f64,
    pub box_fill: String,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            swatch_height: 30.0,
            tick_size: 9.0,
            box_width: 420.0,
            box_height: 105.0,
            box_fill: "#e9f1f1".to_string(),
        }
    }
}

/// Which attributes each cell carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellConfig {
    /// Emit `data-temp` on every cell
    pub emit_data_temp: bool,
    /// Embed a `<title>` tooltip in every cell
    pub emit_tooltips: bool,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            emit_data_temp: true,
            emit_tooltips: true,
        }
    }
}

impl ChartConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> HeatmapResult<Self> {
        let config: ChartConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> HeatmapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| HeatmapError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_yaml(&content)?;
        debug!(path = %path.display(), "Loaded chart config");
        Ok(config)
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        let positive = [
            ("plot_width", self.plot_width),
            ("plot_height", self.plot_height),
            ("legend.width", self.legend.width),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(HeatmapError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.padding_x < 0.0 || self.padding_y < 0.0 {
            return Err(HeatmapError::InvalidConfig(
                "padding must not be negative".to_string(),
            ));
        }

        if self.axes.year_tick_interval <= 0 {
            return Err(HeatmapError::InvalidConfig(
                "axes.year_tick_interval must be at least 1".to_string(),
            ));
        }

        if self.colors.is_empty() {
            return Err(HeatmapError::InvalidConfig(
                "color ramp must contain at least one color".to_string(),
            ));
        }

        Ok(())
    }

    pub fn svg_width(&self) -> f64 {
        self.plot_width + self.padding_x
    }

    pub fn svg_height(&self) -> f64 {
        self.plot_height + self.padding_y
    }

    /// Top-left corner of the cell grid inside the SVG.
    pub fn plot_origin(&self) -> (f64, f64) {
        (self.padding_x / 2.0 + self.plot_left_shift, self.plot_top)
    }
}
