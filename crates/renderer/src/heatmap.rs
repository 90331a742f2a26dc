//! Heatmap chart construction.
//!
//! [`render_chart`] is a pure function of the dataset and the chart config:
//! it derives the scales, binds every variance record to a cell and assembles
//! the scene graph. Calling it twice with the same inputs yields equal output.

use serde::Serialize;
use tracing::{debug, warn};

use heatmap_common::{
    month_name, ChartConfig, Color, HeatmapError, HeatmapResult, TemperatureDataset,
};

use crate::axis::{Axis, AxisOrientation};
use crate::legend::{legend_buckets, legend_frame, legend_node, LegendBucket};
use crate::scale::{BandScale, LinearScale, ThresholdScale};
use crate::scene::{Node, Scene};
use crate::tooltip::{round_to, TooltipContent};

/// Number of month bands on the y axis.
pub const MONTHS: u32 = 12;

/// Temperature to color classification over the observed range.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    scale: ThresholdScale<Color>,
    min: f64,
    max: f64,
}

impl ColorScale {
    /// Split `[min, max]` evenly across the colors, coolest first.
    pub fn new(min: f64, max: f64, colors: Vec<Color>) -> HeatmapResult<Self> {
        Ok(Self {
            scale: ThresholdScale::uniform(min, max, colors)?,
            min,
            max,
        })
    }

    /// Color for an absolute temperature. NaN maps to the coolest color.
    pub fn color_for(&self, temperature: f64) -> Color {
        self.scale
            .scale(temperature)
            .copied()
            .unwrap_or(self.scale.range()[0])
    }

    /// Temperature interval for `color`, with the open ends closed at the
    /// observed minimum and maximum.
    pub fn extent_of(&self, color: &Color) -> Option<(f64, f64)> {
        let (lower, upper) = self.scale.invert_extent(color)?;
        Some((lower.unwrap_or(self.min), upper.unwrap_or(self.max)))
    }

    pub fn thresholds(&self) -> &[f64] {
        self.scale.domain()
    }

    pub fn colors(&self) -> &[Color] {
        self.scale.range()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// All scales derived from one dataset.
#[derive(Debug, Clone)]
pub struct ChartScales {
    /// Zero-based month index to vertical offset
    pub months: BandScale<u32>,
    /// Year to horizontal offset
    pub years: BandScale<i32>,
    pub color: ColorScale,
    /// Temperature to legend offset
    pub legend: LinearScale,
}

impl ChartScales {
    pub fn build(dataset: &TemperatureDataset, config: &ChartConfig) -> HeatmapResult<Self> {
        let (min_temp, max_temp) = dataset
            .temperature_extent()
            .ok_or(HeatmapError::EmptyDataset)?;

        let months = BandScale::new(0..MONTHS, (0.0, config.plot_height));
        let years = BandScale::new(dataset.distinct_years(), (0.0, config.plot_width));
        let color = ColorScale::new(
            min_temp,
            max_temp,
            config.colors.reversed().colors().to_vec(),
        )?;
        let legend = LinearScale::new((min_temp, max_temp), (0.0, config.legend.width));

        debug!(
            years = years.len(),
            min_temp,
            max_temp,
            "Built chart scales"
        );

        Ok(Self {
            months,
            years,
            color,
            legend,
        })
    }
}

/// One drawn grid cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub year: i32,
    /// Zero-based month index
    pub month_index: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Absolute temperature (base + variance)
    pub temperature: f64,
    pub variance: f64,
    pub fill: Color,
}

impl HeatmapCell {
    /// Scene node for the cell, including its tooltip when enabled.
    fn to_node(&self, config: &ChartConfig) -> Node {
        let mut node = Node::new("rect")
            .attr("class", "cell")
            .attr("data-month", self.month_index)
            .attr("data-year", self.year);

        if config.cells.emit_data_temp {
            node.set_attr("data-temp", round_to(self.temperature, 2));
        }

        node = node
            .attr("x", self.x)
            .attr("y", self.y)
            .attr("width", self.width)
            .attr("height", self.height)
            .attr("fill", self.fill);

        if config.cells.emit_tooltips {
            let content = TooltipContent::for_cell(self);
            node = node.child(Node::new("title").text(content.to_text()));
        }
        node
    }
}

/// Bind every record to a cell. Records whose month has no band are skipped.
pub fn bind_cells(dataset: &TemperatureDataset, scales: &ChartScales) -> Vec<HeatmapCell> {
    let width = scales.years.bandwidth();
    let height = scales.months.bandwidth();

    dataset
        .monthly_variance
        .iter()
        .filter_map(|record| {
            let month_index = record.month_index();
            let y = month_index.and_then(|m| scales.months.scale(&m));
            let x = scales.years.scale(&record.year);

            match (month_index, x, y) {
                (Some(month_index), Some(x), Some(y)) => {
                    let temperature = dataset.temperature(record);
                    Some(HeatmapCell {
                        year: record.year,
                        month_index,
                        x,
                        y,
                        width,
                        height,
                        temperature,
                        variance: record.variance,
                        fill: scales.color.color_for(temperature),
                    })
                }
                _ => {
                    warn!(
                        year = record.year,
                        month = record.month,
                        "Skipping record without a month band"
                    );
                    None
                }
            }
        })
        .collect()
}

/// Fully built chart: data-shaped pieces plus the scene graph.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub title: String,
    pub description: String,
    pub cells: Vec<HeatmapCell>,
    pub legend: Vec<LegendBucket>,
    pub scales: ChartScales,
    pub scene: Scene,
}

/// Serializable summary for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSummary<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub thresholds: &'a [f64],
    pub legend: &'a [LegendBucket],
    pub cells: &'a [HeatmapCell],
}

impl RenderedChart {
    /// Draw the scene as SVG markup.
    pub fn to_svg(&self) -> String {
        self.scene.to_svg()
    }

    pub fn summary(&self) -> ChartSummary<'_> {
        ChartSummary {
            title: &self.title,
            description: &self.description,
            min_temperature: self.scales.color.min(),
            max_temperature: self.scales.color.max(),
            thresholds: self.scales.color.thresholds(),
            legend: &self.legend,
            cells: &self.cells,
        }
    }
}

/// Subtitle of the form `"1753 - 2015: base temperature 8.66°C"`.
pub fn describe(dataset: &TemperatureDataset) -> String {
    match dataset.year_extent() {
        Some((first, last)) => format!(
            "{} - {}: base temperature {}°C",
            first, last, dataset.base_temperature
        ),
        None => format!("base temperature {}°C", dataset.base_temperature),
    }
}

/// Build scales, cells and the full scene for a dataset.
pub fn render_chart(
    dataset: &TemperatureDataset,
    config: &ChartConfig,
) -> HeatmapResult<RenderedChart> {
    config.validate()?;
    let scales = ChartScales::build(dataset, config)?;
    let cells = bind_cells(dataset, &scales);
    let legend = legend_buckets(&scales.color, &scales.legend, config.legend.width);

    let (origin_x, origin_y) = config.plot_origin();
    let mut scene = Scene::new(config.svg_width(), config.svg_height());
    scene.root.set_attr("role", "img");
    scene.root.set_attr("aria-label", &config.title);

    // Month axis
    let y_axis = Axis::band(
        AxisOrientation::Left,
        &scales.months,
        config.axes.month_tick_size,
        |_| true,
        |m| month_name(*m).unwrap_or_default().to_string(),
    );
    scene.push(
        y_axis
            .to_node()
            .attr("id", "y-axis")
            .attr("transform", format!("translate({}, {})", origin_x, origin_y)),
    );
    scene.push(
        Node::new("g")
            .attr("transform", format!("translate(30, {})", origin_y + config.plot_height / 2.0 + 10.0))
            .child(
                Node::new("text")
                    .attr("transform", "rotate(-90)")
                    .attr("font-size", "smaller")
                    .text("months"),
            ),
    );

    // Year axis
    let interval = config.axes.year_tick_interval;
    let x_axis = Axis::band(
        AxisOrientation::Bottom,
        &scales.years,
        config.axes.year_tick_size,
        |y| y % interval == 0,
        |y| y.to_string(),
    );
    scene.push(
        x_axis.to_node().attr("id", "x-axis").attr(
            "transform",
            format!("translate({}, {})", origin_x, origin_y + config.plot_height),
        ),
    );
    scene.push(
        Node::new("g")
            .attr(
                "transform",
                format!(
                    "translate({}, {})",
                    config.svg_width() / 2.0,
                    config.plot_height + 60.0
                ),
            )
            .child(Node::new("text").attr("font-size", "smaller").text("years")),
    );

    // Cells
    scene.push(
        Node::new("g")
            .attr("id", "cells")
            .attr("transform", format!("translate({},{})", origin_x, origin_y))
            .children(cells.iter().map(|c| c.to_node(config))),
    );

    // Legend
    scene.push(legend_frame(&config.legend, 35.0, config.plot_height + 74.0));
    scene.push(
        legend_node(&scales.color, &scales.legend, &legend, &config.legend).attr(
            "transform",
            format!(
                "translate({}, {})",
                config.padding_x / 2.0 - 25.0,
                config.plot_height + 130.0
            ),
        ),
    );

    debug!(
        cells = cells.len(),
        records = dataset.len(),
        "Rendered heatmap scene"
    );

    Ok(RenderedChart {
        title: config.title.clone(),
        description: describe(dataset),
        cells,
        legend,
        scales,
        scene,
    })
}
