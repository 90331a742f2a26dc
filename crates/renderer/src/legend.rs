//! Color legend: one swatch per ramp color above a temperature axis.

use serde::Serialize;

use heatmap_common::chart::LegendConfig;
use heatmap_common::Color;

use crate::axis::{Axis, AxisOrientation};
use crate::heatmap::ColorScale;
use crate::scale::LinearScale;
use crate::scene::Node;

/// One color class in the legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendBucket {
    pub color: Color,
    /// Lowest temperature mapped to this color
    pub lower: f64,
    /// Upper boundary of the class
    pub upper: f64,
    /// Swatch offset along the legend axis
    pub x: f64,
    pub width: f64,
}

/// Compute legend swatches in ramp order.
pub fn legend_buckets(color: &ColorScale, position: &LinearScale, legend_width: f64) -> Vec<LegendBucket> {
    let colors = color.colors();
    let width = legend_width / colors.len().max(1) as f64;

    colors
        .iter()
        .filter_map(|c| {
            let (lower, upper) = color.extent_of(c)?;
            Some(LegendBucket {
                color: *c,
                lower,
                upper,
                x: position.scale(lower),
                width,
            })
        })
        .collect()
}

/// Build the legend group (`id="legend"`): axis, swatches and captions.
///
/// The returned node is positioned by the caller.
pub fn legend_node(
    color: &ColorScale,
    position: &LinearScale,
    buckets: &[LegendBucket],
    config: &LegendConfig,
) -> Node {
    let axis = Axis::linear(
        AxisOrientation::Bottom,
        position,
        color.thresholds(),
        config.tick_size,
        |v| format!("{:.1}", v),
    );

    let swatches = buckets.iter().map(|b| {
        Node::new("rect")
            .attr("class", "legend-swatch")
            .attr("height", config.swatch_height)
            .attr("width", b.width)
            .attr("x", b.x)
            .attr("transform", format!("translate(0, {})", -config.swatch_height))
            .attr("fill", b.color)
            .attr("stroke", "black")
            .attr("stroke-width", "1px")
    });

    let legend = axis
        .to_node()
        .attr("id", "legend")
        .child(Node::new("g").children(swatches));

    Node::new("g")
        .child(legend)
        .child(
            Node::new("text")
                .attr("x", 178)
                .attr("y", -37)
                .attr("font-size", "smaller")
                .attr("text-decoration", "underline")
                .text("Legend"),
        )
        .child(
            Node::new("text")
                .attr("x", 144)
                .attr("y", 36)
                .attr("font-size", "smaller")
                .text("temperatures in °C"),
        )
}

/// Framed background drawn behind the legend.
pub fn legend_frame(config: &LegendConfig, x: f64, y: f64) -> Node {
    Node::new("rect")
        .attr("width", config.box_width)
        .attr("height", config.box_height)
        .attr("x", x)
        .attr("y", y)
        .attr("fill", &config.box_fill)
        .attr("stroke", "black")
        .attr("stroke-width", "1px")
}
