//! Axis generation for band and linear scales.

use std::hash::Hash;

use crate::scale::{BandScale, LinearScale};
use crate::scene::Node;

/// Length of the end caps on the domain line.
const OUTER_TICK_SIZE: f64 = 6.0;
/// Gap between a tick line and its label.
const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    /// Ticks hang below a horizontal line
    Bottom,
    /// Ticks point left from a vertical line
    Left,
}

/// A labelled tick at a pixel offset along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// An axis ready to be turned into scene nodes.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub tick_size: f64,
}

impl Axis {
    /// Ticks centred in the bands of `values` that pass `filter`.
    pub fn band<T, F, L>(
        orientation: AxisOrientation,
        scale: &BandScale<T>,
        tick_size: f64,
        filter: F,
        label: L,
    ) -> Self
    where
        T: Clone + Eq + Hash,
        F: Fn(&T) -> bool,
        L: Fn(&T) -> String,
    {
        let half = scale.bandwidth() / 2.0;
        let ticks = scale
            .domain()
            .iter()
            .filter(|v| filter(v))
            .filter_map(|v| {
                scale.scale(v).map(|start| Tick {
                    position: start + half,
                    label: label(v),
                })
            })
            .collect();

        Self {
            orientation,
            range: scale.range(),
            ticks,
            tick_size,
        }
    }

    /// Ticks at explicit domain values of a linear scale.
    pub fn linear<L>(
        orientation: AxisOrientation,
        scale: &LinearScale,
        values: &[f64],
        tick_size: f64,
        label: L,
    ) -> Self
    where
        L: Fn(f64) -> String,
    {
        let ticks = values
            .iter()
            .map(|&v| Tick {
                position: scale.scale(v),
                label: label(v),
            })
            .collect();

        Self {
            orientation,
            range: scale.range(),
            ticks,
            tick_size,
        }
    }

    /// Build the `<g>` holding the domain line and one group per tick.
    pub fn to_node(&self) -> Node {
        let (r0, r1) = self.range;
        let k = self.tick_size;
        let label_offset = k.max(0.0) + TICK_PADDING;

        let (anchor, domain_path) = match self.orientation {
            AxisOrientation::Bottom => (
                "middle",
                format!(
                    "M{},{}V0H{}V{}",
                    r0, OUTER_TICK_SIZE, r1, OUTER_TICK_SIZE
                ),
            ),
            AxisOrientation::Left => (
                "end",
                format!(
                    "M{},{}H0V{}H{}",
                    -OUTER_TICK_SIZE, r0, r1, -OUTER_TICK_SIZE
                ),
            ),
        };

        let ticks = self.ticks.iter().map(|tick| {
            let (transform, line, text) = match self.orientation {
                AxisOrientation::Bottom => (
                    format!("translate({},0)", tick.position),
                    Node::new("line").attr("stroke", "currentColor").attr("y2", k),
                    Node::new("text")
                        .attr("fill", "currentColor")
                        .attr("y", label_offset)
                        .attr("dy", "0.71em"),
                ),
                AxisOrientation::Left => (
                    format!("translate(0,{})", tick.position),
                    Node::new("line").attr("stroke", "currentColor").attr("x2", -k),
                    Node::new("text")
                        .attr("fill", "currentColor")
                        .attr("x", -label_offset)
                        .attr("dy", "0.32em"),
                ),
            };

            Node::new("g")
                .attr("class", "tick")
                .attr("transform", transform)
                .child(line)
                .child(text.text(tick.label.clone()))
        });

        Node::new("g")
            .attr("fill", "none")
            .attr("font-size", 10)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor)
            .child(
                Node::new("path")
                    .attr("class", "domain")
                    .attr("stroke", "currentColor")
                    .attr("d", domain_path),
            )
            .children(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_axis_centres_ticks() {
        let scale = BandScale::new(0u32..4, (0.0, 100.0));
        let axis = Axis::band(AxisOrientation::Left, &scale, 7.0, |_| true, |m| m.to_string());
        let positions: Vec<f64> = axis.ticks.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![12.5, 37.5, 62.5, 87.5]);
    }

    #[test]
    fn test_band_axis_filter() {
        let scale = BandScale::new(1990..2010, (0.0, 200.0));
        let axis = Axis::band(
            AxisOrientation::Bottom,
            &scale,
            9.0,
            |y| y % 5 == 0,
            |y| y.to_string(),
        );
        let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["1990", "1995", "2000", "2005"]);
    }

    #[test]
    fn test_linear_axis_positions() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 400.0));
        let axis = Axis::linear(AxisOrientation::Bottom, &scale, &[2.5, 5.0], 9.0, |v| {
            format!("{:.1}", v)
        });
        assert_eq!(axis.ticks[0].position, 100.0);
        assert_eq!(axis.ticks[1].label, "5.0");
    }

    #[test]
    fn test_axis_node_structure() {
        let scale = BandScale::new(0u32..2, (0.0, 50.0));
        let node = Axis::band(AxisOrientation::Bottom, &scale, 9.0, |_| true, |m| m.to_string())
            .to_node();
        assert_eq!(node.children[0].get_attr("d"), Some("M0,6V0H50V6"));
        assert_eq!(node.find_by_class("tick").len(), 2);
        let first = node.find_by_class("tick")[0];
        assert_eq!(first.get_attr("transform"), Some("translate(12.5,0)"));
        assert_eq!(first.children[1].text.as_deref(), Some("0"));
    }
}
