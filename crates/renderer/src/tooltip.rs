//! Tooltip content and hover state for heatmap cells.
//!
//! Hovering is modelled as a state transition on [`TooltipView`]: entering a
//! cell shows the tooltip next to it, leaving hides it again.

use serde::Serialize;

use heatmap_common::month_name;

use crate::heatmap::HeatmapCell;

/// Horizontal nudge applied to the tooltip relative to the cell.
const TOOLTIP_OFFSET_X: f64 = -0.5;
/// Vertical distance below the cell top.
const TOOLTIP_OFFSET_Y: f64 = 15.0;

/// What the tooltip shows for one cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    pub year: i32,
    pub month_name: &'static str,
    /// Absolute temperature rounded to 2 decimals
    pub temperature: f64,
    pub variance: f64,
}

impl TooltipContent {
    pub fn for_cell(cell: &HeatmapCell) -> Self {
        Self {
            year: cell.year,
            month_name: month_name(cell.month_index).unwrap_or("Unknown"),
            temperature: round_to(cell.temperature, 2),
            variance: cell.variance,
        }
    }

    /// `"{year} - {MonthName}"`
    pub fn date_label(&self) -> String {
        format!("{} - {}", self.year, self.month_name)
    }

    /// Temperature with exactly two decimals.
    pub fn temperature_label(&self) -> String {
        format!("{:.2}", self.temperature)
    }

    pub fn variance_label(&self) -> String {
        self.variance.to_string()
    }

    /// Plain-text form used for the SVG `<title>` of a cell.
    pub fn to_text(&self) -> String {
        format!(
            "DATE: {}\nTEMPERATURE: {}°C\nVARIANCE: {}°C",
            self.date_label(),
            self.temperature_label(),
            self.variance_label()
        )
    }
}

/// Pointer events a cell can receive.
#[derive(Debug, Clone, Copy)]
pub enum HoverEvent<'a> {
    Enter(&'a HeatmapCell),
    Leave,
}

/// Floating tooltip state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TooltipView {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub data_year: Option<i32>,
    pub content: Option<TooltipContent>,
}

impl TooltipView {
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Apply a hover event. Leaving keeps the last content but hides it.
    pub fn apply(&mut self, event: HoverEvent<'_>) {
        match event {
            HoverEvent::Enter(cell) => {
                self.visible = true;
                self.left = cell.x + TOOLTIP_OFFSET_X;
                self.top = cell.y + TOOLTIP_OFFSET_Y;
                self.data_year = Some(cell.year);
                self.content = Some(TooltipContent::for_cell(cell));
            }
            HoverEvent::Leave => {
                self.visible = false;
            }
        }
    }

    /// The view a cell would show when hovered from a hidden state.
    pub fn on_enter(cell: &HeatmapCell) -> Self {
        let mut view = Self::hidden();
        view.apply(HoverEvent::Enter(cell));
        view
    }
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
