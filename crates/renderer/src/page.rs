//! Standalone HTML page around a rendered chart.
//!
//! The page carries the title, the description, the drawn SVG and a
//! floating tooltip. Tooltip views are precomputed per cell and shipped as
//! JSON; the inline script only toggles visibility and copies fields.

use std::fmt::Write;

use heatmap_common::HeatmapResult;

use crate::heatmap::RenderedChart;
use crate::scene::escape;
use crate::tooltip::TooltipView;

const PAGE_STYLE: &str = r#"
body { font-family: sans-serif; background: #f4f7f7; }
.chart-outer { position: relative; width: max-content; margin: 2em auto; padding: 1em; background: #fff; }
.title-container { text-align: center; }
.title { margin: 0.2em 0; }
.tooltip { position: absolute; opacity: 0; z-index: -1; pointer-events: none;
  background: #222; color: #fff; padding: 0.3em 0.6em; border-radius: 4px; font-size: 0.8em; }
.tooltip p { margin: 0.2em 0; }
.tt-label { font-weight: bold; margin-right: 0.4em; }
.cell:hover { stroke: black; stroke-width: 1px; }
"#;

const TOOLTIP_SCRIPT: &str = r#"
const tooltip = document.getElementById("tooltip");
const chart = document.querySelector(".chart");
document.querySelectorAll(".cell").forEach((cell, i) => {
  cell.addEventListener("mouseenter", () => {
    const view = TOOLTIPS[i];
    const c = view.content;
    tooltip.dataset.year = view.data_year;
    tooltip.querySelector(".tt-date").textContent = `${c.year} - ${c.month_name}`;
    tooltip.querySelector(".tt-temp").textContent = `${c.temperature.toFixed(2)}°C`;
    tooltip.querySelector(".tt-var").textContent = `${c.variance}°C`;
    tooltip.style.left = `${view.left + chart.offsetLeft}px`;
    tooltip.style.top = `${view.top + chart.offsetTop}px`;
    tooltip.style.opacity = "0.9";
    tooltip.style.zIndex = "1";
  });
  cell.addEventListener("mouseout", () => {
    tooltip.style.opacity = "0";
    tooltip.style.zIndex = "-1";
  });
});
"#;

/// Render the chart as a self-contained HTML document.
pub fn render_html(chart: &RenderedChart) -> HeatmapResult<String> {
    let tooltips: Vec<TooltipView> = chart.cells.iter().map(TooltipView::on_enter).collect();
    // `</` inside a script block would end it early.
    let tooltips_json = serde_json::to_string(&tooltips)?.replace("</", "<\\/");

    let mut html = String::new();
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"en\">");
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\">");
    let _ = writeln!(html, "<title>{}</title>", escape(&chart.title));
    let _ = writeln!(html, "<style>{}</style>", PAGE_STYLE);
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "<div class=\"chart-outer\">");
    let _ = writeln!(
        html,
        "<div id=\"tooltip\" class=\"tooltip\"><p><span class=\"tt-label\">DATE:</span><span class=\"tt-date\"></span></p>\
         <p><span class=\"tt-label\">TEMPERATURE:</span><span class=\"tt-temp\"></span></p>\
         <p><span class=\"tt-label\">VARIANCE:</span><span class=\"tt-var\"></span></p></div>"
    );
    let _ = writeln!(html, "<div id=\"title\" class=\"title-container\">");
    let _ = writeln!(html, "<h1 class=\"title\">{}</h1>", escape(&chart.title));
    let _ = writeln!(
        html,
        "<p id=\"description\" style=\"font-weight: bold\">{}</p>",
        escape(&chart.description)
    );
    let _ = writeln!(html, "</div>");
    let _ = writeln!(html, "<div class=\"chart\">");
    html.push_str(&chart.to_svg());
    let _ = writeln!(html, "</div>");
    let _ = writeln!(html, "</div>");
    let _ = writeln!(
        html,
        "<script>\nconst TOOLTIPS = {};\n{}</script>",
        tooltips_json, TOOLTIP_SCRIPT
    );
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");

    Ok(html)
}
