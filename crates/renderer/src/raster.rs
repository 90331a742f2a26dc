//! PNG rasterization of drawn scenes via resvg.

use std::sync::Arc;

use heatmap_common::{HeatmapError, HeatmapResult};
use tracing::debug;

/// Rasterize SVG markup to PNG bytes at `scale` times its nominal size.
pub fn svg_to_png(svg: &str, scale: f32) -> HeatmapResult<Vec<u8>> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(HeatmapError::Render(format!(
            "raster scale must be positive, got {}",
            scale
        )));
    }

    let mut opt = usvg::Options::default();
    Arc::make_mut(&mut opt.fontdb).load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| HeatmapError::Render(format!("SVG parse failed: {}", e)))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        HeatmapError::Render(format!("cannot allocate {}x{} pixmap", width, height))
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    debug!(width, height, "Rasterized chart");

    pixmap
        .encode_png()
        .map_err(|e| HeatmapError::Render(format!("PNG encoding failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10" viewBox="0 0 20 10">
  <rect x="0" y="0" width="20" height="10" fill="#313695"/>
</svg>"##;

    #[test]
    fn test_png_signature_and_size() {
        let png = svg_to_png(SQUARE, 2.0).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        // IHDR width/height are big-endian u32 at offsets 16 and 20.
        let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
        let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
        assert_eq!((width, height), (40, 20));
    }

    #[test]
    fn test_rejects_bad_scale() {
        assert!(svg_to_png(SQUARE, 0.0).is_err());
        assert!(svg_to_png(SQUARE, f32::NAN).is_err());
    }

    #[test]
    fn test_rejects_invalid_svg() {
        assert!(matches!(
            svg_to_png("not svg", 1.0),
            Err(HeatmapError::Render(_))
        ));
    }
}
