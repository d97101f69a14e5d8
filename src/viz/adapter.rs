//! Adapter helpers to turn crate colors and point-based widths into plotters styles.

use plotters::prelude::*;

use super::style::Rgb8;

pub fn rgb_color(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

pub fn rgba_color(c: Rgb8, alpha: f64) -> RGBAColor {
    rgb_color(c).mix(alpha.clamp(0.0, 1.0))
}

/// Points to whole pixels at `dpi`, never thinner than one pixel.
pub fn stroke_px(width_pt: f64, dpi: f64) -> u32 {
    (width_pt * dpi / 72.0).round().max(1.0) as u32
}

/// Build a ShapeStyle for line strokes.
pub fn line_style(c: Rgb8, alpha: f64, width_pt: f64, dpi: f64) -> ShapeStyle {
    ShapeStyle {
        color: rgba_color(c, alpha),
        filled: false,
        stroke_width: stroke_px(width_pt, dpi),
    }
}

/// Build a filled style for bars and the accent tab.
pub fn fill_style(c: Rgb8, alpha: f64) -> ShapeStyle {
    rgba_color(c, alpha).filled()
}
