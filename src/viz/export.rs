//! Export to **PNG** (rendered in memory, trimmed to content) or **SVG**.

use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::debug;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use super::chart::StyledChart;
use super::fonts::ensure_fonts_registered;
use super::render::{self, CanvasFrame};
use super::style::{Rgb8, WHITE};
use crate::error::{ChartError, Result, backend};

/// How a chart is written out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Resolution; `None` uses the chart's own render context.
    pub dpi: Option<f64>,
    pub background: Rgb8,
    /// Crop the PNG to its painted content (plus `pad_inches`).
    pub trim: bool,
    pub pad_inches: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dpi: None,
            background: WHITE,
            trim: true,
            pad_inches: 0.1,
        }
    }
}

impl ExportOptions {
    pub fn with_dpi(dpi: f64) -> Self {
        Self {
            dpi: Some(dpi),
            ..Self::default()
        }
    }
}

/// Pixel size of a written image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Write `chart` to `path`; `.svg` selects SVG, anything else PNG.
pub fn save<P: AsRef<Path>>(
    chart: &StyledChart,
    path: P,
    options: &ExportOptions,
) -> Result<ImageSize> {
    let path = path.as_ref();
    let size = if path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
    {
        save_svg(chart, path, options)?
    } else {
        let img = render_png(chart, options)?;
        img.save_with_format(path, ImageFormat::Png)?;
        ImageSize {
            width: img.width(),
            height: img.height(),
        }
    };
    debug!(
        "wrote {} ({}x{} px)",
        path.display(),
        size.width,
        size.height
    );
    Ok(size)
}

/// Render into an RGB image (trimmed when `options.trim` is set).
pub fn render_png(chart: &StyledChart, options: &ExportOptions) -> Result<RgbImage> {
    let (resolved, frame) = prepare(chart, options)?;
    let (width, height) = frame.size;

    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer[..], (width, height)).into_drawing_area();
        render::draw(
            &root,
            &resolved,
            &frame,
            options.background,
            ensure_fonts_registered(),
        )?;
        root.present().map_err(backend)?;
    } // dropping bitmap backend

    let img = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| ChartError::Backend("pixel buffer size mismatch".into()))?;
    if !options.trim {
        return Ok(img);
    }
    let pad_px = (options.pad_inches.max(0.0) * frame.dpi).round() as u32;
    Ok(trim(&img, options.background, pad_px))
}

fn save_svg(chart: &StyledChart, path: &Path, options: &ExportOptions) -> Result<ImageSize> {
    let (resolved, frame) = prepare(chart, options)?;
    let (width, height) = frame.size;
    let path_string = path.to_string_lossy().into_owned();
    {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        // SVG text is laid out by the viewer; no font needed here.
        render::draw(&root, &resolved, &frame, options.background, true)?;
        root.present().map_err(backend)?;
    }
    Ok(ImageSize { width, height })
}

fn prepare(
    chart: &StyledChart,
    options: &ExportOptions,
) -> Result<(super::layout::ResolvedChart, CanvasFrame)> {
    let dpi = options.dpi.unwrap_or(chart.context().dpi);
    if !(dpi.is_finite() && dpi > 0.0) {
        return Err(ChartError::InvalidParameter(format!("dpi must be positive, got {dpi}")));
    }
    let (fw, fh) = chart.figure_size();
    if !(fw.is_finite() && fh.is_finite() && fw > 0.0 && fh > 0.0) {
        let (width, height) = chart.pixel_size();
        return Err(ChartError::EmptyCanvas { width, height });
    }
    let resolved = chart.resolve();
    let frame = CanvasFrame::new(&resolved, dpi, options.pad_inches);
    let (width, height) = frame.size;
    if width == 0 || height == 0 {
        return Err(ChartError::EmptyCanvas { width, height });
    }
    debug!(
        "canvas {}x{} px for a {}x{} in figure at {} dpi",
        width, height, fw, fh, dpi
    );
    Ok((resolved, frame))
}

/// Bounding box `(x, y, w, h)` of pixels that differ from `background`.
pub fn content_box(img: &RgbImage, background: Rgb8) -> Option<(u32, u32, u32, u32)> {
    let bg = [background.r, background.g, background.b];
    let (mut x0, mut y0, mut x1, mut y1) = (u32::MAX, u32::MAX, 0u32, 0u32);
    for (x, y, px) in img.enumerate_pixels() {
        if px.0 != bg {
            x0 = x0.min(x);
            y0 = y0.min(y);
            x1 = x1.max(x);
            y1 = y1.max(y);
        }
    }
    (x0 <= x1 && y0 <= y1).then(|| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
}

/// Crop to the painted content plus `pad_px` on every side (clamped to the image).
pub fn trim(img: &RgbImage, background: Rgb8, pad_px: u32) -> RgbImage {
    let Some((x, y, w, h)) = content_box(img, background) else {
        return img.clone();
    };
    let left = x.saturating_sub(pad_px);
    let top = y.saturating_sub(pad_px);
    let right = (x + w + pad_px).min(img.width());
    let bottom = (y + h + pad_px).min(img.height());
    image::imageops::crop_imm(img, left, top, right - left, bottom - top).to_image()
}
