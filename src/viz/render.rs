//! Drawing a [`ResolvedChart`] onto any plotters backend.
//!
//! Order: background, grid, data series (clipped to the frame), spines, text,
//! accent rule and tab.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use super::adapter::{fill_style, line_style, rgb_color, rgba_color};
use super::chart::Series;
use super::layout::{ResolvedChart, TextItem};
use super::style::{INK, Rgb8};
use super::types::{AxisId, HAlign, Side, VAlign};
use crate::error::{Result, backend};

/// Maps figure fractions onto the pixel canvas.
///
/// The canvas covers the chart's extents plus a pad, so it is usually larger
/// than the requested figure and may start at negative figure fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    /// Figure fraction at the canvas' left edge.
    pub x0: f64,
    /// Figure fraction at the canvas' top edge.
    pub y1: f64,
    /// Pixels per unit figure fraction (= figure size in pixels).
    pub fig_px: (f64, f64),
    /// Canvas size in pixels.
    pub size: (u32, u32),
    pub dpi: f64,
}

impl CanvasFrame {
    pub fn new(chart: &ResolvedChart, dpi: f64, pad_inches: f64) -> Self {
        let ext = chart.extents();
        let (fw, fh) = chart.figure_size;
        let pad_x = pad_inches.max(0.0) / fw;
        let pad_y = pad_inches.max(0.0) / fh;
        let (x0, x1) = (ext.x0 - pad_x, ext.x1 + pad_x);
        let (y0, y1) = (ext.y0 - pad_y, ext.y1 + pad_y);
        let fig_px = (fw * dpi, fh * dpi);
        let size = (
            ((x1 - x0) * fig_px.0).ceil().max(0.0) as u32,
            ((y1 - y0) * fig_px.1).ceil().max(0.0) as u32,
        );
        Self {
            x0,
            y1,
            fig_px,
            size,
            dpi,
        }
    }

    pub fn to_px(&self, fx: f64, fy: f64) -> (i32, i32) {
        (
            ((fx - self.x0) * self.fig_px.0).round() as i32,
            ((self.y1 - fy) * self.fig_px.1).round() as i32,
        )
    }

    pub fn pt_to_px(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }
}

/// Paint `chart` on `root`. `draw_text` is false when no font is available for
/// the backend; every non-text element is still drawn.
pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ResolvedChart,
    frame: &CanvasFrame,
    background: Rgb8,
    draw_text: bool,
) -> Result<()> {
    root.fill(&rgb_color(background)).map_err(backend)?;

    let dpi = frame.dpi;
    let axes = chart.axes;
    let (left, top) = frame.to_px(axes.left, axes.top());
    let (right, bottom) = frame.to_px(axes.right(), axes.bottom);
    let (x0, x1) = chart.x_range;
    let (y0, y1) = chart.y_range;

    // ----------------------------
    // 1) Grid and data inside the frame
    // ----------------------------
    let plot_area = root.clone().shrink(
        (left, top),
        ((right - left).max(1) as u32, (bottom - top).max(1) as u32),
    );
    let mut plot = ChartBuilder::on(&plot_area)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(backend)?;

    if let Some(grid) = &chart.grid {
        let lines = grid.values.iter().map(|v| {
            let pts = match grid.axis {
                AxisId::X => vec![(*v, y0), (*v, y1)],
                AxisId::Y => vec![(x0, *v), (x1, *v)],
            };
            PathElement::new(pts, line_style(grid.color, grid.alpha, grid.width_pt, dpi))
        });
        plot.draw_series(lines).map_err(backend)?;
    }

    for series in &chart.series {
        match series {
            Series::Line {
                points,
                color,
                alpha,
                width_pt,
            } => {
                for run in clip_polyline(points, chart.x_range, chart.y_range) {
                    plot.draw_series(LineSeries::new(
                        run,
                        line_style(*color, *alpha, *width_pt, dpi),
                    ))
                    .map_err(backend)?;
                }
            }
            Series::BarH {
                values,
                height,
                color,
            } => {
                let bars = values.iter().enumerate().filter_map(|(i, v)| {
                    let xa = v.min(0.0).max(x0);
                    let xb = v.max(0.0).min(x1);
                    let ya = (i as f64 - height / 2.0).max(y0);
                    let yb = (i as f64 + height / 2.0).min(y1);
                    (v.is_finite() && xa < xb && ya < yb)
                        .then(|| Rectangle::new([(xa, ya), (xb, yb)], fill_style(*color, 1.0)))
                });
                plot.draw_series(bars).map_err(backend)?;
            }
        }
    }

    // ----------------------------
    // 2) Frame borders
    // ----------------------------
    for spine in &chart.spines {
        let pts = match spine.side {
            Side::Top => vec![(left, top), (right, top)],
            Side::Bottom => vec![(left, bottom), (right, bottom)],
            Side::Left => vec![(left, top), (left, bottom)],
            Side::Right => vec![(right, top), (right, bottom)],
        };
        root.draw(&PathElement::new(pts, line_style(INK, 1.0, spine.width_pt, dpi)))
            .map_err(backend)?;
    }

    // ----------------------------
    // 3) Text
    // ----------------------------
    if draw_text {
        for item in chart.texts.iter().filter(|t| !t.text.is_empty()) {
            draw_text_item(root, item, frame)?;
        }
    }

    // ----------------------------
    // 4) Accent rule and tab (canvas coordinates, never clipped)
    // ----------------------------
    let rule = chart.rule;
    root.draw(&PathElement::new(
        vec![frame.to_px(rule.x0, rule.y), frame.to_px(rule.x1, rule.y)],
        line_style(rule.color, 1.0, rule.width_pt, dpi),
    ))
    .map_err(backend)?;
    let tab = chart.tab;
    root.draw(&Rectangle::new(
        [
            frame.to_px(tab.left, tab.top()),
            frame.to_px(tab.right(), tab.bottom),
        ],
        fill_style(chart.tab_color, 1.0),
    ))
    .map_err(backend)?;

    Ok(())
}

fn draw_text_item<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    item: &TextItem,
    frame: &CanvasFrame,
) -> Result<()> {
    let px = frame.pt_to_px(item.size_pt).round().max(1.0);
    let weight = if item.bold {
        FontStyle::Bold
    } else {
        FontStyle::Normal
    };
    let h = match item.h_align {
        HAlign::Left => HPos::Left,
        HAlign::Center => HPos::Center,
        HAlign::Right => HPos::Right,
    };
    let v = match item.v_align {
        VAlign::Top => VPos::Top,
        VAlign::Center => VPos::Center,
        VAlign::Bottom => VPos::Bottom,
    };
    let style = FontDesc::new(FontFamily::SansSerif, px, weight)
        .color(&rgba_color(item.color, item.alpha))
        .pos(Pos::new(h, v));
    root.draw(&Text::new(
        item.text.clone(),
        frame.to_px(item.x, item.y),
        style,
    ))
    .map_err(backend)
}

/// Clip a polyline to the visible window, splitting it where it leaves and
/// re-enters. Non-finite points break the line.
pub fn clip_polyline(
    points: &[(f64, f64)],
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    let mut flush = |current: &mut Vec<(f64, f64)>| {
        if current.len() >= 2 {
            runs.push(std::mem::take(current));
        } else {
            current.clear();
        }
    };

    for w in points.windows(2) {
        let (a, b) = (w[0], w[1]);
        let finite = a.0.is_finite() && a.1.is_finite() && b.0.is_finite() && b.1.is_finite();
        let clipped = if finite {
            clip_segment(a, b, x_range, y_range)
        } else {
            None
        };
        match clipped {
            Some((p, q)) => {
                if current.last() != Some(&p) {
                    flush(&mut current);
                    current.push(p);
                }
                current.push(q);
                if q != b {
                    flush(&mut current);
                }
            }
            None => flush(&mut current),
        }
    }
    flush(&mut current);
    runs
}

/// Liang–Barsky segment clipping.
fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    (x0, x1): (f64, f64),
    (y0, y1): (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [(-dx, a.0 - x0), (dx, x1 - a.0), (-dy, a.1 - y0), (dy, y1 - a.1)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }
    let start = if t0 == 0.0 {
        a
    } else {
        (a.0 + t0 * dx, a.1 + t0 * dy)
    };
    let end = if t1 == 1.0 {
        b
    } else {
        (a.0 + t1 * dx, a.1 + t1 * dy)
    };
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: (f64, f64) = (0.0, 1.0);

    #[test]
    fn inside_line_is_untouched() {
        let pts = vec![(0.1, 0.1), (0.5, 0.9), (0.9, 0.2)];
        assert_eq!(clip_polyline(&pts, UNIT, UNIT), vec![pts]);
    }

    #[test]
    fn excursion_splits_the_line() {
        let pts = vec![(0.0, 0.5), (0.5, 2.0), (1.0, 0.5)];
        let runs = clip_polyline(&pts, UNIT, UNIT);
        assert_eq!(runs.len(), 2);
        for run in &runs {
            assert!(run.iter().all(|(x, y)| (0.0..=1.0).contains(x) && (0.0..=1.0 + 1e-12).contains(y)));
        }
        assert!((runs[0][1].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fully_outside_and_nan_draw_nothing() {
        assert!(clip_polyline(&[(2.0, 2.0), (3.0, 3.0)], UNIT, UNIT).is_empty());
        assert!(clip_polyline(&[(0.2, 0.2), (f64::NAN, 0.3)], UNIT, UNIT).is_empty());
        assert!(clip_polyline(&[(0.2, 0.2)], UNIT, UNIT).is_empty());
    }
}
