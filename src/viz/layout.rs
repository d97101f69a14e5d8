//! Layout resolution: every visible element of a [`StyledChart`] placed in
//! figure-fraction coordinates (0..1 across the requested canvas, y pointing up).
//!
//! Values outside 0..1 are legal; the exporter grows the canvas to fit them.

use super::chart::{Series, SpineStyle, StyledChart, TextSpot, TickParams};
use super::config::TickSpec;
use super::style::{
    ACCENT_RED, ACCENT_RULE_WIDTH_PT, INK, Rgb8, SOURCE_ALPHA, TITLE_ALPHA,
};
use super::text::{estimate_text_width_pt, text_height_pt, truncate_to_width};
use super::ticks::{auto_range, normalize_limits, tick_values};
use super::types::{AnchorMode, AxisId, ChartKind, HAlign, Side, TextRole, VAlign};
use super::util::format_ticks;

const PT_PER_INCH: f64 = 72.0;

/// Default subplot box for the line variant (left, bottom, right, top).
const LINE_AXES_BOX: (f64, f64, f64, f64) = (0.125, 0.11, 0.90, 0.88);
/// Right edge of the tight bar layout.
const BAR_AXES_RIGHT: f64 = 0.97;
/// Outer margin kept free by the tight layouts.
const TIGHT_MARGIN: f64 = 0.03;
/// Gap between stacked header elements.
const HEADER_GAP: f64 = 0.015;
/// Axes-anchored decorations are fitted between these figure heights.
const AXES_MODE_TOP: f64 = 0.97;
const AXES_MODE_BOTTOM: f64 = 0.03;
/// Smallest plot frame kept when the header eats the canvas.
const MIN_AXES_EXTENT: f64 = 0.05;
/// Category labels never take more than this share of the figure width.
const MAX_CATEGORY_SHARE: f64 = 0.4;
const AXIS_LABEL_PT: f64 = 12.0;

/// Rectangle in figure fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn from_edges(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left: left.min(right),
            bottom: bottom.min(top),
            width: (right - left).abs(),
            height: (top - bottom).abs(),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn top(&self) -> f64 {
        self.bottom + self.height
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x0: self.left,
            y0: self.bottom,
            x1: self.right(),
            y1: self.top(),
        }
    }
}

/// Axis-aligned extent in figure fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bounds {
    pub const UNIT: Bounds = Bounds {
        x0: 0.0,
        y0: 0.0,
        x1: 1.0,
        y1: 1.0,
    };

    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    pub fn contains(&self, other: &Bounds) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// A positioned string. `(x, y)` is the anchor named by the alignments.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub role: TextRole,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size_pt: f64,
    pub bold: bool,
    pub alpha: f64,
    pub color: Rgb8,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentRule {
    pub x0: f64,
    pub x1: f64,
    pub y: f64,
    pub color: Rgb8,
    pub width_pt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSpine {
    pub side: Side,
    pub width_pt: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGrid {
    pub axis: AxisId,
    pub values: Vec<f64>,
    pub color: Rgb8,
    pub alpha: f64,
    pub width_pt: f64,
}

/// The fully placed chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedChart {
    pub kind: ChartKind,
    pub figure_size: (f64, f64),
    pub axes: Rect,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub grid: Option<ResolvedGrid>,
    /// Visible spines only.
    pub spines: Vec<ResolvedSpine>,
    pub rule: AccentRule,
    pub tab: Rect,
    pub tab_color: Rgb8,
    /// Header, footer, tick and axis labels.
    pub texts: Vec<TextItem>,
    pub series: Vec<Series>,
}

impl ResolvedChart {
    /// Data coordinates to figure fractions.
    pub fn data_to_figure(&self, x: f64, y: f64) -> (f64, f64) {
        let (x0, x1) = self.x_range;
        let (y0, y1) = self.y_range;
        (
            self.axes.left + (x - x0) / (x1 - x0) * self.axes.width,
            self.axes.bottom + (y - y0) / (y1 - y0) * self.axes.height,
        )
    }

    pub fn ticks(&self, axis: AxisId) -> &[Tick] {
        match axis {
            AxisId::X => &self.x_ticks,
            AxisId::Y => &self.y_ticks,
        }
    }

    pub fn tick_labels(&self, axis: AxisId) -> Vec<&str> {
        self.ticks(axis).iter().map(|t| t.label.as_str()).collect()
    }

    /// First text with the given role.
    pub fn text(&self, role: TextRole) -> Option<&TextItem> {
        self.texts.iter().find(|t| t.role == role)
    }

    /// Estimated box of a text item in figure fractions.
    pub fn text_bounds(&self, item: &TextItem) -> Bounds {
        let (fig_w, fig_h) = self.figure_size;
        let w = estimate_text_width_pt(&item.text, item.size_pt, item.bold) / PT_PER_INCH / fig_w;
        let h = text_height_pt(item.size_pt) / PT_PER_INCH / fig_h;
        let x0 = match item.h_align {
            HAlign::Left => item.x,
            HAlign::Center => item.x - w / 2.0,
            HAlign::Right => item.x - w,
        };
        let y0 = match item.v_align {
            VAlign::Bottom => item.y,
            VAlign::Center => item.y - h / 2.0,
            VAlign::Top => item.y - h,
        };
        Bounds {
            x0,
            y0,
            x1: x0 + w,
            y1: y0 + h,
        }
    }

    /// Everything that will be painted, including the unit canvas itself.
    pub fn extents(&self) -> Bounds {
        let mut b = Bounds::UNIT.union(self.axes.bounds()).union(self.tab.bounds());
        b = b.union(Bounds {
            x0: self.rule.x0.min(self.rule.x1),
            y0: self.rule.y,
            x1: self.rule.x0.max(self.rule.x1),
            y1: self.rule.y,
        });
        for t in self.texts.iter().filter(|t| !t.text.is_empty()) {
            b = b.union(self.text_bounds(t));
        }
        b
    }
}

/// Resolve `chart` into figure-fraction geometry.
pub fn resolve(chart: &StyledChart) -> ResolvedChart {
    let (fig_w, fig_h) = chart.figure_size;
    let pt_x = |pt: f64| pt / PT_PER_INCH / fig_w;
    let pt_y = |pt: f64| pt / PT_PER_INCH / fig_h;
    let locale = chart.context.locale.as_str();

    // ----------------------------
    // 1) Visible ranges
    // ----------------------------
    let extent = DataExtent::of(&chart.series);
    let x_range = match chart.x.limits {
        Some(l) => normalize_limits(l),
        None => extent
            .x
            .map(|(lo, hi)| auto_range(lo, hi, extent.has_bars))
            .unwrap_or((0.0, 1.0)),
    };
    let y_range = match chart.y.limits {
        Some(l) => normalize_limits(l),
        None => extent
            .y
            .map(|(lo, hi)| auto_range(lo, hi, false))
            .unwrap_or((0.0, 1.0)),
    };

    // ----------------------------
    // 2) Ticks and their labels
    // ----------------------------
    let max_category_pt = fig_w * PT_PER_INCH * MAX_CATEGORY_SHARE;
    let x_ticks = resolve_ticks(&chart.x, x_range, locale, &chart.x_tick_params, max_category_pt);
    let y_ticks = resolve_ticks(&chart.y, y_range, locale, &chart.y_tick_params, max_category_pt);

    // ----------------------------
    // 3) Plot frame
    // ----------------------------
    let deco = &chart.decoration;
    let (left, right) = match chart.kind {
        ChartKind::Line => (LINE_AXES_BOX.0, LINE_AXES_BOX.2),
        ChartKind::Bar => {
            let widest = widest_label_pt(&y_ticks, &chart.y_tick_params);
            let offset = label_offset_pt(&chart.y_tick_params);
            (TIGHT_MARGIN + pt_x(widest + offset.max(0.0)), BAR_AXES_RIGHT)
        }
    };
    let (bottom, top) = match deco.frame {
        AnchorMode::Figure => match chart.kind {
            ChartKind::Line => (LINE_AXES_BOX.1, LINE_AXES_BOX.3),
            ChartKind::Bar => {
                let bottom = deco.source.y + pt_y(text_height_pt(deco.source.size_pt)) + 0.02;
                let top_labels = if chart.x_tick_params.side == Side::Top {
                    pt_y(
                        text_height_pt(chart.x_tick_params.label_size_pt)
                            + label_offset_pt(&chart.x_tick_params).max(0.0),
                    )
                } else {
                    0.0
                };
                (bottom, deco.subtitle.y - HEADER_GAP - top_labels)
            }
        },
        AnchorMode::Axes => {
            // Solve bottom + top_extent*h = TOP and bottom + source.y*h = BOTTOM.
            let top_extent = deco.rule_y.max(deco.tab_at.1).max(deco.tab_at.1 + deco.tab_size.1);
            let span = (top_extent - deco.source.y).max(1.0);
            let h = (AXES_MODE_TOP - AXES_MODE_BOTTOM) / span;
            let bottom = AXES_MODE_BOTTOM - deco.source.y * h;
            (bottom, bottom + h)
        }
    };
    let top = top.max(bottom + MIN_AXES_EXTENT);
    let right = right.max(left + MIN_AXES_EXTENT);
    let axes = Rect::from_edges(left, bottom, right, top);

    // ----------------------------
    // 4) Decoration in figure fractions
    // ----------------------------
    let to_fig = |x: f64, y: f64| match deco.frame {
        AnchorMode::Figure => (x, y),
        AnchorMode::Axes => (axes.left + x * axes.width, axes.bottom + y * axes.height),
    };
    let (rx0, ry) = to_fig(deco.rule_x.0, deco.rule_y);
    let (rx1, _) = to_fig(deco.rule_x.1, deco.rule_y);
    let rule = AccentRule {
        x0: rx0,
        x1: rx1,
        y: ry,
        color: ACCENT_RED,
        width_pt: ACCENT_RULE_WIDTH_PT,
    };
    let (tx0, ty0) = to_fig(deco.tab_at.0, deco.tab_at.1);
    let (tx1, ty1) = to_fig(deco.tab_at.0 + deco.tab_size.0, deco.tab_at.1 + deco.tab_size.1);
    let tab = Rect::from_edges(tx0, ty0, tx1, ty1);

    let mut texts = Vec::new();
    let mut header = |role: TextRole, text: &str, spot: &TextSpot, bold: bool, alpha: f64| {
        let (x, y) = to_fig(spot.x, spot.y);
        texts.push(TextItem {
            role,
            text: text.to_string(),
            x,
            y,
            size_pt: spot.size_pt,
            bold,
            alpha,
            color: INK,
            h_align: HAlign::Left,
            v_align: VAlign::Bottom,
        });
    };
    header(TextRole::Title, &chart.title, &deco.title, true, TITLE_ALPHA);
    header(TextRole::Subtitle, &chart.subtitle, &deco.subtitle, false, TITLE_ALPHA);
    header(TextRole::Source, &chart.source, &deco.source, false, SOURCE_ALPHA);

    // ----------------------------
    // 5) Tick and axis labels
    // ----------------------------
    let map_x = |v: f64| axes.left + (v - x_range.0) / (x_range.1 - x_range.0) * axes.width;
    let map_y = |v: f64| axes.bottom + (v - y_range.0) / (y_range.1 - y_range.0) * axes.height;

    for (axis, ticks, params) in [
        (AxisId::X, &x_ticks, &chart.x_tick_params),
        (AxisId::Y, &y_ticks, &chart.y_tick_params),
    ] {
        let offset = label_offset_pt(params);
        for tick in ticks.iter().filter(|t| !t.label.is_empty()) {
            let (x, y) = match (axis, params.side) {
                (AxisId::X, Side::Top) => (map_x(tick.value), axes.top() + pt_y(offset)),
                (AxisId::X, _) => (map_x(tick.value), axes.bottom - pt_y(offset)),
                (AxisId::Y, Side::Right) => (axes.right() + pt_x(offset), map_y(tick.value)),
                (AxisId::Y, _) => (axes.left - pt_x(offset), map_y(tick.value)),
            };
            texts.push(TextItem {
                role: TextRole::TickLabel(axis),
                text: tick.label.clone(),
                x,
                y,
                size_pt: params.label_size_pt,
                bold: false,
                alpha: 1.0,
                color: INK,
                h_align: params.h_align,
                v_align: params.v_align,
            });
        }
    }

    if let Some(label) = chart.x.label.as_deref().filter(|l| !l.is_empty()) {
        let below_ticks = if chart.x_tick_params.side == Side::Bottom && !x_ticks.is_empty() {
            label_offset_pt(&chart.x_tick_params).max(0.0)
                + text_height_pt(chart.x_tick_params.label_size_pt)
        } else {
            0.0
        };
        texts.push(TextItem {
            role: TextRole::AxisLabel(AxisId::X),
            text: label.to_string(),
            x: axes.left + axes.width / 2.0,
            y: axes.bottom - pt_y(below_ticks + 3.0),
            size_pt: AXIS_LABEL_PT,
            bold: false,
            alpha: 1.0,
            color: INK,
            h_align: HAlign::Center,
            v_align: VAlign::Top,
        });
    }
    if let Some(label) = chart.y.label.as_deref().filter(|l| !l.is_empty()) {
        // Unit labels sit above the top-left corner of the frame.
        let above = if chart.x_tick_params.side == Side::Top {
            text_height_pt(chart.x_tick_params.label_size_pt) + label_offset_pt(&chart.x_tick_params)
        } else {
            0.0
        };
        texts.push(TextItem {
            role: TextRole::AxisLabel(AxisId::Y),
            text: label.to_string(),
            x: axes.left,
            y: axes.top() + pt_y(above + 3.0),
            size_pt: AXIS_LABEL_PT,
            bold: false,
            alpha: 1.0,
            color: INK,
            h_align: HAlign::Left,
            v_align: VAlign::Bottom,
        });
    }

    // ----------------------------
    // 6) Grid and spines
    // ----------------------------
    let grid = chart.grid.map(|g| ResolvedGrid {
        axis: g.axis,
        values: match g.axis {
            AxisId::X => x_ticks.iter().map(|t| t.value).collect(),
            AxisId::Y => y_ticks.iter().map(|t| t.value).collect(),
        },
        color: g.color,
        alpha: g.alpha,
        width_pt: g.width_pt,
    });

    let spines = Side::ALL
        .into_iter()
        .filter_map(|side| {
            let SpineStyle { visible, width_pt } = *chart.spines.get(side);
            visible.then_some(ResolvedSpine { side, width_pt })
        })
        .collect();

    ResolvedChart {
        kind: chart.kind,
        figure_size: chart.figure_size,
        axes,
        x_range,
        y_range,
        x_ticks,
        y_ticks,
        grid,
        spines,
        rule,
        tab,
        tab_color: ACCENT_RED,
        texts,
        series: chart.series.clone(),
    }
}

/// Data bounds over all series (bars include their thickness and the zero baseline).
struct DataExtent {
    x: Option<(f64, f64)>,
    y: Option<(f64, f64)>,
    has_bars: bool,
}

impl DataExtent {
    fn of(series: &[Series]) -> Self {
        let mut x: Option<(f64, f64)> = None;
        let mut y: Option<(f64, f64)> = None;
        let mut has_bars = false;
        let grow = |acc: &mut Option<(f64, f64)>, v: f64| {
            if v.is_finite() {
                *acc = Some(match *acc {
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                    None => (v, v),
                });
            }
        };
        for s in series {
            match s {
                Series::Line { points, .. } => {
                    for (px, py) in points {
                        grow(&mut x, *px);
                        grow(&mut y, *py);
                    }
                }
                Series::BarH { values, height, .. } => {
                    has_bars = true;
                    for (i, v) in values.iter().enumerate() {
                        grow(&mut x, 0.0);
                        grow(&mut x, *v);
                        grow(&mut y, i as f64 - height / 2.0);
                        grow(&mut y, i as f64 + height / 2.0);
                    }
                }
            }
        }
        Self { x, y, has_bars }
    }
}

/// Distance from the frame edge to the label anchor.
fn label_offset_pt(params: &TickParams) -> f64 {
    params.length_pt + params.pad_pt
}

fn widest_label_pt(ticks: &[Tick], params: &TickParams) -> f64 {
    ticks
        .iter()
        .map(|t| estimate_text_width_pt(&t.label, params.label_size_pt, false))
        .fold(0.0, f64::max)
}

fn resolve_ticks(
    axis: &super::chart::Axis,
    range: (f64, f64),
    locale: &str,
    params: &TickParams,
    max_category_pt: f64,
) -> Vec<Tick> {
    let values: Vec<f64> = match (&axis.categories, &axis.ticks) {
        (Some(cats), TickSpec::Auto) => {
            let positions: Vec<f64> = (0..cats.len()).map(|i| i as f64).collect();
            tick_values(&TickSpec::Fixed(positions), range)
        }
        (_, spec) => tick_values(spec, range),
    };

    let labels: Vec<String> = if let Some(explicit) = &axis.tick_labels {
        (0..values.len())
            .map(|i| explicit.get(i).cloned().unwrap_or_default())
            .collect()
    } else if let Some(cats) = &axis.categories {
        values
            .iter()
            .map(|v| {
                let idx = v.round();
                if (v - idx).abs() < 1e-9 && idx >= 0.0 {
                    cats.get(idx as usize)
                        .map(|c| truncate_to_width(c, params.label_size_pt, max_category_pt))
                        .unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .collect()
    } else {
        format_ticks(&values, locale)
    };

    values
        .into_iter()
        .zip(labels)
        .map(|(value, label)| Tick { value, label })
        .collect()
}
