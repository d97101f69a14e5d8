//! The configured drawing surface handed back by the builder.
//!
//! A [`StyledChart`] owns its look (spines, grid, tick placement, decoration) and
//! the data series the caller adds afterwards. Nothing is rasterized until
//! [`StyledChart::save`] (or `viz::export`) is called; [`StyledChart::resolve`]
//! gives the final geometry without drawing anything.

use std::path::Path;

use super::config::{RenderContext, TickSpec};
use super::export::{self, ExportOptions, ImageSize};
use super::layout::{self, ResolvedChart};
use super::style::{BAR_BLUE, LineStyle, Rgb8, series_color};
use super::types::{AnchorMode, AxisId, ChartKind, HAlign, Side, VAlign};
use crate::error::{ChartError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpineStyle {
    pub visible: bool,
    pub width_pt: f64,
}

/// The four frame borders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spines {
    pub top: SpineStyle,
    pub right: SpineStyle,
    pub bottom: SpineStyle,
    pub left: SpineStyle,
}

impl Spines {
    pub fn all(width_pt: f64) -> Self {
        let s = SpineStyle {
            visible: true,
            width_pt,
        };
        Self {
            top: s,
            right: s,
            bottom: s,
            left: s,
        }
    }

    pub fn get(&self, side: Side) -> &SpineStyle {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut SpineStyle {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }

    pub fn hide(&mut self, sides: &[Side]) {
        for side in sides {
            self.get_mut(*side).visible = false;
        }
    }
}

/// Major gridlines on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyle {
    pub axis: AxisId,
    pub color: Rgb8,
    pub alpha: f64,
    pub width_pt: f64,
}

/// Where and how one axis prints its tick labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickParams {
    pub side: Side,
    pub label_size_pt: f64,
    /// Gap between tick and label; negative values pull the label into the plot.
    pub pad_pt: f64,
    /// Tick mark length; 0 suppresses the marks.
    pub length_pt: f64,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

/// A text anchor in the decoration frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSpot {
    pub x: f64,
    pub y: f64,
    pub size_pt: f64,
}

/// Accent rule, tab and header/footer text positions, in the frame named by `frame`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub frame: AnchorMode,
    pub rule_x: (f64, f64),
    pub rule_y: f64,
    /// Tab corner `(x, y)` and extent `(w, h)`; a negative `h` hangs the tab below the rule.
    pub tab_at: (f64, f64),
    pub tab_size: (f64, f64),
    pub title: TextSpot,
    pub subtitle: TextSpot,
    pub source: TextSpot,
}

/// One axis of the chart: limits, ticks and labels. Obtained through the
/// `*_axis_mut` handles on [`StyledChart`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axis {
    pub(crate) limits: Option<(f64, f64)>,
    pub(crate) ticks: TickSpec,
    pub(crate) tick_labels: Option<Vec<String>>,
    pub(crate) label: Option<String>,
    pub(crate) categories: Option<Vec<String>>,
}

impl Axis {
    pub fn set_limits(&mut self, lo: f64, hi: f64) -> &mut Self {
        self.limits = Some((lo, hi));
        self
    }

    pub fn set_ticks(&mut self, ticks: TickSpec) -> &mut Self {
        self.ticks = ticks;
        self
    }

    /// Replace the printed labels; label `i` goes to the `i`-th visible tick.
    pub fn set_tick_labels<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.tick_labels = Some(labels.into_iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    pub fn limits(&self) -> Option<(f64, f64)> {
        self.limits
    }

    pub fn ticks(&self) -> &TickSpec {
        &self.ticks
    }

    pub fn tick_labels(&self) -> Option<&[String]> {
        self.tick_labels.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }
}

/// Data drawn by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Line {
        points: Vec<(f64, f64)>,
        color: Rgb8,
        alpha: f64,
        width_pt: f64,
    },
    /// Horizontal bars, bar `i` centered on category position `i`.
    BarH {
        values: Vec<f64>,
        height: f64,
        color: Rgb8,
    },
}

/// Bar thickness in category units.
pub const BAR_HEIGHT: f64 = 0.8;

/// A drawing surface pre-configured in the magazine style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledChart {
    pub(crate) kind: ChartKind,
    pub(crate) figure_size: (f64, f64),
    pub(crate) context: RenderContext,
    pub(crate) title: String,
    pub(crate) subtitle: String,
    pub(crate) source: String,
    pub(crate) spines: Spines,
    pub(crate) grid: Option<GridStyle>,
    pub(crate) x: Axis,
    pub(crate) y: Axis,
    pub(crate) x_tick_params: TickParams,
    pub(crate) y_tick_params: TickParams,
    pub(crate) decoration: Decoration,
    pub(crate) series: Vec<Series>,
}

impl StyledChart {
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn anchor(&self) -> AnchorMode {
        self.decoration.frame
    }

    /// Requested (width, height) in inches.
    pub fn figure_size(&self) -> (f64, f64) {
        self.figure_size
    }

    /// Figure size in pixels at the chart's own DPI.
    pub fn pixel_size(&self) -> (u32, u32) {
        let (w, h) = self.figure_size;
        let dpi = self.context.dpi;
        ((w * dpi).round().max(0.0) as u32, (h * dpi).round().max(0.0) as u32)
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn spines(&self) -> &Spines {
        &self.spines
    }

    /// Sides whose border line is not drawn.
    pub fn hidden_spines(&self) -> Vec<Side> {
        Side::ALL
            .into_iter()
            .filter(|s| !self.spines.get(*s).visible)
            .collect()
    }

    pub fn grid(&self) -> Option<&GridStyle> {
        self.grid.as_ref()
    }

    pub fn tick_params(&self, axis: AxisId) -> &TickParams {
        match axis {
            AxisId::X => &self.x_tick_params,
            AxisId::Y => &self.y_tick_params,
        }
    }

    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y
    }

    pub fn x_axis_mut(&mut self) -> &mut Axis {
        &mut self.x
    }

    pub fn y_axis_mut(&mut self) -> &mut Axis {
        &mut self.y
    }

    /// Which axis carries the values (Y for line charts, X for bar charts).
    pub fn value_axis_id(&self) -> AxisId {
        match self.kind {
            ChartKind::Line => AxisId::Y,
            ChartKind::Bar => AxisId::X,
        }
    }

    /// Handle on the value axis, for limits and tick labels.
    pub fn value_axis_mut(&mut self) -> &mut Axis {
        match self.value_axis_id() {
            AxisId::X => &mut self.x,
            AxisId::Y => &mut self.y,
        }
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Add a line through `(xs[i], ys[i])`. A style without a color takes the
    /// next palette color.
    pub fn plot(&mut self, xs: &[f64], ys: &[f64], style: LineStyle) -> Result<&mut Self> {
        if xs.len() != ys.len() {
            return Err(ChartError::SeriesLength {
                left: xs.len(),
                right: ys.len(),
            });
        }
        let line_count = self
            .series
            .iter()
            .filter(|s| matches!(s, Series::Line { .. }))
            .count();
        self.series.push(Series::Line {
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
            color: style.color.unwrap_or_else(|| series_color(line_count)),
            alpha: style.alpha,
            width_pt: style.width_pt,
        });
        Ok(self)
    }

    /// Add horizontal bars, one per category; the categories become the Y tick labels
    /// (bottom to top in the given order). A chart holds one bar series: a second
    /// call is rejected with [`ChartError::InvalidParameter`].
    pub fn barh<S: AsRef<str>>(
        &mut self,
        categories: &[S],
        values: &[f64],
        color: Option<Rgb8>,
    ) -> Result<&mut Self> {
        if categories.len() != values.len() {
            return Err(ChartError::SeriesLength {
                left: categories.len(),
                right: values.len(),
            });
        }
        if self.series.iter().any(|s| matches!(s, Series::BarH { .. })) {
            return Err(ChartError::InvalidParameter(
                "chart already has a bar series".into(),
            ));
        }
        self.y.categories = Some(categories.iter().map(|c| c.as_ref().to_string()).collect());
        self.series.push(Series::BarH {
            values: values.to_vec(),
            height: BAR_HEIGHT,
            color: color.unwrap_or(BAR_BLUE),
        });
        Ok(self)
    }

    /// Final geometry in figure fractions. Pure and deterministic.
    pub fn resolve(&self) -> ResolvedChart {
        layout::resolve(self)
    }

    /// Export to `path` (PNG, or SVG for a `.svg` extension).
    pub fn save<P: AsRef<Path>>(&self, path: P, options: &ExportOptions) -> Result<ImageSize> {
        export::save(self, path, options)
    }
}

#[cfg(test)]
mod tests {
    use crate::viz::{ChartStyleConfig, RenderContext, bar_chart};

    use super::*;

    #[test]
    fn second_bar_series_is_rejected() {
        let mut chart = bar_chart(ChartStyleConfig::bar(), &RenderContext::default());
        chart.barh(&["a", "b"], &[1.0, 2.0], None).unwrap();
        let err = chart.barh(&["c"], &[3.0], None).unwrap_err();
        assert!(matches!(err, ChartError::InvalidParameter(_)));
        assert_eq!(chart.series().len(), 1);
        assert_eq!(
            chart.y_axis().categories(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
    }

    #[test]
    fn mismatched_bars_leave_the_chart_untouched() {
        let mut chart = bar_chart(ChartStyleConfig::bar(), &RenderContext::default());
        let err = chart.barh(&["a", "b"], &[1.0], None).unwrap_err();
        assert!(matches!(err, ChartError::SeriesLength { left: 2, right: 1 }));
        assert!(chart.series().is_empty());
        assert!(chart.y_axis().categories().is_none());
    }
}
