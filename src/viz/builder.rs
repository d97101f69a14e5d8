//! The styled chart builder: turns a [`ChartStyleConfig`] into a [`StyledChart`].
//!
//! Both variants share one code path; they differ only in the table of constants
//! picked by [`decoration_for`] and the spine/grid/tick choices below.

use log::debug;

use super::chart::{Axis, Decoration, GridStyle, Spines, StyledChart, TextSpot, TickParams};
use super::config::{ChartStyleConfig, RenderContext};
use super::style::{BAR_SPINE_WIDTH_PT, GRID_ALPHA, GRID_GRAY, GRID_WIDTH_PT, SPINE_WIDTH_PT};
use super::types::{AnchorMode, AxisId, ChartKind, HAlign, Side, VAlign};

/// Tick label font size for both axes.
pub const TICK_LABEL_PT: f64 = 11.0;

/// Configure a surface for `kind` from `config`. No data is drawn.
pub fn build(config: ChartStyleConfig, kind: ChartKind, ctx: &RenderContext) -> StyledChart {
    let ChartStyleConfig {
        figure_size,
        title,
        subtitle,
        source,
        x_limits,
        y_limits,
        x_ticks,
        y_ticks,
        x_tick_labels,
        y_tick_labels,
        anchor,
    } = config;

    // Gridlines on the value axis only.
    let grid = GridStyle {
        axis: match kind {
            ChartKind::Line => AxisId::Y,
            ChartKind::Bar => AxisId::X,
        },
        color: GRID_GRAY,
        alpha: GRID_ALPHA,
        width_pt: GRID_WIDTH_PT,
    };

    let mut spines = Spines::all(SPINE_WIDTH_PT);
    match kind {
        ChartKind::Line => spines.hide(&[Side::Top, Side::Right, Side::Left]),
        ChartKind::Bar => {
            spines.hide(&[Side::Top, Side::Right, Side::Bottom]);
            spines.left.width_pt = BAR_SPINE_WIDTH_PT;
        }
    }

    let (x_tick_params, y_tick_params) = tick_params_for(kind);

    let x = Axis {
        limits: x_limits,
        ticks: x_ticks,
        tick_labels: x_tick_labels,
        ..Axis::default()
    };
    let y = Axis {
        limits: y_limits,
        ticks: y_ticks,
        tick_labels: y_tick_labels,
        ..Axis::default()
    };

    debug!(
        "building {:?} chart {}x{} in, anchor {:?}, dpi {}",
        kind, figure_size.0, figure_size.1, anchor, ctx.dpi
    );

    StyledChart {
        kind,
        figure_size,
        context: ctx.clone(),
        title,
        subtitle,
        source,
        spines,
        grid: Some(grid),
        x,
        y,
        x_tick_params,
        y_tick_params,
        decoration: decoration_for(kind, anchor),
        series: Vec::new(),
    }
}

/// Shorthand for `build(config, ChartKind::Line, ctx)`.
pub fn line_chart(config: ChartStyleConfig, ctx: &RenderContext) -> StyledChart {
    build(config, ChartKind::Line, ctx)
}

/// Shorthand for `build(config, ChartKind::Bar, ctx)`.
pub fn bar_chart(config: ChartStyleConfig, ctx: &RenderContext) -> StyledChart {
    build(config, ChartKind::Bar, ctx)
}

/// (x, y) tick label placement.
fn tick_params_for(kind: ChartKind) -> (TickParams, TickParams) {
    match kind {
        ChartKind::Line => (
            TickParams {
                side: Side::Bottom,
                label_size_pt: TICK_LABEL_PT,
                pad_pt: 3.0,
                length_pt: 0.0,
                h_align: HAlign::Center,
                v_align: VAlign::Top,
            },
            // Right edge just inside the frame, sitting on top of its gridline.
            TickParams {
                side: Side::Left,
                label_size_pt: TICK_LABEL_PT,
                pad_pt: -2.0,
                length_pt: 0.0,
                h_align: HAlign::Right,
                v_align: VAlign::Bottom,
            },
        ),
        ChartKind::Bar => (
            TickParams {
                side: Side::Top,
                label_size_pt: TICK_LABEL_PT,
                pad_pt: 2.0,
                length_pt: 0.0,
                h_align: HAlign::Center,
                v_align: VAlign::Bottom,
            },
            TickParams {
                side: Side::Left,
                label_size_pt: TICK_LABEL_PT,
                pad_pt: 4.0,
                length_pt: 0.0,
                h_align: HAlign::Right,
                v_align: VAlign::Center,
            },
        ),
    }
}

/// Accent and header/footer positions for each variant and frame.
pub fn decoration_for(kind: ChartKind, frame: AnchorMode) -> Decoration {
    let spot = |x: f64, y: f64, size_pt: f64| TextSpot { x, y, size_pt };
    match (kind, frame) {
        (ChartKind::Line, AnchorMode::Figure) => Decoration {
            frame,
            rule_x: (0.12, 0.90),
            rule_y: 0.98,
            tab_at: (0.12, 0.98),
            tab_size: (0.04, -0.02),
            title: spot(0.12, 0.91, 13.0),
            subtitle: spot(0.12, 0.86, 11.0),
            source: spot(0.12, 0.01, 9.0),
        },
        (ChartKind::Bar, AnchorMode::Figure) => Decoration {
            frame,
            rule_x: (-0.10, 0.87),
            rule_y: 1.02,
            tab_at: (-0.10, 1.02),
            tab_size: (0.12, -0.02),
            title: spot(-0.10, 0.96, 10.0),
            subtitle: spot(-0.10, 0.925, 8.0),
            source: spot(-0.10, 0.05, 5.0),
        },
        (ChartKind::Line, AnchorMode::Axes) => Decoration {
            frame,
            rule_x: (0.0, 1.0),
            rule_y: 1.25,
            tab_at: (0.0, 1.25),
            tab_size: (0.08, -0.03),
            title: spot(0.0, 1.15, 13.0),
            subtitle: spot(0.0, 1.08, 11.0),
            source: spot(0.0, -0.12, 9.0),
        },
        (ChartKind::Bar, AnchorMode::Axes) => Decoration {
            frame,
            rule_x: (0.0, 1.0),
            rule_y: 1.22,
            tab_at: (0.0, 1.22),
            tab_size: (0.12, -0.03),
            title: spot(0.0, 1.14, 10.0),
            subtitle: spot(0.0, 1.08, 8.0),
            source: spot(0.0, -0.06, 5.0),
        },
    }
}
