//! Editorial chart styling: build a styled line or bar chart, plot data on it,
//! and render to **PNG** or **SVG**.
//!
//! - Red accent rule and tab above the title block, anchored to the figure or the axes
//! - Title, subtitle and source note at fixed figure positions
//! - Single-axis grid, reduced spines, tick labels placed inside the frame
//! - Locale-aware tick labels (`30,000` vs `30.000`)
//! - PNG output is trimmed to its painted content
//!
//! The flow is `build` → [`StyledChart`] (mutable handle: `plot`, `barh`, axis
//! limits and ticks) → [`StyledChart::resolve`] (pure geometry, no backend) →
//! [`StyledChart::save`].

pub mod adapter;
pub mod builder;
pub mod chart;
pub mod config;
pub mod export;
pub mod fonts;
pub mod layout;
pub mod render;
pub mod style;
pub mod text;
pub mod ticks;
pub mod types;
pub mod util;

pub use builder::{bar_chart, build, line_chart};
pub use chart::{Axis, Series, StyledChart};
pub use config::{ChartStyleConfig, RenderContext, TickSpec};
pub use export::{ExportOptions, ImageSize};
pub use layout::ResolvedChart;
pub use style::{LineStyle, Rgb8};
pub use types::{AnchorMode, AxisId, ChartKind, Side, TextRole};
