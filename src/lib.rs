//! econ_plots
//!
//! Editorial-style chart styling for line and horizontal bar charts: a red
//! accent rule and tab over a left-aligned title block, a single-axis grid,
//! reduced spines and tick labels tucked inside the frame. Pairs with the
//! `econ-plots` CLI.
//!
//! ### Features
//! - Build a styled chart from a small config (`viz::line_chart`, `viz::bar_chart`)
//! - Title block anchored to the figure or to the plot frame
//! - Resolve the final layout without rendering (`StyledChart::resolve`)
//! - Export to PNG (trimmed to content) or SVG
//! - Load and rank a `country,year,gdp` CSV for bar charts
//!
//! ### Example
//! ```no_run
//! use econ_plots::viz::{ChartStyleConfig, ExportOptions, LineStyle, RenderContext, line_chart};
//!
//! let config = ChartStyleConfig::line()
//!     .title("Steady climb")
//!     .subtitle("Index, 2020 = 100")
//!     .source("Source: made-up numbers")
//!     .y_limits(90.0, 130.0);
//! let mut chart = line_chart(config, &RenderContext::default());
//! chart.plot(&[2020.0, 2021.0, 2022.0], &[100.0, 112.0, 125.0], LineStyle::default())?;
//! chart.save("climb.png", &ExportOptions::default())?;
//! # Ok::<(), econ_plots::ChartError>(())
//! ```

pub mod demo;
pub mod error;
pub mod models;
pub mod sample;
pub mod storage;
pub mod viz;

pub use error::{ChartError, Result};
pub use models::GdpRecord;
pub use viz::{ChartStyleConfig, RenderContext, StyledChart};
