//! The two showcase charts: a noisy multi-series line chart and a GDP ranking.

use log::info;

use crate::error::{ChartError, Result};
use crate::models::GdpRecord;
use crate::sample::{gaussian, linspace, seeded_rng};
use crate::storage::{load_gdp_reader, top_n_for_year};
use crate::viz::style::{BAR_BLUE, INK};
use crate::viz::{
    AnchorMode, ChartStyleConfig, LineStyle, RenderContext, StyledChart, TickSpec, bar_chart,
    line_chart,
};

pub const BAR_DEMO_TITLE: &str = "Ahead of the pack";
pub const BAR_DEMO_SUBTITLE: &str = "Top 9 countries by GDP, in trillions of USD";
pub const BAR_DEMO_SOURCE: &str = "Source: \"GDP of all countries(1960-2020)\" via Kaggle.com";
pub const BAR_DEMO_YEAR: i32 = 2020;
pub const BAR_DEMO_TOP: usize = 9;

/// The bundled 2019/2020 GDP table, compiled into the crate.
pub const SAMPLE_GDP_CSV: &str = include_str!("../data/gdp_sample.csv");

/// Rows of [`SAMPLE_GDP_CSV`].
pub fn sample_records() -> Result<Vec<GdpRecord>> {
    load_gdp_reader(SAMPLE_GDP_CSV.as_bytes())
}

/// Ten translucent black Gaussian-noise series over `[0, 1]`.
pub fn line_demo(ctx: &RenderContext, seed: u64) -> Result<StyledChart> {
    let config = ChartStyleConfig::line()
        .figure_size(10.0, 4.0)
        .anchor(AnchorMode::Axes)
        .x_limits(0.0, 1.0)
        .y_limits(-10.0, 10.0)
        .y_ticks(TickSpec::Step(5.0))
        .y_tick_labels(["-10", "-5", "0", "5", "10"]);
    let mut chart = line_chart(config, ctx);
    chart.x_axis_mut().set_label("time (s)");

    let xs = linspace(0.0, 1.0, 100);
    let mut rng = seeded_rng(seed);
    let style = LineStyle::default().color(INK).alpha(0.3).width(3.0);
    for _ in 0..10 {
        let ys = gaussian(xs.len(), 0.0, 1.0, &mut rng)?;
        chart.plot(&xs, &ys, style)?;
    }
    Ok(chart)
}

/// Nine largest 2020 economies as horizontal bars, largest on top.
pub fn bar_demo(records: &[GdpRecord], ctx: &RenderContext) -> Result<StyledChart> {
    let top = top_n_for_year(records, BAR_DEMO_YEAR, BAR_DEMO_TOP);
    if top.is_empty() {
        return Err(ChartError::InvalidParameter(format!(
            "no GDP rows for {BAR_DEMO_YEAR}"
        )));
    }
    info!("bar demo with {} countries", top.len());

    let config = ChartStyleConfig::bar()
        .figure_size(5.0, 5.0)
        .title(BAR_DEMO_TITLE)
        .subtitle(BAR_DEMO_SUBTITLE)
        .source(BAR_DEMO_SOURCE)
        .x_ticks(TickSpec::Fixed(vec![0.0, 5.0, 10.0, 15.0, 20.0]))
        .y_limits(-0.5, top.len() as f64 - 0.5);
    let mut chart = bar_chart(config, ctx);

    let names: Vec<&str> = top.iter().map(|r| r.country.as_str()).collect();
    let values: Vec<f64> = top.iter().map(GdpRecord::trillions).collect();
    chart.barh(&names, &values, Some(BAR_BLUE))?;
    Ok(chart)
}
