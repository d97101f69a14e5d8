use std::path::PathBuf;

use econ_plots::demo::{BAR_DEMO_TITLE, bar_demo};
use econ_plots::storage::load_gdp_csv;
use econ_plots::viz::export::render_png;
use econ_plots::viz::{
    AxisId, ChartStyleConfig, ExportOptions, LineStyle, RenderContext, StyledChart, line_chart,
};
use econ_plots::{ChartError, GdpRecord};

fn sample_records() -> Vec<GdpRecord> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/gdp_sample.csv");
    load_gdp_csv(path).unwrap()
}

fn gdp_chart() -> StyledChart {
    bar_demo(&sample_records(), &RenderContext::with_dpi(100.0)).unwrap()
}

#[test]
fn bar_chart_png_has_white_corners() {
    let chart = gdp_chart();
    assert_eq!(chart.title(), BAR_DEMO_TITLE);
    assert_eq!(chart.resolve().tick_labels(AxisId::Y).len(), 9);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("gdp.png");
    let size = chart.save(&out, &ExportOptions::default()).unwrap();

    let meta = std::fs::metadata(&out).unwrap();
    assert!(meta.len() > 0);

    let img = image::open(&out).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (size.width, size.height));
    let (w, h) = img.dimensions();
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        assert_eq!(img.get_pixel(x, y).0, [255, 255, 255], "corner ({x}, {y})");
    }
}

#[test]
fn untrimmed_canvas_covers_the_figure() {
    let chart = gdp_chart();
    let opts = ExportOptions {
        trim: false,
        ..ExportOptions::default()
    };
    let img = render_png(&chart, &opts).unwrap();
    let (pw, ph) = chart.pixel_size();
    assert!(img.width() >= pw && img.height() >= ph);

    let trimmed = render_png(&chart, &ExportOptions::default()).unwrap();
    assert!(trimmed.width() <= img.width() && trimmed.height() <= img.height());
}

#[test]
fn rendering_is_deterministic() {
    let cfg = ChartStyleConfig::line().title("Same every time");
    let build = || {
        let mut chart = line_chart(cfg.clone(), &RenderContext::default());
        chart
            .plot(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 2.0, 4.0], LineStyle::default())
            .unwrap();
        chart
    };
    let a = render_png(&build(), &ExportOptions::default()).unwrap();
    let b = render_png(&build(), &ExportOptions::default()).unwrap();
    assert_eq!(a.dimensions(), b.dimensions());
    assert!(a.as_raw() == b.as_raw());
}

#[test]
fn higher_dpi_gives_a_larger_image() {
    let chart = gdp_chart();
    let lo = render_png(&chart, &ExportOptions::with_dpi(50.0)).unwrap();
    let hi = render_png(&chart, &ExportOptions::with_dpi(150.0)).unwrap();
    assert!(hi.width() > lo.width() * 2);
    assert!(hi.height() > lo.height() * 2);
}

#[test]
fn svg_output_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("gdp.svg");
    gdp_chart().save(&out, &ExportOptions::default()).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("<svg"));
    assert!(text.contains("<rect"));
}

#[test]
fn zero_dpi_is_rejected() {
    let err = render_png(&gdp_chart(), &ExportOptions::with_dpi(0.0)).unwrap_err();
    assert!(matches!(err, ChartError::InvalidParameter(_)));
}

#[test]
fn zero_sized_figure_is_an_empty_canvas() {
    let chart = line_chart(
        ChartStyleConfig::line().figure_size(0.0, 4.0),
        &RenderContext::default(),
    );
    let err = render_png(&chart, &ExportOptions::default()).unwrap_err();
    assert!(matches!(err, ChartError::EmptyCanvas { .. }));
}

#[test]
fn title_text_reaches_the_png() {
    let render = |title: &str| {
        let chart = line_chart(
            ChartStyleConfig::line().title(title),
            &RenderContext::default(),
        );
        let opts = ExportOptions {
            trim: false,
            ..ExportOptions::default()
        };
        render_png(&chart, &opts).unwrap()
    };
    let without = render("");
    let with = render("AHEAD OF THE PACK");
    assert_eq!(without.dimensions(), with.dimensions());
    let differing = without
        .as_raw()
        .iter()
        .zip(with.as_raw())
        .filter(|(a, b)| a != b)
        .count();
    assert!(differing > 100, "only {differing} bytes differ");
}

#[test]
fn tick_labels_reach_the_png() {
    let render = |labels: [&str; 3]| {
        let cfg = ChartStyleConfig::line()
            .title("")
            .subtitle("")
            .source("")
            .y_limits(0.0, 2.0)
            .y_ticks(econ_plots::viz::TickSpec::Fixed(vec![0.0, 1.0, 2.0]))
            .y_tick_labels(labels);
        render_png(
            &line_chart(cfg, &RenderContext::default()),
            &ExportOptions::default(),
        )
        .unwrap()
    };
    assert_ne!(render(["", "", ""]).as_raw(), render(["0", "1", "2"]).as_raw());
}
