use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use econ_plots::viz::{
    AnchorMode, ChartStyleConfig, ExportOptions, LineStyle, RenderContext, Rgb8, StyledChart,
    TickSpec, bar_chart, line_chart,
};
use econ_plots::{demo, sample, storage};

#[derive(Parser, Debug)]
#[command(
    name = "econ-plots",
    version,
    about = "Render editorial-style line and bar charts to PNG or SVG"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Line chart of seeded random series.
    Line(LineArgs),
    /// Horizontal bar chart ranking countries by GDP.
    Bar(BarArgs),
    /// Write both showcase charts.
    Demo(DemoArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Anchor {
    Figure,
    Axes,
}

impl From<Anchor> for AnchorMode {
    fn from(a: Anchor) -> Self {
        match a {
            Anchor::Figure => AnchorMode::Figure,
            Anchor::Axes => AnchorMode::Axes,
        }
    }
}

/// Flags shared by `line` and `bar`.
#[derive(Args, Debug)]
struct StyleArgs {
    /// Output path (.png or .svg).
    #[arg(short, long)]
    out: PathBuf,
    /// JSON file with a chart style config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    subtitle: Option<String>,
    #[arg(long)]
    source: Option<String>,
    /// Figure width in inches.
    #[arg(long)]
    width: Option<f64>,
    /// Figure height in inches.
    #[arg(long)]
    height: Option<f64>,
    /// Anchor the title block to the whole figure or to the plot frame.
    #[arg(long, value_enum)]
    anchor: Option<Anchor>,
    /// Dots per inch for PNG output (default 100).
    #[arg(long, default_value_t = 100.0)]
    dpi: f64,
    /// Locale for tick labels (e.g. en, de, fr).
    #[arg(long, default_value = "en")]
    locale: String,
}

#[derive(Args, Debug)]
struct LineArgs {
    #[command(flatten)]
    style: StyleArgs,
    /// Number of random series.
    #[arg(long, default_value_t = 3)]
    series: usize,
    /// Seed for the random series.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Y limits as LO:HI (e.g. -3:3).
    #[arg(long, allow_hyphen_values = true)]
    ylim: Option<String>,
    /// Distance between Y ticks.
    #[arg(long)]
    ytick_step: Option<f64>,
}

#[derive(Args, Debug)]
struct BarArgs {
    #[command(flatten)]
    style: StyleArgs,
    /// CSV with columns country,year,gdp.
    #[arg(long)]
    data: PathBuf,
    #[arg(long, default_value_t = 2020)]
    year: i32,
    /// Number of countries to show.
    #[arg(long, default_value_t = 9)]
    top: usize,
    /// X tick positions separated by comma or semicolon (e.g. 0,5,10,15,20).
    #[arg(long)]
    xticks: Option<String>,
    /// Bar fill as #RRGGBB (default #006BA2).
    #[arg(long)]
    color: Option<Rgb8>,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Directory for line_demo.png and bar_demo.png.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// CSV with columns country,year,gdp (defaults to the sample compiled into the binary).
    #[arg(long)]
    data: Option<PathBuf>,
    #[arg(long, default_value_t = 300.0)]
    dpi: f64,
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn parse_numbers(s: &str) -> Result<Vec<f64>> {
    parse_list(s)
        .iter()
        .map(|x| {
            x.parse::<f64>()
                .with_context(|| format!("invalid number {x:?}"))
        })
        .collect()
}

fn parse_range(s: &str) -> Option<(f64, f64)> {
    let (a, b) = s.split_once(':')?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Line(args) => cmd_line(args),
        Command::Bar(args) => cmd_bar(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

/// Start from `--config` (or `fallback`) and apply the individual flags.
fn style_config(args: &StyleArgs, fallback: ChartStyleConfig) -> Result<ChartStyleConfig> {
    let mut cfg = match &args.config {
        Some(path) => ChartStyleConfig::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => fallback,
    };
    if let Some(t) = &args.title {
        cfg = cfg.title(t.as_str());
    }
    if let Some(s) = &args.subtitle {
        cfg = cfg.subtitle(s.as_str());
    }
    if let Some(s) = &args.source {
        cfg = cfg.source(s.as_str());
    }
    let (w, h) = cfg.figure_size;
    cfg = cfg.figure_size(args.width.unwrap_or(w), args.height.unwrap_or(h));
    if let Some(a) = args.anchor {
        cfg = cfg.anchor(a.into());
    }
    Ok(cfg)
}

fn context(dpi: f64, locale: &str) -> RenderContext {
    RenderContext {
        dpi,
        locale: locale.to_string(),
    }
}

fn write(chart: &StyledChart, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display()))?;
    }
    let size = chart
        .save(path, &ExportOptions::default())
        .with_context(|| format!("writing {}", path.display()))?;
    eprintln!(
        "Wrote plot to {} ({}x{} px)",
        path.display(),
        size.width,
        size.height
    );
    Ok(())
}

fn cmd_line(args: LineArgs) -> Result<()> {
    let mut cfg = style_config(&args.style, ChartStyleConfig::line())?;
    if let Some(s) = &args.ylim {
        let (lo, hi) =
            parse_range(s).ok_or_else(|| anyhow::anyhow!("invalid --ylim, expected LO:HI"))?;
        cfg = cfg.y_limits(lo, hi);
    }
    if let Some(step) = args.ytick_step {
        if !(step.is_finite() && step > 0.0) {
            bail!("--ytick-step must be positive");
        }
        cfg = cfg.y_ticks(TickSpec::Step(step));
    }

    let ctx = context(args.style.dpi, &args.style.locale);
    let mut chart = line_chart(cfg, &ctx);
    let xs = sample::linspace(0.0, 1.0, 100);
    let mut rng = sample::seeded_rng(args.seed);
    for _ in 0..args.series {
        let ys = sample::gaussian(xs.len(), 0.0, 1.0, &mut rng)?;
        chart.plot(&xs, &ys, LineStyle::default())?;
    }
    write(&chart, &args.style.out)
}

/// Show exactly `n` category slots unless the config already set Y limits.
fn category_limits(cfg: ChartStyleConfig, n: usize) -> ChartStyleConfig {
    if cfg.y_limits.is_some() {
        cfg
    } else {
        cfg.y_limits(-0.5, n as f64 - 0.5)
    }
}

fn cmd_bar(args: BarArgs) -> Result<()> {
    let records = storage::load_gdp_csv(&args.data)
        .with_context(|| format!("loading {}", args.data.display()))?;
    let top = storage::top_n_for_year(&records, args.year, args.top);
    if top.is_empty() {
        bail!("no rows for year {} in {}", args.year, args.data.display());
    }

    let mut cfg = category_limits(style_config(&args.style, ChartStyleConfig::bar())?, top.len());
    if let Some(s) = &args.xticks {
        cfg = cfg.x_ticks(TickSpec::Fixed(parse_numbers(s)?));
    }

    let ctx = context(args.style.dpi, &args.style.locale);
    let mut chart = bar_chart(cfg, &ctx);
    let names: Vec<&str> = top.iter().map(|r| r.country.as_str()).collect();
    let values: Vec<f64> = top.iter().map(|r| r.trillions()).collect();
    chart.barh(&names, &values, args.color)?;
    write(&chart, &args.style.out)
}

fn cmd_demo(args: DemoArgs) -> Result<()> {
    let ctx = RenderContext::with_dpi(args.dpi);

    let line = demo::line_demo(&ctx, args.seed)?;
    write(&line, &args.out_dir.join("line_demo.png"))?;

    let records = match &args.data {
        Some(path) => storage::load_gdp_csv(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => demo::sample_records().context("reading the bundled GDP sample")?,
    };
    let bar = demo::bar_demo(&records, &ctx)?;
    write(&bar, &args.out_dir.join("bar_demo.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_and_lists_parse() {
        assert_eq!(parse_range("-3:3"), Some((-3.0, 3.0)));
        assert_eq!(parse_range("3"), None);
        assert_eq!(parse_numbers("0, 5;10").unwrap(), vec![0.0, 5.0, 10.0]);
        assert!(parse_numbers("0,x").is_err());
    }

    #[test]
    fn config_y_limits_survive_category_defaults() {
        let own = category_limits(ChartStyleConfig::bar().y_limits(-2.0, 12.0), 9);
        assert_eq!(own.y_limits, Some((-2.0, 12.0)));
        let auto = category_limits(ChartStyleConfig::bar(), 9);
        assert_eq!(auto.y_limits, Some((-0.5, 8.5)));
    }

    #[test]
    fn color_flag_parses_hex() {
        let cli = Cli::try_parse_from([
            "econ-plots", "bar", "--data", "x.csv", "--out", "x.png", "--color", "#E3120B",
        ])
        .unwrap();
        match cli.cmd {
            Command::Bar(args) => assert_eq!(args.color, Some(Rgb8::new(0xE3, 0x12, 0x0B))),
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Cli::try_parse_from([
            "econ-plots", "bar", "--data", "x.csv", "--out", "x.png", "--color", "red",
        ])
        .is_err());
    }
}
