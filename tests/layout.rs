use econ_plots::viz::{
    AnchorMode, AxisId, ChartKind, ChartStyleConfig, RenderContext, Side, TextRole, TickSpec,
    bar_chart, build, line_chart,
};

fn ctx() -> RenderContext {
    RenderContext::default()
}

#[test]
fn figure_size_is_kept_for_any_request() {
    for (w, h) in [(8.0, 4.0), (3.0, 6.0), (10.0, 4.0), (2.5, 7.25)] {
        for kind in [ChartKind::Line, ChartKind::Bar] {
            let cfg = ChartStyleConfig::line().figure_size(w, h);
            let chart = build(cfg, kind, &RenderContext::with_dpi(300.0));
            assert_eq!(chart.figure_size(), (w, h));
            assert_eq!(
                chart.pixel_size(),
                ((w * 300.0).round() as u32, (h * 300.0).round() as u32)
            );
        }
    }
}

#[test]
fn line_and_bar_hide_the_expected_spines() {
    let line = line_chart(ChartStyleConfig::line(), &ctx());
    assert_eq!(line.hidden_spines(), vec![Side::Top, Side::Right, Side::Left]);

    let bar = bar_chart(ChartStyleConfig::bar(), &ctx());
    assert_eq!(bar.hidden_spines(), vec![Side::Top, Side::Right, Side::Bottom]);
    assert_eq!(bar.spines().get(Side::Left).width_pt, 1.1);

    let visible: Vec<Side> = bar.resolve().spines.iter().map(|s| s.side).collect();
    assert_eq!(visible, vec![Side::Left]);
}

#[test]
fn explicit_value_labels_keep_their_order() {
    let labels = ["low", "mid", "high", "top"];
    let cfg = ChartStyleConfig::line()
        .y_limits(0.0, 30.0)
        .y_ticks(TickSpec::Fixed(vec![0.0, 10.0, 20.0, 30.0]))
        .y_tick_labels(labels);
    let resolved = line_chart(cfg, &ctx()).resolve();
    assert_eq!(resolved.tick_labels(AxisId::Y), labels.to_vec());
}

#[test]
fn unit_limits_keep_grid_and_ticks_in_range() {
    let cfg = ChartStyleConfig::line().y_limits(0.0, 1.0);
    let mut chart = line_chart(cfg, &ctx());
    chart
        .plot(&[0.0, 1.0, 2.0], &[-3.0, 0.5, 4.0], Default::default())
        .unwrap();
    let resolved = chart.resolve();
    assert_eq!(resolved.y_range, (0.0, 1.0));

    let ticks = resolved.ticks(AxisId::Y);
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|t| (0.0..=1.1).contains(&t.value)));

    let grid = resolved.grid.as_ref().unwrap();
    assert_eq!(grid.axis, AxisId::Y);
    assert!(grid.values.iter().all(|v| (0.0..=1.1).contains(v)));
}

#[test]
fn same_config_gives_same_layout() {
    let cfg = ChartStyleConfig::line()
        .title("Twice")
        .y_limits(-2.0, 2.0)
        .anchor(AnchorMode::Axes);
    let a = line_chart(cfg.clone(), &ctx()).resolve();
    let b = line_chart(cfg, &ctx()).resolve();
    assert_eq!(a.tick_labels(AxisId::Y), b.tick_labels(AxisId::Y));
    assert_eq!(a.tab, b.tab);
    assert_eq!(a.rule, b.rule);
    assert_eq!(a, b);
}

#[test]
fn header_texts_follow_the_config() {
    let cfg = ChartStyleConfig::line()
        .title("Headline")
        .subtitle("Deck")
        .source("Source: somewhere");
    let resolved = line_chart(cfg, &ctx()).resolve();
    let title = resolved.text(TextRole::Title).unwrap();
    assert_eq!(title.text, "Headline");
    assert!(title.bold);
    assert!((title.x - 0.12).abs() < 1e-9);
    assert!((title.y - 0.91).abs() < 1e-9);
    assert_eq!(resolved.text(TextRole::Subtitle).unwrap().text, "Deck");
    assert_eq!(resolved.text(TextRole::Source).unwrap().text, "Source: somewhere");
}

#[test]
fn accent_rule_sits_above_the_title() {
    for kind in [ChartKind::Line, ChartKind::Bar] {
        for anchor in [AnchorMode::Figure, AnchorMode::Axes] {
            let cfg = ChartStyleConfig::line().anchor(anchor);
            let resolved = build(cfg, kind, &ctx()).resolve();
            let title = resolved.text(TextRole::Title).unwrap();
            assert!(
                resolved.rule.y > title.y,
                "{kind:?}/{anchor:?}: rule {} vs title {}",
                resolved.rule.y,
                title.y
            );
            assert!(resolved.rule.x1 > resolved.rule.x0);
        }
    }
}

#[test]
fn extents_cover_every_decoration() {
    let resolved = bar_chart(ChartStyleConfig::bar(), &ctx()).resolve();
    let ext = resolved.extents();
    assert!(ext.x0 <= resolved.rule.x0);
    assert!(ext.y1 >= resolved.rule.y);
    assert!(ext.contains(&resolved.tab.bounds()));
    for t in resolved.texts.iter().filter(|t| !t.text.is_empty()) {
        assert!(ext.contains(&resolved.text_bounds(t)));
    }
}
