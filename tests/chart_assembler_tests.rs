use manager_charts::ChartError;
use manager_charts::api::{ChartAssembler, ChartKind, ChartKindConfig, DashboardConfig};
use manager_charts::core::Row;

fn project(name: &str, code: &str) -> Row {
    Row::new("li", name, code)
        .with_metric("declared hours", 40.0)
        .with_metric("confirmed hours", 36.0)
        .with_metric("delta", 4.0)
        .with_metric("completion this month", 25.0)
        .with_metric("total progress", 60.0)
        .with_metric("completion before this month", 35.0)
}

#[test]
fn work_hours_chart_uses_configured_columns_and_title() {
    let assembler = ChartAssembler::new(DashboardConfig::default()).expect("assembler");
    let rows = vec![project("Alpha", "P-001"), project("Beta", "P-002")];

    let chart = assembler
        .build_chart(ChartKind::WorkHours, &rows)
        .expect("chart");
    assert_eq!(chart.kind, ChartKind::WorkHours);
    assert_eq!(chart.title, "Work hours this month");
    let names: Vec<&str> = chart.spec.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["declared hours", "confirmed hours", "delta"]);
    assert_eq!(chart.spec.categories[0].label, "Alpha\nP-001");
    assert_eq!(chart.bars.len(), 6);
    assert_eq!(chart.plan.category_count, 2);
}

#[test]
fn project_status_chart_reads_completion_columns() {
    let assembler = ChartAssembler::new(DashboardConfig::default()).expect("assembler");
    let rows = vec![project("Alpha", "P-001")];

    let chart = assembler
        .build_chart(ChartKind::ProjectStatus, &rows)
        .expect("chart");
    assert_eq!(chart.title, "Project completion this month");
    let values: Vec<f64> = chart.bars.iter().map(|bar| bar.value).collect();
    assert_eq!(values, vec![25.0, 60.0, 35.0]);
}

#[test]
fn empty_rows_build_an_empty_but_titled_chart() {
    let assembler = ChartAssembler::new(DashboardConfig::default()).expect("assembler");
    let chart = assembler
        .build_chart(ChartKind::WorkHours, &[])
        .expect("empty rows are recovered");

    assert!(chart.is_empty());
    assert!(chart.bars.is_empty());
    assert_eq!(chart.spec.series.len(), 3);
    assert!(chart.spec.series.iter().all(|s| s.values.is_empty()));

    let frame = assembler.render_frame(&chart).expect("empty render");
    assert!(frame.is_empty());
    assert_eq!(frame.title.as_deref(), Some("Work hours this month"));
    assert_eq!(frame.legend.len(), 3);
}

#[test]
fn missing_column_is_fatal() {
    let config = DashboardConfig::default().with_chart_kind(
        ChartKind::WorkHours,
        ChartKindConfig::new(["declared hours", "overtime"], "Hours"),
    );
    let assembler = ChartAssembler::new(config).expect("assembler");
    let rows = vec![project("Alpha", "P-001")];

    let err = assembler
        .build_chart(ChartKind::WorkHours, &rows)
        .expect_err("must surface config drift");
    assert!(matches!(err, ChartError::MissingColumn { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn building_twice_is_bit_identical() {
    let assembler = ChartAssembler::new(DashboardConfig::default()).expect("assembler");
    let rows = vec![project("Alpha", "P-001"), project("Beta", "P-002")];

    let first = assembler
        .build_chart(ChartKind::WorkHours, &rows)
        .expect("chart");
    let second = assembler
        .build_chart(ChartKind::WorkHours, &rows)
        .expect("chart");
    assert_eq!(first.bars.len(), second.bars.len());
    for (a, b) in first.bars.iter().zip(&second.bars) {
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.width.to_bits(), b.width.to_bits());
        assert_eq!(a.value.to_bits(), b.value.to_bits());
        assert_eq!(a.label, b.label);
    }
}

#[test]
fn rendered_frame_matches_placed_bars() {
    let assembler = ChartAssembler::new(DashboardConfig::default()).expect("assembler");
    let rows = vec![project("Alpha", "P-001"), project("Beta", "P-002")];
    let chart = assembler
        .build_chart(ChartKind::WorkHours, &rows)
        .expect("chart");
    let frame = assembler.render_frame(&chart).expect("frame");

    assert_eq!(frame.rects.len(), chart.bars.len());
    for (rect, bar) in frame.rects.iter().zip(&chart.bars) {
        assert_eq!(rect.x, bar.x);
        assert_eq!(rect.width, bar.width);
        assert_eq!(rect.y1, bar.value);
    }
}

#[test]
fn assembler_rejects_invalid_config() {
    let config = DashboardConfig::default().with_palette(["#1f77b4"]);
    let err = ChartAssembler::new(config).expect_err("palette too small");
    assert!(format!("{err}").contains("palette only has 1 colors"));
}

#[test]
fn render_frame_draws_the_stored_placed_bars() {
    let assembler = ChartAssembler::new(DashboardConfig::default()).expect("assembler");
    let rows = vec![project("Alpha", "P-001")];
    let mut chart = assembler
        .build_chart(ChartKind::WorkHours, &rows)
        .expect("chart");

    chart.bars[0].value = 12.5;
    chart.bars[0].x = 0.25;

    let frame = assembler.render_frame(&chart).expect("frame");
    assert_eq!(frame.rects.len(), 3);
    assert_eq!(frame.rects[0].y1, 12.5);
    assert_eq!(frame.rects[0].x, 0.25);
    assert_eq!(frame.texts[0].text, "12.5");
    assert_eq!(frame.rects[1].y1, 36.0);
}

#[test]
fn render_frame_rejects_bars_that_do_not_cover_the_chart() {
    let assembler = ChartAssembler::new(DashboardConfig::default()).expect("assembler");
    let rows = vec![project("Alpha", "P-001"), project("Beta", "P-002")];
    let mut chart = assembler
        .build_chart(ChartKind::ProjectStatus, &rows)
        .expect("chart");

    chart.bars.pop();

    let err = assembler.render_frame(&chart).expect_err("short bar list");
    match err {
        ChartError::InvalidData(message) => assert!(message.contains("placed bars")),
        other => panic!("unexpected error: {other:?}"),
    }
}
