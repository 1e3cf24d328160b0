use manager_charts::ChartError;
use manager_charts::api::{ChartKind, ChartKindConfig, DashboardConfig};
use manager_charts::core::{BarGeometry, Viewport};

#[test]
fn default_config_is_valid_and_matches_stock_dashboard() {
    let config = DashboardConfig::default();
    config.validate().expect("default config");

    assert_eq!(config.palette, vec!["#1f77b4", "#ff7f0e", "#2ca02c"]);
    assert_eq!(config.geometry, BarGeometry::new(3.0, 0.5, 0.1));
    assert_eq!(config.viewport, Viewport::new(600, 400));
    assert_eq!(
        config.chart_kind(ChartKind::WorkHours).columns,
        vec!["declared hours", "confirmed hours", "delta"]
    );
    assert_eq!(
        config.chart_kind(ChartKind::ProjectStatus).title,
        "Project completion this month"
    );
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = DashboardConfig::from_json_str(
        r#"{ "geometry": { "tick_step": 4.0, "group_gap": 1.0, "bar_gap": 0.0 } }"#,
    )
    .expect("parse");
    assert_eq!(config.geometry, BarGeometry::new(4.0, 1.0, 0.0));
    assert_eq!(config.palette.len(), 3);
    assert_eq!(config.work_hours.title, "Work hours this month");
}

#[test]
fn config_json_round_trips() {
    let config = DashboardConfig::default().with_chart_kind(
        ChartKind::ProjectStatus,
        ChartKindConfig::new(["done", "left"], "Status"),
    );
    let json = config.to_json_string_pretty().expect("encode");
    let decoded = DashboardConfig::from_json_str(&json).expect("decode");
    assert_eq!(decoded, config);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = DashboardConfig::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn overlapping_groups_are_rejected() {
    let config = DashboardConfig::default().with_geometry(BarGeometry::new(1.0, 1.5, 0.1));
    let err = config.validate().expect_err("group gap wider than tick step");
    assert!(format!("{err}").contains("group_gap"));
}

#[test]
fn more_series_than_colors_is_rejected() {
    let config = DashboardConfig::default().with_chart_kind(
        ChartKind::WorkHours,
        ChartKindConfig::new(["a", "b", "c", "d"], "Hours"),
    );
    let err = config.validate().expect_err("four series, three colors");
    assert!(format!("{err}").contains("palette"));
}

#[test]
fn degenerate_bar_gap_is_accepted() {
    let config = DashboardConfig::default().with_geometry(BarGeometry::new(3.0, 0.5, 1.0));
    config.validate().expect("zero-width bars are allowed");
}

#[test]
fn bad_palette_entries_and_columns_are_rejected() {
    let err = DashboardConfig::default()
        .with_palette(["#1f77b4", "blue", "#2ca02c"])
        .validate()
        .expect_err("non-hex color");
    assert!(format!("{err}").contains("blue"));

    let err = DashboardConfig::default()
        .with_chart_kind(ChartKind::WorkHours, ChartKindConfig::new(["a", "a"], "Hours"))
        .validate()
        .expect_err("duplicate column");
    assert!(format!("{err}").contains("twice"));

    let err = DashboardConfig::default()
        .with_chart_kind(
            ChartKind::WorkHours,
            ChartKindConfig::new(Vec::<String>::new(), "Hours"),
        )
        .validate()
        .expect_err("no columns");
    assert!(format!("{err}").contains("at least one column"));

    let err = DashboardConfig::default()
        .with_viewport(Viewport::new(0, 400))
        .validate()
        .expect_err("zero viewport");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}
