use approx::assert_abs_diff_eq;
use manager_charts::core::{BarGeometry, Category, ChartSpec, Series, layout};

#[test]
fn layout_matches_dashboard_spacing_formula() {
    let plan = layout(2, 3, BarGeometry::new(3.0, 0.5, 0.1)).expect("layout");

    assert_abs_diff_eq!(plan.group_width, 2.5, epsilon = 1e-6);
    assert_abs_diff_eq!(plan.bar_span, 0.833_333, epsilon = 1e-6);
    assert_abs_diff_eq!(plan.bar_width, 0.733_333, epsilon = 1e-6);

    let category_zero: Vec<f64> = (0..3)
        .map(|series| plan.bar_x(series, 0).expect("bar x"))
        .collect();
    assert_abs_diff_eq!(category_zero[0], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(category_zero[1], 0.833_333, epsilon = 1e-6);
    assert_abs_diff_eq!(category_zero[2], 1.666_667, epsilon = 1e-6);

    assert_abs_diff_eq!(plan.bar_x(0, 1).expect("bar x"), 3.0, epsilon = 1e-9);
}

#[test]
fn ticks_sit_under_the_middle_of_each_cluster() {
    let plan = layout(3, 3, BarGeometry::new(3.0, 0.5, 0.1)).expect("layout");
    assert_eq!(plan.tick_positions.len(), 3);

    for (category, tick) in plan.tick_positions.iter().enumerate() {
        let first = plan.bar_x(0, category).expect("first bar");
        let last = plan.bar_x(2, category).expect("last bar");
        assert!((tick - (first + last) / 2.0).abs() <= 1e-9);
    }
    assert!((plan.tick_positions[1] - (3.0 + 0.833_333_333)).abs() <= 1e-6);
}

#[test]
fn single_series_tick_matches_group_origin() {
    let plan = layout(2, 1, BarGeometry::new(2.0, 0.4, 0.2)).expect("layout");
    assert!((plan.bar_span - 1.6).abs() <= 1e-12);
    assert!((plan.bar_width - 1.4).abs() <= 1e-12);
    assert!((plan.tick_positions[0] - 0.0).abs() <= 1e-12);
    assert!((plan.tick_positions[1] - 2.0).abs() <= 1e-12);
}

#[test]
fn zero_categories_give_an_empty_plan() {
    let plan = layout(0, 3, BarGeometry::default()).expect("layout");
    assert!(plan.is_empty());
    assert!(plan.tick_positions.is_empty());
    assert!(plan.group_origins.is_empty());
    assert_eq!(plan.bar_x(0, 0), None);
}

#[test]
fn zero_series_is_a_configuration_error() {
    let err = layout(2, 0, BarGeometry::default()).expect_err("must reject zero series");
    assert!(format!("{err}").contains("at least one series"));
}

#[test]
fn oversized_bar_gap_clamps_width_to_zero() {
    let geometry = BarGeometry::new(3.0, 0.5, 2.0);
    assert!(geometry.is_degenerate_for(3));

    let plan = layout(2, 3, geometry).expect("degenerate geometry still lays out");
    assert_eq!(plan.bar_width, 0.0);
    assert!((plan.bar_x(1, 0).expect("bar x") - 0.833_333_333).abs() <= 1e-6);
}

#[test]
fn group_gap_must_stay_below_tick_step() {
    let err = layout(1, 1, BarGeometry::new(1.0, 1.0, 0.0)).expect_err("must reject");
    assert!(format!("{err}").contains("tick_step"));

    let err = layout(1, 1, BarGeometry::new(f64::NAN, 0.5, 0.1)).expect_err("must reject");
    assert!(format!("{err}").contains("finite"));
}

#[test]
fn placed_bars_are_series_major_and_carry_category_labels() {
    let spec = ChartSpec::new(
        vec![Category::new("Alpha\nP-001", 0), Category::new("Beta\nP-002", 1)],
        vec![
            Series::new("declared hours", 0, vec![10.0, 20.0]),
            Series::new("confirmed hours", 1, vec![8.0, 18.0]),
        ],
        BarGeometry::default(),
    )
    .expect("spec");
    let plan = layout(2, 2, spec.geometry).expect("layout");
    let bars = plan.place_bars(&spec).expect("place");

    let values: Vec<f64> = bars.iter().map(|bar| bar.value).collect();
    assert_eq!(values, vec![10.0, 20.0, 8.0, 18.0]);
    assert_eq!(bars[1].label, "Beta\nP-002");
    assert_eq!(bars[2].series_index, 1);
    assert_eq!(bars[2].category_index, 0);
    assert!((bars[2].x - plan.bar_span).abs() <= 1e-12);
    assert!(bars.iter().all(|bar| bar.width == plan.bar_width));
}

#[test]
fn placing_against_a_mismatched_plan_fails() {
    let spec = ChartSpec::new(
        vec![Category::new("Alpha\nP-001", 0)],
        vec![Series::new("delta", 0, vec![1.0])],
        BarGeometry::default(),
    )
    .expect("spec");
    let plan = layout(2, 1, spec.geometry).expect("layout");
    let err = plan.place_bars(&spec).expect_err("must reject");
    assert!(format!("{err}").contains("position plan"));
}
