// File: crates/strata-core/tests/y_scale.rs
// Purpose: Y-domain fitting policies: zero-rooting, delta mode, stacking, windows.

use strata_core::types::{Coord, Point};
use strata_core::{stack, AxisConfig, AxisSide, Chart, ChartConfig, SeriesConfig};

fn chart_of(series: Vec<SeriesConfig>) -> Chart {
    Chart::with_config(
        1024.0,
        640.0,
        ChartConfig { series: Some(series), ..Default::default() },
    )
}

fn y_domain(chart: &Chart) -> [f64; 2] {
    chart.scales().y.domain().expect("continuous y domain")
}

#[test]
fn all_positive_data_roots_at_zero() {
    let data: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 50.0 + i as f64)).collect();
    let chart = chart_of(vec![SeriesConfig::line(data)]);
    let [lo, hi] = y_domain(&chart);
    assert_eq!(lo, 0.0);
    assert!(hi > 59.0, "upper edge buffered above the max");
}

#[test]
fn start_from_zero_can_be_disabled() {
    let data: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 50.0 + i as f64)).collect();
    let chart = Chart::with_config(
        1024.0,
        640.0,
        ChartConfig {
            series: Some(vec![SeriesConfig::line(data)]),
            y_axis: Some(AxisConfig { start_from_zero: Some(false), ..Default::default() }),
            ..Default::default()
        },
    );
    let [lo, _] = y_domain(&chart);
    assert!(lo > 0.0 && lo < 50.0, "buffered below the minimum: {lo}");
}

#[test]
fn delta_bars_keep_the_true_minimum() {
    let data: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 50.0 + i as f64)).collect();
    let chart = chart_of(vec![SeriesConfig::Bar {
        data,
        color: None,
        name: None,
        visible: true,
        bar_width: 0.8,
        delta: true,
    }]);
    let [lo, _] = y_domain(&chart);
    assert!(lo > 0.0 && lo < 50.0, "delta mode skips zero-rooting: {lo}");
}

#[test]
fn fully_stacked_data_skips_zero_rooting() {
    // Stacked points carry their own baselines; rooting at zero would
    // misrepresent a stack that starts above it.
    let data: Vec<Point> = (0..5).map(|i| Point::stacked(i as f64, 9.0 + i as f64, 5.0)).collect();
    let chart = chart_of(vec![SeriesConfig::bar(data)]);
    let [lo, _] = y_domain(&chart);
    assert!(lo > 0.0 && lo < 5.0, "baseline respected: {lo}");
}

#[test]
fn stack_accumulates_and_threads_baselines() {
    let a: Vec<Point> = vec![Point::new(0.0, 1.0), Point::new(1.0, 2.0)];
    let b: Vec<Point> = vec![Point::new(0.0, 3.0), Point::new(1.0, 4.0)];
    let c: Vec<Point> = vec![Point::new(0.0, 5.0), Point::new(1.0, 6.0)];
    let stacked = stack(&[a, b, c]);

    assert_eq!(stacked.len(), 3);
    assert_eq!(stacked[0][0], Point { x: Coord::Number(0.0), y: 1.0, y0: Some(0.0) });
    assert_eq!(stacked[1][0], Point { x: Coord::Number(0.0), y: 4.0, y0: Some(1.0) });
    assert_eq!(stacked[2][0], Point { x: Coord::Number(0.0), y: 9.0, y0: Some(4.0) });
    assert_eq!(stacked[2][1], Point { x: Coord::Number(1.0), y: 12.0, y0: Some(6.0) });
}

#[test]
fn stack_truncates_to_the_shortest_dataset() {
    let a: Vec<Point> = vec![Point::new(0.0, 1.0), Point::new(1.0, 2.0), Point::new(2.0, 3.0)];
    let b: Vec<Point> = vec![Point::new(0.0, 1.0)];
    let stacked = stack(&[a, b]);
    assert_eq!(stacked[0].len(), 1);
    assert_eq!(stacked[1].len(), 1);
    assert!(stack(&[]).is_empty());
}

#[test]
fn y_window_follows_the_x_window() {
    // y == x, so narrowing the x window must narrow the fitted y domain.
    let data: Vec<Point> = (0..=100).map(|i| Point::new(i as f64, i as f64)).collect();
    let mut chart = chart_of(vec![SeriesConfig::line(data)]);
    let [_, hi_before] = y_domain(&chart);

    let px = chart.scales().x.to_pixels(&Coord::Number(10.0));
    chart.zoom(8.0, px);
    let [_, hi_after] = y_domain(&chart);
    assert!(
        hi_after < hi_before * 0.5,
        "y refit to the window: {hi_after} vs {hi_before}"
    );
}

#[test]
fn explicit_y_bounds_override_the_fit() {
    let data: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 50.0 + i as f64)).collect();
    let mut chart = chart_of(vec![SeriesConfig::line(data)]);
    chart.update_axis(
        AxisSide::Y,
        AxisConfig { min: Some(-5.0), max: Some(200.0), ..Default::default() },
    );
    assert_eq!(y_domain(&chart), [-5.0, 200.0]);
}
