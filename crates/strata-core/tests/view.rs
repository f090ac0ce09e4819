// File: crates/strata-core/tests/view.rs
// Purpose: Pan/zoom window clamping against the data extent bound.

use strata_core::types::{Coord, Point};
use strata_core::{Chart, ChartConfig, SeriesConfig};

fn line_chart() -> Chart {
    let data: Vec<Point> = (0..=100).map(|i| Point::new(i as f64, (i as f64) * 0.5)).collect();
    Chart::with_config(
        1024.0,
        640.0,
        ChartConfig {
            series: Some(vec![SeriesConfig::line(data)]),
            ..Default::default()
        },
    )
}

fn x_domain(chart: &Chart) -> [f64; 2] {
    chart.scales().x.domain().expect("continuous x domain")
}

#[test]
fn extent_pads_the_upper_edge_only() {
    let chart = line_chart();
    let bound = chart.max_extent().expect("extent derived from data");
    assert_eq!(bound.x[0], 0.0);
    assert!((bound.x[1] - 115.0).abs() < 1e-9, "upper edge padded by 15%");
    assert_eq!(x_domain(&chart), bound.x);
}

#[test]
fn zoom_in_shrinks_the_window_about_the_cursor() {
    let mut chart = line_chart();
    let center_px = chart.scales().x.to_pixels(&Coord::Number(50.0));
    chart.zoom(2.0, center_px);

    let [d0, d1] = x_domain(&chart);
    assert!((d1 - d0 - 57.5).abs() < 1e-6, "span halved: {}", d1 - d0);
    assert!(d0 < 50.0 && 50.0 < d1, "cursor value stays inside the window");
}

#[test]
fn zoom_out_is_clamped_to_the_extent() {
    let mut chart = line_chart();
    let center_px = chart.scales().x.to_pixels(&Coord::Number(50.0));
    chart.zoom(2.0, center_px);
    chart.zoom(0.0001, center_px);

    let bound = chart.max_extent().unwrap();
    let [d0, d1] = x_domain(&chart);
    assert!((d0 - bound.x[0]).abs() < 1e-9);
    assert!((d1 - bound.x[1]).abs() < 1e-9);
}

#[test]
fn zoom_in_is_clamped_to_one_percent() {
    let mut chart = line_chart();
    let center_px = chart.scales().x.to_pixels(&Coord::Number(50.0));
    for _ in 0..50 {
        chart.zoom(4.0, center_px);
    }
    let [d0, d1] = x_domain(&chart);
    assert!((d1 - d0 - 1.15).abs() < 1e-6, "span floor is 1% of the bound");
}

#[test]
fn pan_preserves_span_and_stops_at_the_edges() {
    let mut chart = line_chart();
    let center_px = chart.scales().x.to_pixels(&Coord::Number(50.0));
    chart.zoom(2.0, center_px);
    let span = {
        let [d0, d1] = x_domain(&chart);
        d1 - d0
    };

    // Dragging right moves the window toward smaller x.
    chart.pan(1.0e6, 0.0);
    let [d0, d1] = x_domain(&chart);
    assert_eq!(d0, 0.0);
    assert!((d1 - d0 - span).abs() < 1e-9);

    chart.pan(-1.0e6, 0.0);
    let [d0, d1] = x_domain(&chart);
    assert!((d1 - 115.0).abs() < 1e-9);
    assert!((d1 - d0 - span).abs() < 1e-9);
}

#[test]
fn window_stays_inside_the_extent_under_mixed_input() {
    let mut chart = line_chart();
    let bound = chart.max_extent().unwrap();
    for i in 0..200 {
        let px = 60.0 + (i * 13 % 900) as f32;
        match i % 3 {
            0 => chart.zoom(1.3, px),
            1 => chart.pan(((i as f32) - 100.0) * 7.0, 0.0),
            _ => chart.zoom(0.8, px),
        }
        let [d0, d1] = x_domain(&chart);
        assert!(d0 >= bound.x[0] - 1e-9 && d1 <= bound.x[1] + 1e-9, "window escaped at step {i}");
        assert!(d1 > d0, "window inverted at step {i}");
    }
}

#[test]
fn categorical_axis_ignores_pan_and_zoom() {
    let data = vec![
        Point::new("Q1", 4.0),
        Point::new("Q2", 7.0),
        Point::new("Q3", 5.0),
    ];
    let mut chart = Chart::with_config(
        1024.0,
        640.0,
        ChartConfig {
            series: Some(vec![SeriesConfig::bar(data)]),
            ..Default::default()
        },
    );
    assert!(chart.scales().x.is_categorical());
    let before = chart.scales().x.clone();

    chart.pan(200.0, 0.0);
    chart.zoom(3.0, 500.0);
    assert_eq!(chart.scales().x.categories().unwrap(), before.categories().unwrap());
    assert!(chart.scales().x.is_categorical());
    assert!(chart.max_extent().is_none());
}
