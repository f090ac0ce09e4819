// File: crates/strata-core/tests/hover.rs
// Purpose: Hover hit testing across series and pie slices, via the controller.

use strata_core::types::{Coord, PieDatum, Point};
use strata_core::{
    Chart, ChartConfig, Hover, InteractionController, PointerEvent, SeriesConfig,
};

fn two_line_chart() -> Chart {
    let a: Vec<Point> = (0..=10).map(|i| Point::new(i as f64, i as f64)).collect();
    let b: Vec<Point> = (0..=10).map(|i| Point::new(i as f64, 10.0 - i as f64)).collect();
    Chart::with_config(
        1024.0,
        640.0,
        ChartConfig {
            series: Some(vec![
                SeriesConfig::line(a).with_name("up"),
                SeriesConfig::line(b).with_name("down"),
            ]),
            ..Default::default()
        },
    )
}

#[test]
fn hover_reports_every_series_at_the_anchor_x() {
    let chart = two_line_chart();
    let px = chart.scales().x.to_pixels(&Coord::Number(5.0));
    let hover = chart.handle_hover(px, 320.0).expect("hover inside the plot");
    match hover {
        Hover::Points { x, entries } => {
            assert_eq!(x, Coord::Number(5.0));
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].name, "up");
            assert_eq!(entries[0].point.y, 5.0);
            assert_eq!(entries[1].name, "down");
            assert_eq!(entries[1].point.y, 5.0);
        }
        other => panic!("expected a point hover, got {other:?}"),
    }
}

#[test]
fn hover_outside_the_plot_reports_nothing() {
    let chart = two_line_chart();
    assert!(chart.handle_hover(5.0, 5.0).is_none());
    assert!(chart.handle_hover(1020.0, 630.0).is_none());
}

#[test]
fn hidden_series_are_excluded() {
    let mut chart = two_line_chart();
    chart.set_series_visibility(1, false);
    let px = chart.scales().x.to_pixels(&Coord::Number(5.0));
    match chart.handle_hover(px, 320.0).expect("hover") {
        Hover::Points { entries, .. } => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].name, "up");
        }
        other => panic!("expected a point hover, got {other:?}"),
    }
}

#[test]
fn pie_hover_names_the_slice() {
    let mut chart = Chart::with_config(
        1024.0,
        640.0,
        ChartConfig {
            series: Some(vec![SeriesConfig::pie(vec![
                PieDatum::new("alpha", 30.0),
                PieDatum::new("beta", 70.0),
            ])
            .with_name("share")]),
            ..Default::default()
        },
    );
    // Surfaces are sized to the scene, so the pie centers on (512, 320).
    // Directly right of center is 90 degrees clockwise from the top,
    // inside the first slice (30% of 360 = 108 degrees).
    let hover = chart.handle_hover(512.0 + 100.0, 320.0).expect("slice under pointer");
    match hover {
        Hover::Slice { series, label, value } => {
            assert_eq!(series, "share");
            assert_eq!(label, "alpha");
            assert_eq!(value, 30.0);
        }
        other => panic!("expected a slice hover, got {other:?}"),
    }
    // Directly left of center is 270 degrees, inside the second slice.
    match chart.handle_hover(512.0 - 100.0, 320.0).expect("slice") {
        Hover::Slice { label, .. } => assert_eq!(label, "beta"),
        other => panic!("expected a slice hover, got {other:?}"),
    }
    // The dead center of a donut misses.
    chart.update(ChartConfig {
        series: Some(vec![SeriesConfig::Pie {
            data: vec![PieDatum::new("alpha", 1.0)],
            color: None,
            name: None,
            visible: true,
            inner_radius: 0.5,
        }]),
        ..Default::default()
    });
    assert!(chart.handle_hover(512.0, 320.0).is_none());
}

#[test]
fn controller_routes_drag_to_pan_and_move_to_hover() {
    let mut chart = two_line_chart();
    let mut controller = InteractionController::new();
    let before = chart.scales().x.domain().unwrap();

    // Zoom in first so panning has room.
    controller.handle(&mut chart, PointerEvent::Wheel { delta_y: -800.0, x: 512.0, y: 320.0 });
    let zoomed = chart.scales().x.domain().unwrap();
    assert!(zoomed[1] - zoomed[0] < before[1] - before[0]);

    controller.handle(&mut chart, PointerEvent::Down { x: 500.0, y: 300.0 });
    assert!(controller.is_dragging());
    let hover = controller.handle(&mut chart, PointerEvent::Move { x: 450.0, y: 300.0 });
    assert!(hover.is_none(), "drag moves pan, they do not hover");
    let panned = chart.scales().x.domain().unwrap();
    assert!(panned[0] > zoomed[0], "dragging left advances the window");

    controller.handle(&mut chart, PointerEvent::Up);
    assert!(!controller.is_dragging());
    let px = chart.scales().x.to_pixels(&Coord::Number(5.0));
    let hover = controller.handle(&mut chart, PointerEvent::Move { x: px, y: 320.0 });
    assert!(hover.is_some(), "non-drag moves hover");
}
