// File: crates/strata-core/tests/layout.rs
// Purpose: Scrollable categorical layout widening and scale-range tracking.

use strata_core::types::Point;
use strata_core::{AxisConfig, Chart, ChartConfig, SeriesConfig};

fn categories(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(format!("cat{i}").as_str(), i as f64))
        .collect()
}

fn chart(n: usize, scrollable: Option<bool>) -> Chart {
    Chart::with_config(
        400.0,
        300.0,
        ChartConfig {
            series: Some(vec![SeriesConfig::bar(categories(n))]),
            x_axis: Some(AxisConfig { scrollable, ..Default::default() }),
            ..Default::default()
        },
    )
}

#[test]
fn scrollable_categorical_layout_widens_past_the_viewport() {
    let chart = chart(40, Some(true));
    // 40 bands at the 40px minimum band width plus the horizontal insets.
    let (content_w, content_h) = chart.content_size();
    assert_eq!(content_w, 60.0 + 20.0 + 40.0 * 40.0);
    assert_eq!(content_h, 300.0);
    assert!(content_w > chart.viewport().0);
    assert_eq!(chart.viewport(), (400.0, 300.0));
    // Scale ranges track the widened layout, not the viewport.
    assert_eq!(chart.scales().x.range, [60.0, content_w - 20.0]);
    assert_eq!(chart.scales().y.range, [260.0, 20.0]);
}

#[test]
fn few_categories_keep_a_scrollable_layout_at_the_viewport() {
    let chart = chart(5, Some(true));
    assert_eq!(chart.content_size(), (400.0, 300.0));
    assert_eq!(chart.scales().x.range, [60.0, 380.0]);
}

#[test]
fn non_scrollable_layout_never_widens() {
    let chart = chart(40, None);
    assert_eq!(chart.content_size(), (400.0, 300.0));
    assert_eq!(chart.scales().x.range, [60.0, 380.0]);
}
