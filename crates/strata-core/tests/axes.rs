// File: crates/strata-core/tests/axes.rs
// Purpose: Resolved axis visibility defaults and pie interaction with axes.

use strata_core::types::{PieDatum, Point};
use strata_core::{AxisConfig, Chart, ChartConfig, SeriesConfig};

fn slices() -> Vec<PieDatum> {
    vec![PieDatum::new("a", 1.0), PieDatum::new("b", 2.0)]
}

fn line_data() -> Vec<Point> {
    vec![Point::new(0.0, 1.0), Point::new(1.0, 2.0)]
}

#[test]
fn cartesian_charts_show_axes_by_default() {
    let chart = Chart::with_config(
        800.0,
        500.0,
        ChartConfig {
            series: Some(vec![SeriesConfig::line(line_data())]),
            ..Default::default()
        },
    );
    assert!(chart.axis_style().visible);
}

#[test]
fn any_pie_series_hides_the_axes_by_default() {
    let pie_only = Chart::with_config(
        400.0,
        400.0,
        ChartConfig {
            series: Some(vec![SeriesConfig::pie(slices())]),
            ..Default::default()
        },
    );
    assert!(!pie_only.axis_style().visible);

    let mixed = Chart::with_config(
        800.0,
        500.0,
        ChartConfig {
            series: Some(vec![SeriesConfig::line(line_data()), SeriesConfig::pie(slices())]),
            ..Default::default()
        },
    );
    assert!(!mixed.axis_style().visible);
}

#[test]
fn explicit_visibility_overrides_the_pie_default() {
    let chart = Chart::with_config(
        800.0,
        500.0,
        ChartConfig {
            series: Some(vec![SeriesConfig::line(line_data()), SeriesConfig::pie(slices())]),
            x_axis: Some(AxisConfig { visible: Some(true), ..Default::default() }),
            ..Default::default()
        },
    );
    assert!(chart.axis_style().visible);
}
