// File: crates/strata-core/tests/animation.rs
// Purpose: Entrance animation progress driven by an injected test clock.

use std::cell::Cell;
use std::rc::Rc;

use strata_core::types::Point;
use strata_core::{Chart, ChartConfig, Clock, SeriesConfig};

struct TestClock {
    time: Rc<Cell<f64>>,
}

impl Clock for TestClock {
    fn now(&self) -> f64 {
        self.time.get()
    }
}

fn animated_chart() -> (Chart, Rc<Cell<f64>>) {
    let time = Rc::new(Cell::new(0.0));
    let mut chart = Chart::with_clock(
        1024.0,
        640.0,
        Box::new(TestClock { time: Rc::clone(&time) }),
    );
    let data: Vec<Point> = (0..5).map(|i| Point::new(i as f64, i as f64 + 1.0)).collect();
    chart.update(ChartConfig {
        series: Some(vec![SeriesConfig::bar(data)]),
        animate: Some(true),
        ..Default::default()
    });
    (chart, time)
}

fn progress(chart: &Chart) -> f32 {
    // One series at index 0.
    let info = chart.get_series_info();
    assert_eq!(info.len(), 1);
    chart.series_progress(0).expect("series exists")
}

#[test]
fn progress_tracks_elapsed_time() {
    let (mut chart, time) = animated_chart();

    // The first tick establishes the time reference.
    assert!(chart.tick());
    assert_eq!(progress(&chart), 0.0);

    time.set(0.3);
    assert!(chart.tick());
    assert!((progress(&chart) - 0.5).abs() < 1e-6, "half the entrance duration");

    time.set(0.6);
    assert!(chart.tick());
    assert_eq!(progress(&chart), 1.0);

    // Settled: no further repaints.
    time.set(1.0);
    assert!(!chart.tick());
}

#[test]
fn animation_off_pins_progress() {
    let time = Rc::new(Cell::new(0.0));
    let mut chart = Chart::with_clock(
        1024.0,
        640.0,
        Box::new(TestClock { time: Rc::clone(&time) }),
    );
    chart.update(ChartConfig {
        series: Some(vec![SeriesConfig::line(vec![Point::new(0.0, 1.0)])]),
        ..Default::default()
    });
    assert_eq!(progress(&chart), 1.0);
    assert!(!chart.tick(), "nothing to animate");
}

#[test]
fn new_data_restarts_the_entrance() {
    let (mut chart, time) = animated_chart();
    chart.tick();
    time.set(0.6);
    chart.tick();
    assert_eq!(progress(&chart), 1.0);

    chart.update_series(0, vec![Point::new(0.0, 2.0), Point::new(1.0, 3.0)]);
    assert_eq!(progress(&chart), 0.0);
    assert!(chart.tick());
    time.set(1.2);
    chart.tick();
    assert_eq!(progress(&chart), 1.0);
}
