// File: crates/strata-core/src/stack.rs
// Summary: Stacked-series preprocessing: cumulative y with per-point baselines.

use crate::types::Point;

/// Stack datasets bottom-up: each output point's `y` is the running total at
/// its index and `y0` the total below it, so series `j` renders on top of
/// series `j-1`. Datasets are expected to share length and x values; extra
/// trailing points are ignored.
pub fn stack(datasets: &[Vec<Point>]) -> Vec<Vec<Point>> {
    let Some(len) = datasets.iter().map(|d| d.len()).min() else {
        return Vec::new();
    };

    let mut stacked: Vec<Vec<Point>> = datasets.iter().map(|_| Vec::with_capacity(len)).collect();

    for i in 0..len {
        let mut current = 0.0f64;
        for (j, dataset) in datasets.iter().enumerate() {
            let p = &dataset[i];
            let y0 = current;
            let y1 = current + p.y;
            stacked[j].push(Point { x: p.x.clone(), y: y1, y0: Some(y0) });
            current = y1;
        }
    }

    stacked
}
