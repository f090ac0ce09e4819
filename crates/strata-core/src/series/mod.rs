// File: crates/strata-core/src/series/mod.rs
// Summary: Shared series contract: data ownership, decimation, hit testing.

mod bar;
mod line;
mod pie;
mod scatter;

pub use bar::BarSeries;
pub use line::LineSeries;
pub use pie::PieSeries;
pub use scatter::ScatterSeries;

use skia_safe as skia;

use crate::downsample::lttb;
use crate::layer::{Layer, Plane};
use crate::scale::Scales;
use crate::types::{Coord, Point, DOWNSAMPLE_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Bar,
    Scatter,
    Pie,
}

/// Result of a hit test against one series.
#[derive(Clone, Debug)]
pub enum Hit {
    Point(Point),
    Slice { label: String, value: f64 },
}

/// Read-only snapshot of one series, as reported by `Chart::get_series_info`.
#[derive(Clone, Debug)]
pub struct SeriesInfo {
    pub index: usize,
    pub name: String,
    pub color: skia::Color,
    pub visible: bool,
    pub kind: SeriesKind,
}

/// State common to every series renderer: the full dataset, the derived
/// (possibly decimated) visible subset, display attributes, and the
/// entrance-animation progress.
pub struct SeriesBase {
    pub plane: Plane,
    pub name: String,
    /// None until the chart auto-assigns a palette color at insertion.
    pub color: Option<skia::Color>,
    pub data: Vec<Point>,
    pub visible_data: Vec<Point>,
    pub progress: f32,
}

impl SeriesBase {
    pub fn new(z_index: i32) -> Self {
        Self {
            plane: Plane::new(z_index),
            name: String::new(),
            color: None,
            data: Vec::new(),
            visible_data: Vec::new(),
            progress: 1.0,
        }
    }

    /// Replace the dataset and rederive the visible subset. Restarts the
    /// entrance animation; the chart pins progress when animation is off.
    pub fn set_data(&mut self, data: Vec<Point>) {
        self.data = data;
        self.refresh_visible();
        self.progress = 0.0;
    }

    /// Recompute `visible_data`: LTTB above the cutover for numeric-x data,
    /// the full set otherwise. Categorical series bypass decimation.
    pub fn refresh_visible(&mut self) {
        let numeric_x = self
            .data
            .first()
            .map_or(false, |p| matches!(p.x, Coord::Number(_)));
        if numeric_x && self.data.len() > DOWNSAMPLE_THRESHOLD {
            self.visible_data = lttb(&self.data, DOWNSAMPLE_THRESHOLD);
        } else {
            self.visible_data = self.data.clone();
        }
    }
}

/// Capability contract shared by all series renderers. Drawing is a
/// stateless repaint from the current visible data and scales, and must
/// tolerate being called with no data (doing nothing).
pub trait SeriesRenderer: Layer {
    fn kind(&self) -> SeriesKind;
    fn base(&self) -> &SeriesBase;
    fn base_mut(&mut self) -> &mut SeriesBase;

    fn set_data(&mut self, data: Vec<Point>) {
        self.base_mut().set_data(data);
    }

    /// Rederive `visible_data` after in-place mutation of `data` (the
    /// chart's coercion pass). Bar and pie series override the policy.
    fn refresh_visible(&mut self) {
        self.base_mut().refresh_visible();
    }

    /// Nearest-match hit test in pixel space.
    fn get_data_at(&self, x: f32, y: f32, scales: &Scales) -> Option<Hit>;

    /// Bar-only baseline policy; see `BarSeries`.
    fn delta_mode(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        &self.base().name
    }

    fn color(&self) -> skia::Color {
        self.base().color.unwrap_or(skia::Color::BLACK)
    }

    fn data(&self) -> &[Point] {
        &self.base().data
    }

    fn visible_data(&self) -> &[Point] {
        &self.base().visible_data
    }

    fn progress(&self) -> f32 {
        self.base().progress
    }

    fn set_progress(&mut self, p: f32) {
        self.base_mut().progress = p.clamp(0.0, 1.0);
    }
}

/// Index of the point whose numeric x is closest to `target`, by binary
/// search. Data must be sorted by x.
pub(crate) fn nearest_index_by_x(points: &[Point], target: f64) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let mut low = 0isize;
    let mut high = points.len() as isize - 1;
    let mut best = 0usize;
    let mut best_diff = f64::INFINITY;
    while low <= high {
        let mid = ((low + high) / 2) as usize;
        let Some(px) = points[mid].x.as_number() else {
            low = mid as isize + 1;
            continue;
        };
        let diff = (px - target).abs();
        if diff < best_diff {
            best_diff = diff;
            best = mid;
        }
        if px < target {
            low = mid as isize + 1;
        } else {
            high = mid as isize - 1;
        }
    }
    Some(best)
}
