// File: crates/strata-core/src/series/bar.rs
// Summary: Bar series: band-width derivation, stacking/delta baselines, rect hit test.

use skia_safe as skia;

use crate::animate::ease_out_cubic;
use crate::layer::{DrawContext, Layer};
use crate::scale::Scales;
use crate::types::Point;

use super::{Hit, SeriesBase, SeriesKind, SeriesRenderer};

pub struct BarSeries {
    base: SeriesBase,
    /// Bar width as a fraction of one band (0..=1).
    pub bar_width: f32,
    /// Anchor the baseline at the (buffered) data minimum instead of zero.
    pub delta: bool,
}

impl BarSeries {
    pub fn new(z_index: i32) -> Self {
        Self {
            base: SeriesBase::new(z_index),
            bar_width: 0.8,
            delta: false,
        }
    }

    /// Pixel width of one band. Continuous axes derive it from the minimum
    /// observed x-spacing; categorical axes divide the range evenly. A
    /// degenerate dataset (zero or one point) falls back to slot width 1.
    fn slot_width(&self, scales: &Scales) -> f32 {
        let points = &self.base.visible_data;
        if let Some(domain) = scales.x.categories() {
            let span = scales.x.pixel_span().abs();
            return (span / domain.len().max(1) as f32).max(1.0);
        }

        let mut min_diff = f64::INFINITY;
        for pair in points.windows(2) {
            if let (Some(a), Some(b)) = (pair[0].x.as_number(), pair[1].x.as_number()) {
                let diff = b - a;
                if diff < min_diff {
                    min_diff = diff;
                }
            }
        }
        if !min_diff.is_finite() {
            min_diff = 1.0;
        }
        let p0 = scales.x.to_pixels_f64(0.0);
        let p1 = scales.x.to_pixels_f64(min_diff);
        (p1 - p0).abs().max(1.0)
    }

    /// Baseline value for one bar: the stacked `y0` when present, otherwise
    /// the Y domain's lower bound clamped up to zero, or the raw lower bound
    /// in delta mode (which `update_y_scale` biases just below the minimum).
    fn baseline_for(&self, p: &Point, scales: &Scales) -> f64 {
        if let Some(y0) = p.y0 {
            return y0;
        }
        let lower = scales.y.domain().map(|d| d[0]).unwrap_or(0.0);
        if self.delta {
            lower
        } else {
            lower.max(0.0)
        }
    }
}

impl Layer for BarSeries {
    fn plane(&self) -> &crate::layer::Plane {
        &self.base.plane
    }

    fn plane_mut(&mut self) -> &mut crate::layer::Plane {
        &mut self.base.plane
    }

    fn draw(&mut self, ctx: &DrawContext) {
        let scales = ctx.scales;
        let bar_px = self.slot_width(scales) * self.bar_width;
        let eased = ease_out_cubic(self.base.progress);
        let color = self.base.color.unwrap_or(skia::Color::BLACK);

        let mut rects = Vec::with_capacity(self.base.visible_data.len());
        for p in &self.base.visible_data {
            let x = scales.x.to_pixels(&p.x);
            let y_base = scales.y.to_pixels_f64(self.baseline_for(p, scales));
            let y_full = scales.y.to_pixels_f64(p.y);
            // Entrance animation grows bars out of the baseline.
            let y = y_base + (y_full - y_base) * eased;
            let half = bar_px / 2.0;
            rects.push(skia::Rect::from_ltrb(
                x - half,
                y.min(y_base),
                x + half,
                y.max(y_base),
            ));
        }

        let Some(canvas) = self.base.plane.canvas() else {
            return;
        };
        canvas.clear(skia::Color::TRANSPARENT);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(color);
        for rect in rects {
            canvas.draw_rect(rect, &fill);
        }
    }

    fn as_series(&self) -> Option<&dyn SeriesRenderer> {
        Some(self)
    }

    fn as_series_mut(&mut self) -> Option<&mut dyn SeriesRenderer> {
        Some(self)
    }
}

impl SeriesRenderer for BarSeries {
    fn kind(&self) -> SeriesKind {
        SeriesKind::Bar
    }

    fn base(&self) -> &SeriesBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SeriesBase {
        &mut self.base
    }

    // Bars never downsample: every bar is semantically significant.
    fn set_data(&mut self, data: Vec<Point>) {
        self.base.data = data;
        self.base.visible_data = self.base.data.clone();
        self.base.progress = 0.0;
    }

    fn refresh_visible(&mut self) {
        self.base.visible_data = self.base.data.clone();
    }

    fn delta_mode(&self) -> bool {
        self.delta
    }

    fn get_data_at(&self, x: f32, y: f32, scales: &Scales) -> Option<Hit> {
        let half = self.slot_width(scales) * self.bar_width / 2.0;
        for p in &self.base.visible_data {
            let px = scales.x.to_pixels(&p.x);
            if x < px - half || x > px + half {
                continue;
            }
            let py = scales.y.to_pixels_f64(p.y);
            let py0 = scales.y.to_pixels_f64(self.baseline_for(p, scales));
            if y >= py.min(py0) && y <= py.max(py0) {
                return Some(Hit::Point(p.clone()));
            }
        }
        None
    }
}
