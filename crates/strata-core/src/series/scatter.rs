// File: crates/strata-core/src/series/scatter.rs
// Summary: Scatter series: fixed-radius discs, nearest-by-distance hit testing.

use skia_safe as skia;

use crate::layer::{DrawContext, Layer};
use crate::scale::Scales;
use crate::types::HIT_TOLERANCE_PX;

use super::{Hit, SeriesBase, SeriesKind, SeriesRenderer};

pub struct ScatterSeries {
    base: SeriesBase,
    pub radius: f32,
}

impl ScatterSeries {
    pub fn new(z_index: i32) -> Self {
        Self { base: SeriesBase::new(z_index), radius: 4.0 }
    }
}

impl Layer for ScatterSeries {
    fn plane(&self) -> &crate::layer::Plane {
        &self.base.plane
    }

    fn plane_mut(&mut self) -> &mut crate::layer::Plane {
        &mut self.base.plane
    }

    fn draw(&mut self, ctx: &DrawContext) {
        let width = self.base.plane.width;
        let height = self.base.plane.height;
        let radius = self.radius;
        let color = self.base.color.unwrap_or(skia::Color::BLACK);
        let scales = ctx.scales;
        let points = &self.base.visible_data;
        let Some(canvas) = self.base.plane.canvas() else {
            return;
        };
        canvas.clear(skia::Color::TRANSPARENT);
        if points.is_empty() {
            return;
        }

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(color);
        for p in points {
            let x = scales.x.to_pixels(&p.x);
            let y = scales.y.to_pixels_f64(p.y);
            if x < 0.0 || x > width || y < 0.0 || y > height {
                continue;
            }
            canvas.draw_circle((x, y), radius, &fill);
        }
    }

    fn as_series(&self) -> Option<&dyn SeriesRenderer> {
        Some(self)
    }

    fn as_series_mut(&mut self) -> Option<&mut dyn SeriesRenderer> {
        Some(self)
    }
}

impl SeriesRenderer for ScatterSeries {
    fn kind(&self) -> SeriesKind {
        SeriesKind::Scatter
    }

    fn base(&self) -> &SeriesBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SeriesBase {
        &mut self.base
    }

    fn get_data_at(&self, x: f32, y: f32, scales: &Scales) -> Option<Hit> {
        // Nearest 2D pixel distance over the decimated set; no spatial
        // index, the post-LTTB point count keeps a scan cheap.
        let mut closest = None;
        let mut min_dist = f32::INFINITY;
        for p in &self.base.visible_data {
            let px = scales.x.to_pixels(&p.x);
            let py = scales.y.to_pixels_f64(p.y);
            let dist = ((px - x).powi(2) + (py - y).powi(2)).sqrt();
            if dist < min_dist && dist < HIT_TOLERANCE_PX {
                min_dist = dist;
                closest = Some(p.clone());
            }
        }
        closest.map(Hit::Point)
    }
}
