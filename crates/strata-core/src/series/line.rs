// File: crates/strata-core/src/series/line.rs
// Summary: Polyline series with per-point markers and nearest-by-x hit testing.

use skia_safe as skia;

use crate::layer::{DrawContext, Layer};
use crate::scale::Scales;
use crate::types::HIT_TOLERANCE_PX;

use super::{nearest_index_by_x, Hit, SeriesBase, SeriesKind, SeriesRenderer};

const MARKER_RADIUS: f32 = 3.0;

pub struct LineSeries {
    base: SeriesBase,
}

impl LineSeries {
    pub fn new(z_index: i32) -> Self {
        Self { base: SeriesBase::new(z_index) }
    }
}

impl Layer for LineSeries {
    fn plane(&self) -> &crate::layer::Plane {
        &self.base.plane
    }

    fn plane_mut(&mut self) -> &mut crate::layer::Plane {
        &mut self.base.plane
    }

    fn draw(&mut self, ctx: &DrawContext) {
        let width = self.base.plane.width;
        let ring = ctx.theme.marker_ring;
        let color = self.base.color.unwrap_or(skia::Color::BLACK);
        let points = &self.base.visible_data;
        let scales = ctx.scales;
        let Some(canvas) = self.base.plane.canvas() else {
            return;
        };
        canvas.clear(skia::Color::TRANSPARENT);
        if points.is_empty() {
            return;
        }

        let mut path = skia::Path::new();
        let first = &points[0];
        path.move_to((scales.x.to_pixels(&first.x), scales.y.to_pixels_f64(first.y)));
        for p in points.iter().skip(1) {
            path.line_to((scales.x.to_pixels(&p.x), scales.y.to_pixels_f64(p.y)));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(color);
        canvas.draw_path(&path, &stroke);

        // Markers
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(color);
        let mut ring_paint = skia::Paint::default();
        ring_paint.set_anti_alias(true);
        ring_paint.set_style(skia::paint::Style::Stroke);
        ring_paint.set_stroke_width(1.0);
        ring_paint.set_color(ring);

        for p in points {
            let x = scales.x.to_pixels(&p.x);
            if x < 0.0 || x > width {
                continue;
            }
            let y = scales.y.to_pixels_f64(p.y);
            canvas.draw_circle((x, y), MARKER_RADIUS, &fill);
            canvas.draw_circle((x, y), MARKER_RADIUS, &ring_paint);
        }
    }

    fn as_series(&self) -> Option<&dyn SeriesRenderer> {
        Some(self)
    }

    fn as_series_mut(&mut self) -> Option<&mut dyn SeriesRenderer> {
        Some(self)
    }
}

impl SeriesRenderer for LineSeries {
    fn kind(&self) -> SeriesKind {
        SeriesKind::Line
    }

    fn base(&self) -> &SeriesBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SeriesBase {
        &mut self.base
    }

    fn get_data_at(&self, x: f32, _y: f32, scales: &Scales) -> Option<Hit> {
        let points = &self.base.visible_data;
        if points.is_empty() {
            return None;
        }

        if scales.x.is_categorical() {
            // Band positions are not monotone in label order; linear scan.
            let mut closest: Option<&crate::types::Point> = None;
            let mut min_diff = f32::INFINITY;
            for p in points {
                let px = scales.x.to_pixels(&p.x);
                let diff = (px - x).abs();
                if diff < min_diff && diff < HIT_TOLERANCE_PX {
                    min_diff = diff;
                    closest = Some(p);
                }
            }
            return closest.cloned().map(Hit::Point);
        }

        let domain_x = scales.x.invert(x).as_number()?;
        let idx = nearest_index_by_x(points, domain_x)?;
        let closest = &points[idx];
        let pixel_x = scales.x.to_pixels(&closest.x);
        if (pixel_x - x).abs() > HIT_TOLERANCE_PX {
            return None;
        }
        Some(Hit::Point(closest.clone()))
    }
}
