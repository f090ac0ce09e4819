// File: crates/strata-core/src/series/pie.rs
// Summary: Pie/donut series: proportional slices from the top, polar hit testing.

use skia_safe as skia;

use crate::animate::ease_out_cubic;
use crate::layer::{DrawContext, Layer};
use crate::scale::Scales;
use crate::types::{PieDatum, Point};

use super::{Hit, SeriesBase, SeriesKind, SeriesRenderer};

/// Fraction of the half-extent used as the pie radius.
const RADIUS_RATIO: f32 = 0.8;

pub struct PieSeries {
    base: SeriesBase,
    slices: Vec<PieDatum>,
    /// 0 draws a full pie; > 0 a ring of that inner-radius ratio.
    pub inner_radius: f32,
}

impl PieSeries {
    pub fn new(z_index: i32) -> Self {
        Self {
            base: SeriesBase::new(z_index),
            slices: Vec::new(),
            inner_radius: 0.0,
        }
    }

    pub fn set_slices(&mut self, slices: Vec<PieDatum>) {
        if slices.iter().map(|s| s.value).sum::<f64>() <= 0.0 && !slices.is_empty() {
            tracing::warn!("pie series with non-positive total value will not render");
        }
        self.slices = slices;
        self.base.progress = 0.0;
    }

    pub fn slices(&self) -> &[PieDatum] {
        &self.slices
    }

    fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    fn geometry(&self) -> (f32, f32, f32) {
        let cx = self.base.plane.width / 2.0;
        let cy = self.base.plane.height / 2.0;
        (cx, cy, cx.min(cy) * RADIUS_RATIO)
    }
}

impl Layer for PieSeries {
    fn plane(&self) -> &crate::layer::Plane {
        &self.base.plane
    }

    fn plane_mut(&mut self) -> &mut crate::layer::Plane {
        &mut self.base.plane
    }

    fn draw(&mut self, ctx: &DrawContext) {
        let total = self.total();
        let (cx, cy, radius) = self.geometry();
        let inner = radius * self.inner_radius.clamp(0.0, 0.95);
        // Entrance animation sweeps the whole pie in clockwise.
        let sweep_scale = ease_out_cubic(self.base.progress) as f64;
        let palette = ctx.theme.palette;
        let colors: Vec<skia::Color> = self
            .slices
            .iter()
            .enumerate()
            .map(|(i, s)| s.color.unwrap_or(palette[i % palette.len()]))
            .collect();
        let values: Vec<f64> = self.slices.iter().map(|s| s.value).collect();

        let Some(canvas) = self.base.plane.canvas() else {
            return;
        };
        canvas.clear(skia::Color::TRANSPARENT);
        if values.is_empty() || total <= 0.0 {
            return;
        }

        let outer_rect = skia::Rect::from_xywh(cx - radius, cy - radius, radius * 2.0, radius * 2.0);
        let inner_rect = skia::Rect::from_xywh(cx - inner, cy - inner, inner * 2.0, inner * 2.0);

        let mut start_deg = -90.0f32; // clockwise from the top
        for (value, color) in values.iter().zip(colors) {
            let sweep_deg = ((value / total) * 360.0 * sweep_scale) as f32;
            if sweep_deg <= 0.0 {
                continue;
            }

            let mut path = skia::Path::new();
            if inner > 0.0 {
                // Ring segment: outer arc forward, inner arc in reverse,
                // closed. A single path avoids punching a hole over
                // whatever sits behind this layer.
                path.arc_to(outer_rect, start_deg, sweep_deg, true);
                path.arc_to(inner_rect, start_deg + sweep_deg, -sweep_deg, false);
            } else {
                path.move_to((cx, cy));
                path.arc_to(outer_rect, start_deg, sweep_deg, false);
            }
            path.close();

            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_color(color);
            canvas.draw_path(&path, &fill);

            start_deg += sweep_deg;
        }
    }

    fn as_series(&self) -> Option<&dyn SeriesRenderer> {
        Some(self)
    }

    fn as_series_mut(&mut self) -> Option<&mut dyn SeriesRenderer> {
        Some(self)
    }
}

impl SeriesRenderer for PieSeries {
    fn kind(&self) -> SeriesKind {
        SeriesKind::Pie
    }

    fn base(&self) -> &SeriesBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SeriesBase {
        &mut self.base
    }

    // Pie data comes in through `set_slices`; the cartesian point model
    // does not apply.
    fn set_data(&mut self, _data: Vec<Point>) {}

    fn refresh_visible(&mut self) {}

    fn get_data_at(&self, x: f32, y: f32, _scales: &Scales) -> Option<Hit> {
        let total = self.total();
        if total <= 0.0 {
            return None;
        }
        let (cx, cy, radius) = self.geometry();
        let dx = x - cx;
        let dy = y - cy;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > radius || (self.inner_radius > 0.0 && dist < radius * self.inner_radius) {
            return None;
        }

        // Normalize the pointer angle to [0, 2pi) measured clockwise from
        // the top, matching the slice layout.
        let mut angle = dy.atan2(dx) as f64 + std::f64::consts::FRAC_PI_2;
        if angle < 0.0 {
            angle += std::f64::consts::TAU;
        }

        let mut cumulative = 0.0f64;
        for s in &self.slices {
            let sweep = (s.value / total) * std::f64::consts::TAU;
            if angle >= cumulative && angle < cumulative + sweep {
                return Some(Hit::Slice { label: s.label.clone(), value: s.value });
            }
            cumulative += sweep;
        }
        None
    }
}
