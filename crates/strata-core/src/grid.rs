// File: crates/strata-core/src/grid.rs
// Summary: Grid layer and tick-position helpers.

use skia_safe as skia;

use crate::layer::{DrawContext, Layer, Plane};

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Vertical and horizontal rules at tick positions across the plot rect.
/// Hidden by default; toggled through `Chart::set_grid_visible`.
pub struct GridLayer {
    plane: Plane,
}

impl GridLayer {
    pub fn new(z_index: i32) -> Self {
        let mut plane = Plane::new(z_index);
        plane.visible = false;
        Self { plane }
    }

    fn x_tick_pixels(&self, ctx: &DrawContext) -> Vec<f32> {
        let scales = ctx.scales;
        if let Some(domain) = scales.x.categories() {
            return (0..domain.len())
                .map(|i| scales.x.to_pixels_f64(i as f64))
                .collect();
        }
        let Some([d0, d1]) = scales.x.domain() else {
            return Vec::new();
        };
        linspace(d0, d1, ctx.axis.x_tick_count + 1)
            .into_iter()
            .map(|v| scales.x.to_pixels_f64(v))
            .collect()
    }
}

impl Layer for GridLayer {
    fn plane(&self) -> &Plane {
        &self.plane
    }

    fn plane_mut(&mut self) -> &mut Plane {
        &mut self.plane
    }

    fn draw(&mut self, ctx: &DrawContext) {
        let x_ticks = self.x_tick_pixels(ctx);
        let scales = ctx.scales;
        let [yr0, yr1] = scales.y.range;
        let [xr0, xr1] = scales.x.range;
        let y_ticks: Vec<f32> = match scales.y.domain() {
            Some([d0, d1]) => linspace(d0, d1, ctx.axis.y_tick_count + 1)
                .into_iter()
                .map(|v| scales.y.to_pixels_f64(v))
                .collect(),
            None => Vec::new(),
        };

        let Some(canvas) = self.plane.canvas() else {
            return;
        };
        canvas.clear(skia::Color::TRANSPARENT);

        let mut paint = skia::Paint::default();
        paint.set_color(ctx.theme.grid);
        paint.set_anti_alias(true);
        paint.set_stroke_width(1.0);

        for x in x_ticks {
            canvas.draw_line((x, yr0), (x, yr1), &paint);
        }
        for y in y_ticks {
            canvas.draw_line((xr0, y), (xr1, y), &paint);
        }
    }
}
