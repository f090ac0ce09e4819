// File: crates/strata-core/src/axis.rs
// Summary: Axis layer: edge lines, tick labels, magnitude/date formatting.

use skia_safe as skia;

use crate::config::AxisKind;
use crate::grid::linspace;
use crate::layer::{DrawContext, Layer, Plane};

const LABEL_SIZE: f32 = 12.0;
const LABEL_GAP: f32 = 8.0;

/// Format a numeric value trimming trailing zeros ("100.00" -> "100").
fn format_trimmed(val: f64, decimals: usize) -> String {
    let s = format!("{val:.decimals$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Abbreviate magnitudes for Y labels: 1_500_000 -> "1.5M", 2_000 -> "2K".
fn format_magnitude(val: f64) -> String {
    let abs = val.abs();
    if abs >= 1_000_000.0 {
        format!("{}M", format_trimmed(val / 1_000_000.0, 1))
    } else if abs >= 1_000.0 {
        format!("{}K", format_trimmed(val / 1_000.0, 1))
    } else if abs >= 1.0 {
        format_trimmed(val, 1)
    } else {
        format_trimmed(val, 2)
    }
}

/// Interpret the value as a millisecond UTC timestamp.
fn format_datetime(val: f64) -> String {
    match chrono::DateTime::from_timestamp_millis(val as i64) {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => format_trimmed(val, 0),
    }
}

pub struct AxisLayer {
    plane: Plane,
}

impl AxisLayer {
    pub fn new(z_index: i32) -> Self {
        Self { plane: Plane::new(z_index) }
    }

    fn format_x(ctx: &DrawContext, val: f64) -> String {
        if let Some(f) = ctx.axis.x_format {
            return f(val);
        }
        match ctx.axis.x_kind {
            AxisKind::DateTime => format_datetime(val),
            _ => format_trimmed(val, 2),
        }
    }

    fn format_y(ctx: &DrawContext, val: f64) -> String {
        match ctx.axis.y_format {
            Some(f) => f(val),
            None => format_magnitude(val),
        }
    }
}

impl Layer for AxisLayer {
    fn plane(&self) -> &Plane {
        &self.plane
    }

    fn plane_mut(&mut self) -> &mut Plane {
        &mut self.plane
    }

    fn draw(&mut self, ctx: &DrawContext) {
        if !ctx.axis.visible {
            self.plane.clear();
            return;
        }

        let scales = ctx.scales;
        let [xr0, xr1] = scales.x.range;
        let [yr0, yr1] = scales.y.range; // yr0 is the bottom (inverted range)
        let label_color = ctx.theme.axis_label;
        let shaper = ctx.shaper;

        // (pixel, text) pairs computed before borrowing the canvas
        let x_labels: Vec<(f32, String)> = if let Some(domain) = scales.x.categories() {
            domain
                .iter()
                .enumerate()
                .map(|(i, label)| (scales.x.to_pixels_f64(i as f64), label.clone()))
                .filter(|(x, _)| *x >= xr0.min(xr1) && *x <= xr0.max(xr1))
                .collect()
        } else if let Some([d0, d1]) = scales.x.domain() {
            linspace(d0, d1, ctx.axis.x_tick_count + 1)
                .into_iter()
                .map(|v| (scales.x.to_pixels_f64(v), Self::format_x(ctx, v)))
                .filter(|(x, _)| *x >= xr0.min(xr1) && *x <= xr0.max(xr1))
                .collect()
        } else {
            Vec::new()
        };

        let y_labels: Vec<(f32, String)> = match scales.y.domain() {
            Some([d0, d1]) => linspace(d0, d1, ctx.axis.y_tick_count + 1)
                .into_iter()
                .map(|v| (scales.y.to_pixels_f64(v), Self::format_y(ctx, v)))
                .filter(|(y, _)| *y >= yr0.min(yr1) && *y <= yr0.max(yr1))
                .collect(),
            None => Vec::new(),
        };

        let Some(canvas) = self.plane.canvas() else {
            return;
        };
        canvas.clear(skia::Color::TRANSPARENT);

        let mut line_paint = skia::Paint::default();
        line_paint.set_color(ctx.theme.axis_line);
        line_paint.set_anti_alias(true);
        line_paint.set_stroke_width(1.0);

        // Axis lines along the plot edges
        canvas.draw_line((xr0, yr0), (xr1, yr0), &line_paint);
        canvas.draw_line((xr0, yr0), (xr0, yr1), &line_paint);

        for (x, text) in &x_labels {
            shaper.draw_centered(canvas, text, *x, yr0 + LABEL_GAP + LABEL_SIZE, LABEL_SIZE, label_color);
        }
        for (y, text) in &y_labels {
            shaper.draw_right(canvas, text, xr0 - LABEL_GAP, y + LABEL_SIZE / 2.0, LABEL_SIZE, label_color);
        }
    }
}
