// File: crates/strata-core/src/interaction.rs
// Summary: Pointer/wheel input translated into pan/zoom/hover calls.

use crate::chart::{Chart, Hover};

/// Wheel-delta to zoom-factor conversion intensity.
const ZOOM_INTENSITY: f64 = 0.001;

/// Host input with client-relative coordinates in logical pixels.
#[derive(Clone, Copy, Debug)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Wheel { delta_y: f64, x: f32, y: f32 },
}

/// Owns only drag state; every event is translated synchronously into a
/// chart call. Re-entry safe: the drag flag is overwritten by each event.
pub struct InteractionController {
    dragging: bool,
    last_x: f32,
    last_y: f32,
}

impl InteractionController {
    pub fn new() -> Self {
        Self { dragging: false, last_x: 0.0, last_y: 0.0 }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Feed one event; returns the hover report for non-drag moves.
    pub fn handle(&mut self, chart: &mut Chart, event: PointerEvent) -> Option<Hover> {
        match event {
            PointerEvent::Down { x, y } => {
                self.dragging = true;
                self.last_x = x;
                self.last_y = y;
                None
            }
            PointerEvent::Move { x, y } => {
                if self.dragging {
                    let dx = x - self.last_x;
                    let dy = y - self.last_y;
                    chart.pan(dx, dy);
                    self.last_x = x;
                    self.last_y = y;
                    None
                } else {
                    chart.handle_hover(x, y)
                }
            }
            PointerEvent::Up => {
                self.dragging = false;
                None
            }
            PointerEvent::Wheel { delta_y, x, .. } => {
                let factor = (-delta_y * ZOOM_INTENSITY).exp();
                chart.zoom(factor, x);
                None
            }
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}
