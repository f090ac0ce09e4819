// File: crates/strata-core/src/layer.rs
// Summary: Drawing planes and the z-ordered compositor over Skia raster surfaces.

use skia_safe as skia;

use crate::config::AxisStyle;
use crate::scale::Scales;
use crate::series::SeriesRenderer;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::Insets;

/// Everything a layer needs to repaint, borrowed from the chart for the
/// duration of one render pass. Scale domain changes made by the chart are
/// therefore visible to every layer's next draw.
pub struct DrawContext<'a> {
    pub scales: &'a Scales,
    pub theme: &'a Theme,
    pub shaper: &'a TextShaper,
    pub axis: &'a AxisStyle,
    pub insets: Insets,
    pub width: f32,
    pub height: f32,
}

impl DrawContext<'_> {
    /// Plot rectangle as (left, top, right, bottom).
    pub fn plot_rect(&self) -> (f32, f32, f32, f32) {
        (
            self.insets.left,
            self.insets.top,
            self.width - self.insets.right,
            self.height - self.insets.bottom,
        )
    }
}

/// An independently drawable plane: a raster surface with a z-order and a
/// visibility flag. The backing surface is recreated at `size * pixel_ratio`
/// on every resize, with the ratio applied as a canvas scale.
pub struct Plane {
    surface: Option<skia::Surface>,
    pub z_index: i32,
    pub visible: bool,
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Plane {
    pub fn new(z_index: i32) -> Self {
        Self {
            surface: None,
            z_index,
            visible: true,
            width: 0.0,
            height: 0.0,
            pixel_ratio: 1.0,
        }
    }

    /// Recreate the backing surface for the new logical size and density.
    /// Surface creation failure leaves the plane empty; drawing becomes a
    /// no-op rather than a failure mid-frame.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.width = width;
        self.height = height;
        self.pixel_ratio = pixel_ratio;
        let pw = (width * pixel_ratio).round().max(1.0) as i32;
        let ph = (height * pixel_ratio).round().max(1.0) as i32;
        self.surface = skia::surfaces::raster_n32_premul((pw, ph));
        if let Some(s) = self.surface.as_mut() {
            s.canvas().scale((pixel_ratio, pixel_ratio));
        }
    }

    pub fn canvas(&mut self) -> Option<&skia::Canvas> {
        self.surface.as_mut().map(|s| s.canvas())
    }

    pub fn clear(&mut self) {
        if let Some(s) = self.surface.as_mut() {
            s.canvas().clear(skia::Color::TRANSPARENT);
        }
    }

    pub fn snapshot(&mut self) -> Option<skia::Image> {
        self.surface.as_mut().map(|s| s.image_snapshot())
    }
}

/// Minimal capability surface shared by every drawable plane. Series layers
/// additionally expose themselves through `as_series` so the chart can reach
/// them without holding a second owning reference.
pub trait Layer {
    fn plane(&self) -> &Plane;
    fn plane_mut(&mut self) -> &mut Plane;
    fn draw(&mut self, ctx: &DrawContext);

    fn as_series(&self) -> Option<&dyn SeriesRenderer> {
        None
    }
    fn as_series_mut(&mut self) -> Option<&mut dyn SeriesRenderer> {
        None
    }
}

/// Stable handle to a layer owned by the scene graph.
pub type LayerId = u64;

/// Ordered layer collection. Layers are kept sorted ascending by z-order
/// (insertion order breaks ties), so later layers draw over earlier ones.
pub struct SceneGraph {
    entries: Vec<(LayerId, Box<dyn Layer>)>,
    next_id: LayerId,
    width: f32,
    height: f32,
    pixel_ratio: f32,
}

impl SceneGraph {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Add a layer, immediately sized to the current scene dimensions.
    pub fn add_layer(&mut self, mut layer: Box<dyn Layer>) -> LayerId {
        let id = self.next_id;
        self.next_id += 1;
        layer.plane_mut().resize(self.width, self.height, self.pixel_ratio);
        self.entries.push((id, layer));
        self.sort_layers();
        id
    }

    pub fn remove_layer(&mut self, id: LayerId) {
        self.entries.retain(|(eid, _)| *eid != id);
    }

    pub fn layer(&self, id: LayerId) -> Option<&dyn Layer> {
        self.entries
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, l)| l.as_ref())
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut (dyn Layer + 'static)> {
        self.entries
            .iter_mut()
            .find(|(eid, _)| *eid == id)
            .map(|(_, l)| l.as_mut())
    }

    pub fn layers(&self) -> impl Iterator<Item = &dyn Layer> {
        self.entries.iter().map(|(_, l)| l.as_ref())
    }

    pub fn layers_mut(&mut self) -> impl Iterator<Item = &mut (dyn Layer + 'static)> {
        self.entries.iter_mut().map(|(_, l)| l.as_mut())
    }

    fn sort_layers(&mut self) {
        self.entries.sort_by_key(|(id, l)| (l.plane().z_index, *id));
    }

    /// Resize every layer to the new scene dimensions.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.resize_layers();
    }

    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        self.pixel_ratio = ratio.max(0.1);
        self.resize_layers();
    }

    fn resize_layers(&mut self) {
        for (_, layer) in &mut self.entries {
            layer.plane_mut().resize(self.width, self.height, self.pixel_ratio);
        }
    }

    /// Repaint every visible layer in ascending z-order.
    pub fn render(&mut self, ctx: &DrawContext) {
        for (_, layer) in &mut self.entries {
            if layer.plane().visible {
                layer.draw(ctx);
            }
        }
    }

    /// Blit every visible layer's surface onto `canvas` in ascending
    /// z-order, so later layers draw over earlier ones.
    pub fn composite(&mut self, canvas: &skia::Canvas) {
        let dst = skia::Rect::from_wh(self.width, self.height);
        let paint = skia::Paint::default();
        for (_, layer) in &mut self.entries {
            if !layer.plane().visible {
                continue;
            }
            if let Some(image) = layer.plane_mut().snapshot() {
                canvas.draw_image_rect(&image, None, dst, &paint);
            }
        }
    }
}
