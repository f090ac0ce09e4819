// File: crates/strata-core/tests/scene.rs
// Purpose: Scene-graph ordering, resize propagation, and compositing.

use skia_safe as skia;
use strata_core::config::AxisStyle;
use strata_core::layer::DrawContext;
use strata_core::types::Insets;
use strata_core::{Layer, Plane, Scale, Scales, SceneGraph, TextShaper, Theme};

struct SolidLayer {
    plane: Plane,
    color: skia::Color,
}

impl SolidLayer {
    fn new(z_index: i32, color: skia::Color) -> Self {
        Self { plane: Plane::new(z_index), color }
    }
}

impl Layer for SolidLayer {
    fn plane(&self) -> &Plane {
        &self.plane
    }

    fn plane_mut(&mut self) -> &mut Plane {
        &mut self.plane
    }

    fn draw(&mut self, _ctx: &DrawContext) {
        if let Some(canvas) = self.plane.canvas() {
            canvas.clear(self.color);
        }
    }
}

fn ctx_parts() -> (Scales, Theme, TextShaper, AxisStyle) {
    let scales = Scales {
        x: Scale::linear([0.0, 1.0], [0.0, 64.0]),
        y: Scale::linear([0.0, 1.0], [64.0, 0.0]),
    };
    (scales, Theme::light(), TextShaper::new(), AxisStyle::default())
}

fn center_pixel(scene: &mut SceneGraph) -> image::Rgba<u8> {
    let mut surface = skia::surfaces::raster_n32_premul((64, 64)).expect("surface");
    let canvas = surface.canvas();
    canvas.clear(skia::Color::WHITE);
    scene.composite(canvas);
    let snapshot = surface.image_snapshot();
    #[allow(deprecated)]
    let data = snapshot.encode_to_data(skia::EncodedImageFormat::PNG).expect("encode");
    let img = image::load_from_memory(data.as_bytes()).expect("decode").to_rgba8();
    *img.get_pixel(32, 32)
}

#[test]
fn layers_sort_ascending_by_z() {
    let mut scene = SceneGraph::new(64.0, 64.0);
    scene.add_layer(Box::new(SolidLayer::new(10, skia::Color::RED)));
    scene.add_layer(Box::new(SolidLayer::new(0, skia::Color::GREEN)));
    scene.add_layer(Box::new(SolidLayer::new(5, skia::Color::BLUE)));

    let zs: Vec<i32> = scene.layers().map(|l| l.plane().z_index).collect();
    assert_eq!(zs, vec![0, 5, 10]);
}

#[test]
fn top_layer_wins_the_composite() {
    let mut scene = SceneGraph::new(64.0, 64.0);
    let _low = scene.add_layer(Box::new(SolidLayer::new(0, skia::Color::GREEN)));
    let top = scene.add_layer(Box::new(SolidLayer::new(10, skia::Color::RED)));

    let (scales, theme, shaper, axis) = ctx_parts();
    let ctx = DrawContext {
        scales: &scales,
        theme: &theme,
        shaper: &shaper,
        axis: &axis,
        insets: Insets::default(),
        width: 64.0,
        height: 64.0,
    };
    scene.render(&ctx);
    assert_eq!(center_pixel(&mut scene), image::Rgba([255, 0, 0, 255]));

    // Removing the top layer exposes the one below.
    scene.remove_layer(top);
    scene.render(&ctx);
    assert_eq!(center_pixel(&mut scene), image::Rgba([0, 255, 0, 255]));
}

#[test]
fn hidden_layers_are_skipped() {
    let mut scene = SceneGraph::new(64.0, 64.0);
    let low = scene.add_layer(Box::new(SolidLayer::new(0, skia::Color::GREEN)));
    let top = scene.add_layer(Box::new(SolidLayer::new(10, skia::Color::RED)));

    let (scales, theme, shaper, axis) = ctx_parts();
    let ctx = DrawContext {
        scales: &scales,
        theme: &theme,
        shaper: &shaper,
        axis: &axis,
        insets: Insets::default(),
        width: 64.0,
        height: 64.0,
    };
    scene.render(&ctx);
    scene.layer_mut(top).unwrap().plane_mut().visible = false;
    assert_eq!(center_pixel(&mut scene), image::Rgba([0, 255, 0, 255]));
    assert!(scene.layer(low).unwrap().plane().visible);
}

#[test]
fn resize_propagates_to_every_plane() {
    let mut scene = SceneGraph::new(64.0, 64.0);
    let id = scene.add_layer(Box::new(SolidLayer::new(0, skia::Color::GREEN)));
    assert_eq!(scene.layer(id).unwrap().plane().width, 64.0);

    scene.set_size(128.0, 96.0);
    let plane = scene.layer(id).unwrap().plane();
    assert_eq!((plane.width, plane.height), (128.0, 96.0));

    scene.set_pixel_ratio(2.0);
    assert_eq!(scene.layer(id).unwrap().plane().pixel_ratio, 2.0);
}
