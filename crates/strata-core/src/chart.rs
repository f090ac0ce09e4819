// File: crates/strata-core/src/chart.rs
// Summary: Chart engine: layer orchestration, scale fitting, pan/zoom, hover, export.

use std::path::Path;

use skia_safe as skia;
use tracing::{debug, warn};

use crate::animate::{Animator, Clock, SystemClock, ENTRANCE_DURATION};
use crate::axis::AxisLayer;
use crate::config::{AxisConfig, AxisKind, AxisSide, AxisStyle, ChartConfig, SeriesConfig};
use crate::error::ChartError;
use crate::grid::GridLayer;
use crate::layer::{DrawContext, Layer, LayerId, SceneGraph};
use crate::scale::{Scale, Scales};
use crate::series::{
    BarSeries, Hit, LineSeries, PieSeries, ScatterSeries, SeriesBase, SeriesInfo, SeriesKind,
    SeriesRenderer,
};
use crate::text::TextShaper;
use crate::theme::{Theme, ThemeKind};
use crate::types::{Coord, Insets, MaxExtent, Point, EXTENT_MARGIN, HEIGHT, WIDTH};

const GRID_Z: i32 = 0;
const AXIS_Z: i32 = 1;
const SERIES_Z: i32 = 5;

/// Minimum band width, in logical pixels, used when a scrollable categorical
/// layout widens past the viewport.
const MIN_BAND_PX: f32 = 40.0;

/// Hover report handed back to the host.
#[derive(Clone, Debug)]
pub enum Hover {
    /// Cartesian hover: all visible series sampled at one anchor x.
    Points { x: Coord, entries: Vec<HoverEntry> },
    /// Pie hover: the slice under the pointer.
    Slice { series: String, label: String, value: f64 },
}

#[derive(Clone, Debug)]
pub struct HoverEntry {
    pub name: String,
    pub color: skia::Color,
    pub point: Point,
}

/// Options for a one-shot offscreen export.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Logical export size; defaults to the live viewport.
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// Supersampling factor applied as a pixel ratio.
    pub scale: f32,
    /// Continuous X window to export; clamped to the extent bound.
    pub view: Option<[f64; 2]>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { width: None, height: None, scale: 1.0, view: None }
    }
}

struct SavedView {
    scales: Scales,
    viewport: (f32, f32),
    pixel_ratio: f32,
}

/// The engine. Owns the scene graph, both scales, axis configuration and the
/// animation driver; layers are addressed through scene-graph handles.
pub struct Chart {
    scene: SceneGraph,
    scales: Scales,
    insets: Insets,
    theme: Theme,
    shaper: TextShaper,
    grid_id: LayerId,
    series_ids: Vec<LayerId>,
    max_extent: Option<MaxExtent>,
    x_axis: AxisConfig,
    y_axis: AxisConfig,
    axis_style: AxisStyle,
    animate: bool,
    animator: Animator,
    /// Host-visible size. The content layout can be wider when a scrollable
    /// categorical axis needs more room per band.
    viewport: (f32, f32),
    layout_width: f32,
}

impl Chart {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_clock(width, height, Box::new(SystemClock::new()))
    }

    /// Construct with an injected clock; tests drive animation manually.
    pub fn with_clock(width: f32, height: f32, clock: Box<dyn Clock>) -> Self {
        let insets = Insets::default();
        let mut scene = SceneGraph::new(width, height);
        let grid_id = scene.add_layer(Box::new(GridLayer::new(GRID_Z)));
        scene.add_layer(Box::new(AxisLayer::new(AXIS_Z)));
        let scales = Scales {
            x: Scale::linear([0.0, 100.0], [insets.left, width - insets.right]),
            y: Scale::linear([0.0, 100.0], [height - insets.bottom, insets.top]),
        };
        Self {
            scene,
            scales,
            insets,
            theme: Theme::light(),
            shaper: TextShaper::new(),
            grid_id,
            series_ids: Vec::new(),
            max_extent: None,
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
            axis_style: AxisStyle::default(),
            animate: false,
            animator: Animator::new(clock),
            viewport: (width, height),
            layout_width: width,
        }
    }

    pub fn with_config(width: f32, height: f32, config: ChartConfig) -> Self {
        let mut chart = Self::new(width, height);
        chart.update(config);
        chart
    }

    /// Apply a full or partial reconfiguration. A provided series list
    /// replaces the current collection; axis configs merge field by field.
    pub fn update(&mut self, config: ChartConfig) {
        if let Some(kind) = config.theme {
            self.theme = Theme::from_kind(kind);
        }
        if let Some(x) = &config.x_axis {
            self.x_axis.merge(x);
        }
        if let Some(y) = &config.y_axis {
            self.y_axis.merge(y);
        }
        if let Some(animate) = config.animate {
            self.animate = animate;
        }
        if let Some(series) = config.series {
            let old: Vec<LayerId> = self.series_ids.drain(..).collect();
            for id in old {
                self.scene.remove_layer(id);
            }
            for cfg in series {
                self.insert_series(cfg);
            }
        }
        if self.animate {
            self.animator.reset();
        } else {
            self.pin_progress();
        }
        self.rescale();
        self.render();
    }

    /// Append one series to the existing collection.
    pub fn add_series(&mut self, config: SeriesConfig) {
        self.insert_series(config);
        if !self.animate {
            self.pin_progress();
        }
        self.rescale();
        self.render();
    }

    /// Append a caller-built layer. The layer must implement the series
    /// contract; anything else is skipped with a warning.
    pub fn add_series_layer(&mut self, mut layer: Box<dyn Layer>) {
        let index = self.series_ids.len();
        let auto = self.theme.palette_color(index);
        let default_name = format!("Series {}", index + 1);
        match layer.as_series_mut() {
            Some(series) => {
                let base = series.base_mut();
                if base.color.is_none() {
                    base.color = Some(auto);
                }
                if base.name.is_empty() {
                    base.name = default_name;
                }
            }
            None => {
                warn!("layer does not implement the series contract; skipping");
                return;
            }
        }
        let id = self.scene.add_layer(layer);
        self.series_ids.push(id);
        if !self.animate {
            self.pin_progress();
        }
        self.rescale();
        self.render();
    }

    fn insert_series(&mut self, config: SeriesConfig) {
        let index = self.series_ids.len();
        let auto = self.theme.palette_color(index);
        let default_name = format!("Series {}", index + 1);

        fn configure(
            base: &mut SeriesBase,
            name: Option<String>,
            color: Option<skia::Color>,
            visible: bool,
            default_name: String,
            auto: skia::Color,
        ) {
            base.name = name.unwrap_or(default_name);
            base.color = Some(color.unwrap_or(auto));
            base.plane.visible = visible;
        }

        let layer: Box<dyn Layer> = match config {
            SeriesConfig::Line { data, color, name, visible } => {
                let mut s = LineSeries::new(SERIES_Z);
                SeriesRenderer::set_data(&mut s, data);
                configure(s.base_mut(), name, color, visible, default_name, auto);
                Box::new(s)
            }
            SeriesConfig::Bar { data, color, name, visible, bar_width, delta } => {
                let mut s = BarSeries::new(SERIES_Z);
                s.bar_width = bar_width.clamp(0.05, 1.0);
                s.delta = delta;
                SeriesRenderer::set_data(&mut s, data);
                configure(s.base_mut(), name, color, visible, default_name, auto);
                Box::new(s)
            }
            SeriesConfig::Scatter { data, color, name, visible, radius } => {
                let mut s = ScatterSeries::new(SERIES_Z);
                s.radius = radius.max(0.5);
                SeriesRenderer::set_data(&mut s, data);
                configure(s.base_mut(), name, color, visible, default_name, auto);
                Box::new(s)
            }
            SeriesConfig::Pie { data, color, name, visible, inner_radius } => {
                let mut s = PieSeries::new(SERIES_Z);
                s.inner_radius = inner_radius.clamp(0.0, 0.95);
                s.set_slices(data);
                configure(s.base_mut(), name, color, visible, default_name, auto);
                Box::new(s)
            }
        };
        let id = self.scene.add_layer(layer);
        self.series_ids.push(id);
    }

    fn pin_progress(&mut self) {
        for &id in &self.series_ids {
            if let Some(series) = self.scene.layer_mut(id).and_then(|l| l.as_series_mut()) {
                series.set_progress(1.0);
            }
        }
    }

    fn series_iter(&self) -> impl Iterator<Item = &dyn SeriesRenderer> {
        self.series_ids
            .iter()
            .filter_map(|id| self.scene.layer(*id).and_then(|l| l.as_series()))
    }

    /// Coerce x coordinates, rederive the scale kind, the extent bound and
    /// the resolved axis style. Called after any data or axis-config change.
    fn rescale(&mut self) {
        let strict_categorical = self.x_axis.kind == Some(AxisKind::Categorical);

        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut labels: Vec<String> = Vec::new();
        let mut has_label_x = false;
        let mut has_pie = false;
        let mut has_points = false;

        for &id in &self.series_ids {
            let Some(series) = self.scene.layer_mut(id).and_then(|l| l.as_series_mut()) else {
                continue;
            };
            if series.kind() == SeriesKind::Pie {
                has_pie = true;
                continue;
            }
            let mut mutated = false;
            {
                let base = series.base_mut();
                for p in base.data.iter_mut() {
                    has_points = true;
                    if strict_categorical {
                        if let Coord::Number(n) = p.x {
                            p.x = Coord::Label(format!("{n}"));
                            mutated = true;
                        }
                    } else if let Coord::Label(s) = &p.x {
                        // Numeric-looking labels are folded back into the
                        // continuous domain; residual labels win below.
                        if let Ok(n) = s.trim().parse::<f64>() {
                            p.x = Coord::Number(n);
                            mutated = true;
                        }
                    }
                    match &p.x {
                        Coord::Number(n) => {
                            x_min = x_min.min(*n);
                            x_max = x_max.max(*n);
                        }
                        Coord::Label(s) => {
                            has_label_x = true;
                            if !labels.iter().any(|l| l == s) {
                                labels.push(s.clone());
                            }
                        }
                    }
                    y_min = y_min.min(p.y);
                    y_max = y_max.max(p.y);
                    if let Some(y0) = p.y0 {
                        y_min = y_min.min(y0);
                        y_max = y_max.max(y0);
                    }
                }
            }
            if mutated {
                series.refresh_visible();
            }
        }

        // Any label surviving coercion commits the X scale to categorical;
        // the scale is continuous only when every x ended up numeric.
        if has_label_x {
            if x_min.is_finite() {
                // Mixed input: the numeric leftovers join the band domain.
                warn!("mixed numeric and label x values; treating x as categorical");
                labels = self.relabel_numeric_x();
            }
            let range = self.scales.x.range;
            self.scales.x = Scale::categorical(labels, range);
            self.max_extent = None;
        } else if self.scales.x.is_categorical() {
            let range = self.scales.x.range;
            self.scales.x = Scale::linear([0.0, 100.0], range);
        }

        if !has_label_x && x_min.is_finite() {
            let (mut x0, mut x1) = (x_min, x_max);
            if x1 - x0 <= f64::EPSILON {
                x0 -= 0.5;
                x1 += 0.5;
            }
            let x_span = x1 - x0;
            let (mut yb0, mut yb1) = if y_min.is_finite() { (y_min, y_max) } else { (0.0, 1.0) };
            if yb1 - yb0 <= f64::EPSILON {
                yb0 -= 0.5;
                yb1 += 0.5;
            }
            let y_span = yb1 - yb0;
            // Asymmetric on X: the left edge stays at the first datum so
            // panning cannot reveal empty space before the data starts.
            self.max_extent = Some(MaxExtent {
                x: [x0, x1 + x_span * EXTENT_MARGIN],
                y: [yb0 - y_span * EXTENT_MARGIN, yb1 + y_span * EXTENT_MARGIN],
            });
            let bound = self.max_extent.unwrap_or(MaxExtent { x: [x0, x1], y: [yb0, yb1] });
            let d0 = self.x_axis.min.unwrap_or(bound.x[0]);
            let d1 = self.x_axis.max.unwrap_or(bound.x[1]);
            self.scales.x.set_domain([d0, d1]);
        }

        // Pie presence hides the axes unless explicitly shown.
        let default_visible = !has_pie;
        self.axis_style = AxisStyle {
            visible: self
                .x_axis
                .visible
                .or(self.y_axis.visible)
                .unwrap_or(default_visible),
            x_tick_count: self.x_axis.tick_count.unwrap_or(10),
            y_tick_count: self.y_axis.tick_count.unwrap_or(10),
            x_kind: self.x_axis.kind.unwrap_or(AxisKind::Numeric),
            x_format: self.x_axis.label_format,
            y_format: self.y_axis.label_format,
        };

        self.apply_ranges();
        if has_points {
            self.update_y_scale();
        }
    }

    /// Convert every remaining numeric x to its label form and collect the
    /// distinct labels in order of appearance across series. Used when mixed
    /// input commits the axis to categorical.
    fn relabel_numeric_x(&mut self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for &id in &self.series_ids {
            let Some(series) = self.scene.layer_mut(id).and_then(|l| l.as_series_mut()) else {
                continue;
            };
            if series.kind() == SeriesKind::Pie {
                continue;
            }
            let mut mutated = false;
            {
                let base = series.base_mut();
                for p in base.data.iter_mut() {
                    if let Coord::Number(n) = p.x {
                        p.x = Coord::Label(format!("{n}"));
                        mutated = true;
                    }
                    if let Coord::Label(s) = &p.x {
                        if !labels.iter().any(|l| l == s) {
                            labels.push(s.clone());
                        }
                    }
                }
            }
            if mutated {
                series.refresh_visible();
            }
        }
        labels
    }

    /// Recompute pixel ranges from the viewport and insets, widening the
    /// content layout when a scrollable categorical axis needs the room.
    fn apply_ranges(&mut self) {
        let (vw, vh) = self.viewport;
        let mut layout_w = vw;
        if self.x_axis.scrollable.unwrap_or(false) {
            if let Some(domain) = self.scales.x.categories() {
                let needed =
                    self.insets.left + self.insets.right + domain.len() as f32 * MIN_BAND_PX;
                layout_w = layout_w.max(needed);
            }
        }
        self.layout_width = layout_w;
        self.scales.x.range = [self.insets.left, layout_w - self.insets.right];
        self.scales.y.range = [vh - self.insets.bottom, self.insets.top];
        if (layout_w - self.scene.width()).abs() > 0.5 || (vh - self.scene.height()).abs() > 0.5 {
            self.scene.set_size(layout_w, vh);
        }
    }

    /// Fit the Y domain to the values inside the current X window (all
    /// values on a categorical axis), with a proportional buffer.
    pub fn update_y_scale(&mut self) {
        let categorical = self.scales.x.is_categorical();
        let window = self.scales.x.domain();

        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut any_delta = false;
        let mut all_stacked = true;
        for series in self.series_iter() {
            if series.kind() == SeriesKind::Pie || !series.plane().visible {
                continue;
            }
            if series.delta_mode() {
                any_delta = true;
            }
            for p in series.data() {
                if !categorical {
                    if let (Some(x), Some([d0, d1])) = (p.x.as_number(), window) {
                        if x < d0 || x > d1 {
                            continue;
                        }
                    }
                }
                y_min = y_min.min(p.y);
                y_max = y_max.max(p.y);
                match p.y0 {
                    Some(y0) => {
                        y_min = y_min.min(y0);
                        y_max = y_max.max(y0);
                    }
                    None => all_stacked = false,
                }
            }
        }

        if !y_min.is_finite() {
            if let Some(bound) = self.max_extent {
                self.scales.y.set_domain(bound.y);
            }
            return;
        }

        let span = y_max - y_min;
        let buffer = if span > 0.0 {
            span * EXTENT_MARGIN
        } else if y_max == 0.0 {
            1.0
        } else {
            y_max.abs() * 0.1
        };
        // Root at zero for all-positive data unless a series opts into
        // delta emphasis or the whole chart is stacked (y0 everywhere).
        let start_from_zero = self.y_axis.start_from_zero.unwrap_or(true);
        let lower = if y_min > 0.0 && start_from_zero && !any_delta && !all_stacked {
            0.0
        } else {
            y_min - buffer
        };
        let upper = y_max + buffer;
        let lower = self.y_axis.min.unwrap_or(lower);
        let upper = self.y_axis.max.unwrap_or(upper);
        self.scales.y.set_domain([lower, upper]);
    }

    /// Shift the X window by a pixel delta. The window span is preserved and
    /// re-anchored against the extent bound. Categorical axes do not pan.
    pub fn pan(&mut self, dx: f32, _dy: f32) {
        if self.scales.x.is_categorical() {
            debug!("pan ignored on a categorical axis");
            return;
        }
        let Some(bound) = self.max_extent else { return };
        let Some([d0, d1]) = self.scales.x.domain() else { return };
        let pixel_span = self.scales.x.pixel_span() as f64;
        if pixel_span == 0.0 {
            return;
        }
        let shift = -(dx as f64 / pixel_span) * (d1 - d0);
        let (n0, n1) = clamp_window(d0 + shift, d1 + shift, bound.x);
        self.scales.x.set_domain([n0, n1]);
        self.update_y_scale();
        self.render();
    }

    /// Scale the X window about the domain value under `center_pixel`.
    /// `factor > 1` zooms in. The span is clamped to [1%, 100%] of the
    /// extent bound, so zooming can neither invert nor escape the data.
    pub fn zoom(&mut self, factor: f64, center_pixel: f32) {
        if self.scales.x.is_categorical() {
            debug!("zoom ignored on a categorical axis");
            return;
        }
        let Some(bound) = self.max_extent else { return };
        if !(factor > 0.0) || !factor.is_finite() {
            return;
        }
        let Some([d0, d1]) = self.scales.x.domain() else { return };
        let span = d1 - d0;
        let max_span = bound.x[1] - bound.x[0];
        let new_span = (span / factor).clamp(max_span * 0.01, max_span);
        let Some(center) = self.scales.x.invert(center_pixel).as_number() else { return };
        let ratio = if span != 0.0 { (center - d0) / span } else { 0.5 };
        let n0 = center - ratio * new_span;
        let (n0, n1) = clamp_window(n0, n0 + new_span, bound.x);
        self.scales.x.set_domain([n0, n1]);
        self.update_y_scale();
        self.render();
    }

    /// Hit test at a pixel position. Pie slices report directly; cartesian
    /// series report every visible series sampled at one anchor x, found
    /// from the first hit or by closest-x fallback on the first series.
    pub fn handle_hover(&self, x: f32, y: f32) -> Option<Hover> {
        let (vw, vh) = (self.layout_width, self.viewport.1);
        if x < self.insets.left
            || x > vw - self.insets.right
            || y < self.insets.top
            || y > vh - self.insets.bottom
        {
            return None;
        }

        for series in self.series_iter() {
            if !series.plane().visible || series.kind() != SeriesKind::Pie {
                continue;
            }
            if let Some(Hit::Slice { label, value }) = series.get_data_at(x, y, &self.scales) {
                return Some(Hover::Slice { series: series.name().to_string(), label, value });
            }
        }

        let mut anchor: Option<Coord> = None;
        for series in self.series_iter() {
            if !series.plane().visible || series.kind() == SeriesKind::Pie {
                continue;
            }
            if let Some(Hit::Point(p)) = series.get_data_at(x, y, &self.scales) {
                anchor = Some(p.x);
                break;
            }
        }
        if anchor.is_none() {
            // No direct hit: snap to the closest point of the first visible
            // series so the host always gets a readout inside the plot.
            for series in self.series_iter() {
                if !series.plane().visible || series.kind() == SeriesKind::Pie {
                    continue;
                }
                let mut best: Option<&Point> = None;
                let mut best_diff = f32::INFINITY;
                for p in series.visible_data() {
                    let diff = (self.scales.x.to_pixels(&p.x) - x).abs();
                    if diff < best_diff {
                        best_diff = diff;
                        best = Some(p);
                    }
                }
                if let Some(p) = best {
                    anchor = Some(p.x.clone());
                    break;
                }
            }
        }
        let anchor = anchor?;

        let mut entries = Vec::new();
        for series in self.series_iter() {
            if !series.plane().visible || series.kind() == SeriesKind::Pie {
                continue;
            }
            if let Some(p) = series.data().iter().find(|p| p.x == anchor) {
                entries.push(HoverEntry {
                    name: series.name().to_string(),
                    color: series.color(),
                    point: p.clone(),
                });
            }
        }
        if entries.is_empty() {
            None
        } else {
            Some(Hover::Points { x: anchor, entries })
        }
    }

    pub fn set_series_visibility(&mut self, index: usize, visible: bool) {
        let Some(&id) = self.series_ids.get(index) else { return };
        if let Some(layer) = self.scene.layer_mut(id) {
            layer.plane_mut().visible = visible;
        }
        self.update_y_scale();
        self.render();
    }

    pub fn toggle_series(&mut self, index: usize) {
        let Some(&id) = self.series_ids.get(index) else { return };
        let visible = match self.scene.layer(id) {
            Some(layer) => layer.plane().visible,
            None => return,
        };
        self.set_series_visibility(index, !visible);
    }

    /// Replace one series' dataset in place.
    pub fn update_series(&mut self, index: usize, data: Vec<Point>) {
        let Some(&id) = self.series_ids.get(index) else { return };
        if let Some(series) = self.scene.layer_mut(id).and_then(|l| l.as_series_mut()) {
            series.set_data(data);
        }
        if self.animate {
            self.animator.reset();
        } else {
            self.pin_progress();
        }
        self.rescale();
        self.render();
    }

    pub fn update_axis(&mut self, side: AxisSide, config: AxisConfig) {
        match side {
            AxisSide::X => self.x_axis.merge(&config),
            AxisSide::Y => self.y_axis.merge(&config),
        }
        self.rescale();
        self.render();
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        if let Some(layer) = self.scene.layer_mut(self.grid_id) {
            layer.plane_mut().visible = visible;
        }
        self.render();
    }

    pub fn set_theme(&mut self, kind: ThemeKind) {
        self.theme = Theme::from_kind(kind);
        self.render();
    }

    pub fn series_progress(&self, index: usize) -> Option<f32> {
        let id = *self.series_ids.get(index)?;
        self.scene
            .layer(id)
            .and_then(|l| l.as_series())
            .map(|s| s.progress())
    }

    pub fn get_series_info(&self) -> Vec<SeriesInfo> {
        self.series_ids
            .iter()
            .enumerate()
            .filter_map(|(index, id)| {
                let layer = self.scene.layer(*id)?;
                let series = layer.as_series()?;
                Some(SeriesInfo {
                    index,
                    name: series.name().to_string(),
                    color: series.color(),
                    visible: layer.plane().visible,
                    kind: series.kind(),
                })
            })
            .collect()
    }

    /// Resize the viewport, reflowing scale ranges and layer surfaces.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.viewport = (width.max(1.0), height.max(1.0));
        self.apply_ranges();
        self.render();
    }

    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        self.scene.set_pixel_ratio(ratio);
        self.render();
    }

    /// Advance entrance animations by real elapsed time. Returns true while
    /// any series is still animating (and a repaint happened).
    pub fn tick(&mut self) -> bool {
        if !self.animate {
            return false;
        }
        let dt = self.animator.advance() as f32;
        let mut active = false;
        for &id in &self.series_ids {
            if let Some(series) = self.scene.layer_mut(id).and_then(|l| l.as_series_mut()) {
                let p = series.progress();
                if p < 1.0 {
                    series.set_progress(p + dt / ENTRANCE_DURATION);
                    active = true;
                }
            }
        }
        if active {
            self.render();
        }
        active
    }

    /// Repaint every visible layer from current state.
    pub fn render(&mut self) {
        let ctx = DrawContext {
            scales: &self.scales,
            theme: &self.theme,
            shaper: &self.shaper,
            axis: &self.axis_style,
            insets: self.insets,
            width: self.layout_width,
            height: self.viewport.1,
        };
        self.scene.render(&ctx);
    }

    /// Blit the composed frame onto a host canvas.
    pub fn composite(&mut self, canvas: &skia::Canvas) {
        canvas.clear(self.theme.background);
        self.scene.composite(canvas);
    }

    /// Render a standalone PNG at the requested size and view window. The
    /// live viewport, scales and pixel ratio are restored on every exit path.
    pub fn render_to_png_bytes(&mut self, opts: &ExportOptions) -> anyhow::Result<Vec<u8>> {
        let saved = SavedView {
            scales: self.scales.clone(),
            viewport: self.viewport,
            pixel_ratio: self.scene.pixel_ratio(),
        };
        let result = self.export_inner(opts);
        self.restore_view(saved);
        Ok(result?)
    }

    pub fn render_to_png(&mut self, path: impl AsRef<Path>, opts: &ExportOptions) -> anyhow::Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(ChartError::Io)?;
            }
        }
        std::fs::write(path.as_ref(), bytes).map_err(ChartError::Io)?;
        Ok(())
    }

    fn export_inner(&mut self, opts: &ExportOptions) -> crate::error::Result<Vec<u8>> {
        let width = opts.width.unwrap_or(self.viewport.0).max(1.0);
        let height = opts.height.unwrap_or(self.viewport.1).max(1.0);
        let scale = if opts.scale > 0.0 && opts.scale.is_finite() { opts.scale } else { 1.0 };

        self.viewport = (width, height);
        self.apply_ranges();
        if (self.scene.pixel_ratio() - scale).abs() > f32::EPSILON {
            self.scene.set_pixel_ratio(scale);
        }
        if let Some([v0, v1]) = opts.view {
            if !self.scales.x.is_categorical() && v1 > v0 {
                let (w0, w1) = match self.max_extent {
                    Some(bound) => clamp_window(v0, v1, bound.x),
                    None => (v0, v1),
                };
                self.scales.x.set_domain([w0, w1]);
                self.update_y_scale();
            }
        }
        self.render();

        let pw = (self.layout_width * scale).round().max(1.0) as i32;
        let ph = (height * scale).round().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((pw, ph))
            .ok_or(ChartError::Surface { width: pw, height: ph })?;
        let canvas = surface.canvas();
        canvas.scale((scale, scale));
        canvas.clear(self.theme.background);
        self.scene.composite(canvas);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    fn restore_view(&mut self, saved: SavedView) {
        self.viewport = saved.viewport;
        self.scales = saved.scales;
        self.apply_ranges();
        if (self.scene.pixel_ratio() - saved.pixel_ratio).abs() > f32::EPSILON {
            self.scene.set_pixel_ratio(saved.pixel_ratio);
        }
        self.render();
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    pub fn max_extent(&self) -> Option<MaxExtent> {
        self.max_extent
    }

    /// The axis style resolved from both axis configs at the last rescale.
    pub fn axis_style(&self) -> &AxisStyle {
        &self.axis_style
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Content size; wider than the viewport for scrollable categorical
    /// layouts.
    pub fn content_size(&self) -> (f32, f32) {
        (self.layout_width, self.viewport.1)
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
        self.apply_ranges();
        self.render();
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Re-anchor a window inside `bounds`, preserving its span. Assumes the span
/// never exceeds the bound span (zoom clamps it first).
fn clamp_window(mut d0: f64, mut d1: f64, bounds: [f64; 2]) -> (f64, f64) {
    let span = d1 - d0;
    if d0 < bounds[0] {
        d0 = bounds[0];
        d1 = d0 + span;
    }
    if d1 > bounds[1] {
        d1 = bounds[1];
        d0 = d1 - span;
    }
    (d0, d1)
}
