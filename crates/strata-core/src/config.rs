// File: crates/strata-core/src/config.rs
// Summary: Declarative chart/series/axis configuration types.

use skia_safe as skia;

use crate::theme::ThemeKind;
use crate::types::{PieDatum, Point};

/// Formats a domain value for an axis tick label.
pub type LabelFormatter = fn(f64) -> String;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Numeric,
    DateTime,
    /// Strict categorical: numeric x values are coerced to labels instead
    /// of the other way around.
    Categorical,
}

/// Per-axis configuration. Every field is optional; omitted fields keep the
/// chart's current setting when merged via `update_axis`.
#[derive(Clone, Default)]
pub struct AxisConfig {
    pub visible: Option<bool>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub tick_count: Option<usize>,
    pub label_format: Option<LabelFormatter>,
    pub kind: Option<AxisKind>,
    /// Categorical only: allow the layout to widen past the viewport so the
    /// host can scroll instead of crowding bands.
    pub scrollable: Option<bool>,
    /// Y only: root the domain at zero when all observed values are positive.
    pub start_from_zero: Option<bool>,
}

impl AxisConfig {
    /// Overlay `other` onto self, field by field.
    pub fn merge(&mut self, other: &AxisConfig) {
        if other.visible.is_some() {
            self.visible = other.visible;
        }
        if other.min.is_some() {
            self.min = other.min;
        }
        if other.max.is_some() {
            self.max = other.max;
        }
        if other.tick_count.is_some() {
            self.tick_count = other.tick_count;
        }
        if other.label_format.is_some() {
            self.label_format = other.label_format;
        }
        if other.kind.is_some() {
            self.kind = other.kind;
        }
        if other.scrollable.is_some() {
            self.scrollable = other.scrollable;
        }
        if other.start_from_zero.is_some() {
            self.start_from_zero = other.start_from_zero;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    X,
    Y,
}

/// Resolved axis state handed to layers at draw time.
#[derive(Clone)]
pub struct AxisStyle {
    pub visible: bool,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub x_kind: AxisKind,
    pub x_format: Option<LabelFormatter>,
    pub y_format: Option<LabelFormatter>,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            visible: true,
            x_tick_count: 10,
            y_tick_count: 10,
            x_kind: AxisKind::Numeric,
            x_format: None,
            y_format: None,
        }
    }
}

/// Closed set of series declarations; the engine dispatches on the variant
/// rather than inspecting runtime type tags.
#[derive(Clone)]
pub enum SeriesConfig {
    Line {
        data: Vec<Point>,
        color: Option<skia::Color>,
        name: Option<String>,
        visible: bool,
    },
    Bar {
        data: Vec<Point>,
        color: Option<skia::Color>,
        name: Option<String>,
        visible: bool,
        /// Bar width as a fraction of one band (0..=1).
        bar_width: f32,
        /// Anchor the baseline near the data minimum instead of zero, for
        /// emphasizing small relative variation.
        delta: bool,
    },
    Scatter {
        data: Vec<Point>,
        color: Option<skia::Color>,
        name: Option<String>,
        visible: bool,
        radius: f32,
    },
    Pie {
        data: Vec<PieDatum>,
        color: Option<skia::Color>,
        name: Option<String>,
        visible: bool,
        /// 0 draws a pie; > 0 a ring of that inner-radius ratio.
        inner_radius: f32,
    },
}

impl SeriesConfig {
    pub fn line(data: Vec<Point>) -> Self {
        SeriesConfig::Line { data, color: None, name: None, visible: true }
    }

    pub fn bar(data: Vec<Point>) -> Self {
        SeriesConfig::Bar {
            data,
            color: None,
            name: None,
            visible: true,
            bar_width: 0.8,
            delta: false,
        }
    }

    pub fn scatter(data: Vec<Point>) -> Self {
        SeriesConfig::Scatter { data, color: None, name: None, visible: true, radius: 4.0 }
    }

    pub fn pie(data: Vec<PieDatum>) -> Self {
        SeriesConfig::Pie { data, color: None, name: None, visible: true, inner_radius: 0.0 }
    }

    pub fn with_name(mut self, n: impl Into<String>) -> Self {
        let n = Some(n.into());
        match &mut self {
            SeriesConfig::Line { name, .. }
            | SeriesConfig::Bar { name, .. }
            | SeriesConfig::Scatter { name, .. }
            | SeriesConfig::Pie { name, .. } => *name = n,
        }
        self
    }

    pub fn with_color(mut self, c: skia::Color) -> Self {
        let c = Some(c);
        match &mut self {
            SeriesConfig::Line { color, .. }
            | SeriesConfig::Bar { color, .. }
            | SeriesConfig::Scatter { color, .. }
            | SeriesConfig::Pie { color, .. } => *color = c,
        }
        self
    }
}

/// Declarative full or partial chart reconfiguration. A provided `series`
/// list replaces the whole series collection.
#[derive(Clone, Default)]
pub struct ChartConfig {
    pub series: Option<Vec<SeriesConfig>>,
    pub x_axis: Option<AxisConfig>,
    pub y_axis: Option<AxisConfig>,
    pub theme: Option<ThemeKind>,
    pub animate: Option<bool>,
}
