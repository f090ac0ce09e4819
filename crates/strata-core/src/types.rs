// File: crates/strata-core/src/types.rs
// Summary: Shared data model types and tunable constants.

/// Default surface width in pixels.
pub const WIDTH: f32 = 1024.0;
/// Default surface height in pixels.
pub const HEIGHT: f32 = 640.0;

/// Raw point count above which line/scatter series are decimated with LTTB.
/// Tunable; 2000 keeps per-frame work bounded without visible shape loss.
pub const DOWNSAMPLE_THRESHOLD: usize = 2000;

/// Pixel distance beyond which a hover hit test reports no match. Tunable.
pub const HIT_TOLERANCE_PX: f32 = 10.0;

/// Margin applied around the data extent when deriving the pan/zoom bound.
pub const EXTENT_MARGIN: f64 = 0.15;

/// An X coordinate: numeric for continuous axes, a label for categorical.
#[derive(Clone, Debug, PartialEq)]
pub enum Coord {
    Number(f64),
    Label(String),
}

impl Coord {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Coord::Number(n) => Some(*n),
            Coord::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            Coord::Number(_) => None,
            Coord::Label(s) => Some(s),
        }
    }
}

impl From<f64> for Coord {
    fn from(n: f64) -> Self {
        Coord::Number(n)
    }
}

impl From<&str> for Coord {
    fn from(s: &str) -> Self {
        Coord::Label(s.to_string())
    }
}

/// A single data point. `y0` carries the stacked baseline when present.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub x: Coord,
    pub y: f64,
    pub y0: Option<f64>,
}

impl Point {
    pub fn new(x: impl Into<Coord>, y: f64) -> Self {
        Self { x: x.into(), y, y0: None }
    }

    pub fn stacked(x: impl Into<Coord>, y: f64, y0: f64) -> Self {
        Self { x: x.into(), y, y0: Some(y0) }
    }
}

/// Pie charts use their own data model; slices are not scale-mapped.
#[derive(Clone, Debug)]
pub struct PieDatum {
    pub label: String,
    pub value: f64,
    pub color: Option<skia_safe::Color>,
}

impl PieDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, color: None }
    }
}

/// Outermost pan/zoom bound, derived once per full data update.
/// The live continuous X domain is always kept a sub-interval of `x`.
#[derive(Clone, Copy, Debug)]
pub struct MaxExtent {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// Plot-area margins, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(60.0, 20.0, 20.0, 40.0)
    }
}
