// File: crates/strata-core/src/lib.rs
// Summary: Core library entry point; exports the public charting API.

pub mod animate;
pub mod axis;
pub mod chart;
pub mod config;
pub mod downsample;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod layer;
pub mod scale;
pub mod series;
pub mod stack;
pub mod text;
pub mod theme;
pub mod types;

pub use animate::{Animator, Clock, SystemClock};
pub use chart::{Chart, ExportOptions, Hover, HoverEntry};
pub use config::{AxisConfig, AxisKind, AxisSide, ChartConfig, SeriesConfig};
pub use downsample::lttb;
pub use error::ChartError;
pub use interaction::{InteractionController, PointerEvent};
pub use layer::{DrawContext, Layer, LayerId, Plane, SceneGraph};
pub use scale::{Scale, ScaleKind, Scales};
pub use series::{
    BarSeries, Hit, LineSeries, PieSeries, ScatterSeries, SeriesInfo, SeriesKind, SeriesRenderer,
};
pub use stack::stack;
pub use text::TextShaper;
pub use theme::{Theme, ThemeKind};
pub use types::{Coord, Insets, MaxExtent, PieDatum, Point};
