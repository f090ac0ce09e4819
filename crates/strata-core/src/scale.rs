// File: crates/strata-core/src/scale.rs
// Summary: Domain-to-pixel scale as a tagged variant with a shared pixel range.

use crate::types::Coord;

/// Domain representation. Continuous kinds hold a `[min, max]` pair,
/// categorical holds an ordered list of distinct labels.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleKind {
    Linear { domain: [f64; 2] },
    Log { domain: [f64; 2] },
    Categorical { domain: Vec<String> },
}

/// Bidirectional mapping between a data domain and a pixel range.
/// The range is not required to be increasing; the Y axis is inverted.
/// Kind changes replace the variant wholesale, keeping the range.
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    pub kind: ScaleKind,
    pub range: [f32; 2],
}

impl Scale {
    pub fn linear(domain: [f64; 2], range: [f32; 2]) -> Self {
        Self { kind: ScaleKind::Linear { domain }, range }
    }

    /// Domain values must be strictly positive; the engine never installs
    /// a log domain touching zero.
    pub fn log(domain: [f64; 2], range: [f32; 2]) -> Self {
        Self { kind: ScaleKind::Log { domain }, range }
    }

    pub fn categorical(domain: Vec<String>, range: [f32; 2]) -> Self {
        Self { kind: ScaleKind::Categorical { domain }, range }
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self.kind, ScaleKind::Categorical { .. })
    }

    /// Continuous `[min, max]` domain, if this scale has one.
    pub fn domain(&self) -> Option<[f64; 2]> {
        match &self.kind {
            ScaleKind::Linear { domain } | ScaleKind::Log { domain } => Some(*domain),
            ScaleKind::Categorical { .. } => None,
        }
    }

    /// Replace the continuous domain in place. No-op for categorical.
    pub fn set_domain(&mut self, new: [f64; 2]) {
        match &mut self.kind {
            ScaleKind::Linear { domain } | ScaleKind::Log { domain } => *domain = new,
            ScaleKind::Categorical { .. } => {}
        }
    }

    pub fn categories(&self) -> Option<&[String]> {
        match &self.kind {
            ScaleKind::Categorical { domain } => Some(domain),
            _ => None,
        }
    }

    pub fn pixel_span(&self) -> f32 {
        self.range[1] - self.range[0]
    }

    pub fn to_pixels(&self, value: &Coord) -> f32 {
        match value {
            Coord::Number(n) => self.to_pixels_f64(*n),
            Coord::Label(s) => match &self.kind {
                ScaleKind::Categorical { domain } => {
                    match domain.iter().position(|d| d == s) {
                        Some(i) => self.band_center(i, domain.len()),
                        // Unknown label: documented degenerate fallback.
                        None => 0.0,
                    }
                }
                // Labels cannot be placed on a continuous axis; coercion
                // upstream keeps this path unreachable in normal use.
                _ => self.range[0],
            },
        }
    }

    /// Numeric mapping. On a categorical scale the number is treated as a
    /// band index.
    pub fn to_pixels_f64(&self, value: f64) -> f32 {
        let [r0, r1] = self.range;
        match &self.kind {
            ScaleKind::Linear { domain } => {
                let [d0, d1] = *domain;
                r0 + (((value - d0) / (d1 - d0)) as f32) * (r1 - r0)
            }
            ScaleKind::Log { domain } => {
                let [d0, d1] = *domain;
                let (l0, l1) = (d0.ln(), d1.ln());
                r0 + (((value.ln() - l0) / (l1 - l0)) as f32) * (r1 - r0)
            }
            ScaleKind::Categorical { domain } => {
                if value < 0.0 || value as usize >= domain.len() {
                    return 0.0;
                }
                self.band_center(value as usize, domain.len())
            }
        }
    }

    pub fn invert(&self, pixel: f32) -> Coord {
        let [r0, r1] = self.range;
        match &self.kind {
            ScaleKind::Linear { domain } => {
                let [d0, d1] = *domain;
                Coord::Number(d0 + ((pixel - r0) / (r1 - r0)) as f64 * (d1 - d0))
            }
            ScaleKind::Log { domain } => {
                let [d0, d1] = *domain;
                let (l0, l1) = (d0.ln(), d1.ln());
                Coord::Number((l0 + ((pixel - r0) / (r1 - r0)) as f64 * (l1 - l0)).exp())
            }
            ScaleKind::Categorical { domain } => {
                if domain.is_empty() {
                    return Coord::Label(String::new());
                }
                let step = (r1 - r0) / domain.len() as f32;
                let index = ((pixel - r0) / step).floor() as isize;
                if index >= 0 && (index as usize) < domain.len() {
                    Coord::Label(domain[index as usize].clone())
                } else {
                    Coord::Label(String::new())
                }
            }
        }
    }

    fn band_center(&self, index: usize, count: usize) -> f32 {
        let [r0, r1] = self.range;
        let step = (r1 - r0) / count.max(1) as f32;
        r0 + step * index as f32 + step / 2.0
    }
}

/// The chart's two scales. The chart is the sole mutator of their domains;
/// layers receive them by reference at draw time.
#[derive(Clone, Debug)]
pub struct Scales {
    pub x: Scale,
    pub y: Scale,
}
