// File: crates/strata-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Dark,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub kind: ThemeKind,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub marker_ring: skia::Color,
    /// Auto-assigned series colors, cycled by series index.
    pub palette: [skia::Color; 7],
}

fn rgb(r: u8, g: u8, b: u8) -> skia::Color {
    skia::Color::from_argb(255, r, g, b)
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            background: rgb(31, 41, 55),
            grid: rgb(51, 51, 51),
            axis_line: rgb(75, 85, 99),
            axis_label: rgb(229, 231, 235),
            marker_ring: rgb(255, 255, 255),
            palette: Self::default_palette(),
        }
    }

    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            background: rgb(255, 255, 255),
            grid: rgb(229, 231, 235),
            axis_line: rgb(209, 213, 219),
            axis_label: rgb(55, 65, 81),
            marker_ring: rgb(255, 255, 255),
            palette: Self::default_palette(),
        }
    }

    pub fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }

    fn default_palette() -> [skia::Color; 7] {
        [
            rgb(0xef, 0x44, 0x44), // red
            rgb(0xf5, 0x9e, 0x0b), // amber
            rgb(0x10, 0xb9, 0x81), // green
            rgb(0x3b, 0x82, 0xf6), // blue
            rgb(0x06, 0xb6, 0xd4), // cyan
            rgb(0xec, 0x48, 0x99), // pink
            rgb(0x63, 0x66, 0xf1), // indigo
        ]
    }

    pub fn palette_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
