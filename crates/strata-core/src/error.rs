// File: crates/strata-core/src/error.rs
// Summary: Typed engine errors; export and surface failures never panic.

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("PNG encode failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
