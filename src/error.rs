//! Error type shared by the chart builder, renderer, exporter and data loaders.

use thiserror::Error;

/// Everything that can go wrong while drawing, exporting or loading chart data.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A plotters drawing call failed (the backend error is stringified).
    #[error("drawing backend error: {0}")]
    Backend(String),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Paired inputs (x/y, categories/values) differ in length.
    #[error("series length mismatch: {left} vs {right}")]
    SeriesLength { left: usize, right: usize },

    /// The requested canvas would have no pixels.
    #[error("canvas is empty: {width}x{height} px")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Map any plotters error into [`ChartError::Backend`].
pub(crate) fn backend<E: std::fmt::Debug>(e: E) -> ChartError {
    ChartError::Backend(format!("{:?}", e))
}
