//! Error type shared by the drawing, sampling and export layers.

use thiserror::Error;

/// Errors returned by rosette drawing and export.
#[derive(Debug, Error)]
pub enum RosetteError {
    /// A composition parameter is outside its supported range.
    ///
    /// Raised before the surface is touched, so nothing has been drawn.
    #[error("parameter '{name}' must be in range {min}..{max}, got {value}")]
    InvalidParameter {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A sampling range cannot produce drawable compositions.
    #[error("invalid sampling range for '{name}': {reason}")]
    InvalidRange { name: &'static str, reason: String },

    /// Filesystem failure while writing an output artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The raster encoder rejected the image.
    #[error("raster encoding failed: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, RosetteError>;
