//! Error types for the color-wheel core.

use thiserror::Error;

/// Errors produced by color and wheel operations.
#[derive(Debug, Error)]
pub enum WheelError {
    /// A color string could not be parsed in its declared format.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A format name was not one of hex, rgb, hsl, hsv.
    #[error("unknown color format: {0}")]
    UnknownFormat(String),

    /// Width or height was zero (or overflowed) when creating a raster.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A wheel radius was non-positive or non-finite.
    #[error("invalid wheel radius: {0}")]
    InvalidRadius(f64),

    /// An I/O failure while writing a snapshot.
    #[error("io error: {0}")]
    Io(String),
}
