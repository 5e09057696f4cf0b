#![deny(unsafe_code)]
//! Core color model for the color-wheel widget.
//!
//! Provides the canonical [`Rgb`] triple with its derived HEX/[`Hsl`]/[`Hsv`]
//! views and pure conversions, the [`ColorFormat`] text formats with
//! result-typed parsing, and the [`WheelGeometry`] record shared by the
//! wheel renderer and picker.

pub mod color;
pub mod error;
pub mod format;
pub mod geometry;

pub use color::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv, Hsl, Hsv, Rgb};
pub use error::WheelError;
pub use format::{parse_color, ColorFormat};
pub use geometry::WheelGeometry;
