#![deny(unsafe_code)]
//! Stateful widget layer for the color wheel.
//!
//! Composes the pure model from `color-wheel-core` into the widget's
//! moving parts: the [`Raster`] drawing surface, the wheel renderer,
//! the [`WheelPicker`] with its selection marker, and the
//! [`Synchronizer`] that keeps every display field in lockstep with the
//! canonical color.

pub mod picker;
pub mod raster;
pub mod renderer;
pub mod sync;

#[cfg(feature = "png")]
pub mod snapshot;

pub use picker::{Marker, WheelPicker};
pub use raster::Raster;
pub use renderer::draw_wheel;
pub use sync::{DisplaySlots, MemorySlots, Synchronizer};
