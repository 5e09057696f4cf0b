//! Maps pointer coordinates on a rendered wheel to colors.
//!
//! The [`WheelPicker`] holds the [`WheelGeometry`] produced by the last
//! draw and a [`Marker`] for the selected point. Off-wheel clicks are a
//! deliberate no-op: no color, no marker movement, no error.

use color_wheel_core::{Rgb, WheelGeometry};
use glam::DVec2;

/// The selected-color point shown on the wheel.
///
/// Starts hidden, is moved and shown on every successful pick, and is
/// only ever hidden again, never destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    position: DVec2,
    visible: bool,
}

impl Marker {
    /// A hidden marker at the origin.
    pub fn hidden() -> Self {
        Self {
            position: DVec2::ZERO,
            visible: false,
        }
    }

    /// Current position in surface pixels. Only meaningful while visible.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Whether the marker is currently shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    fn show_at(&mut self, position: DVec2) {
        self.position = position;
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// Resolves clicks on the wheel into colors and tracks the selection marker.
#[derive(Debug, Clone)]
pub struct WheelPicker {
    geometry: WheelGeometry,
    marker: Marker,
}

impl WheelPicker {
    /// Creates a picker for a freshly drawn wheel. The marker starts hidden.
    pub fn new(geometry: WheelGeometry) -> Self {
        Self {
            geometry,
            marker: Marker::hidden(),
        }
    }

    /// The geometry lookups currently resolve against.
    pub fn geometry(&self) -> WheelGeometry {
        self.geometry
    }

    /// The selection marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Maps `point` to the color under it.
    ///
    /// On a hit the marker moves to `point` and becomes visible. Points
    /// outside the wheel return `None` and leave the marker untouched.
    pub fn pick(&mut self, point: DVec2) -> Option<Rgb> {
        let color = self.geometry.color_at(point)?;
        self.marker.show_at(point);
        Some(color)
    }

    /// Replaces the geometry after the wheel has been redrawn.
    ///
    /// The marker is hidden: its position referred to the old layout.
    pub fn set_geometry(&mut self, geometry: WheelGeometry) {
        self.geometry = geometry;
        self.marker.hide();
    }
}
