//! Wheel geometry: the center/radius record shared by the renderer and
//! the picker.
//!
//! The renderer computes one [`WheelGeometry`] per draw and returns it;
//! the picker holds that record and maps pointer coordinates back to
//! colors through it. The record is only refreshed by a redraw, so a
//! resize without one leaves the picker resolving against a stale layout.

use crate::color::{hsv_to_rgb, Rgb};
use crate::error::WheelError;
use glam::DVec2;

/// Center and radius of a rendered color wheel, in surface pixels.
///
/// Angular position encodes hue, radial distance (normalized by the
/// radius) encodes saturation; value is fixed at maximum on the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    center: DVec2,
    radius: f64,
}

impl WheelGeometry {
    /// Creates a geometry record.
    ///
    /// Returns `WheelError::InvalidRadius` if `radius` is not a positive
    /// finite number.
    pub fn new(center: DVec2, radius: f64) -> Result<Self, WheelError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(WheelError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// The wheel center in surface pixels.
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// The wheel radius in surface pixels.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Euclidean distance from the center to `point`.
    pub fn distance_to(&self, point: DVec2) -> f64 {
        self.center.distance(point)
    }

    /// Angle of `point` around the center in degrees [0, 360).
    ///
    /// The center itself maps to 0 (`atan2(0, 0)` is 0).
    pub fn angle_to(&self, point: DVec2) -> f64 {
        let d = point - self.center;
        d.y.atan2(d.x).to_degrees().rem_euclid(360.0)
    }

    /// Whether `point` lies on the wheel disk.
    pub fn contains(&self, point: DVec2) -> bool {
        self.distance_to(point) <= self.radius
    }

    /// Maps a pointer coordinate to the color under it.
    ///
    /// Points outside the disk return `None`. Inside, the angle gives the
    /// hue, the normalized distance (clamped to 1) the saturation, and
    /// value is fixed at maximum; the triple is converted HSV -> RGB.
    pub fn color_at(&self, point: DVec2) -> Option<Rgb> {
        let distance = self.distance_to(point);
        if distance > self.radius {
            return None;
        }
        let hue = self.angle_to(point) / 360.0;
        let saturation = (distance / self.radius).min(1.0);
        Some(hsv_to_rgb(hue, saturation, 1.0))
    }
}
