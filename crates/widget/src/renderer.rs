//! Paints the hue/saturation color wheel onto a [`Raster`].
//!
//! The disk is partitioned into 360 one-degree wedges, one per integer hue
//! degree, each filled with the fully saturated, full-value color of that
//! hue. A solid white disc of a third of the radius covers the center; it
//! is decorative and plays no part in picking. The returned
//! [`WheelGeometry`] is the record the picker must use. After a resize the
//! surface has to be redrawn and the picker's geometry replaced with the
//! new return value, or lookups will use a stale layout.

use color_wheel_core::{hsv_to_rgb, Rgb, WheelError, WheelGeometry};
use glam::DVec2;

use crate::raster::Raster;

/// Gap between the wheel rim and the surface edge, in pixels.
const EDGE_MARGIN: f64 = 5.0;

/// The white center disc spans this fraction of the wheel radius.
const INNER_DISC_RATIO: f64 = 1.0 / 3.0;

/// Paints the color wheel centered on `raster` and returns its geometry.
///
/// The wheel is centered on the surface midpoint with radius
/// `min(width, height) / 2 - 5`. Returns `WheelError::InvalidRadius` if
/// the surface is too small to fit a positive radius. Pixels outside the
/// disk are left untouched.
pub fn draw_wheel(raster: &mut Raster) -> Result<WheelGeometry, WheelError> {
    let center = DVec2::new(raster.width() as f64 / 2.0, raster.height() as f64 / 2.0);
    let radius = center.x.min(center.y) - EDGE_MARGIN;
    let geometry = WheelGeometry::new(center, radius)?;

    let inner = radius * INNER_DISC_RATIO;
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let point = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
            let distance = geometry.distance_to(point);
            if distance > radius {
                continue;
            }
            let color = if distance <= inner {
                Rgb::WHITE
            } else {
                // One wedge per whole degree; boundaries meet with
                // neither gap nor overlap.
                let wedge = geometry.angle_to(point).floor();
                hsv_to_rgb(wedge / 360.0, 1.0, 1.0)
            };
            raster.set_pixel(x, y, color);
        }
    }

    Ok(geometry)
}
