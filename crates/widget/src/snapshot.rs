//! PNG snapshot of a rendered raster.
//!
//! Feature-gated behind `png` (default on) so embeddings that only need
//! the in-memory surface can drop the `image` dependency.

use color_wheel_core::WheelError;
use std::path::Path;

use crate::raster::Raster;

/// Writes the raster as a PNG image.
///
/// Returns `WheelError::InvalidDimensions` if the raster dimensions
/// overflow `u32`, or `WheelError::Io` on encode/write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), WheelError> {
    let w = u32::try_from(raster.width()).map_err(|_| WheelError::InvalidDimensions)?;
    let h = u32::try_from(raster.height()).map_err(|_| WheelError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, raster.data().to_vec())
        .ok_or_else(|| WheelError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| WheelError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_wheel;

    #[test]
    fn write_png_round_trip() {
        let mut raster = Raster::new(64, 64).unwrap();
        draw_wheel(&mut raster).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wheel.png");

        write_png(&raster, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 64);
        // Center of the wheel is the white disc.
        assert_eq!(img.get_pixel(32, 32).0, [255, 255, 255, 255]);
    }
}
