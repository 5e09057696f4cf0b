//! Fixed-size RGBA8 drawing surface.
//!
//! A [`Raster`] stores `width * height` pixels in row-major order, four
//! bytes each. Pixels start fully transparent; every painted pixel is
//! opaque. Writes outside the surface are silently dropped so drawing
//! primitives clip naturally at the edges.

use color_wheel_core::{Rgb, WheelError};

/// A 2D RGBA8 pixel buffer with validated dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Creates a transparent raster of the given dimensions.
    ///
    /// Returns `WheelError::InvalidDimensions` if either dimension is zero
    /// or if the byte length `width * height * 4` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, WheelError> {
        if width == 0 || height == 0 {
            return Err(WheelError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(WheelError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The color at `(x, y)`, or `None` outside the surface or where
    /// nothing has been painted yet.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        if self.data[i + 3] == 0 {
            return None;
        }
        Some(Rgb {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
        })
    }

    /// Paints `(x, y)` opaque with `color`. Out-of-bounds writes are
    /// no-ops.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y * self.width + x) * 4;
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        self.data[i + 3] = 255;
    }

    /// Resets every pixel to fully transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}
