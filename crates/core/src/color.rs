//! Color types and conversion functions for the color-wheel widget.
//!
//! The canonical representation is [`Rgb`]: an 8-bit integer triple. HEX,
//! [`Hsl`], and [`Hsv`] are derived views recomputed from it on demand, so
//! exactly one representation is authoritative at any time. All conversions
//! are pure functions with no side effects.
//!
//! HEX is two-way lossless. HSL and HSV round their hue to whole degrees and
//! saturation/lightness/value to whole percent, so round trips through them
//! are only approximately idempotent.

use crate::error::WheelError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit RGB color, the canonical representation.
///
/// Serializes as an uppercase hex string `"#RRGGBB"` for human-readable
/// formats. The hex mapping is lossless in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue/saturation/lightness view: hue in whole degrees [0, 360),
/// saturation and lightness in whole percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Hue/saturation/value view: hue in whole degrees [0, 360),
/// saturation and value in whole percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parses a hex color string like "#FF00AA" or "ff00aa" (case insensitive).
    ///
    /// Returns `WheelError::InvalidColor` if the input is not a valid
    /// 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb, WheelError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(WheelError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| WheelError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| WheelError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| WheelError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Rgb { r, g, b })
    }

    /// Converts the color to an uppercase hex string like `"#FF00AA"`.
    ///
    /// Channel order is R, G, B; each channel is 2-digit zero-padded.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Hue of a non-achromatic color in sextant units [0, 6).
///
/// `max` must be the largest of the three normalized channels and `d` the
/// (non-zero) max/min spread. Shared by the HSL and HSV forward conversions,
/// which define hue identically.
fn hue_sextant(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    }
}

/// Rounds a hue in turns [0, 1] to whole degrees, wrapping 360 back to 0.
fn round_hue_degrees(h: f64) -> u16 {
    ((h * 360.0).round() as u16) % 360
}

/// Rounds a fraction in [0, 1] to whole percent.
fn round_percent(x: f64) -> u8 {
    (x * 100.0).round() as u8
}

/// Rounds a normalized channel to an 8-bit integer. The cast saturates,
/// so out-of-range fractions clamp instead of wrapping.
fn round_channel(x: f64) -> u8 {
    (x * 255.0).round() as u8
}

/// Converts RGB to HSL via the max/min-channel formula.
///
/// Achromatic input (`max == min`) yields `h = 0, s = 0`. The saturation
/// denominator switches on lightness above 0.5 to stay away from division
/// blow-up near the extremes.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let r = c.r as f64 / 255.0;
    let g = c.g as f64 / 255.0;
    let b = c.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0,
            s: 0,
            l: round_percent(l),
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = hue_sextant(r, g, b, max, d) / 6.0;

    Hsl {
        h: round_hue_degrees(h),
        s: round_percent(s),
        l: round_percent(l),
    }
}

/// Converts RGB to HSV.
///
/// Value is the max channel; saturation is 0 for pure black, else the
/// max/min spread over max. Hue is computed identically to HSL's.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let r = c.r as f64 / 255.0;
    let g = c.g as f64 / 255.0;
    let b = c.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if max == min {
        0.0
    } else {
        hue_sextant(r, g, b, max, d) / 6.0
    };

    Hsv {
        h: round_hue_degrees(h),
        s: round_percent(s),
        v: round_percent(max),
    }
}

/// One channel of the HSL inverse: interpolates between `p` and `q` at
/// hue offset `t` (turns, wrapped into [0, 1]).
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts HSL to RGB.
///
/// All inputs are normalized fractions in [0, 1]; callers divide degrees
/// and percent down before calling. Inputs are not range-validated;
/// out-of-range values give mathematically derived but meaningless output.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    if s == 0.0 {
        let v = round_channel(l);
        return Rgb { r: v, g: v, b: v };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb {
        r: round_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        g: round_channel(hue_to_channel(p, q, h)),
        b: round_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    }
}

/// Converts HSV to RGB via the sector decomposition.
///
/// All inputs are normalized fractions in [0, 1]. The sector index is
/// `floor(h * 6) mod 6`; `p`, `q`, `t` are the standard intermediates.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: round_channel(r),
        g: round_channel(g),
        b: round_channel(b),
    }
}
