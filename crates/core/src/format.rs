//! Text formats accepted by the converter's input fields, and parsing
//! from tagged text into the canonical RGB triple.
//!
//! Parsing returns an explicit `Result` so callers cannot skip the failure
//! check; the synchronizer turns failures into silent discards, never into
//! a crash.

use crate::color::{hsl_to_rgb, hsv_to_rgb, Rgb};
use crate::error::WheelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The format tag attached to a text-field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    Hsv,
}

impl ColorFormat {
    /// All recognized format names, in display order.
    pub fn names() -> &'static [&'static str] {
        &["hex", "rgb", "hsl", "hsv"]
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsv => "hsv",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ColorFormat {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            "hsl" => Ok(ColorFormat::Hsl),
            "hsv" => Ok(ColorFormat::Hsv),
            other => Err(WheelError::UnknownFormat(other.to_string())),
        }
    }
}

/// Parses `text` in the given format into canonical RGB.
///
/// - `Hex`: optional leading `#`, exactly 6 hex digits.
/// - `Rgb`: three comma-separated integer channels in [0, 255].
/// - `Hsl`/`Hsv`: three comma-separated floats, `%` signs allowed; the
///   first component is degrees (divided by 360), the rest percent
///   (divided by 100), then converted through the matching inverse.
///
/// Returns `WheelError::InvalidColor` on any malformed component; never
/// panics.
pub fn parse_color(format: ColorFormat, text: &str) -> Result<Rgb, WheelError> {
    let text = text.trim();
    match format {
        ColorFormat::Hex => Rgb::from_hex(text),
        ColorFormat::Rgb => {
            let [r, g, b] = split_components(text)?;
            Ok(Rgb {
                r: parse_channel(r)?,
                g: parse_channel(g)?,
                b: parse_channel(b)?,
            })
        }
        ColorFormat::Hsl => {
            let [h, s, l] = split_components(text)?;
            Ok(hsl_to_rgb(
                parse_fraction(h, 360.0)?,
                parse_fraction(s, 100.0)?,
                parse_fraction(l, 100.0)?,
            ))
        }
        ColorFormat::Hsv => {
            let [h, s, v] = split_components(text)?;
            Ok(hsv_to_rgb(
                parse_fraction(h, 360.0)?,
                parse_fraction(s, 100.0)?,
                parse_fraction(v, 100.0)?,
            ))
        }
    }
}

/// Splits on commas into exactly three trimmed components.
fn split_components(text: &str) -> Result<[&str; 3], WheelError> {
    let mut parts = text.split(',').map(str::trim);
    let first = parts.next();
    let second = parts.next();
    let third = parts.next();
    match (first, second, third, parts.next()) {
        (Some(a), Some(b), Some(c), None) => Ok([a, b, c]),
        _ => Err(WheelError::InvalidColor(format!(
            "expected 3 comma-separated components in {text:?}"
        ))),
    }
}

/// Parses one integer channel in [0, 255].
fn parse_channel(part: &str) -> Result<u8, WheelError> {
    part.parse::<u8>()
        .map_err(|e| WheelError::InvalidColor(format!("invalid channel {part:?}: {e}")))
}

/// Parses one component as a float, strips a `%` suffix, and normalizes
/// by `scale` into a fraction.
fn parse_fraction(part: &str, scale: f64) -> Result<f64, WheelError> {
    let digits = part.trim_end_matches('%').trim();
    let value = digits
        .parse::<f64>()
        .map_err(|e| WheelError::InvalidColor(format!("invalid component {part:?}: {e}")))?;
    Ok(value / scale)
}
