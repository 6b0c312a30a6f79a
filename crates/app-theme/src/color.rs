//! Color-space conversion and derived-shade math
//!
//! Colors cross the API boundary as normalized `#rrggbb` strings. Brightness
//! and opacity adjustments operate linearly on each RGB channel; there is no
//! gamma correction, so results are exact and easy to assert on.
//!
//! ```rust
//! use app_theme::color::{adjust_brightness, hex_to_hsl};
//!
//! assert_eq!(adjust_brightness("#008062", 20).unwrap().as_str(), "#33b395");
//! assert_eq!(hex_to_hsl("#008062").unwrap().to_string(), "hsl(166, 100%, 25%)");
//! ```

use crate::error::{Result, ThemeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated color in lowercase `#rrggbb` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a `#rrggbb` string (either case) into a normalized color
    pub fn parse(hex: &str) -> Result<Self> {
        hex_to_rgb(hex).map(Rgb::to_color)
    }

    /// Build a color from a literal known to be valid lowercase hex
    pub(crate) fn from_static(hex: &'static str) -> Self {
        debug_assert!(Color::parse(hex).map(|c| c.0 == hex).unwrap_or(false));
        Color(hex.to_string())
    }

    /// The normalized hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// RGB channels of this color
    pub fn to_rgb(&self) -> Rgb {
        let rgb = parse_channels(&self.0);
        debug_assert!(rgb.is_some(), "Color holds non-hex value {:?}", self.0);
        rgb.unwrap_or(Rgb::new(0, 0, 0))
    }

    /// HSL representation of this color
    pub fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// An RGB triplet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB triplet
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Encode as a lowercase hex color
    pub fn to_color(self) -> Color {
        Color(format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b))
    }

    /// Add `percent_delta`% of the full channel range to every channel
    ///
    /// Deltas beyond ±100% saturate every channel.
    pub fn brighten(self, percent_delta: i32) -> Rgb {
        let amount = (f64::from(percent_delta) * 255.0 / 100.0).round().clamp(-255.0, 255.0) as i32;
        Rgb::new(
            clamp_channel(i32::from(self.r) + amount),
            clamp_channel(i32::from(self.g) + amount),
            clamp_channel(i32::from(self.b) + amount),
        )
    }

    /// Render as a CSS `rgba()` value with the given opacity
    pub fn rgba(self, opacity: f64) -> String {
        let opacity = if opacity.is_nan() { 1.0 } else { opacity.clamp(0.0, 1.0) };
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, opacity)
    }

    /// Convert to HSL with integer rounding
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0, 0, percent(l));
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        let hue = (h * 60.0).round() as u16 % 360;
        Hsl::new(hue, percent(s), percent(l))
    }
}

/// An HSL triplet with integer degrees and percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`
    pub h: u16,
    /// Saturation in percent, `[0, 100]`
    pub s: u8,
    /// Lightness in percent, `[0, 100]`
    pub l: u8,
}

impl Hsl {
    /// Create a new HSL triplet, wrapping hue and clamping percentages
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h: h % 360, s: s.min(100), l: l.min(100) }
    }

    /// Convert back to RGB
    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.h);
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match self.h {
            0..=59 => (c, x, 0.0),
            60..=119 => (x, c, 0.0),
            120..=179 => (0.0, c, x),
            180..=239 => (0.0, x, c),
            240..=299 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f64| clamp_channel(((v + m) * 255.0).round() as i32);
        Rgb::new(channel(r), channel(g), channel(b))
    }

    /// Space-separated channel form used by HSL-based variable systems (`166 100% 25%`)
    pub fn channels(&self) -> String {
        format!("{} {}% {}%", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

fn percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

fn parse_channels(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// Parse a `#rrggbb` hex color (case-insensitive) into RGB channels
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    parse_channels(hex).ok_or_else(|| ThemeError::invalid_color(hex))
}

/// Encode RGB channels as a hex color, clamping each channel to `[0, 255]`
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> Color {
    Rgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b)).to_color()
}

/// Convert a hex color to HSL
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    hex_to_rgb(hex).map(Rgb::to_hsl)
}

/// Convert an HSL triplet to a hex color
pub fn hsl_to_hex(hsl: Hsl) -> Color {
    hsl.to_rgb().to_color()
}

/// Lighten (positive) or darken (negative) a color by a percentage of the channel range
pub fn adjust_brightness(hex: &str, percent_delta: i32) -> Result<Color> {
    hex_to_rgb(hex).map(|rgb| rgb.brighten(percent_delta).to_color())
}

/// Render a color as `rgba(r, g, b, opacity)` with opacity clamped to `[0, 1]`
pub fn adjust_opacity(hex: &str, opacity: f64) -> Result<String> {
    hex_to_rgb(hex).map(|rgb| rgb.rgba(opacity))
}
