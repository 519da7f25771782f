// SPDX-License-Identifier: MIT
//
// Conversions between hex strings, 8-bit RGB and HSL.
//
// Hue is carried in degrees everywhere in this workspace. The piecewise
// HSL → RGB function works on a normalized hue (six segments of width 1/6),
// so degrees are wrapped into [0, 360) and divided by 360 at that boundary
// only. RGB → HSL multiplies back out to degrees.

use std::fmt;

use crate::error::ColorError;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Channels scaled to 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// Hue (degrees), saturation and lightness (both 0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue angle in degrees, nominally 0.0 to 360.0.
    pub h: f64,
    /// Saturation, 0.0 (gray) to 1.0 (fully saturated).
    pub s: f64,
    /// Lightness, 0.0 (black) to 1.0 (white).
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.1}, {:.1}%, {:.1}%)",
            self.h,
            self.s * 100.0,
            self.l * 100.0
        )
    }
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

/// Parse a `#RGB` or `#RRGGBB` hex color (the `#` is optional).
///
/// Shorthand is expanded digit by digit, so `03F` is `0033FF`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] for any other length or a non-hex digit.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let bytes = digits.as_bytes();
    let invalid = || ColorError::InvalidHex(hex.to_string());

    match bytes.len() {
        3 => {
            let r = parse_hex_digit(bytes[0]).ok_or_else(invalid)?;
            let g = parse_hex_digit(bytes[1]).ok_or_else(invalid)?;
            let b = parse_hex_digit(bytes[2]).ok_or_else(invalid)?;
            Ok(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let r = parse_hex_byte(&bytes[0..2]).ok_or_else(invalid)?;
            let g = parse_hex_byte(&bytes[2..4]).ok_or_else(invalid)?;
            let b = parse_hex_byte(&bytes[4..6]).ok_or_else(invalid)?;
            Ok(Rgb::new(r, g, b))
        }
        _ => Err(invalid()),
    }
}

/// Format as lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── RGB ↔ HSL ───────────────────────────────────────────────────────────────

/// Convert RGB to HSL with the hue in degrees.
///
/// Gray inputs (r == g == b) are achromatic: hue and saturation are both 0.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if rgb.r == rgb.g && rgb.g == rgb.b {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let top = rgb.r.max(rgb.g).max(rgb.b);
    let h = if top == rgb.r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if top == rgb.g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h * 60.0, s, l)
}

/// Convert HSL (hue in degrees) to RGB, rounding each channel.
///
/// Zero saturation short-circuits to a gray of `round(l * 255)`.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { s, l, .. } = hsl;

    if s <= 0.0 {
        let v = to_channel(l);
        return Rgb::new(v, v, v);
    }

    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let p = 2.0f64.mul_add(l, -q);

    Rgb::new(
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// One channel of the piecewise HSL → RGB function. `t` is a normalized hue
/// offset, wrapped once into [0, 1].
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

/// Scale 0.0–1.0 to a rounded 0–255 channel.
#[inline]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
