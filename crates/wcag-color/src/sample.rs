// SPDX-License-Identifier: MIT
//
// ColorSample — one fully resolved color, every representation computed up
// front. The search engine produces thousands of these per query and filters
// them by luminance and hue, so nothing is derived lazily except the contrast
// against whatever reference the last filter used.
//
// Color strings come from users (pickers, CLI args, stylesheets). Accepted:
//
//   #RGB  #RRGGBB  RGB  RRGGBB
//   rgb(r, g, b)   rgba(r, g, b, a)     channels 0–255 or 0%–100%
//   hsl(h, s, l)   hsla(h, s, l, a)     h in degrees, s/l as 0%–100% or 0–1
//
// Alpha is accepted and ignored: contrast is defined for opaque colors.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::convert::{Hsl, Rgb, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
use crate::error::ColorError;
use crate::luminance::{contrast, relative_luminance};

/// `name(args)` with a CSS color function name. Arguments are split later.
static COLOR_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(rgba?|hsla?)\s*\(([^()]*)\)$").expect("color function pattern compiles")
});

// ─── ColorSample ─────────────────────────────────────────────────────────────

/// A candidate color with its RGB, HSL, hex and luminance all resolved.
///
/// The representations are derived together by the constructors and cannot
/// be changed independently afterwards. Only the cached contrast can be
/// attached later, through [`with_contrast`](Self::with_contrast).
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSample {
    rgb: Rgb,
    hsl: Hsl,
    hex: String,
    lum: f64,
    contrast: Option<f64>,
}

impl ColorSample {
    /// Resolve a color from RGB. HSL is computed from the channels.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            hsl: rgb_to_hsl(rgb),
            hex: rgb_to_hex(rgb),
            lum: relative_luminance(rgb),
            contrast: None,
        }
    }

    /// Resolve a color from HSL. The HSL values are kept exactly as given
    /// (they are the grid coordinates during a search); RGB is rounded.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let rgb = hsl_to_rgb(hsl);
        Self {
            rgb,
            hsl,
            hex: rgb_to_hex(rgb),
            lum: relative_luminance(rgb),
            contrast: None,
        }
    }

    /// Parse any accepted color string. See [`parse_color`].
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] describing why the string is not a color.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        parse_color(input)
    }

    /// Attach a computed contrast value, returning the updated sample.
    #[must_use]
    pub fn with_contrast(self, contrast: f64) -> Self {
        Self {
            contrast: Some(contrast),
            ..self
        }
    }

    /// Contrast ratio between this color and `other`.
    #[must_use]
    pub fn contrast_with(&self, other: &Self) -> f64 {
        contrast(self.lum, other.lum)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    #[inline]
    #[must_use]
    pub const fn r(&self) -> u8 {
        self.rgb.r
    }

    #[inline]
    #[must_use]
    pub const fn g(&self) -> u8 {
        self.rgb.g
    }

    #[inline]
    #[must_use]
    pub const fn b(&self) -> u8 {
        self.rgb.b
    }

    #[inline]
    #[must_use]
    pub const fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Hue in degrees.
    #[inline]
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hsl.h
    }

    #[inline]
    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.hsl.s
    }

    #[inline]
    #[must_use]
    pub const fn lightness(&self) -> f64 {
        self.hsl.l
    }

    /// Lowercase `#rrggbb`.
    #[inline]
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// WCAG relative luminance, two decimals.
    #[inline]
    #[must_use]
    pub const fn lum(&self) -> f64 {
        self.lum
    }

    /// Contrast against the reference of the last contrast filter, if any.
    #[inline]
    #[must_use]
    pub const fn contrast(&self) -> Option<f64> {
        self.contrast
    }
}

impl From<Rgb> for ColorSample {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsl> for ColorSample {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl)
    }
}

impl FromStr for ColorSample {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl fmt::Display for ColorSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Parse a hex, `rgb()`, `rgba()`, `hsl()` or `hsla()` color string.
///
/// # Errors
///
/// - [`ColorError::Empty`] for blank input
/// - [`ColorError::InvalidHex`] for a malformed hex color
/// - [`ColorError::InvalidFunction`] for a functional form without 3 or 4 arguments
/// - [`ColorError::InvalidComponent`] for a non-numeric argument
/// - [`ColorError::OutOfRange`] for a channel, saturation or lightness outside its range
pub fn parse_color(input: &str) -> Result<ColorSample, ColorError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    let Some(caps) = COLOR_FUNCTION.captures(s) else {
        if s.contains('(') {
            return Err(ColorError::InvalidFunction(input.to_string()));
        }
        return hex_to_rgb(s).map(ColorSample::from_rgb);
    };

    let args: Vec<&str> = caps[2].split(',').map(str::trim).collect();
    if !(3..=4).contains(&args.len()) {
        return Err(ColorError::InvalidFunction(input.to_string()));
    }

    if caps[1].to_ascii_lowercase().starts_with("hsl") {
        let h = parse_number(args[0])?;
        let s = parse_unit("saturation", args[1])?;
        let l = parse_unit("lightness", args[2])?;
        Ok(ColorSample::from_hsl(Hsl::new(h.value.rem_euclid(360.0), s, l)))
    } else {
        let r = parse_channel("red", args[0])?;
        let g = parse_channel("green", args[1])?;
        let b = parse_channel("blue", args[2])?;
        Ok(ColorSample::from_rgb(Rgb::new(r, g, b)))
    }
}

/// A numeric component and whether it carried a `%` suffix.
struct Number {
    value: f64,
    percent: bool,
}

fn parse_number(arg: &str) -> Result<Number, ColorError> {
    let (digits, percent) = match arg.strip_suffix('%') {
        Some(rest) => (rest.trim_end(), true),
        None => (arg, false),
    };
    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Number { value, percent }),
        _ => Err(ColorError::InvalidComponent(arg.to_string())),
    }
}

/// An RGB channel: 0–255, or 0%–100% of 255.
fn parse_channel(component: &'static str, arg: &str) -> Result<u8, ColorError> {
    let n = parse_number(arg)?;
    let value = if n.percent { n.value * 255.0 / 100.0 } else { n.value };
    if !(0.0..=255.0).contains(&value) {
        return Err(ColorError::OutOfRange { component, value });
    }
    Ok(value.round() as u8)
}

/// Saturation or lightness: 0%–100%, or a bare fraction 0–1.
fn parse_unit(component: &'static str, arg: &str) -> Result<f64, ColorError> {
    let n = parse_number(arg)?;
    let value = if n.percent { n.value / 100.0 } else { n.value };
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorError::OutOfRange { component, value });
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
