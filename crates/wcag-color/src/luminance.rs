// SPDX-License-Identifier: MIT
//
// WCAG 2.0 relative luminance and contrast ratio.
//
// Both results are rounded to two decimal places. Tier thresholds (7, 4.5,
// 3) are compared against the rounded values, so a ratio of 6.996 passes
// AAA exactly the way a reader of the displayed "7.00" would expect.
//
// Reference: https://www.w3.org/TR/2008/REC-WCAG20-20081211/#relativeluminancedef

use crate::convert::Rgb;

/// Round to two decimal places, halves away from zero.
#[inline]
#[must_use]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Linearize one 8-bit sRGB channel using the WCAG 2.0 knee (0.03928).
#[inline]
fn linear_channel(c: u8) -> f64 {
    let v = f64::from(c) / 255.0;
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an sRGB color, in [0.0, 1.0], two decimals.
///
///   L = 0.2126 * R + 0.7152 * G + 0.0722 * B   (linearized channels)
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let r = linear_channel(rgb.r);
    let g = linear_channel(rgb.g);
    let b = linear_channel(rgb.b);
    round2(0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b)))
}

/// Contrast ratio between two relative luminances, in [1.0, 21.0].
///
/// Argument order does not matter.
#[must_use]
pub fn contrast(lum1: f64, lum2: f64) -> f64 {
    let forward = (lum1 + 0.05) / (lum2 + 0.05);
    let backward = (lum2 + 0.05) / (lum1 + 0.05);
    round2(forward.max(backward))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
