// SPDX-License-Identifier: MIT
//
// wcag-color — color representations and WCAG contrast math for wcag-colors.
//
// The leaf of the workspace. Everything here is a pure function over small
// Copy values: hex strings, 8-bit RGB triples, and HSL triples with the hue
// in degrees. A `ColorSample` bundles all of them together with the WCAG
// relative luminance, so the search engine never recomputes a conversion
// once a candidate exists.
//
//   "#0256b0" / "rgb(2,86,176)" / "hsl(211,98%,35%)"
//        │
//        ▼
//   parse_color ──► Rgb ◄──► Hsl
//        │           │
//        ▼           ▼
//   ColorSample ◄── relative_luminance ──► contrast

// Single-character variable names (r, g, b, h, s, l, p, q) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
// Channel math moves between u8 and f64 constantly; every cast is clamped first.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod convert;
pub mod error;
pub mod luminance;
pub mod sample;

pub use convert::{Hsl, Rgb, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use error::ColorError;
pub use luminance::{contrast, relative_luminance, round2};
pub use sample::{ColorSample, parse_color};
