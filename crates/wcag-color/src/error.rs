// SPDX-License-Identifier: MIT
//
// Parse failures for color strings. Conversions between already-valid
// representations are infallible; only text input can be malformed.

use thiserror::Error;

/// Errors produced while turning a string into a color.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The input was empty or only whitespace.
    #[error("empty color string")]
    Empty,

    /// Not a 3- or 6-digit hex color.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A `rgb()`/`rgba()`/`hsl()`/`hsla()` form with the wrong shape.
    #[error("invalid color function: {0}")]
    InvalidFunction(String),

    /// A functional component that is not a number.
    #[error("invalid color component: {0}")]
    InvalidComponent(String),

    /// A numeric component outside its allowed range.
    #[error("{component} out of range: {value}")]
    OutOfRange {
        component: &'static str,
        value: f64,
    },
}
