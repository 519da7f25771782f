//! Error type for searches and queries.

use thiserror::Error;
use wcag_color::ColorError;

/// Errors from parameter validation, tier parsing and color input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter outside its allowed range, or an unknown rating tier.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A color string that could not be parsed.
    #[error(transparent)]
    Color(#[from] ColorError),
}

pub type Result<T> = std::result::Result<T, Error>;
