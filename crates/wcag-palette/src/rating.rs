//! WCAG rating tiers and the contrast thresholds behind them.
//!
//! Link colors have to stand out from two things at once: the background
//! they sit on and the body text around them. Each tier therefore carries a
//! pair of minimum ratios.
//!
//! | Tier | vs background | vs surrounding text |
//! |------|---------------|---------------------|
//! | AAA  | 7             | 3                   |
//! | AA   | 4.5           | 2                   |
//! | A    | 3             | 1                   |

use std::fmt;
use std::str::FromStr;

use wcag_color::ColorSample;

use crate::error::Error;

/// A WCAG conformance tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    Aaa,
    Aa,
    A,
}

/// Minimum contrast ratios for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingThresholds {
    /// Against the background.
    pub background: f64,
    /// Against the surrounding text.
    pub text: f64,
}

impl Rating {
    /// Strictest first.
    pub const ALL: [Self; 3] = [Self::Aaa, Self::Aa, Self::A];

    #[must_use]
    pub const fn thresholds(self) -> RatingThresholds {
        match self {
            Self::Aaa => RatingThresholds {
                background: 7.0,
                text: 3.0,
            },
            Self::Aa => RatingThresholds {
                background: 4.5,
                text: 2.0,
            },
            Self::A => RatingThresholds {
                background: 3.0,
                text: 1.0,
            },
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::A => "A",
        }
    }

    /// Display label for an optional rating; `-` when nothing qualifies.
    #[must_use]
    pub const fn label(rating: Option<Self>) -> &'static str {
        match rating {
            Some(rating) => rating.as_str(),
            None => "-",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AAA" => Ok(Self::Aaa),
            "AA" => Ok(Self::Aa),
            "A" => Ok(Self::A),
            _ => Err(Error::InvalidArgument(format!("unsupported rating tier: {s}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Assessments
// ---------------------------------------------------------------------------

/// How body text fares against its background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAssessment {
    pub contrast: f64,
    /// AAA at 7 or more, AA at 4.5 or more; text has no A tier.
    pub rating: Option<Rating>,
}

/// How a link color fares against the background and the text around it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkAssessment {
    pub background_contrast: f64,
    pub text_contrast: f64,
    pub rating: Option<Rating>,
}

/// Rate a text contrast ratio.
#[must_use]
pub fn rate_text(contrast: f64) -> Option<Rating> {
    if contrast >= 7.0 {
        Some(Rating::Aaa)
    } else if contrast >= 4.5 {
        Some(Rating::Aa)
    } else {
        None
    }
}

/// Rate a link from its two contrast ratios.
///
/// AA here still asks for 3:1 against the text, stricter than the 2:1 the
/// AA search threshold uses, so a color found by the AA query can be
/// labelled A.
#[must_use]
pub fn rate_link(background_contrast: f64, text_contrast: f64) -> Option<Rating> {
    if background_contrast >= 7.0 && text_contrast >= 3.0 {
        Some(Rating::Aaa)
    } else if background_contrast >= 4.5 && text_contrast >= 3.0 {
        Some(Rating::Aa)
    } else if background_contrast >= 3.0 {
        Some(Rating::A)
    } else {
        None
    }
}

#[must_use]
pub fn assess_text(background: &ColorSample, text: &ColorSample) -> TextAssessment {
    let contrast = background.contrast_with(text);
    TextAssessment {
        contrast,
        rating: rate_text(contrast),
    }
}

#[must_use]
pub fn assess_link(background: &ColorSample, text: &ColorSample, link: &ColorSample) -> LinkAssessment {
    let background_contrast = background.contrast_with(link);
    let text_contrast = text.contrast_with(link);
    LinkAssessment {
        background_contrast,
        text_contrast,
        rating: rate_link(background_contrast, text_contrast),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn color(s: &str) -> ColorSample {
        ColorSample::parse(s).unwrap()
    }

    #[test]
    fn thresholds_per_tier() {
        assert_eq!(Rating::Aaa.thresholds(), RatingThresholds { background: 7.0, text: 3.0 });
        assert_eq!(Rating::Aa.thresholds(), RatingThresholds { background: 4.5, text: 2.0 });
        assert_eq!(Rating::A.thresholds(), RatingThresholds { background: 3.0, text: 1.0 });
    }

    #[test]
    fn parse_and_display_roundtrip() {
        for rating in Rating::ALL {
            assert_eq!(rating.to_string().parse::<Rating>(), Ok(rating));
        }
        assert_eq!(" aa ".parse::<Rating>(), Ok(Rating::Aa));
    }

    #[test]
    fn unknown_tier_is_invalid_argument() {
        let err = "AAAA".parse::<Rating>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument("unsupported rating tier: AAAA".to_string())
        );
    }

    #[test]
    fn label_of_none_is_dash() {
        assert_eq!(Rating::label(None), "-");
        assert_eq!(Rating::label(Some(Rating::Aa)), "AA");
    }

    #[test]
    fn text_rating_edges() {
        assert_eq!(rate_text(7.0), Some(Rating::Aaa));
        assert_eq!(rate_text(6.99), Some(Rating::Aa));
        assert_eq!(rate_text(4.5), Some(Rating::Aa));
        assert_eq!(rate_text(4.49), None);
    }

    #[test]
    fn link_rating_edges() {
        assert_eq!(rate_link(7.0, 3.0), Some(Rating::Aaa));
        assert_eq!(rate_link(7.0, 2.9), Some(Rating::A));
        assert_eq!(rate_link(4.5, 3.0), Some(Rating::Aa));
        assert_eq!(rate_link(3.0, 1.0), Some(Rating::A));
        assert_eq!(rate_link(2.99, 5.0), None);
    }

    #[test]
    fn black_text_on_white() {
        let a = assess_text(&color("#ffffff"), &color("#000000"));
        assert_eq!(a, TextAssessment { contrast: 21.0, rating: Some(Rating::Aaa) });
    }

    #[test]
    fn link_between_white_and_black() {
        // Dark enough for the background, too dark to stand out from black text.
        let a = assess_link(&color("#ffffff"), &color("#000000"), &color("#0055aa"));
        assert!(a.background_contrast >= 7.0, "{a:?}");
        assert!(a.text_contrast < 3.0, "{a:?}");
        assert_eq!(a.rating, Some(Rating::A));
    }
}
