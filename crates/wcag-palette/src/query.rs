//! Accessibility queries — link colors per tier, text colors, best pick.
//!
//! A link query needs a pool of candidates around the link hue. Building it
//! is the expensive step, and the AAA/AA/A queries all share it, so
//! [`LinkColorQuery`] keeps the pool until the hue changes.

use tracing::{debug, trace};
use wcag_color::ColorSample;

use crate::candidates::{CandidateSet, FilterCriteria};
use crate::error::Result;
use crate::params::{SearchParameters, validate_hue};
use crate::rating::Rating;
use crate::search::enumerate_all;

/// Minimum contrast a suggested body-text color needs against the background.
pub const TEXT_MIN_CONTRAST: f64 = 4.5;

// ---------------------------------------------------------------------------
// Pool recipes
// ---------------------------------------------------------------------------

/// Parameters for the link-color pool: `hue` itself at every saturation and
/// lightness in 0.05 steps.
///
/// The sweep is bounded at 3° but steps by the default 15°, so only offset
/// 0 runs. Both sweep hues are then the same and the merge collapses
/// duplicate hexes.
#[must_use]
pub fn link_pool_params(hue: f64) -> SearchParameters {
    SearchParameters::for_hue(hue)
        .saturation(0.0, 1.0, 0.05)
        .lightness(0.0, 1.0, 0.05)
        .hue_diff(0.0, 3.0, 15.0)
}

/// Parameters for body-text candidates: near-gray tints of the background's
/// own hue, within 20° of it, across the whole lightness axis.
#[must_use]
pub fn text_pool_params(background: &ColorSample) -> SearchParameters {
    SearchParameters::for_color(background.clone())
        .saturation(0.0, 0.3, 0.1)
        .lightness(0.0, 1.0, 0.1)
        .hue_diff(0.0, 20.0, 10.0)
}

/// Readable body-text colors for `background`, highest contrast first.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] if the background's hue cannot
/// seed a search (it always can for a parsed color).
pub fn text_colors(background: &ColorSample) -> Result<Vec<String>> {
    let pool = enumerate_all(&text_pool_params(background))?;
    let colors = pool
        .pluck(&FilterCriteria::against(background.clone()).min_contrast(TEXT_MIN_CONTRAST))
        .sort_by_contrast()
        .to_hex_vec();
    debug!(background = %background, found = colors.len(), "text colors");
    Ok(colors)
}

// ---------------------------------------------------------------------------
// Tier queries
// ---------------------------------------------------------------------------

/// Colors from `pool` that meet `rating` against both `background` and
/// `text`, sorted by their contrast against the text (highest first, ties
/// in pool order).
#[must_use]
pub fn query_by_rating(
    pool: &CandidateSet,
    rating: Rating,
    background: &ColorSample,
    text: &ColorSample,
) -> Vec<String> {
    let thresholds = rating.thresholds();
    let colors = pool
        .pluck(&FilterCriteria::against(background.clone()).min_contrast(thresholds.background))
        .pluck(&FilterCriteria::against(text.clone()).min_contrast(thresholds.text))
        .sort_by_contrast()
        .to_hex_vec();
    debug!(%rating, found = colors.len(), "query by rating");
    colors
}

/// Link colors grouped by tier.
///
/// `aa` excludes anything already listed in `aaa`; `a` is left as queried
/// and may repeat colors from both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkColors {
    pub aaa: Vec<String>,
    pub aa: Vec<String>,
    pub a: Vec<String>,
}

impl LinkColors {
    /// The list for one tier.
    #[must_use]
    pub fn tier(&self, rating: Rating) -> &[String] {
        match rating {
            Rating::Aaa => &self.aaa,
            Rating::Aa => &self.aa,
            Rating::A => &self.a,
        }
    }

    /// The head of the strictest non-empty tier.
    #[must_use]
    pub fn best(&self) -> Option<&str> {
        best_link_color(self)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aaa.is_empty() && self.aa.is_empty() && self.a.is_empty()
    }
}

/// First AAA color, else first AA, else first A. `None` means no accessible
/// color exists for this hue.
#[must_use]
pub fn best_link_color(colors: &LinkColors) -> Option<&str> {
    Rating::ALL
        .into_iter()
        .find_map(|rating| colors.tier(rating).first())
        .map(String::as_str)
}

/// Remove the first occurrence of each of `stricter` from `list`.
fn remove_each(list: &mut Vec<String>, stricter: &[String]) {
    for color in stricter {
        if let Some(pos) = list.iter().position(|c| c == color) {
            list.remove(pos);
        }
    }
}

// ---------------------------------------------------------------------------
// LinkColorQuery
// ---------------------------------------------------------------------------

/// Link-color search state: background, body text, link hue and the pool
/// built for that hue.
#[derive(Debug, Clone)]
pub struct LinkColorQuery {
    background: ColorSample,
    text: ColorSample,
    hue: f64,
    pool: Option<CandidateSet>,
}

impl LinkColorQuery {
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if `hue` is outside [0, 360).
    pub fn new(background: ColorSample, text: ColorSample, hue: f64) -> Result<Self> {
        validate_hue(hue)?;
        Ok(Self {
            background,
            text,
            hue,
            pool: None,
        })
    }

    #[must_use]
    pub const fn background(&self) -> &ColorSample {
        &self.background
    }

    #[must_use]
    pub const fn text(&self) -> &ColorSample {
        &self.text
    }

    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Whether a pool is currently cached.
    #[must_use]
    pub const fn has_pool(&self) -> bool {
        self.pool.is_some()
    }

    /// Switch to a new link hue and drop the cached pool.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if `hue` is outside [0, 360);
    /// the query is left unchanged.
    pub fn invalidate(&mut self, hue: f64) -> Result<()> {
        validate_hue(hue)?;
        self.hue = hue;
        self.pool = None;
        Ok(())
    }

    /// Change the background. The pool depends only on the hue, so it is
    /// kept.
    pub fn set_background(&mut self, background: ColorSample) {
        self.background = background;
    }

    /// Change the surrounding text color. The pool is kept.
    pub fn set_text_color(&mut self, text: ColorSample) {
        self.text = text;
    }

    /// Link colors meeting `rating`, building the pool on first use.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if the pool parameters fail
    /// validation.
    pub fn query(&mut self, rating: Rating) -> Result<Vec<String>> {
        let pool = ensure_pool(&mut self.pool, self.hue)?;
        Ok(query_by_rating(pool, rating, &self.background, &self.text))
    }

    /// All three tiers from one pool, with AAA colors removed from AA.
    ///
    /// # Errors
    ///
    /// Same as [`query`](Self::query).
    pub fn link_colors(&mut self) -> Result<LinkColors> {
        let pool = ensure_pool(&mut self.pool, self.hue)?;
        let [aaa, mut aa, a] =
            Rating::ALL.map(|rating| query_by_rating(pool, rating, &self.background, &self.text));
        remove_each(&mut aa, &aaa);
        Ok(LinkColors { aaa, aa, a })
    }

    /// The best link color across tiers.
    ///
    /// # Errors
    ///
    /// Same as [`query`](Self::query).
    pub fn best(&mut self) -> Result<Option<String>> {
        Ok(self.link_colors()?.best().map(str::to_string))
    }
}

/// Return the cached pool, building it first if needed.
fn ensure_pool(slot: &mut Option<CandidateSet>, hue: f64) -> Result<&CandidateSet> {
    let pool = match slot.take() {
        Some(pool) => {
            trace!(hue, "reusing link pool");
            pool
        }
        None => {
            let pool = enumerate_all(&link_pool_params(hue))?;
            debug!(hue, samples = pool.len(), "built link pool");
            pool
        }
    };
    let pool: &CandidateSet = slot.insert(pool);
    Ok(pool)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
