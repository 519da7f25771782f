//! Candidate sets and the filters that narrow them.
//!
//! A [`CandidateSet`] is an ordered list of [`ColorSample`]s. Enumeration
//! order carries no meaning; order matters only after an explicit sort.
//!
//! All transforms produce a new set. [`CandidateSet::pluck`] borrows its
//! input, so one pool can feed any number of filter chains; sorts and
//! [`CandidateSet::dedupe`] consume theirs, since they only reorder or drop.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;
use wcag_color::{ColorSample, contrast};

use crate::error::Result;

// ---------------------------------------------------------------------------
// FilterCriteria
// ---------------------------------------------------------------------------

/// What a sample must satisfy to survive [`CandidateSet::pluck`].
///
/// Bounds left unset always pass. Hue distance is the plain absolute
/// difference of the two hues in degrees (no wrap-around).
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    color: ColorSample,
    min_hue_diff: Option<f64>,
    max_hue_diff: Option<f64>,
    min_contrast: Option<f64>,
}

impl FilterCriteria {
    /// Criteria measured against `color`, with no bounds yet.
    #[must_use]
    pub fn against(color: impl Into<ColorSample>) -> Self {
        Self {
            color: color.into(),
            min_hue_diff: None,
            max_hue_diff: None,
            min_contrast: None,
        }
    }

    /// Criteria measured against a color string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Color`] if the string is not a color.
    pub fn parse(color: &str) -> Result<Self> {
        Ok(Self::against(ColorSample::parse(color)?))
    }

    /// Require at least `degrees` of hue distance from the reference.
    #[must_use]
    pub fn min_hue_diff(mut self, degrees: f64) -> Self {
        self.min_hue_diff = Some(degrees);
        self
    }

    /// Allow at most `degrees` of hue distance from the reference.
    #[must_use]
    pub fn max_hue_diff(mut self, degrees: f64) -> Self {
        self.max_hue_diff = Some(degrees);
        self
    }

    /// Require a contrast ratio of at least `ratio` against the reference.
    #[must_use]
    pub fn min_contrast(mut self, ratio: f64) -> Self {
        self.min_contrast = Some(ratio);
        self
    }

    /// The reference color.
    #[must_use]
    pub const fn color(&self) -> &ColorSample {
        &self.color
    }
}

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// A field to sort candidates by. All sorts are descending and stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Luminance,
    /// Cached contrast. Samples without one go last.
    Contrast,
    Saturation,
    Lightness,
    Hue,
}

impl SortKey {
    fn value(self, sample: &ColorSample) -> Option<f64> {
        match self {
            Self::Luminance => Some(sample.lum()),
            Self::Contrast => sample.contrast(),
            Self::Saturation => Some(sample.saturation()),
            Self::Lightness => Some(sample.lightness()),
            Self::Hue => Some(sample.hue()),
        }
    }

    /// Descending by value; missing values after present ones.
    fn compare(self, a: &ColorSample, b: &ColorSample) -> Ordering {
        match (self.value(a), self.value(b)) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

// ---------------------------------------------------------------------------
// CandidateSet
// ---------------------------------------------------------------------------

/// An ordered sequence of candidate colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    samples: Vec<ColorSample>,
}

impl CandidateSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&ColorSample> {
        self.samples.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorSample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ColorSample] {
        &self.samples
    }

    /// Keep the samples that satisfy every bound in `criteria`.
    ///
    /// Relative order is preserved. When a minimum contrast is given, each
    /// surviving sample in the result carries its contrast against the
    /// reference; `self` is left untouched.
    #[must_use]
    pub fn pluck(&self, criteria: &FilterCriteria) -> Self {
        let reference = &criteria.color;

        let samples: Vec<ColorSample> = self
            .samples
            .iter()
            .filter_map(|sample| {
                let hue_diff = (sample.hue() - reference.hue()).abs();
                if criteria.min_hue_diff.is_some_and(|min| hue_diff < min) {
                    return None;
                }
                if criteria.max_hue_diff.is_some_and(|max| hue_diff > max) {
                    return None;
                }
                match criteria.min_contrast {
                    Some(min) => {
                        let ratio = contrast(reference.lum(), sample.lum());
                        (ratio >= min).then(|| sample.clone().with_contrast(ratio))
                    }
                    None => Some(sample.clone()),
                }
            })
            .collect();

        debug!(
            reference = %reference,
            kept = samples.len(),
            total = self.samples.len(),
            "pluck"
        );
        Self { samples }
    }

    /// Stable descending sort by `key`.
    #[must_use]
    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.samples.sort_by(|a, b| key.compare(a, b));
        self
    }

    /// Brightest first.
    #[must_use]
    pub fn sort_by_luminance(self) -> Self {
        self.sort_by(SortKey::Luminance)
    }

    /// Highest cached contrast first. Run a contrast [`pluck`](Self::pluck)
    /// before this; samples without a cached contrast end up last.
    #[must_use]
    pub fn sort_by_contrast(self) -> Self {
        self.sort_by(SortKey::Contrast)
    }

    /// Collapse samples that share a hex value.
    ///
    /// The last sample seen for a hex wins, and it takes the position where
    /// that hex first appeared.
    #[must_use]
    pub fn dedupe(self) -> Self {
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(self.samples.len());
        let mut samples: Vec<ColorSample> = Vec::with_capacity(self.samples.len());

        for sample in self.samples {
            match positions.entry(sample.hex().to_string()) {
                Entry::Occupied(slot) => samples[*slot.get()] = sample,
                Entry::Vacant(slot) => {
                    slot.insert(samples.len());
                    samples.push(sample);
                }
            }
        }
        Self { samples }
    }

    /// Hex strings in set order.
    #[must_use]
    pub fn to_hex_vec(&self) -> Vec<String> {
        self.samples.iter().map(|s| s.hex().to_string()).collect()
    }
}

impl From<Vec<ColorSample>> for CandidateSet {
    fn from(samples: Vec<ColorSample>) -> Self {
        Self { samples }
    }
}

impl FromIterator<ColorSample> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = ColorSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CandidateSet {
    type Item = ColorSample;
    type IntoIter = std::vec::IntoIter<ColorSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a ColorSample;
    type IntoIter = std::slice::Iter<'a, ColorSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wcag_color::{Hsl, Rgb};

    fn sample(hex: &str) -> ColorSample {
        ColorSample::parse(hex).unwrap()
    }

    fn set(hexes: &[&str]) -> CandidateSet {
        hexes.iter().map(|h| sample(h)).collect()
    }

    fn grays() -> CandidateSet {
        set(&["#000000", "#333333", "#777777", "#bbbbbb", "#ffffff"])
    }

    // ── pluck ───────────────────────────────────────────────────────

    #[test]
    fn pluck_without_bounds_is_identity() {
        let pool = grays();
        let same = pool.pluck(&FilterCriteria::against(Rgb::WHITE));
        assert_eq!(same, pool);
    }

    #[test]
    fn pluck_min_contrast_against_white() {
        let pool = grays();
        let dark = pool.pluck(&FilterCriteria::against(Rgb::WHITE).min_contrast(4.5));
        assert_eq!(dark.to_hex_vec(), vec!["#000000", "#333333", "#777777"]);
        assert!(dark.iter().all(|s| s.contrast().is_some_and(|c| c >= 4.5)));
    }

    #[test]
    fn pluck_caches_contrast_on_result_only() {
        let pool = grays();
        let filtered = pool.pluck(&FilterCriteria::against(Rgb::WHITE).min_contrast(1.0));
        assert_eq!(filtered.len(), pool.len());
        assert_eq!(filtered.first().and_then(ColorSample::contrast), Some(21.0));
        assert!(pool.iter().all(|s| s.contrast().is_none()));
    }

    #[test]
    fn pluck_is_idempotent() {
        let pool = grays();
        let criteria = FilterCriteria::against(Rgb::BLACK).min_contrast(7.0);
        let once = pool.pluck(&criteria);
        let twice = once.pluck(&criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn pluck_preserves_order() {
        let pool = set(&["#ffffff", "#000000", "#bbbbbb", "#333333"]);
        let kept = pool.pluck(&FilterCriteria::against(Rgb::new(119, 119, 119)).min_contrast(2.5));
        assert_eq!(kept.to_hex_vec(), vec!["#ffffff", "#000000", "#333333"]);
    }

    #[test]
    fn pluck_by_hue_distance() {
        let pool: CandidateSet = [0.0, 10.0, 20.0, 30.0, 40.0]
            .into_iter()
            .map(|h| ColorSample::from_hsl(Hsl::new(h, 1.0, 0.5)))
            .collect();
        let reference = Hsl::new(20.0, 1.0, 0.5);

        let near = pool.pluck(&FilterCriteria::against(reference).max_hue_diff(10.0));
        assert_eq!(near.len(), 3);

        let far = pool.pluck(&FilterCriteria::against(reference).min_hue_diff(15.0));
        let hues: Vec<f64> = far.iter().map(ColorSample::hue).collect();
        assert_eq!(hues, vec![0.0, 40.0]);

        let ring = pool.pluck(&FilterCriteria::against(reference).min_hue_diff(5.0).max_hue_diff(15.0));
        let hues: Vec<f64> = ring.iter().map(ColorSample::hue).collect();
        assert_eq!(hues, vec![10.0, 30.0]);
    }

    #[test]
    fn pluck_with_parsed_reference() {
        let criteria = FilterCriteria::parse("rgb(255, 255, 255)").unwrap().min_contrast(7.0);
        assert_eq!(criteria.color().hex(), "#ffffff");
        assert!(FilterCriteria::parse("not a color").is_err());
    }

    #[test]
    fn pluck_of_empty_set() {
        let empty = CandidateSet::new();
        assert!(empty.pluck(&FilterCriteria::against(Rgb::WHITE).min_contrast(3.0)).is_empty());
    }

    // ── Sorting ─────────────────────────────────────────────────────

    #[test]
    fn sort_by_luminance_descending() {
        let sorted = set(&["#333333", "#ffffff", "#000000", "#777777"]).sort_by_luminance();
        assert_eq!(sorted.to_hex_vec(), vec!["#ffffff", "#777777", "#333333", "#000000"]);
    }

    #[test]
    fn sort_by_contrast_descending() {
        let sorted = grays()
            .pluck(&FilterCriteria::against(Rgb::WHITE).min_contrast(1.0))
            .sort_by_contrast();
        assert_eq!(sorted.first().map(ColorSample::hex), Some("#000000"));
        assert_eq!(sorted.as_slice().last().map(ColorSample::hex), Some("#ffffff"));
    }

    #[test]
    fn sort_is_stable() {
        // Same luminance, different hex: input order must hold.
        let a = ColorSample::from_rgb(Rgb::new(10, 10, 10));
        let b = ColorSample::from_rgb(Rgb::new(11, 11, 11));
        assert!((a.lum() - b.lum()).abs() < f64::EPSILON);
        let sorted = CandidateSet::from(vec![a.clone(), b.clone()]).sort_by_luminance();
        assert_eq!(sorted.to_hex_vec(), vec![a.hex(), b.hex()]);
        let sorted = CandidateSet::from(vec![b.clone(), a.clone()]).sort_by_luminance();
        assert_eq!(sorted.to_hex_vec(), vec![b.hex(), a.hex()]);
    }

    #[test]
    fn sort_by_contrast_puts_uncached_last() {
        let cached = sample("#000000").with_contrast(2.0);
        let uncached = sample("#ffffff");
        let sorted = CandidateSet::from(vec![uncached, cached]).sort_by_contrast();
        assert_eq!(sorted.to_hex_vec(), vec!["#000000", "#ffffff"]);
    }

    #[test]
    fn sort_by_saturation() {
        let pool: CandidateSet = [0.2, 0.9, 0.5]
            .into_iter()
            .map(|s| ColorSample::from_hsl(Hsl::new(100.0, s, 0.5)))
            .collect();
        let sorted: Vec<f64> = pool.sort_by(SortKey::Saturation).iter().map(ColorSample::saturation).collect();
        assert_eq!(sorted, vec![0.9, 0.5, 0.2]);
    }

    // ── Dedupe ──────────────────────────────────────────────────────

    #[test]
    fn dedupe_keeps_last_sample_at_first_position() {
        // Two different HSL coordinates that round to the same black.
        let first = ColorSample::from_hsl(Hsl::new(0.0, 0.5, 0.0));
        let last = ColorSample::from_hsl(Hsl::new(0.0, 1.0, 0.0));
        assert_eq!(first.hex(), last.hex());

        let pool = CandidateSet::from(vec![first, sample("#ffffff"), last.clone()]);
        let deduped = pool.dedupe();
        assert_eq!(deduped.to_hex_vec(), vec!["#000000", "#ffffff"]);
        assert_eq!(deduped.first(), Some(&last));
    }

    #[test]
    fn dedupe_without_duplicates_is_identity() {
        assert_eq!(grays().dedupe(), grays());
    }

    // ── Conversions ─────────────────────────────────────────────────

    #[test]
    fn hex_vec_and_iteration() {
        let pool = grays();
        assert_eq!(pool.to_hex_vec().len(), 5);
        assert_eq!((&pool).into_iter().count(), 5);
        assert!(pool.into_iter().map(|s| s.lum()).sum::<f64>() > 0.0);
    }
}
