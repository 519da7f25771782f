//! Grid enumeration — turn [`SearchParameters`] into a [`CandidateSet`].
//!
//! For one hue the grid is saturation × lightness. The full search sweeps a
//! range of hue offsets from the base hue and merges the per-hue grids,
//! keeping the first sample seen for each hex, then sorts by luminance.

use std::collections::HashSet;

use tracing::debug;
use wcag_color::{ColorSample, Hsl};

use crate::candidates::CandidateSet;
use crate::error::Result;
use crate::params::{SearchParameters, axis, validate_hue};

/// Every grid point for a single hue, in saturation-major order.
///
/// One sample per grid point; samples that round to the same hex are kept.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] if `hue` or `params` are out of range.
pub fn enumerate_for_hue(hue: f64, params: &SearchParameters) -> Result<CandidateSet> {
    validate_hue(hue)?;
    params.validate()?;
    Ok(hue_grid(hue, params).collect())
}

/// The saturation × lightness grid for `hue`. `hue` is not range-checked:
/// the sweep may hand over values past 359, which the conversion wraps.
fn hue_grid(hue: f64, params: &SearchParameters) -> impl Iterator<Item = ColorSample> + '_ {
    axis(params.min_saturation, params.max_saturation, params.step_saturation).flat_map(
        move |saturation| {
            axis(params.min_lightness, params.max_lightness, params.step_lightness)
                .map(move |lightness| ColorSample::from_hsl(Hsl::new(hue, saturation, lightness)))
        },
    )
}

/// Enumerate every candidate the parameters describe.
///
/// With `max_hue_diff == 0` this is exactly [`enumerate_for_hue`] on the
/// base hue: unsorted and with duplicates. Otherwise each offset yields an
/// "up" hue (`base + offset`, wrapped once past 359) and a "down" hue
/// (`base + offset`, lifted by 360 when negative); both grids are merged
/// first-hex-wins and the result is sorted brightest first.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] if `params` are out of range.
pub fn enumerate_all(params: &SearchParameters) -> Result<CandidateSet> {
    params.validate()?;
    let base = params.base_hue();

    if params.max_hue_diff <= 0.0 {
        let set: CandidateSet = hue_grid(base, params).collect();
        debug!(hue = base, samples = set.len(), "enumerated single hue");
        return Ok(set);
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<ColorSample> = Vec::new();
    let mut hues = 0usize;

    for offset in axis(params.min_hue_diff, params.max_hue_diff, params.step_hue) {
        let shifted = base + offset;
        // Both directions add the offset; only the wrap differs.
        let up = if shifted > 359.0 { shifted % 360.0 } else { shifted };
        let down = if shifted < 0.0 { shifted + 360.0 } else { shifted };

        for hue in [up, down] {
            hues += 1;
            for sample in hue_grid(hue, params) {
                if seen.insert(sample.hex().to_string()) {
                    merged.push(sample);
                }
            }
        }
    }

    debug!(
        base_hue = base,
        hues,
        samples_per_hue = params.samples_per_hue(),
        unique = merged.len(),
        "enumerated hue sweep"
    );
    Ok(CandidateSet::from(merged).sort_by_luminance())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    // ── enumerate_for_hue ───────────────────────────────────────────

    #[test]
    fn default_grid_is_eleven_by_eleven() {
        let set = enumerate_for_hue(211.0, &SearchParameters::for_hue(211.0)).unwrap();
        assert_eq!(set.len(), 121);
    }

    #[test]
    fn grid_is_saturation_major() {
        let params = SearchParameters::for_hue(0.0)
            .saturation(0.0, 1.0, 0.5)
            .lightness(0.0, 1.0, 0.5);
        let set = enumerate_for_hue(0.0, &params).unwrap();
        let coords: Vec<(f64, f64)> = set.iter().map(|s| (s.saturation(), s.lightness())).collect();
        assert_eq!(
            coords,
            vec![
                (0.0, 0.0),
                (0.0, 0.5),
                (0.0, 1.0),
                (0.5, 0.0),
                (0.5, 0.5),
                (0.5, 1.0),
                (1.0, 0.0),
                (1.0, 0.5),
                (1.0, 1.0),
            ]
        );
    }

    #[test]
    fn grid_keeps_duplicate_hexes() {
        // Lightness 0 is black at every saturation.
        let set = enumerate_for_hue(120.0, &SearchParameters::for_hue(120.0)).unwrap();
        let blacks = set.iter().filter(|s| s.hex() == "#000000").count();
        assert_eq!(blacks, 11);
    }

    #[test]
    fn grid_samples_carry_the_hue() {
        let set = enumerate_for_hue(42.0, &SearchParameters::for_hue(42.0)).unwrap();
        assert!(set.iter().all(|s| (s.hue() - 42.0).abs() < f64::EPSILON));
    }

    #[test]
    fn grid_respects_lightness_bounds() {
        let params = SearchParameters::for_hue(211.0).lightness(0.0, 0.5, 0.05);
        let set = enumerate_for_hue(211.0, &params).unwrap();
        assert_eq!(set.len(), 11 * 11);
        assert!(set.iter().all(|s| s.lightness() <= 0.5));
    }

    #[test]
    fn grid_rejects_bad_hue() {
        let params = SearchParameters::for_hue(0.0);
        assert!(matches!(
            enumerate_for_hue(360.0, &params),
            Err(Error::InvalidArgument(_))
        ));
    }

    // ── enumerate_all ───────────────────────────────────────────────

    #[test]
    fn zero_hue_spread_is_single_hue_grid() {
        let params = SearchParameters::for_hue(211.0).hue_diff(0.0, 0.0, 15.0);
        let all = enumerate_all(&params).unwrap();
        let one = enumerate_for_hue(211.0, &params).unwrap();
        assert_eq!(all, one);
    }

    #[test]
    fn sweep_is_unique_and_sorted_by_luminance() {
        let set = enumerate_all(&SearchParameters::for_hue(211.0)).unwrap();
        let hexes = set.to_hex_vec();
        let unique: HashSet<&String> = hexes.iter().collect();
        assert_eq!(unique.len(), hexes.len());
        assert!(set.as_slice().windows(2).all(|w| w[0].lum() >= w[1].lum()));
        assert_eq!(set.first().map(ColorSample::hex), Some("#ffffff"));
    }

    #[test]
    fn sweep_first_occurrence_wins() {
        // Black first appears at the base hue with saturation 0.
        let set = enumerate_all(&SearchParameters::for_hue(100.0)).unwrap();
        let black = set.iter().find(|s| s.hex() == "#000000").unwrap();
        assert!((black.hue() - 100.0).abs() < f64::EPSILON);
        assert!(black.saturation().abs() < f64::EPSILON);
    }

    #[test]
    fn sweep_wraps_past_359() {
        let params = SearchParameters::for_hue(350.0).hue_diff(0.0, 20.0, 20.0);
        let set = enumerate_all(&params).unwrap();
        // 350 + 20 wraps to 10; nothing should carry an unwrapped hue as the
        // first sample of its hex.
        assert!(set.iter().any(|s| (s.hue() - 10.0).abs() < 1e-9));
        assert!(set.iter().all(|s| s.hue() < 360.0));
    }

    #[test]
    fn sweep_from_seed_color() {
        let seed = ColorSample::parse("#ffffff").unwrap();
        let params = SearchParameters::for_color(seed).hue_diff(0.0, 20.0, 10.0).saturation(0.0, 0.3, 0.1);
        let set = enumerate_all(&params).unwrap();
        assert!(!set.is_empty());
        assert!(set.iter().all(|s| s.saturation() <= 0.3));
    }

    #[test]
    fn sweep_validates_params() {
        let params = SearchParameters::for_hue(10.0).saturation(0.0, 2.0, 0.1);
        assert!(matches!(enumerate_all(&params), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn oversized_grids_fail_instead_of_running() {
        let fine_hue = SearchParameters::for_hue(0.0).hue_diff(0.0, 359.0, 1e-300);
        assert!(matches!(enumerate_all(&fine_hue), Err(Error::InvalidArgument(_))));

        let fine_lightness = SearchParameters::for_hue(0.0).lightness(0.0, 1.0, 1e-10);
        assert!(matches!(
            enumerate_for_hue(0.0, &fine_lightness),
            Err(Error::InvalidArgument(_))
        ));
    }
}
