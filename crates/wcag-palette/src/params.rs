//! Search parameters — the configuration of one grid enumeration.
//!
//! | Parameter        | Unit    | Default | Range        |
//! |------------------|---------|---------|--------------|
//! | `min_saturation` | 0–1     | 0       | [0, 1]       |
//! | `max_saturation` | 0–1     | 1       | [0, 1]       |
//! | `step_saturation`| 0–1     | 0.1     | (0, 1]       |
//! | `min_lightness`  | 0–1     | 0       | [0, 1]       |
//! | `max_lightness`  | 0–1     | 1       | [0, 1]       |
//! | `step_lightness` | 0–1     | 0.1     | (0, 1]       |
//! | `min_hue_diff`   | degrees | 0       | [0, 360)     |
//! | `max_hue_diff`   | degrees | 359     | [0, 360)     |
//! | `step_hue`       | degrees | 15      | (0, 360)     |
//!
//! The grid grows with 1/step² per hue. Steps below 0.01 still work but
//! produce tens of thousands of samples per hue and log a warning. A search
//! that would visit more than [`MAX_GRID_POINTS`] points in total is
//! rejected.

use tracing::warn;
use wcag_color::ColorSample;

use crate::error::{Error, Result};

/// Tolerance for float accumulation when walking a grid axis.
pub const GRID_EPSILON: f64 = 0.001;

/// Saturation/lightness steps below this are slow enough to warn about.
pub const FINE_STEP: f64 = 0.01;

/// Upper bound on grid points one enumeration may visit, counting every
/// swept hue.
pub const MAX_GRID_POINTS: f64 = 10_000_000.0;

/// Where the hue sweep starts.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchBase {
    /// An explicit hue in degrees.
    Hue(f64),
    /// A seed color whose own hue is used.
    Color(ColorSample),
}

/// Immutable description of one enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParameters {
    pub base: SearchBase,

    pub min_saturation: f64,
    pub max_saturation: f64,
    pub step_saturation: f64,

    pub min_lightness: f64,
    pub max_lightness: f64,
    pub step_lightness: f64,

    pub min_hue_diff: f64,
    pub max_hue_diff: f64,
    pub step_hue: f64,
}

impl SearchParameters {
    /// Default ranges around an explicit hue (degrees).
    #[must_use]
    pub const fn for_hue(hue: f64) -> Self {
        Self::with_base(SearchBase::Hue(hue))
    }

    /// Default ranges around the hue of a seed color.
    #[must_use]
    pub fn for_color(color: ColorSample) -> Self {
        Self::with_base(SearchBase::Color(color))
    }

    const fn with_base(base: SearchBase) -> Self {
        Self {
            base,
            min_saturation: 0.0,
            max_saturation: 1.0,
            step_saturation: 0.1,
            min_lightness: 0.0,
            max_lightness: 1.0,
            step_lightness: 0.1,
            min_hue_diff: 0.0,
            max_hue_diff: 359.0,
            step_hue: 15.0,
        }
    }

    /// Replace the saturation range.
    #[must_use]
    pub fn saturation(self, min: f64, max: f64, step: f64) -> Self {
        Self {
            min_saturation: min,
            max_saturation: max,
            step_saturation: step,
            ..self
        }
    }

    /// Replace the lightness range.
    #[must_use]
    pub fn lightness(self, min: f64, max: f64, step: f64) -> Self {
        Self {
            min_lightness: min,
            max_lightness: max,
            step_lightness: step,
            ..self
        }
    }

    /// Replace the hue-offset sweep (degrees).
    #[must_use]
    pub fn hue_diff(self, min: f64, max: f64, step: f64) -> Self {
        Self {
            min_hue_diff: min,
            max_hue_diff: max,
            step_hue: step,
            ..self
        }
    }

    /// The hue the sweep is centered on, in degrees.
    #[must_use]
    pub const fn base_hue(&self) -> f64 {
        match &self.base {
            SearchBase::Hue(hue) => *hue,
            SearchBase::Color(color) => color.hue(),
        }
    }

    /// Number of samples a single hue produces. Saturates at `usize::MAX`.
    #[must_use]
    pub fn samples_per_hue(&self) -> usize {
        axis_len(self.min_saturation, self.max_saturation, self.step_saturation)
            .saturating_mul(axis_len(self.min_lightness, self.max_lightness, self.step_lightness))
    }

    /// Grid points a full enumeration visits: two hues per offset when
    /// sweeping, one otherwise.
    fn grid_points(&self) -> f64 {
        let per_hue = axis_points(self.min_saturation, self.max_saturation, self.step_saturation)
            * axis_points(self.min_lightness, self.max_lightness, self.step_lightness);
        if self.max_hue_diff > 0.0 {
            per_hue * 2.0 * axis_points(self.min_hue_diff, self.max_hue_diff, self.step_hue)
        } else {
            per_hue
        }
    }

    /// Check every range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        validate_hue(self.base_hue())?;

        check_unit_range("saturation", self.min_saturation, self.max_saturation)?;
        check_unit_step("step_saturation", self.step_saturation)?;
        check_unit_range("lightness", self.min_lightness, self.max_lightness)?;
        check_unit_step("step_lightness", self.step_lightness)?;

        for (name, value) in [("min_hue_diff", self.min_hue_diff), ("max_hue_diff", self.max_hue_diff)] {
            if !(0.0..360.0).contains(&value) {
                return Err(invalid(format!("{name} must be in [0, 360), got {value}")));
            }
        }
        if self.min_hue_diff > self.max_hue_diff {
            return Err(invalid(format!(
                "min_hue_diff {} exceeds max_hue_diff {}",
                self.min_hue_diff, self.max_hue_diff
            )));
        }
        if self.max_hue_diff > 0.0 && !(self.step_hue > 0.0 && self.step_hue < 360.0) {
            return Err(invalid(format!("step_hue must be in (0, 360), got {}", self.step_hue)));
        }

        let points = self.grid_points();
        if points > MAX_GRID_POINTS {
            return Err(invalid(format!(
                "search grid of {points:e} points exceeds the limit of {MAX_GRID_POINTS:e}"
            )));
        }

        if self.step_saturation < FINE_STEP || self.step_lightness < FINE_STEP {
            warn!(
                step_saturation = self.step_saturation,
                step_lightness = self.step_lightness,
                samples_per_hue = self.samples_per_hue(),
                "very fine search steps"
            );
        }
        Ok(())
    }
}

/// Reject hues outside [0, 360) (and NaN).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an out-of-range hue.
pub fn validate_hue(hue: f64) -> Result<()> {
    if (0.0..360.0).contains(&hue) {
        Ok(())
    } else {
        Err(invalid(format!("hue must be in [0, 360), got {hue}")))
    }
}

fn check_unit_range(name: &str, min: f64, max: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) {
        return Err(invalid(format!("{name} bounds must be in [0, 1], got {min}..{max}")));
    }
    if min > max {
        return Err(invalid(format!("{name} minimum {min} exceeds maximum {max}")));
    }
    Ok(())
}

fn check_unit_step(name: &str, step: f64) -> Result<()> {
    if step > 0.0 && step <= 1.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be in (0, 1], got {step}")))
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidArgument(message)
}

// ---------------------------------------------------------------------------
// Grid axes
// ---------------------------------------------------------------------------

/// Number of points on `min..=max` by `step`, with [`GRID_EPSILON`] slack.
fn axis_points(min: f64, max: f64, step: f64) -> f64 {
    ((max - min + GRID_EPSILON) / step).floor() + 1.0
}

/// [`axis_points`] as a count, saturating at `usize::MAX`.
fn axis_len(min: f64, max: f64, step: f64) -> usize {
    (((max - min + GRID_EPSILON) / step).floor().max(0.0) as usize).saturating_add(1)
}

/// Points `min, min + step, …` up to `max` inclusive.
///
/// Each point is computed from its index rather than by repeated addition,
/// and clamped to `max` so the epsilon never pushes a value out of range.
/// Callers validate `step > 0` first.
pub(crate) fn axis(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    (0..axis_len(min, max, step)).map(move |i| step.mul_add(i as f64, min).min(max))
}
