//! # wcag-palette — accessible color search
//!
//! Finds colors that meet WCAG contrast tiers against a background and the
//! surrounding text, staying close to a chosen hue.
//!
//! # Architecture
//!
//! ```text
//! SearchParameters (base hue or seed color + grid ranges)
//!     │
//!     ▼
//! search.rs:     enumerate the hue × saturation × lightness grid
//!     │
//!     ▼
//! candidates.rs: CandidateSet — pluck by hue distance / min contrast, sort, dedupe
//!     │
//!     ▼
//! rating.rs:     AAA / AA / A thresholds and assessments
//!     │
//!     ▼
//! query.rs:      link colors per tier, text colors, best pick
//! ```
//!
//! Every transform returns a new [`CandidateSet`], so a single pool can be
//! filtered for several tiers without the filters seeing each other's
//! cached contrast values.

// Grid sizes come from f64 ranges divided by f64 steps.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

pub mod candidates;
pub mod error;
pub mod params;
pub mod query;
pub mod rating;
pub mod search;

pub use candidates::{CandidateSet, FilterCriteria, SortKey};
pub use error::{Error, Result};
pub use params::{SearchBase, SearchParameters};
pub use query::{
    LinkColorQuery, LinkColors, best_link_color, link_pool_params, query_by_rating, text_colors, text_pool_params,
};
pub use rating::{
    LinkAssessment, Rating, RatingThresholds, TextAssessment, assess_link, assess_text, rate_link, rate_text,
};
pub use search::{enumerate_all, enumerate_for_hue};
