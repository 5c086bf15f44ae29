//! Solution raters.
//!
//! A [`SolutionRater`] maps decoded paths to a score in `[0, 1]`, higher
//! being better. Raters are pure and hold only data precomputed at
//! construction.
//!
//! - [`DiversityRater`]: penalizes teams meeting more than once
//! - [`InterDistanceRater`]: penalizes squared walking distance between
//!   consecutive hosts
//! - [`FinalLocationDistanceRater`]: penalizes squared distance from the
//!   last host to the final venue
//! - [`CombinedRater`]: weighted average of any of the above
//!
//! The two distance raters normalize against bounds found by greedy
//! heuristics. The bounds are not exact optima, so the normalized score is
//! clamped to `[0, 1]`.

mod combined;
mod diversity;
mod final_location;
mod inter_distance;
mod types;

pub use combined::CombinedRater;
pub use diversity::DiversityRater;
pub use final_location::FinalLocationDistanceRater;
pub use inter_distance::InterDistanceRater;
pub use types::SolutionRater;

use crate::error::PlanError;

/// Which end of the scale a bound heuristic chases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extreme {
    Shortest,
    Longest,
}

impl Extreme {
    /// `true` if `candidate` strictly beats `current` for this extreme.
    fn improves(self, candidate: f64, current: f64) -> bool {
        match self {
            Extreme::Shortest => candidate < current,
            Extreme::Longest => candidate > current,
        }
    }
}

/// `1 - (actual - min) / (max - min)`, clamped to `[0, 1]`.
///
/// A degenerate range (every configuration costs the same) scores 1.
fn normalized_score(actual: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    (1.0 - (actual - min) / span).clamp(0.0, 1.0)
}

/// Rejects negative and non-finite walking costs.
fn check_distance(row: usize, col: usize, value: f64) -> Result<(), PlanError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidDistance { row, col, value })
    }
}
