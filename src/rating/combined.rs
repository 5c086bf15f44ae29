use super::types::SolutionRater;
use crate::error::PlanError;
use crate::solution::PathsPerHost;

/// Weighted average of several raters.
///
/// `score = Σ(wᵢ · scoreᵢ) / Σwᵢ`. The weight sum is computed once.
///
/// # Examples
///
/// ```
/// use progressive_dinner::rating::{CombinedRater, DiversityRater, SolutionRater};
///
/// let rater = CombinedRater::new(vec![
///     (1.0, Box::new(DiversityRater) as Box<dyn SolutionRater>),
///     (3.0, Box::new(DiversityRater) as Box<dyn SolutionRater>),
/// ])
/// .unwrap();
/// assert_eq!(rater.total_weight(), 4.0);
/// ```
pub struct CombinedRater {
    raters: Vec<(f64, Box<dyn SolutionRater>)>,
    total_weight: f64,
    team_count: Option<usize>,
}

impl CombinedRater {
    /// Combines `(weight, rater)` pairs.
    ///
    /// # Errors
    ///
    /// - [`PlanError::EmptyRaterList`] if `raters` is empty
    /// - [`PlanError::NonPositiveWeight`] if any weight is not a positive,
    ///   finite number
    /// - [`PlanError::LengthMismatch`] if two raters were built for
    ///   different team counts
    pub fn new(raters: Vec<(f64, Box<dyn SolutionRater>)>) -> Result<Self, PlanError> {
        if raters.is_empty() {
            return Err(PlanError::EmptyRaterList);
        }

        let mut team_count = None;
        for (index, (weight, rater)) in raters.iter().enumerate() {
            if !(weight.is_finite() && *weight > 0.0) {
                return Err(PlanError::NonPositiveWeight {
                    index,
                    weight: *weight,
                });
            }
            match (team_count, rater.expected_team_count()) {
                (Some(expected), Some(actual)) if expected != actual => {
                    return Err(PlanError::LengthMismatch {
                        what: "rater team count",
                        expected,
                        actual,
                    });
                }
                (None, Some(actual)) => team_count = Some(actual),
                _ => {}
            }
        }

        let total_weight = raters.iter().map(|(weight, _)| weight).sum();
        Ok(Self {
            raters,
            total_weight,
            team_count,
        })
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of combined raters.
    pub fn len(&self) -> usize {
        self.raters.len()
    }

    /// Always `false`; construction rejects an empty list.
    pub fn is_empty(&self) -> bool {
        self.raters.is_empty()
    }
}

impl std::fmt::Debug for CombinedRater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedRater")
            .field("weights", &self.raters.iter().map(|(w, _)| *w).collect::<Vec<_>>())
            .field("total_weight", &self.total_weight)
            .field("team_count", &self.team_count)
            .finish()
    }
}

impl SolutionRater for CombinedRater {
    fn rate_solution(&self, paths_per_host: &PathsPerHost) -> f64 {
        let weighted: f64 = self
            .raters
            .iter()
            .map(|(weight, rater)| weight * rater.rate_solution(paths_per_host))
            .sum();
        weighted / self.total_weight
    }

    fn expected_team_count(&self) -> Option<usize> {
        self.team_count
    }

    fn check_paths(&self, paths_per_host: &PathsPerHost) -> Result<(), PlanError> {
        self.raters
            .iter()
            .try_for_each(|(_, rater)| rater.check_paths(paths_per_host))
    }
}
