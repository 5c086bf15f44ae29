use super::types::SolutionRater;
use super::{check_distance, normalized_score, Extreme};
use crate::error::PlanError;
use crate::solution::PathsPerHost;

/// Penalizes a long walk from the last course to the final venue.
///
/// The actual cost is the mean over team paths of the squared distance
/// from the path's last host to the venue. Since only `teams_per_course`
/// teams can host the last course, the best (worst) case is the mean of
/// the squares of the `teams_per_course` smallest (largest) distances.
#[derive(Debug, Clone)]
pub struct FinalLocationDistanceRater {
    dist_to_final_loc: Vec<f64>,
    min_cost: f64,
    max_cost: f64,
}

impl FinalLocationDistanceRater {
    /// `dist_to_final_loc[t]` is the walking cost from team `t` to the venue.
    ///
    /// # Errors
    ///
    /// - [`PlanError::EmptyDistanceVector`]
    /// - [`PlanError::InvalidDistance`] for negative or non-finite entries
    /// - [`PlanError::InvalidGroupSize`] if `teams_per_course` is zero or
    ///   does not divide the number of teams
    pub fn new(dist_to_final_loc: Vec<f64>, teams_per_course: usize) -> Result<Self, PlanError> {
        let teams = dist_to_final_loc.len();
        if teams == 0 {
            return Err(PlanError::EmptyDistanceVector);
        }
        for (row, &value) in dist_to_final_loc.iter().enumerate() {
            check_distance(row, 0, value)?;
        }
        if teams_per_course == 0 || teams % teams_per_course != 0 {
            return Err(PlanError::InvalidGroupSize {
                teams,
                teams_per_course,
            });
        }

        let min_cost = extreme_bound(&dist_to_final_loc, teams_per_course, Extreme::Shortest);
        let max_cost = extreme_bound(&dist_to_final_loc, teams_per_course, Extreme::Longest);
        tracing::debug!(min_cost, max_cost, teams, "final-location bounds");

        Ok(Self {
            dist_to_final_loc,
            min_cost,
            max_cost,
        })
    }

    pub fn min_cost(&self) -> f64 {
        self.min_cost
    }

    pub fn max_cost(&self) -> f64 {
        self.max_cost
    }
}

impl SolutionRater for FinalLocationDistanceRater {
    fn rate_solution(&self, paths_per_host: &PathsPerHost) -> f64 {
        if paths_per_host.is_empty() {
            return 1.0;
        }
        let total: f64 = paths_per_host
            .values()
            .filter_map(|path| path.last())
            .map(|&host| self.dist_to_final_loc[host].powi(2))
            .sum();
        let actual = total / paths_per_host.len() as f64;
        normalized_score(actual, self.min_cost, self.max_cost)
    }

    fn expected_team_count(&self) -> Option<usize> {
        Some(self.dist_to_final_loc.len())
    }
}

/// Repeatedly removes the most extreme remaining distance from a working
/// copy; returns the mean of the squares removed.
fn extreme_bound(distances: &[f64], take: usize, extreme: Extreme) -> f64 {
    let mut remaining = distances.to_vec();
    let mut total = 0.0;
    for _ in 0..take {
        let mut pick = 0;
        for (i, &d) in remaining.iter().enumerate().skip(1) {
            if extreme.improves(d, remaining[pick]) {
                pick = i;
            }
        }
        total += remaining.swap_remove(pick).powi(2);
    }
    total / take as f64
}
