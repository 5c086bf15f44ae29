//! Planning entry point.

use super::distance::{build_distance_matrix, build_final_distances, DistanceProvider};
use super::types::{DinnerTeam, RaterType};
use crate::error::PlanError;
use crate::init::{meal_group_count, FinalLocationInitializer, Initializer, RandomInitializer};
use crate::optimizer::{GeneticOptimizer, OptimizationResult, OptimizerConfig};
use crate::rating::{
    CombinedRater, DiversityRater, FinalLocationDistanceRater, InterDistanceRater, SolutionRater,
};
use crate::solution::PathsPerHost;

/// Turns a team roster and weighted criteria into a dinner plan.
///
/// Distance data is fetched from the [`DistanceProvider`] only for the
/// criteria that need it, before the search starts.
#[derive(Debug, Clone)]
pub struct DinnerPlanner<P> {
    provider: P,
    config: OptimizerConfig,
}

impl<P: DistanceProvider> DinnerPlanner<P> {
    /// Creates a planner with the default optimizer configuration.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, OptimizerConfig::default())
    }

    pub fn with_config(provider: P, config: OptimizerConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Plans the dinner and returns, for every team index, the host it
    /// visits in each course.
    ///
    /// # Errors
    ///
    /// - [`PlanError::EmptyTeamList`] / [`PlanError::EmptyCriteria`]
    /// - [`PlanError::ZeroCourses`] / [`PlanError::IndivisibleTeamCount`]
    /// - [`PlanError::NonPositiveWeight`] for any weight, even a lone one
    /// - [`PlanError::MissingAddress`] if a distance criterion is requested
    ///   and a team has no address
    /// - [`PlanError::MissingFinalLocation`] if the final-venue criterion is
    ///   requested without a venue
    /// - [`PlanError::Distance`] if a lookup fails
    pub fn plan_dinner(
        &self,
        teams: &[DinnerTeam],
        criteria: &[(f64, RaterType)],
        course_count: usize,
        final_location: Option<&str>,
    ) -> Result<PathsPerHost, PlanError> {
        Ok(self
            .plan(teams, criteria, course_count, final_location)?
            .paths_per_host())
    }

    /// Like [`plan_dinner`](Self::plan_dinner), but returns the full
    /// optimization result.
    #[tracing::instrument(skip(self, teams, criteria), fields(teams = teams.len()))]
    pub fn plan(
        &self,
        teams: &[DinnerTeam],
        criteria: &[(f64, RaterType)],
        course_count: usize,
        final_location: Option<&str>,
    ) -> Result<OptimizationResult, PlanError> {
        if teams.is_empty() {
            return Err(PlanError::EmptyTeamList);
        }
        if criteria.is_empty() {
            return Err(PlanError::EmptyCriteria);
        }
        let teams_per_course = meal_group_count(teams.len(), course_count)?;
        let criteria = unique_criteria(criteria)?;

        let addresses = if criteria.iter().any(|(_, kind)| kind.needs_addresses()) {
            team_addresses(teams)?
        } else {
            Vec::new()
        };
        let final_location = if criteria
            .iter()
            .any(|(_, kind)| *kind == RaterType::WalkingDistanceToFinal)
        {
            let venue = final_location
                .map(str::trim)
                .filter(|venue| !venue.is_empty())
                .ok_or(PlanError::MissingFinalLocation)?;
            Some(venue)
        } else {
            None
        };

        let mut raters: Vec<(f64, Box<dyn SolutionRater>)> = Vec::with_capacity(criteria.len());
        let mut initializer: Box<dyn Initializer> = Box::new(RandomInitializer);
        for (weight, kind) in criteria {
            let rater: Box<dyn SolutionRater> = match kind {
                RaterType::Diversity => Box::new(DiversityRater),
                RaterType::WalkingDistance => {
                    let matrix = build_distance_matrix(&self.provider, &addresses)?;
                    Box::new(InterDistanceRater::new(matrix, course_count)?)
                }
                RaterType::WalkingDistanceToFinal => {
                    let venue = final_location.ok_or(PlanError::MissingFinalLocation)?;
                    let distances = build_final_distances(&self.provider, &addresses, venue)?;
                    initializer = Box::new(FinalLocationInitializer::new(distances.clone()));
                    Box::new(FinalLocationDistanceRater::new(distances, teams_per_course)?)
                }
            };
            raters.push((weight, rater));
        }

        let rater: Box<dyn SolutionRater> = if raters.len() == 1 {
            raters.remove(0).1
        } else {
            Box::new(CombinedRater::new(raters)?)
        };

        GeneticOptimizer::new(initializer, rater, self.config.clone())
            .optimize(teams.len(), course_count)
    }
}

/// Validates the weights and drops repeated criteria, keeping the first.
fn unique_criteria(criteria: &[(f64, RaterType)]) -> Result<Vec<(f64, RaterType)>, PlanError> {
    let mut unique: Vec<(f64, RaterType)> = Vec::with_capacity(criteria.len());
    for (index, &(weight, kind)) in criteria.iter().enumerate() {
        if !(weight.is_finite() && weight > 0.0) {
            return Err(PlanError::NonPositiveWeight { index, weight });
        }
        if unique.iter().any(|(_, seen)| *seen == kind) {
            tracing::warn!(?kind, index, "criterion given more than once, keeping the first");
            continue;
        }
        unique.push((weight, kind));
    }
    Ok(unique)
}

fn team_addresses(teams: &[DinnerTeam]) -> Result<Vec<&str>, PlanError> {
    teams
        .iter()
        .enumerate()
        .map(|(team, t)| t.address().ok_or(PlanError::MissingAddress { team }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DistanceError;
    use crate::planner::distance::mock::LineProvider;

    const STREET: [(&str, f64); 7] = [
        ("1 Elm St", 0.0),
        ("5 Elm St", 4.0),
        ("9 Elm St", 9.0),
        ("12 Elm St", 15.0),
        ("20 Elm St", 22.0),
        ("31 Elm St", 40.0),
        ("Town Hall", 18.0),
    ];

    fn street_teams() -> Vec<DinnerTeam> {
        STREET[..6]
            .iter()
            .map(|(address, _)| DinnerTeam::new(*address, vec![]))
            .collect()
    }

    fn planner() -> DinnerPlanner<LineProvider> {
        DinnerPlanner::with_config(
            LineProvider::new(&STREET),
            OptimizerConfig::default().with_seed(4),
        )
    }

    fn assert_well_formed(paths: &PathsPerHost, teams: usize, courses: usize) {
        assert_eq!(paths.len(), teams);
        for (team, path) in paths {
            assert_eq!(path.len(), courses);
            assert!(path.contains(team), "team {team} never hosts: {path:?}");
        }
    }

    // ---- Planning ----

    #[test]
    fn test_diversity_plan_needs_no_addresses() {
        let teams = vec![DinnerTeam::default(); 6];
        let planner = planner();
        let paths = planner
            .plan_dinner(&teams, &[(1.0, RaterType::Diversity)], 2, None)
            .unwrap();
        assert_well_formed(&paths, 6, 2);
        assert_eq!(planner.provider().calls(), 0);
    }

    #[test]
    fn test_walking_distance_looks_up_each_pair_once() {
        let planner = planner();
        let paths = planner
            .plan_dinner(&street_teams(), &[(1.0, RaterType::WalkingDistance)], 2, None)
            .unwrap();
        assert_well_formed(&paths, 6, 2);
        assert_eq!(planner.provider().calls(), 15);
    }

    #[test]
    fn test_final_location_plan() {
        let planner = planner();
        let result = planner
            .plan(
                &street_teams(),
                &[(1.0, RaterType::WalkingDistanceToFinal)],
                2,
                Some("Town Hall"),
            )
            .unwrap();
        assert_well_formed(&result.paths_per_host(), 6, 2);
        assert_eq!(planner.provider().calls(), 6);
        // The initializer already puts the closest teams in the last course.
        assert!((result.best_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_combined_criteria() {
        let planner = planner();
        let result = planner
            .plan(
                &street_teams(),
                &[
                    (2.0, RaterType::Diversity),
                    (1.0, RaterType::WalkingDistance),
                    (1.0, RaterType::WalkingDistanceToFinal),
                ],
                2,
                Some("Town Hall"),
            )
            .unwrap();
        assert_well_formed(&result.paths_per_host(), 6, 2);
        assert!((0.0..=1.0).contains(&result.best_score));
        assert_eq!(planner.provider().calls(), 15 + 6);
    }

    #[test]
    fn test_repeated_criterion_is_used_once() {
        let planner = planner();
        planner
            .plan_dinner(
                &street_teams(),
                &[(1.0, RaterType::WalkingDistance), (3.0, RaterType::WalkingDistance)],
                2,
                None,
            )
            .unwrap();
        assert_eq!(planner.provider().calls(), 15);
    }

    // ---- Errors ----

    #[test]
    fn test_empty_inputs() {
        let planner = planner();
        assert_eq!(
            planner
                .plan_dinner(&[], &[(1.0, RaterType::Diversity)], 3, None)
                .unwrap_err(),
            PlanError::EmptyTeamList
        );
        assert_eq!(
            planner.plan_dinner(&street_teams(), &[], 3, None).unwrap_err(),
            PlanError::EmptyCriteria
        );
    }

    #[test]
    fn test_shape_errors() {
        let planner = planner();
        let criteria = [(1.0, RaterType::Diversity)];
        assert_eq!(
            planner
                .plan_dinner(&street_teams(), &criteria, 4, None)
                .unwrap_err(),
            PlanError::IndivisibleTeamCount {
                team_count: 6,
                course_count: 4
            }
        );
        assert_eq!(
            planner
                .plan_dinner(&street_teams(), &criteria, 0, None)
                .unwrap_err(),
            PlanError::ZeroCourses
        );
    }

    #[test]
    fn test_single_weight_is_validated() {
        let err = planner()
            .plan_dinner(&street_teams(), &[(0.0, RaterType::Diversity)], 2, None)
            .unwrap_err();
        assert_eq!(
            err,
            PlanError::NonPositiveWeight {
                index: 0,
                weight: 0.0
            }
        );
    }

    #[test]
    fn test_missing_address() {
        let mut teams = street_teams();
        teams[3].address = None;
        let planner = planner();
        let err = planner
            .plan_dinner(&teams, &[(1.0, RaterType::WalkingDistance)], 2, None)
            .unwrap_err();
        assert_eq!(err, PlanError::MissingAddress { team: 3 });
        assert!(err.is_missing_data());
        assert_eq!(planner.provider().calls(), 0);
    }

    #[test]
    fn test_missing_final_location() {
        let planner = planner();
        for venue in [None, Some("  ")] {
            let err = planner
                .plan_dinner(
                    &street_teams(),
                    &[(1.0, RaterType::WalkingDistanceToFinal)],
                    2,
                    venue,
                )
                .unwrap_err();
            assert_eq!(err, PlanError::MissingFinalLocation);
        }
        assert_eq!(planner.provider().calls(), 0);
    }

    #[test]
    fn test_lookup_failure_propagates() {
        let mut teams = street_teams();
        teams[5] = DinnerTeam::new("Nowhere 0", vec![]);
        let err = planner()
            .plan_dinner(&teams, &[(1.0, RaterType::WalkingDistance)], 2, None)
            .unwrap_err();
        assert_eq!(
            err,
            PlanError::Distance(DistanceError::AddressNotFound {
                address: "Nowhere 0".into()
            })
        );
    }
}
