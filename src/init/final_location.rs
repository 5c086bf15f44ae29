use super::types::Initializer;
use super::{meal_group_count, slot_hosts};
use crate::error::PlanError;
use crate::solution::{Solution, TeamId};
use rand::RngCore;

/// Slots hosts sorted by descending distance to the final venue.
///
/// The farthest teams cook the first course and the closest cook the last
/// one, so the initial guess already scores well on
/// [`FinalLocationDistanceRater`](crate::rating::FinalLocationDistanceRater).
/// Ties keep team-id order. The generator is not used.
#[derive(Debug, Clone)]
pub struct FinalLocationInitializer {
    dist_to_final_loc: Vec<f64>,
}

impl FinalLocationInitializer {
    /// `dist_to_final_loc[t]` is the walking cost from team `t` to the final venue.
    pub fn new(dist_to_final_loc: Vec<f64>) -> Self {
        Self { dist_to_final_loc }
    }
}

impl Initializer for FinalLocationInitializer {
    fn create_initial_solution(
        &self,
        team_count: usize,
        course_count: usize,
        _rng: &mut dyn RngCore,
    ) -> Result<Solution, PlanError> {
        if team_count != self.dist_to_final_loc.len() {
            return Err(PlanError::LengthMismatch {
                what: "distance to final location",
                expected: team_count,
                actual: self.dist_to_final_loc.len(),
            });
        }
        meal_group_count(team_count, course_count)?;

        let mut hosts: Vec<TeamId> = (0..team_count).collect();
        hosts.sort_by(|&a, &b| self.dist_to_final_loc[b].total_cmp(&self.dist_to_final_loc[a]));
        slot_hosts(&hosts, course_count)
    }
}
