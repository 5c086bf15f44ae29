use super::types::Initializer;
use super::{meal_group_count, slot_hosts};
use crate::error::PlanError;
use crate::random::shuffle;
use crate::solution::{Solution, TeamId};
use rand::RngCore;

/// Slots a uniformly random permutation of the team ids into the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomInitializer;

impl RandomInitializer {
    pub fn new() -> Self {
        Self
    }
}

impl Initializer for RandomInitializer {
    fn create_initial_solution(
        &self,
        team_count: usize,
        course_count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Solution, PlanError> {
        meal_group_count(team_count, course_count)?;
        let mut hosts: Vec<TeamId> = (0..team_count).collect();
        shuffle(&mut hosts, rng);
        slot_hosts(&hosts, course_count)
    }
}
