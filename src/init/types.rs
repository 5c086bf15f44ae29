//! Initializer trait.

use crate::error::PlanError;
use crate::solution::Solution;
use rand::RngCore;

/// Builds a first-guess [`Solution`] from scratch.
///
/// Takes the generator as a trait object so the planner can choose an
/// initializer at runtime.
pub trait Initializer {
    /// Creates an initial solution for `team_count` teams over
    /// `course_count` courses.
    ///
    /// # Errors
    ///
    /// [`PlanError::IndivisibleTeamCount`] if the teams cannot be split
    /// evenly over the courses; implementations may add their own checks.
    fn create_initial_solution(
        &self,
        team_count: usize,
        course_count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Solution, PlanError>;
}

impl<T: Initializer + ?Sized> Initializer for Box<T> {
    fn create_initial_solution(
        &self,
        team_count: usize,
        course_count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Solution, PlanError> {
        (**self).create_initial_solution(team_count, course_count, rng)
    }
}

impl<T: Initializer + ?Sized> Initializer for &T {
    fn create_initial_solution(
        &self,
        team_count: usize,
        course_count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Solution, PlanError> {
        (**self).create_initial_solution(team_count, course_count, rng)
    }
}
