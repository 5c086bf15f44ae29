//! Initial solution construction.
//!
//! An [`Initializer`] produces the generation-0 guess the optimizer starts
//! from. Both shipped initializers slot a host ordering into the grid
//! course by course, and give every group the loose guest-index vector
//! `[position; courses - 1]`: a valid grid whose cross-course consistency
//! is left for mutation to work out.
//!
//! - [`RandomInitializer`]: uniformly shuffled host order
//! - [`FinalLocationInitializer`]: hosts sorted by descending distance to
//!   the final venue, so the last course lands near it

mod final_location;
mod random;
mod types;

pub use final_location::FinalLocationInitializer;
pub use random::RandomInitializer;
pub use types::Initializer;

use crate::error::PlanError;
use crate::solution::{DinnerGroup, Solution, TeamId};

/// Checks the team/course shape shared by all initializers and returns the
/// number of dinner groups per course.
pub(crate) fn meal_group_count(team_count: usize, course_count: usize) -> Result<usize, PlanError> {
    if course_count == 0 {
        return Err(PlanError::ZeroCourses);
    }
    if team_count == 0 {
        return Err(PlanError::EmptyTeamList);
    }
    if team_count % course_count != 0 {
        return Err(PlanError::IndivisibleTeamCount {
            team_count,
            course_count,
        });
    }
    Ok(team_count / course_count)
}

/// Fills the grid row by row from `hosts`: the first `groups` ids cook
/// course 0, the next block course 1, and so on.
fn slot_hosts(hosts: &[TeamId], course_count: usize) -> Result<Solution, PlanError> {
    let groups = meal_group_count(hosts.len(), course_count)?;
    let grid = hosts
        .chunks(groups)
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(position, &team)| DinnerGroup::new(team, vec![position; course_count - 1]))
                .collect()
        })
        .collect();
    Solution::new(grid)
}
