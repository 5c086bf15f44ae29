//! Core solution types and path decoding.

use crate::error::PlanError;
use std::collections::{BTreeMap, HashSet};

/// Identifier of a dinner team. Teams are numbered `0..team_count`.
pub type TeamId = usize;

/// Decoded plan: for every team, the host it eats at in each course.
///
/// The team's own id appears at the course it cooks.
pub type PathsPerHost = BTreeMap<TeamId, Vec<TeamId>>;

/// One hosting unit for one course.
///
/// `guest_indices` has one entry per *other* course, in course order with
/// this group's own course skipped. Entry `k` is a position in this
/// group's course: the team cooking at the same position as this group in
/// the `k`-th other course eats at that position here.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DinnerGroup {
    /// Team cooking this course at this position.
    pub cooking_team: TeamId,

    /// Positional guest indices, length `courses - 1`.
    pub guest_indices: Vec<usize>,
}

impl DinnerGroup {
    /// Creates a dinner group.
    pub fn new(cooking_team: TeamId, guest_indices: Vec<usize>) -> Self {
        Self {
            cooking_team,
            guest_indices,
        }
    }
}

/// A complete candidate assignment for one event.
///
/// Dimensions are `courses × groups`, where `groups = team_count / courses`.
/// The grid is validated once in [`Solution::new`]; afterwards it is only
/// ever changed on a fresh copy (see [`mutate`](super::mutate)).
///
/// Equality is structural: two solutions are equal when their grids are.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    groups_per_course: Vec<Vec<DinnerGroup>>,
}

impl Solution {
    /// Builds a solution from its grid of dinner groups.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidSolution`] if the grid is empty, a course
    /// has no groups, courses differ in group count, a guest-index vector
    /// does not have `courses - 1` entries, a guest index is out of range,
    /// a team id is not below the team count, or a team cooks more than
    /// once.
    pub fn new(groups_per_course: Vec<Vec<DinnerGroup>>) -> Result<Self, PlanError> {
        validate_grid(&groups_per_course)?;
        Ok(Self { groups_per_course })
    }

    /// The grid of dinner groups, one row per course.
    pub fn groups_per_course(&self) -> &[Vec<DinnerGroup>] {
        &self.groups_per_course
    }

    /// Number of courses.
    pub fn course_count(&self) -> usize {
        self.groups_per_course.len()
    }

    /// Number of parallel dinner groups per course.
    pub fn group_count(&self) -> usize {
        self.groups_per_course[0].len()
    }

    /// Total number of teams.
    pub fn team_count(&self) -> usize {
        self.course_count() * self.group_count()
    }

    pub(crate) fn groups_mut(&mut self) -> &mut [Vec<DinnerGroup>] {
        &mut self.groups_per_course
    }

    /// Decodes the grid into one path per team.
    ///
    /// Teams cooking in course 0 walk straight down their column: at
    /// position `g` they visit the host at position `g` of every course.
    /// A team cooking course `c > 0` at position `g` eats course `c2` at
    /// `groups[c2][i]`, where `i` is read from `groups[c2][g].guest_indices`
    /// at column `c` (if `c < c2`) or `c - 1` (if `c > c2`).
    ///
    /// The result has exactly `team_count` entries, each of length
    /// `course_count`. Decoding is pure.
    pub fn get_paths_per_host(&self) -> PathsPerHost {
        let groups = &self.groups_per_course;
        let courses = groups.len();
        let mut paths = PathsPerHost::new();

        for (position, group) in groups[0].iter().enumerate() {
            let path = groups.iter().map(|course| course[position].cooking_team).collect();
            paths.insert(group.cooking_team, path);
        }

        for (course, row) in groups.iter().enumerate().skip(1) {
            for (position, group) in row.iter().enumerate() {
                let path = (0..courses)
                    .map(|other| {
                        if other == course {
                            return group.cooking_team;
                        }
                        let column = if course < other { course } else { course - 1 };
                        let host_index = groups[other][position].guest_indices[column];
                        groups[other][host_index].cooking_team
                    })
                    .collect();
                paths.insert(group.cooking_team, path);
            }
        }

        paths
    }

    /// Consumes the solution and returns its grid.
    pub fn into_groups(self) -> Vec<Vec<DinnerGroup>> {
        self.groups_per_course
    }
}

fn validate_grid(groups_per_course: &[Vec<DinnerGroup>]) -> Result<(), PlanError> {
    let courses = groups_per_course.len();
    let Some(first) = groups_per_course.first() else {
        return Err(PlanError::InvalidSolution(
            "groups_per_course may not be empty".into(),
        ));
    };
    let group_count = first.len();
    if group_count == 0 {
        return Err(PlanError::InvalidSolution(
            "every course needs at least one dinner group".into(),
        ));
    }

    let mut cooks = HashSet::with_capacity(courses * group_count);
    for (course, row) in groups_per_course.iter().enumerate() {
        if row.len() != group_count {
            return Err(PlanError::InvalidSolution(format!(
                "course {course} has {} dinner groups, expected {group_count}",
                row.len()
            )));
        }
        for (position, group) in row.iter().enumerate() {
            if group.guest_indices.len() != courses - 1 {
                return Err(PlanError::InvalidSolution(format!(
                    "guest index list of group ({course}, {position}) has length {}, expected {}",
                    group.guest_indices.len(),
                    courses - 1
                )));
            }
            if let Some(index) = group.guest_indices.iter().find(|&&i| i >= group_count) {
                return Err(PlanError::InvalidSolution(format!(
                    "guest index {index} of group ({course}, {position}) is out of range 0..{group_count}"
                )));
            }
            if group.cooking_team >= courses * group_count {
                return Err(PlanError::InvalidSolution(format!(
                    "team id {} is out of range 0..{}",
                    group.cooking_team,
                    courses * group_count
                )));
            }
            if !cooks.insert(group.cooking_team) {
                return Err(PlanError::InvalidSolution(format!(
                    "team {} cooks more than once",
                    group.cooking_team
                )));
            }
        }
    }
    Ok(())
}

/// A solution paired with its score. Higher scores are better.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionWithScore {
    solution: Solution,
    score: f64,
}

impl SolutionWithScore {
    /// Pairs a solution with its score.
    pub fn new(solution: Solution, score: f64) -> Self {
        Self { solution, score }
    }

    /// The scored solution.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// The score, in `[0, 1]` for the raters shipped with this crate.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Consumes the pair and returns the solution.
    pub fn into_solution(self) -> Solution {
        self.solution
    }
}
