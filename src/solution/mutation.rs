//! Mutation operators.
//!
//! Two neighbourhoods are explored independently:
//!
//! - **Host swap**: exchange the cooking teams of two cells of the grid.
//!   Changes *who cooks when*. O(1).
//! - **Guest swap**: within one course, exchange one guest-index column
//!   entry between two groups, repeated 1..=`groups` times. Changes *who
//!   visits whom* while every index stays in range. O(groups).
//!
//! [`mutate`] never touches its argument; it clones the parent and
//! mutates the clone.

use super::types::Solution;
use rand::Rng;

/// Produces one mutated child of `parent`.
///
/// With probability `host_swap_probability` the child gets a host swap,
/// otherwise a burst of guest swaps. When the grid has a single group per
/// course (or a single course) guest swaps are impossible and the host
/// swap is used instead; a grid with one cell is returned unchanged.
///
/// The probability is clamped to `[0, 1]`; NaN counts as 0.
pub fn mutate<R: Rng + ?Sized>(
    parent: &Solution,
    host_swap_probability: f64,
    rng: &mut R,
) -> Solution {
    let mut child = parent.clone();
    let can_swap_hosts = child.team_count() >= 2;
    let can_swap_guests = child.group_count() >= 2 && child.course_count() >= 2;

    let probability = if host_swap_probability.is_nan() {
        0.0
    } else {
        host_swap_probability.clamp(0.0, 1.0)
    };
    let host_swap = can_swap_hosts && (!can_swap_guests || rng.random_bool(probability));

    if host_swap {
        swap_cooking_teams(&mut child, rng);
    } else if can_swap_guests {
        swap_guest_indices(&mut child, rng);
    }
    child
}

/// Swaps the cooking teams of two distinct, uniformly drawn cells.
fn swap_cooking_teams<R: Rng + ?Sized>(solution: &mut Solution, rng: &mut R) {
    let courses = solution.course_count();
    let groups = solution.group_count();

    let first = (rng.random_range(0..courses), rng.random_range(0..groups));
    let second = loop {
        let cell = (rng.random_range(0..courses), rng.random_range(0..groups));
        if cell != first {
            break cell;
        }
    };

    let grid = solution.groups_mut();
    let team = grid[first.0][first.1].cooking_team;
    grid[first.0][first.1].cooking_team = grid[second.0][second.1].cooking_team;
    grid[second.0][second.1].cooking_team = team;
}

/// Performs 1..=`groups` guest-index swaps, each inside a random course
/// and column, between two distinct groups.
fn swap_guest_indices<R: Rng + ?Sized>(solution: &mut Solution, rng: &mut R) {
    let courses = solution.course_count();
    let groups = solution.group_count();
    let swaps = rng.random_range(1..=groups);

    let grid = solution.groups_mut();
    for _ in 0..swaps {
        let course = rng.random_range(0..courses);
        let column = rng.random_range(0..courses - 1);
        let a = rng.random_range(0..groups);
        let b = loop {
            let b = rng.random_range(0..groups);
            if b != a {
                break b;
            }
        };

        let row = &mut grid[course];
        let index = row[a].guest_indices[column];
        row[a].guest_indices[column] = row[b].guest_indices[column];
        row[b].guest_indices[column] = index;
    }
}
