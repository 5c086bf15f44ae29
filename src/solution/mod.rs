//! Permutation-based solution encoding.
//!
//! A [`Solution`] assigns every team one course to cook and, for each of
//! the other courses, a host to eat at. It is stored as a
//! `courses × groups` grid of [`DinnerGroup`]s: the cell holds the cooking
//! team plus a vector of *positional* guest indices into the other
//! courses. Because the indices refer to positions rather than team ids,
//! a single cell can be swapped without rewriting any other course.
//!
//! [`Solution::get_paths_per_host`] is the only place where the grid is
//! turned into per-team walking paths; raters consume its output.
//!
//! # Submodules
//!
//! - [`mutation`]: host swaps and guest-index swaps, always applied to a copy

pub mod mutation;
mod types;

pub use mutation::mutate;
pub use types::{DinnerGroup, PathsPerHost, Solution, SolutionWithScore, TeamId};

#[cfg(test)]
pub(crate) mod strategies {
    use super::{DinnerGroup, Solution};
    use proptest::prelude::*;

    /// Arbitrary valid solutions with 1–4 courses and 1–4 groups per course.
    pub(crate) fn arb_solution() -> impl Strategy<Value = Solution> {
        (1usize..=4, 1usize..=4).prop_flat_map(|(courses, groups)| {
            let teams = courses * groups;
            (
                Just((0..teams).collect::<Vec<usize>>()).prop_shuffle(),
                prop::collection::vec(
                    prop::collection::vec(0..groups, courses - 1),
                    teams,
                ),
            )
                .prop_map(move |(ids, guests)| {
                    let grid = (0..courses)
                        .map(|c| {
                            (0..groups)
                                .map(|g| {
                                    let cell = c * groups + g;
                                    DinnerGroup::new(ids[cell], guests[cell].clone())
                                })
                                .collect()
                        })
                        .collect();
                    Solution::new(grid).expect("generated grid is valid")
                })
        })
    }
}
