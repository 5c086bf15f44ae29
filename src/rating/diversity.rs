use super::types::SolutionRater;
use crate::solution::{PathsPerHost, TeamId};
use std::collections::HashSet;

/// Rewards plans in which teams rarely meet twice.
///
/// For every ordered pair of distinct teams the shared hosts of their
/// paths are counted; a single shared host is free, every further one
/// adds to the overlap total. With `c` courses and `n` paths the total is
/// normalized by `(c - 1)² · n` and the score is
/// `(1 - overlap / max_overlap)²`, so bad plans lose score faster than
/// linearly.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiversityRater;

impl DiversityRater {
    pub fn new() -> Self {
        Self
    }
}

impl SolutionRater for DiversityRater {
    fn rate_solution(&self, paths_per_host: &PathsPerHost) -> f64 {
        let team_count = paths_per_host.len();
        let course_count = paths_per_host.values().next().map_or(0, Vec::len);
        let max_overlaps = course_count.saturating_sub(1).pow(2) * team_count;
        if max_overlaps == 0 {
            return 1.0;
        }

        let hosts: Vec<HashSet<TeamId>> = paths_per_host
            .values()
            .map(|path| path.iter().copied().collect())
            .collect();

        // Overlap is symmetric; count each unordered pair once and double it.
        let mut overlaps = 0usize;
        for (i, a) in hosts.iter().enumerate() {
            for b in &hosts[i + 1..] {
                let shared = a.intersection(b).count();
                if shared > 1 {
                    overlaps += 2 * (shared - 1);
                }
            }
        }

        let ratio = (overlaps as f64 / max_overlaps as f64).min(1.0);
        (1.0 - ratio).powi(2)
    }
}
