use super::types::SolutionRater;
use super::{check_distance, normalized_score, Extreme};
use crate::error::PlanError;
use crate::init::meal_group_count;
use crate::solution::PathsPerHost;

/// Penalizes walking between consecutive hosts.
///
/// The cost of a path is the sum of squared distances of its legs; the
/// actual value is the mean over all team paths. It is normalized against
/// a best and worst case estimated once at construction: the teams are
/// split into `team_count / courses` chains of `courses` locations, each
/// seeded with the shortest (longest) unused edge and extended from its
/// tail to the nearest (farthest) unused location. The bounds only scale
/// the score; they are not a solver.
#[derive(Debug, Clone)]
pub struct InterDistanceRater {
    distance_matrix: Vec<Vec<f64>>,
    min_cost: f64,
    max_cost: f64,
}

impl InterDistanceRater {
    /// Builds the rater from an `n × n` walking-cost matrix, indexed by team id.
    ///
    /// # Errors
    ///
    /// - [`PlanError::EmptyDistanceMatrix`] / [`PlanError::NonSquareDistanceMatrix`]
    /// - [`PlanError::InvalidDistance`] for negative or non-finite entries
    /// - [`PlanError::ZeroCourses`] / [`PlanError::IndivisibleTeamCount`]
    ///   if `n` teams cannot be split over `course_count` courses
    pub fn new(distance_matrix: Vec<Vec<f64>>, course_count: usize) -> Result<Self, PlanError> {
        let size = distance_matrix.len();
        if size == 0 {
            return Err(PlanError::EmptyDistanceMatrix);
        }
        for (row, values) in distance_matrix.iter().enumerate() {
            if values.len() != size {
                return Err(PlanError::NonSquareDistanceMatrix {
                    size,
                    row,
                    len: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                check_distance(row, col, value)?;
            }
        }
        meal_group_count(size, course_count)?;

        let min_cost = chain_bound(&distance_matrix, course_count, Extreme::Shortest);
        let max_cost = chain_bound(&distance_matrix, course_count, Extreme::Longest);
        tracing::debug!(min_cost, max_cost, teams = size, "inter-distance bounds");

        Ok(Self {
            distance_matrix,
            min_cost,
            max_cost,
        })
    }

    /// Estimated cost of the best plan (mean squared walking per team).
    pub fn min_cost(&self) -> f64 {
        self.min_cost
    }

    /// Estimated cost of the worst plan.
    pub fn max_cost(&self) -> f64 {
        self.max_cost
    }

    fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2)
            .map(|leg| self.distance_matrix[leg[0]][leg[1]].powi(2))
            .sum()
    }
}

impl SolutionRater for InterDistanceRater {
    fn rate_solution(&self, paths_per_host: &PathsPerHost) -> f64 {
        if paths_per_host.is_empty() {
            return 1.0;
        }
        let total: f64 = paths_per_host.values().map(|path| self.path_cost(path)).sum();
        let actual = total / paths_per_host.len() as f64;
        normalized_score(actual, self.min_cost, self.max_cost)
    }

    fn expected_team_count(&self) -> Option<usize> {
        Some(self.distance_matrix.len())
    }
}

/// Mean chain cost of the greedy extremal chain cover.
fn chain_bound(matrix: &[Vec<f64>], chain_len: usize, extreme: Extreme) -> f64 {
    let size = matrix.len();
    let chains = size / chain_len;
    if chain_len < 2 || chains == 0 {
        return 0.0;
    }

    let mut used = vec![false; size];
    let mut total = 0.0;
    for _ in 0..chains {
        let Some((head, mut tail)) = extreme_free_edge(matrix, &used, extreme) else {
            break;
        };
        used[head] = true;
        used[tail] = true;
        let mut cost = matrix[head][tail].powi(2);

        for _ in 2..chain_len {
            let Some(next) = extreme_free_neighbour(matrix, &used, tail, extreme) else {
                break;
            };
            used[next] = true;
            cost += matrix[tail][next].powi(2);
            tail = next;
        }
        total += cost;
    }
    total / chains as f64
}

/// First edge `(i, j)`, `i < j`, in row-major order with both ends free
/// and the most extreme weight.
fn extreme_free_edge(matrix: &[Vec<f64>], used: &[bool], extreme: Extreme) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for i in (0..matrix.len()).filter(|&i| !used[i]) {
        for j in (i + 1..matrix.len()).filter(|&j| !used[j]) {
            let improves = match best {
                None => true,
                Some((a, b)) => extreme.improves(matrix[i][j], matrix[a][b]),
            };
            if improves {
                best = Some((i, j));
            }
        }
    }
    best
}

fn extreme_free_neighbour(matrix: &[Vec<f64>], used: &[bool], from: usize, extreme: Extreme) -> Option<usize> {
    let row = &matrix[from];
    let mut best: Option<usize> = None;
    for k in (0..row.len()).filter(|&k| !used[k]) {
        let improves = match best {
            None => true,
            Some(b) => extreme.improves(row[k], row[b]),
        };
        if improves {
            best = Some(k);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::TeamId;

    fn fixture_matrix() -> Vec<Vec<f64>> {
        [
            [0, 1, 2, 24, 35, 5, 22, 5, 1],
            [1, 0, 9, 9, 9, 9, 99, 9, 9],
            [2, 9, 0, 97, 97, 87, 97, 2, 33],
            [24, 9, 97, 0, 8, 8, 8, 8, 8],
            [35, 9, 97, 8, 0, 53, 63, 63, 63],
            [5, 9, 87, 8, 63, 0, 55, 54, 5],
            [22, 9, 97, 8, 63, 55, 0, 25, 99],
            [5, 9, 2, 8, 63, 54, 25, 0, 51],
            [1, 9, 33, 8, 63, 5, 99, 51, 0],
        ]
        .iter()
        .map(|row| row.iter().map(|&d| d as f64).collect())
        .collect()
    }

    fn paths(entries: &[(TeamId, [TeamId; 3])]) -> PathsPerHost {
        entries.iter().map(|(team, path)| (*team, path.to_vec())).collect()
    }

    #[test]
    fn test_worst_case_scores_zero() {
        let rater = InterDistanceRater::new(fixture_matrix(), 3).unwrap();
        let p = paths(&[
            (0, [2, 3, 0]),
            (1, [1, 6, 8]),
            (2, [2, 3, 0]),
            (3, [2, 3, 0]),
            (4, [4, 7, 5]),
            (5, [4, 7, 5]),
            (6, [1, 6, 8]),
            (7, [4, 7, 5]),
            (8, [1, 6, 8]),
        ]);
        assert!(rater.rate_solution(&p).abs() < 1e-3);
    }

    #[test]
    fn test_best_case_scores_one() {
        let rater = InterDistanceRater::new(fixture_matrix(), 3).unwrap();
        let p = paths(&[
            (0, [0, 1, 2]),
            (1, [0, 1, 2]),
            (2, [0, 1, 2]),
            (3, [5, 8, 3]),
            (4, [6, 7, 4]),
            (5, [5, 8, 3]),
            (6, [6, 7, 4]),
            (7, [6, 7, 4]),
            (8, [5, 8, 3]),
        ]);
        assert!((rater.rate_solution(&p) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_bounds_follow_greedy_chains() {
        let rater = InterDistanceRater::new(fixture_matrix(), 3).unwrap();
        // Chains [0,1,2], [5,8,3], [6,7,4]: (1+81) + (25+64) + (625+3969)
        assert!((rater.min_cost() - 4765.0 / 3.0).abs() < 1e-9);
        // Chains [1,6,8], [2,3,0], [4,7,5]: (9801+9801) + (9409+576) + (3969+2916)
        assert!((rater.max_cost() - 36472.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_within_unit_interval() {
        let rater = InterDistanceRater::new(fixture_matrix(), 3).unwrap();
        let p = paths(&[
            (0, [0, 3, 6]),
            (1, [1, 4, 7]),
            (2, [2, 5, 8]),
            (3, [0, 3, 6]),
            (4, [1, 4, 7]),
            (5, [2, 5, 8]),
            (6, [0, 3, 6]),
            (7, [1, 4, 7]),
            (8, [2, 5, 8]),
        ]);
        let score = rater.rate_solution(&p);
        assert!((0.0..=1.0).contains(&score), "got {score}");
    }

    #[test]
    fn test_expected_team_count() {
        let rater = InterDistanceRater::new(fixture_matrix(), 3).unwrap();
        assert_eq!(rater.expected_team_count(), Some(9));
    }

    #[test]
    fn test_rejects_empty_matrix() {
        assert_eq!(
            InterDistanceRater::new(vec![], 3).unwrap_err(),
            PlanError::EmptyDistanceMatrix
        );
    }

    #[test]
    fn test_rejects_non_square_matrix() {
        let matrix = vec![vec![0.0, 1.0], vec![1.0]];
        assert_eq!(
            InterDistanceRater::new(matrix, 2).unwrap_err(),
            PlanError::NonSquareDistanceMatrix {
                size: 2,
                row: 1,
                len: 1
            }
        );
    }

    #[test]
    fn test_rejects_negative_distance() {
        let matrix = vec![vec![0.0, -1.0], vec![1.0, 0.0]];
        assert!(matches!(
            InterDistanceRater::new(matrix, 2),
            Err(PlanError::InvalidDistance { row: 0, col: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_indivisible_shape() {
        assert!(matches!(
            InterDistanceRater::new(fixture_matrix(), 2),
            Err(PlanError::IndivisibleTeamCount { .. })
        ));
    }

    #[test]
    fn test_path_map_larger_than_matrix() {
        let matrix = vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ];
        let rater = InterDistanceRater::new(matrix, 3).unwrap();
        let six_teams: PathsPerHost = (0..6).map(|t| (t, vec![t, (t + 1) % 6, (t + 2) % 6])).collect();
        assert_eq!(
            rater.try_rate_solution(&six_teams),
            Err(PlanError::LengthMismatch {
                what: "paths per host",
                expected: 3,
                actual: 6
            })
        );

        let fitting: PathsPerHost = (0..3).map(|t| (t, vec![0, 1, 2])).collect();
        assert!(rater.try_rate_solution(&fitting).is_ok());
    }

    #[test]
    fn test_single_course_has_no_legs() {
        let matrix = vec![vec![0.0, 3.0], vec![3.0, 0.0]];
        let rater = InterDistanceRater::new(matrix, 1).unwrap();
        let p: PathsPerHost = [(0, vec![0]), (1, vec![1])].into_iter().collect();
        assert_eq!(rater.rate_solution(&p), 1.0);
    }
}
