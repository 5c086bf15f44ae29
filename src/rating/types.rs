//! Rater trait.

use crate::error::PlanError;
use crate::solution::PathsPerHost;

/// Scores a decoded solution.
///
/// Implementations must be pure: the same paths always yield the same
/// score. The raters in this crate return values in `[0, 1]`, higher is
/// better.
///
/// # Implementing
///
/// ```
/// use progressive_dinner::rating::SolutionRater;
/// use progressive_dinner::solution::PathsPerHost;
///
/// /// Prefers plans where team 0 cooks the first course.
/// struct TeamZeroStarts;
///
/// impl SolutionRater for TeamZeroStarts {
///     fn rate_solution(&self, paths_per_host: &PathsPerHost) -> f64 {
///         match paths_per_host.get(&0) {
///             Some(path) if path.first() == Some(&0) => 1.0,
///             _ => 0.0,
///         }
///     }
/// }
/// ```
pub trait SolutionRater {
    /// Rates the decoded paths of one solution.
    ///
    /// The paths are assumed to fit the rater; see
    /// [`try_rate_solution`](Self::try_rate_solution) for unchecked input.
    ///
    /// # Panics
    ///
    /// Raters built on per-team data may panic if a host id lies outside
    /// the data they were built for.
    fn rate_solution(&self, paths_per_host: &PathsPerHost) -> f64;

    /// Checks that `paths_per_host` fits the data this rater was built for.
    ///
    /// The default compares the number of paths and every host id against
    /// [`expected_team_count`](Self::expected_team_count).
    ///
    /// # Errors
    ///
    /// - [`PlanError::LengthMismatch`] if the number of paths differs
    /// - [`PlanError::InvalidSolution`] if a host id is out of range
    fn check_paths(&self, paths_per_host: &PathsPerHost) -> Result<(), PlanError> {
        match self.expected_team_count() {
            Some(team_count) => check_team_ids(paths_per_host, team_count),
            None => Ok(()),
        }
    }

    /// [`check_paths`](Self::check_paths), then
    /// [`rate_solution`](Self::rate_solution).
    fn try_rate_solution(&self, paths_per_host: &PathsPerHost) -> Result<f64, PlanError> {
        self.check_paths(paths_per_host)?;
        Ok(self.rate_solution(paths_per_host))
    }

    /// Number of teams this rater was built for, if it depends on
    /// per-team data.
    ///
    /// The optimizer refuses to run when this disagrees with the
    /// requested team count.
    fn expected_team_count(&self) -> Option<usize> {
        None
    }
}

impl<T: SolutionRater + ?Sized> SolutionRater for Box<T> {
    fn rate_solution(&self, paths_per_host: &PathsPerHost) -> f64 {
        (**self).rate_solution(paths_per_host)
    }

    fn expected_team_count(&self) -> Option<usize> {
        (**self).expected_team_count()
    }

    fn check_paths(&self, paths_per_host: &PathsPerHost) -> Result<(), PlanError> {
        (**self).check_paths(paths_per_host)
    }
}

impl<T: SolutionRater + ?Sized> SolutionRater for &T {
    fn rate_solution(&self, paths_per_host: &PathsPerHost) -> f64 {
        (**self).rate_solution(paths_per_host)
    }

    fn expected_team_count(&self) -> Option<usize> {
        (**self).expected_team_count()
    }

    fn check_paths(&self, paths_per_host: &PathsPerHost) -> Result<(), PlanError> {
        (**self).check_paths(paths_per_host)
    }
}

/// Requires exactly `team_count` paths whose host ids all lie in
/// `0..team_count`.
fn check_team_ids(paths_per_host: &PathsPerHost, team_count: usize) -> Result<(), PlanError> {
    if paths_per_host.len() != team_count {
        return Err(PlanError::LengthMismatch {
            what: "paths per host",
            expected: team_count,
            actual: paths_per_host.len(),
        });
    }
    for (team, path) in paths_per_host {
        if let Some(host) = std::iter::once(team).chain(path).find(|&&id| id >= team_count) {
            return Err(PlanError::InvalidSolution(format!(
                "host {host} in the path of team {team} is out of range 0..{team_count}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SizedRater(usize);

    impl SolutionRater for SizedRater {
        fn rate_solution(&self, _: &PathsPerHost) -> f64 {
            0.5
        }

        fn expected_team_count(&self) -> Option<usize> {
            Some(self.0)
        }
    }

    struct AnySize;

    impl SolutionRater for AnySize {
        fn rate_solution(&self, _: &PathsPerHost) -> f64 {
            1.0
        }
    }

    fn paths(team_count: usize) -> PathsPerHost {
        (0..team_count).map(|t| (t, vec![t, (t + 1) % team_count])).collect()
    }

    #[test]
    fn test_check_paths_accepts_matching_size() {
        assert!(SizedRater(4).check_paths(&paths(4)).is_ok());
        assert_eq!(SizedRater(4).try_rate_solution(&paths(4)), Ok(0.5));
    }

    #[test]
    fn test_check_paths_rejects_wrong_size() {
        assert_eq!(
            SizedRater(4).try_rate_solution(&paths(6)),
            Err(PlanError::LengthMismatch {
                what: "paths per host",
                expected: 4,
                actual: 6
            })
        );
    }

    #[test]
    fn test_check_paths_rejects_foreign_host() {
        let mut p = paths(4);
        p.insert(1, vec![1, 9]);
        assert!(matches!(
            SizedRater(4).check_paths(&p),
            Err(PlanError::InvalidSolution(_))
        ));
    }

    #[test]
    fn test_unsized_rater_accepts_anything() {
        assert_eq!(AnySize.try_rate_solution(&paths(7)), Ok(1.0));
    }

    #[test]
    fn test_check_paths_through_box() {
        let boxed: Box<dyn SolutionRater> = Box::new(SizedRater(3));
        assert!(boxed.check_paths(&paths(5)).is_err());
    }
}
