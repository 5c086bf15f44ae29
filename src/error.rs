//! Error types.
//!
//! [`PlanError`] is returned by every fallible entry point of the crate.
//! All variants are raised eagerly, at construction or at the start of a
//! run; the optimizer loop itself cannot fail once its inputs are accepted.

use thiserror::Error;

/// Failure reported by a [`DistanceProvider`](crate::planner::DistanceProvider).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    /// The mapping service could not resolve an address.
    #[error("address `{address}` could not be found")]
    AddressNotFound { address: String },

    /// The mapping service answered with a non-OK status.
    #[error("distance lookup failed with status {status}: {message}")]
    Upstream { status: String, message: String },
}

/// Errors raised while validating inputs or building a dinner plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("dinner team list may not be empty")]
    EmptyTeamList,

    #[error("at least one rating criterion must be given")]
    EmptyCriteria,

    #[error("number of courses must be at least 1")]
    ZeroCourses,

    #[error("team count {team_count} is not divisible by course count {course_count}")]
    IndivisibleTeamCount {
        team_count: usize,
        course_count: usize,
    },

    #[error("{what}: expected length {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("cannot split {teams} teams into courses of {teams_per_course} hosts")]
    InvalidGroupSize {
        teams: usize,
        teams_per_course: usize,
    },

    #[error("distance matrix may not be empty")]
    EmptyDistanceMatrix,

    #[error("distance vector may not be empty")]
    EmptyDistanceVector,

    #[error("distance matrix is not square: row {row} has {len} entries, expected {size}")]
    NonSquareDistanceMatrix { size: usize, row: usize, len: usize },

    #[error("invalid distance {value} at ({row}, {col}): must be finite and non-negative")]
    InvalidDistance { row: usize, col: usize, value: f64 },

    #[error("list of solution raters may not be empty")]
    EmptyRaterList,

    #[error("rater weight #{index} must be a positive number, got {weight}")]
    NonPositiveWeight { index: usize, weight: f64 },

    #[error("invalid solution: {0}")]
    InvalidSolution(String),

    #[error("invalid optimizer configuration: {0}")]
    InvalidConfig(String),

    #[error("dinner team #{team} has no address")]
    MissingAddress { team: usize },

    #[error("final location missing")]
    MissingFinalLocation,

    #[error(transparent)]
    Distance(#[from] DistanceError),
}

impl PlanError {
    /// Returns `true` for errors caused by absent input data rather than an
    /// inconsistent configuration.
    pub fn is_missing_data(&self) -> bool {
        matches!(
            self,
            PlanError::MissingAddress { .. } | PlanError::MissingFinalLocation
        )
    }
}
