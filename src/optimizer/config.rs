//! Optimizer configuration.
//!
//! [`OptimizerConfig`] holds every tunable of the generational search.

use crate::error::PlanError;

/// Configuration for the [`GeneticOptimizer`](super::GeneticOptimizer).
///
/// # Defaults
///
/// ```
/// use progressive_dinner::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default();
/// assert_eq!(config.max_iterations, 50);
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.mutations_per_solution, 5);
/// assert_eq!(config.rounds_without_change_to_break, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use progressive_dinner::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_max_iterations(200)
///     .with_population_size(50)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerConfig {
    /// Maximum number of generations.
    pub max_iterations: usize,

    /// Number of solutions kept in every generation.
    pub population_size: usize,

    /// Children produced from each member per generation.
    pub mutations_per_solution: usize,

    /// Consecutive generations with an unchanged best solution after which
    /// the search stops.
    pub rounds_without_change_to_break: usize,

    /// Probability that a mutation swaps two cooking teams instead of
    /// swapping guest indices (0.0–1.0).
    pub host_swap_probability: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            population_size: 30,
            mutations_per_solution: 5,
            rounds_without_change_to_break: 3,
            host_swap_probability: 1.0 / 3.0,
            seed: None,
        }
    }
}

impl OptimizerConfig {
    /// Sets the maximum number of generations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of children per member and generation.
    pub fn with_mutations_per_solution(mut self, n: usize) -> Self {
        self.mutations_per_solution = n;
        self
    }

    /// Sets the stall limit.
    pub fn with_rounds_without_change_to_break(mut self, n: usize) -> Self {
        self.rounds_without_change_to_break = n;
        self
    }

    /// Sets the host-swap probability.
    pub fn with_host_swap_probability(mut self, p: f64) -> Self {
        self.host_swap_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.max_iterations == 0 {
            return Err(PlanError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.population_size == 0 {
            return Err(PlanError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.mutations_per_solution == 0 {
            return Err(PlanError::InvalidConfig(
                "mutations_per_solution must be at least 1".into(),
            ));
        }
        if self.rounds_without_change_to_break == 0 {
            return Err(PlanError::InvalidConfig(
                "rounds_without_change_to_break must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.host_swap_probability) {
            return Err(PlanError::InvalidConfig(
                "host_swap_probability must lie in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
