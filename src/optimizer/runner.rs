//! Generational local-search loop.
//!
//! [`GeneticOptimizer`] runs: initial guess → uniform population →
//! mutate every member → elitist insertion → repeat until the iteration
//! cap or until the best solution stops changing.

use super::config::OptimizerConfig;
use super::population::Population;
use crate::error::PlanError;
use crate::init::Initializer;
use crate::random::rng_from_seed;
use crate::rating::SolutionRater;
use crate::solution::{mutate, PathsPerHost, Solution, SolutionWithScore};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// The best solution of the final generation.
    pub best: Solution,

    /// Score of `best`.
    pub best_score: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run stopped because the best solution stopped changing.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best score of generation 0 followed by the best score after each
    /// generation. Never decreases.
    pub score_history: Vec<f64>,
}

impl OptimizationResult {
    /// Decoded paths of the best solution.
    pub fn paths_per_host(&self) -> PathsPerHost {
        self.best.get_paths_per_host()
    }
}

/// Elitist mutation-only search over dinner assignments.
///
/// # Usage
///
/// ```
/// use progressive_dinner::init::RandomInitializer;
/// use progressive_dinner::optimizer::{GeneticOptimizer, OptimizerConfig};
/// use progressive_dinner::rating::DiversityRater;
///
/// let optimizer = GeneticOptimizer::new(
///     RandomInitializer,
///     DiversityRater,
///     OptimizerConfig::default().with_seed(42),
/// );
/// let result = optimizer.optimize(6, 2).unwrap();
/// assert_eq!(result.paths_per_host().len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticOptimizer<I, R> {
    initializer: I,
    rater: R,
    config: OptimizerConfig,
}

impl<I: Initializer, R: SolutionRater> GeneticOptimizer<I, R> {
    /// Creates an optimizer.
    pub fn new(initializer: I, rater: R, config: OptimizerConfig) -> Self {
        Self {
            initializer,
            rater,
            config,
        }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Runs the optimization for `team_count` teams over `course_count`
    /// courses.
    ///
    /// # Errors
    ///
    /// Fails before the first generation if the configuration is invalid,
    /// the rater was built for a different team count, the initializer
    /// rejects the team/course combination, or the rater's
    /// [`check_paths`](SolutionRater::check_paths) rejects the initial
    /// guess.
    pub fn optimize(&self, team_count: usize, course_count: usize) -> Result<OptimizationResult, PlanError> {
        self.optimize_with_cancel(team_count, course_count, None)
    }

    /// Runs the optimization with an optional cancellation token.
    ///
    /// The flag is checked at the start of every generation; once set, the
    /// best solution found so far is returned.
    pub fn optimize_with_cancel(
        &self,
        team_count: usize,
        course_count: usize,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<OptimizationResult, PlanError> {
        self.config.validate()?;
        if let Some(expected) = self.rater.expected_team_count() {
            if expected != team_count {
                return Err(PlanError::LengthMismatch {
                    what: "rater team count",
                    expected,
                    actual: team_count,
                });
            }
        }

        let mut rng = rng_from_seed(self.config.seed);

        // 1. Generation 0: copies of the initial guess
        let initial = self
            .initializer
            .create_initial_solution(team_count, course_count, &mut rng)?;
        if initial.team_count() != team_count {
            return Err(PlanError::LengthMismatch {
                what: "initial solution team count",
                expected: team_count,
                actual: initial.team_count(),
            });
        }
        // Mutation only permutes ids, so every later generation fits too.
        let initial_paths = initial.get_paths_per_host();
        self.rater.check_paths(&initial_paths)?;
        let initial_score = self.rater.rate_solution(&initial_paths);
        let mut population = Population::uniform(
            SolutionWithScore::new(initial, initial_score),
            self.config.population_size,
        );
        tracing::info!(team_count, course_count, initial_score, "starting dinner optimization");

        let mut score_history = Vec::with_capacity(self.config.max_iterations + 1);
        score_history.push(initial_score);

        let mut last_best = population.best().solution().clone();
        let mut unchanged = 0usize;
        let mut generations = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;

        // 2. Generational loop
        for generation in 1..=self.config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let accepted = self.next_generation(&mut population, &mut rng);
            generations = generation;

            let best = population.best();
            score_history.push(best.score());
            if best.solution() == &last_best {
                unchanged += 1;
            } else {
                unchanged = 0;
                last_best = best.solution().clone();
            }
            tracing::debug!(
                generation,
                best_score = best.score(),
                accepted,
                unchanged,
                "generation complete"
            );

            // 3. Stall check
            if unchanged >= self.config.rounds_without_change_to_break {
                stagnated = true;
                break;
            }
        }

        let best = population.into_best();
        tracing::info!(
            generations,
            best_score = best.score(),
            stagnated,
            cancelled,
            "dinner optimization finished"
        );

        Ok(OptimizationResult {
            best_score: best.score(),
            best: best.into_solution(),
            generations,
            stagnated,
            cancelled,
            score_history,
        })
    }

    fn rate(&self, solution: &Solution) -> f64 {
        self.rater.rate_solution(&solution.get_paths_per_host())
    }

    /// Mutates every member of the current generation
    /// `mutations_per_solution` times and offers each child to the
    /// population. Returns the number of children kept.
    fn next_generation<G: Rng + ?Sized>(&self, population: &mut Population, rng: &mut G) -> usize {
        let parents: Vec<Solution> = population
            .members()
            .iter()
            .map(|member| member.solution().clone())
            .collect();

        let mut accepted = 0;
        for parent in &parents {
            for _ in 0..self.config.mutations_per_solution {
                let child = mutate(parent, self.config.host_swap_probability, rng);
                let score = self.rate(&child);
                if population.try_insert(SolutionWithScore::new(child, score)) {
                    accepted += 1;
                }
            }
        }
        accepted
    }
}

// ============================================================================
// Tests
// ============================================================================
