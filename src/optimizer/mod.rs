//! Elitist mutation-only optimizer.
//!
//! Each generation mutates every member several times and offers the
//! children to a fixed-size population sorted by score. There is no
//! crossover; the search is a population-based local search.
//!
//! # Key Types
//!
//! - [`OptimizerConfig`]: iteration cap, population size, stall limit, seed
//! - [`Population`]: best-first generation with duplicate-aware insertion
//! - [`GeneticOptimizer`]: runs the generational loop
//! - [`OptimizationResult`]: best solution plus run statistics

mod config;
mod population;
mod runner;

pub use config::OptimizerConfig;
pub use population::Population;
pub use runner::{GeneticOptimizer, OptimizationResult};
