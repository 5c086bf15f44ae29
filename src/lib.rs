//! Course-rotation planner for progressive dinners.
//!
//! In a progressive ("running") dinner every team cooks exactly one course
//! at home and is a guest at other teams' homes for the remaining courses.
//! This crate searches for an assignment that
//!
//! - lets every team meet as many different teams as possible,
//! - keeps walks between consecutive hosts short,
//! - and, optionally, ends the last course close to a final venue.
//!
//! # Layout
//!
//! - [`solution`]: positional permutation encoding of a plan, path
//!   decoding, and the mutation operator
//! - [`init`]: first-guess constructors
//! - [`rating`]: pluggable scoring strategies and their weighted
//!   combination
//! - [`optimizer`]: elitist, mutation-only generational search
//! - [`planner`]: façade that turns a team roster and weighted criteria
//!   into a plan, fetching distances through a [`planner::DistanceProvider`]
//! - [`error`]: error types shared by all of the above
//!
//! The search is single-threaded and synchronous. Distance lookups happen
//! once, before the search starts; the loop itself only touches in-memory
//! data and cannot fail.

pub mod error;
pub mod init;
pub mod optimizer;
pub mod planner;
pub mod random;
pub mod rating;
pub mod solution;
