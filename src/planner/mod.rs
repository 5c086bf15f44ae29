//! Planning façade.
//!
//! [`DinnerPlanner`] validates a roster and a weighted list of
//! [`RaterType`] criteria, fetches the distance tables the criteria need
//! from a [`DistanceProvider`], builds the raters and the matching
//! initializer, and runs the optimizer.
//!
//! ```
//! use progressive_dinner::error::DistanceError;
//! use progressive_dinner::planner::{DinnerPlanner, DinnerTeam, DistanceProvider, GeoLocation, RaterType};
//!
//! struct Offline;
//!
//! impl DistanceProvider for Offline {
//!     fn walking_duration(&self, _: &str, _: &str) -> Result<f64, DistanceError> {
//!         Ok(300.0)
//!     }
//!     fn geolocation(&self, _: &str) -> Result<GeoLocation, DistanceError> {
//!         Ok(GeoLocation::new(0.0, 0.0))
//!     }
//! }
//!
//! let teams = vec![DinnerTeam::default(); 9];
//! let paths = DinnerPlanner::new(Offline)
//!     .plan_dinner(&teams, &[(1.0, RaterType::Diversity)], 3, None)
//!     .unwrap();
//! assert_eq!(paths.len(), 9);
//! ```

mod distance;
mod runner;
mod types;

pub use distance::{build_distance_matrix, build_final_distances, DistanceProvider};
pub use runner::DinnerPlanner;
pub use types::{DinnerTeam, GeoLocation, Participant, RaterType};
