//! Roster records and rating criteria.

/// One participant of a dinner team.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participant {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Free-text dietary notes.
    pub food_restrictions: String,
}

/// A team that cooks one course and visits the others together.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DinnerTeam {
    /// Address of the team's kitchen. Required by the distance criteria.
    pub address: Option<String>,
    pub participants: Vec<Participant>,
}

impl DinnerTeam {
    /// Creates a team cooking at `address`.
    pub fn new(address: impl Into<String>, participants: Vec<Participant>) -> Self {
        Self {
            address: Some(address.into()),
            participants,
        }
    }

    /// The address, treating an empty or blank string as missing.
    pub fn address(&self) -> Option<&str> {
        self.address
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
    }
}

/// A geocoded place.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Criterion a dinner plan can be optimized for.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaterType {
    /// Teams should meet as many different teams as possible.
    Diversity,
    /// Walks between consecutive hosts should be short.
    WalkingDistance,
    /// The walk from the last course to the final venue should be short.
    WalkingDistanceToFinal,
}

impl RaterType {
    /// Whether the criterion needs addresses on every team.
    pub fn needs_addresses(self) -> bool {
        !matches!(self, RaterType::Diversity)
    }
}
