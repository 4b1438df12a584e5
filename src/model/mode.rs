//! Travel modes and their physical constants

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Travel mode of a single route search.
///
/// The set is closed: an unrecognized mode string is rejected when the request
/// is parsed, instead of silently falling back to generic constants deep in
/// the metric formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Bike,
    Car,
    Motorcycle,
}

impl TravelMode {
    /// Default travel speed in km/h, used when a segment carries no speed
    /// hint for this mode.
    pub const fn default_speed(self) -> f64 {
        match self {
            Self::Walk => 5.0,
            Self::Bike => 15.0,
            Self::Car => 40.0,
            Self::Motorcycle => 35.0,
        }
    }

    /// Emission factor per kilometre travelled.
    pub const fn emission_factor(self) -> f64 {
        match self {
            Self::Walk => 0.0,
            Self::Bike => 0.01,
            Self::Car => 0.2,
            Self::Motorcycle => 0.15,
        }
    }

    /// Health impact per kilometre travelled; negative for motorized modes.
    pub const fn health_factor(self) -> f64 {
        match self {
            Self::Walk => 0.15,
            Self::Bike => 0.2,
            Self::Car | Self::Motorcycle => -0.05,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Bike => "bike",
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "walk" | "walking" => Ok(Self::Walk),
            "bike" | "bicycle" | "cycling" => Ok(Self::Bike),
            "car" | "driving" => Ok(Self::Car),
            "motorcycle" => Ok(Self::Motorcycle),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}
