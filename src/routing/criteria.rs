//! Weighting profiles turning heterogeneous metrics into one scalar score

use std::fmt;
use std::str::FromStr;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::metrics::RouteMetrics;
use crate::Error;

/// Named weighting profile over the metric dimensions.
///
/// The catalogue is closed: an unknown profile name is rejected when a
/// request is parsed, never mapped to some default profile silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Criterion {
    Balanced,
    Fastest,
    LeastPolluted,
    LeastEmission,
    Healthiest,
}

/// Fixed weights over the aggregate metric dimensions.
///
/// Signs are chosen so that a higher score means a more desirable route
/// under the profile; ranking sorts descending. The weights are not
/// normalized and do not sum to 1.
#[derive(Debug, Clone, Copy)]
pub struct CriteriaWeights {
    pub time: f64,
    pub distance: f64,
    pub pollution: f64,
    pub emission: f64,
    pub health: f64,
}

impl Criterion {
    pub const ALL: [Self; 5] = [
        Self::Balanced,
        Self::Fastest,
        Self::LeastPolluted,
        Self::LeastEmission,
        Self::Healthiest,
    ];

    pub const fn weights(self) -> CriteriaWeights {
        match self {
            Self::Balanced => CriteriaWeights {
                time: -1.0,
                distance: -0.5,
                pollution: -1.0,
                emission: -1.0,
                health: 1.0,
            },
            Self::Fastest => CriteriaWeights {
                time: -3.0,
                distance: -0.5,
                pollution: -0.1,
                emission: -0.1,
                health: 0.0,
            },
            Self::LeastPolluted => CriteriaWeights {
                time: -0.2,
                distance: -0.1,
                pollution: -4.0,
                emission: -1.0,
                health: 0.5,
            },
            Self::LeastEmission => CriteriaWeights {
                time: -0.2,
                distance: -0.1,
                pollution: -1.0,
                emission: -4.0,
                health: 0.5,
            },
            Self::Healthiest => CriteriaWeights {
                time: -0.2,
                distance: 0.0,
                pollution: -1.0,
                emission: -0.5,
                health: 3.0,
            },
        }
    }

    /// Scores aggregate metrics under this profile.
    ///
    /// The pollution and emission weights apply to the *averaged* aggregate
    /// fields. The mapping between weight dimensions and metric fields is
    /// spelled out here so the two namespaces cannot drift apart.
    pub fn score(self, metrics: &RouteMetrics) -> f64 {
        let w = self.weights();
        w.time * metrics.time_min
            + w.distance * metrics.distance_km
            + w.pollution * metrics.avg_pollution
            + w.emission * metrics.avg_emission
            + w.health * metrics.health
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Fastest => "fastest",
            Self::LeastPolluted => "least-polluted",
            Self::LeastEmission => "least-emission",
            Self::Healthiest => "healthiest",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "balanced" => Ok(Self::Balanced),
            "fastest" => Ok(Self::Fastest),
            "least-polluted" => Ok(Self::LeastPolluted),
            "least-emission" => Ok(Self::LeastEmission),
            "healthiest" => Ok(Self::Healthiest),
            other => Err(Error::UnknownCriterion(other.to_string())),
        }
    }
}

/// Every profile's score for one route, computed once so callers can re-rank
/// the same candidate set by any profile without recomputation.
pub fn scores_for_all_criteria(metrics: &RouteMetrics) -> HashMap<Criterion, f64> {
    Criterion::ALL
        .iter()
        .map(|criterion| (*criterion, criterion.score(metrics)))
        .collect()
}
