//! Road network components - segment records and resolved segments

use geo::LineString;
use serde::{Deserialize, Serialize};

use crate::NodeId;
use super::mode::TravelMode;

/// Fallback segment length in kilometres when the source data carries none.
/// Also guards the time formula against division by a zero length.
pub const DEFAULT_SEGMENT_LENGTH_KM: f64 = 0.1;

/// Fallback pollution factor for segments without air-quality data.
pub const DEFAULT_POLLUTION_FACTOR: f64 = 0.3;

/// Per-mode speed hints attached to a segment, km/h.
///
/// Walking speed is never hinted per segment; pedestrians are not affected by
/// the road class the hints derive from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SpeedHints {
    pub bike: Option<f64>,
    pub car: Option<f64>,
    pub motorcycle: Option<f64>,
}

impl SpeedHints {
    pub fn for_mode(&self, mode: TravelMode) -> Option<f64> {
        match mode {
            TravelMode::Walk => None,
            TravelMode::Bike => self.bike,
            TravelMode::Car => self.car,
            TravelMode::Motorcycle => self.motorcycle,
        }
    }

    /// Drops hints that cannot be divided by. A zero or negative speed would
    /// turn the traversal time infinite, so such hints count as absent and
    /// the mode default applies instead.
    pub(crate) fn normalized(self) -> Self {
        let positive = |speed: Option<f64>| speed.filter(|s| *s > 0.0);
        Self {
            bike: positive(self.bike),
            car: positive(self.car),
            motorcycle: positive(self.motorcycle),
        }
    }
}

/// Raw road segment as supplied by the data-loading collaborator.
///
/// Everything beyond the endpoint ids is optional; defaults are applied once
/// when the graph is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SegmentRecord {
    pub from_node: NodeId,
    pub to_node: NodeId,
    #[serde(default)]
    pub length_km: Option<f64>,
    #[serde(default)]
    pub speed_hints: SpeedHints,
    #[serde(default)]
    pub pollution_factor: Option<f64>,
    #[serde(default)]
    pub link_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub geometry: Option<LineString<f64>>,
}

impl SegmentRecord {
    pub fn new(from_node: impl Into<NodeId>, to_node: impl Into<NodeId>) -> Self {
        Self {
            from_node: from_node.into(),
            to_node: to_node.into(),
            ..Self::default()
        }
    }

    pub fn with_length(mut self, length_km: f64) -> Self {
        self.length_km = Some(length_km);
        self
    }
}

/// Road segment with defaults applied and display geometry resolved.
///
/// Produced only by [`RouteGraphBuilder::build`](super::RouteGraphBuilder),
/// so downstream code never re-checks for missing lengths, pollution factors
/// or coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub from_node: NodeId,
    pub to_node: NodeId,
    /// Length in kilometres, always positive.
    pub length_km: f64,
    pub speed_hints: SpeedHints,
    pub pollution_factor: f64,
    pub link_id: Option<String>,
    pub name: Option<String>,
    /// Geometry for rendering, resolved once at graph construction.
    pub geometry: LineString<f64>,
}

impl Segment {
    /// Effective speed for the given mode, km/h.
    pub fn speed_for(&self, mode: TravelMode) -> f64 {
        self.speed_hints
            .for_mode(mode)
            .unwrap_or_else(|| mode.default_speed())
    }

    /// Identifier used in rendered features.
    pub fn feature_id(&self) -> String {
        self.link_id
            .clone()
            .unwrap_or_else(|| format!("{}-{}", self.from_node, self.to_node))
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Road")
    }
}
