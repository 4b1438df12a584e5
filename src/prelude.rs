// Re-export key components
pub use crate::error::Error;
pub use crate::model::{
    RouteGraph, RouteGraphBuilder, Segment, SegmentRecord, SpeedHints, TravelMode,
};
pub use crate::routing::{
    Criterion, RouteCandidate, RouteMetrics, RouteRequest, RouteSegment, SearchLimits,
    SegmentMetrics, assemble_routes, find_paths, find_routes, rank_routes,
};

// Core constants and aliases
pub use crate::NodeId;
pub use crate::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_ROUTES};
