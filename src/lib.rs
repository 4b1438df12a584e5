//! Multi-criteria route discovery and ranking for road networks.
//!
//! Given a prebuilt road graph, a start node, an end node and a travel mode,
//! the engine enumerates a bounded set of distinct simple paths, computes
//! physical and environmental metrics for each of them (travel time, distance,
//! pollution, emission, health impact), scores every path under a closed
//! catalogue of weighting profiles and returns an ordered, renderable list of
//! route candidates.
//!
//! The crate is purely computational: data loading, persistence and HTTP
//! serving are the surrounding services' job. The graph is shared read-only,
//! and all per-search state is scoped to the call, so concurrent searches over
//! one [`RouteGraph`](model::RouteGraph) never interfere.

pub mod error;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{RouteGraph, RouteGraphBuilder, Segment, SegmentRecord, SpeedHints, TravelMode};
pub use routing::{
    Criterion, RouteCandidate, RouteMetrics, RouteRequest, SearchLimits, find_paths, find_routes,
};

/// Node identifier as supplied by the graph-loading collaborator.
pub type NodeId = String;

/// Default bound on the number of nodes in a single path.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Default bound on the number of enumerated paths per search.
pub const DEFAULT_MAX_ROUTES: usize = 1000;
