//! Route discovery pipeline: enumeration, metrics, scoring, assembly, ranking

pub mod assemble;
pub mod criteria;
pub mod enumerate;
pub mod metrics;
pub mod rank;
pub mod search;

// Re-export main interfaces
pub use assemble::{RouteCandidate, RouteSegment, assemble_routes};
pub use criteria::{CriteriaWeights, Criterion, scores_for_all_criteria};
pub use enumerate::{SearchLimits, find_paths};
pub use metrics::{
    RouteMetrics, SegmentMetrics, route_metrics, segment_metrics, segments_for_path,
};
pub use rank::rank_routes;
pub use search::{RouteRequest, find_routes};
