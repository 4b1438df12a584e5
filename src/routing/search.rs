//! Search pipeline gluing enumeration, assembly and ranking together

use log::debug;

use super::assemble::{RouteCandidate, assemble_routes};
use super::criteria::Criterion;
use super::enumerate::{SearchLimits, find_paths};
use super::rank::rank_routes;
use crate::model::{RouteGraph, TravelMode};
use crate::NodeId;

/// One route search as issued by the service layer.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: NodeId,
    pub end: NodeId,
    pub mode: TravelMode,
    /// Profile to order the final list by; `Balanced` when unset.
    pub criterion: Option<Criterion>,
    pub limits: SearchLimits,
}

impl RouteRequest {
    pub fn new(start: impl Into<NodeId>, end: impl Into<NodeId>, mode: TravelMode) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            mode,
            criterion: None,
            limits: SearchLimits::default(),
        }
    }

    pub fn ranked_by(mut self, criterion: Criterion) -> Self {
        self.criterion = Some(criterion);
        self
    }
}

/// Runs the full pipeline for one request: enumerate candidate paths, compute
/// metrics and scores, assemble renderable candidates, rank them.
///
/// Unknown start or end nodes produce an empty list rather than an error.
pub fn find_routes(graph: &RouteGraph, request: &RouteRequest) -> Vec<RouteCandidate> {
    let paths = find_paths(graph, &request.start, &request.end, &request.limits);
    debug!(
        "enumerated {} candidate path(s) from {} to {}",
        paths.len(),
        request.start,
        request.end
    );

    let mut routes = assemble_routes(graph, &paths, request.mode);
    rank_routes(&mut routes, request.criterion.unwrap_or(Criterion::Balanced));
    routes
}
