//! Assembly of renderable route candidates

use geo::MultiLineString;
use geojson::{Feature, Geometry, Value as GeoJsonValue};
use hashbrown::HashMap;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::json;

use super::criteria::{Criterion, scores_for_all_criteria};
use super::metrics::{
    RouteMetrics, SegmentMetrics, route_metrics, segment_metrics, segments_for_path,
};
use crate::model::{RouteGraph, Segment, TravelMode};
use crate::NodeId;

/// A resolved segment together with its per-segment metrics.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSegment {
    pub segment: Segment,
    pub metrics: SegmentMetrics,
}

/// Fully assembled route candidate, ready for JSON serialization by the
/// service layer and rendering by the map layer.
#[derive(Debug, Clone, Serialize)]
pub struct RouteCandidate {
    pub id: String,
    pub name: String,
    pub path: Vec<NodeId>,
    pub segments: Vec<RouteSegment>,
    pub metrics: RouteMetrics,
    /// Score under every profile, so the caller can re-rank without
    /// recomputing metrics.
    pub scores: HashMap<Criterion, f64>,
    /// One line per traversed segment.
    pub geometry: MultiLineString<f64>,
    /// One GeoJSON feature per traversed segment, for per-road styling.
    pub segment_features: Vec<Feature>,
}

/// Builds candidates for the enumerated paths, keeping enumeration order.
///
/// Candidates are independent of each other, so assembly fans out across the
/// rayon pool; ordering is restored by the indexed collect.
pub fn assemble_routes(
    graph: &RouteGraph,
    paths: &[Vec<NodeId>],
    mode: TravelMode,
) -> Vec<RouteCandidate> {
    paths
        .par_iter()
        .enumerate()
        .map(|(index, path)| assemble_route(graph, path, index + 1, mode))
        .collect()
}

fn assemble_route(
    graph: &RouteGraph,
    path: &[NodeId],
    index: usize,
    mode: TravelMode,
) -> RouteCandidate {
    let segments = segments_for_path(graph, path);
    let per_segment: Vec<SegmentMetrics> = segments
        .iter()
        .map(|segment| segment_metrics(segment, mode))
        .collect();
    let metrics = route_metrics(&per_segment);
    let scores = scores_for_all_criteria(&metrics);

    let geometry =
        MultiLineString::new(segments.iter().map(|s| s.geometry.clone()).collect());
    let segment_features = segments
        .iter()
        .map(|segment| segment_feature(segment, mode))
        .collect();

    let segments = segments
        .into_iter()
        .zip(per_segment)
        .map(|(segment, metrics)| RouteSegment { segment, metrics })
        .collect();

    RouteCandidate {
        id: format!("route_{index}"),
        name: format!("Route {index}"),
        path: path.to_vec(),
        segments,
        metrics,
        scores,
        geometry,
        segment_features,
    }
}

fn segment_feature(segment: &Segment, mode: TravelMode) -> Feature {
    let geometry = Geometry::new(GeoJsonValue::from(&segment.geometry));
    let properties = json!({
        "id": segment.feature_id(),
        "name": segment.display_name(),
        "length": segment.length_km,
        "mode": mode.as_str(),
        "from_node": segment.from_node,
        "to_node": segment.to_node,
    });

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: properties.as_object().cloned(),
        foreign_members: None,
    }
}
