//! Per-segment and aggregate route metrics

use itertools::Itertools;
use log::warn;
use serde::Serialize;

use crate::model::{RouteGraph, Segment, TravelMode};
use crate::NodeId;

/// Physical metrics of one traversed segment.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SegmentMetrics {
    /// Traversal time in seconds.
    pub time_s: f64,
    pub distance_km: f64,
    pub pollution: f64,
    pub emission: f64,
    pub health: f64,
}

/// Aggregate metrics of a whole route.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RouteMetrics {
    /// Total travel time in minutes.
    pub time_min: f64,
    /// Total distance in kilometres.
    pub distance_km: f64,
    /// Mean pollution factor over the route's segments.
    pub avg_pollution: f64,
    /// Mean emission per segment.
    pub avg_emission: f64,
    /// Total health impact. Summed rather than averaged: the benefit of an
    /// active mode scales with the distance covered, not the segment count.
    pub health: f64,
    pub segment_count: usize,
}

/// Resolves the segments of a node path against the graph.
///
/// Enumerated paths only follow existing edges, so every consecutive pair
/// should resolve. A pair that does not indicates the graph changed between
/// enumeration and resolution; it is skipped with a warning rather than
/// aborting the whole multi-route computation.
pub fn segments_for_path(graph: &RouteGraph, path: &[NodeId]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(path.len().saturating_sub(1));
    for (from, to) in path.iter().tuple_windows() {
        match graph
            .neighbors(from)
            .iter()
            .find(|(neighbor, _)| neighbor == to)
        {
            Some((_, segment)) => segments.push(segment.clone()),
            None => warn!("no segment connects {from} to {to}, skipping pair"),
        }
    }
    segments
}

/// Metrics of one segment under the given travel mode.
pub fn segment_metrics(segment: &Segment, mode: TravelMode) -> SegmentMetrics {
    let distance_km = segment.length_km;
    let speed = segment.speed_for(mode);
    SegmentMetrics {
        time_s: distance_km / speed * 3600.0,
        distance_km,
        pollution: segment.pollution_factor,
        emission: distance_km * mode.emission_factor(),
        health: distance_km * mode.health_factor(),
    }
}

/// Aggregates per-segment metrics into route totals.
///
/// Pollution and emission are averaged over the segment count; an empty
/// route yields zeros across the board instead of NaN.
pub fn route_metrics(segments: &[SegmentMetrics]) -> RouteMetrics {
    let count = segments.len();
    let mut time_s = 0.0;
    let mut distance_km = 0.0;
    let mut pollution = 0.0;
    let mut emission = 0.0;
    let mut health = 0.0;
    for m in segments {
        time_s += m.time_s;
        distance_km += m.distance_km;
        pollution += m.pollution;
        emission += m.emission;
        health += m.health;
    }

    let average = |total: f64| if count == 0 { 0.0 } else { total / count as f64 };

    RouteMetrics {
        time_min: time_s / 60.0,
        distance_km,
        avg_pollution: average(pollution),
        avg_emission: average(emission),
        health,
        segment_count: count,
    }
}
