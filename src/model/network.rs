//! Road graph: adjacency structure plus node coordinate lookup

use geo::{Point, line_string};
use hashbrown::HashMap;
use log::info;

use super::components::{
    DEFAULT_POLLUTION_FACTOR, DEFAULT_SEGMENT_LENGTH_KM, Segment, SegmentRecord,
};
use crate::{Error, NodeId};

/// Read-only road graph shared by all searches.
///
/// Built once per session by the data-loading collaborator and never mutated
/// afterwards, so any number of concurrent searches may read it.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: HashMap<NodeId, Vec<(NodeId, Segment)>>,
    nodes: HashMap<NodeId, Point<f64>>,
}

impl RouteGraph {
    pub fn builder() -> RouteGraphBuilder {
        RouteGraphBuilder::default()
    }

    /// Outgoing edges of a node.
    ///
    /// Unknown nodes have no neighbours; a search branch that reaches one
    /// simply dead-ends instead of erroring.
    pub fn neighbors(&self, node: &str) -> &[(NodeId, Segment)] {
        self.adjacency.get(node).map_or(&[][..], Vec::as_slice)
    }

    /// Coordinate of a node in (lon, lat) order, if the loader provided one.
    pub fn node_coordinate(&self, node: &str) -> Option<Point<f64>> {
        self.nodes.get(node).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn segment_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Builder applying defensive defaults and resolving segment geometry once.
///
/// Centralizing the fallbacks here keeps the routing pipeline free of
/// per-field missing-data branches: every [`Segment`] that leaves `build` has
/// a positive length, a pollution factor and a renderable geometry.
#[derive(Debug, Default)]
pub struct RouteGraphBuilder {
    nodes: HashMap<NodeId, Point<f64>>,
    records: Vec<SegmentRecord>,
}

impl RouteGraphBuilder {
    pub fn node(mut self, id: impl Into<NodeId>, lon: f64, lat: f64) -> Self {
        self.nodes.insert(id.into(), Point::new(lon, lat));
        self
    }

    pub fn segment(mut self, record: SegmentRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn segments(mut self, records: impl IntoIterator<Item = SegmentRecord>) -> Self {
        self.records.extend(records);
        self
    }

    /// # Errors
    ///
    /// Returns an error if a record has an empty endpoint id, or if a segment
    /// without explicit geometry references a node with no known coordinate.
    /// Plotting such a segment at the (0, 0) origin would silently render it
    /// in the Gulf of Guinea, so the failure is surfaced here instead.
    pub fn build(self) -> Result<RouteGraph, Error> {
        let mut adjacency: HashMap<NodeId, Vec<(NodeId, Segment)>> =
            HashMap::with_capacity(self.nodes.len());

        let record_count = self.records.len();
        for record in self.records {
            let segment = resolve_segment(record, &self.nodes)?;
            adjacency
                .entry(segment.from_node.clone())
                .or_default()
                .push((segment.to_node.clone(), segment));
        }

        info!(
            "Route graph built: {} nodes, {} segments",
            self.nodes.len(),
            record_count
        );

        Ok(RouteGraph {
            adjacency,
            nodes: self.nodes,
        })
    }
}

fn resolve_segment(
    record: SegmentRecord,
    nodes: &HashMap<NodeId, Point<f64>>,
) -> Result<Segment, Error> {
    if record.from_node.is_empty() || record.to_node.is_empty() {
        return Err(Error::InvalidData(
            "segment record with empty endpoint id".to_string(),
        ));
    }

    let length_km = match record.length_km {
        Some(length) if length > 0.0 => length,
        _ => DEFAULT_SEGMENT_LENGTH_KM,
    };

    let geometry = match record.geometry {
        Some(line) if line.0.len() >= 2 => line,
        _ => {
            let from = endpoint(&record.from_node, nodes)?;
            let to = endpoint(&record.to_node, nodes)?;
            line_string![(x: from.x(), y: from.y()), (x: to.x(), y: to.y())]
        }
    };

    Ok(Segment {
        from_node: record.from_node,
        to_node: record.to_node,
        length_km,
        speed_hints: record.speed_hints.normalized(),
        pollution_factor: record.pollution_factor.unwrap_or(DEFAULT_POLLUTION_FACTOR),
        link_id: record.link_id,
        name: record.name,
        geometry,
    })
}

fn endpoint(node: &NodeId, nodes: &HashMap<NodeId, Point<f64>>) -> Result<Point<f64>, Error> {
    nodes
        .get(node)
        .copied()
        .ok_or_else(|| Error::MissingCoordinate { node: node.clone() })
}
