//! Data model for the road network
//!
//! Contains the segment and graph types consumed by the routing pipeline.

pub mod components;
pub mod mode;
pub mod network;

pub use components::{
    DEFAULT_POLLUTION_FACTOR, DEFAULT_SEGMENT_LENGTH_KM, Segment, SegmentRecord, SpeedHints,
};
pub use mode::TravelMode;
pub use network::{RouteGraph, RouteGraphBuilder};
