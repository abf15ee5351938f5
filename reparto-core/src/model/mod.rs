//! Data model for the road network
//!
//! Contains types and structures representing the immutable weighted
//! graph that all queries run against.

pub mod components;
pub mod graph;

pub use components::{RoadEdge, RoadNode};
pub use graph::RoadGraph;
