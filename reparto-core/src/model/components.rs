//! Road network components - nodes and edges

use geo::Point;

use crate::NodeId;

/// Road graph node
#[derive(Debug, Clone)]
pub struct RoadNode {
    /// Identifier assigned by the input data
    pub id: NodeId,
    /// Node coordinates
    pub geometry: Point<f64>,
}

/// Road graph edge (street segment)
#[derive(Debug, Clone, Copy)]
pub struct RoadEdge {
    /// Physical distance in meters, used as the routing cost
    pub weight: f64,
}
