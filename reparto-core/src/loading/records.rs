//! Raw on-disk row formats for node and edge files

use serde::Deserialize;

use crate::NodeId;

/// Headerless node row: `id x y`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

/// Headerless edge row: `id source target weight`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EdgeRecord {
    pub id: u32,
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}
