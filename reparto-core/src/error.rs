use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Node {0} not found in graph")]
    NodeNotFound(NodeId),
    #[error("No depot nodes found in graph")]
    NoCandidates,
    #[error("No path found from node {0} to any depot")]
    NoPathFound(NodeId),
    #[error("Invalid distance for metric derivation: {0}")]
    InvalidMetric(f64),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
