use log::info;

use super::config::ModelConfig;
use super::parser::deserialize_records;
use super::records::{EdgeRecord, NodeRecord};
use crate::{Error, model::RoadGraph};

/// Creates the road graph from the configured data files.
///
/// Failures here are fatal at startup: the service must not begin
/// answering queries over a graph that only half loaded.
///
/// # Errors
///
/// Returns an error if a data file is missing or unreadable, a row is
/// malformed, or the records are semantically inconsistent
/// (see [`RoadGraph::from_records`]).
pub fn create_road_graph(config: &ModelConfig) -> Result<RoadGraph, Error> {
    validate_config(config)?;

    info!("Loading node data: {}", config.nodes_path.display());
    let nodes: Vec<NodeRecord> = deserialize_records(&config.nodes_path)?;

    info!("Loading edge data: {}", config.edges_path.display());
    let edges: Vec<EdgeRecord> = deserialize_records(&config.edges_path)?;

    let graph = RoadGraph::from_records(&nodes, &edges)?;
    info!(
        "Road graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

fn validate_config(config: &ModelConfig) -> Result<(), Error> {
    if !config.nodes_path.exists() {
        return Err(Error::InvalidData(format!(
            "node file not found: {}",
            config.nodes_path.display()
        )));
    }

    if !config.edges_path.exists() {
        return Err(Error::InvalidData(format!(
            "edge file not found: {}",
            config.edges_path.display()
        )));
    }

    Ok(())
}
