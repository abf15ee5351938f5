//! GeoJSON rendering of the road graph
//!
//! Produces a `FeatureCollection` with every edge as a LineString and
//! every node as a Point. Depot nodes, the nodes of the supplied path
//! and its destination carry a distinguishing `kind` property so a map
//! front-end can style them; edges lying on the path are flagged
//! `on_path`. Reads the graph and the path, mutates nothing.

use geojson::{Feature, FeatureCollection};
use hashbrown::HashSet;
use serde_json::json;

use crate::classify::DepotRule;
use crate::model::RoadGraph;
use crate::routing::PathResult;
use crate::{Error, NodeId};

/// Converts the whole graph to a `GeoJSON` `FeatureCollection`,
/// highlighting `path` if one is given.
///
/// # Errors
///
/// [`Error::GeoJsonError`] if feature construction fails.
pub fn graph_to_geojson(
    graph: &RoadGraph,
    rule: &DepotRule,
    path: Option<&PathResult>,
) -> Result<FeatureCollection, Error> {
    let path_nodes: HashSet<NodeId> = path
        .map(|p| p.path.iter().copied().collect())
        .unwrap_or_default();
    let path_edges: HashSet<(NodeId, NodeId)> = path
        .map(|p| {
            p.path
                .windows(2)
                .map(|pair| ordered_pair(pair[0], pair[1]))
                .collect()
        })
        .unwrap_or_default();
    let destination = path.and_then(|p| p.path.last().copied());

    let mut features = Vec::with_capacity(graph.node_count() + graph.edge_count());

    for (source, target, weight) in graph.edge_list() {
        let on_path = path_edges.contains(&ordered_pair(source, target));
        features.push(edge_feature(graph, source, target, weight, on_path)?);
    }

    for id in graph.node_ids() {
        let kind = if destination == Some(id) {
            "destination"
        } else if rule.is_depot(id) {
            "depot"
        } else if path_nodes.contains(&id) {
            "path"
        } else {
            "road"
        };
        features.push(node_feature(graph, id, kind)?);
    }

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

/// Serialized form of [`graph_to_geojson`], ready to ship to a client.
///
/// # Errors
///
/// [`Error::GeoJsonError`] if construction or serialization fails.
pub fn graph_to_geojson_string(
    graph: &RoadGraph,
    rule: &DepotRule,
    path: Option<&PathResult>,
) -> Result<String, Error> {
    serde_json::to_string(&graph_to_geojson(graph, rule, path)?)
        .map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn ordered_pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}

fn node_feature(graph: &RoadGraph, id: NodeId, kind: &str) -> Result<Feature, Error> {
    let position = graph
        .position(id)
        .ok_or_else(|| Error::GeoJsonError(format!("node {id} has no position")))?;

    let value = json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [position.x(), position.y()],
        },
        "properties": {
            "node_id": id,
            "kind": kind,
        }
    });

    serde_json::from_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn edge_feature(
    graph: &RoadGraph,
    source: NodeId,
    target: NodeId,
    weight: f64,
    on_path: bool,
) -> Result<Feature, Error> {
    let from = graph
        .position(source)
        .ok_or_else(|| Error::GeoJsonError(format!("node {source} has no position")))?;
    let to = graph
        .position(target)
        .ok_or_else(|| Error::GeoJsonError(format!("node {target} has no position")))?;

    let value = json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": [[from.x(), from.y()], [to.x(), to.y()]],
        },
        "properties": {
            "source": source,
            "target": target,
            "weight": weight,
            "on_path": on_path,
        }
    });

    serde_json::from_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
