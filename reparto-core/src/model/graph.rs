//! Immutable weighted road graph over petgraph

use geo::Point;
use hashbrown::HashMap;
use petgraph::Undirected;
use petgraph::graph::{Edges, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::loading::{EdgeRecord, NodeRecord};
use crate::model::{RoadEdge, RoadNode};
use crate::{Error, NodeId};

/// Weighted undirected road network with 2-D node positions.
///
/// Parallel edges between the same pair of nodes are kept and treated
/// independently. The graph is built once at startup and never mutated
/// afterwards, so it can be shared behind an `Arc` by any number of
/// concurrent queries without locking.
#[derive(Debug, Clone)]
pub struct RoadGraph {
    graph: UnGraph<RoadNode, RoadEdge>,
    node_index: HashMap<NodeId, NodeIndex>,
}

impl RoadGraph {
    /// Builds the graph from raw node and edge records.
    ///
    /// Edges referencing node ids absent from the node records are
    /// rejected rather than silently materialized as isolated nodes;
    /// a node without a position could never be placed by the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] on duplicate node ids, non-finite
    /// coordinates, negative or non-finite weights, or dangling edge
    /// references.
    pub fn from_records(nodes: &[NodeRecord], edges: &[EdgeRecord]) -> Result<Self, Error> {
        let mut graph = UnGraph::with_capacity(nodes.len(), edges.len());
        let mut node_index = HashMap::with_capacity(nodes.len());

        for record in nodes {
            if !record.x.is_finite() || !record.y.is_finite() {
                return Err(Error::InvalidData(format!(
                    "malformed node data: node {} has non-finite coordinates",
                    record.id
                )));
            }
            let idx = graph.add_node(RoadNode {
                id: record.id,
                geometry: Point::new(record.x, record.y),
            });
            if node_index.insert(record.id, idx).is_some() {
                return Err(Error::InvalidData(format!(
                    "malformed node data: duplicate node id {}",
                    record.id
                )));
            }
        }

        for record in edges {
            if !record.weight.is_finite() || record.weight < 0.0 {
                return Err(Error::InvalidData(format!(
                    "malformed edge data: edge {} has invalid weight {}",
                    record.id, record.weight
                )));
            }
            let source = Self::resolve_endpoint(&node_index, record.id, record.source)?;
            let target = Self::resolve_endpoint(&node_index, record.id, record.target)?;
            graph.add_edge(
                source,
                target,
                RoadEdge {
                    weight: record.weight,
                },
            );
        }

        Ok(Self { graph, node_index })
    }

    fn resolve_endpoint(
        node_index: &HashMap<NodeId, NodeIndex>,
        edge_id: u32,
        node_id: NodeId,
    ) -> Result<NodeIndex, Error> {
        node_index.get(&node_id).copied().ok_or_else(|| {
            Error::InvalidData(format!(
                "dangling edge reference: edge {edge_id} references unknown node {node_id}"
            ))
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    /// Position of a node, if present.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<Point<f64>> {
        self.index_of(id).map(|idx| self.graph[idx].geometry)
    }

    /// Iterator over all node ids, in storage order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_weights().map(|node| node.id)
    }

    /// Iterator over all edges as `(source id, target id, weight)`.
    pub fn edge_list(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].id,
                self.graph[edge.target()].id,
                edge.weight().weight,
            )
        })
    }

    pub(crate) fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.node_index.get(&id).copied()
    }

    pub(crate) fn id_of(&self, idx: NodeIndex) -> NodeId {
        self.graph[idx].id
    }

    pub(crate) fn edges(&self, idx: NodeIndex) -> Edges<'_, RoadEdge, Undirected> {
        self.graph.edges(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{EdgeRecord, NodeRecord};

    fn node(id: NodeId, x: f64, y: f64) -> NodeRecord {
        NodeRecord { id, x, y }
    }

    fn edge(id: u32, source: NodeId, target: NodeId, weight: f64) -> EdgeRecord {
        EdgeRecord {
            id,
            source,
            target,
            weight,
        }
    }

    #[test]
    fn builds_from_records() {
        let graph = RoadGraph::from_records(
            &[node(0, 0.0, 0.0), node(150, 1.0, 0.0), node(151, 2.0, 0.0)],
            &[edge(0, 0, 150, 1000.0), edge(1, 150, 151, 10.0)],
        )
        .unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains(150));
        assert!(!graph.contains(7));
        assert_eq!(graph.position(151), Some(Point::new(2.0, 0.0)));
    }

    #[test]
    fn every_edge_endpoint_is_a_loaded_node() {
        let graph = RoadGraph::from_records(
            &[node(1, 0.0, 0.0), node(2, 1.0, 1.0), node(3, 2.0, 2.0)],
            &[edge(0, 1, 2, 5.0), edge(1, 2, 3, 5.0)],
        )
        .unwrap();

        for (source, target, _) in graph.edge_list() {
            assert!(graph.contains(source));
            assert!(graph.contains(target));
        }
    }

    #[test]
    fn rejects_dangling_edge_reference() {
        let err = RoadGraph::from_records(
            &[node(1, 0.0, 0.0)],
            &[edge(0, 1, 99, 5.0)],
        )
        .unwrap_err();
        assert!(err.to_string().contains("dangling edge reference"));
    }

    #[test]
    fn rejects_duplicate_node_id() {
        let err =
            RoadGraph::from_records(&[node(1, 0.0, 0.0), node(1, 1.0, 1.0)], &[]).unwrap_err();
        assert!(err.to_string().contains("duplicate node id"));
    }

    #[test]
    fn rejects_negative_weight() {
        let err = RoadGraph::from_records(
            &[node(1, 0.0, 0.0), node(2, 1.0, 0.0)],
            &[edge(0, 1, 2, -1.0)],
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid weight"));
    }

    #[test]
    fn keeps_parallel_edges() {
        let graph = RoadGraph::from_records(
            &[node(1, 0.0, 0.0), node(2, 1.0, 0.0)],
            &[edge(0, 1, 2, 10.0), edge(1, 1, 2, 3.0)],
        )
        .unwrap();
        assert_eq!(graph.edge_count(), 2);
    }
}
