//! Multi-source shortest-path resolution
//!
//! Answers the core query: which depot is closest to a destination,
//! and along which path.

mod dijkstra;

use rayon::prelude::*;
use serde::Serialize;

use crate::model::RoadGraph;
use crate::{Error, NodeId};
use dijkstra::shortest_path_tree;

/// Outcome of a nearest-depot query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Node ids from the chosen depot to the destination.
    pub path: Vec<NodeId>,
    /// Sum of traversed edge weights, meters.
    pub distance: f64,
    /// The chosen depot.
    pub source: NodeId,
}

/// Finds the candidate depot with the least-cost path to `destination`.
///
/// Runs one Dijkstra rooted at the destination and reads off the
/// distance to every candidate; on an undirected graph this is
/// equivalent to a search per candidate at a fraction of the cost.
/// Candidates are scanned in ascending id order with strict `<`
/// improvement, so equal-distance ties always resolve to the lowest
/// depot id. Candidates with no connecting path are skipped, and so
/// are candidate ids that are not in the graph at all: the slice is
/// caller-supplied, and an unknown id is treated like an unreachable
/// depot rather than an error. Only the destination id is strict.
///
/// A destination that is itself a candidate yields a single-node path
/// with distance 0.
///
/// # Errors
///
/// - [`Error::NodeNotFound`] if `destination` is not in the graph.
/// - [`Error::NoCandidates`] if `candidates` is empty.
/// - [`Error::NoPathFound`] if no candidate is reachable.
pub fn resolve(
    graph: &RoadGraph,
    destination: NodeId,
    candidates: &[NodeId],
) -> Result<PathResult, Error> {
    let target = graph
        .index_of(destination)
        .ok_or(Error::NodeNotFound(destination))?;

    if candidates.is_empty() {
        return Err(Error::NoCandidates);
    }

    let tree = shortest_path_tree(graph, target);

    let mut ordered = candidates.to_vec();
    ordered.sort_unstable();
    ordered.dedup();

    let mut best: Option<(f64, petgraph::graph::NodeIndex, NodeId)> = None;
    for candidate in ordered {
        let Some(idx) = graph.index_of(candidate) else {
            continue;
        };
        let Some(distance) = tree.distance(idx) else {
            continue;
        };
        if best.is_none_or(|(d, _, _)| distance < d) {
            best = Some((distance, idx, candidate));
        }
    }

    let (distance, idx, source) = best.ok_or(Error::NoPathFound(destination))?;

    let path = tree
        .path_from(idx)
        .ok_or(Error::NoPathFound(destination))?
        .into_iter()
        .map(|idx| graph.id_of(idx))
        .collect();

    Ok(PathResult {
        path,
        distance,
        source,
    })
}

/// Resolves a batch of destinations against the same candidate set.
///
/// Queries only share the read-only graph, so they run in parallel;
/// each element is the independent outcome for the matching
/// destination and one failure does not affect the others.
pub fn resolve_many(
    graph: &RoadGraph,
    destinations: &[NodeId],
    candidates: &[NodeId],
) -> Vec<Result<PathResult, Error>> {
    destinations
        .par_iter()
        .map(|&destination| resolve(graph, destination, candidates))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{EdgeRecord, NodeRecord};

    fn node(id: NodeId) -> NodeRecord {
        NodeRecord {
            id,
            x: f64::from(id),
            y: 0.0,
        }
    }

    fn edge(id: u32, source: NodeId, target: NodeId, weight: f64) -> EdgeRecord {
        EdgeRecord {
            id,
            source,
            target,
            weight,
        }
    }

    /// The reference scenario: 0 -1000- 150 -10- 151 -2000- 300.
    /// With the default rule only 150 is a depot (300 is also a
    /// multiple of 100).
    fn line_graph() -> RoadGraph {
        RoadGraph::from_records(
            &[node(0), node(150), node(151), node(300)],
            &[
                edge(0, 0, 150, 1000.0),
                edge(1, 150, 151, 10.0),
                edge(2, 151, 300, 2000.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn nearest_depot_on_line_graph() {
        let graph = line_graph();
        let result = resolve(&graph, 0, &[150]).unwrap();
        assert_eq!(result.path, vec![150, 0]);
        assert_eq!(result.source, 150);
        assert!((result.distance - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn path_endpoints_and_distance_sum() {
        let graph = line_graph();
        let result = resolve(&graph, 300, &[150]).unwrap();
        assert_eq!(result.path.first(), Some(&150));
        assert_eq!(result.path.last(), Some(&300));
        assert_eq!(result.path, vec![150, 151, 300]);
        // Summed edge weights equal the reported distance.
        assert!((result.distance - 2010.0).abs() < 1e-9);
    }

    #[test]
    fn destination_absent_from_graph() {
        let graph = line_graph();
        assert!(matches!(
            resolve(&graph, 999, &[150]),
            Err(Error::NodeNotFound(999))
        ));
    }

    #[test]
    fn empty_candidate_set() {
        let graph = line_graph();
        assert!(matches!(resolve(&graph, 0, &[]), Err(Error::NoCandidates)));
    }

    #[test]
    fn disconnected_destination() {
        let graph = RoadGraph::from_records(
            &[node(0), node(150), node(7)],
            &[edge(0, 0, 150, 5.0)],
        )
        .unwrap();
        assert!(matches!(
            resolve(&graph, 7, &[150]),
            Err(Error::NoPathFound(7))
        ));
    }

    #[test]
    fn destination_is_a_depot() {
        let graph = line_graph();
        let result = resolve(&graph, 150, &[150]).unwrap();
        assert_eq!(result.path, vec![150]);
        assert_eq!(result.distance, 0.0);
        assert_eq!(result.source, 150);
    }

    #[test]
    fn equal_distance_ties_go_to_lowest_id() {
        // 150 and 450 are both 10 m from node 1.
        let graph = RoadGraph::from_records(
            &[node(1), node(150), node(450)],
            &[edge(0, 150, 1, 10.0), edge(1, 450, 1, 10.0)],
        )
        .unwrap();
        // Candidate order in the input must not matter.
        let a = resolve(&graph, 1, &[450, 150]).unwrap();
        let b = resolve(&graph, 1, &[150, 450]).unwrap();
        assert_eq!(a.source, 150);
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_resolution_is_deterministic() {
        let graph = line_graph();
        let first = resolve(&graph, 300, &[150]).unwrap();
        for _ in 0..10 {
            assert_eq!(resolve(&graph, 300, &[150]).unwrap(), first);
        }
    }

    #[test]
    fn unreachable_candidate_is_skipped_not_fatal() {
        // 450 exists but floats free of the connected component.
        let graph = RoadGraph::from_records(
            &[node(0), node(150), node(450)],
            &[edge(0, 0, 150, 42.0)],
        )
        .unwrap();
        let result = resolve(&graph, 0, &[150, 450]).unwrap();
        assert_eq!(result.source, 150);
    }

    #[test]
    fn unknown_candidate_id_is_skipped_not_fatal() {
        let graph = line_graph();
        // 600 would be a depot by id, but no such node exists.
        let result = resolve(&graph, 0, &[150, 600]).unwrap();
        assert_eq!(result.source, 150);
        // With only unknown ids left, the query degrades to NoPathFound.
        assert!(matches!(
            resolve(&graph, 0, &[600]),
            Err(Error::NoPathFound(0))
        ));
    }

    #[test]
    fn parallel_edges_use_the_cheaper_one() {
        let graph = RoadGraph::from_records(
            &[node(0), node(150)],
            &[edge(0, 0, 150, 100.0), edge(1, 0, 150, 30.0)],
        )
        .unwrap();
        let result = resolve(&graph, 0, &[150]).unwrap();
        assert!((result.distance - 30.0).abs() < 1e-9);
    }

    #[test]
    fn batch_resolution_matches_single_queries() {
        let graph = line_graph();
        let batch = resolve_many(&graph, &[0, 151, 999], &[150]);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].as_ref().unwrap().path, vec![150, 0]);
        assert_eq!(batch[1].as_ref().unwrap().path, vec![150, 151]);
        assert!(matches!(batch[2], Err(Error::NodeNotFound(999))));
    }
}
