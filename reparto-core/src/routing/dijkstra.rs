use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::model::RoadGraph;

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeIndex,
}

impl Eq for State {}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap);
        // equal costs fall back to the node index so the pop order is
        // fully defined.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and predecessors of a single-source Dijkstra run.
pub(crate) struct ShortestPathTree {
    start: NodeIndex,
    distances: HashMap<NodeIndex, f64>,
    predecessors: HashMap<NodeIndex, NodeIndex>,
}

impl ShortestPathTree {
    /// Cost of the cheapest path from the start to `node`, if reached.
    pub(crate) fn distance(&self, node: NodeIndex) -> Option<f64> {
        self.distances.get(&node).copied()
    }

    /// Node sequence from `node` back to the start of the run, or
    /// `None` if `node` was never reached.
    ///
    /// Because the run is rooted at the query destination, walking the
    /// predecessor chain from a depot yields the depot-to-destination
    /// path already in delivery order.
    pub(crate) fn path_from(&self, node: NodeIndex) -> Option<Vec<NodeIndex>> {
        if node != self.start && !self.predecessors.contains_key(&node) {
            return None;
        }

        let mut path = vec![node];
        let mut current = node;
        while current != self.start {
            current = *self.predecessors.get(&current)?;
            path.push(current);
        }
        Some(path)
    }
}

/// Dijkstra's algorithm over the full road graph, rooted at `start`.
///
/// Edge weights are non-negative by the graph's load-time invariant,
/// which is what makes the greedy pop order correct.
pub(crate) fn shortest_path_tree(graph: &RoadGraph, start: NodeIndex) -> ShortestPathTree {
    // Estimate capacity based on graph size (adjust as needed)
    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        // Examine neighbors
        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().weight;

            // Add or update distance if better using Entry API
            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    ShortestPathTree {
        start,
        distances,
        predecessors,
    }
}
