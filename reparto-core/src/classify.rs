//! Depot identification rule
//!
//! Node ids carry category information: ids divisible by the depot
//! multiple (`Z`) are depots, unless also divisible by the house
//! multiple (`X`), in which case they belong to the housing category.
//! The operator must pick `X` and `Z` so the categories stay disjoint;
//! the rule itself does not enforce that.

use serde::Deserialize;

use crate::model::RoadGraph;
use crate::{Error, NodeId};

/// Modular-arithmetic rule classifying node ids into depots.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct DepotRule {
    /// Ids divisible by this are depot candidates (`Z`).
    pub depot_multiple: NodeId,
    /// Ids divisible by this are houses and excluded even when
    /// divisible by `depot_multiple` (`X`).
    pub house_multiple: NodeId,
}

impl Default for DepotRule {
    fn default() -> Self {
        Self {
            depot_multiple: 150,
            house_multiple: 100,
        }
    }
}

impl DepotRule {
    /// Whether the id belongs to a depot node. Pure and O(1).
    ///
    /// A rule with a zero multiple matches nothing rather than
    /// panicking on the modulo; [`DepotRule::validate`] reports such a
    /// rule as a configuration error at startup.
    #[must_use]
    pub fn is_depot(&self, id: NodeId) -> bool {
        if self.depot_multiple == 0 || self.house_multiple == 0 {
            return false;
        }
        id % self.depot_multiple == 0 && id % self.house_multiple != 0
    }

    /// All depot node ids of the graph, in ascending order.
    ///
    /// The fixed order gives the resolver a defined candidate iteration
    /// order, making tie-breaks between equal-distance depots
    /// reproducible. An empty result means the graph has no depots;
    /// callers report that condition, it is not an internal error.
    #[must_use]
    pub fn candidates(&self, graph: &RoadGraph) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = graph.node_ids().filter(|&id| self.is_depot(id)).collect();
        ids.sort_unstable();
        ids
    }

    /// Checks the rule is usable: both multiples must be positive.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidData`] if either multiple is zero.
    pub fn validate(&self) -> Result<(), Error> {
        if self.depot_multiple == 0 || self.house_multiple == 0 {
            return Err(Error::InvalidData(
                "depot rule multiples must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
