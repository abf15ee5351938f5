use std::sync::Arc;

use reparto_core::prelude::*;

/// Shared server state. The graph, rule and constants never change
/// after startup; the path cache is the single mutable slot and
/// synchronizes itself.
pub struct AppState {
    pub graph: RoadGraph,
    pub rule: DepotRule,
    /// Depot ids in ascending order, computed once at startup.
    pub depots: Vec<NodeId>,
    pub cost_model: CostModel,
    pub cache: PathCache,
}

pub type SharedState = Arc<AppState>;
