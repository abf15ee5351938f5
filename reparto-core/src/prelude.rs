// Re-export key components
pub use crate::cache::PathCache;
pub use crate::classify::DepotRule;
pub use crate::export::{graph_to_geojson, graph_to_geojson_string};
pub use crate::loading::{ModelConfig, create_road_graph};
pub use crate::metrics::{CostModel, TripMetrics, derive_metrics};
pub use crate::model::RoadGraph;
pub use crate::routing::{PathResult, resolve, resolve_many};

// Core types
pub use crate::Error;
pub use crate::NodeId;
