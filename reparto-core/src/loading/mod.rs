//! This module is responsible for loading node and edge records from
//! disk and building the immutable road graph.

mod builder;
mod config;
mod parser;
mod records;

pub use builder::create_road_graph;
pub use config::ModelConfig;
pub use parser::deserialize_records;
pub use records::{EdgeRecord, NodeRecord};
