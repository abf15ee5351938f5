use std::path::PathBuf;

use serde::Deserialize;

/// Locations of the node and edge data files.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub nodes_path: PathBuf,
    pub edges_path: PathBuf,
}
