//! Server configuration, optionally loaded from a TOML file

use std::path::{Path, PathBuf};

use serde::Deserialize;

use reparto_core::prelude::{CostModel, DepotRule, Error, ModelConfig};

/// Full server configuration. Every field has a default, so the server
/// also starts without a config file when the data files sit in the
/// working directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub nodes_path: PathBuf,
    pub edges_path: PathBuf,
    pub cost_model: CostModel,
    pub depot_rule: DepotRule,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            nodes_path: PathBuf::from("nodes.csv"),
            edges_path: PathBuf::from("edges.csv"),
            cost_model: CostModel::default(),
            depot_rule: DepotRule::default(),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration file, or returns the defaults when no
    /// path was given.
    ///
    /// # Errors
    ///
    /// I/O failures and TOML syntax errors; both abort startup.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| {
            Error::InvalidData(format!("invalid config file '{}': {e}", path.display()))
        })
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            nodes_path: self.nodes_path.clone(),
            edges_path: self.edges_path.clone(),
        }
    }
}
