//! Core engine for nearest-depot delivery routing.
//!
//! Loads an immutable weighted road graph, classifies nodes into depots
//! by a modular-arithmetic id rule, and answers queries of the form
//! "which depot is closest to this destination, and along which path".
//! The winning path can be augmented with travel-time and fuel-cost
//! estimates and exported as GeoJSON for visualization.

pub mod cache;
pub mod classify;
pub mod error;
pub mod export;
pub mod loading;
pub mod metrics;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// Identifier of a road graph node, as assigned by the input data.
pub type NodeId = u32;
