//! Collision-risk simulation engine.
//!
//! Moves aircraft across a bounded field, finds the closest pair(s) each
//! tick in O(n log n), classifies proximity risk and records confirmed
//! collisions in an ordered ledger. Produces `SimulationSnapshot`s for
//! display collaborators.

pub mod closest_pair;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod history;
pub mod population;
pub mod systems;

pub use airspace_core as core;
pub use config::{RiskThresholds, SimConfig, SpawnConfig};
pub use engine::SimulationEngine;
pub use error::SimError;
