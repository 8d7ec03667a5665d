//! Records and events emitted by the simulation.

use serde::{Deserialize, Serialize};

use crate::components::Aircraft;
use crate::enums::RiskState;

/// Permanent record of an aircraft entering `Collided`.
///
/// Immutable once created; at most one exists per aircraft id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionHistoryItem {
    /// The aircraft as it stood when promoted (post-motion, pre-promotion state).
    pub aircraft: Aircraft,
    /// Always `RiskState::Collided`.
    pub final_state: RiskState,
    /// Host timestamp (epoch millis) of the tick that confirmed the collision.
    pub timestamp: u64,
    /// Minimum distance that triggered the collision.
    pub distance: f64,
}

impl CollisionHistoryItem {
    pub fn new(aircraft: Aircraft, timestamp: u64, distance: f64) -> Self {
        Self {
            aircraft,
            final_state: RiskState::Collided,
            timestamp,
            distance,
        }
    }

    pub fn id(&self) -> &str {
        &self.aircraft.id
    }
}

/// Per-tick feedback for display collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A non-terminal risk transition.
    RiskChanged {
        id: String,
        from: RiskState,
        to: RiskState,
    },
    /// An aircraft was promoted to `Collided`.
    Collision { id: String, distance: f64 },
}
