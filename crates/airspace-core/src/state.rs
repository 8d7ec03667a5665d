//! Simulation snapshot: the complete read-only state handed out after each tick.

use serde::{Deserialize, Serialize};

use crate::components::Aircraft;
use crate::events::{CollisionHistoryItem, SimEvent};
use crate::types::SimTime;

/// Complete simulation state, taken by value at the end of a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub time: SimTime,
    /// Whole population in insertion order, collided aircraft included.
    pub aircraft: Vec<Aircraft>,
    /// Collision history, most recent first.
    pub history: Vec<CollisionHistoryItem>,
    /// Canonical closest pair to highlight, when it is at risk.
    pub closest_pair: Option<(String, String)>,
    /// Minimum distance among active aircraft, when at least two are active.
    pub min_distance: Option<f64>,
    pub active_count: usize,
    pub collided_count: usize,
    /// Events produced by the tick that built this snapshot.
    pub events: Vec<SimEvent>,
}

impl SimulationSnapshot {
    /// Look up an aircraft by id.
    pub fn aircraft(&self, id: &str) -> Option<&Aircraft> {
        self.aircraft.iter().find(|a| a.id == id)
    }
}
