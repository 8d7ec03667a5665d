//! Snapshot system: copies the engine state into a `SimulationSnapshot`.
//!
//! This system is read-only: it never modifies the population or ledger.

use airspace_core::components::Aircraft;
use airspace_core::events::SimEvent;
use airspace_core::state::SimulationSnapshot;
use airspace_core::types::SimTime;

use crate::history::HistoryLedger;

/// Build a complete snapshot by value.
pub fn build_snapshot(
    time: &SimTime,
    aircraft: &[Aircraft],
    history: &HistoryLedger,
    closest_pair: Option<&(String, String)>,
    min_distance: Option<f64>,
    events: Vec<SimEvent>,
) -> SimulationSnapshot {
    let active_count = aircraft.iter().filter(|ac| ac.is_active()).count();

    SimulationSnapshot {
        time: *time,
        aircraft: aircraft.to_vec(),
        history: history.all_ordered_by_time_descending(),
        closest_pair: closest_pair.cloned(),
        min_distance,
        active_count,
        collided_count: aircraft.len() - active_count,
        events,
    }
}
