//! Risk classification. Maps the closest-pair result to per-aircraft states.
//!
//! Every active aircraft defaults to `Safe`; only aircraft in a witness pair
//! are escalated, all to the same level derived from the minimum distance.
//! `Danger` witnesses below the collision threshold are promoted to the
//! terminal `Collided` state and produce one history record each.

use std::collections::HashSet;

use tracing::info;

use airspace_core::components::Aircraft;
use airspace_core::enums::RiskState;
use airspace_core::events::{CollisionHistoryItem, SimEvent};
use airspace_core::types::Point;

use crate::closest_pair::closest_pairs;
use crate::config::RiskThresholds;
use crate::history::HistoryLedger;

/// Outcome of one classification pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskAssessment {
    /// Canonical smallest witness, reported only when it is at risk.
    pub closest_pair: Option<(String, String)>,
    /// `None` when fewer than two aircraft are active.
    pub min_distance: Option<f64>,
    /// Records for aircraft promoted this pass, not yet committed to the ledger.
    pub new_history: Vec<CollisionHistoryItem>,
}

/// State for a witness at `min_distance`, before collision confirmation.
pub fn witness_state(min_distance: f64, thresholds: &RiskThresholds) -> RiskState {
    if min_distance < thresholds.danger {
        RiskState::Danger
    } else if min_distance < thresholds.warning {
        RiskState::Warning
    } else {
        RiskState::Safe
    }
}

/// Reclassify every active aircraft in place.
///
/// Aircraft already in `history` are still promoted but get no second
/// record. Ids in the active set must be unique.
pub fn run(
    aircraft: &mut [Aircraft],
    history: &HistoryLedger,
    thresholds: &RiskThresholds,
    now: u64,
    events: &mut Vec<SimEvent>,
) -> RiskAssessment {
    let points: Vec<Point> = aircraft
        .iter()
        .filter(|ac| ac.is_active())
        .map(Aircraft::point)
        .collect();
    debug_assert!(ids_unique(&points), "duplicate aircraft id in active set");

    if points.len() < 2 {
        for ac in aircraft.iter_mut().filter(|ac| ac.is_active()) {
            set_state(ac, RiskState::Safe, events);
        }
        return RiskAssessment::default();
    }

    let result = closest_pairs(&points);
    let min_distance = result.min_distance;
    let escalated = witness_state(min_distance, thresholds);
    let confirmed = escalated == RiskState::Danger && min_distance < thresholds.collision;

    let witnesses: HashSet<&str> = result
        .witnesses
        .iter()
        .flat_map(|pair| [pair.first.as_str(), pair.second.as_str()])
        .collect();

    let mut new_history = Vec::new();
    let mut recorded: HashSet<String> = HashSet::new();

    for ac in aircraft.iter_mut().filter(|ac| ac.is_active()) {
        if !witnesses.contains(ac.id.as_str()) {
            set_state(ac, RiskState::Safe, events);
            continue;
        }
        if !confirmed {
            set_state(ac, escalated, events);
            continue;
        }

        if !history.contains(&ac.id) && recorded.insert(ac.id.clone()) {
            let mut snapshot = ac.clone();
            snapshot.risk_state = RiskState::Danger;
            new_history.push(CollisionHistoryItem::new(snapshot, now, min_distance));
        }
        info!(id = %ac.id, callsign = %ac.callsign, distance = min_distance, "collision confirmed");
        ac.risk_state = RiskState::Collided;
        events.push(SimEvent::Collision {
            id: ac.id.clone(),
            distance: min_distance,
        });
    }

    let closest_pair = if min_distance < thresholds.warning {
        result.first().cloned().map(|pair| pair.into_tuple())
    } else {
        None
    };

    RiskAssessment {
        closest_pair,
        min_distance: Some(min_distance),
        new_history,
    }
}

fn set_state(ac: &mut Aircraft, next: RiskState, events: &mut Vec<SimEvent>) {
    if ac.risk_state != next {
        events.push(SimEvent::RiskChanged {
            id: ac.id.clone(),
            from: ac.risk_state,
            to: next,
        });
        ac.risk_state = next;
    }
}

fn ids_unique(points: &[Point]) -> bool {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().all(|p| seen.insert(p.id.as_str()))
}
