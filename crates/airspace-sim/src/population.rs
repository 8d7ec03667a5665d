//! Initial population factory.
//!
//! Places aircraft at random field positions with a minimum spawn
//! separation and attaches cosmetic metadata. Deterministic for a seed.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use airspace_core::components::Aircraft;
use airspace_core::constants::*;
use airspace_core::enums::RiskState;

use crate::config::SpawnConfig;

/// Generate a fresh population.
///
/// A slot whose placement attempts are exhausted is skipped, so the result
/// may hold fewer than `min_aircraft` aircraft. Ids are `ac-<slot>`.
pub fn generate(config: &SpawnConfig, rng: &mut ChaCha8Rng) -> Vec<Aircraft> {
    let count = rng.gen_range(config.min_aircraft..=config.max_aircraft);
    let mut aircraft: Vec<Aircraft> = Vec::with_capacity(count);

    for slot in 0..count {
        let Some((x, y)) = place(config, rng, &aircraft) else {
            debug!(slot, attempts = config.max_attempts, "placement budget exhausted, skipping slot");
            continue;
        };

        let vx = round2(rng.gen_range(-config.max_speed..config.max_speed));
        let vy = round2(rng.gen_range(-config.max_speed..config.max_speed));
        aircraft.push(spawn_aircraft(rng, format!("ac-{slot}"), x, y, vx, vy));
    }

    debug!(requested = count, placed = aircraft.len(), "population generated");
    aircraft
}

/// Draw positions until one clears every placed aircraft by `min_separation`.
fn place(config: &SpawnConfig, rng: &mut ChaCha8Rng, placed: &[Aircraft]) -> Option<(f64, f64)> {
    for _ in 0..config.max_attempts {
        let x = round2(rng.gen_range(FIELD_MIN..=FIELD_MAX));
        let y = round2(rng.gen_range(FIELD_MIN..=FIELD_MAX));
        let clear = placed
            .iter()
            .all(|other| (other.x - x).hypot(other.y - y) >= config.min_separation);
        if clear {
            return Some((x, y));
        }
    }
    None
}

/// Build one `Safe` aircraft with random cosmetic metadata.
fn spawn_aircraft(rng: &mut ChaCha8Rng, id: String, x: f64, y: f64, vx: f64, vy: f64) -> Aircraft {
    let prefix = CALLSIGN_PREFIXES.choose(rng).copied().unwrap_or("AV");
    let number: u32 = rng.gen_range(100..=999);
    let origin = AIRPORTS.choose(rng).copied().unwrap_or("JFK");
    let destination = loop {
        let candidate = AIRPORTS.choose(rng).copied().unwrap_or("LAX");
        if candidate != origin {
            break candidate;
        }
    };

    Aircraft {
        id,
        x,
        y,
        vx,
        vy,
        risk_state: RiskState::Safe,
        callsign: format!("{prefix}-{number}"),
        passengers: rng.gen_range(SPAWN_MIN_PASSENGERS..=SPAWN_MAX_PASSENGERS),
        pilot_name: PILOT_NAMES.choose(rng).copied().unwrap_or("Juan G.").to_owned(),
        origin: origin.to_owned(),
        destination: destination.to_owned(),
    }
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
