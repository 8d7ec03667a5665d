//! Simulation engine: the single owner and only mutator of simulation state.
//!
//! `SimulationEngine` owns the population, the collision ledger and the last
//! classification result. `tick()` runs motion, classification and history
//! commit in order, then hands out a `SimulationSnapshot` by value.
//! Completely headless (no scheduler), enabling deterministic testing.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use airspace_core::components::Aircraft;
use airspace_core::events::SimEvent;
use airspace_core::state::SimulationSnapshot;
use airspace_core::types::SimTime;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::history::HistoryLedger;
use crate::population;
use crate::systems;

/// The simulation engine.
pub struct SimulationEngine {
    config: SimConfig,
    /// Insertion order is preserved for the whole run.
    aircraft: Vec<Aircraft>,
    history: HistoryLedger,
    time: SimTime,
    last_closest_pair: Option<(String, String)>,
    min_distance: Option<f64>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine with a population generated from `config.seed`.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let aircraft = population::generate(&config.spawn, &mut rng);
        Self::with_population(config, aircraft)
    }

    /// Create an engine over a caller-supplied population.
    ///
    /// Fails if two aircraft share an id, or if one starts outside the field
    /// or with a non-finite velocity. Any size is accepted, including 0.
    pub fn with_population(config: SimConfig, aircraft: Vec<Aircraft>) -> Result<Self, SimError> {
        config.validate()?;
        let mut seen = HashSet::with_capacity(aircraft.len());
        for ac in &aircraft {
            if !seen.insert(ac.id.as_str()) {
                return Err(SimError::DuplicateAircraftId(ac.id.clone()));
            }
            if !ac.point().in_field() || !ac.vx.is_finite() || !ac.vy.is_finite() {
                return Err(SimError::OutOfField(ac.id.clone()));
            }
        }

        debug!(aircraft = aircraft.len(), "simulation engine created");
        Ok(Self {
            config,
            aircraft,
            history: HistoryLedger::new(),
            time: SimTime::default(),
            last_closest_pair: None,
            min_distance: None,
            events: Vec::new(),
        })
    }

    /// Advance the simulation by one tick stamped `now_ms` (epoch millis)
    /// and return the resulting snapshot.
    ///
    /// Call at most once per logical time step.
    pub fn tick(&mut self, now_ms: u64) -> SimulationSnapshot {
        if self.time.tick > 0 && now_ms < self.time.timestamp_ms {
            warn!(
                previous = self.time.timestamp_ms,
                now = now_ms,
                "tick timestamp went backwards"
            );
        }

        // 1. Motion + boundary reflection
        systems::movement::run(&mut self.aircraft);
        // 2. Closest pair + risk classification
        let assessment = systems::risk::run(
            &mut self.aircraft,
            &self.history,
            &self.config.thresholds,
            now_ms,
            &mut self.events,
        );
        // 3. History commit
        for item in assessment.new_history {
            self.history.insert(item.timestamp, item);
        }
        self.last_closest_pair = assessment.closest_pair;
        self.min_distance = assessment.min_distance;
        self.time.advance(now_ms);

        debug!(
            tick = self.time.tick,
            active = self.active_count(),
            min_distance = ?self.min_distance,
            "tick complete"
        );

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.time,
            &self.aircraft,
            &self.history,
            self.last_closest_pair.as_ref(),
            self.min_distance,
            events,
        )
    }

    /// Snapshot of the current state without advancing. Carries no events.
    pub fn snapshot(&self) -> SimulationSnapshot {
        systems::snapshot::build_snapshot(
            &self.time,
            &self.aircraft,
            &self.history,
            self.last_closest_pair.as_ref(),
            self.min_distance,
            Vec::new(),
        )
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only view of the population, in insertion order.
    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn last_closest_pair(&self) -> Option<&(String, String)> {
        self.last_closest_pair.as_ref()
    }

    /// Number of aircraft not yet collided.
    pub fn active_count(&self) -> usize {
        self.aircraft.iter().filter(|ac| ac.is_active()).count()
    }
}
