//! Simulation configuration.
//!
//! Every field has a default, so a partial JSON document is a valid config.

use serde::{Deserialize, Serialize};

use airspace_core::constants::*;

use crate::error::SimError;

/// Distance thresholds driving risk classification (field units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Confirmed impact: `Danger` witnesses below this are promoted to `Collided`.
    pub collision: f64,
    pub danger: f64,
    pub warning: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            collision: COLLISION_THRESHOLD,
            danger: DANGER_THRESHOLD,
            warning: WARNING_THRESHOLD,
        }
    }
}

impl RiskThresholds {
    pub fn validate(&self) -> Result<(), SimError> {
        let ordered = self.collision > 0.0
            && self.collision <= self.danger
            && self.danger < self.warning
            && self.warning.is_finite();
        if ordered {
            Ok(())
        } else {
            Err(SimError::InvalidThresholds {
                collision: self.collision,
                danger: self.danger,
                warning: self.warning,
            })
        }
    }
}

/// Population generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub min_aircraft: usize,
    pub max_aircraft: usize,
    /// Minimum pairwise distance at spawn.
    pub min_separation: f64,
    /// Placement attempts per aircraft before the slot is skipped.
    pub max_attempts: u32,
    /// Velocity components are drawn from `[-max_speed, max_speed)`.
    /// At most the field size.
    pub max_speed: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min_aircraft: SPAWN_MIN_AIRCRAFT,
            max_aircraft: SPAWN_MAX_AIRCRAFT,
            min_separation: SPAWN_MIN_SEPARATION,
            max_attempts: SPAWN_MAX_ATTEMPTS,
            max_speed: SPAWN_MAX_SPEED,
        }
    }
}

impl SpawnConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.min_aircraft > self.max_aircraft {
            return Err(SimError::InvalidSpawn(format!(
                "min_aircraft {} exceeds max_aircraft {}",
                self.min_aircraft, self.max_aircraft
            )));
        }
        if !(self.min_separation > 0.0) {
            return Err(SimError::InvalidSpawn(format!(
                "min_separation must be positive, got {}",
                self.min_separation
            )));
        }
        if self.max_attempts == 0 {
            return Err(SimError::InvalidSpawn("max_attempts must be at least 1".into()));
        }
        if !(self.max_speed > 0.0) {
            return Err(SimError::InvalidSpawn(format!(
                "max_speed must be positive, got {}",
                self.max_speed
            )));
        }
        // Sampling `[-max_speed, max_speed)` overflows for huge finite values.
        if self.max_speed > FIELD_MAX - FIELD_MIN {
            return Err(SimError::InvalidSpawn(format!(
                "max_speed {} exceeds the field size",
                self.max_speed
            )));
        }
        Ok(())
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for the population generator. Same seed = same population.
    pub seed: u64,
    pub thresholds: RiskThresholds,
    pub spawn: SpawnConfig,
    /// Host tick period. The engine itself never sleeps.
    pub tick_period_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            thresholds: RiskThresholds::default(),
            spawn: SpawnConfig::default(),
            tick_period_ms: TICK_PERIOD_MS,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        self.thresholds.validate()?;
        self.spawn.validate()?;
        if self.tick_period_ms == 0 {
            return Err(SimError::InvalidTickPeriod);
        }
        Ok(())
    }
}
