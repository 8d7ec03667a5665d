//! Aircraft data carried by the simulation.
//!
//! Plain data with a few read-only helpers. Behavior lives in the sim crate.

use serde::{Deserialize, Serialize};

use crate::enums::RiskState;
use crate::types::Point;

/// A moving entity on the field.
///
/// `callsign`, `passengers`, `pilot_name`, `origin` and `destination` are
/// cosmetic metadata: the engine carries them through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Immutable identity, unique within a population.
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Per-tick displacement along x.
    pub vx: f64,
    /// Per-tick displacement along y.
    pub vy: f64,
    pub risk_state: RiskState,
    pub callsign: String,
    pub passengers: u32,
    pub pilot_name: String,
    pub origin: String,
    pub destination: String,
}

impl Aircraft {
    /// A `Safe` aircraft with empty metadata.
    pub fn new(id: impl Into<String>, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            vx,
            vy,
            ..Default::default()
        }
    }

    /// Attach a callsign.
    pub fn with_callsign(mut self, callsign: impl Into<String>) -> Self {
        self.callsign = callsign.into();
        self
    }

    /// The point used for proximity computations.
    pub fn point(&self) -> Point {
        Point::new(self.id.clone(), self.x, self.y)
    }

    /// Whether the aircraft still takes part in motion and proximity checks.
    pub fn is_active(&self) -> bool {
        !self.risk_state.is_terminal()
    }

    /// Heading of the velocity vector in radians (0 = +x, counter-clockwise).
    pub fn heading(&self) -> f64 {
        self.vy.atan2(self.vx)
    }
}
