//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_MAX, FIELD_MIN};

/// A labelled 2D point in field coordinates (percent of the field, `[0, 100]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed ticks.
    pub tick: u64,
    /// Host timestamp (epoch millis) of the most recent tick.
    pub timestamp_ms: u64,
}

impl Point {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }

    /// Whether both coordinates lie inside the field.
    pub fn in_field(&self) -> bool {
        in_field(self.x) && in_field(self.y)
    }
}

impl SimTime {
    /// Advance by one tick stamped with the host clock.
    pub fn advance(&mut self, timestamp_ms: u64) {
        self.tick += 1;
        self.timestamp_ms = timestamp_ms;
    }
}

/// Whether a single coordinate lies inside `[FIELD_MIN, FIELD_MAX]`.
pub fn in_field(value: f64) -> bool {
    (FIELD_MIN..=FIELD_MAX).contains(&value)
}
