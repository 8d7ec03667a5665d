//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Proximity risk state of an aircraft.
///
/// Variants are declared in severity order so that `Ord` follows
/// `Safe < Warning < Danger < Collided`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskState {
    #[default]
    Safe,
    Warning,
    Danger,
    /// Terminal. The aircraft is frozen and excluded from proximity checks.
    Collided,
}

impl RiskState {
    /// Whether this state has no outgoing transitions.
    pub fn is_terminal(self) -> bool {
        self == RiskState::Collided
    }
}
