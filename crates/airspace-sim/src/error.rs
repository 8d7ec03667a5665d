//! Error type for engine construction and configuration.
//!
//! These are precondition violations caught at the boundary. Once an engine
//! exists, `tick()` is infallible.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// Two aircraft in one population share an id.
    #[error("duplicate aircraft id: {0}")]
    DuplicateAircraftId(String),
    /// An aircraft starts outside the field or with a non-finite velocity.
    #[error("aircraft {0} is out of field or has a non-finite velocity")]
    OutOfField(String),
    /// Thresholds must satisfy `0 < collision <= danger < warning`.
    #[error("invalid risk thresholds: collision={collision}, danger={danger}, warning={warning}")]
    InvalidThresholds {
        collision: f64,
        danger: f64,
        warning: f64,
    },
    /// A zero-length tick period.
    #[error("tick period must be positive")]
    InvalidTickPeriod,
    /// Inconsistent population generator settings.
    #[error("invalid spawn config: {0}")]
    InvalidSpawn(String),
}
