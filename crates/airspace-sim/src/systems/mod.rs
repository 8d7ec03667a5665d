//! Per-tick systems that operate on the population.
//!
//! Systems are plain functions over `&mut [Aircraft]` (or `&[Aircraft]` for
//! read-only). They do not own state; the engine threads it through.

pub mod movement;
pub mod risk;
pub mod snapshot;
