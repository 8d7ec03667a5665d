//! Core types and definitions for the airspace collision-risk simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! aircraft, risk states, history records, events, snapshots and constants.
//! It has no dependency on any runtime or scheduling framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
