//! Host process for the airspace simulation.
//!
//! This crate owns the scheduling side: it loads configuration, runs the
//! engine on a fixed-period loop thread and publishes the latest snapshot.

pub mod config;
pub mod game_loop;
pub mod state;

pub use airspace_core as core;
