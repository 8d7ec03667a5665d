//! Loop thread. Ticks the simulation engine at a fixed period.
//!
//! The engine is moved into the thread and never shared: the thread is the
//! only writer. Commands arrive via `mpsc` channel and are handled between
//! ticks. Snapshots are stored by value in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};

use airspace_core::state::SimulationSnapshot;
use airspace_sim::config::SimConfig;
use airspace_sim::engine::SimulationEngine;
use airspace_sim::error::SimError;

use crate::state::{LoopCommand, LoopHandle, SharedSnapshot};

/// Errors starting the loop thread.
#[derive(Debug, thiserror::Error)]
pub enum LoopError {
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("failed to spawn loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Host wall clock in epoch millis.
pub fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Build an engine from `config` and run it on a new thread.
pub fn spawn_game_loop(config: SimConfig) -> Result<LoopHandle, LoopError> {
    let period = Duration::from_millis(config.tick_period_ms);
    let engine = SimulationEngine::new(config)?;
    spawn_with_engine(engine, period)
}

/// Run an existing engine on a new thread, ticking every `period`.
pub fn spawn_with_engine(engine: SimulationEngine, period: Duration) -> Result<LoopHandle, LoopError> {
    let (command_tx, command_rx) = mpsc::channel::<LoopCommand>();
    let latest: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest);

    info!(
        aircraft = engine.aircraft().len(),
        period_ms = period.as_millis() as u64,
        "starting simulation loop"
    );

    let join = std::thread::Builder::new()
        .name("airspace-sim-loop".into())
        .spawn(move || run_game_loop(engine, period, command_rx, &shared))?;

    Ok(LoopHandle {
        command_tx,
        latest,
        join,
    })
}

/// What the loop does after a command.
enum Flow {
    Continue,
    Stop,
}

fn apply_command(command: LoopCommand, paused: &mut bool) -> Flow {
    match command {
        LoopCommand::Pause => *paused = true,
        LoopCommand::Resume => *paused = false,
        LoopCommand::Shutdown => return Flow::Stop,
    }
    Flow::Continue
}

/// The loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    period: Duration,
    command_rx: mpsc::Receiver<LoopCommand>,
    latest: &Mutex<Option<SimulationSnapshot>>,
) {
    let mut paused = false;
    let mut next_tick_time = Instant::now() + period;

    'run: loop {
        // 1. Drain all pending commands, even when behind schedule.
        loop {
            match command_rx.try_recv() {
                Ok(command) => {
                    if let Flow::Stop = apply_command(command, &mut paused) {
                        break 'run;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'run,
            }
        }

        // 2. Wait for the next slot, handling commands as they arrive.
        let now = Instant::now();
        if next_tick_time > now {
            match command_rx.recv_timeout(next_tick_time - now) {
                Ok(command) => {
                    if let Flow::Stop = apply_command(command, &mut paused) {
                        break;
                    }
                    continue;
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }

        // 3. Tick and publish.
        if !paused {
            let snapshot = engine.tick(epoch_millis());
            info!(
                tick = snapshot.time.tick,
                active = snapshot.active_count,
                collided = snapshot.collided_count,
                min_distance = ?snapshot.min_distance,
                closest = ?snapshot.closest_pair,
                "tick"
            );
            let mut lock = latest.lock().unwrap_or_else(|poisoned| {
                warn!("snapshot slot poisoned, recovering");
                poisoned.into_inner()
            });
            *lock = Some(snapshot);
        }

        // 4. Schedule the next slot. Too far behind: drop missed slots.
        next_tick_time += period;
        let now = Instant::now();
        if now > next_tick_time && now - next_tick_time > period * 2 {
            debug!("loop fell behind, resetting schedule");
            next_tick_time = now;
        }
    }

    info!(ticks = engine.time().tick, "simulation loop stopped");
}
