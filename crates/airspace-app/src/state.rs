//! State shared between the host and the loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tracing::warn;

use airspace_core::state::SimulationSnapshot;

/// Latest snapshot, written by the loop thread after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<SimulationSnapshot>>>;

/// Commands sent from the host to the loop thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCommand {
    /// Stop ticking; the schedule keeps running.
    Pause,
    /// Resume ticking at the next scheduled slot.
    Resume,
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Handle to a running loop thread.
pub struct LoopHandle {
    pub(crate) command_tx: mpsc::Sender<LoopCommand>,
    pub(crate) latest: SharedSnapshot,
    pub(crate) join: JoinHandle<()>,
}

impl LoopHandle {
    /// Forward a command. Returns `false` if the loop has already exited.
    pub fn send(&self, command: LoopCommand) -> bool {
        self.command_tx.send(command).is_ok()
    }

    /// Copy of the most recent snapshot, if any tick has completed.
    ///
    /// A slot poisoned by a panicking writer still yields its last value.
    pub fn latest(&self) -> Option<SimulationSnapshot> {
        match self.latest.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => {
                warn!("snapshot slot poisoned, reading last value");
                poisoned.into_inner().clone()
            }
        }
    }

    /// Ask the loop to stop and wait for it.
    pub fn shutdown(self) -> std::thread::Result<()> {
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        self.join.join()
    }

    /// Block until the loop exits on its own.
    pub fn join(self) -> std::thread::Result<()> {
        self.join.join()
    }
}
