use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use airspace_app::config::config_from_env;
use airspace_app::game_loop::spawn_game_loop;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(true)
        .init();

    let config = match config_from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "failed to load config");
            return ExitCode::FAILURE;
        }
    };
    info!(seed = config.seed, period_ms = config.tick_period_ms, "airspace simulation starting");

    let handle = match spawn_game_loop(config) {
        Ok(handle) => handle,
        Err(err) => {
            error!(%err, "failed to start simulation");
            return ExitCode::FAILURE;
        }
    };

    // Runs until the process is stopped.
    if handle.join().is_err() {
        error!("simulation loop panicked");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
