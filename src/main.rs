//! Main entry point for the terminal dev loop.
//!
//! Initializes logging, builds a game session from the default configuration (or a
//! JSON config file given as the first argument) and plays it from stdin.

use std::io;
use std::process::ExitCode;

use grid_seeker::config::GameConfig;
use grid_seeker::game::GameSession;
use grid_seeker::game::demo::game_loop::run_game_loop;
use log::error;

fn load_config() -> Result<GameConfig, String> {
    let mut config = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
            GameConfig::from_json(&raw).map_err(|e| e.to_string())?
        }
        None => GameConfig::default(),
    };
    // Environment seed wins over the config file so runs can be replayed.
    if let Ok(seed) = std::env::var("GRID_SEEKER_SEED") {
        config.seed = Some(seed.parse().map_err(|e| format!("GRID_SEEKER_SEED: {e}"))?);
    }
    Ok(config)
}

fn main() -> ExitCode {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("could not load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut session = match GameSession::new(config) {
        Ok(session) => session,
        Err(e) => {
            error!("could not start session: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run_game_loop(&mut session, stdin.lock(), &mut stdout) {
        error!("dev loop stopped: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
