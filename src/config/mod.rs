/// Main configuration module.
///
/// Re-exports the gameplay constants and the session configuration.
pub mod game;

pub use game::GameConfig;
