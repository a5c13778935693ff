//! Simulation core for a tile-grid seek-and-escort game.
//!
//! A single seeker roams a grid looking for wandering targets, leads the ones it
//! finds home in a single-file chain, and clears obstacles out of the way.
//! Rendering and input polling live outside this crate; they drive a
//! [`game::GameSession`] through `move_player`, `click` and `advance_tick`.

pub mod config;
pub mod game;
