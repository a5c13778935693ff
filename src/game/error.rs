//! Error types for the simulation core.
//!
//! Illegal moves and clicks are not errors: they come back as `false` or a zero
//! count. Only placement, registry and configuration failures surface here.

use crate::game::types::{EntityId, EntityKind};

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    /// Random placement gave up after its bounded number of trials.
    #[error("no free cell found after {tries} random trials on a {width}x{height} grid")]
    Capacity { width: i32, height: i32, tries: usize },

    #[error("entity {0} is not registered")]
    NotFound(EntityId),

    #[error("position ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    /// Only one seeker may be registered at a time.
    #[error("a seeker is already registered as {0}")]
    DuplicateSeeker(EntityId),

    #[error("entity {id} is a {actual:?}, expected a {expected:?}")]
    WrongKind {
        id: EntityId,
        expected: EntityKind,
        actual: EntityKind,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
