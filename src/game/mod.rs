pub mod types;
pub mod error;
pub mod entities;
pub mod grid;
pub mod follow;
pub mod session;
pub mod systems;
pub mod demo;


pub use error::{GameError, GameResult};
pub use session::{GameSession, PlayerAction, SessionSnapshot};
pub use types::{Direction, EntityId, EntityKind, Position};
