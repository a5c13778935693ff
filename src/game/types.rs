use std::fmt;

use serde::{Deserialize, Serialize};

/// A tile coordinate. Signed so that a step off the edge is still representable
/// and can be rejected by the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring tile in `direction`. `y` grows downward.
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Stable handle to an entity registered in a [`crate::game::grid::World`].
///
/// Handles are never reused, so a handle to a deregistered entity simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Seeker,
    Target,
    Obstacle,
    FallingObstacle,
    SnailObstacle,
    Home,
}

/// What an entity kind is allowed to do and what it blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Moves during `World::step_all` without being told to.
    pub autonomous: bool,
    /// The seeker may share a cell with it.
    pub passable_by_seeker: bool,
    /// Other non-seeker entities may share a cell with it.
    pub passable_by_others: bool,
    /// A click on its tile removes it.
    pub destructible: bool,
}

impl EntityKind {
    pub const fn capabilities(self) -> Capabilities {
        match self {
            EntityKind::Seeker | EntityKind::Target | EntityKind::Home => Capabilities {
                autonomous: false,
                passable_by_seeker: true,
                passable_by_others: false,
                destructible: false,
            },
            EntityKind::Obstacle | EntityKind::SnailObstacle => Capabilities {
                autonomous: false,
                passable_by_seeker: false,
                passable_by_others: false,
                destructible: true,
            },
            EntityKind::FallingObstacle => Capabilities {
                autonomous: true,
                passable_by_seeker: false,
                passable_by_others: false,
                destructible: true,
            },
        }
    }

    /// Single-character glyph used by the text renderer.
    pub const fn glyph(self) -> char {
        match self {
            EntityKind::Seeker => '@',
            EntityKind::Target => 'f',
            EntityKind::Obstacle => '#',
            EntityKind::FallingObstacle => 'v',
            EntityKind::SnailObstacle => 's',
            EntityKind::Home => 'H',
        }
    }
}
