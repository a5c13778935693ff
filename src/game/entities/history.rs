//! Bounded record of the positions an entity has occupied.

use std::collections::VecDeque;

use crate::config::game::PATH_HISTORY_CAPACITY;
use crate::game::types::Position;

/// Most-recent-first list of past positions. Index 0 is the current position.
///
/// Once `capacity` entries are held, recording a new position evicts the oldest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathHistory {
    entries: VecDeque<Position>,
    capacity: usize,
}

impl Default for PathHistory {
    fn default() -> Self {
        Self::with_capacity(PATH_HISTORY_CAPACITY)
    }
}

impl PathHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a history from most-recent-first positions, keeping at most `capacity`.
    pub fn from_recent(recent: impl IntoIterator<Item = Position>, capacity: usize) -> Self {
        let mut history = Self::with_capacity(capacity);
        history
            .entries
            .extend(recent.into_iter().take(history.capacity));
        history
    }

    pub fn record(&mut self, position: Position) {
        self.entries.push_front(position);
        self.entries.truncate(self.capacity);
    }

    pub fn get(&self, index: usize) -> Option<Position> {
        self.entries.get(index).copied()
    }

    pub fn latest(&self) -> Option<Position> {
        self.get(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Positions from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.entries.iter().copied()
    }
}
