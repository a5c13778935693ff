//! Entity state shared by every kind.
//!
//! Per-kind behaviour is driven by [`EntityKind::capabilities`] rather than by
//! separate types; the world decides how an entity moves based on its kind.

use serde::{Deserialize, Serialize};

use crate::game::entities::history::PathHistory;
use crate::game::types::{EntityId, EntityKind, Position};

#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Position,
    /// Sticky: once a target is agitated it stays agitated.
    pub agitated: bool,
    recent: PathHistory,
}

impl Entity {
    pub(crate) fn new(id: EntityId, kind: EntityKind, pos: Position) -> Self {
        let mut recent = PathHistory::default();
        recent.record(pos);
        Self {
            id,
            kind,
            pos,
            agitated: false,
            recent,
        }
    }

    /// True only for the single seeker.
    pub fn is_player(&self) -> bool {
        self.kind == EntityKind::Seeker
    }

    /// Positions this entity has occupied, newest first. Index 0 is `pos`.
    pub fn recent_positions(&self) -> &PathHistory {
        &self.recent
    }

    /// Move without any legality check and remember the new cell.
    pub(crate) fn set_position(&mut self, pos: Position) {
        self.pos = pos;
        self.recent.record(pos);
    }

    pub fn view(&self) -> EntityView {
        EntityView {
            id: self.id,
            kind: self.kind,
            pos: self.pos,
            agitated: self.agitated,
        }
    }
}

/// Copied, read-only picture of an entity for renderers and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Position,
    pub agitated: bool,
}
