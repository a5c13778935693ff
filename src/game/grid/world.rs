//! Grid world: entity registry, occupancy rules and autonomous motion.
//!
//! The world exclusively owns every [`Entity`]. Everything outside it refers to
//! entities through [`EntityId`] handles and mutates them only through the
//! methods below, so the bounds and occupancy invariants are enforced in one place.

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::game::entities::{Entity, EntityView};
use crate::game::error::{GameError, GameResult};
use crate::game::follow::trail_positions;
use crate::game::types::{Direction, EntityId, EntityKind, Position};

pub struct World {
    width: i32,
    height: i32,
    /// Registration order is significant: lookups and `step_all` follow it.
    items: Vec<Entity>,
    next_id: u64,
    seeker: Option<EntityId>,
    rng: SmallRng,
}

impl World {
    /// Create an empty world. The random source is shared by placement and wandering.
    pub fn new(width: i32, height: i32, rng: SmallRng) -> GameResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid must be at least 1x1, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            items: Vec::new(),
            next_id: 1,
            seeker: None,
            rng,
        })
    }

    pub fn seeded(width: i32, height: i32, seed: u64) -> GameResult<Self> {
        Self::new(width, height, SmallRng::seed_from_u64(seed))
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn rng_mut(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub const fn seeker(&self) -> Option<EntityId> {
        self.seeker
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.items.iter().find(|e| e.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.items.iter_mut().find(|e| e.id == id)
    }

    pub fn position_of(&self, id: EntityId) -> Option<Position> {
        self.get(id).map(|e| e.pos)
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|e| e.id == id)
    }

    /// Read-only view of every registered entity, in registration order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.items.iter()
    }

    /// Copied snapshot of every registered entity, in registration order.
    pub fn views(&self) -> Vec<EntityView> {
        self.items.iter().map(Entity::view).collect()
    }

    /// Everything standing on `pos`, in registration order.
    pub fn find_at(&self, pos: Position) -> Vec<&Entity> {
        self.items.iter().filter(|e| e.pos == pos).collect()
    }

    /// Add a new entity at an explicit cell.
    ///
    /// The cell must be inside the grid; occupancy is not checked, which is how the
    /// seeker starts out standing on its home.
    pub fn register(&mut self, kind: EntityKind, pos: Position) -> GameResult<EntityId> {
        if !self.in_bounds(pos) {
            return Err(GameError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        if kind == EntityKind::Seeker {
            if let Some(existing) = self.seeker {
                return Err(GameError::DuplicateSeeker(existing));
            }
        }

        let id = EntityId(self.next_id);
        self.next_id += 1;
        if kind == EntityKind::Seeker {
            self.seeker = Some(id);
        }
        self.items.push(Entity::new(id, kind, pos));
        debug!("[World] register {kind:?} {id} at {pos}");
        Ok(id)
    }

    /// Remove an entity from the world and hand it back.
    pub fn deregister(&mut self, id: EntityId) -> GameResult<Entity> {
        let index = self.index_of(id).ok_or(GameError::NotFound(id))?;
        let entity = self.items.remove(index);
        if self.seeker == Some(id) {
            self.seeker = None;
        }
        debug!("[World] remove {:?} {id} from {}", entity.kind, entity.pos);
        Ok(entity)
    }

    /// Whether `requester` may stand on `pos`.
    ///
    /// Out-of-bounds cells are never legal. The seeker is only stopped by obstacles
    /// and snails; every other entity is stopped by any occupant at all.
    pub fn can_occupy(&self, requester: EntityId, pos: Position) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let as_seeker = self.seeker == Some(requester);
        self.items
            .iter()
            .filter(|e| e.pos == pos && e.id != requester)
            .all(|occupant| {
                let caps = occupant.kind.capabilities();
                if as_seeker {
                    caps.passable_by_seeker
                } else {
                    caps.passable_by_others
                }
            })
    }

    /// Pick a random empty cell, giving up after `width * height` trials.
    pub fn pick_unused_cell(&mut self) -> GameResult<Position> {
        let tries = (self.width as usize).saturating_mul(self.height as usize);
        for _ in 0..tries {
            let candidate = Position::new(
                self.rng.random_range(0..self.width),
                self.rng.random_range(0..self.height),
            );
            if self.items.iter().all(|e| e.pos != candidate) {
                return Ok(candidate);
            }
        }
        warn!(
            "[World] pick_unused_cell failed after {tries} tries on a {}x{} grid",
            self.width, self.height
        );
        Err(GameError::Capacity {
            width: self.width,
            height: self.height,
            tries,
        })
    }

    /// Register a new entity of `kind` on a random empty cell.
    ///
    /// Nothing is registered when no free cell turns up.
    pub fn place_at_random_unoccupied_cell(&mut self, kind: EntityKind) -> GameResult<EntityId> {
        let pos = self.pick_unused_cell()?;
        self.register(kind, pos)
    }

    /// Move one cell in `direction` if the destination is legal. Returns whether it moved.
    pub fn move_entity(&mut self, id: EntityId, direction: Direction) -> bool {
        let Some(from) = self.position_of(id) else {
            return false;
        };
        let to = from.step(direction);
        if !self.can_occupy(id, to) {
            return false;
        }
        self.relocate(id, to);
        true
    }

    /// Move one cell in a random legal direction. Stays put when boxed in.
    pub fn move_randomly(&mut self, id: EntityId) -> bool {
        let Some(from) = self.position_of(id) else {
            return false;
        };
        let legal: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&d| self.can_occupy(id, from.step(d)))
            .collect();
        let Some(&direction) = legal.choose(&mut self.rng) else {
            return false;
        };
        self.relocate(id, from.step(direction));
        true
    }

    fn relocate(&mut self, id: EntityId, to: Position) {
        if let Some(entity) = self.get_mut(id) {
            entity.set_position(to);
        }
    }

    /// Line `followers` up behind `leader` along the leader's recent path.
    ///
    /// Returns how many followers were placed. Followers beyond the recorded path
    /// keep their current cell.
    pub fn follow(&mut self, leader: EntityId, followers: &[EntityId]) -> usize {
        let Some(history) = self.get(leader).map(Entity::recent_positions) else {
            return 0;
        };
        let cells = trail_positions(history, followers.len());
        if cells.len() < followers.len() {
            debug!(
                "[Follow] leader {leader} has {} recorded cells for {} followers",
                cells.len(),
                followers.len()
            );
        }
        let mut placed = 0;
        for (&follower, cell) in followers.iter().zip(cells) {
            if let Some(entity) = self.get_mut(follower) {
                entity.set_position(cell);
                placed += 1;
            }
        }
        placed
    }

    /// Run every entity's autonomous behaviour once, in registration order.
    pub fn step_all(&mut self) {
        for index in 0..self.items.len() {
            let (id, kind, pos) = {
                let e = &self.items[index];
                (e.id, e.kind, e.pos)
            };
            if !kind.capabilities().autonomous {
                continue;
            }
            if kind == EntityKind::FallingObstacle {
                // Held in place at the bottom row or while the cell below is taken.
                let below = pos.step(Direction::Down);
                if self.can_occupy(id, below) {
                    self.items[index].set_position(below);
                }
            }
        }
    }
}
