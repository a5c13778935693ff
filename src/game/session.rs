//! Game session: who is missing, who is found, who made it home.
//!
//! A session owns the [`World`] and keeps three disjoint lists of target handles.
//! Every target is in exactly one of `missing`, `found` or `at_home` at all times.

use std::collections::BTreeSet;

use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::game::entities::EntityView;
use crate::game::error::{GameError, GameResult};
use crate::game::grid::World;
use crate::game::systems::{apply_rules, clear_tile, follow_seeker, move_player, wander_missing};
use crate::game::types::{Direction, EntityId, EntityKind, Position};

/// Input the driver can hand to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Move(Direction),
    Click { x: i32, y: i32 },
}

pub struct GameSession {
    session_id: Uuid,
    pub(crate) config: GameConfig,
    pub(crate) world: World,
    pub(crate) seeker: EntityId,
    pub(crate) home: EntityId,
    target_count: usize,
    pub(crate) missing: Vec<EntityId>,
    pub(crate) found: Vec<EntityId>,
    pub(crate) at_home: Vec<EntityId>,
    pub(crate) ticks_since_homecoming: u32,
    total_ticks: u64,
    pub(crate) score: u32,
}

impl GameSession {
    /// Build the default layout: home, obstacles, snails, the seeker on its home,
    /// then one target per color, each on a random free cell.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: GameConfig, rng: SmallRng) -> GameResult<Self> {
        config.validate()?;
        let mut world = World::new(config.width, config.height, rng)?;

        let home = match config.home {
            Some(pos) => world.register(EntityKind::Home, pos)?,
            None => world.place_at_random_unoccupied_cell(EntityKind::Home)?,
        };
        for _ in 0..config.static_obstacle_count {
            world.place_at_random_unoccupied_cell(EntityKind::Obstacle)?;
        }
        for _ in 0..config.falling_obstacle_count {
            world.place_at_random_unoccupied_cell(EntityKind::FallingObstacle)?;
        }
        for _ in 0..config.snail_count {
            world.place_at_random_unoccupied_cell(EntityKind::SnailObstacle)?;
        }

        let home_pos = world.position_of(home).ok_or(GameError::NotFound(home))?;
        let seeker = world.register(EntityKind::Seeker, home_pos)?;

        let targets = (0..config.target_color_count)
            .map(|_| world.place_at_random_unoccupied_cell(EntityKind::Target))
            .collect::<GameResult<Vec<_>>>()?;

        Self::from_parts(config, world, seeker, home, targets)
    }

    /// Assemble a session around an already populated world. All `targets` start missing.
    pub fn from_parts(
        config: GameConfig,
        world: World,
        seeker: EntityId,
        home: EntityId,
        targets: Vec<EntityId>,
    ) -> GameResult<Self> {
        config.validate()?;
        if world.width() != config.width || world.height() != config.height {
            return Err(GameError::InvalidConfig(format!(
                "world is {}x{} but the config asks for {}x{}",
                world.width(),
                world.height(),
                config.width,
                config.height
            )));
        }
        expect_kind(&world, seeker, EntityKind::Seeker)?;
        expect_kind(&world, home, EntityKind::Home)?;
        for &target in &targets {
            expect_kind(&world, target, EntityKind::Target)?;
        }
        let distinct: BTreeSet<EntityId> = targets.iter().copied().collect();
        if distinct.len() != targets.len() {
            return Err(GameError::InvalidConfig(
                "the same target handle is listed more than once".to_string(),
            ));
        }

        let session_id = Uuid::new_v4();
        info!(
            "[Session] {session_id} started on a {}x{} grid with {} targets",
            world.width(),
            world.height(),
            targets.len()
        );
        Ok(Self {
            session_id,
            config,
            world,
            seeker,
            home,
            target_count: targets.len(),
            missing: targets,
            found: Vec::new(),
            at_home: Vec::new(),
            ticks_since_homecoming: 0,
            total_ticks: 0,
            score: 0,
        })
    }

    /// Try to move the seeker one cell. Returns whether it moved.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        move_player(self, direction)
    }

    /// Destroy whatever blocks the seeker on `(x, y)`. Returns how many entities were removed.
    pub fn click(&mut self, x: i32, y: i32) -> usize {
        clear_tile(self, Position::new(x, y))
    }

    pub fn apply_player_action(&mut self, action: PlayerAction) -> bool {
        match action {
            PlayerAction::Move(direction) => self.move_player(direction),
            PlayerAction::Click { x, y } => self.click(x, y) > 0,
        }
    }

    /// Advance the simulation by one tick.
    pub fn advance_tick(&mut self) {
        self.ticks_since_homecoming += 1;
        self.total_ticks += 1;

        // Discovery, homecoming, straying and self-delivery, in that order.
        apply_rules(self);
        wander_missing(self);
        follow_seeker(self);
        self.world.step_all();
    }

    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only access for renderers.
    pub const fn world(&self) -> &World {
        &self.world
    }

    pub const fn seeker(&self) -> EntityId {
        self.seeker
    }

    pub const fn home(&self) -> EntityId {
        self.home
    }

    pub fn seeker_position(&self) -> Option<Position> {
        self.world.position_of(self.seeker)
    }

    pub fn home_position(&self) -> Option<Position> {
        self.world.position_of(self.home)
    }

    pub fn missing(&self) -> &[EntityId] {
        &self.missing
    }

    pub fn found(&self) -> &[EntityId] {
        &self.found
    }

    pub fn at_home(&self) -> &[EntityId] {
        &self.at_home
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn home_count(&self) -> usize {
        self.at_home.len()
    }

    pub const fn target_count(&self) -> usize {
        self.target_count
    }

    pub const fn current_score(&self) -> u32 {
        self.score
    }

    pub const fn ticks_since_homecoming(&self) -> u32 {
        self.ticks_since_homecoming
    }

    pub const fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// The game is won once every target has been brought home.
    pub fn is_game_over(&self) -> bool {
        self.at_home.len() == self.target_count
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id,
            width: self.world.width(),
            height: self.world.height(),
            total_ticks: self.total_ticks,
            ticks_since_homecoming: self.ticks_since_homecoming,
            score: self.score,
            missing: self.missing.clone(),
            found: self.found.clone(),
            at_home: self.at_home.clone(),
            game_over: self.is_game_over(),
            entities: self.world.views(),
        }
    }

    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }
}

/// Serializable picture of a session at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub width: i32,
    pub height: i32,
    pub total_ticks: u64,
    pub ticks_since_homecoming: u32,
    pub score: u32,
    pub missing: Vec<EntityId>,
    pub found: Vec<EntityId>,
    pub at_home: Vec<EntityId>,
    pub game_over: bool,
    pub entities: Vec<EntityView>,
}

fn expect_kind(world: &World, id: EntityId, expected: EntityKind) -> GameResult<()> {
    let actual = world.get(id).ok_or(GameError::NotFound(id))?.kind;
    if actual != expected {
        return Err(GameError::WrongKind {
            id,
            expected,
            actual,
        });
    }
    Ok(())
}
