//! Movement systems.
//!
//! This module handles the seeker's commanded moves, the random wandering of
//! missing targets and the follower chain behind the seeker.

use log::debug;
use rand::Rng;

use crate::game::session::GameSession;
use crate::game::types::Direction;

/// Move the seeker one cell in the given direction.
/// Returns false when the destination is off the grid or blocked.
pub fn move_player(session: &mut GameSession, direction: Direction) -> bool {
    let moved = session.world.move_entity(session.seeker, direction);
    if !moved {
        debug!("[Session] seeker cannot move {direction:?}");
    }
    moved
}

/// Give every missing target its chance to become agitated and then to wander.
pub fn wander_missing(session: &mut GameSession) {
    let agitation_chance = session.config.agitation_chance;
    let wander_chance = session.config.wander_chance;
    let agitated_wander_chance = session.config.agitated_wander_chance;

    for id in session.missing.clone() {
        let becomes_agitated = session.world.rng_mut().random_bool(agitation_chance);
        let Some(target) = session.world.get_mut(id) else {
            continue;
        };
        if becomes_agitated && !target.agitated {
            target.agitated = true;
            debug!("[Session] target {id} is agitated");
        }
        let chance = if target.agitated {
            agitated_wander_chance
        } else {
            wander_chance
        };
        if session.world.rng_mut().random_bool(chance) {
            session.world.move_randomly(id);
        }
    }
}

/// Line the found targets up behind the seeker, in the order they were found.
pub fn follow_seeker(session: &mut GameSession) {
    session.world.follow(session.seeker, &session.found);
}
