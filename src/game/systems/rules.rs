//! Per-tick game rules and the tile click.
//!
//! Each rule first collects the handles it affects and only then moves them
//! between the session lists, so no list is edited while it is being walked.

use log::{debug, info, warn};

use crate::game::session::GameSession;
use crate::game::types::{EntityId, Position};

/// Discovery, homecoming, straying and self-delivery, in that order.
pub fn apply_rules(session: &mut GameSession) {
    discover_targets(session);
    bring_found_home(session);
    stray_last_follower(session);
    deliver_strays(session);
}

/// Missing targets sharing the seeker's cell become found and score points.
pub fn discover_targets(session: &mut GameSession) {
    let Some(at) = session.world.position_of(session.seeker) else {
        return;
    };
    let discovered: Vec<EntityId> = session
        .world
        .find_at(at)
        .into_iter()
        .map(|e| e.id)
        .filter(|id| *id != session.seeker && session.missing.contains(id))
        .collect();

    for id in discovered {
        session.missing.retain(|m| *m != id);
        session.found.push(id);
        let agitated = session.world.get(id).is_some_and(|e| e.agitated);
        let award = if agitated {
            session.config.agitated_found_score
        } else {
            session.config.found_score
        };
        session.score += award;
        info!(
            "[Session] {} found target {id} at {at} (+{award}, score {})",
            session.session_id(),
            session.score
        );
    }
}

/// With the seeker on its home, every found target is delivered and leaves the grid.
pub fn bring_found_home(session: &mut GameSession) {
    let (Some(seeker), Some(home)) = (
        session.world.position_of(session.seeker),
        session.world.position_of(session.home),
    ) else {
        return;
    };
    if seeker != home {
        return;
    }
    let delivered = std::mem::take(&mut session.found);
    for &id in &delivered {
        if let Err(e) = session.world.deregister(id) {
            warn!("[Session] delivered target {id} was already gone: {e}");
        }
    }
    if !delivered.is_empty() {
        info!(
            "[Session] {} brought {} target(s) home",
            session.session_id(),
            delivered.len()
        );
    }
    session.at_home.extend(delivered);
    session.ticks_since_homecoming = 0;
}

/// After too long away from home the last follower wanders off again.
/// The first follower never strays this way.
pub fn stray_last_follower(session: &mut GameSession) {
    if session.ticks_since_homecoming <= session.config.stray_after_ticks || session.found.len() <= 1
    {
        return;
    }
    if let Some(id) = session.found.pop() {
        info!("[Session] target {id} strayed after {} ticks", session.ticks_since_homecoming);
        session.missing.push(id);
    }
}

/// Missing targets that reach the home cell on their own stay there, still on the grid.
pub fn deliver_strays(session: &mut GameSession) {
    let Some(home) = session.world.position_of(session.home) else {
        return;
    };
    let arrived: Vec<EntityId> = session
        .missing
        .iter()
        .copied()
        .filter(|&id| session.world.position_of(id) == Some(home))
        .collect();

    for id in arrived {
        // Stays registered on the home cell; out of `missing` it no longer wanders.
        session.missing.retain(|m| *m != id);
        info!("[Session] target {id} found its own way home");
        session.at_home.push(id);
    }
}

/// Remove the obstacles on a tile the seeker cannot enter.
///
/// A tile the seeker may already occupy is left untouched. Targets and home are
/// never removed. Returns the number of entities removed.
pub fn clear_tile(session: &mut GameSession, pos: Position) -> usize {
    let blocked = !session.world.can_occupy(session.seeker, pos);
    debug!("[Session] clicked on {pos}, blocked for seeker: {blocked}");
    if !blocked {
        return 0;
    }
    let doomed: Vec<EntityId> = session
        .world
        .find_at(pos)
        .into_iter()
        .filter(|e| e.kind.capabilities().destructible)
        .map(|e| e.id)
        .collect();

    let mut removed = 0;
    for id in doomed {
        if session.world.deregister(id).is_ok() {
            removed += 1;
        }
    }
    if removed > 0 {
        info!("[Session] click cleared {removed} obstacle(s) at {pos}");
    }
    removed
}
