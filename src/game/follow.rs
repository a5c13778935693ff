//! Follower chain: found targets trail the seeker single file.
//!
//! Follower `i` takes the cell the leader occupied `i + 1` moves ago, so follower 0
//! sits on the cell the leader just left, follower 1 on the one before, and so on.

use crate::game::entities::PathHistory;
use crate::game::types::Position;

/// Cells for up to `followers` trailing entities, in follower order.
///
/// `history` is the leader's most-recent-first record with the current cell at
/// index 0. When the leader has not moved often enough the result is shorter than
/// `followers`; callers leave the remaining followers where they are.
pub fn trail_positions(history: &PathHistory, followers: usize) -> Vec<Position> {
    history.iter().skip(1).take(followers).collect()
}
