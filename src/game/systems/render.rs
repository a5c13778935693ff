use crate::game::grid::World;
use crate::game::session::GameSession;
use crate::game::types::Position;

/// Draw the world as text, one glyph per cell and one line per row.
///
/// The seeker is drawn over anything it shares a cell with; otherwise the first
/// registered occupant wins.
pub fn render_ascii(world: &World) -> String {
    let mut out = String::new();
    for y in 0..world.height() {
        for x in 0..world.width() {
            let here = world.find_at(Position::new(x, y));
            let symbol = here
                .iter()
                .find(|e| e.is_player())
                .or_else(|| here.first())
                .map_or('.', |e| e.kind.glyph());
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

pub fn render_status(session: &GameSession) -> String {
    format!(
        "tick {} | score {} | missing {} | found {} | home {}/{}",
        session.total_ticks(),
        session.current_score(),
        session.missing_count(),
        session.found_count(),
        session.home_count(),
        session.target_count()
    )
}
