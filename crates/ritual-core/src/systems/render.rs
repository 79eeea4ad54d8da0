use crate::core::grid::{DotGrid, DOT_RADIUS};
use crate::core::shapes::CENTER_DOT;
use crate::game::DiamondRitual;
use crate::renderer::commands::{Color, DrawCommand, DrawList, LINE_WIDTH};

/// Radius of the center marker shown at the reveal.
pub const MARKER_RADIUS: f32 = 12.0;

/// Rebuild the full scene as draw commands: clear first, then every dot
/// with its coordinate label, player lines, bonus lines, and finally the
/// reveal marker on top.
pub fn build_draw_list(game: &DiamondRitual, grid: &DotGrid, list: &mut DrawList) {
    list.clear();
    list.push(DrawCommand::Clear);

    for &(point, pos) in grid.iter() {
        list.push(DrawCommand::Dot {
            pos,
            radius: DOT_RADIUS,
            color: Color::DOT,
        });
        list.push(DrawCommand::Label {
            pos,
            text: point.to_string(),
        });
    }

    for segment in game.player_lines().iter() {
        list.push(DrawCommand::Line {
            from: DotGrid::screen_pos(segment.a),
            to: DotGrid::screen_pos(segment.b),
            width: LINE_WIDTH,
            color: Color::PLAYER_LINE,
        });
    }

    for segment in game.bonus_lines().iter() {
        list.push(DrawCommand::Line {
            from: DotGrid::screen_pos(segment.a),
            to: DotGrid::screen_pos(segment.b),
            width: LINE_WIDTH,
            color: Color::BONUS_LINE,
        });
    }

    if game.is_revealed() {
        list.push(DrawCommand::Dot {
            pos: DotGrid::screen_pos(CENTER_DOT),
            radius: MARKER_RADIUS,
            color: Color::MARKER,
        });
    }
}
