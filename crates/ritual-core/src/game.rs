//! The toy itself: connect dots on the 5×5 grid, trace the four corner
//! triangles, restore the inner diamond.

use glam::Vec2;

use crate::api::game::{EngineContext, Game, RenderContext};
use crate::api::types::GameEvent;
use crate::core::feedback::Feedback;
use crate::core::grid::{DotGrid, GridPoint};
use crate::core::lines::{LineSet, Segment};
use crate::core::shapes::{CORNER_TRIANGLES, INNER_DIAMOND};
use crate::input::queue::{InputEvent, InputQueue, KEY_R};
use crate::systems::render::build_draw_list;

/// Prompt shown when a corner triangle is completed.
pub const TRIANGLE_TRACED_MSG: &str = "Corner triangle traced!";
/// Prompt shown at the moment of the reveal.
pub const DIAMOND_RESTORED_MSG: &str = "✨ Inner Diamond Restored!";
/// Permanent status banner once the diamond is revealed.
pub const DIAMOND_RESTORED_BANNER: &str = "✨ Inner Diamond Restored! ✨";

/// Countdown, in frames, for the triangle prompt.
pub const TRIANGLE_PROMPT_FRAMES: u32 = 120;
/// Countdown, in frames, for the reveal prompt.
pub const REVEAL_PROMPT_FRAMES: u32 = 180;

/// All session state for one play-through. Initialized at startup, mutated
/// only through input handling, restored by the reset key.
pub struct DiamondRitual {
    grid: DotGrid,
    player_lines: LineSet,
    bonus_lines: LineSet,
    selected: Option<GridPoint>,
    revealed: bool,
    feedback: Feedback,
}

impl DiamondRitual {
    pub fn new() -> Self {
        Self {
            grid: DotGrid::new(),
            player_lines: LineSet::new(),
            bonus_lines: LineSet::new(),
            selected: None,
            revealed: false,
            feedback: Feedback::new(),
        }
    }

    pub fn grid(&self) -> &DotGrid {
        &self.grid
    }

    pub fn player_lines(&self) -> &LineSet {
        &self.player_lines
    }

    pub fn bonus_lines(&self) -> &LineSet {
        &self.bonus_lines
    }

    pub fn selected(&self) -> Option<GridPoint> {
        self.selected
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Pointer press at canvas coordinates. Presses that miss every dot are
    /// ignored entirely; anything else changes selection state and requests
    /// a repaint, even when the drawn edge is a rejected duplicate.
    fn handle_pointer(&mut self, pos: Vec2, ctx: &mut EngineContext) {
        let Some(clicked) = self.grid.hit_test(pos) else {
            return;
        };

        match self.selected.take() {
            None => self.selected = Some(clicked),
            Some(anchor) if anchor != clicked => {
                let segment = Segment::new(anchor, clicked);
                let traced_before = Self::traced_triangles(&self.player_lines);
                if self.player_lines.insert(segment) {
                    self.check_completion(segment, traced_before, ctx);
                }
            }
            // Pressing the selected dot again just deselects it.
            Some(_) => {}
        }

        ctx.request_redraw();
    }

    /// Per-triangle completeness of `lines`, by full rescan.
    fn traced_triangles(lines: &LineSet) -> [bool; 4] {
        CORNER_TRIANGLES.map(|triangle| triangle.is_traced(lines))
    }

    /// Completion checker, run once per successful insertion. A triangle
    /// prompts only on its transition from untraced to traced; the reveal
    /// fires once all four are traced.
    fn check_completion(
        &mut self,
        segment: Segment,
        traced_before: [bool; 4],
        ctx: &mut EngineContext,
    ) {
        for (index, triangle) in CORNER_TRIANGLES.iter().enumerate() {
            if traced_before[index] {
                continue;
            }
            if !triangle.shares_vertex(&segment) {
                continue;
            }
            if triangle.is_traced(&self.player_lines) {
                self.feedback.set(TRIANGLE_TRACED_MSG, TRIANGLE_PROMPT_FRAMES);
                ctx.emit_event(GameEvent::TriangleTraced { index });
            }
        }

        if !self.revealed
            && CORNER_TRIANGLES
                .iter()
                .all(|triangle| triangle.is_traced(&self.player_lines))
        {
            self.reveal_diamond(ctx);
        }
    }

    /// One-shot reveal: rebuild the bonus set from the diamond's edges and
    /// pin the restored banner.
    fn reveal_diamond(&mut self, ctx: &mut EngineContext) {
        self.bonus_lines.clear();
        for edge in INNER_DIAMOND.edges() {
            self.bonus_lines.insert(edge);
        }
        self.revealed = true;
        self.feedback.set(DIAMOND_RESTORED_MSG, REVEAL_PROMPT_FRAMES);
        ctx.emit_event(GameEvent::DiamondRevealed);
        ctx.request_redraw();
    }

    /// Restore every field to its startup value.
    fn reset(&mut self, ctx: &mut EngineContext) {
        self.player_lines.clear();
        self.bonus_lines.clear();
        self.revealed = false;
        self.selected = None;
        self.feedback.clear();
        ctx.request_redraw();
        log::info!("board reset");
    }
}

impl Default for DiamondRitual {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for DiamondRitual {
    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.request_redraw();
        log::info!("dot ritual initialized");
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // Countdown first, so a prompt set below survives a full cycle.
        if self.feedback.tick() {
            ctx.request_redraw();
        }

        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    self.handle_pointer(Vec2::new(x, y), ctx);
                }
                InputEvent::KeyDown { key_code: KEY_R } => self.reset(ctx),
                InputEvent::KeyDown { .. } => {}
            }
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        build_draw_list(self, &self.grid, ctx.draw);
    }

    fn status_text(&self) -> &str {
        if self.revealed {
            DIAMOND_RESTORED_BANNER
        } else {
            self.feedback.text()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(game: &mut DiamondRitual, ctx: &mut EngineContext, point: GridPoint) {
        let pos = DotGrid::screen_pos(point);
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: pos.x, y: pos.y });
        game.update(ctx, &input);
    }

    fn press_key(game: &mut DiamondRitual, ctx: &mut EngineContext, key_code: u32) {
        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code });
        game.update(ctx, &input);
    }

    fn idle_frame(game: &mut DiamondRitual, ctx: &mut EngineContext) {
        game.update(ctx, &InputQueue::new());
    }

    fn draw_edge(game: &mut DiamondRitual, ctx: &mut EngineContext, a: (u8, u8), b: (u8, u8)) {
        press(game, ctx, GridPoint::new(a.0, a.1));
        press(game, ctx, GridPoint::new(b.0, b.1));
    }

    fn trace_triangle(game: &mut DiamondRitual, ctx: &mut EngineContext, index: usize) {
        let edges: Vec<Segment> = CORNER_TRIANGLES[index].edges().collect();
        for edge in edges {
            press(game, ctx, edge.a);
            press(game, ctx, edge.b);
        }
    }

    fn traced_events(ctx: &EngineContext) -> Vec<usize> {
        ctx.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::TriangleTraced { index } => Some(*index),
                _ => None,
            })
            .collect()
    }

    fn reveal_events(ctx: &EngineContext) -> usize {
        ctx.events
            .iter()
            .filter(|e| matches!(e, GameEvent::DiamondRevealed))
            .count()
    }

    #[test]
    fn first_press_selects_the_dot() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();
        press(&mut game, &mut ctx, GridPoint::new(2, 2));
        assert_eq!(game.selected(), Some(GridPoint::new(2, 2)));
        assert!(game.player_lines().is_empty());
        assert!(ctx.take_redraw());
    }

    #[test]
    fn pressing_selected_dot_deselects() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();
        press(&mut game, &mut ctx, GridPoint::new(2, 2));
        press(&mut game, &mut ctx, GridPoint::new(2, 2));
        assert_eq!(game.selected(), None);
        assert!(game.player_lines().is_empty());
    }

    #[test]
    fn miss_press_changes_nothing() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();
        press(&mut game, &mut ctx, GridPoint::new(1, 1));
        ctx.take_redraw();

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 5.0, y: 5.0 });
        game.update(&mut ctx, &input);

        assert_eq!(game.selected(), Some(GridPoint::new(1, 1)));
        assert!(!ctx.take_redraw());
    }

    #[test]
    fn second_press_draws_an_edge_and_clears_selection() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();
        draw_edge(&mut game, &mut ctx, (0, 0), (1, 0));
        assert_eq!(game.player_lines().len(), 1);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn duplicate_edge_is_rejected_but_still_repaints() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();
        draw_edge(&mut game, &mut ctx, (0, 0), (1, 0));
        ctx.take_redraw();

        // Same edge, reversed orientation.
        draw_edge(&mut game, &mut ctx, (1, 0), (0, 0));
        assert_eq!(game.player_lines().len(), 1);
        assert_eq!(game.selected(), None);
        assert!(ctx.take_redraw());
    }

    #[test]
    fn triangle_scenario_prompts_on_third_edge() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();

        draw_edge(&mut game, &mut ctx, (1, 1), (0, 1));
        draw_edge(&mut game, &mut ctx, (0, 1), (1, 0));
        assert_eq!(game.status_text(), "");

        draw_edge(&mut game, &mut ctx, (1, 0), (1, 1));
        assert_eq!(game.status_text(), TRIANGLE_TRACED_MSG);
        assert_eq!(game.feedback().frames_left(), TRIANGLE_PROMPT_FRAMES);
        assert_eq!(traced_events(&ctx), vec![0]);
    }

    #[test]
    fn triangle_prompts_once_until_reset() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();
        trace_triangle(&mut game, &mut ctx, 0);
        assert_eq!(traced_events(&ctx), vec![0]);

        // Another edge touching the completed triangle's vertices.
        draw_edge(&mut game, &mut ctx, (1, 1), (2, 1));
        assert_eq!(traced_events(&ctx), vec![0]);
    }

    #[test]
    fn prompt_goes_blank_after_countdown() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();
        trace_triangle(&mut game, &mut ctx, 0);
        assert_eq!(game.status_text(), TRIANGLE_TRACED_MSG);

        for _ in 0..TRIANGLE_PROMPT_FRAMES {
            idle_frame(&mut game, &mut ctx);
        }
        assert_eq!(game.status_text(), "");
        assert!(!game.feedback().is_active());
    }

    #[test]
    fn full_ritual_reveals_the_diamond() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();
        for index in 0..4 {
            trace_triangle(&mut game, &mut ctx, index);
        }

        assert!(game.is_revealed());
        assert_eq!(reveal_events(&ctx), 1);
        assert_eq!(traced_events(&ctx), vec![0, 1, 2, 3]);
        assert_eq!(game.feedback().frames_left(), REVEAL_PROMPT_FRAMES);
        assert_eq!(game.status_text(), DIAMOND_RESTORED_BANNER);

        let bonus: Vec<Segment> = game.bonus_lines().iter().copied().collect();
        let expected: Vec<Segment> = INNER_DIAMOND.edges().collect();
        assert_eq!(bonus, expected);
    }

    #[test]
    fn reveal_fires_only_once() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();
        for index in 0..4 {
            trace_triangle(&mut game, &mut ctx, index);
        }
        let bonus_before = game.bonus_lines().len();

        // Keep drawing after the reveal; the bonus set must not move.
        draw_edge(&mut game, &mut ctx, (0, 0), (1, 0));
        draw_edge(&mut game, &mut ctx, (2, 1), (1, 2));

        assert_eq!(reveal_events(&ctx), 1);
        assert_eq!(game.bonus_lines().len(), bonus_before);
        assert!(game.is_revealed());
    }

    #[test]
    fn banner_outlives_the_countdown() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();
        for index in 0..4 {
            trace_triangle(&mut game, &mut ctx, index);
        }
        for _ in 0..(REVEAL_PROMPT_FRAMES * 2) {
            idle_frame(&mut game, &mut ctx);
        }
        assert_eq!(game.status_text(), DIAMOND_RESTORED_BANNER);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();
        for index in 0..4 {
            trace_triangle(&mut game, &mut ctx, index);
        }
        press(&mut game, &mut ctx, GridPoint::new(0, 0));

        press_key(&mut game, &mut ctx, KEY_R);

        assert!(game.player_lines().is_empty());
        assert!(game.bonus_lines().is_empty());
        assert!(!game.is_revealed());
        assert_eq!(game.selected(), None);
        assert_eq!(game.status_text(), "");
        assert!(ctx.take_redraw());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();
        draw_edge(&mut game, &mut ctx, (0, 0), (1, 0));
        ctx.take_redraw();

        press_key(&mut game, &mut ctx, 65);
        assert_eq!(game.player_lines().len(), 1);
        assert!(!ctx.take_redraw());
    }

    #[test]
    fn triangles_trace_in_any_edge_order() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();

        // Third triangle, edges drawn backwards and out of order.
        draw_edge(&mut game, &mut ctx, (1, 4), (0, 3));
        draw_edge(&mut game, &mut ctx, (1, 3), (0, 3));
        draw_edge(&mut game, &mut ctx, (1, 4), (1, 3));

        assert_eq!(traced_events(&ctx), vec![2]);
        assert_eq!(game.status_text(), TRIANGLE_TRACED_MSG);
    }

    #[test]
    fn init_requests_first_paint() {
        let mut game = DiamondRitual::new();
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        assert!(ctx.take_redraw());
    }
}
