pub mod api;
pub mod core;
pub mod game;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, RenderContext};
pub use api::types::GameEvent;
pub use core::feedback::Feedback;
pub use core::grid::{
    DotGrid, GridPoint, CELL_SIZE, CLICK_RADIUS, DOT_RADIUS, GRID_OFFSET, GRID_SIZE,
};
pub use core::lines::{LineSet, Segment};
pub use core::shapes::{Shape, CENTER_DOT, CORNER_TRIANGLES, INNER_DIAMOND};
pub use game::{
    DiamondRitual, DIAMOND_RESTORED_BANNER, DIAMOND_RESTORED_MSG, REVEAL_PROMPT_FRAMES,
    TRIANGLE_PROMPT_FRAMES, TRIANGLE_TRACED_MSG,
};
pub use input::queue::{InputEvent, InputQueue, KEY_R};
pub use renderer::commands::{Color, DrawCommand, DrawList, LINE_WIDTH};
pub use systems::render::build_draw_list;
