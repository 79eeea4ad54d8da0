use crate::api::types::GameEvent;
use crate::input::queue::InputQueue;
use crate::renderer::commands::DrawList;

/// The core contract between game logic and the host shell.
pub trait Game {
    /// Set up initial state. Called once before the first frame.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame tick: advance timers, drain input, mutate state.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only pass that rebuilds the draw list for a repaint.
    fn render(&self, ctx: &mut RenderContext);

    /// The current status line; an empty string means no message.
    fn status_text(&self) -> &str {
        ""
    }
}

/// Mutable access to host-facing state, passed to Game::init and
/// Game::update.
pub struct EngineContext {
    /// Events for the host to consume after each tick.
    pub events: Vec<GameEvent>,
    redraw: bool,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            redraw: false,
        }
    }

    /// Emit an event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Ask the host to repaint after this tick.
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Consume the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context handed to Game::render.
pub struct RenderContext<'a> {
    pub draw: &'a mut DrawList,
}
