use ritual_core::{DrawList, EngineContext, Game, GameEvent, InputEvent, InputQueue, RenderContext};

/// Generic frame runner that wires game logic to the browser shell.
///
/// The WASM entry creates a `thread_local!` GameRunner and drives it from
/// the requestAnimationFrame loop; DOM listeners feed the input queue
/// between frames.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    draw_list: DrawList,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            draw_list: DrawList::new(),
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one animation-frame tick: update the game against pending
    /// input, forward emitted events, and rebuild the draw list when a
    /// repaint was requested. Returns whether the host should repaint.
    pub fn tick(&mut self) -> bool {
        if !self.initialized {
            return false;
        }

        self.ctx.clear_frame_data();
        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        for event in &self.ctx.events {
            match *event {
                GameEvent::TriangleTraced { index } => {
                    log::info!("corner triangle {index} traced");
                }
                GameEvent::DiamondRevealed => log::info!("inner diamond revealed"),
            }
        }

        let repaint = self.ctx.take_redraw();
        if repaint {
            let mut render_ctx = RenderContext {
                draw: &mut self.draw_list,
            };
            self.game.render(&mut render_ctx);
        }
        repaint
    }

    /// The draw list rebuilt by the most recent repainting tick.
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// The game's current status line.
    pub fn status_text(&self) -> &str {
        self.game.status_text()
    }
}
