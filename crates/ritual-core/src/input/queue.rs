/// Input event types the game understands.
/// Positions are in canvas-local pixels.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A pointer press at canvas coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A key was pressed.
    KeyDown { key_code: u32 },
}

/// Key code for 'r' / 'R', the reset key.
pub const KEY_R: u32 = 82;

/// A queue of input events.
/// The host pushes events as they arrive; the game drains them once per
/// animation frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Push a new input event (called from the DOM listeners).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key_code: KEY_R });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_on_empty_queue() {
        let mut q = InputQueue::new();
        assert!(q.drain().is_empty());
    }
}
