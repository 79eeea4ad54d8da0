//! The draw-command buffer handed to the host painter each repaint.
//! Commands map one-to-one onto the canvas-2D primitives the toy uses:
//! clear-rect, filled arc, stroked line, text label.

use glam::Vec2;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Grid dots.
    pub const DOT: Color = Color::rgb(200, 200, 200);
    /// Coordinate labels.
    pub const LABEL: Color = Color::rgb(255, 255, 255);
    /// Lines drawn by the player.
    pub const PLAYER_LINE: Color = Color::rgb(60, 120, 200);
    /// Bonus lines drawn at the reveal.
    pub const BONUS_LINE: Color = Color::rgb(255, 215, 0);
    /// The center marker shown once the diamond is revealed.
    pub const MARKER: Color = Color::rgb(180, 0, 180);
}

/// Stroke width for drawn lines.
pub const LINE_WIDTH: f32 = 4.0;

/// A single painting operation, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface.
    Clear,
    /// Filled circle.
    Dot { pos: Vec2, radius: f32, color: Color },
    /// Stroked line segment.
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    /// Text label anchored near a dot.
    Label { pos: Vec2, text: String },
}

/// Ordered list of draw commands for one repaint.
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(128),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
