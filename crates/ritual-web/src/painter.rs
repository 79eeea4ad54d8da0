use ritual_core::{Color, DrawCommand, DrawList};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

/// Coordinate-label placement relative to its dot, in pixels.
const LABEL_OFFSET_X: f64 = 6.0;
const LABEL_OFFSET_Y: f64 = -12.0;
const LABEL_FONT: &str = "16px sans-serif";

fn css_color(color: Color) -> String {
    format!("rgb({},{},{})", color.r, color.g, color.b)
}

/// Paints draw lists onto a 2D canvas context and mirrors the status line
/// into a DOM text node.
pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx2d: CanvasRenderingContext2d,
    status: Element,
    last_status: String,
}

impl CanvasPainter {
    pub fn new(canvas: HtmlCanvasElement, status: Element) -> Result<Self, JsValue> {
        let ctx2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx2d,
            status,
            last_status: String::new(),
        })
    }

    /// Execute every command in order. Surface dimensions come from the
    /// canvas element itself.
    pub fn paint(&self, list: &DrawList) -> Result<(), JsValue> {
        for command in list.iter() {
            match command {
                DrawCommand::Clear => {
                    self.ctx2d.clear_rect(
                        0.0,
                        0.0,
                        self.canvas.width() as f64,
                        self.canvas.height() as f64,
                    );
                }
                DrawCommand::Dot { pos, radius, color } => {
                    self.ctx2d.begin_path();
                    self.ctx2d.arc(
                        pos.x as f64,
                        pos.y as f64,
                        *radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    )?;
                    self.ctx2d.set_fill_style_str(&css_color(*color));
                    self.ctx2d.fill();
                }
                DrawCommand::Line {
                    from,
                    to,
                    width,
                    color,
                } => {
                    self.ctx2d.set_stroke_style_str(&css_color(*color));
                    self.ctx2d.set_line_width(*width as f64);
                    self.ctx2d.begin_path();
                    self.ctx2d.move_to(from.x as f64, from.y as f64);
                    self.ctx2d.line_to(to.x as f64, to.y as f64);
                    self.ctx2d.stroke();
                }
                DrawCommand::Label { pos, text } => {
                    self.ctx2d.set_fill_style_str(&css_color(Color::LABEL));
                    self.ctx2d.set_font(LABEL_FONT);
                    self.ctx2d.fill_text(
                        text,
                        pos.x as f64 + LABEL_OFFSET_X,
                        pos.y as f64 + LABEL_OFFSET_Y,
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Update the status element, skipping the DOM write when unchanged.
    /// An empty string clears the element.
    pub fn set_status(&mut self, text: &str) {
        if self.last_status != text {
            self.status.set_text_content(Some(text));
            self.last_status.clear();
            self.last_status.push_str(text);
        }
    }
}
