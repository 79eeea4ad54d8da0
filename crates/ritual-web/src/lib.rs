//! WASM entry point: wires the pre-existing DOM (a canvas plus a status
//! text node) to the game runner and drives one tick per animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use ritual_core::{DiamondRitual, InputEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

pub mod painter;
pub mod runner;

pub use painter::CanvasPainter;
pub use runner::GameRunner;

/// DOM id of the pre-existing canvas element.
const CANVAS_ID: &str = "ritual-canvas";
/// DOM id of the status text element.
const FEEDBACK_ID: &str = "feedback";

thread_local! {
    static RUNNER: RefCell<Option<GameRunner<DiamondRitual>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner<DiamondRitual>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("runner not initialized");
        f(runner)
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("canvas element missing"))?
        .dyn_into()?;
    let status = document
        .get_element_by_id(FEEDBACK_ID)
        .ok_or_else(|| JsValue::from_str("feedback element missing"))?;

    let mut runner = GameRunner::new(DiamondRitual::new());
    runner.init();
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));

    let painter = CanvasPainter::new(canvas.clone(), status)?;

    attach_pointer_listener(&canvas)?;
    attach_key_listener(&document)?;
    start_frame_loop(painter);

    log::info!("dot ritual: initialized");
    Ok(())
}

/// Translate mousedown client coordinates to canvas-local pixels and queue
/// a pointer event.
fn attach_pointer_listener(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let target = canvas.clone();
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let rect = target.get_bounding_client_rect();
        let x = event.client_x() as f32 - rect.left() as f32;
        let y = event.client_y() as f32 - rect.top() as f32;
        with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
    });
    canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn attach_key_listener(document: &Document) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        with_runner(|r| {
            r.push_input(InputEvent::KeyDown {
                key_code: event.key_code(),
            })
        });
    });
    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Kick off the self-rescheduling requestAnimationFrame loop. Each frame
/// ticks the runner and repaints only when the tick asked for it.
fn start_frame_loop(mut painter: CanvasPainter) {
    let cell = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));
    let next = cell.clone();

    *cell.borrow_mut() = Some(Closure::new(move || {
        let repaint = with_runner(|r| r.tick());
        if repaint {
            let result = with_runner(|r| {
                let res = painter.paint(r.draw_list());
                painter.set_status(r.status_text());
                res
            });
            if let Err(err) = result {
                log::error!("paint failed: {err:?}");
            }
        }
        request_frame(next.borrow().as_ref().expect("frame closure"));
    }));

    request_frame(cell.borrow().as_ref().expect("frame closure"));
}

fn request_frame(closure: &Closure<dyn FnMut()>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
