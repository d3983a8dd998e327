//! Pointer wiring for the sponge drag.
//!
//! Handlers only record raw pointer state (canvas pixels, button, drag
//! begin/end); the projection onto the drag plane and the hover test run in
//! the per-frame tick so the scene has exactly one place that mutates the
//! sponge.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub drag: Rc<RefCell<input::DragState>>,
    /// Whether the last frame's hover test hit the sponge; written by the
    /// frame tick, read here to decide whether a press starts a drag.
    pub sponge_hovered: Rc<RefCell<bool>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mut ms = w.mouse.borrow_mut();
        ms.x = pos.x;
        ms.y = pos.y;
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if *w.sponge_hovered.borrow() {
            w.drag.borrow_mut().active = true;
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
            log::info!("[sponge] begin drag");
        }
        w.mouse.borrow_mut().down = true;
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Release and leave both end the drag; the frame tick notices the edge and
// starts the snap-back tween.
fn wire_pointerup(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.drag.borrow().active {
            w.drag.borrow_mut().active = false;
            log::info!("[sponge] end drag");
        }
        w.mouse.borrow_mut().down = false;
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
