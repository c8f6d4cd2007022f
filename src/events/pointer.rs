use crate::core::Animator;
use crate::dom;
use crate::frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct FieldWiring {
    pub canvas: web::HtmlCanvasElement,
    pub container: web::Element,
    pub animator: Rc<RefCell<Animator>>,
    pub frames: FrameLoop,
}

pub fn wire_field_handlers(w: FieldWiring) {
    wire_resize(&w);
    wire_pointerenter(&w);
    wire_pointerleave(&w);
    wire_pointermove(&w);
}

fn wire_resize(w: &FieldWiring) {
    let Some(window) = web::window() else { return };
    let w = w.clone();
    dom::on(&window, "resize", move |_| {
        let (width, height) = dom::sync_canvas_to_container(&w.canvas, &w.container);
        w.animator.borrow_mut().resize(width, height);
    });
}

fn wire_pointerenter(w: &FieldWiring) {
    let w = w.clone();
    let container = w.container.clone();
    dom::on(&container, "pointerenter", move |_| {
        let start = w.animator.borrow_mut().activate();
        if start {
            w.frames.request();
        }
    });
}

fn wire_pointerleave(w: &FieldWiring) {
    let animator = w.animator.clone();
    dom::on(&w.container, "pointerleave", move |_| {
        animator.borrow_mut().deactivate();
    });
}

fn wire_pointermove(w: &FieldWiring) {
    let animator = w.animator.clone();
    let container = w.container.clone();
    dom::on(&w.container, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let rect = container.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        animator.borrow_mut().pointer_moved(x, y);
    });
}
