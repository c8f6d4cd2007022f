use crate::canvas::CanvasSurface;
use crate::core::Animator;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame driver for one animator.
///
/// The tick closure re-arms itself only while `Animator::frame` asks for it;
/// `request` is called when `Animator::activate` reports a stopped loop.
#[derive(Clone)]
pub struct FrameLoop {
    tick: Tick,
}

impl FrameLoop {
    pub fn new(animator: Rc<RefCell<Animator>>, surface: CanvasSurface) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let mut surface = surface;
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let again = animator.borrow_mut().frame(&mut surface);
            if again {
                request(&tick_clone);
            }
        }) as Box<dyn FnMut()>));
        Self { tick }
    }

    #[inline]
    pub fn request(&self) {
        request(&self.tick);
    }
}

fn request(tick: &Tick) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
