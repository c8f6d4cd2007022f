use crate::constants::{
    ACTIVE_CLASS, AUTOPLAY_DELAY_MS, HERO_SELECTOR, SLIDE_DOT_SELECTOR, SLIDE_SELECTOR,
};
use crate::core::{Slideshow, Transition};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct SlideshowDom {
    window: web::Window,
    slides: Vec<web::Element>,
    dots: Vec<web::Element>,
    state: Slideshow,
    interval: Option<i32>,
    advance: Option<Closure<dyn FnMut()>>,
}

impl SlideshowDom {
    fn apply(&self, t: Transition) {
        for set in [&self.slides, &self.dots] {
            // fewer dots than slides is tolerated
            if let Some(el) = set.get(t.from) {
                dom::set_class(el, ACTIVE_CLASS, false);
            }
            if let Some(el) = set.get(t.to) {
                dom::set_class(el, ACTIVE_CLASS, true);
            }
        }
    }

    fn start_autoplay(&mut self) {
        let Some(cb) = self.advance.as_ref() else { return };
        if !self.state.start_autoplay() {
            return;
        }
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                AUTOPLAY_DELAY_MS,
            ) {
            Ok(id) => self.interval = Some(id),
            Err(e) => {
                self.state.stop_autoplay();
                log::warn!("[slideshow] setInterval failed: {:?}", e);
            }
        }
    }

    fn stop_autoplay(&mut self) {
        self.state.stop_autoplay();
        if let Some(id) = self.interval.take() {
            self.window.clear_interval_with_handle(id);
        }
    }
}

pub fn init(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let slides = dom::document_query_all(document, SLIDE_SELECTOR);
    let Some(state) = Slideshow::new(slides.len()) else {
        log::debug!("[slideshow] no slides");
        return Ok(());
    };
    let dots = dom::document_query_all(document, SLIDE_DOT_SELECTOR);

    let show = Rc::new(RefCell::new(SlideshowDom {
        window: window.clone(),
        slides,
        dots: dots.clone(),
        state,
        interval: None,
        advance: None,
    }));

    // Interval callback keeps the state alive for the page
    let show_tick = show.clone();
    show.borrow_mut().advance = Some(Closure::wrap(Box::new(move || {
        let t = show_tick.borrow_mut().state.next_slide();
        show_tick.borrow().apply(t);
    }) as Box<dyn FnMut()>));

    for (index, dot) in dots.iter().enumerate() {
        let show = show.clone();
        dom::add_click_listener(dot, move || {
            let mut s = show.borrow_mut();
            let t = s.state.go_to(index as isize);
            s.apply(t);
            s.stop_autoplay();
            s.start_autoplay();
        });
    }

    show.borrow_mut().start_autoplay();

    if let Some(hero) = document.query_selector(HERO_SELECTOR).ok().flatten() {
        let pause = show.clone();
        dom::on(&hero, "pointerenter", move |_| pause.borrow_mut().stop_autoplay());
        let resume = show.clone();
        dom::on(&hero, "pointerleave", move |_| resume.borrow_mut().start_autoplay());
    }

    log::info!("[slideshow] ready");
    Ok(())
}
