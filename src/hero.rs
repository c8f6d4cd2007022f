use crate::canvas::CanvasSurface;
use crate::constants::{FIELD_CANVAS_ID, HERO_SELECTOR, REDUCED_MOTION_QUERY};
use crate::core::{mount, Animator, Environment, FieldConfig, Host, Mount};
use crate::dom;
use crate::error::SiteError;
use crate::events::{self, FieldWiring};
use crate::frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Host` over the live page: `#heroCyberGrid` inside `.hero`.
pub struct DomHost {
    window: web::Window,
    document: web::Document,
    handles: Option<(web::HtmlCanvasElement, web::Element)>,
}

impl DomHost {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self {
            window,
            document,
            handles: None,
        }
    }
}

impl Host for DomHost {
    fn environment(&self) -> Environment {
        let touch_primary = dom::window_has(&self.window, "ontouchstart")
            || self.window.navigator().max_touch_points() > 0;
        let reduced_motion = self
            .window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);
        Environment {
            touch_primary,
            reduced_motion,
        }
    }

    fn attach_surface(&mut self) -> Result<(f64, f64), SiteError> {
        let canvas = dom::element_by_id(&self.document, FIELD_CANVAS_ID)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| SiteError::WrongElementType(FIELD_CANVAS_ID))?;
        let container = dom::query(&self.document, HERO_SELECTOR)?;
        let size = dom::sync_canvas_to_container(&canvas, &container);
        self.handles = Some((canvas, container));
        Ok(size)
    }

    fn wire(&mut self, animator: Rc<RefCell<Animator>>) -> Result<(), SiteError> {
        let (canvas, container) = self
            .handles
            .clone()
            .ok_or(SiteError::MissingElement(FIELD_CANVAS_ID))?;
        let surface = CanvasSurface::new(&canvas)?;
        let frames = FrameLoop::new(animator.clone(), surface);
        events::wire_field_handlers(FieldWiring {
            canvas,
            container,
            animator,
            frames,
        });
        Ok(())
    }
}

pub fn init(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let mut host = DomHost::new(window.clone(), document.clone());
    let seed = rand::random::<u64>();
    match mount(&mut host, FieldConfig::default(), seed)? {
        Mount::OptedOut(reason) => log::debug!("[hero] field disabled: {:?}", reason),
        Mount::Absent => log::debug!("[hero] no field markup"),
        Mount::Mounted(a) => log::info!("[hero] field ready, nodes={}", a.borrow().particles().len()),
    }
    Ok(())
}
