#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod hero;
mod language;
mod menu;
mod slideshow;

// Behaviors are independent: one failing must not stop the others.
fn init_behavior(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        match e.downcast_ref::<error::SiteError>() {
            Some(se) if se.is_absent() => log::debug!("[{}] skipped: {}", name, se),
            _ => log::warn!("[{}] init error: {:?}", name, e),
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-field starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    init_behavior("slideshow", slideshow::init(&window, &document));
    init_behavior("lang", language::init(&window, &document));
    init_behavior("menu", menu::init(&document));
    init_behavior("header", events::wire_header_scroll(&window, &document));
    init_behavior("reveal", events::wire_reveal(&window, &document));
    events::wire_anchor_links(&window, &document);
    init_behavior("hero", hero::init(&window, &document));
    Ok(())
}
