use crate::core::closes_menu;
use crate::dom;
use crate::menu;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, document: &web::Document) {
    if closes_menu(&ev.key()) && menu::is_open(document) {
        menu::close(document);
    }
}

pub fn wire_menu_escape(document: &web::Document) {
    let doc = document.clone();
    dom::on(document, "keydown", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_global_keydown(ev, &doc);
        }
    });
}
