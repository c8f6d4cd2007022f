use crate::constants::{ACTIVE_CLASS, MENU_CLOSE_ID, MENU_ID, MENU_OPEN_ID, MENU_OVERLAY_ID};
use crate::dom;
use crate::events;
use web_sys as web;

#[inline]
fn set_body_overflow(document: &web::Document, value: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("overflow", value);
    }
}

#[inline]
pub fn open(document: &web::Document) {
    if let Some(menu) = document.get_element_by_id(MENU_ID) {
        dom::set_class(&menu, ACTIVE_CLASS, true);
        if let Some(overlay) = document.get_element_by_id(MENU_OVERLAY_ID) {
            dom::set_class(&overlay, ACTIVE_CLASS, true);
        }
        set_body_overflow(document, "hidden");
    }
}

#[inline]
pub fn close(document: &web::Document) {
    if let Some(menu) = document.get_element_by_id(MENU_ID) {
        dom::set_class(&menu, ACTIVE_CLASS, false);
        if let Some(overlay) = document.get_element_by_id(MENU_OVERLAY_ID) {
            dom::set_class(&overlay, ACTIVE_CLASS, false);
        }
        set_body_overflow(document, "");
    }
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(MENU_ID)
        .map(|el| el.class_list().contains(ACTIVE_CLASS))
        .unwrap_or(false)
}

/// Wire the hamburger, close button, overlay, menu links and Escape.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let menu = dom::element_by_id(document, MENU_ID)?;
    let hamburger = dom::element_by_id(document, MENU_OPEN_ID)?;

    let doc = document.clone();
    dom::add_click_listener(&hamburger, move || open(&doc));

    let closers = [MENU_CLOSE_ID, MENU_OVERLAY_ID]
        .into_iter()
        .filter_map(|id| document.get_element_by_id(id))
        .chain(dom::query_all(&menu, "a"));
    for el in closers {
        let doc = document.clone();
        dom::add_click_listener(&el, move || close(&doc));
    }

    events::wire_menu_escape(document);
    log::info!("[menu] ready");
    Ok(())
}
