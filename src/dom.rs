use crate::error::SiteError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> SiteError {
    SiteError::Js(format!("{:?}", e))
}

pub fn element_by_id(document: &web::Document, id: &'static str) -> Result<web::Element, SiteError> {
    document
        .get_element_by_id(id)
        .ok_or(SiteError::MissingElement(id))
}

pub fn query(document: &web::Document, selector: &'static str) -> Result<web::Element, SiteError> {
    document
        .query_selector(selector)
        .map_err(js_err)?
        .ok_or(SiteError::MissingElement(selector))
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(node_list_elements)
        .unwrap_or_default()
}

pub fn document_query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(node_list_elements)
        .unwrap_or_default()
}

fn node_list_elements(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn on(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] listen {} failed: {:?}", event, e);
    }
    closure.forget();
}

pub fn on_passive(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[dom] listen {} failed: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    on(element, "click", move |_| handler());
}

#[inline]
pub fn set_class(element: &web::Element, class: &str, enabled: bool) {
    let cl = element.class_list();
    _ = if enabled { cl.add_1(class) } else { cl.remove_1(class) };
}

/// `true` if `name` is a property of the global `window`.
#[inline]
pub fn window_has(window: &web::Window, name: &str) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false)
}

pub fn storage_get(window: &web::Window, key: &str) -> Option<String> {
    window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(key).ok().flatten())
}

pub fn storage_set(window: &web::Window, key: &str, value: &str) {
    if let Ok(Some(s)) = window.local_storage() {
        if let Err(e) = s.set_item(key, value) {
            log::debug!("[dom] storage write {} failed: {:?}", key, e);
        }
    }
}

/// Size the canvas backing store to `container`'s bounding box (CSS pixels).
/// Returns the resulting canvas size.
pub fn sync_canvas_to_container(
    canvas: &web::HtmlCanvasElement,
    container: &web::Element,
) -> (f64, f64) {
    let rect = container.get_bounding_client_rect();
    canvas.set_width(rect.width().max(0.0) as u32);
    canvas.set_height(rect.height().max(0.0) as u32);
    (canvas.width() as f64, canvas.height() as f64)
}
