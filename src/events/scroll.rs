use crate::constants::{
    ANCHOR_SELECTOR, DEFAULT_HEADER_HEIGHT, HEADER_ID, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR,
    REVEAL_THRESHOLD, SCROLLED_CLASS, VISIBLE_CLASS,
};
use crate::core::{anchor_scroll_top, anchor_target, header_is_scrolled};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Toggle `scrolled` on the header now and on every scroll.
pub fn wire_header_scroll(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let header = dom::element_by_id(document, HEADER_ID)?;
    let update = {
        let window = window.clone();
        move || {
            let y = window.scroll_y().unwrap_or(0.0);
            dom::set_class(&header, SCROLLED_CLASS, header_is_scrolled(y));
        }
    };
    update();
    dom::on_passive(window, "scroll", move |_| update());
    Ok(())
}

/// Reveal `.reveal` elements once they enter the viewport.
pub fn wire_reveal(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::document_query_all(document, REVEAL_SELECTOR);
    if !dom::window_has(window, "IntersectionObserver") {
        for el in &targets {
            dom::set_class(el, VISIBLE_CLASS, true);
        }
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::set_class(&target, VISIBLE_CLASS, true);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_root_margin(REVEAL_ROOT_MARGIN);
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    log::debug!("[reveal] observing {}", targets.len());
    Ok(())
}

/// Smooth-scroll in-page links so the target clears the fixed header.
pub fn wire_anchor_links(window: &web::Window, document: &web::Document) {
    let header_height = document
        .get_element_by_id(HEADER_ID)
        .and_then(|h| h.dyn_into::<web::HtmlElement>().ok())
        .map(|h| h.offset_height() as f64)
        .unwrap_or(DEFAULT_HEADER_HEIGHT);

    for link in dom::document_query_all(document, ANCHOR_SELECTOR) {
        let window = window.clone();
        let document = document.clone();
        let href_source = link.clone();
        dom::on(&link, "click", move |ev| {
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            let Some(target) = document
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            ev.prevent_default();

            let opts = web::ScrollToOptions::new();
            opts.set_top(anchor_scroll_top(target.offset_top() as f64, header_height));
            opts.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        });
    }
}
