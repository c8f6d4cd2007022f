use crate::constants::{
    ACTIVE_CLASS, LANGUAGE_BUTTON_SELECTOR, LANGUAGE_STORAGE_KEY, TRANSLATABLE_SELECTOR,
};
use crate::core::{translation, Language};
use crate::dom;
use web_sys as web;

/// Swap translatable text, the document language and the stored preference.
pub fn switch_language(window: &web::Window, document: &web::Document, lang: Language) {
    for el in dom::document_query_all(document, TRANSLATABLE_SELECTOR) {
        if let Some(text) = translation(el.get_attribute(lang.data_attribute())) {
            el.set_text_content(Some(&text));
        }
    }
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("lang", lang.code());
    }
    dom::storage_set(window, LANGUAGE_STORAGE_KEY, lang.code());
}

pub fn update_active_buttons(document: &web::Document, lang: Language) {
    for btn in dom::document_query_all(document, LANGUAGE_BUTTON_SELECTOR) {
        let selected = btn.get_attribute("data-lang").as_deref() == Some(lang.code());
        dom::set_class(&btn, ACTIVE_CLASS, selected);
    }
}

pub fn init(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    for btn in dom::document_query_all(document, LANGUAGE_BUTTON_SELECTOR) {
        let Some(lang) = btn.get_attribute("data-lang").as_deref().and_then(Language::from_code)
        else {
            log::debug!("[lang] button without a known data-lang");
            continue;
        };
        let window = window.clone();
        let document = document.clone();
        dom::add_click_listener(&btn, move || {
            switch_language(&window, &document, lang);
            update_active_buttons(&document, lang);
        });
    }

    let stored = dom::storage_get(window, LANGUAGE_STORAGE_KEY);
    let lang = Language::from_stored(stored.as_deref());
    switch_language(window, document, lang);
    update_active_buttons(document, lang);
    log::info!("[lang] ready, current={}", lang.code());
    Ok(())
}
