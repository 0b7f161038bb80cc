use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{element_id}; click handler not attached");
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Show with the given CSS display value, or hide with `None`.
pub fn set_display(document: &web::Document, element_id: &str, display: Option<&str>) {
    if let Some(el) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let _ = el
            .style()
            .set_property("display", display.unwrap_or("none"));
    }
}

pub fn set_style(document: &web::Document, element_id: &str, property: &str, value: &str) {
    if let Some(el) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let _ = el.style().set_property(property, value);
    }
}

pub fn set_disabled(document: &web::Document, element_id: &str, disabled: bool) {
    if let Some(button) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        button.set_disabled(disabled);
    }
}

pub fn focus(document: &web::Document, element_id: &str) {
    if let Some(el) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

pub fn input_element(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}
