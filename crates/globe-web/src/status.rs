use web_sys as web;

const STATUS_ID: &str = "status-bar";

/// Dataset still loading or failed; every mode button stays disabled.
#[inline]
pub fn show_blocked(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        el.set_text_content(Some(message));
        let _ = el.set_attribute("class", "status blocked");
    }
}

#[inline]
pub fn show_ready(document: &web::Document, countries: usize) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        el.set_text_content(Some(&format!("Ready: {countries} countries loaded")));
        let _ = el.set_attribute("class", "status ready");
    }
}
