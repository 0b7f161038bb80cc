use crate::app::drive;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Enter in the guess box submits the typed country name.
pub fn wire_guess_input(document: &web::Document) {
    let Some(input) = dom::input_element(document, "country-input") else {
        log::warn!("[keyboard] missing #country-input");
        return;
    };
    let field = input.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        // blank entries still count as a wrong guess
        let guess = field.value();
        drive(|app| app.session.submit_guess(&guess));
    }) as Box<dyn FnMut(_)>);
    let _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
