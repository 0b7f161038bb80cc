//! Reflects session events into the page and forwards them to the 3D scene.
//!
//! The scene script listens for `globe-quiz` events on `window`; `detail`
//! carries the event as a JSON string.

use crate::dom;
use globe_core::constants::COUNTDOWN_WARNING_SECONDS;
use globe_core::{CountryRecord, GameMode, Outcome, RoundEvent, RoundResult, ScoreState};
use wasm_bindgen::JsValue;
use web_sys as web;

pub const SCENE_EVENT: &str = "globe-quiz";

pub fn dispatch(event: &RoundEvent) {
    let Some(window) = web::window() else {
        return;
    };
    let detail = match serde_json::to_string(event) {
        Ok(s) => s,
        Err(e) => {
            log::error!("[present] could not encode event: {e}");
            return;
        }
    };
    let init = web::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(&detail));
    match web::CustomEvent::new_with_event_init_dict(SCENE_EVENT, &init) {
        Ok(ev) => {
            let _ = window.dispatch_event(&ev);
        }
        Err(e) => log::error!("[present] CustomEvent failed: {e:?}"),
    }
}

/// Refill the `#country-list` datalist with the pool's names for typing.
pub fn fill_country_list(document: &web::Document, pool: &[CountryRecord]) {
    let Some(list) = document.get_element_by_id("country-list") else {
        return;
    };
    list.set_inner_html("");
    for record in pool {
        match document.create_element("option") {
            Ok(option) => {
                let _ = option.set_attribute("value", &record.name);
                let _ = list.append_child(&option);
            }
            Err(e) => log::warn!("[present] could not create option: {e:?}"),
        }
    }
}

pub fn show_score(document: &web::Document, score: &ScoreState) {
    dom::set_text(document, "score-display", &format!("Score: {}", score.score));
    dom::set_text(document, "high-score-display", &format!("Best: {}", score.high_score));
    dom::set_text(document, "streak-display", &format!("Streak: {}", score.streak));
}

fn show_menu(document: &web::Document) {
    dom::set_display(document, "btn-group", Some("flex"));
    dom::set_display(document, "continent-selection", None);
    dom::set_display(document, "game-ui", None);
    dom::set_display(document, "timer-bar-container", None);
}

fn result_message(result: &RoundResult) -> String {
    let name = &result.target.name;
    match &result.outcome {
        Outcome::Correct => format!("Correct! {name} (+{})", result.delta),
        Outcome::WrongCountry {
            clicked,
            distance_km,
        } => format!(
            "That was {clicked}. {name} is {:.0} km away ({})",
            distance_km, result.delta
        ),
        Outcome::Located { distance_km } => {
            format!("{:.0} km from {name} (+{})", distance_km, result.delta)
        }
        Outcome::TimedOut => format!("Time's up! It was {name} ({})", result.delta),
    }
}

/// Update the DOM for one event. `mode` is the session's current mode.
pub fn render(document: &web::Document, event: &RoundEvent, mode: Option<GameMode>) {
    match event {
        RoundEvent::MenuEntered => show_menu(document),
        RoundEvent::ModeSelected { .. } => {
            dom::set_display(document, "btn-group", None);
            dom::set_display(document, "continent-selection", Some("flex"));
        }
        RoundEvent::ShuffleStarted { region, pool, .. } => {
            dom::set_display(document, "continent-selection", None);
            dom::set_display(document, "game-ui", Some("block"));
            dom::set_display(document, "btn-next", None);
            dom::set_display(document, "btn-confirm", None);
            dom::set_display(document, "country-input", None);
            dom::set_display(document, "timer-bar-container", None);
            dom::set_text(document, "result-text", &format!("{region}: {pool} countries"));
        }
        RoundEvent::Decoy { name } => {
            if mode != Some(GameMode::Typing) {
                dom::set_text(document, "target-display", name);
            }
        }
        RoundEvent::AwaitingInput { target, seconds } => {
            dom::set_display(document, "timer-bar-container", Some("block"));
            dom::set_style(document, "timer-bar", "width", "100%");
            dom::set_text(document, "timer-text", &seconds.to_string());
            match mode {
                Some(GameMode::Typing) => {
                    dom::set_text(document, "target-display", "Which country is highlighted?");
                    dom::set_display(document, "country-input", Some("inline-block"));
                    if let Some(input) = dom::input_element(document, "country-input") {
                        input.set_value("");
                    }
                    dom::focus(document, "country-input");
                }
                Some(GameMode::Precision) => {
                    let text = format!("Pinpoint: {}", target.name);
                    dom::set_text(document, "target-display", &text);
                    dom::set_display(document, "btn-confirm", Some("inline-block"));
                }
                _ => dom::set_text(document, "target-display", &format!("Find: {}", target.name)),
            }
            dom::set_text(document, "result-text", "");
        }
        RoundEvent::Countdown {
            remaining,
            fraction,
        } => {
            dom::set_style(document, "timer-bar", "width", &format!("{:.1}%", fraction * 100.0));
            let class = if *remaining <= COUNTDOWN_WARNING_SECONDS {
                "timer-bar warning"
            } else {
                "timer-bar"
            };
            if let Some(el) = document.get_element_by_id("timer-bar") {
                let _ = el.set_attribute("class", class);
            }
            dom::set_text(document, "timer-text", &remaining.to_string());
        }
        RoundEvent::Miss { .. } => dom::set_text(document, "result-text", "That's the ocean!"),
        RoundEvent::Selected { .. } => {
            dom::set_text(document, "result-text", "Press confirm to lock it in")
        }
        RoundEvent::NothingSelected => {
            dom::set_text(document, "result-text", "Click the globe to place a marker first")
        }
        RoundEvent::Incorrect { guess, score } => {
            dom::set_text(document, "result-text", &format!("Not {guess}. Try again"));
            if let Some(input) = dom::input_element(document, "country-input") {
                input.set_value("");
            }
            show_score(document, score);
        }
        RoundEvent::Resolved(result) => {
            dom::set_text(document, "result-text", &result_message(result));
            dom::set_text(document, "target-display", &result.target.name);
            dom::set_display(document, "btn-confirm", None);
            dom::set_display(document, "country-input", None);
            dom::set_display(document, "btn-next", Some("inline-block"));
            show_score(document, &result.score);
        }
    }
}
