use crate::app::drive;
use crate::dom::{add_click_listener, set_disabled};
use globe_core::{GameMode, Region};
use web_sys as web;

const MODE_BUTTONS: [(&str, GameMode); 3] = [
    ("btn-mode-type", GameMode::Typing),
    ("btn-mode-click", GameMode::Click),
    ("btn-mode-precision", GameMode::Precision),
];

#[inline]
pub fn region_button_id(region: Region) -> String {
    format!("region-{}", region.as_str())
}

pub fn enable_mode_buttons(document: &web::Document, enabled: bool) {
    for (id, _) in MODE_BUTTONS {
        set_disabled(document, id, !enabled);
    }
}

pub fn wire_buttons(document: &web::Document) {
    for (id, mode) in MODE_BUTTONS {
        add_click_listener(document, id, move || {
            drive(|app| app.session.select_mode(mode));
        });
    }
    for region in Region::ALL {
        add_click_listener(document, &region_button_id(region), move || {
            drive(|app| app.session.select_region(region));
        });
    }
    add_click_listener(document, "btn-confirm", || {
        drive(|app| app.session.confirm());
    });
    add_click_listener(document, "btn-next", || {
        drive(|app| app.session.next_round());
    });
    add_click_listener(document, "btn-exit", || {
        drive(|app| Ok(app.session.exit_to_menu()));
    });
}
