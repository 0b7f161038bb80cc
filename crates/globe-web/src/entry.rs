use globe_core::constants::DATASET_URL;
use globe_core::{Atlas, QuizParams, Session};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::{app, dom, events, present, status, storage};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                status::show_blocked(
                    &document,
                    "Could not load country data. Reload to try again.",
                );
            }
        }
    });
    Ok(())
}

async fn fetch_text(window: &web::Window, url: &str) -> anyhow::Result<String> {
    let js_err = |e: JsValue| anyhow::anyhow!(format!("{:?}", e));
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("{url} returned HTTP {}", resp.status());
    }
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("response body is not text"))
}

fn random_seed() -> u64 {
    let mut buf = [0u8; 8];
    if let Err(e) = getrandom::getrandom(&mut buf) {
        log::warn!("[init] getrandom failed ({e}); using clock seed");
        return js_sys::Date::now() as u64;
    }
    u64::from_le_bytes(buf)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    status::show_blocked(&document, "Loading country data...");
    events::enable_mode_buttons(&document, false);

    let text = fetch_text(&window, DATASET_URL).await?;
    let params = QuizParams::default();
    let atlas = Atlas::from_geojson_str(&text, params.resolver)?;
    let countries = atlas.catalog().len();
    log::info!("[init] {countries} countries in catalog");

    let session = Session::new(
        atlas,
        params,
        Box::new(storage::LocalStorageHighScore::new()),
        random_seed(),
    );
    present::show_score(&document, &session.score());
    app::install(app::App::new(session, document.clone()));

    events::wire_buttons(&document);
    events::wire_guess_input(&document);
    events::enable_mode_buttons(&document, true);
    status::show_ready(&document, countries);
    Ok(())
}
