#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod outbox;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod entry;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod present;
#[cfg(target_arch = "wasm32")]
mod status;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod timers;

#[cfg(target_arch = "wasm32")]
pub use events::pointer::{
    click_ray, click_surface, country_rings, hover_ray, hover_surface, surface_point,
};
