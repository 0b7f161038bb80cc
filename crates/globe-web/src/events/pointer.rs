//! Entry points for the 3D scene. The scene casts its own pointer ray and
//! hands either the hit in globe-local coordinates or the ray itself.

use crate::app::{drive, with_app};
use glam::DVec3;
use globe_core::constants::GLOBE_RADIUS;
use globe_core::{pointer_ray_to_lat_lon, vec_to_lat_lon, GeoPoint};
use wasm_bindgen::prelude::*;

fn ray_point(ox: f64, oy: f64, oz: f64, dx: f64, dy: f64, dz: f64) -> Option<GeoPoint> {
    pointer_ray_to_lat_lon(
        DVec3::new(ox, oy, oz),
        DVec3::new(dx, dy, dz),
        DVec3::ZERO,
        GLOBE_RADIUS,
    )
}

fn hover_at(point: GeoPoint) -> Option<String> {
    with_app(|app| app.session.hover(point).map(str::to_owned)).flatten()
}

fn click_at(point: GeoPoint) {
    drive(|app| app.session.click(point));
}

/// Country under a globe-local surface point, for hover highlighting.
#[wasm_bindgen]
pub fn hover_surface(x: f64, y: f64, z: f64) -> Option<String> {
    hover_at(vec_to_lat_lon(DVec3::new(x, y, z)))
}

#[wasm_bindgen]
pub fn click_surface(x: f64, y: f64, z: f64) {
    click_at(vec_to_lat_lon(DVec3::new(x, y, z)));
}

/// Same as [`hover_surface`] but from a ray in globe-local space.
#[wasm_bindgen]
pub fn hover_ray(ox: f64, oy: f64, oz: f64, dx: f64, dy: f64, dz: f64) -> Option<String> {
    ray_point(ox, oy, oz, dx, dy, dz).and_then(hover_at)
}

/// A ray that misses the globe is ignored.
#[wasm_bindgen]
pub fn click_ray(ox: f64, oy: f64, oz: f64, dx: f64, dy: f64, dz: f64) {
    if let Some(point) = ray_point(ox, oy, oz, dx, dy, dz) {
        click_at(point);
    }
}

/// Rings of a country as `[[[lon, lat], ..], ..]` JSON, for border drawing.
#[wasm_bindgen]
pub fn country_rings(name: &str) -> Option<String> {
    with_app(|app| {
        let feature = app.session.atlas().resolver().feature(name)?;
        let rings: Vec<Vec<[f64; 2]>> = feature
            .geometry
            .all_rings()
            .map(|ring| ring.iter().map(|p| [p.lon, p.lat]).collect())
            .collect();
        serde_json::to_string(&rings).ok()
    })
    .flatten()
}

/// Surface position for a lat/lon, as `[x, y, z]`, for markers and arcs.
#[wasm_bindgen]
pub fn surface_point(lat: f64, lon: f64) -> Vec<f64> {
    let p = globe_core::lat_lon_to_surface_point(lat, lon, GLOBE_RADIUS);
    vec![p.x, p.y, p.z]
}
