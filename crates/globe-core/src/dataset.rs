//! Boundary dataset loading.
//!
//! Reads a GeoJSON feature collection of countries. Features that cannot be
//! used (no name, no geometry, non-polygonal geometry, empty rings) are
//! skipped so one bad record does not block the whole load.

use crate::containment::{GeoFeature, Geometry, Polygon, Ring};
use crate::geometry::GeoPoint;
use geojson::PolygonType;
use serde_json::Value as JsonValue;
use std::io::Read;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("boundary data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("boundary data is not a feature collection")]
    NotAFeatureCollection,
    #[error("boundary data contains no usable country features")]
    Empty,
}

pub fn parse_features(text: &str) -> Result<Vec<GeoFeature>, DatasetError> {
    from_json(serde_json::from_str(text)?)
}

pub fn read_features<R: Read>(reader: R) -> Result<Vec<GeoFeature>, DatasetError> {
    from_json(serde_json::from_reader(reader)?)
}

// Geometries are validated one feature at a time; a malformed one only
// drops its own feature.
fn from_json(value: JsonValue) -> Result<Vec<GeoFeature>, DatasetError> {
    let JsonValue::Object(mut root) = value else {
        return Err(DatasetError::NotAFeatureCollection);
    };
    if root.get("type").and_then(JsonValue::as_str) != Some("FeatureCollection") {
        return Err(DatasetError::NotAFeatureCollection);
    }
    let Some(JsonValue::Array(raw_features)) = root.remove("features") else {
        return Err(DatasetError::NotAFeatureCollection);
    };

    let total = raw_features.len();
    let mut features = Vec::with_capacity(total);
    for (index, mut raw) in raw_features.into_iter().enumerate() {
        let name = raw
            .pointer("/properties/name")
            .and_then(JsonValue::as_str)
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if name.is_empty() {
            log::debug!("[dataset] skipping feature {index}: missing name");
            continue;
        }
        let raw_geometry = match raw.get_mut("geometry").map(JsonValue::take) {
            None | Some(JsonValue::Null) => {
                log::debug!("[dataset] skipping {name}: no geometry");
                continue;
            }
            Some(g) => g,
        };
        let geometry = match geojson::Geometry::try_from(raw_geometry) {
            Ok(g) => g,
            Err(e) => {
                log::debug!("[dataset] skipping {name}: malformed geometry ({e})");
                continue;
            }
        };
        let geometry = match geometry.value {
            geojson::Value::Polygon(poly) => convert_polygon(poly).map(Geometry::Polygon),
            geojson::Value::MultiPolygon(parts) => {
                let parts: Vec<Polygon> = parts.into_iter().filter_map(convert_polygon).collect();
                (!parts.is_empty()).then_some(Geometry::MultiPolygon(parts))
            }
            _ => None,
        };
        match geometry {
            Some(geometry) => features.push(GeoFeature { name, geometry }),
            None => log::debug!("[dataset] skipping {name}: no usable polygon rings"),
        }
    }

    log::info!("[dataset] loaded {} of {} features", features.len(), total);
    if features.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(features)
}

fn convert_polygon(poly: PolygonType) -> Option<Polygon> {
    let mut rings = poly.into_iter().map(convert_ring);
    // the outer ring decides whether the landmass is usable; holes are best effort
    let outer = rings.next()??;
    let mut out = vec![outer];
    out.extend(rings.flatten());
    Some(Polygon::new(out))
}

fn convert_ring(ring: Vec<Vec<f64>>) -> Option<Ring> {
    let points: Option<Ring> = ring
        .iter()
        .map(|pos| match pos.as_slice() {
            [lon, lat, ..] if lon.is_finite() && lat.is_finite() => {
                Some(GeoPoint::from_lon_lat(*lon, *lat))
            }
            _ => None,
        })
        .collect();
    points.filter(|p| !p.is_empty())
}
