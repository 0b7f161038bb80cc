// Shared fixtures for the host-side tests.
#![allow(dead_code)]

use globe_core::*;

/// France and Germany as coarse rings, a two-island country, plus records
/// the loader must skip.
pub const EUROPE_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "name": "France" },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[-4.5, 48.5], [2.5, 51.0], [7.5, 49.0], [7.0, 43.5], [-1.5, 43.5]]]
      }
    },
    {
      "type": "Feature",
      "properties": { "name": "Germany" },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[8.0, 47.5], [8.0, 54.5], [14.5, 54.5], [15.0, 51.0], [13.0, 47.5]]]
      }
    },
    {
      "type": "Feature",
      "properties": { "name": "Twin Isles" },
      "geometry": {
        "type": "MultiPolygon",
        "coordinates": [
          [[[60.0, -20.0], [60.0, -18.0], [62.0, -18.0], [62.0, -20.0]]],
          [[[64.0, -26.0], [64.0, -22.0], [68.0, -22.0], [68.0, -24.0], [66.0, -26.0]]]
        ]
      }
    },
    {
      "type": "Feature",
      "properties": { "name": "" },
      "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [0, 1], [1, 1]]] }
    },
    {
      "type": "Feature",
      "properties": { "name": "Nowhere" },
      "geometry": null
    },
    {
      "type": "Feature",
      "properties": { "name": "Lighthouse" },
      "geometry": { "type": "Point", "coordinates": [10.0, 10.0] }
    }
  ]
}"#;

pub fn atlas(kind: ResolverKind) -> Atlas {
    Atlas::from_geojson_str(EUROPE_GEOJSON, kind).expect("fixture parses")
}

pub fn square_ring() -> Ring {
    [[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]]
        .iter()
        .map(|[lon, lat]| GeoPoint::from_lon_lat(*lon, *lat))
        .collect()
}

pub fn square_feature(name: &str, lon0: f64, lat0: f64, size: f64) -> GeoFeature {
    let ring = vec![
        GeoPoint::from_lon_lat(lon0, lat0),
        GeoPoint::from_lon_lat(lon0, lat0 + size),
        GeoPoint::from_lon_lat(lon0 + size, lat0 + size),
        GeoPoint::from_lon_lat(lon0 + size, lat0),
    ];
    GeoFeature {
        name: name.to_string(),
        geometry: Geometry::Polygon(Polygon::new(vec![ring])),
    }
}

pub fn record(name: &str, region: Region) -> CountryRecord {
    CountryRecord {
        name: name.to_string(),
        lat: 0.0,
        lon: 0.0,
        region,
    }
}

pub const FRANCE_POINT: GeoPoint = GeoPoint::new(46.0, 2.0);
pub const GERMANY_POINT: GeoPoint = GeoPoint::new(51.0, 11.0);
pub const OCEAN_POINT: GeoPoint = GeoPoint::new(40.0, -30.0);
