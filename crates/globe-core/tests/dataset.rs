mod common;

use common::*;
use globe_core::*;

#[test]
fn loader_skips_unusable_features() {
    let features = parse_features(EUROPE_GEOJSON).unwrap();
    let names: Vec<&str> = features.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["France", "Germany", "Twin Isles"]);
}

#[test]
fn multipolygon_parts_are_kept_in_order() {
    let features = parse_features(EUROPE_GEOJSON).unwrap();
    let Geometry::MultiPolygon(parts) = &features[2].geometry else {
        panic!("Twin Isles should be a multipolygon");
    };
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].rings[0].len(), 4);
    assert_eq!(parts[1].rings[0].len(), 5);
}

#[test]
fn vertices_are_read_as_lon_lat() {
    let features = parse_features(EUROPE_GEOJSON).unwrap();
    let Geometry::Polygon(france) = &features[0].geometry else {
        panic!("France should be a polygon");
    };
    assert_eq!(france.rings[0][0], GeoPoint::new(48.5, -4.5));
}

#[test]
fn names_are_trimmed() {
    let text = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"name":"  Peru "},
         "geometry":{"type":"Polygon","coordinates":[[[-80,-5],[-70,-5],[-70,-15]]]}}
    ]}"#;
    let features = parse_features(text).unwrap();
    assert_eq!(features[0].name, "Peru");
}

#[test]
fn non_collection_is_rejected() {
    let text = r#"{"type":"Point","coordinates":[1.0,2.0]}"#;
    assert!(matches!(
        parse_features(text),
        Err(DatasetError::NotAFeatureCollection)
    ));
}

#[test]
fn collection_without_countries_is_rejected() {
    let text = r#"{"type":"FeatureCollection","features":[]}"#;
    assert!(matches!(parse_features(text), Err(DatasetError::Empty)));
}

#[test]
fn invalid_json_is_a_parse_error() {
    assert!(matches!(
        parse_features("{ not geojson"),
        Err(DatasetError::Parse(_))
    ));
}

#[test]
fn reader_and_str_loaders_match() {
    let from_reader = read_features(EUROPE_GEOJSON.as_bytes()).unwrap();
    let from_str = parse_features(EUROPE_GEOJSON).unwrap();
    assert_eq!(from_reader, from_str);
}

const GOOD_SQUARE: &str = r#"{"type":"Feature","properties":{"name":"Good"},
    "geometry":{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,10]]]}}"#;

#[test]
fn short_vertex_only_drops_its_feature() {
    let text = format!(
        r#"{{"type":"FeatureCollection","features":[
            {{"type":"Feature","properties":{{"name":"Bad"}},
              "geometry":{{"type":"Polygon","coordinates":[[[1],[0,10],[10,10],[10,0]]]}}}},
            {GOOD_SQUARE}
        ]}}"#
    );
    let features = parse_features(&text).unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0].name, "Good");
}

#[test]
fn garbled_coordinates_only_drop_their_feature() {
    let text = format!(
        r#"{{"type":"FeatureCollection","features":[
            {{"type":"Feature","properties":{{"name":"Bad"}},
              "geometry":{{"type":"Polygon","coordinates":"oops"}}}},
            {GOOD_SQUARE}
        ]}}"#
    );
    let features = read_features(text.as_bytes()).unwrap();
    let names: Vec<&str> = features.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Good"]);
}

#[test]
fn atlas_loads_from_a_reader() {
    let atlas = Atlas::from_reader(EUROPE_GEOJSON.as_bytes(), ResolverKind::LinearScan).unwrap();
    assert_eq!(atlas.catalog().len(), 3);
    assert_eq!(atlas.country_at(FRANCE_POINT), Some("France"));
}
