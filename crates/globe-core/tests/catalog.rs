mod common;

use common::*;
use globe_core::*;

#[test]
fn catalog_follows_feature_order() {
    let atlas = atlas(ResolverKind::LinearScan);
    let names: Vec<&str> = atlas
        .catalog()
        .records()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, ["France", "Germany", "Twin Isles"]);
}

#[test]
fn centroid_is_bounding_box_midpoint() {
    let atlas = atlas(ResolverKind::LinearScan);
    let france = atlas.catalog().find("France").unwrap();
    assert!((france.lat - 47.25).abs() < 1e-9);
    assert!((france.lon - 1.5).abs() < 1e-9);
    assert_eq!(france.region, Region::Europe);

    let germany = atlas.catalog().find("Germany").unwrap();
    assert!((germany.lat - 51.0).abs() < 1e-9);
    assert!((germany.lon - 11.5).abs() < 1e-9);
}

#[test]
fn multipolygon_centroid_uses_ring_with_most_vertices() {
    let atlas = atlas(ResolverKind::LinearScan);
    let isles = atlas.catalog().find("Twin Isles").unwrap();
    // second part: lon 64..68, lat -26..-22
    assert!((isles.lon - 66.0).abs() < 1e-9);
    assert!((isles.lat + 24.0).abs() < 1e-9);
    assert_eq!(isles.region, Region::Asia);
}

#[test]
fn largest_ring_ties_keep_the_first_part() {
    let a = square_feature("a", 0.0, 0.0, 1.0);
    let b = square_feature("b", 20.0, 20.0, 1.0);
    let parts = [a, b]
        .into_iter()
        .map(|f| match f.geometry {
            Geometry::Polygon(p) => p,
            Geometry::MultiPolygon(mut ps) => ps.remove(0),
        })
        .collect();
    let geometry = Geometry::MultiPolygon(parts);
    let ring = largest_ring(&geometry).unwrap();
    assert_eq!(ring[0], GeoPoint::new(0.0, 0.0));
}

#[test]
fn table_lookup_beats_coordinates() {
    // Russia's box midpoint is in Europe by the rules, the table says Asia
    assert_eq!(classify_region("Russia", 60.0, 40.0), Region::Asia);
    assert_eq!(classify_region("Fiji", -17.0, 178.0), Region::Oceania);
    assert_eq!(classify_region("Peru", 0.0, 0.0), Region::Americas);
}

#[test]
fn fallback_rules_apply_in_order() {
    assert_eq!(classify_region("Somewhere", -20.0, 130.0), Region::Oceania);
    assert_eq!(classify_region("Somewhere", -20.0, -60.0), Region::Americas);
    assert_eq!(classify_region("Somewhere", 50.0, 10.0), Region::Europe);
    assert_eq!(classify_region("Somewhere", 10.0, 20.0), Region::Africa);
    assert_eq!(classify_region("Somewhere", 40.0, 90.0), Region::Asia);
    // lat > 35 but lon 50 is outside the Europe band and not above 55
    assert_eq!(classify_region("Somewhere", 40.0, 50.0), Region::World);
    // exactly on a boundary falls through strict comparisons
    assert_eq!(classify_region("Somewhere", 35.0, 50.0), Region::World);
}

#[test]
fn features_without_rings_are_skipped() {
    let features = vec![
        GeoFeature {
            name: "Empty".into(),
            geometry: Geometry::Polygon(Polygon::new(vec![])),
        },
        square_feature("Square", 0.0, 0.0, 2.0),
        square_feature("  ", 0.0, 0.0, 2.0),
    ];
    let catalog = build_catalog(&features);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].name, "Square");
}

#[test]
fn region_filter_keeps_matching_records() {
    let catalog = Catalog::new(vec![
        record("A", Region::Europe),
        record("B", Region::Asia),
        record("C", Region::Europe),
        record("D", Region::Europe),
    ]);
    let europe = catalog.filter(Region::Europe, MIN_REGION_SIZE);
    let names: Vec<&str> = europe.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["A", "C", "D"]);
}

#[test]
fn small_region_falls_back_to_whole_catalog() {
    let catalog = Catalog::new(vec![
        record("A", Region::Europe),
        record("B", Region::Asia),
        record("C", Region::Europe),
        record("D", Region::Africa),
    ]);
    for region in [Region::Europe, Region::Asia, Region::Oceania] {
        let pool = catalog.filter(region, MIN_REGION_SIZE);
        assert_eq!(pool.len(), 4, "{region} should fall back");
    }
}

#[test]
fn world_is_the_whole_catalog() {
    let catalog = Catalog::new(vec![
        record("A", Region::Europe),
        record("B", Region::World),
    ]);
    assert_eq!(catalog.filter(Region::World, MIN_REGION_SIZE).len(), 2);
}

#[test]
fn region_parses_case_insensitively() {
    assert_eq!("europe".parse::<Region>(), Ok(Region::Europe));
    assert_eq!(" AMERICAS ".parse::<Region>(), Ok(Region::Americas));
    assert!("Atlantis".parse::<Region>().is_err());
    for region in Region::ALL {
        assert_eq!(region.to_string().parse::<Region>(), Ok(region));
    }
}
