mod common;

use common::*;
use globe_core::*;
use rand::prelude::*;

#[test]
fn both_resolvers_find_the_fixture_countries() {
    for kind in [ResolverKind::LinearScan, ResolverKind::RTree] {
        let atlas = atlas(kind);
        assert_eq!(atlas.country_at(FRANCE_POINT), Some("France"), "{kind:?}");
        assert_eq!(atlas.country_at(GERMANY_POINT), Some("Germany"), "{kind:?}");
        assert_eq!(atlas.country_at(GeoPoint::new(-19.0, 61.0)), Some("Twin Isles"));
        assert_eq!(atlas.country_at(GeoPoint::new(-24.0, 66.0)), Some("Twin Isles"));
        assert_eq!(atlas.country_at(OCEAN_POINT), None, "{kind:?}");
    }
}

#[test]
fn rtree_matches_linear_scan_on_random_points() {
    // overlapping squares make the dataset-order rule observable
    let features: Vec<GeoFeature> = (0..40)
        .map(|i| {
            let lon = -170.0 + (i as f64) * 8.0;
            let lat = -60.0 + ((i * 7) % 12) as f64 * 10.0;
            square_feature(&format!("C{i}"), lon, lat, 12.0)
        })
        .collect();
    let linear = LinearScanResolver::new(features.clone());
    let tree = RTreeResolver::new(features);
    assert_eq!(tree.ring_count(), 40);

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2000 {
        let p = GeoPoint::new(rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0));
        assert_eq!(linear.country_at(p), tree.country_at(p), "at {p:?}");
    }
}

#[test]
fn rtree_respects_dataset_order_on_overlap() {
    let features = vec![
        square_feature("Later", 5.0, 5.0, 10.0),
        square_feature("Earlier", 0.0, 0.0, 10.0),
    ];
    let tree = RTreeResolver::new(features);
    assert_eq!(tree.country_at(GeoPoint::new(7.0, 7.0)), Some("Later"));
}

#[test]
fn resolver_exposes_features_by_name() {
    let atlas = atlas(ResolverKind::RTree);
    let germany = atlas.resolver().feature("Germany").unwrap();
    assert!(germany.contains(GERMANY_POINT));
    assert!(atlas.resolver().feature("Atlantis").is_none());
}

#[test]
fn surface_points_resolve_through_the_atlas() {
    let atlas = atlas(ResolverKind::LinearScan);
    let p = lat_lon_to_surface_point(FRANCE_POINT.lat, FRANCE_POINT.lon, GLOBE_RADIUS);
    assert_eq!(atlas.country_at_surface(p), Some("France"));
}

#[test]
fn resolver_kind_reads_from_snake_case() {
    let kind: ResolverKind = serde_json::from_str("\"r_tree\"").unwrap();
    assert_eq!(kind, ResolverKind::RTree);
}
