use globe_core::*;

const PARIS: GeoPoint = GeoPoint::new(48.8566, 2.3522);
const LONDON: GeoPoint = GeoPoint::new(51.5074, -0.1278);

#[test]
fn haversine_is_symmetric_and_zero_on_self() {
    let d1 = haversine_distance_km(PARIS, LONDON);
    let d2 = haversine_distance_km(LONDON, PARIS);
    assert_eq!(d1, d2);
    assert_eq!(haversine_distance_km(PARIS, PARIS), 0.0);
}

#[test]
fn haversine_matches_known_distances() {
    let d = haversine_distance_km(PARIS, LONDON);
    assert!((d - 343.5).abs() < 2.0, "paris-london {d}");

    // a quarter meridian
    let d = haversine_distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(90.0, 0.0));
    let expected = std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_KM;
    assert!((d - expected).abs() < 1e-6);

    // antipodes
    let d = haversine_distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
    assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
}

#[test]
fn haversine_triangle_sanity() {
    let a = GeoPoint::new(10.0, 10.0);
    let b = GeoPoint::new(-20.0, 40.0);
    let c = GeoPoint::new(35.0, -70.0);
    let ab = haversine_distance_km(a, b);
    let bc = haversine_distance_km(b, c);
    let ac = haversine_distance_km(a, c);
    assert!(ac <= ab + bc + 1e-9);
}

#[test]
fn score_boundaries() {
    assert_eq!(score_from_distance(0.0), 100);
    assert_eq!(score_from_distance(49.0), 100);
    assert_eq!(score_from_distance(3000.0), 37);
    assert_eq!(score_from_distance(50.0), 98);
}

#[test]
fn score_is_monotonic_and_bounded() {
    let mut prev = score_from_distance(0.0);
    let mut d = 0.0;
    while d < 25_000.0 {
        let s = score_from_distance(d);
        assert!((0..=100).contains(&s));
        assert!(s <= prev, "score rose at {d} km");
        prev = s;
        d += 25.0;
    }
    assert_eq!(score_from_distance(20_000.0), 0);
}

#[test]
fn exact_match_and_penalties() {
    assert_eq!(score_exact_match(), 100);
    assert_eq!(penalty(PenaltyKind::WrongClick), -10);
    assert_eq!(penalty(PenaltyKind::TimeExpired), -5);
}

#[test]
fn score_may_go_negative() {
    let mut s = ScoreState::default();
    s.record_failure(penalty(PenaltyKind::WrongClick));
    s.record_failure(penalty(PenaltyKind::TimeExpired));
    assert_eq!(s.score, -15);
    assert_eq!(s.high_score, 0);
}

#[test]
fn streak_counts_successes_and_resets_on_failure() {
    let mut s = ScoreState::default();
    s.record_success(100);
    s.record_success(40);
    assert_eq!(s.streak, 2);
    s.record_miss();
    assert_eq!(s.streak, 0);
    assert_eq!(s.score, 140);
    s.record_success(1);
    assert_eq!(s.streak, 1);
}

#[test]
fn high_score_only_moves_up() {
    let mut s = ScoreState::with_high_score(120);
    assert!(!s.record_success(100).new_high_score);
    assert!(s.record_success(30).new_high_score);
    assert_eq!(s.high_score, 130);
    s.record_failure(-10);
    assert_eq!(s.high_score, 130);
}

#[test]
fn memory_store_round_trips() {
    let mut store = MemoryHighScore::default();
    assert_eq!(store.load().unwrap(), None);
    store.save(250).unwrap();
    assert_eq!(store.load().unwrap(), Some(250));
}
