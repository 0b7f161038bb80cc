use crate::constants::{
    EARTH_RADIUS_KM, EXACT_MATCH_POINTS, FULL_CREDIT_RADIUS_KM, SCORE_DECAY_KM,
    TIME_EXPIRED_PENALTY, WRONG_CLICK_PENALTY,
};
use crate::geometry::GeoPoint;
use serde::{Deserialize, Serialize};

/// Great-circle distance in kilometres.
pub fn haversine_distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Precision-mode points: 100 inside the full-credit radius, otherwise
/// exponential decay over distance, never below zero.
pub fn score_from_distance(distance_km: f64) -> i32 {
    if distance_km < FULL_CREDIT_RADIUS_KM {
        return 100;
    }
    let points = (100.0 * (-distance_km / SCORE_DECAY_KM).exp()).round();
    if points.is_finite() {
        points.clamp(0.0, 100.0) as i32
    } else {
        0
    }
}

#[inline]
pub fn score_exact_match() -> i32 {
    EXACT_MATCH_POINTS
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyKind {
    WrongClick,
    TimeExpired,
}

#[inline]
pub fn penalty(kind: PenaltyKind) -> i32 {
    match kind {
        PenaltyKind::WrongClick => WRONG_CLICK_PENALTY,
        PenaltyKind::TimeExpired => TIME_EXPIRED_PENALTY,
    }
}

/// Running totals for one play session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: i32,
    pub streak: u32,
    pub high_score: i32,
}

/// What a single scoring update did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreChange {
    pub delta: i32,
    pub new_high_score: bool,
}

impl ScoreState {
    pub fn with_high_score(high_score: i32) -> Self {
        Self {
            high_score,
            ..Self::default()
        }
    }

    pub fn record_success(&mut self, points: i32) -> ScoreChange {
        self.streak += 1;
        self.apply(points)
    }

    pub fn record_failure(&mut self, delta: i32) -> ScoreChange {
        self.streak = 0;
        self.apply(delta)
    }

    /// Streak reset without a score change (incorrect typed guess).
    pub fn record_miss(&mut self) -> ScoreChange {
        self.record_failure(0)
    }

    fn apply(&mut self, delta: i32) -> ScoreChange {
        self.score += delta;
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        ScoreChange {
            delta,
            new_high_score,
        }
    }
}

/// Where the best score lives between sessions.
pub trait HighScoreStore {
    fn load(&self) -> anyhow::Result<Option<i32>>;
    fn save(&mut self, high_score: i32) -> anyhow::Result<()>;
}

/// Keeps the high score for the lifetime of the process only.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryHighScore {
    value: Option<i32>,
}

impl MemoryHighScore {
    pub fn new(value: Option<i32>) -> Self {
        Self { value }
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> anyhow::Result<Option<i32>> {
        Ok(self.value)
    }

    fn save(&mut self, high_score: i32) -> anyhow::Result<()> {
        self.value = Some(high_score);
        Ok(())
    }
}
