//! Tunable quiz parameters.
//!
//! Defaults reproduce the browser game. Frontends may load overrides from
//! JSON; missing fields fall back to the defaults.

use crate::constants::*;
use crate::resolver::ResolverKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizParams {
    pub round_seconds: u32,
    pub exact_match_points: i32,
    pub wrong_click_penalty: i32,
    pub time_expired_penalty: i32,
    pub min_region_size: usize,
    pub resolver: ResolverKind,
    pub shuffle: ShuffleParams,
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_SECONDS,
            exact_match_points: EXACT_MATCH_POINTS,
            wrong_click_penalty: WRONG_CLICK_PENALTY,
            time_expired_penalty: TIME_EXPIRED_PENALTY,
            min_region_size: MIN_REGION_SIZE,
            resolver: ResolverKind::default(),
            shuffle: ShuffleParams::default(),
        }
    }
}

impl QuizParams {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Decoy-cycle pacing. Times are in milliseconds so the JSON form stays flat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShuffleParams {
    /// Typing mode: total length of the decoy cycle.
    pub window_ms: u64,
    /// Typing mode: time between decoy names.
    pub step_ms: u64,
    /// Click modes: first interval between decoy names.
    pub start_interval_ms: u64,
    /// Click modes: interval multiplier applied after every tick.
    pub growth: f64,
    /// Click modes: the cycle ends once the interval exceeds this.
    pub ceiling_ms: u64,
}

impl Default for ShuffleParams {
    fn default() -> Self {
        Self {
            window_ms: SHUFFLE_WINDOW.as_millis() as u64,
            step_ms: SHUFFLE_STEP.as_millis() as u64,
            start_interval_ms: SHUFFLE_START_INTERVAL.as_millis() as u64,
            growth: SHUFFLE_GROWTH,
            ceiling_ms: SHUFFLE_CEILING.as_millis() as u64,
        }
    }
}

impl ShuffleParams {
    #[inline]
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
    #[inline]
    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms.max(1))
    }
    #[inline]
    pub fn start_interval(&self) -> Duration {
        Duration::from_millis(self.start_interval_ms.max(1))
    }
    #[inline]
    pub fn ceiling(&self) -> Duration {
        Duration::from_millis(self.ceiling_ms)
    }
}
