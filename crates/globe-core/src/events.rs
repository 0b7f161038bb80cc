//! Values the session reports to its presentation layer.

use crate::catalog::{CountryRecord, Region};
use crate::geometry::GeoPoint;
use crate::round::GameMode;
use crate::scoring::ScoreState;
use serde::{Deserialize, Serialize};

/// Arc drawn after a round from where the player pointed to the target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultLine {
    pub from: GeoPoint,
    pub to: GeoPoint,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Typed the right name or clicked inside the target.
    Correct,
    /// Clicked inside some other country.
    WrongCountry { clicked: String, distance_km: f64 },
    /// Precision click scored by distance.
    Located { distance_km: f64 },
    TimedOut,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Correct | Outcome::Located { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub outcome: Outcome,
    pub delta: i32,
    pub score: ScoreState,
    pub new_high_score: bool,
    pub target: CountryRecord,
    pub line: Option<ResultLine>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundEvent {
    ModeSelected { mode: GameMode },
    ShuffleStarted { mode: GameMode, region: Region, pool: usize },
    Decoy { name: String },
    /// The shuffle is over; the player may now answer.
    AwaitingInput { target: CountryRecord, seconds: u32 },
    Countdown { remaining: u32, fraction: f64 },
    /// Click landed on open water; the round stays open.
    Miss { point: GeoPoint },
    /// Precision selection placed or moved; waiting for confirm.
    Selected { point: GeoPoint },
    /// Confirm pressed with nothing selected.
    NothingSelected,
    /// Wrong typed guess; the round stays open.
    Incorrect { guess: String, score: ScoreState },
    Resolved(RoundResult),
    MenuEntered,
}
