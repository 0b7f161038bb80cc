//! One player's quiz session: mode, region pool, current target, score and
//! the single live timer. Every input goes through here so a superseded
//! round can never be touched by a late callback.

use crate::atlas::Atlas;
use crate::catalog::{CountryRecord, Region};
use crate::config::QuizParams;
use crate::constants::COUNTDOWN_TICK;
use crate::events::{Outcome, ResultLine, RoundEvent, RoundResult};
use crate::geometry::GeoPoint;
use crate::round::{Countdown, GameMode, RoundPhase, ShufflePacing};
use crate::scoring::{
    haversine_distance_km, score_from_distance, HighScoreStore, ScoreChange, ScoreState,
};
use crate::timer::{TimerDirective, TimerSlot, TimerToken};
use rand::prelude::*;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no game mode selected")]
    NoMode,
    #[error("{action} is not accepted while {phase}")]
    WrongPhase {
        action: &'static str,
        phase: RoundPhase,
    },
    #[error("{action} is not accepted in {mode} mode")]
    WrongMode {
        action: &'static str,
        mode: GameMode,
    },
    #[error("no countries available to pick a target from")]
    EmptyPool,
}

/// Result of one session call: events for the presentation layer and what
/// to do with the host's pending timer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Step {
    pub events: Vec<RoundEvent>,
    pub timer: TimerDirective,
}

impl Step {
    fn event(event: RoundEvent) -> Self {
        Self {
            events: vec![event],
            timer: TimerDirective::Keep,
        }
    }
}

#[derive(Clone, Debug)]
enum Activity {
    None,
    Shuffle(ShufflePacing),
    Answer {
        countdown: Countdown,
        selection: Option<GeoPoint>,
    },
}

enum Tick {
    Shuffle(Option<Duration>),
    Countdown { expired: bool, state: Countdown },
    Nothing,
}

pub struct Session {
    atlas: Atlas,
    params: QuizParams,
    rng: StdRng,
    store: Box<dyn HighScoreStore>,
    score: ScoreState,
    phase: RoundPhase,
    mode: Option<GameMode>,
    region: Region,
    pool: Vec<CountryRecord>,
    target: Option<CountryRecord>,
    activity: Activity,
    timer: TimerSlot,
}

impl Session {
    pub fn new(
        atlas: Atlas,
        params: QuizParams,
        store: Box<dyn HighScoreStore>,
        seed: u64,
    ) -> Self {
        let high_score = match store.load() {
            Ok(v) => v.unwrap_or(0),
            Err(e) => {
                log::warn!("[score] could not read high score: {e:#}");
                0
            }
        };
        Self {
            atlas,
            params,
            rng: StdRng::seed_from_u64(seed),
            store,
            score: ScoreState::with_high_score(high_score),
            phase: RoundPhase::MainMenu,
            mode: None,
            region: Region::World,
            pool: Vec::new(),
            target: None,
            activity: Activity::None,
            timer: TimerSlot::default(),
        }
    }

    // ---------------- Accessors ----------------
    #[inline]
    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }
    #[inline]
    pub fn params(&self) -> &QuizParams {
        &self.params
    }
    #[inline]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }
    #[inline]
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }
    #[inline]
    pub fn score(&self) -> ScoreState {
        self.score
    }
    /// Countries targets are drawn from for the current region.
    #[inline]
    pub fn pool(&self) -> &[CountryRecord] {
        &self.pool
    }
    #[inline]
    pub fn target(&self) -> Option<&CountryRecord> {
        self.target.as_ref()
    }
    #[inline]
    pub fn armed_timer(&self) -> Option<TimerToken> {
        self.timer.armed()
    }

    pub fn remaining_seconds(&self) -> Option<u32> {
        match &self.activity {
            Activity::Answer { countdown, .. } => Some(countdown.remaining()),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<GeoPoint> {
        match &self.activity {
            Activity::Answer { selection, .. } => *selection,
            _ => None,
        }
    }

    // ---------------- Menu ----------------
    pub fn select_mode(&mut self, mode: GameMode) -> Result<Step, SessionError> {
        match self.phase {
            RoundPhase::MainMenu | RoundPhase::Idle => {
                self.mode = Some(mode);
                self.phase = RoundPhase::Idle;
                log::info!("[round] mode {mode}");
                Ok(Step::event(RoundEvent::ModeSelected { mode }))
            }
            phase => Err(SessionError::WrongPhase {
                action: "mode selection",
                phase,
            }),
        }
    }

    /// Pick the region and start the first round.
    pub fn select_region(&mut self, region: Region) -> Result<Step, SessionError> {
        if self.phase != RoundPhase::Idle {
            return Err(SessionError::WrongPhase {
                action: "region selection",
                phase: self.phase,
            });
        }
        if self.mode.is_none() {
            return Err(SessionError::NoMode);
        }
        self.region = region;
        self.pool = self
            .atlas
            .catalog()
            .filter(region, self.params.min_region_size);
        self.start_round()
    }

    pub fn next_round(&mut self) -> Result<Step, SessionError> {
        if self.phase != RoundPhase::Resolved {
            return Err(SessionError::WrongPhase {
                action: "next round",
                phase: self.phase,
            });
        }
        self.start_round()
    }

    /// Abandon whatever is running and go back to mode selection.
    pub fn exit_to_menu(&mut self) -> Step {
        self.timer.cancel();
        self.phase = RoundPhase::MainMenu;
        self.mode = None;
        self.target = None;
        self.activity = Activity::None;
        log::info!("[round] back to menu");
        Step {
            events: vec![RoundEvent::MenuEntered],
            timer: TimerDirective::Cancel,
        }
    }

    fn start_round(&mut self) -> Result<Step, SessionError> {
        let mode = self.mode.ok_or(SessionError::NoMode)?;
        self.timer.cancel();
        let target = self
            .pool
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SessionError::EmptyPool)?;
        log::debug!("[round] target {}", target.name);
        self.target = Some(target);

        let pacing = ShufflePacing::for_mode(mode, &self.params.shuffle);
        let request = self.timer.arm(pacing.first_delay());
        self.activity = Activity::Shuffle(pacing);
        self.phase = RoundPhase::Shuffling;
        Ok(Step {
            events: vec![RoundEvent::ShuffleStarted {
                mode,
                region: self.region,
                pool: self.pool.len(),
            }],
            timer: TimerDirective::Arm(request),
        })
    }

    // ---------------- Timers ----------------
    /// Deliver a timer callback. Stale tokens are ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> Step {
        if !self.timer.fire(token) {
            return Step::default();
        }
        let tick = match &mut self.activity {
            Activity::Shuffle(pacing) => Tick::Shuffle(pacing.tick()),
            Activity::Answer { countdown, .. } => Tick::Countdown {
                expired: countdown.tick(),
                state: *countdown,
            },
            Activity::None => Tick::Nothing,
        };

        match tick {
            Tick::Shuffle(next) => {
                let mut events = Vec::new();
                if let Some(decoy) = self.pool.choose(&mut self.rng) {
                    events.push(RoundEvent::Decoy {
                        name: decoy.name.clone(),
                    });
                }
                match next {
                    Some(delay) => Step {
                        events,
                        timer: TimerDirective::Arm(self.timer.arm(delay)),
                    },
                    None => self.begin_answering(events),
                }
            }
            Tick::Countdown { expired: true, .. } => {
                let Some(target) = self.target.clone() else {
                    return Step::default();
                };
                log::info!("[round] time expired");
                let change = self.score.record_failure(self.params.time_expired_penalty);
                self.resolve(target, Outcome::TimedOut, change, None)
            }
            Tick::Countdown { state, .. } => Step {
                events: vec![RoundEvent::Countdown {
                    remaining: state.remaining(),
                    fraction: state.fraction(),
                }],
                timer: TimerDirective::Arm(self.timer.arm(COUNTDOWN_TICK)),
            },
            Tick::Nothing => Step::default(),
        }
    }

    fn begin_answering(&mut self, mut events: Vec<RoundEvent>) -> Step {
        let seconds = self.params.round_seconds;
        self.activity = Activity::Answer {
            countdown: Countdown::new(seconds),
            selection: None,
        };
        self.phase = RoundPhase::AwaitingInput;
        if let Some(target) = &self.target {
            events.push(RoundEvent::AwaitingInput {
                target: target.clone(),
                seconds,
            });
        }
        Step {
            events,
            timer: TimerDirective::Arm(self.timer.arm(COUNTDOWN_TICK)),
        }
    }

    // ---------------- Player input ----------------
    /// Country under the pointer, for highlighting. Nothing while shuffling.
    pub fn hover(&self, point: GeoPoint) -> Option<&str> {
        if self.phase == RoundPhase::Shuffling {
            return None;
        }
        self.atlas.country_at(point)
    }

    pub fn click(&mut self, point: GeoPoint) -> Result<Step, SessionError> {
        let (mode, target) = self.answering("click")?;
        match mode {
            GameMode::Typing => Err(SessionError::WrongMode {
                action: "click",
                mode,
            }),
            GameMode::Precision => {
                if let Activity::Answer { selection, .. } = &mut self.activity {
                    *selection = Some(point);
                }
                Ok(Step::event(RoundEvent::Selected { point }))
            }
            GameMode::Click => {
                let Some(clicked) = self.atlas.country_at(point).map(str::to_owned) else {
                    log::debug!("[round] click over water at {:.2},{:.2}", point.lat, point.lon);
                    return Ok(Step::event(RoundEvent::Miss { point }));
                };
                if clicked == target.name {
                    let change = self.score.record_success(self.params.exact_match_points);
                    return Ok(self.resolve(target, Outcome::Correct, change, None));
                }
                let from = self
                    .atlas
                    .catalog()
                    .find(&clicked)
                    .map(CountryRecord::centroid)
                    .unwrap_or(point);
                let to = target.centroid();
                let change = self.score.record_failure(self.params.wrong_click_penalty);
                let outcome = Outcome::WrongCountry {
                    clicked,
                    distance_km: haversine_distance_km(from, to),
                };
                Ok(self.resolve(target, outcome, change, Some(ResultLine { from, to })))
            }
        }
    }

    /// Score the pending precision selection.
    pub fn confirm(&mut self) -> Result<Step, SessionError> {
        let (mode, target) = self.answering("confirm")?;
        if mode != GameMode::Precision {
            return Err(SessionError::WrongMode {
                action: "confirm",
                mode,
            });
        }
        let Some(from) = self.selection() else {
            return Ok(Step::event(RoundEvent::NothingSelected));
        };
        let to = target.centroid();
        let distance_km = haversine_distance_km(from, to);
        let change = self.score.record_success(score_from_distance(distance_km));
        log::info!("[round] located {:.0} km off, +{}", distance_km, change.delta);
        Ok(self.resolve(
            target,
            Outcome::Located { distance_km },
            change,
            Some(ResultLine { from, to }),
        ))
    }

    /// Compare a typed name against the target, ignoring case and
    /// surrounding whitespace. A wrong guess keeps the round open.
    pub fn submit_guess(&mut self, guess: &str) -> Result<Step, SessionError> {
        let (mode, target) = self.answering("typed guess")?;
        if mode != GameMode::Typing {
            return Err(SessionError::WrongMode {
                action: "typed guess",
                mode,
            });
        }
        if guess.trim().to_lowercase() == target.name.to_lowercase() {
            let change = self.score.record_success(self.params.exact_match_points);
            return Ok(self.resolve(target, Outcome::Correct, change, None));
        }
        self.score.record_miss();
        Ok(Step::event(RoundEvent::Incorrect {
            guess: guess.to_string(),
            score: self.score,
        }))
    }

    fn answering(&self, action: &'static str) -> Result<(GameMode, CountryRecord), SessionError> {
        if self.phase != RoundPhase::AwaitingInput {
            return Err(SessionError::WrongPhase {
                action,
                phase: self.phase,
            });
        }
        let mode = self.mode.ok_or(SessionError::NoMode)?;
        let target = self.target.clone().ok_or(SessionError::EmptyPool)?;
        Ok((mode, target))
    }

    fn resolve(
        &mut self,
        target: CountryRecord,
        outcome: Outcome,
        change: ScoreChange,
        line: Option<ResultLine>,
    ) -> Step {
        self.timer.cancel();
        self.activity = Activity::None;
        self.phase = RoundPhase::Resolved;
        if change.new_high_score {
            if let Err(e) = self.store.save(self.score.high_score) {
                log::warn!("[score] could not save high score: {e:#}");
            }
        }
        log::info!(
            "[score] {:+} -> {} (streak {})",
            change.delta,
            self.score.score,
            self.score.streak
        );
        Step {
            events: vec![RoundEvent::Resolved(RoundResult {
                outcome,
                delta: change.delta,
                score: self.score,
                new_high_score: change.new_high_score,
                target,
                line,
            })],
            timer: TimerDirective::Cancel,
        }
    }
}
