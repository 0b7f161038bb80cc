use crate::config::ShuffleParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Name the highlighted country.
    Typing,
    /// Click inside the named country.
    Click,
    /// Click as close as possible to the named country, then confirm.
    Precision,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::Typing => "typing",
            GameMode::Click => "click",
            GameMode::Precision => "precision",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    MainMenu,
    /// Mode chosen, waiting for a region before the first round.
    Idle,
    Shuffling,
    AwaitingInput,
    Resolved,
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoundPhase::MainMenu => "main menu",
            RoundPhase::Idle => "idle",
            RoundPhase::Shuffling => "shuffling",
            RoundPhase::AwaitingInput => "awaiting input",
            RoundPhase::Resolved => "resolved",
        })
    }
}

/// Decoy cycle progress. Each tick returns the delay to the next one, or
/// `None` once the cycle is over.
#[derive(Clone, Debug, PartialEq)]
pub enum ShufflePacing {
    Window {
        elapsed: Duration,
        window: Duration,
        step: Duration,
    },
    Slowing {
        interval: Duration,
        growth: f64,
        ceiling: Duration,
    },
}

impl ShufflePacing {
    pub fn for_mode(mode: GameMode, params: &ShuffleParams) -> Self {
        match mode {
            GameMode::Typing => ShufflePacing::Window {
                elapsed: Duration::ZERO,
                window: params.window(),
                step: params.step(),
            },
            GameMode::Click | GameMode::Precision => ShufflePacing::Slowing {
                interval: params.start_interval(),
                growth: params.growth.max(1.01),
                ceiling: params.ceiling(),
            },
        }
    }

    /// Delay before the first tick.
    pub fn first_delay(&self) -> Duration {
        match self {
            ShufflePacing::Window { step, .. } => *step,
            ShufflePacing::Slowing { interval, .. } => *interval,
        }
    }

    pub fn tick(&mut self) -> Option<Duration> {
        match self {
            ShufflePacing::Window {
                elapsed,
                window,
                step,
            } => {
                *elapsed += *step;
                (*elapsed < *window).then_some(*step)
            }
            ShufflePacing::Slowing {
                interval,
                growth,
                ceiling,
            } => {
                *interval = interval.mul_f64(*growth);
                (*interval <= *ceiling).then_some(*interval)
            }
        }
    }
}

/// Seconds left in the answering phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    total: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            total: seconds,
        }
    }

    /// One second elapsed. Returns true when time is up.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Remaining share of the round in [0, 1], for a timer bar.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.remaining as f64 / self.total as f64
        }
    }
}
