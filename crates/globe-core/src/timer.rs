//! Timer ownership between the session and its host.
//!
//! The session never sleeps. It asks the host for one-shot callbacks and
//! hands out a token for each; the host delivers the token back when the
//! delay elapses. Only the most recently armed token is live, so a callback
//! that fires after a new round or a return to the menu is ignored.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(u64);

impl TimerToken {
    #[inline]
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub delay: Duration,
}

/// What the host must do with its pending timer after a session call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimerDirective {
    /// Leave whatever is pending alone.
    #[default]
    Keep,
    /// Cancel anything pending and arm this one.
    Arm(TimerRequest),
    /// Cancel anything pending.
    Cancel,
}

/// The single live timer slot.
#[derive(Debug, Default)]
pub struct TimerSlot {
    next: u64,
    armed: Option<TimerToken>,
}

impl TimerSlot {
    pub fn arm(&mut self, delay: Duration) -> TimerRequest {
        self.next += 1;
        let token = TimerToken(self.next);
        if let Some(prev) = self.armed.replace(token) {
            log::trace!("[timer] superseding {}", prev.0);
        }
        TimerRequest { token, delay }
    }

    /// Invalidate the armed token, if any. Returns whether one was armed.
    pub fn cancel(&mut self) -> bool {
        self.armed.take().is_some()
    }

    /// Consume `token` if it is the live one.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.armed == Some(token) {
            self.armed = None;
            true
        } else {
            log::debug!("[timer] ignoring stale token {}", token.0);
            false
        }
    }

    #[inline]
    pub fn armed(&self) -> Option<TimerToken> {
        self.armed
    }
}
