//! Session state machine: score, timer, win/loss latch
//!
//! `Running -> Ended(victory | defeat)`, and `Ended` is terminal: once
//! `game_over` latches, nothing here ever changes again. Victory is checked
//! before timeout, so clearing the last target on the final tick still wins.

use serde::{Deserialize, Serialize};

/// View of the session state machine for consumers (HUD, outer loop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    Won,
    Lost,
}

/// Score and timing for one session. All time arguments are wall-clock
/// seconds sampled once per tick by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Monotonically non-decreasing score
    pub score: u32,
    /// Wall-clock time the session started
    pub started_at: f64,
    /// Session length in seconds
    pub duration: f64,
    /// One-way latch; never resets
    pub game_over: bool,
    /// Set at most once, in the same transition as `game_over`
    pub victory: bool,
    /// Elapsed time at the moment of victory, frozen forever
    pub won_time: Option<f64>,
}

impl SessionState {
    pub fn new(now: f64, duration: f64) -> Self {
        Self {
            score: 0,
            started_at: now,
            duration,
            game_over: false,
            victory: false,
            won_time: None,
        }
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.started_at
    }

    /// Seconds left on the clock; negative once time is up.
    pub fn remaining(&self, now: f64) -> f64 {
        self.duration - self.elapsed(now)
    }

    pub fn is_time_up(&self, now: f64) -> bool {
        self.elapsed(now) >= self.duration
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Evaluate the end-of-session transition once per tick. A no-op once
    /// the session has ended.
    pub fn check_game_end(&mut self, all_targets_hit: bool, now: f64) {
        if self.game_over {
            return;
        }
        if all_targets_hit {
            self.won_time = Some(self.elapsed(now));
            self.victory = true;
            self.game_over = true;
        } else if self.is_time_up(now) {
            self.game_over = true;
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.game_over {
            Phase::Running
        } else if self.victory {
            Phase::Won
        } else {
            Phase::Lost
        }
    }
}
