//! Render sink boundary
//!
//! Pixel-level drawing is outside this crate; a sink gets a read-only
//! snapshot per tick and does whatever presentation it wants with it. The
//! sinks here log a text HUD, which is all the demo binary needs.

use crate::sim::{Paddle, Phase, Puck, Session, SessionState, TargetSet};

/// Read-only view of one tick's state. Never mutates the simulation.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub puck: &'a Puck,
    pub paddle: &'a Paddle,
    pub targets: &'a TargetSet,
    pub state: &'a SessionState,
    pub now: f64,
}

impl<'a> Frame<'a> {
    pub fn of(session: &'a Session, now: f64) -> Self {
        Self {
            puck: &session.puck,
            paddle: &session.paddle,
            targets: &session.targets,
            state: &session.state,
            now,
        }
    }
}

pub trait RenderSink {
    fn present(&mut self, frame: &Frame<'_>);
}

/// Logs the HUD line (score, clock, targets left) at a fixed interval and
/// the terminal banner exactly once.
#[derive(Debug)]
pub struct HudLog {
    interval: f64,
    last_line: f64,
    banner_shown: bool,
}

impl HudLog {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last_line: f64::NEG_INFINITY,
            banner_shown: false,
        }
    }
}

impl RenderSink for HudLog {
    fn present(&mut self, frame: &Frame<'_>) {
        match frame.state.phase() {
            Phase::Running => {
                if frame.now - self.last_line >= self.interval {
                    self.last_line = frame.now;
                    log::info!(
                        "score {} | {:.1}s left | {} targets standing | puck {} paddle {}",
                        frame.state.score,
                        frame.state.remaining(frame.now).max(0.0),
                        frame.targets.remaining(),
                        frame.puck.position,
                        frame.paddle.position,
                    );
                }
            }
            Phase::Won => {
                if !self.banner_shown {
                    self.banner_shown = true;
                    let won = frame.state.won_time.unwrap_or_default();
                    log::info!(
                        "VICTORY: all targets cleared in {won:.2}s, final score {}",
                        frame.state.score
                    );
                }
            }
            Phase::Lost => {
                if !self.banner_shown {
                    self.banner_shown = true;
                    log::info!("TIME UP: final score {}", frame.state.score);
                }
            }
        }
    }
}

/// Discards every frame. For headless soak runs and tests.
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn present(&mut self, _frame: &Frame<'_>) {}
}
