//! Per-tick orchestration
//!
//! One input sample drives one simulation tick, always in the same order:
//! paddle follow, puck advance, wall bounce, paddle bounce, target check,
//! scoring, end-of-session check. Each component gets the aggregate by
//! exclusive reference; nothing aliases across steps.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actors::{Paddle, Puck};
use super::physics::CollisionEngine;
use super::session::SessionState;
use super::targets::TargetSet;
use crate::config::Config;

/// What happened during one tick, for callers that react to it (HUD,
/// effects). The scoring side effects have already been applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickEvents {
    /// A paddle collision fired this tick
    pub paddle_hit: bool,
    /// Indices of targets that transitioned to hit this tick
    pub newly_hit: Vec<usize>,
    /// The session reached its terminal state this tick
    pub just_ended: bool,
}

/// One complete session: configuration plus every piece of mutable
/// simulation state, owned exclusively by the driving loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub config: Config,
    pub puck: Puck,
    pub paddle: Paddle,
    pub targets: TargetSet,
    pub engine: CollisionEngine,
    pub state: SessionState,
}

impl Session {
    /// Build a session. `seed` fixes target placement; `now` is the
    /// wall-clock start time.
    pub fn new(config: Config, seed: u64, now: f64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let puck = Puck::new(&config);
        let paddle = Paddle::new(&config);
        let targets = TargetSet::scatter(
            config.target_count,
            config.target_size,
            config.field(),
            &mut rng,
        );
        let engine = CollisionEngine::new(config.paddle_cooldown);
        let state = SessionState::new(now, config.game_duration);
        Self {
            config,
            puck,
            paddle,
            targets,
            engine,
            state,
        }
    }

    /// Advance one tick. `input` is the tracked point for this tick, or
    /// `None` when the tracker lost the hand (the paddle then keeps its
    /// prior position). `now` is wall-clock seconds, sampled once by the
    /// caller and shared by every time comparison in the tick.
    ///
    /// The simulation keeps running after the session ends; only the outer
    /// loop decides when to stop ticking.
    pub fn tick(&mut self, input: Option<IVec2>, now: f64) -> TickEvents {
        let field = self.config.field();
        let mut events = TickEvents::default();

        if let Some(raw) = input {
            self.paddle.follow(raw, field);
        }

        self.puck.advance();
        self.engine.bounce_walls(&mut self.puck, field);
        events.paddle_hit = self.engine.bounce_paddle(&mut self.puck, &self.paddle, now);

        events.newly_hit = self.targets.check_collisions(&self.puck);
        for _ in &events.newly_hit {
            self.state.add_score(self.config.score_per_target);
            self.puck.scale_velocity(self.config.speed_up_factor);
        }

        let was_over = self.state.game_over;
        self.state.check_game_end(self.targets.all_hit(), now);
        events.just_ended = self.state.game_over && !was_over;

        events
    }
}
