//! Puck and paddle - the two smoothed actors
//!
//! Both move by the same exponential smoothing step: the displayed position
//! goes a fraction `alpha` of the way toward a raw target value each tick,
//! then truncates to integer pixel coordinates. The puck feeds its own
//! `position + velocity` through that step, so its effective speed is
//! `alpha * velocity` per tick - a deliberate tuning choice, not a bug.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Smooth `current` toward `raw` and truncate to pixel coordinates.
#[inline]
fn smooth_toward(current: IVec2, raw: Vec2, alpha: f32) -> Vec2 {
    current.as_vec2() * (1.0 - alpha) + raw * alpha
}

/// The free-moving puck. Owned by the simulation; the collision engine
/// mutates its position and velocity, nothing else does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puck {
    pub position: IVec2,
    pub velocity: Vec2,
    pub radius: i32,
    pub smoothing: f32,
}

impl Puck {
    /// Start the puck at the center of the field.
    pub fn new(config: &Config) -> Self {
        Self {
            position: config.field() / 2,
            velocity: config.initial_puck_velocity,
            radius: config.puck_radius,
            smoothing: config.puck_smoothing,
        }
    }

    /// Advance one tick: treat `position + velocity` as the raw candidate
    /// and smooth toward it. Wall response clamps the result in the same
    /// tick if it would leave the field.
    pub fn advance(&mut self) {
        let raw = self.position.as_vec2() + self.velocity;
        self.position = smooth_toward(self.position, raw, self.smoothing).as_ivec2();
    }

    /// Per-hit velocity hook. Identity when `factor` is 1.0.
    pub fn scale_velocity(&mut self, factor: f32) {
        self.velocity *= factor;
    }
}

/// The player's paddle, driven by the tracked input point. If no point is
/// available this tick the paddle simply keeps its prior position; it is
/// never re-smoothed toward a stale target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub position: IVec2,
    pub radius: i32,
    pub smoothing: f32,
}

impl Paddle {
    /// Start the paddle tucked into the top-left corner.
    pub fn new(config: &Config) -> Self {
        let r = config.paddle_radius;
        Self {
            position: IVec2::splat(r + 5),
            radius: r,
            smoothing: config.paddle_smoothing,
        }
    }

    /// Smooth toward the raw tracked point, then clamp each axis to
    /// `[radius+1, dim-radius-1]` so the paddle never pokes out of the field.
    pub fn follow(&mut self, raw: IVec2, field: IVec2) {
        let mut next = smooth_toward(self.position, raw.as_vec2(), self.smoothing);
        let r = self.radius as f32;
        next.x = next.x.clamp(r + 1.0, field.x as f32 - r - 1.0);
        next.y = next.y.clamp(r + 1.0, field.y as f32 - r - 1.0);
        self.position = next.as_ivec2();
    }
}
