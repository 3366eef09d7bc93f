//! Hit targets scattered over the play field
//!
//! Targets are square zones placed once at session start and never moved.
//! A target latches `hit` exactly once; callers score off the list of
//! targets that transitioned during the current tick, never off the full
//! hit set.

use glam::{IVec2, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actors::Puck;

/// One square target zone. `position` is the top-left of its footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub position: IVec2,
    pub size: i32,
    pub hit: bool,
}

impl Target {
    pub fn new(position: IVec2, size: i32) -> Self {
        Self {
            position,
            size,
            hit: false,
        }
    }

    /// Center of the square footprint.
    pub fn center(&self) -> IVec2 {
        self.position + IVec2::splat(self.size / 2)
    }

    /// Whether the puck currently touches this target's acceptance region:
    /// the rounded-rectangle distance from the puck center to the square
    /// footprint within the puck radius, or the puck center within `size/2`
    /// of the target center (a circular region layered on the square one).
    pub fn accepts(&self, puck: &Puck) -> bool {
        let half = self.size / 2;
        let center = self.center();

        let d = (center - puck.position).abs();
        let ds = d - IVec2::splat(half);
        let to_boundary = Vec2::new(ds.x.max(0) as f32, ds.y.max(0) as f32).length();
        let to_center = (puck.position - center).as_vec2().length();

        to_boundary <= puck.radius as f32 || to_center < half as f32
    }
}

/// The fixed collection of targets for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSet {
    pub targets: Vec<Target>,
}

impl TargetSet {
    /// Scatter `count` targets uniformly at random so every footprint fits
    /// inside the field. No overlap guarantee. The RNG is injected so
    /// placement is reproducible under a fixed seed.
    pub fn scatter(count: usize, size: i32, field: IVec2, rng: &mut impl Rng) -> Self {
        let targets = (0..count)
            .map(|_| {
                let x = rng.random_range(0..field.x - size);
                let y = rng.random_range(0..field.y - size);
                Target::new(IVec2::new(x, y), size)
            })
            .collect();
        Self { targets }
    }

    /// Latch any un-hit targets the puck touches and return their indices.
    /// A target can appear in the result at most once over a session.
    pub fn check_collisions(&mut self, puck: &Puck) -> Vec<usize> {
        let mut newly_hit = Vec::new();
        for (index, target) in self.targets.iter_mut().enumerate() {
            if !target.hit && target.accepts(puck) {
                target.hit = true;
                newly_hit.push(index);
            }
        }
        newly_hit
    }

    /// True iff every target has been hit.
    pub fn all_hit(&self) -> bool {
        self.targets.iter().all(|t| t.hit)
    }

    /// Number of targets still standing.
    pub fn remaining(&self) -> usize {
        self.targets.iter().filter(|t| !t.hit).count()
    }
}
