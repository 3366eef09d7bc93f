//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Wall-clock time is sampled by the caller and passed in, never read here
//! - Seeded RNG only (target placement)
//! - No rendering, input, or platform dependencies

pub mod actors;
pub mod physics;
pub mod session;
pub mod targets;
pub mod tick;

pub use actors::{Paddle, Puck};
pub use physics::CollisionEngine;
pub use session::{Phase, SessionState};
pub use targets::{Target, TargetSet};
pub use tick::{Session, TickEvents};
