//! Air Puck - a 2D air hockey simulation driven by a tracked-point input stream
//!
//! Core modules:
//! - `sim`: Deterministic simulation (smoothed actors, collisions, session state)
//! - `config`: Session-start tunables, JSON-loadable
//! - `input`: Input source boundary (one tracked point, or nothing, per tick)
//! - `render`: Read-only frame snapshot consumed by a render sink
//!
//! The simulation has no internal clock: wall-clock time is sampled once per
//! tick by the caller and passed in, so cooldowns and the session timer are
//! fully testable with synthetic timestamps.

pub mod config;
pub mod input;
pub mod render;
pub mod sim;

pub use config::Config;
pub use sim::{Session, TickEvents};
