//! Session configuration
//!
//! Every tunable is fixed at session start; nothing here is hot-reloadable.
//! A partial JSON file fills in the rest from defaults.

use std::fmt;
use std::fs;
use std::path::Path;

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// All session-start tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Play field width in pixels
    pub field_width: i32,
    /// Play field height in pixels
    pub field_height: i32,

    /// Puck radius in pixels (never changes during a session)
    pub puck_radius: i32,
    /// Smoothing weight given to the puck's new raw position each tick.
    /// The puck's effective speed is `puck_smoothing * velocity` per tick.
    pub puck_smoothing: f32,
    /// Puck velocity at session start, pixels per tick
    pub initial_puck_velocity: Vec2,

    /// Paddle radius in pixels
    pub paddle_radius: i32,
    /// Smoothing weight given to the raw tracked point. 0.90 means the
    /// paddle converges slowly, damping tracker jitter.
    pub paddle_smoothing: f32,

    /// Side length of each target's square footprint
    pub target_size: i32,
    /// Number of targets scattered at session start
    pub target_count: usize,

    /// Session length in seconds
    pub game_duration: f64,
    /// Points awarded per newly hit target
    pub score_per_target: u32,
    /// Multiplier applied to puck velocity once per newly hit target.
    /// 1.0 leaves the velocity unchanged.
    pub speed_up_factor: f32,
    /// Minimum wall-clock interval between two fired paddle collisions
    pub paddle_cooldown: f64,
    /// How long the outer loop keeps presenting after the session ends
    pub end_grace: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: 640,
            field_height: 480,
            puck_radius: 12,
            puck_smoothing: 0.7,
            initial_puck_velocity: Vec2::new(10.0, 10.0),
            paddle_radius: 16,
            paddle_smoothing: 0.90,
            target_size: 30,
            target_count: 4,
            game_duration: 30.0,
            score_per_target: 1,
            speed_up_factor: 1.0,
            paddle_cooldown: 0.5,
            end_grace: 10.0,
        }
    }
}

impl Config {
    /// Field dimensions as a vector
    pub fn field(&self) -> IVec2 {
        IVec2::new(self.field_width, self.field_height)
    }

    /// Load a config from a JSON file; missing fields take defaults.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Failure to load a config file. Fatal at startup.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config file: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_tuning() {
        let cfg = Config::default();
        assert_eq!(cfg.field(), IVec2::new(640, 480));
        assert_eq!(cfg.puck_radius, 12);
        assert_eq!(cfg.paddle_radius, 16);
        assert_eq!(cfg.target_count, 4);
        assert!((cfg.speed_up_factor - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_json_fills_from_defaults() {
        let cfg: Config = serde_json::from_str(r#"{"target_count": 7}"#).unwrap();
        assert_eq!(cfg.target_count, 7);
        assert_eq!(cfg.field_width, 640);
        assert!((cfg.paddle_smoothing - 0.90).abs() < f32::EPSILON);
    }
}
