//! Input source boundary
//!
//! The simulation consumes one tracked point (or nothing) per tick, in the
//! field's pixel coordinate space, with no continuity guarantee between
//! ticks. The real tracker (camera + hand landmarks) lives outside this
//! crate; these implementations stand in for it.

use std::fmt;
use std::fs;
use std::path::Path;

use glam::IVec2;
use serde::Deserialize;

/// Produces one sample per tick. `None` means "no detection this tick" -
/// a valid transient state, not an error.
pub trait InputSource {
    fn sample(&mut self) -> Option<IVec2>;
}

/// Deterministic Lissajous sweep across the field, for demo and soak runs
/// when no recorded input is available.
#[derive(Debug, Clone)]
pub struct SweepSource {
    field: IVec2,
    t: f32,
    step: f32,
}

impl SweepSource {
    pub fn new(field: IVec2) -> Self {
        Self {
            field,
            t: 0.0,
            step: 0.02,
        }
    }
}

impl InputSource for SweepSource {
    fn sample(&mut self) -> Option<IVec2> {
        self.t += self.step;
        let half = self.field.as_vec2() * 0.5;
        let x = half.x + half.x * 0.8 * (self.t * 1.3).sin();
        let y = half.y + half.y * 0.8 * (self.t * 0.9).cos();
        Some(IVec2::new(x as i32, y as i32))
    }
}

/// Replays a recorded session: a JSON array of `[x, y]` points and `null`
/// dropouts, one entry per tick. Once exhausted it reports no detection.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaySource {
    samples: Vec<Option<[i32; 2]>>,
    #[serde(skip)]
    cursor: usize,
}

impl ReplaySource {
    pub fn from_path(path: &Path) -> Result<Self, ReplayError> {
        let text = fs::read_to_string(path)?;
        let samples = serde_json::from_str(&text)?;
        Ok(Self { samples, cursor: 0 })
    }
}

impl InputSource for ReplaySource {
    fn sample(&mut self) -> Option<IVec2> {
        let sample = self.samples.get(self.cursor).copied().flatten();
        self.cursor += 1;
        sample.map(|[x, y]| IVec2::new(x, y))
    }
}

/// Failure to open a recorded input file. Fatal at startup.
#[derive(Debug)]
pub enum ReplayError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Io(e) => write!(f, "failed to read replay file: {e}"),
            ReplayError::Parse(e) => write!(f, "failed to parse replay file: {e}"),
        }
    }
}

impl std::error::Error for ReplayError {}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        ReplayError::Io(e)
    }
}

impl From<serde_json::Error> for ReplayError {
    fn from(e: serde_json::Error) -> Self {
        ReplayError::Parse(e)
    }
}
