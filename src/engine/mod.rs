//! Drives sessions without a renderer: pacing, autopilot input, frame output and high scores

use super::*;

#[allow(clippy::module_inception)]
mod engine;
mod engine_config;
mod high_scores;

pub use engine::Engine;
pub use engine_config::{engine_config_entries, EngineConfig};
pub use high_scores::{HighScore, HighScores};
