//! All game logic belongs in this module, including the probe, physics, scoring and sponsors

use super::*;

mod autopilot;
mod bodies;
mod boundary;
mod dynamics;
mod game_config;
mod gravity;
mod input;
mod lagrange;
mod session;
mod sponsor;
mod vector;

pub use autopilot::{Autopilot, AutopilotScheme};
pub use bodies::{Bodies, BodyKind};
pub use boundary::{constrain, Contact};
pub use dynamics::{step_probe, ProbeMode, ProbeState};
pub use game_config::{sim_config_entries, SimConfig};
pub use gravity::total_gravity;
#[cfg(test)]
pub use input::Control;
pub use input::InputState;
pub use lagrange::{
    lagrange_points, nearest_point, stability_percent, LagrangePoint, LagrangePointName,
    LagrangeScorer, ScoreUpdate,
};
pub use session::*;
pub use sponsor::*;
pub use vector::{reflect, safe_normalize};
