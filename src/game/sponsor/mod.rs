//! Sponsors pick the mission's time limit, special ability and how the result is scored

use super::*;

mod achievements;
mod catalog;
mod profile;
mod satisfaction;

pub use achievements::{AchievementRule, Criterion};
pub use catalog::SponsorCatalog;
pub use profile::{ModifierKind, Objectives, ScoringWeights, SpecialEffect, SponsorProfile};
pub use satisfaction::{SatisfactionState, SatisfactionTier};
