use super::*;

/// How a sponsor's special ability changes the probe's velocity each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModifierKind {
    None,
    /// Extra damping while coasting, stronger the larger the value
    StabilityBonus,
    /// Velocity scaled by the value every tick
    ReducedDrift,
    /// Velocity scaled by the value while thrusting
    SpeedBoost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialEffect {
    pub name: String,
    #[serde(rename = "effect")]
    pub kind: ModifierKind,
    pub value: f64,
}

impl SpecialEffect {
    /// What the effect scales velocity by this tick. `stability_damping` is what the stability
    /// bonus divides by its value.
    pub fn velocity_factor(&self, thruster_active: bool, stability_damping: f64) -> f64 {
        match self.kind {
            ModifierKind::None => 1.0,
            ModifierKind::StabilityBonus if !thruster_active => stability_damping / self.value,
            ModifierKind::StabilityBonus => 1.0,
            ModifierKind::ReducedDrift => self.value,
            ModifierKind::SpeedBoost if thruster_active => self.value,
            ModifierKind::SpeedBoost => 1.0,
        }
    }

    /// Applies the effect to a velocity that has already been through the rest of the tick.
    pub fn apply(
        &self,
        velocity: Vector3<f64>,
        thruster_active: bool,
        stability_damping: f64,
    ) -> Vector3<f64> {
        velocity * self.velocity_factor(thruster_active, stability_damping)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objectives {
    pub main: String,
    pub bonus: String,
    /// Seconds before the mission times out
    pub time_limit: f64,
}

/// Weights of the final mission score. A missing multiplier leaves its term out entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Per second of the longest balance streak
    pub stability_multiplier: Option<f64>,
    /// Per unit of distance under 1000 travelled
    pub efficiency_multiplier: Option<f64>,
    /// Per unit of top speed
    pub speed_multiplier: Option<f64>,
    /// Per achievement earned
    pub achievement_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            stability_multiplier: None,
            efficiency_multiplier: None,
            speed_multiplier: None,
            achievement_bonus: 500.0,
        }
    }
}

/// Distance budget the efficiency term is measured against
const EFFICIENCY_BASELINE: f64 = 1000.0;

/// Everything a sponsor brings to a mission. Immutable once a session has started with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorProfile {
    /// Short name used to select the sponsor, such as NASA
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub special: SpecialEffect,
    pub objectives: Objectives,
    #[serde(default)]
    pub scoring: ScoringWeights,
    #[serde(default)]
    pub achievements: Vec<AchievementRule>,
}

impl SponsorProfile {
    pub fn time_limit(&self) -> f64 {
        self.objectives.time_limit
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        let invalid = |reason: String| Err(SessionError::InvalidProfile(self.key.clone(), reason));
        if self.key.trim().is_empty() {
            return invalid("key is empty".to_string());
        }
        let time_limit = self.objectives.time_limit;
        if !(time_limit.is_finite() && time_limit > 0.0) {
            return invalid(format!("time limit {} is not a positive number", time_limit));
        }
        let value = self.special.value;
        if !(value.is_finite() && value > 0.0) {
            return invalid(format!(
                "special effect value {} is not a positive number",
                value
            ));
        }
        let weights = [
            self.scoring.stability_multiplier,
            self.scoring.efficiency_multiplier,
            self.scoring.speed_multiplier,
            Some(self.scoring.achievement_bonus),
        ];
        if weights.iter().flatten().any(|w| !w.is_finite()) {
            return invalid("scoring weights must be finite".to_string());
        }
        let mut names = BTreeSet::new();
        for rule in &self.achievements {
            if !names.insert(rule.name.as_str()) {
                return invalid(format!("achievement {:?} is listed twice", rule.name));
            }
        }
        Ok(())
    }

    /// The sponsor-weighted result of a finished mission, never below 0
    pub fn mission_score(&self, stats: &SessionStats, achievements_earned: usize) -> u64 {
        let weights = &self.scoring;
        let mut score = 0.0;
        if let Some(m) = weights.stability_multiplier {
            score += stats.longest_balance * m;
        }
        if let Some(m) = weights.efficiency_multiplier {
            score += (EFFICIENCY_BASELINE - stats.total_distance) * m;
        }
        if let Some(m) = weights.speed_multiplier {
            score += stats.top_speed * m;
        }
        score += achievements_earned as f64 * weights.achievement_bonus;
        score.floor().max(0.0) as u64
    }
}
