use super::*;

const MAX_SATISFACTION: f64 = 100.0;
const SATISFACTION_STEP: f64 = 5.0;
const BONUS_FACTOR: f64 = 1.5;

/// Which kind of message the player gets at the end of a mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SatisfactionTier {
    Accomplished,
    Completed,
    Failed,
}

impl SatisfactionTier {
    pub fn from_value(value: f64) -> Self {
        if value >= 80.0 {
            Self::Accomplished
        } else if value >= 50.0 {
            Self::Completed
        } else {
            Self::Failed
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Self::Accomplished => "Mission Accomplished!",
            Self::Completed => "Mission Completed.",
            Self::Failed => "Mission Failed.",
        }
    }
}

/// How happy the sponsor is, and which of its achievements have been earned
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SatisfactionState {
    value: f64,
    achievements: BTreeMap<String, bool>,
}

impl SatisfactionState {
    /// Starts fully satisfied with every achievement of the sponsor unearned
    pub fn new(sponsor: &SponsorProfile) -> Self {
        Self {
            value: MAX_SATISFACTION,
            achievements: sponsor
                .achievements
                .iter()
                .map(|rule| (rule.name.clone(), false))
                .collect(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Moves satisfaction up if the objective is being met and down otherwise. Meeting the bonus
    /// makes either step larger. Returns the new value, always within 0 to 100.
    pub fn update(&mut self, objective_met: bool, bonus_met: bool) -> f64 {
        let direction = if objective_met { 1.0 } else { -1.0 };
        let modifier = if bonus_met { BONUS_FACTOR } else { 1.0 };
        self.value = (self.value + direction * modifier * SATISFACTION_STEP)
            .max(0.0)
            .min(MAX_SATISFACTION);
        self.value
    }

    /// Marks every rule that the stats now meet. Achievements are never taken away. Returns the
    /// names of those newly earned.
    pub fn check_achievements(
        &mut self,
        rules: &[AchievementRule],
        stats: &SessionStats,
    ) -> Vec<String> {
        let mut earned = Vec::new();
        for rule in rules {
            let entry = self.achievements.entry(rule.name.clone()).or_insert(false);
            if !*entry && rule.is_met(stats) {
                *entry = true;
                earned.push(rule.name.clone());
            }
        }
        earned
    }

    pub fn achievements(&self) -> &BTreeMap<String, bool> {
        &self.achievements
    }

    pub fn tier(&self) -> SatisfactionTier {
        SatisfactionTier::from_value(self.value)
    }
}
