use super::*;

/// What an achievement measures. Each is compared against the rule's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    /// Longest balance streak in seconds, strictly more than the target
    StabilityTimeOver,
    VisitedPointsAtLeast,
    /// Closest approach to any Lagrange point, strictly less than the target
    PrecisionUnder,
    TotalDistanceUnder,
    TotalDistanceOver,
    TopSpeedOver,
    TopSpeedUnder,
    /// Won with no more than the target seconds on the clock
    FinishedWithin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementRule {
    pub name: String,
    pub criterion: Criterion,
    pub target: f64,
}

impl AchievementRule {
    pub fn new(name: &str, criterion: Criterion, target: f64) -> Self {
        Self {
            name: name.to_string(),
            criterion,
            target,
        }
    }

    pub fn is_met(&self, stats: &SessionStats) -> bool {
        let target = self.target;
        match self.criterion {
            Criterion::StabilityTimeOver => stats.longest_balance > target,
            Criterion::VisitedPointsAtLeast => stats.visited.len() as f64 >= target,
            Criterion::PrecisionUnder => stats.best_precision.map_or(false, |p| p < target),
            Criterion::TotalDistanceUnder => stats.total_distance < target,
            Criterion::TotalDistanceOver => stats.total_distance > target,
            Criterion::TopSpeedOver => stats.top_speed > target,
            Criterion::TopSpeedUnder => stats.top_speed < target,
            Criterion::FinishedWithin => stats.won && stats.elapsed <= target,
        }
    }
}
