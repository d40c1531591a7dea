use super::*;

/// How a mission ended, produced once when the session reaches Won or TimedOut
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionReport {
    pub sponsor: String,
    pub outcome: SessionStatus,
    pub tier: SatisfactionTier,
    pub headline: String,
    pub satisfaction: f64,
    /// Points from balancing
    pub score: f64,
    /// Final sponsor-weighted score
    pub mission_score: u64,
    pub achievements: Vec<String>,
    pub stats: SessionStats,
}

impl fmt::Display for MissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} mission {:?} after {:.1}s, satisfaction {:.0}%, mission score {}",
            self.headline,
            self.sponsor,
            self.outcome,
            self.stats.elapsed,
            self.satisfaction,
            self.mission_score,
        )?;
        if !self.achievements.is_empty() {
            write!(f, ", achievements: {}", self.achievements.join(", "))?;
        }
        Ok(())
    }
}
