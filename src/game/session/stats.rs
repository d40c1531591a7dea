use super::*;

/// What happened over a whole session, used for achievements and the mission score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Every point the probe has balanced at
    pub visited: BTreeSet<LagrangePointName>,
    pub total_distance: f64,
    /// Units per tick
    pub top_speed: f64,
    /// Closest the probe has been to any Lagrange point
    pub best_precision: Option<f64>,
    /// Longest continuous balance in seconds
    pub longest_balance: f64,
    /// Seconds on the clock when the session ended
    pub elapsed: f64,
    pub won: bool,
}

impl SessionStats {
    /// `travelled` is the distance flown this tick, not counting where a collision moved the
    /// probe
    pub fn record_motion(&mut self, travelled: f64, speed: f64) {
        self.total_distance += travelled;
        if speed > self.top_speed {
            self.top_speed = speed;
        }
    }

    pub fn record_score(&mut self, update: &ScoreUpdate) {
        if let Some(point) = update.tracked {
            self.visited.insert(point);
        }
        if self.best_precision.map_or(true, |best| update.distance < best) {
            self.best_precision = Some(update.distance);
        }
        if update.balance_seconds > self.longest_balance {
            self.longest_balance = update.balance_seconds;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_ulps_eq;

    fn update(tracked: Option<LagrangePointName>, distance: f64, balance: f64) -> ScoreUpdate {
        ScoreUpdate {
            nearest: LagrangePointName::L3,
            distance,
            tracked,
            balance_seconds: balance,
            score_delta: 0.0,
            entered: false,
            won: false,
        }
    }

    #[test]
    fn motion_accumulates_distance_and_top_speed() {
        let mut stats = SessionStats::default();
        stats.record_motion(5.0, 0.2);
        stats.record_motion(1.0, 0.1);
        assert_ulps_eq!(stats.total_distance, 6.0);
        assert_ulps_eq!(stats.top_speed, 0.2);
    }

    #[test]
    fn score_updates_track_bests() {
        let mut stats = SessionStats::default();
        stats.record_score(&update(None, 9.0, 0.0));
        stats.record_score(&update(Some(LagrangePointName::L3), 2.0, 4.0));
        stats.record_score(&update(Some(LagrangePointName::L3), 3.0, 1.0));
        assert_eq!(stats.best_precision, Some(2.0));
        assert_eq!(stats.longest_balance, 4.0);
        assert_eq!(stats.visited.len(), 1);
    }
}
