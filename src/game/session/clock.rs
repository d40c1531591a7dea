use super::*;

/// Time and score of the current session
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionClock {
    pub elapsed_seconds: f64,
    pub balance_seconds: f64,
    pub score: f64,
    pub current_point: Option<LagrangePointName>,
    pub active: bool,
}

impl SessionClock {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Never negative
    pub fn remaining_seconds(&self, time_limit: f64) -> f64 {
        (time_limit - self.elapsed_seconds).max(0.0)
    }
}
