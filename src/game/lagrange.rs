use super::*;

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LagrangePointName {
    L1,
    L2,
    L3,
    L4,
    L5,
}

impl LagrangePointName {
    /// In the order points are considered when finding the nearest one
    pub const ALL: [LagrangePointName; 5] = [Self::L1, Self::L2, Self::L3, Self::L4, Self::L5];

    /// The point after this one, wrapping around from L5 to L1
    pub fn next(self) -> Self {
        match self {
            Self::L1 => Self::L2,
            Self::L2 => Self::L3,
            Self::L3 => Self::L4,
            Self::L4 => Self::L5,
            Self::L5 => Self::L1,
        }
    }
}

impl fmt::Display for LagrangePointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for LagrangePointName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|name| name.to_string().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("{:?} is not a Lagrange point (expected L1 to L5)", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagrangePoint {
    pub name: LagrangePointName,
    pub position: Point3<f64>,
}

/// The five Lagrange points of an Earth at the origin and a Moon `distance` along +X. L1 and L2
/// use the game's simplified 0.85 and 1.15 fractions rather than solving the quintic.
pub fn lagrange_points(distance: f64) -> [LagrangePoint; 5] {
    let triangle_height = distance * 3f64.sqrt() / 2.0;
    let at = |name, x, y| LagrangePoint {
        name,
        position: Point3::new(x, y, 0.0),
    };
    [
        at(LagrangePointName::L1, distance * 0.85, 0.0),
        at(LagrangePointName::L2, distance * 1.15, 0.0),
        at(LagrangePointName::L3, -distance, 0.0),
        at(LagrangePointName::L4, distance * 0.5, triangle_height),
        at(LagrangePointName::L5, distance * 0.5, -triangle_height),
    ]
}

/// Returns the closest point and the distance to it. On a tie the earlier point wins.
pub fn nearest_point(
    position: Point3<f64>,
    points: &[LagrangePoint],
) -> Option<(LagrangePointName, f64)> {
    let mut best: Option<(LagrangePointName, f64)> = None;
    for point in points {
        let distance = position.distance(point.position);
        match best {
            Some((_, best_distance)) if best_distance <= distance => (),
            _ => best = Some((point.name, distance)),
        }
    }
    best
}

/// How centered the probe is on a point, 100 at the center and 0 at or past the threshold
pub fn stability_percent(distance: f64, threshold: f64) -> u32 {
    if threshold <= 0.0 || distance >= threshold {
        0
    } else {
        ((1.0 - distance / threshold) * 100.0).floor().max(0.0) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreUpdate {
    pub nearest: LagrangePointName,
    pub distance: f64,
    /// The point being balanced at, if any
    pub tracked: Option<LagrangePointName>,
    pub balance_seconds: f64,
    pub score_delta: f64,
    /// If the probe started balancing at a point this update
    pub entered: bool,
    pub won: bool,
}

/// Tracks which Lagrange point the probe is balancing at and for how long
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LagrangeScorer {
    tracked: Option<LagrangePointName>,
    balance_seconds: f64,
}

impl LagrangeScorer {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn balance_seconds(&self) -> f64 {
        self.balance_seconds
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Scores one tick. `points` must not be empty. Balance time and score only accrue while the
    /// probe stays near the same point it was near on the previous update.
    pub fn update(
        &mut self,
        position: Point3<f64>,
        points: &[LagrangePoint],
        dt: f64,
        conf: &SimConfig,
    ) -> ScoreUpdate {
        let (nearest, distance) =
            nearest_point(position, points).unwrap_or((LagrangePointName::L1, std::f64::INFINITY));
        let mut score_delta = 0.0;
        let mut entered = false;
        if distance < conf.balance_threshold {
            if self.tracked == Some(nearest) {
                self.balance_seconds += dt;
                score_delta = conf.score_rate * (1.0 - distance / conf.balance_threshold) * dt;
            } else {
                if let Some(previous) = self.tracked {
                    debug!("probe switched from {} to {}", previous, nearest);
                }
                self.tracked = Some(nearest);
                self.balance_seconds = 0.0;
                entered = true;
            }
        } else {
            if let Some(previous) = self.tracked {
                trace!("probe drifted away from {}", previous);
            }
            self.tracked = None;
            self.balance_seconds = 0.0;
        }
        ScoreUpdate {
            nearest,
            distance,
            tracked: self.tracked,
            balance_seconds: self.balance_seconds,
            score_delta,
            entered,
            won: self.tracked.is_some() && self.balance_seconds >= conf.winning_time,
        }
    }
}
