use super::*;

/// Everything a renderer needs to draw one tick. Vectors are [x, y, z].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub status: SessionStatus,
    pub sponsor: String,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    /// Euler angles of the probe model
    pub rotation: [f64; 3],
    pub mode: ProbeMode,
    pub thruster_active: bool,
    pub nearest_point: Option<LagrangePointName>,
    pub nearest_distance: Option<f64>,
    /// The point being balanced at
    pub balancing_at: Option<LagrangePointName>,
    pub stability_percent: u32,
    /// Close to the nearest point but not yet balanced
    pub approaching: bool,
    /// Near the edge of the play volume
    pub boundary_warning: bool,
    pub elapsed_seconds: f64,
    pub remaining_seconds: f64,
    pub balance_seconds: f64,
    pub score: f64,
    pub satisfaction: f64,
}
