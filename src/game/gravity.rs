use super::*;

/// Acceleration (per tick) pulling a probe at `probe` toward a body. The distance used in the
/// inverse square law never goes below `min_distance`, so the pull stays finite even when the
/// probe is at the body's center.
pub fn gravity_force(
    probe: Point3<f64>,
    body: Point3<f64>,
    body_mass: f64,
    gravity_constant: f64,
    min_distance: f64,
) -> Vector3<f64> {
    let direction = body - probe;
    let distance = direction.magnitude().max(min_distance);
    let magnitude = gravity_constant * body_mass / (distance * distance);
    safe_normalize(direction) * magnitude
}

/// Sum of the pull of every body
pub fn total_gravity(probe: Point3<f64>, bodies: &Bodies, conf: &SimConfig) -> Vector3<f64> {
    bodies
        .iter()
        .map(|body| {
            gravity_force(
                probe,
                body.position,
                body.mass,
                conf.gravity_constant,
                conf.min_gravity_distance,
            )
        })
        .fold(Vector3::zero(), |total, force| total + force)
}
