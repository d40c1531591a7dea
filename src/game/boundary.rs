use super::*;

/// What the probe ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Contact {
    /// The edge of the spherical play volume
    OuterBoundary,
    /// The exclusion zone around a body
    Exclusion(BodyKind),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryResult {
    pub position: Point3<f64>,
    pub velocity: Vector3<f64>,
    /// None if the candidate position was already valid
    pub contact: Option<Contact>,
}

/// Bounces velocity off a surface. `inward` is the unit normal pointing back into the allowed
/// region. Only a velocity heading out through the surface is reflected; one already heading back
/// in keeps its direction. Either way it loses energy but never drops below the minimum bounce
/// speed, so the probe can not come to rest pressed against a wall.
fn bounce(velocity: Vector3<f64>, inward: Vector3<f64>, conf: &SimConfig) -> Vector3<f64> {
    let reflected = if velocity.dot(inward) < 0.0 {
        reflect(velocity, inward)
    } else {
        velocity
    };
    let damped = reflected * conf.bounce_restitution;
    let speed = damped.magnitude();
    if speed >= conf.min_bounce_speed {
        damped
    } else if speed > EPSILON {
        damped * (conf.min_bounce_speed / speed)
    } else {
        inward * conf.min_bounce_speed
    }
}

/// Keeps the probe inside the play volume and out of the bodies. The outer boundary is checked
/// first, then the exclusion zones in body order. Being exactly on a limit is allowed.
pub fn constrain(
    candidate: Point3<f64>,
    velocity: Vector3<f64>,
    bodies: &Bodies,
    conf: &SimConfig,
) -> BoundaryResult {
    let offset = candidate.to_vec();
    if offset.magnitude() > conf.boundary_radius {
        let outward = safe_normalize(offset);
        return BoundaryResult {
            position: Point3::from_vec(outward * (conf.boundary_radius * conf.boundary_clamp)),
            velocity: bounce(velocity, -outward, conf),
            contact: Some(Contact::OuterBoundary),
        };
    }
    for body in bodies.iter() {
        let exclusion = body.exclusion_radius(conf.exclusion_factor);
        let offset = candidate - body.position;
        if offset.magnitude() < exclusion {
            let outward = safe_normalize(offset);
            return BoundaryResult {
                position: body.position + outward * exclusion,
                velocity: bounce(velocity, outward, conf),
                contact: Some(Contact::Exclusion(body.kind)),
            };
        }
    }
    BoundaryResult {
        position: candidate,
        velocity,
        contact: None,
    }
}
