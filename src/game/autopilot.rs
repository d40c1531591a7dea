use super::*;

/// Fraction of the remaining distance the autopilot tries to cover each tick
const KP: f64 = 0.5;
/// Fastest the autopilot will try to fly, in units per tick
const MAX_APPROACH_SPEED: f64 = 0.3;
/// Share of full thrust the autopilot plans to brake with, the rest is left to fight gravity
const BRAKING_MARGIN: f64 = 0.5;
/// How far outside an exclusion zone the autopilot routes around a body
const CLEARANCE: f64 = 1.0;

/// What the autopilot does with the probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutopilotScheme {
    /// Leaves the probe alone
    Off,
    /// Flies to the target point and stays there
    Hold,
    /// Like Hold, but moves on to the next point after every win
    Tour,
}

/// Steers the probe to a Lagrange point by producing the input a player would. Each tick it
/// picks the velocity it wants for the next tick, cancels the gravity the probe is about to
/// feel and asks for the thrust that makes up the difference.
#[derive(Debug, Clone, PartialEq)]
pub struct Autopilot {
    scheme: AutopilotScheme,
    target: LagrangePointName,
}

impl Autopilot {
    pub fn new(scheme: AutopilotScheme, target: LagrangePointName) -> Self {
        Self { scheme, target }
    }

    #[allow(dead_code)]
    pub fn target(&self) -> LagrangePointName {
        self.target
    }

    pub fn set_target(&mut self, target: LagrangePointName) {
        if target != self.target {
            info!("autopilot heading for {}", target);
        }
        self.target = target;
    }

    /// Called when a session ends. Returns if the session should be restarted.
    pub fn on_finish(&mut self, outcome: SessionStatus) -> bool {
        match (self.scheme, outcome) {
            (AutopilotScheme::Tour, SessionStatus::Won) => {
                self.set_target(self.target.next());
                true
            }
            _ => false,
        }
    }

    /// The input to give the session's probe this tick
    pub fn input(&self, session: &Session) -> InputState {
        self.steer(
            session.probe(),
            session.points(),
            session.bodies(),
            &session.sponsor().special,
            session.config(),
        )
    }

    fn steer(
        &self,
        probe: &ProbeState,
        points: &[LagrangePoint],
        bodies: &Bodies,
        special: &SpecialEffect,
        conf: &SimConfig,
    ) -> InputState {
        let mut input = InputState::new();
        if self.scheme == AutopilotScheme::Off {
            return input;
        }
        let target = match points.iter().find(|p| p.name == self.target) {
            Some(point) => point.position,
            None => return input,
        };
        let max_thrust = conf.thrust_acceleration;
        if max_thrust <= 0.0 {
            return input;
        }
        let gravity = total_gravity(probe.position, bodies, conf);
        let thrust_factor = special.velocity_factor(true, conf.stability_damping);
        let coast_factor = special.velocity_factor(false, conf.stability_damping);
        let gain = conf.thrust_damping * thrust_factor;
        let wanted = target_velocity(probe.position, target, bodies, conf, gain);

        let thrust = wanted / gain - probe.velocity - gravity;
        let thrust = if thrust.magnitude() > max_thrust {
            thrust.normalize_to(max_thrust)
        } else {
            thrust
        };
        let thrusting = predict(probe.velocity + gravity + thrust, conf.thrust_damping, conf)
            * thrust_factor;
        let coasting = predict(probe.velocity + gravity, conf.drift_damping, conf) * coast_factor;
        // Sponsors that brake harder while coasting get there sooner by letting go
        if (thrusting - wanted).magnitude() <= (coasting - wanted).magnitude() {
            input.set_axis(thrust / max_thrust);
        }
        input
    }
}

/// Velocity for the next tick: toward the target (or around a body in the way), slowing down
/// early enough that half of full thrust can stop the probe on the point. `gain` is what a
/// thrusting tick scales velocity by.
fn target_velocity(
    position: Point3<f64>,
    target: Point3<f64>,
    bodies: &Bodies,
    conf: &SimConfig,
    gain: f64,
) -> Vector3<f64> {
    let thrust = conf.thrust_acceleration;
    let distance = (target - position).magnitude();
    let mut max_speed = MAX_APPROACH_SPEED;
    if gain > 1.0 {
        // A boost that outgrows thrust can only be held back at low speed
        max_speed = max_speed.min(BRAKING_MARGIN * gain * thrust / (gain - 1.0));
    }
    let speed = max_speed
        .min((BRAKING_MARGIN * thrust * distance).sqrt())
        .min(KP * distance);
    safe_normalize(detour(position, target, bodies, conf) - position) * speed
}

/// Where to head so the straight path does not cut through an exclusion zone. Returns a point
/// beside the first body in the way, or the target itself if the path is clear.
fn detour(
    position: Point3<f64>,
    target: Point3<f64>,
    bodies: &Bodies,
    conf: &SimConfig,
) -> Point3<f64> {
    let path = target - position;
    let length = path.magnitude();
    if length < EPSILON {
        return target;
    }
    let direction = path / length;
    for body in bodies.iter() {
        let along = (body.position - position).dot(direction);
        if along <= 0.0 || along >= length {
            continue;
        }
        let offset = position + direction * along - body.position;
        let exclusion = body.exclusion_radius(conf.exclusion_factor);
        if offset.magnitude() >= exclusion + CLEARANCE {
            continue;
        }
        let mut side = offset;
        if side.magnitude() < EPSILON {
            side = direction.cross(Vector3::unit_z());
        }
        if side.magnitude() < EPSILON {
            side = direction.cross(Vector3::unit_y());
        }
        return body.position + safe_normalize(side) * (exclusion + 2.0 * CLEARANCE);
    }
    target
}

/// Velocity after one tick's damping and soft speed cap
fn predict(velocity: Vector3<f64>, damping: f64, conf: &SimConfig) -> Vector3<f64> {
    let velocity = velocity * damping;
    if velocity.magnitude() > conf.max_velocity {
        velocity * conf.overspeed_damping
    } else {
        velocity
    }
}
