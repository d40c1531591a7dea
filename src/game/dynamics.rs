use super::*;

/// Which damping regime the probe is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProbeMode {
    /// No input has been given yet this session
    Idle,
    Thrusting,
    Drifting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeState {
    pub position: Point3<f64>,
    /// Units per tick
    pub velocity: Vector3<f64>,
    /// Thrust applied on the last tick
    pub acceleration: Vector3<f64>,
    pub thruster_active: bool,
    pub mode: ProbeMode,
    /// Accumulated cosmetic spin about the probe's Y axis
    pub spin: f64,
}

impl ProbeState {
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            velocity: Vector3::zero(),
            acceleration: Vector3::zero(),
            thruster_active: false,
            mode: ProbeMode::Idle,
            spin: 0.0,
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Euler angles (x, y, z) for drawing the probe: it spins about Y and leans into its motion
    pub fn attitude(&self, tilt_factor: f64) -> Vector3<f64> {
        Vector3::new(
            self.velocity.y * tilt_factor,
            self.spin,
            -self.velocity.x * tilt_factor,
        )
    }
}

/// The parts of a tick the rest of the game may want to report on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub gravity: Vector3<f64>,
    /// Length of the move the probe attempted, before any boundary pushed it back
    pub travelled: f64,
    pub contact: Option<Contact>,
}

/// Advances the probe by one tick
pub fn step_probe(
    probe: &mut ProbeState,
    input: &InputState,
    bodies: &Bodies,
    sponsor: &SponsorProfile,
    conf: &SimConfig,
) -> StepOutcome {
    probe.thruster_active = input.has_direction();
    if probe.thruster_active {
        probe.mode = ProbeMode::Thrusting;
    } else if probe.mode != ProbeMode::Idle {
        probe.mode = ProbeMode::Drifting;
    }
    probe.acceleration = input.thrust_direction() * conf.thrust_acceleration;

    let gravity = total_gravity(probe.position, bodies, conf);
    let mut velocity = probe.velocity + gravity;
    if probe.thruster_active {
        velocity += probe.acceleration;
        velocity *= conf.thrust_damping;
    } else {
        velocity *= conf.drift_damping;
    }
    if input.is_braking() {
        velocity *= conf.brake_damping;
    }
    // Soft cap: every tick over the limit takes off a fraction, so speed settles toward it
    if velocity.magnitude() > conf.max_velocity {
        velocity *= conf.overspeed_damping;
    }

    let travelled = velocity.magnitude();
    let candidate = probe.position + velocity;
    let result = constrain(candidate, velocity, bodies, conf);
    probe.position = result.position;
    velocity = result.velocity;
    if let Some(contact) = result.contact {
        velocity *= conf.contact_damping;
        debug!("probe hit {:?} at {:?}", contact, probe.position);
    }
    if velocity.magnitude() < conf.min_velocity {
        velocity = Vector3::zero();
    }

    probe.velocity = sponsor.special.apply(
        velocity,
        probe.thruster_active,
        conf.stability_damping,
    );
    probe.spin += conf.spin_rate;

    StepOutcome {
        gravity,
        travelled,
        contact: result.contact,
    }
}
