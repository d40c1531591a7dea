use super::*;

/// Every tunable of the simulation. Distances are in game units, velocities in game units per
/// tick, times in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub gravity_constant: f64,
    /// Gravity is computed as if the probe were never closer than this to a body's center
    pub min_gravity_distance: f64,
    pub earth_mass: f64,
    pub moon_mass: f64,
    pub earth_radius: f64,
    pub moon_radius: f64,
    /// The Moon sits this far from the Earth along +X
    pub earth_moon_distance: f64,
    /// Radius of the spherical play volume around the origin
    pub boundary_radius: f64,
    /// A probe leaving the play volume is put back at boundary_radius * boundary_clamp
    pub boundary_clamp: f64,
    /// Exclusion zones extend to body radius * exclusion_factor
    pub exclusion_factor: f64,
    /// Fraction of speed kept when bouncing off the boundary or an exclusion zone
    pub bounce_restitution: f64,
    /// Speed a bounce will never leave the probe below
    pub min_bounce_speed: f64,
    /// Extra damping applied on any tick the probe touched something
    pub contact_damping: f64,
    pub thrust_acceleration: f64,
    pub thrust_damping: f64,
    pub drift_damping: f64,
    pub brake_damping: f64,
    pub max_velocity: f64,
    /// Applied every tick the probe is over max_velocity
    pub overspeed_damping: f64,
    /// Slower than this and the probe is considered stopped
    pub min_velocity: f64,
    /// The damping the stability bonus sponsor effect divides by its value
    pub stability_damping: f64,
    pub balance_threshold: f64,
    pub winning_time: f64,
    /// Points per second when sitting exactly on a Lagrange point
    pub score_rate: f64,
    /// Balancing longer than this meets the sponsor's bonus objective
    pub bonus_balance_time: f64,
    /// Fraction of boundary_radius past which the frame warns about the boundary
    pub boundary_warning: f64,
    pub probe_start: Point3<f64>,
    /// Radians per tick the probe model spins
    pub spin_rate: f64,
    /// How far the probe model tilts per unit of velocity
    pub tilt_factor: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity_constant: 0.1,
            min_gravity_distance: 5.0,
            earth_mass: 1.0,
            moon_mass: 0.0123,
            earth_radius: 5.0,
            moon_radius: 1.5,
            earth_moon_distance: 30.0,
            boundary_radius: 60.0,
            boundary_clamp: 0.99,
            exclusion_factor: 1.2,
            bounce_restitution: 0.8,
            min_bounce_speed: 0.05,
            contact_damping: 0.8,
            thrust_acceleration: 0.02,
            thrust_damping: 0.995,
            drift_damping: 0.998,
            brake_damping: 0.9,
            max_velocity: 0.5,
            overspeed_damping: 0.95,
            min_velocity: 0.001,
            stability_damping: 0.995,
            balance_threshold: 4.0,
            winning_time: 30.0,
            score_rate: 10.0,
            bonus_balance_time: 10.0,
            boundary_warning: 0.9,
            probe_start: Point3::new(0.0, 0.0, 5.0),
            spin_rate: 0.001,
            tilt_factor: 0.1,
        }
    }
}

impl SimConfig {
    /// Catches parameter sets the simulation can not run with
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("min_gravity_distance", self.min_gravity_distance),
            ("earth_radius", self.earth_radius),
            ("moon_radius", self.moon_radius),
            ("earth_moon_distance", self.earth_moon_distance),
            ("boundary_radius", self.boundary_radius),
            ("exclusion_factor", self.exclusion_factor),
            ("max_velocity", self.max_velocity),
            ("balance_threshold", self.balance_threshold),
            ("winning_time", self.winning_time),
        ];
        for (name, value) in &positive {
            if !(value.is_finite() && *value > 0.0) {
                return Err(format!("{} must be greater than 0, not {}", name, value));
            }
        }
        let non_negative = [
            ("gravity_constant", self.gravity_constant),
            ("earth_mass", self.earth_mass),
            ("moon_mass", self.moon_mass),
            ("thrust_acceleration", self.thrust_acceleration),
            ("min_bounce_speed", self.min_bounce_speed),
            ("min_velocity", self.min_velocity),
            ("score_rate", self.score_rate),
            ("bonus_balance_time", self.bonus_balance_time),
        ];
        for (name, value) in &non_negative {
            if !(value.is_finite() && *value >= 0.0) {
                return Err(format!("{} must not be negative, not {}", name, value));
            }
        }
        let factors = [
            ("boundary_clamp", self.boundary_clamp),
            ("bounce_restitution", self.bounce_restitution),
            ("contact_damping", self.contact_damping),
            ("thrust_damping", self.thrust_damping),
            ("drift_damping", self.drift_damping),
            ("brake_damping", self.brake_damping),
            ("overspeed_damping", self.overspeed_damping),
            ("stability_damping", self.stability_damping),
            ("boundary_warning", self.boundary_warning),
        ];
        for (name, value) in &factors {
            if !(*value > 0.0 && *value <= 1.0) {
                return Err(format!("{} must be in (0, 1], not {}", name, value));
            }
        }
        let reach = self.earth_moon_distance + self.moon_radius * self.exclusion_factor;
        if reach >= self.boundary_radius {
            return Err(format!(
                "boundary_radius {} does not contain the Moon's exclusion zone (reaches {})",
                self.boundary_radius, reach
            ));
        }
        if self.probe_start.to_vec().magnitude() > self.boundary_radius {
            return Err(format!(
                "probe_start {:?} is outside the boundary",
                self.probe_start
            ));
        }
        Ok(())
    }
}

fn float_entry(
    name: &'static str,
    help: &'static str,
    default_value: f64,
    allow_zero: bool,
    set: fn(&mut SimConfig, f64),
) -> Box<dyn ConfigEntry> {
    <dyn ConfigEntry>::new_float(name, help, default_value, move |conf, value, source| {
        let valid = value.is_finite() && (value > 0.0 || (allow_zero && value == 0.0));
        if valid {
            set(&mut conf.sim, value);
            Ok(())
        } else {
            Err(format!(
                "{} is {} but must be {}",
                source.unwrap_or("default value"),
                value,
                if allow_zero { "0 or more" } else { "greater than 0" }
            )
            .into())
        }
    })
}

/// Applied in order of returned vec. Only the parameters worth tuning from outside are exposed.
pub fn sim_config_entries() -> Vec<Box<dyn ConfigEntry>> {
    let d = SimConfig::default();
    vec![
        float_entry(
            "gravity_constant",
            "strength of Earth and Moon gravity, 0 turns gravity off",
            d.gravity_constant,
            true,
            |sim, v| sim.gravity_constant = v,
        ),
        float_entry(
            "balance_threshold",
            "how close to a Lagrange point (in units) counts as balanced",
            d.balance_threshold,
            false,
            |sim, v| sim.balance_threshold = v,
        ),
        float_entry(
            "winning_time",
            "seconds of continuous balance needed to win",
            d.winning_time,
            false,
            |sim, v| sim.winning_time = v,
        ),
        float_entry(
            "score_rate",
            "points per second when balanced exactly on a Lagrange point",
            d.score_rate,
            true,
            |sim, v| sim.score_rate = v,
        ),
        float_entry(
            "boundary_radius",
            "radius of the play volume around the Earth",
            d.boundary_radius,
            false,
            |sim, v| sim.boundary_radius = v,
        ),
        float_entry(
            "max_velocity",
            "speed (units per tick) above which the probe is slowed down",
            d.max_velocity,
            false,
            |sim, v| sim.max_velocity = v,
        ),
        float_entry(
            "thrust_acceleration",
            "velocity (units per tick) added each tick the thrusters fire",
            d.thrust_acceleration,
            true,
            |sim, v| sim.thrust_acceleration = v,
        ),
        float_entry(
            "exclusion_factor",
            "exclusion zones extend to body radius times this",
            d.exclusion_factor,
            false,
            |sim, v| sim.exclusion_factor = v,
        ),
    ]
}
