use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BodyKind {
    Earth,
    Moon,
}

/// A celestial body. Bodies never move during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    pub position: Point3<f64>,
    pub mass: f64,
    pub radius: f64,
}

impl Body {
    pub fn new(kind: BodyKind) -> Self {
        Self {
            kind,
            position: Point3::origin(),
            mass: 0.0,
            radius: 0.0,
        }
    }

    pub fn with_position(mut self, position: Point3<f64>) -> Self {
        self.position = position;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Radius of the sphere the probe is not allowed into
    pub fn exclusion_radius(&self, exclusion_factor: f64) -> f64 {
        self.radius * exclusion_factor
    }
}

/// The Earth at the origin and the Moon out along +X
#[derive(Debug, Clone, PartialEq)]
pub struct Bodies {
    pub earth: Body,
    pub moon: Body,
}

impl Bodies {
    pub fn from_config(conf: &SimConfig) -> Self {
        Self {
            earth: Body::new(BodyKind::Earth)
                .with_mass(conf.earth_mass)
                .with_radius(conf.earth_radius),
            moon: Body::new(BodyKind::Moon)
                .with_position(Point3::new(conf.earth_moon_distance, 0.0, 0.0))
                .with_mass(conf.moon_mass)
                .with_radius(conf.moon_radius),
        }
    }

    /// Earth first, then the Moon
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        std::iter::once(&self.earth).chain(std::iter::once(&self.moon))
    }
}
