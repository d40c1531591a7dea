use super::*;

/// A logical control the player can hold down
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
    Brake,
}

impl Control {
    /// Maps a browser-style key name to a control
    #[allow(dead_code)]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Self::Forward),
            "ArrowDown" | "s" | "S" => Some(Self::Back),
            "ArrowLeft" | "a" | "A" => Some(Self::Left),
            "ArrowRight" | "d" | "D" => Some(Self::Right),
            "PageUp" | "e" | "E" => Some(Self::Up),
            "PageDown" | "q" | "Q" => Some(Self::Down),
            " " | "Space" | "Shift" => Some(Self::Brake),
            _ => None,
        }
    }

    /// Unit direction this control thrusts in, None for controls that do not thrust
    fn direction(self) -> Option<Vector3<f64>> {
        match self {
            Self::Forward => Some(Vector3::unit_y()),
            Self::Back => Some(-Vector3::unit_y()),
            Self::Left => Some(-Vector3::unit_x()),
            Self::Right => Some(Vector3::unit_x()),
            Self::Up => Some(Vector3::unit_z()),
            Self::Down => Some(-Vector3::unit_z()),
            Self::Brake => None,
        }
    }
}

/// Everything the player (or autopilot) is asking of the probe this tick: held controls plus an
/// analog axis from a joystick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    held: HashSet<Control>,
    axis: Option<Vector3<f64>>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with(mut self, control: Control) -> Self {
        self.press(control);
        self
    }

    pub fn press(&mut self, control: Control) {
        self.held.insert(control);
    }

    #[allow(dead_code)]
    pub fn release(&mut self, control: Control) {
        self.held.remove(&control);
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    /// Sets the analog axis. Its length is the fraction of full thrust and is capped at 1.
    pub fn set_axis(&mut self, axis: Vector3<f64>) {
        self.axis = if axis.magnitude() > EPSILON {
            Some(axis)
        } else {
            None
        };
    }

    /// A virtual joystick in the XY plane. `force` is the fraction of full deflection.
    #[allow(dead_code)]
    pub fn set_joystick(&mut self, angle: f64, force: f64) {
        self.set_axis(Vector3::new(angle.cos(), angle.sin(), 0.0) * force.max(0.0));
    }

    #[allow(dead_code)]
    pub fn clear_axis(&mut self) {
        self.axis = None;
    }

    pub fn is_braking(&self) -> bool {
        self.is_held(Control::Brake)
    }

    /// If any directional control or the axis is in use. Opposite keys held together still count.
    pub fn has_direction(&self) -> bool {
        self.axis.is_some() || self.held.iter().any(|c| c.direction().is_some())
    }

    /// The requested thrust direction with a length of at most 1
    pub fn thrust_direction(&self) -> Vector3<f64> {
        let keys = self
            .held
            .iter()
            .filter_map(|c| c.direction())
            .fold(Vector3::zero(), |sum, dir| sum + dir);
        let total = keys + self.axis.unwrap_or_else(Vector3::zero);
        let len = total.magnitude();
        if len > 1.0 {
            total / len
        } else {
            total
        }
    }
}
