use serde::{Deserialize, Serialize};

/// One of the three world (or box-local) axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Euler rotation in radians.
///
/// Components are applied X first, then Y, then Z (`R = Rz * Ry * Rx`).
/// Every consumer of a box rotation in this workspace uses that order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A rotation with only `axis` set.
    pub fn about(axis: Axis, angle: f64) -> Self {
        Self::ZERO.with(axis, angle)
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn with(mut self, axis: Axis, angle: f64) -> Self {
        match axis {
            Axis::X => self.x = angle,
            Axis::Y => self.y = angle,
            Axis::Z => self.z = angle,
        }
        self
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

/// Rotation as it may appear in stored project data.
///
/// Older files stored a single yaw angle; newer ones store the full triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RotationInput {
    /// Legacy yaw-only rotation about Y.
    Legacy(f64),
    Euler(Rotation3),
}

impl From<RotationInput> for Rotation3 {
    fn from(input: RotationInput) -> Self {
        match input {
            RotationInput::Legacy(yaw) => Rotation3::new(0.0, yaw, 0.0),
            RotationInput::Euler(r) => r,
        }
    }
}

impl From<Rotation3> for RotationInput {
    fn from(r: Rotation3) -> Self {
        RotationInput::Euler(r)
    }
}

/// Serde adapter so records normalize legacy rotations at ingestion.
pub(crate) fn deserialize_rotation<'de, D>(deserializer: D) -> Result<Rotation3, D::Error>
where
    D: serde::Deserializer<'de>,
{
    RotationInput::deserialize(deserializer).map(Rotation3::from)
}
