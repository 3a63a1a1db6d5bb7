//! Fundamental geometric and simulation types.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World-space pose of an entity. Units are centimeters, +Z is up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

/// Linear velocity (cm/s). Its presence marks an entity as in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn from_rotation_translation(rotation: Quat, translation: Vec3) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Pose at `translation` facing along `direction` (zero roll).
    pub fn looking_along(direction: Vec3, translation: Vec3) -> Self {
        Self::from_rotation_translation(rotation_from_direction(direction), translation)
    }

    /// Unit vector the entity is facing (local +X).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::X
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Speed magnitude (cm/s).
    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Mirror `direction` about the plane with the given surface normal.
///
/// The normal is normalized first; a zero normal leaves `direction` unchanged.
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    let n = normal.normalize_or_zero();
    direction - 2.0 * direction.dot(n) * n
}

/// Orientation whose local +X axis points along `direction`.
///
/// Built from yaw about +Z and pitch towards +Z, so roll is always zero.
/// A zero direction yields the identity rotation.
pub fn rotation_from_direction(direction: Vec3) -> Quat {
    if direction.length_squared() <= f32::EPSILON {
        return Quat::IDENTITY;
    }
    let yaw = direction.y.atan2(direction.x);
    let pitch = direction.z.atan2(direction.truncate().length());
    Quat::from_rotation_z(yaw) * Quat::from_rotation_y(-pitch)
}
