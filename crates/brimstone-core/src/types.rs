//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 3D position in simulation space (meters, Cartesian, y = up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// 3D velocity in simulation space (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Simulation time tracking — the monotonic clock passed into every system.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f32 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }

    /// Current time in seconds.
    pub fn now(&self) -> f32 {
        self.elapsed_secs
    }
}

/// Pose of a weapon muzzle: where projectiles leave the weapon, and which
/// way the weapon points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MuzzlePose {
    pub position: Vec3,
    /// Aim-forward direction. Must be normalizable.
    pub forward: Vec3,
}

/// Pose of the aim camera, used for trajectory correction so projectiles
/// drift toward the center of the screen despite an off-center muzzle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub forward: Vec3,
}

/// Discrete trigger intent for one simulation tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TriggerIntent {
    /// Trigger was pressed this tick (edge).
    pub pressed: bool,
    /// Trigger is held down.
    pub held: bool,
    /// Trigger was released this tick (edge).
    pub released: bool,
    /// Manual reload is held.
    pub reload_held: bool,
    /// Melee attack was triggered this tick.
    pub melee: bool,
}

/// Spherical interpolation between two directions.
///
/// Interpolates by angle rather than chord, so a weight of 0.5 lands half
/// way around the arc from `a` to `b`. Inputs need not be unit length; the
/// result is normalized.
pub fn slerp_direction(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    let a = a.normalize_or_zero();
    let b = b.normalize_or_zero();
    if a == Vec3::ZERO {
        return b;
    }
    if b == Vec3::ZERO {
        return a;
    }

    let dot = a.dot(b).clamp(-1.0, 1.0);
    let theta = dot.acos();
    if theta < 1e-5 {
        return a;
    }
    // Antiparallel directions have no unique arc; fall back to a lerp
    // through an arbitrary orthogonal so the result is still continuous.
    let sin_theta = theta.sin();
    if sin_theta < 1e-5 {
        return a.lerp(b, t).normalize_or(a);
    }

    let wa = ((1.0 - t) * theta).sin() / sin_theta;
    let wb = (t * theta).sin() / sin_theta;
    (a * wa + b * wb).normalize_or(a)
}

/// Project a vector onto the plane orthogonal to `normal`.
pub fn project_on_plane(v: Vec3, normal: Vec3) -> Vec3 {
    let n = normal.normalize_or_zero();
    v - n * v.dot(n)
}

/// Clamp a vector's magnitude to `max_length`.
pub fn clamp_magnitude(v: Vec3, max_length: f32) -> Vec3 {
    let len_sq = v.length_squared();
    if len_sq > max_length * max_length {
        v * (max_length / len_sq.sqrt())
    } else {
        v
    }
}
