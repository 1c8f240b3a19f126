//! Projectile and collider data — state that references other entities.
//!
//! Stored as ECS components but defined here (not in brimstone-core)
//! because they hold `hecs::Entity` references.

use std::collections::HashSet;

use glam::Vec3;
use hecs::Entity;

use brimstone_core::enums::ProjectilePhase;

/// A collision volume in the world. Colliders are their own entities,
/// positioned by their `Position` component.
#[derive(Debug, Clone, Copy)]
pub struct Collider {
    pub radius: f32,
    /// Trigger volumes are swept like solids but only count as hits when
    /// they carry a damageable capability.
    pub is_trigger: bool,
    /// Explicit "never report hits against this" marker.
    pub ignore_hits: bool,
    /// The actor this volume belongs to, if any. Used to build a
    /// projectile's spawn-time ignore set.
    pub owner: Option<Entity>,
}

/// Pending trajectory-correction drift toward the aim-camera center line.
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryCorrection {
    /// Full correction computed at spawn: the camera-to-muzzle offset
    /// projected onto the plane orthogonal to the aim-forward vector.
    pub full: Vec3,
    /// Portion already applied. Consumed proportionally to distance
    /// traveled, clamped so it never overshoots.
    pub consumed: Vec3,
}

impl TrajectoryCorrection {
    pub fn finished(&self) -> bool {
        self.consumed.length_squared() >= self.full.length_squared()
    }
}

/// Contact with a plant socket ("spawn-damageable" trigger volume),
/// remembered by the hit filter even though the volume itself is not a
/// valid hit.
#[derive(Debug, Clone, Copy)]
pub struct PlantContact {
    pub socket: Entity,
    /// Time the socket contact was recorded.
    pub planted_at: f32,
    /// Destroy delay, captured from the socket at contact time.
    pub delay_to_destroy: f32,
}

/// Per-projectile flight state. Owned by the simulation once spawned; the
/// firing weapon holds no reference after spawn.
#[derive(Debug, Clone)]
pub struct ProjectileState {
    /// The firer. Excluded from collision and credited for damage.
    pub owner: Entity,
    pub phase: ProjectilePhase,
    /// Orientation: forward tracks velocity while flying; up aligns with
    /// the surface normal once planted.
    pub forward: Vec3,
    pub up: Vec3,
    /// Time the projectile was fired.
    pub shoot_time: f32,
    /// Muzzle world velocity at fire time.
    pub inherited_muzzle_velocity: Vec3,
    /// Root position at the end of the previous tick, for swept collision.
    pub last_root_position: Vec3,
    pub correction: Option<TrajectoryCorrection>,
    /// Colliders excluded from hit detection. Built once at spawn from the
    /// owner's collision volumes; immutable thereafter.
    pub ignored: HashSet<Entity>,
    /// Piercing projectiles accumulate every damageable target they have
    /// overlapped. Mutated only by this projectile's own sweep.
    pub overlaps: Vec<Entity>,
    pub plant: Option<PlantContact>,
}

impl ProjectileState {
    pub fn new(owner: Entity, forward: Vec3, now: f32, inherited: Vec3, root: Vec3) -> Self {
        Self {
            owner,
            phase: ProjectilePhase::Flying,
            forward,
            up: Vec3::Y,
            shoot_time: now,
            inherited_muzzle_velocity: inherited,
            last_root_position: root,
            correction: None,
            ignored: HashSet::new(),
            overlaps: Vec::new(),
            plant: None,
        }
    }
}
