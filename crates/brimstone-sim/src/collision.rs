//! Swept-sphere collision queries over the ECS world.
//!
//! Colliders are snapshotted once per tick before projectiles advance, so
//! every projectile sweeps against the same consistent world state.

use glam::Vec3;
use hecs::{Entity, World};

use brimstone_core::components::{Damageable, PlantSocket};
use brimstone_core::types::Position;

use crate::projectile::Collider;

/// Snapshot of one collider for sweep queries.
#[derive(Debug, Clone, Copy)]
pub struct ColliderShape {
    pub entity: Entity,
    pub center: Vec3,
    pub radius: f32,
    pub is_trigger: bool,
    pub ignore_hits: bool,
    pub owner: Option<Entity>,
    /// Whether the collider's entity carries a damageable capability.
    pub damageable: bool,
    /// Destroy delay if the entity is a plant socket.
    pub plant_delay: Option<f32>,
}

/// A candidate intersection from a sweep, unfiltered.
#[derive(Debug, Clone, Copy)]
pub struct SweepHit {
    pub shape_index: usize,
    /// Distance along the sweep at which the surfaces first touch. Zero
    /// when the sweep started inside the volume.
    pub distance: f32,
    pub point: Vec3,
    pub normal: Vec3,
}

/// Snapshot every collider in the world.
pub fn gather_colliders(world: &World) -> Vec<ColliderShape> {
    let mut shapes = Vec::new();
    for (entity, (pos, collider)) in world.query::<(&Position, &Collider)>().iter() {
        let damageable = world.satisfies::<&Damageable>(entity).unwrap_or(false);
        let plant_delay = world
            .get::<&PlantSocket>(entity)
            .ok()
            .map(|socket| socket.delay_to_destroy);
        shapes.push(ColliderShape {
            entity,
            center: pos.0,
            radius: collider.radius,
            is_trigger: collider.is_trigger,
            ignore_hits: collider.ignore_hits,
            owner: collider.owner,
            damageable,
            plant_delay,
        });
    }
    shapes
}

/// Sweep a sphere of `radius` from `from` to `to` and collect every
/// collider intersected along the way. A radius of zero is a raycast.
/// Trigger volumes are swept like solids; callers apply the hit validity
/// filter afterwards.
pub fn sweep_sphere(shapes: &[ColliderShape], from: Vec3, to: Vec3, radius: f32) -> Vec<SweepHit> {
    let displacement = to - from;
    let length = displacement.length();
    let dir = if length > 1e-6 {
        displacement / length
    } else {
        Vec3::ZERO
    };

    let mut hits = Vec::new();
    for (index, shape) in shapes.iter().enumerate() {
        let combined = radius + shape.radius;
        let offset = from - shape.center;

        // Sweep started inside the volume.
        if offset.length_squared() <= combined * combined {
            let normal = offset.normalize_or(Vec3::Y);
            hits.push(SweepHit {
                shape_index: index,
                distance: 0.0,
                point: shape.center + normal * shape.radius,
                normal,
            });
            continue;
        }
        if length <= 1e-6 {
            continue;
        }

        // Solve |offset + t * dir| = combined for the nearest t in
        // [0, length].
        let b = 2.0 * offset.dot(dir);
        let c = offset.length_squared() - combined * combined;
        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            continue;
        }
        let t = (-b - discriminant.sqrt()) / 2.0;
        if t < 0.0 || t > length {
            continue;
        }

        let at = from + dir * t;
        let normal = (at - shape.center).normalize_or(Vec3::Y);
        hits.push(SweepHit {
            shape_index: index,
            distance: t,
            point: shape.center + normal * shape.radius,
            normal,
        });
    }
    hits
}
