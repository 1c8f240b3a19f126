//! Helpers for populating the world with collision geometry and targets.

use glam::Vec3;
use hecs::{Entity, World};

use brimstone_core::components::{Damageable, PlantSocket};
use brimstone_core::types::Position;

use crate::projectile::Collider;

/// A damageable target with a solid collision volume.
pub fn spawn_target(world: &mut World, position: Vec3, radius: f32, health: f32) -> Entity {
    world.spawn((
        Position(position),
        Collider {
            radius,
            is_trigger: false,
            ignore_hits: false,
            owner: None,
        },
        Damageable::new(health),
    ))
}

/// Solid geometry that stops projectiles but takes no damage.
pub fn spawn_surface(world: &mut World, position: Vec3, radius: f32) -> Entity {
    world.spawn((
        Position(position),
        Collider {
            radius,
            is_trigger: false,
            ignore_hits: false,
            owner: None,
        },
    ))
}

/// Geometry explicitly marked to never report hits.
pub fn spawn_ignored_surface(world: &mut World, position: Vec3, radius: f32) -> Entity {
    world.spawn((
        Position(position),
        Collider {
            radius,
            is_trigger: false,
            ignore_hits: true,
            owner: None,
        },
    ))
}

/// A trigger volume planting projectiles can attach to.
pub fn spawn_plant_socket(
    world: &mut World,
    position: Vec3,
    radius: f32,
    delay_to_destroy: f32,
) -> Entity {
    world.spawn((
        Position(position),
        Collider {
            radius,
            is_trigger: true,
            ignore_hits: false,
            owner: None,
        },
        PlantSocket { delay_to_destroy },
    ))
}

/// An actor with one collision volume it owns. Projectiles fired by the
/// actor ignore the volume.
pub fn spawn_actor_with_body(world: &mut World, position: Vec3, radius: f32) -> (Entity, Entity) {
    let actor = world.spawn((Position(position),));
    let body = world.spawn((
        Position(position),
        Collider {
            radius,
            is_trigger: false,
            ignore_hits: false,
            owner: Some(actor),
        },
    ));
    (actor, body)
}
