//! Fixed-tick simulation systems.
//!
//! Each system is a free function over the world, run once per tick in
//! the order the engine dictates.

pub mod ammo;
pub mod cleanup;
pub mod damage;
pub mod fire_control;
pub mod projectile_flight;

/// Stable id for event payloads. Events stay entity-type-free so the
/// vocabulary crate can serialize them.
pub(crate) fn entity_id(entity: hecs::Entity) -> u64 {
    entity.to_bits().get()
}
