//! Weapon entity wiring that references other entities.

use hecs::Entity;

/// The actor holding a weapon. Projectiles credit this entity for damage
/// and ignore its collision volumes.
#[derive(Debug, Clone, Copy)]
pub struct WeaponOwner(pub Entity);
