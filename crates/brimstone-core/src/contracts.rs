//! Contracts for external collaborators.
//!
//! The engine receives these through explicit injection at construction
//! or per call — never through ambient lookup.

use crate::enums::ShootMode;

/// Supplies additive ammo bonuses from the player's loadout. Consulted
/// exactly once per weapon, at the first tick after activation.
pub trait LoadoutBonus {
    /// Extra grenades added to a launcher's pool.
    fn extra_grenades(&self) -> f32;
    /// Extra spare magazines added to a blaster.
    fn extra_magazines(&self) -> f32;
}

/// Supplies skill-tree effects. Applied once per unlock event, not per
/// tick.
pub trait SkillProvider {
    /// Whether weapons of this mode fire their buffed projectile variant.
    fn is_buffed(&self, mode: ShootMode) -> bool;
    /// Multiplier applied to the inter-shot delay (1.0 = unchanged).
    fn fire_delay_multiplier(&self, mode: ShootMode) -> f32;
}
