//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Weapon firing policy. Selects which ammo-economy and fire-control rules
/// apply to a weapon instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShootMode {
    /// One shot per trigger press, drawn from the normalized reserve pool.
    #[default]
    Manual,
    /// Fires continuously while the trigger is held, from the reserve pool.
    Automatic,
    /// Continuous pre-fire ammo consumption building toward a
    /// variable-yield shot released on trigger-up (or at full charge).
    Charge,
    /// Discrete magazine-fed weapon with timed magazine reloads.
    Blaster,
    /// Beam weapon. Firing is driven by an external beam system, never by
    /// this core's dispatch.
    Laser,
    /// Discrete launcher drawing from a grenade pool with in-weapon regen.
    GrenadesLauncher,
    /// Continuous-fire weapon gated by a heat/cooling budget.
    MachineGun,
    /// Plants a persistent hazard; pure pool decrement, no regeneration.
    SpawnBomb,
    /// Enemy-held weapon: delay-gated only, no ammo accounting.
    Enemies,
    /// Melee attack: delay-gated swing, no projectile economy.
    Melee,
}

/// Projectile flight state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectilePhase {
    /// Integrating along its trajectory, sweeping for hits.
    #[default]
    Flying,
    /// Frozen on a surface as a persistent hazard until its destroy timer
    /// expires.
    Planted,
}
