//! Entity-free component data for weapons and damage targets.
//!
//! Components are plain data; the rules that mutate them live in the
//! simulation crate's systems. State that references other entities
//! (projectiles, colliders) lives in the simulation crate instead.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::WeaponConfig;
use crate::enums::ShootMode;
use crate::types::{CameraPose, MuzzlePose};

/// Per-mode ammo counters. Exactly one variant exists per weapon, so only
/// the counters that are meaningful for its shoot mode can be touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AmmoPool {
    /// Magazine-fed blaster.
    Blaster {
        in_magazine: f32,
        magazine_capacity: f32,
        spare_magazines: f32,
        /// Set when the magazine runs dry; blocks firing until the timed
        /// reload completes.
        reload_pending: bool,
    },
    /// Heat-limited machine gun.
    MachineGun {
        ammo: f32,
        ammo_capacity: f32,
        cooling: f32,
        cooling_capacity: f32,
        /// Set whenever cooling drops below one full unit.
        overheated: bool,
    },
    /// Grenade launcher drawing from a shared pool.
    GrenadesLauncher {
        in_weapon: f32,
        weapon_capacity: f32,
        pool: f32,
        reload_pending: bool,
    },
    /// Spawn bombs: pure pool decrement, never regenerates.
    SpawnBomb { remaining: f32, capacity: f32 },
    /// Normalized 0..1 reserve for Manual/Automatic/Charge weapons.
    /// Refilling this pool is the caller's concern.
    Reserve { amount: f32 },
    /// No ammo accounting (melee, enemy weapons, externally driven lasers).
    Unlimited,
}

impl AmmoPool {
    /// Build the initial pool for a weapon's mode from its config.
    pub fn for_config(config: &WeaponConfig) -> Self {
        match config.mode {
            ShootMode::Blaster => AmmoPool::Blaster {
                in_magazine: config.magazine_capacity,
                magazine_capacity: config.magazine_capacity,
                spare_magazines: config.spare_magazines,
                reload_pending: false,
            },
            ShootMode::MachineGun => AmmoPool::MachineGun {
                ammo: config.ammo_capacity,
                ammo_capacity: config.ammo_capacity,
                cooling: config.cooling_capacity,
                cooling_capacity: config.cooling_capacity,
                overheated: false,
            },
            ShootMode::GrenadesLauncher => AmmoPool::GrenadesLauncher {
                in_weapon: config.grenades_in_weapon,
                weapon_capacity: config.grenades_in_weapon,
                pool: config.grenades_total,
                reload_pending: false,
            },
            ShootMode::SpawnBomb => AmmoPool::SpawnBomb {
                remaining: config.spawn_bombs_total,
                capacity: config.spawn_bombs_total,
            },
            ShootMode::Manual | ShootMode::Automatic | ShootMode::Charge => {
                AmmoPool::Reserve { amount: 1.0 }
            }
            ShootMode::Laser | ShootMode::Enemies | ShootMode::Melee => AmmoPool::Unlimited,
        }
    }
}

/// Transient charging sub-state. Present only while a Charge-mode weapon
/// is accumulating; cleared on release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargeState {
    /// Accumulated charge in [0, 1].
    pub charge: f32,
    /// Time at which charging began.
    pub started_at: f32,
}

/// Mutable per-weapon state. One per weapon entity, alongside its
/// immutable `WeaponConfig`.
#[derive(Debug, Clone)]
pub struct WeaponState {
    pub mode: ShootMode,
    pub ammo: AmmoPool,
    pub charge: Option<ChargeState>,

    /// Normalized ammo snapshot for UI readouts. Recomputed on every
    /// mutation, never derived lazily.
    pub ammo_ratio: f32,
    /// Normalized cooling snapshot (machine guns; 1.0 otherwise).
    pub cooling_ratio: f32,

    /// Effective inter-shot delay. Starts at the config value; skill
    /// unlocks apply multiplicative reductions.
    pub delay_between_shots: f32,
    pub last_shot_time: f32,
    /// Time at which the most recent charge began.
    pub last_charge_started_at: f32,

    /// Latched from the most recent trigger intent.
    pub wants_to_shoot: bool,
    pub manual_reload: bool,
    /// Continuous-fire loop audio state.
    pub loop_sound_playing: bool,

    pub is_buffed: bool,
    pub active: bool,
    /// Loadout bonuses are consulted once, at the first tick after
    /// activation.
    pub loadout_applied: bool,

    pub muzzle: MuzzlePose,
    pub last_muzzle_position: Vec3,
    /// Muzzle world velocity, finite-differenced per tick. Inherited by
    /// projectiles configured to do so.
    pub muzzle_velocity: Vec3,
    pub aim_camera: Option<CameraPose>,
}

impl WeaponState {
    pub fn new(config: &WeaponConfig, muzzle: MuzzlePose) -> Self {
        let mut state = Self {
            mode: config.mode,
            ammo: AmmoPool::for_config(config),
            charge: None,
            ammo_ratio: 1.0,
            cooling_ratio: 1.0,
            delay_between_shots: config.delay_between_shots,
            last_shot_time: f32::NEG_INFINITY,
            last_charge_started_at: f32::NEG_INFINITY,
            wants_to_shoot: false,
            manual_reload: false,
            loop_sound_playing: false,
            is_buffed: false,
            active: false,
            loadout_applied: false,
            muzzle,
            last_muzzle_position: muzzle.position,
            muzzle_velocity: Vec3::ZERO,
            aim_camera: None,
        };
        state.recompute_ratios();
        state
    }

    /// Recompute the normalized snapshots from the pool counters. Every
    /// mutation of the pool goes through this.
    pub fn recompute_ratios(&mut self) {
        match &self.ammo {
            AmmoPool::Blaster {
                in_magazine,
                magazine_capacity,
                ..
            } => {
                self.ammo_ratio = in_magazine / magazine_capacity;
            }
            AmmoPool::MachineGun {
                ammo,
                ammo_capacity,
                cooling,
                cooling_capacity,
                ..
            } => {
                self.ammo_ratio = ammo / ammo_capacity;
                self.cooling_ratio = cooling / cooling_capacity;
            }
            AmmoPool::GrenadesLauncher {
                in_weapon,
                weapon_capacity,
                ..
            } => {
                self.ammo_ratio = in_weapon / weapon_capacity;
            }
            AmmoPool::SpawnBomb {
                remaining,
                capacity,
            } => {
                self.ammo_ratio = remaining / capacity;
            }
            AmmoPool::Reserve { amount } => {
                self.ammo_ratio = *amount;
            }
            AmmoPool::Unlimited => {
                self.ammo_ratio = 1.0;
            }
        }
        self.ammo_ratio = self.ammo_ratio.clamp(0.0, 1.0);
        self.cooling_ratio = self.cooling_ratio.clamp(0.0, 1.0);
    }

    /// Whole-unit ammo snapshot for UI readouts.
    pub fn current_ammo(&self) -> i32 {
        match &self.ammo {
            AmmoPool::Blaster { in_magazine, .. } => *in_magazine as i32,
            AmmoPool::MachineGun { ammo, .. } => *ammo as i32,
            AmmoPool::GrenadesLauncher { pool, .. } => *pool as i32,
            AmmoPool::SpawnBomb { remaining, .. } => *remaining as i32,
            AmmoPool::Reserve { .. } | AmmoPool::Unlimited => 0,
        }
    }

    /// Spare magazine snapshot for UI readouts (blasters only).
    pub fn current_magazines(&self) -> i32 {
        match &self.ammo {
            AmmoPool::Blaster {
                spare_magazines, ..
            } => *spare_magazines as i32,
            _ => 0,
        }
    }

    /// Whether the pool can fund at least one more shot. Drives the
    /// continuous-fire audio loop.
    pub fn has_ammo_for_shot(&self, config: &WeaponConfig) -> bool {
        match &self.ammo {
            AmmoPool::Blaster { in_magazine, .. } => *in_magazine >= 1.0,
            AmmoPool::MachineGun { ammo, .. } => *ammo >= 1.0,
            AmmoPool::GrenadesLauncher { pool, .. } => *pool >= 1.0,
            AmmoPool::SpawnBomb { remaining, .. } => *remaining >= 1.0,
            AmmoPool::Reserve { amount } => *amount >= config.ammo_needed_to_shoot(),
            AmmoPool::Unlimited => true,
        }
    }

    /// Whether the inter-shot delay has elapsed.
    pub fn shot_delay_elapsed(&self, now: f32) -> bool {
        self.last_shot_time + self.delay_between_shots < now
    }
}

/// A target that can take damage. Damage to a dead target is a no-op,
/// never an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Damageable {
    pub health: f32,
    pub dead: bool,
}

impl Damageable {
    pub fn new(health: f32) -> Self {
        Self {
            health,
            dead: false,
        }
    }
}

/// The "spawn-damageable" capability: a trigger volume a planting
/// projectile can attach to. Supplies the destroy delay for the planted
/// hazard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlantSocket {
    /// Seconds a planted projectile persists before self-destroying.
    pub delay_to_destroy: f32,
}
