//! Weapon and projectile configuration.
//!
//! Configs are immutable once a weapon is spawned. Validation happens at
//! spawn time: a defective config aborts weapon activation with a
//! `WeaponSetupError` instead of failing silently mid-tick.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::ShootMode;

/// Tuning for one weapon instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponConfig {
    /// Display name, used only for diagnostics.
    pub name: String,
    pub mode: ShootMode,

    // --- Shot parameters ---
    /// Minimum duration between two shots (seconds).
    pub delay_between_shots: f32,
    /// Bullets spawned per shot (pellets for spread weapons).
    pub bullets_per_shot: u32,
    /// Cone angle in degrees within which bullets deviate randomly
    /// (0 = no spread).
    pub bullet_spread_angle_deg: f32,

    // --- Ammo parameters (common) ---
    /// Reload or cooling speed (units per second).
    pub reload_rate: f32,
    /// Delay after the last shot before reloading/cooling starts (seconds).
    pub reload_delay: f32,

    // --- Blaster ---
    /// Rounds per magazine.
    pub magazine_capacity: f32,
    /// Spare magazines beyond the loaded one.
    pub spare_magazines: f32,
    /// Hold-to-fire instead of press-to-fire.
    pub automatic: bool,

    // --- MachineGun ---
    /// Total ammo budget.
    pub ammo_capacity: f32,
    /// Maximum cooling level.
    pub cooling_capacity: f32,

    // --- GrenadesLauncher ---
    /// Grenades the weapon itself can hold.
    pub grenades_in_weapon: f32,
    /// Total grenade pool.
    pub grenades_total: f32,

    // --- SpawnBomb ---
    /// Total bomb pool. No regeneration.
    pub spawn_bombs_total: f32,

    // --- Charge weapons ---
    /// Trigger the shot automatically when maximum charge is reached.
    pub automatic_release_on_charged: bool,
    /// Duration to reach maximum charge (seconds). Non-positive means the
    /// charge completes instantly.
    pub max_charge_duration: f32,
    /// Reserve consumed when charging begins.
    pub ammo_used_on_start_charge: f32,
    /// Additional reserve consumed as the charge accumulates to maximum.
    pub ammo_usage_rate_while_charging: f32,

    // --- Audio ---
    /// Use a looping fire sound instead of per-shot cues.
    pub continuous_fire_sound: bool,

    // --- Projectiles ---
    pub projectile: ProjectileConfig,
    /// Variant spawned instead of `projectile` while the weapon is buffed.
    pub projectile_buffed: Option<ProjectileConfig>,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            mode: ShootMode::default(),
            delay_between_shots: DEFAULT_DELAY_BETWEEN_SHOTS,
            bullets_per_shot: 1,
            bullet_spread_angle_deg: 0.0,
            reload_rate: DEFAULT_RELOAD_RATE,
            reload_delay: DEFAULT_RELOAD_DELAY,
            magazine_capacity: 0.0,
            spare_magazines: 0.0,
            automatic: false,
            ammo_capacity: 0.0,
            cooling_capacity: 0.0,
            grenades_in_weapon: 0.0,
            grenades_total: 0.0,
            spawn_bombs_total: 0.0,
            automatic_release_on_charged: false,
            max_charge_duration: DEFAULT_MAX_CHARGE_DURATION,
            ammo_used_on_start_charge: 1.0,
            ammo_usage_rate_while_charging: 1.0,
            continuous_fire_sound: false,
            projectile: ProjectileConfig::default(),
            projectile_buffed: None,
        }
    }
}

impl WeaponConfig {
    /// Reserve required to fund one shot. Charge weapons must cover at
    /// least the initial charge cost; everything else costs one unit,
    /// spread across the pellets of a shot.
    pub fn ammo_needed_to_shoot(&self) -> f32 {
        let per_shot = if self.mode == ShootMode::Charge {
            self.ammo_used_on_start_charge.max(1.0)
        } else {
            1.0
        };
        per_shot / self.bullets_per_shot.max(1) as f32
    }

    /// Validate the config for its declared mode. Called at weapon spawn.
    pub fn validate(&self) -> Result<(), WeaponSetupError> {
        if self.delay_between_shots < 0.0 {
            return Err(WeaponSetupError::InvalidShotTiming {
                value: self.delay_between_shots,
            });
        }
        if self.bullets_per_shot == 0 {
            return Err(WeaponSetupError::NoBulletsPerShot);
        }
        if self.reload_rate < 0.0 || self.reload_delay < 0.0 {
            return Err(WeaponSetupError::InvalidReloadTuning);
        }

        let capacity_ok = match self.mode {
            ShootMode::Blaster => self.magazine_capacity >= 1.0 && self.spare_magazines >= 0.0,
            ShootMode::MachineGun => self.ammo_capacity >= 1.0 && self.cooling_capacity >= 1.0,
            ShootMode::GrenadesLauncher => {
                self.grenades_in_weapon >= 1.0 && self.grenades_total >= 1.0
            }
            ShootMode::SpawnBomb => self.spawn_bombs_total >= 1.0,
            ShootMode::Charge => {
                self.ammo_used_on_start_charge > 0.0 && self.ammo_usage_rate_while_charging >= 0.0
            }
            _ => true,
        };
        if !capacity_ok {
            return Err(WeaponSetupError::InvalidAmmoCapacity { mode: self.mode });
        }

        self.projectile.validate()?;
        if let Some(buffed) = &self.projectile_buffed {
            buffed.validate()?;
        }
        Ok(())
    }
}

/// Tuning for the projectiles a weapon fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileConfig {
    /// Collision detection radius (meters).
    pub radius: f32,
    /// Initial speed (m/s).
    pub speed: f32,
    /// Downward acceleration for ballistic arcs (0 = none).
    pub gravity_down_acceleration: f32,
    /// Hard lifetime: the projectile is destroyed after this many seconds
    /// regardless of state.
    pub max_lifetime: f32,
    /// Distance over which the projectile drifts to the aim-camera center
    /// line. 0 snaps instantly, negative disables correction.
    pub trajectory_correction_distance: f32,
    /// Inherit the muzzle's world velocity at fire time.
    pub inherit_weapon_velocity: bool,
    /// Damage on hit.
    pub damage: f32,
    /// Area damage centered on the hit point. None = point damage.
    pub area_of_damage: Option<AreaOfDamage>,
    /// Anihilator behavior: continue past damageable targets, damaging
    /// every overlapped target each tick.
    pub pierces: bool,
    /// Spawn-weapon behavior: freeze on a valid surface and persist as a
    /// hazard until the plant target's destroy timer expires.
    pub plants: bool,
    /// Offset along the hit normal where impact FX spawn (meters).
    pub impact_fx_offset: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_PROJECTILE_RADIUS,
            speed: DEFAULT_PROJECTILE_SPEED,
            gravity_down_acceleration: 0.0,
            max_lifetime: DEFAULT_PROJECTILE_LIFETIME,
            trajectory_correction_distance: -1.0,
            inherit_weapon_velocity: false,
            damage: DEFAULT_PROJECTILE_DAMAGE,
            area_of_damage: None,
            pierces: false,
            plants: false,
            impact_fx_offset: DEFAULT_IMPACT_FX_OFFSET,
        }
    }
}

impl ProjectileConfig {
    pub fn validate(&self) -> Result<(), WeaponSetupError> {
        if self.radius <= 0.0 {
            return Err(WeaponSetupError::InvalidProjectile {
                reason: "non-positive collision radius",
            });
        }
        if self.speed <= 0.0 {
            return Err(WeaponSetupError::InvalidProjectile {
                reason: "non-positive speed",
            });
        }
        if self.max_lifetime <= 0.0 {
            return Err(WeaponSetupError::InvalidProjectile {
                reason: "non-positive lifetime",
            });
        }
        if self.pierces && self.plants {
            return Err(WeaponSetupError::InvalidProjectile {
                reason: "projectile cannot both pierce and plant",
            });
        }
        Ok(())
    }
}

/// Area damage around a hit point, with linear falloff from the center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AreaOfDamage {
    /// Radius of effect (meters).
    pub radius: f32,
    /// Fraction of full damage applied at the edge of the radius.
    pub damage_ratio_at_edge: f32,
}

/// Configuration defects detected at weapon activation.
#[derive(Debug, Clone, PartialEq)]
pub enum WeaponSetupError {
    /// The muzzle forward direction is zero-length or non-finite.
    MissingMuzzle,
    /// Negative delay between shots.
    InvalidShotTiming { value: f32 },
    /// A weapon must fire at least one bullet per shot.
    NoBulletsPerShot,
    /// Negative reload rate or reload delay.
    InvalidReloadTuning,
    /// The counters for the weapon's declared mode are unusable.
    InvalidAmmoCapacity { mode: ShootMode },
    /// The projectile config is unusable.
    InvalidProjectile { reason: &'static str },
}

impl fmt::Display for WeaponSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMuzzle => write!(f, "weapon has no usable muzzle transform"),
            Self::InvalidShotTiming { value } => {
                write!(f, "negative delay between shots: {value}")
            }
            Self::NoBulletsPerShot => write!(f, "bullets per shot must be at least 1"),
            Self::InvalidReloadTuning => write!(f, "negative reload rate or delay"),
            Self::InvalidAmmoCapacity { mode } => {
                write!(f, "ammo counters unusable for mode {mode:?}")
            }
            Self::InvalidProjectile { reason } => write!(f, "invalid projectile: {reason}"),
        }
    }
}

impl std::error::Error for WeaponSetupError {}
