//! Events emitted by the simulation for audio, VFX, and UI collaborators.
//!
//! Entities are referenced by their raw id bits so events stay
//! serializable without pulling the ECS into this crate.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::ShootMode;

/// One combat event. Drained from the engine each tick; playback is an
/// external collaborator's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// Fan-out shot-completed notification.
    ShotFired {
        weapon: u64,
        mode: ShootMode,
        bullets: u32,
    },
    /// Spawn a muzzle flash at the weapon's muzzle.
    MuzzleFlash { weapon: u64 },
    /// Trigger the weapon's attack animation.
    AttackAnimation { weapon: u64 },
    /// One-shot fire sound.
    ShootSfx { weapon: u64 },
    /// Weapon was shown or hidden.
    WeaponShown { weapon: u64, shown: bool },
    /// Weapon-change cue when a weapon is shown.
    WeaponChangeSfx { weapon: u64 },
    /// Start the continuous-fire loop (with its start cue).
    ContinuousFireStart { weapon: u64 },
    /// Stop the loop and play the end cue.
    ContinuousFireEnd { weapon: u64 },
    /// Impact VFX, offset along the hit normal.
    ImpactFx { position: Vec3, normal: Vec3 },
    /// Impact sound at the hit point.
    ImpactSfx { position: Vec3 },
    /// Damage was applied to a live target.
    DamageDealt {
        target: u64,
        attacker: u64,
        amount: f32,
        is_explosive: bool,
    },
    /// A planting projectile froze on a surface.
    ProjectilePlanted {
        projectile: u64,
        position: Vec3,
        normal: Vec3,
    },
    /// Per-tick pulse to the plant socket while a projectile is planted.
    PlantPulse {
        socket: u64,
        planted_at: f32,
        position: Vec3,
    },
    /// A projectile was destroyed (terminal hit, plant expiry, or hard
    /// lifetime expiry).
    ProjectileDestroyed { projectile: u64 },
}
