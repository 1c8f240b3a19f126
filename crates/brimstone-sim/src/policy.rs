//! Per-mode firing policies.
//!
//! Each shoot mode maps to one policy that evaluates a trigger intent
//! against the weapon's gates (trigger edge, ammo, inter-shot delay).
//! Policies never spawn projectiles themselves; they decide whether a
//! shot happens and settle the ammo afterwards.

use brimstone_core::components::{AmmoPool, ChargeState, WeaponState};
use brimstone_core::config::WeaponConfig;
use brimstone_core::constants::{BLASTER_EMPTY_RELOAD_NUDGE_SECS, FULL_CHARGE};
use brimstone_core::enums::ShootMode;
use brimstone_core::types::TriggerIntent;

/// Outcome of evaluating one trigger intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotDecision {
    /// Fire this many bullets now.
    Fire { bullets: u32 },
    /// The intent was consumed without spawning projectiles. A melee
    /// swing reports handled even while the delay gate holds it.
    Handled,
    /// Gate failed. No side effects occurred.
    Ineligible,
}

pub trait ShootPolicy {
    /// Evaluate one trigger intent. With the exception of charge
    /// bookkeeping, this must not mutate state unless it returns `Fire`.
    fn try_shoot(
        &self,
        state: &mut WeaponState,
        config: &WeaponConfig,
        intent: &TriggerIntent,
        now: f32,
    ) -> ShotDecision;

    /// Consume ammo for a shot this policy just approved. Runs after the
    /// shared shot action stamps the last-shot time, so pools that nudge
    /// the timestamp (empty blaster magazines) are not overwritten.
    fn settle_ammo(&self, _state: &mut WeaponState, _config: &WeaponConfig, _now: f32) {}
}

/// Look up the policy for a shoot mode.
pub fn policy_for(mode: ShootMode) -> &'static dyn ShootPolicy {
    match mode {
        ShootMode::Manual => &ManualPolicy,
        ShootMode::Automatic => &AutomaticPolicy,
        ShootMode::Charge => &ChargePolicy,
        ShootMode::Blaster => &BlasterPolicy,
        ShootMode::Laser => &LaserPolicy,
        ShootMode::GrenadesLauncher => &GrenadesLauncherPolicy,
        ShootMode::MachineGun => &MachineGunPolicy,
        ShootMode::SpawnBomb => &SpawnBombPolicy,
        ShootMode::Enemies => &EnemiesPolicy,
        ShootMode::Melee => &MeleePolicy,
    }
}

fn reserve_amount(state: &WeaponState) -> f32 {
    match state.ammo {
        AmmoPool::Reserve { amount } => amount,
        _ => 0.0,
    }
}

/// Single shot per trigger press, funded from the reserve.
pub struct ManualPolicy;

impl ShootPolicy for ManualPolicy {
    fn try_shoot(
        &self,
        state: &mut WeaponState,
        config: &WeaponConfig,
        intent: &TriggerIntent,
        now: f32,
    ) -> ShotDecision {
        if intent.pressed && reserve_amount(state) >= 1.0 && state.shot_delay_elapsed(now) {
            ShotDecision::Fire {
                bullets: config.bullets_per_shot,
            }
        } else {
            ShotDecision::Ineligible
        }
    }

    fn settle_ammo(&self, state: &mut WeaponState, _config: &WeaponConfig, _now: f32) {
        if let AmmoPool::Reserve { amount } = &mut state.ammo {
            *amount -= 1.0;
        }
        state.recompute_ratios();
    }
}

/// Same gates as manual, but fires for as long as the trigger is held.
pub struct AutomaticPolicy;

impl ShootPolicy for AutomaticPolicy {
    fn try_shoot(
        &self,
        state: &mut WeaponState,
        config: &WeaponConfig,
        intent: &TriggerIntent,
        now: f32,
    ) -> ShotDecision {
        if intent.held && reserve_amount(state) >= 1.0 && state.shot_delay_elapsed(now) {
            ShotDecision::Fire {
                bullets: config.bullets_per_shot,
            }
        } else {
            ShotDecision::Ineligible
        }
    }

    fn settle_ammo(&self, state: &mut WeaponState, _config: &WeaponConfig, _now: f32) {
        if let AmmoPool::Reserve { amount } = &mut state.ammo {
            *amount -= 1.0;
        }
        state.recompute_ratios();
    }
}

/// Magazine-fed blaster. An emptied magazine pushes the next reload
/// opportunity out by a fixed nudge.
pub struct BlasterPolicy;

impl ShootPolicy for BlasterPolicy {
    fn try_shoot(
        &self,
        state: &mut WeaponState,
        config: &WeaponConfig,
        intent: &TriggerIntent,
        now: f32,
    ) -> ShotDecision {
        let trigger = if config.automatic {
            intent.held
        } else {
            intent.pressed
        };
        let ready = match state.ammo {
            AmmoPool::Blaster {
                in_magazine,
                reload_pending,
                ..
            } => in_magazine >= 1.0 && !reload_pending,
            _ => false,
        };
        if trigger && ready && state.shot_delay_elapsed(now) {
            ShotDecision::Fire {
                bullets: config.bullets_per_shot,
            }
        } else {
            ShotDecision::Ineligible
        }
    }

    fn settle_ammo(&self, state: &mut WeaponState, _config: &WeaponConfig, _now: f32) {
        if let AmmoPool::Blaster {
            in_magazine,
            reload_pending,
            ..
        } = &mut state.ammo
        {
            *in_magazine -= 1.0;
            if *in_magazine <= 0.0 {
                *in_magazine = 0.0;
                *reload_pending = true;
                state.last_shot_time += BLASTER_EMPTY_RELOAD_NUDGE_SECS;
            }
        }
        state.recompute_ratios();
    }
}

/// Heat-limited machine gun: every shot costs ammo and cooling.
pub struct MachineGunPolicy;

impl ShootPolicy for MachineGunPolicy {
    fn try_shoot(
        &self,
        state: &mut WeaponState,
        config: &WeaponConfig,
        intent: &TriggerIntent,
        now: f32,
    ) -> ShotDecision {
        let ready = match state.ammo {
            AmmoPool::MachineGun { ammo, cooling, .. } => ammo >= 1.0 && cooling >= 1.0,
            _ => false,
        };
        if intent.held && ready && state.shot_delay_elapsed(now) {
            ShotDecision::Fire {
                bullets: config.bullets_per_shot,
            }
        } else {
            ShotDecision::Ineligible
        }
    }

    fn settle_ammo(&self, state: &mut WeaponState, _config: &WeaponConfig, _now: f32) {
        if let AmmoPool::MachineGun {
            ammo,
            cooling,
            overheated,
            ..
        } = &mut state.ammo
        {
            *ammo -= 1.0;
            *cooling -= 1.0;
            if *cooling < 1.0 {
                *overheated = true;
            }
        }
        state.recompute_ratios();
    }
}

/// Grenade launcher drawing from a shared pool. Emptying the loaded
/// grenades while the pool still holds more schedules a reload.
pub struct GrenadesLauncherPolicy;

impl ShootPolicy for GrenadesLauncherPolicy {
    fn try_shoot(
        &self,
        state: &mut WeaponState,
        config: &WeaponConfig,
        intent: &TriggerIntent,
        now: f32,
    ) -> ShotDecision {
        let ready = match state.ammo {
            AmmoPool::GrenadesLauncher {
                pool,
                reload_pending,
                ..
            } => pool >= 1.0 && !reload_pending,
            _ => false,
        };
        if intent.pressed && ready && state.shot_delay_elapsed(now) {
            ShotDecision::Fire {
                bullets: config.bullets_per_shot,
            }
        } else {
            ShotDecision::Ineligible
        }
    }

    fn settle_ammo(&self, state: &mut WeaponState, _config: &WeaponConfig, _now: f32) {
        if let AmmoPool::GrenadesLauncher {
            in_weapon,
            pool,
            reload_pending,
            ..
        } = &mut state.ammo
        {
            *pool -= 1.0;
            *in_weapon -= 1.0;
            if *in_weapon <= 0.0 {
                *in_weapon = 0.0;
                // A pool of exactly one is still fireable; only schedule a
                // reload when more than one grenade remains to load.
                if *pool > 1.0 {
                    *reload_pending = true;
                }
            }
        }
        state.recompute_ratios();
    }
}

/// Spawn bombs: pure pool decrement, never regenerates.
pub struct SpawnBombPolicy;

impl ShootPolicy for SpawnBombPolicy {
    fn try_shoot(
        &self,
        state: &mut WeaponState,
        config: &WeaponConfig,
        intent: &TriggerIntent,
        now: f32,
    ) -> ShotDecision {
        let ready = match state.ammo {
            AmmoPool::SpawnBomb { remaining, .. } => remaining >= 1.0,
            _ => false,
        };
        if intent.pressed && ready && state.shot_delay_elapsed(now) {
            ShotDecision::Fire {
                bullets: config.bullets_per_shot,
            }
        } else {
            ShotDecision::Ineligible
        }
    }

    fn settle_ammo(&self, state: &mut WeaponState, _config: &WeaponConfig, _now: f32) {
        if let AmmoPool::SpawnBomb { remaining, .. } = &mut state.ammo {
            *remaining -= 1.0;
        }
        state.recompute_ratios();
    }
}

/// Hold-to-charge weapon. Holding accrues charge funded from the reserve;
/// release (or reaching full charge with auto-release) fires bullets in
/// proportion to the accumulated charge.
pub struct ChargePolicy;

impl ChargePolicy {
    fn try_begin_charge(state: &mut WeaponState, config: &WeaponConfig, now: f32) {
        if state.charge.is_some() || !state.shot_delay_elapsed(now) {
            return;
        }
        let reserve = reserve_amount(state);
        let start_cost = config.ammo_used_on_start_charge;
        // Enough to start, and at least one bullet's worth left afterwards.
        let bullets_after = ((reserve - start_cost) * config.bullets_per_shot as f32).floor();
        if reserve < start_cost || bullets_after <= 0.0 {
            return;
        }
        crate::systems::ammo::use_reserve(state, start_cost, now);
        state.last_charge_started_at = now;
        state.charge = Some(ChargeState {
            charge: 0.0,
            started_at: now,
        });
    }
}

impl ShootPolicy for ChargePolicy {
    fn try_shoot(
        &self,
        state: &mut WeaponState,
        config: &WeaponConfig,
        intent: &TriggerIntent,
        now: f32,
    ) -> ShotDecision {
        if intent.held {
            Self::try_begin_charge(state, config, now);
        }

        let charge = state.charge.map(|c| c.charge).unwrap_or(0.0);
        let auto_release = config.automatic_release_on_charged && charge >= FULL_CHARGE;
        if (intent.released || auto_release) && state.charge.is_some() {
            let bullets = (charge * config.bullets_per_shot as f32).ceil().max(1.0) as u32;
            ShotDecision::Fire { bullets }
        } else {
            ShotDecision::Ineligible
        }
    }

    fn settle_ammo(&self, state: &mut WeaponState, _config: &WeaponConfig, _now: f32) {
        // Reserve was consumed while the charge accrued.
        state.charge = None;
    }
}

/// Lasers never fire discrete shots; their beam is driven externally.
pub struct LaserPolicy;

impl ShootPolicy for LaserPolicy {
    fn try_shoot(
        &self,
        _state: &mut WeaponState,
        _config: &WeaponConfig,
        _intent: &TriggerIntent,
        _now: f32,
    ) -> ShotDecision {
        ShotDecision::Ineligible
    }
}

/// Enemy-held weapons fire while held, gated only by the delay.
pub struct EnemiesPolicy;

impl ShootPolicy for EnemiesPolicy {
    fn try_shoot(
        &self,
        state: &mut WeaponState,
        config: &WeaponConfig,
        intent: &TriggerIntent,
        now: f32,
    ) -> ShotDecision {
        if intent.held && state.shot_delay_elapsed(now) {
            ShotDecision::Fire {
                bullets: config.bullets_per_shot,
            }
        } else {
            ShotDecision::Ineligible
        }
    }
}

/// Melee swings consume the intent even when the delay gate holds them.
pub struct MeleePolicy;

impl ShootPolicy for MeleePolicy {
    fn try_shoot(
        &self,
        state: &mut WeaponState,
        config: &WeaponConfig,
        intent: &TriggerIntent,
        now: f32,
    ) -> ShotDecision {
        if !intent.melee {
            return ShotDecision::Ineligible;
        }
        if state.shot_delay_elapsed(now) {
            ShotDecision::Fire {
                bullets: config.bullets_per_shot,
            }
        } else {
            ShotDecision::Handled
        }
    }
}
