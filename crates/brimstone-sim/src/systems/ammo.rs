//! Passive ammo regeneration and the shared consumption helpers.
//!
//! Regeneration only runs once the reload delay after the last shot has
//! elapsed, and only touches the counters the weapon's pool variant
//! actually has.

use hecs::World;

use brimstone_core::components::{AmmoPool, WeaponState};
use brimstone_core::config::WeaponConfig;
use brimstone_core::constants::COOLING_READY_RATIO;
use brimstone_core::types::SimTime;

/// Consume a slice of the normalized reserve. Clamps to [0, 1] and stamps
/// the last-shot time, so charging continuously pushes the delay gate out.
pub fn use_reserve(state: &mut WeaponState, amount: f32, now: f32) {
    if let AmmoPool::Reserve { amount: reserve } = &mut state.ammo {
        *reserve = (*reserve - amount).clamp(0.0, 1.0);
    }
    state.last_shot_time = now;
    state.recompute_ratios();
}

/// Tick passive regeneration for every active weapon.
pub fn run(world: &mut World, time: &SimTime) {
    let now = time.now();
    let dt = time.dt();

    for (_entity, (state, config)) in world.query_mut::<(&mut WeaponState, &WeaponConfig)>() {
        if !state.active {
            continue;
        }
        let delay_elapsed = state.last_shot_time + config.reload_delay < now;
        let manual_reload = state.manual_reload;

        let mut dirty = false;
        match &mut state.ammo {
            AmmoPool::Blaster {
                in_magazine,
                magazine_capacity,
                spare_magazines,
                reload_pending,
            } => {
                if delay_elapsed
                    && (*reload_pending || manual_reload)
                    && *in_magazine < *magazine_capacity
                    && *spare_magazines >= 1.0
                {
                    *in_magazine =
                        (*in_magazine + config.reload_rate * dt).min(*magazine_capacity);
                    if *in_magazine >= *magazine_capacity {
                        *reload_pending = false;
                        *spare_magazines -= 1.0;
                    } else {
                        // A partial manual reload must run to completion.
                        *reload_pending = true;
                    }
                    dirty = true;
                }
            }
            AmmoPool::MachineGun {
                cooling,
                cooling_capacity,
                ..
            } => {
                if delay_elapsed && *cooling < *cooling_capacity {
                    *cooling = (*cooling + config.reload_rate * dt).min(*cooling_capacity);
                    dirty = true;
                }
            }
            AmmoPool::GrenadesLauncher {
                in_weapon,
                weapon_capacity,
                pool,
                reload_pending,
            } => {
                if delay_elapsed && *reload_pending {
                    let refillable = pool.min(*weapon_capacity);
                    *in_weapon = (*in_weapon + config.reload_rate * dt).min(refillable);
                    if *in_weapon >= refillable {
                        *reload_pending = false;
                    }
                    dirty = true;
                }
            }
            AmmoPool::SpawnBomb { .. } | AmmoPool::Reserve { .. } | AmmoPool::Unlimited => {}
        }
        if dirty {
            state.recompute_ratios();
        }

        // Overheat clears once the cooling snapshot is back over the
        // ready threshold.
        if state.cooling_ratio >= COOLING_READY_RATIO {
            if let AmmoPool::MachineGun { overheated, .. } = &mut state.ammo {
                *overheated = false;
            }
        }
    }
}
