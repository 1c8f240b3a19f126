//! Trigger dispatch, shot execution, and per-tick weapon upkeep.
//!
//! `handle_shoot_inputs` runs immediately when an intent arrives; the
//! `update_*` functions run once per tick from the engine.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use brimstone_core::components::{AmmoPool, WeaponState};
use brimstone_core::config::{ProjectileConfig, WeaponConfig};
use brimstone_core::constants::{DT, FULL_CHARGE, SPREAD_FULL_ANGLE_DEG};
use brimstone_core::enums::ShootMode;
use brimstone_core::events::CombatEvent;
use brimstone_core::types::{
    project_on_plane, slerp_direction, CameraPose, MuzzlePose, Position, SimTime, TriggerIntent,
    Velocity,
};

use crate::collision;
use crate::policy::{policy_for, ShotDecision};
use crate::projectile::{ProjectileState, TrajectoryCorrection};
use crate::systems::{ammo, entity_id, projectile_flight};
use crate::weapon::WeaponOwner;

/// Everything needed to spawn the bullets of one approved shot, captured
/// while the weapon was borrowed.
struct ShotPlan {
    owner: Entity,
    muzzle: MuzzlePose,
    camera: Option<CameraPose>,
    inherited: Vec3,
    directions: Vec<Vec3>,
    projectile: ProjectileConfig,
}

/// Dispatch one trigger intent to the weapon's firing policy. Latches the
/// trigger state for the audio loop, then returns whether the intent
/// produced a shot or swing.
pub fn handle_shoot_inputs(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<CombatEvent>,
    weapon: Entity,
    intent: &TriggerIntent,
    now: f32,
) -> bool {
    let plan = {
        let Ok((state, config, owner)) =
            world.query_one_mut::<(&mut WeaponState, &WeaponConfig, &WeaponOwner)>(weapon)
        else {
            log::warn!("shoot intent for unknown weapon {weapon:?}");
            return false;
        };
        if !state.active {
            return false;
        }
        state.wants_to_shoot = intent.pressed || intent.held;
        state.manual_reload = intent.reload_held;

        let policy = policy_for(config.mode);
        match policy.try_shoot(state, config, intent, now) {
            ShotDecision::Ineligible => return false,
            ShotDecision::Handled => {
                events.push(CombatEvent::AttackAnimation {
                    weapon: entity_id(weapon),
                });
                return true;
            }
            ShotDecision::Fire { bullets } => {
                let spread = config.bullet_spread_angle_deg / SPREAD_FULL_ANGLE_DEG;
                let directions = (0..bullets)
                    .map(|_| shot_direction_within_spread(rng, state.muzzle.forward, spread))
                    .collect();
                let projectile = if state.is_buffed {
                    config
                        .projectile_buffed
                        .clone()
                        .unwrap_or_else(|| config.projectile.clone())
                } else {
                    config.projectile.clone()
                };

                state.last_shot_time = now;
                events.push(CombatEvent::MuzzleFlash {
                    weapon: entity_id(weapon),
                });
                events.push(CombatEvent::AttackAnimation {
                    weapon: entity_id(weapon),
                });
                if !config.continuous_fire_sound {
                    events.push(CombatEvent::ShootSfx {
                        weapon: entity_id(weapon),
                    });
                }
                events.push(CombatEvent::ShotFired {
                    weapon: entity_id(weapon),
                    mode: config.mode,
                    bullets,
                });
                // After the timestamp: an emptied blaster magazine nudges
                // last_shot_time forward.
                policy.settle_ammo(state, config, now);

                let inherited = if projectile.inherit_weapon_velocity {
                    state.muzzle_velocity
                } else {
                    Vec3::ZERO
                };
                ShotPlan {
                    owner: owner.0,
                    muzzle: state.muzzle,
                    camera: state.aim_camera,
                    inherited,
                    directions,
                    projectile,
                }
            }
        }
    };
    spawn_projectiles(world, events, plan, now);
    true
}

/// Random unit direction by rejection sampling, so the spread cone is not
/// biased toward cube corners.
fn random_direction(rng: &mut ChaCha8Rng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0f32..1.0),
            rng.gen_range(-1.0f32..1.0),
            rng.gen_range(-1.0f32..1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}

/// Deviate the aim direction by slerping toward a random direction,
/// weighted by the spread angle's share of a half turn.
fn shot_direction_within_spread(rng: &mut ChaCha8Rng, forward: Vec3, spread_ratio: f32) -> Vec3 {
    if spread_ratio <= 0.0 {
        return forward.normalize_or(Vec3::Z);
    }
    slerp_direction(forward, random_direction(rng), spread_ratio)
}

fn spawn_projectiles(world: &mut World, events: &mut Vec<CombatEvent>, plan: ShotPlan, now: f32) {
    let shapes = collision::gather_colliders(world);
    let mut despawns = Vec::new();

    for dir in plan.directions {
        // The muzzle moved during this tick; projectiles start from where
        // it will be, not where it was.
        let mut pos = plan.muzzle.position + plan.inherited * DT;
        let mut state = ProjectileState::new(plan.owner, dir, now, plan.inherited, pos);
        for shape in &shapes {
            if shape.owner == Some(plan.owner) {
                state.ignored.insert(shape.entity);
            }
        }

        if let Some(cam) = plan.camera {
            let camera_to_muzzle = plan.muzzle.position - cam.position;
            let full = project_on_plane(-camera_to_muzzle, cam.forward);
            let distance = plan.projectile.trajectory_correction_distance;
            if distance > 0.0 {
                state.correction = Some(TrajectoryCorrection {
                    full,
                    consumed: Vec3::ZERO,
                });
            } else if distance == 0.0 {
                pos += full;
                state.last_root_position = pos;
            }
        }

        let velocity = dir * plan.projectile.speed;
        let entity = world.spawn((
            Position(pos),
            Velocity(velocity),
            state,
            plan.projectile.clone(),
        ));

        // The muzzle can poke through geometry the camera ray would hit
        // first; resolve that hit right away instead of letting the
        // projectile fly off from inside a wall.
        if let Some(cam) = plan.camera {
            projectile_flight::resolve_spawn_occlusion(
                world,
                events,
                &mut despawns,
                &shapes,
                entity,
                cam.position,
                plan.muzzle.position,
                now,
            );
        }
    }

    for entity in despawns {
        let _ = world.despawn(entity);
    }
}

/// Accrue charge for charging weapons, funded from the reserve. A tick
/// whose ammo cost cannot be covered adds no charge at all.
pub fn update_charging(world: &mut World, time: &SimTime) {
    let now = time.now();
    let dt = time.dt();

    for (_entity, (state, config)) in world.query_mut::<(&mut WeaponState, &WeaponConfig)>() {
        if config.mode != ShootMode::Charge || !state.active {
            continue;
        }
        let Some(mut charging) = state.charge else {
            continue;
        };
        if charging.charge >= FULL_CHARGE {
            continue;
        }

        let left = FULL_CHARGE - charging.charge;
        let added = if config.max_charge_duration <= 0.0 {
            left
        } else {
            (FULL_CHARGE / config.max_charge_duration) * dt
        };
        let added = added.clamp(0.0, left);
        let required = added * config.ammo_usage_rate_while_charging;
        let reserve = match state.ammo {
            AmmoPool::Reserve { amount } => amount,
            _ => 0.0,
        };
        if required <= reserve {
            ammo::use_reserve(state, required, now);
            charging.charge = (charging.charge + added).clamp(0.0, FULL_CHARGE);
            state.charge = Some(charging);
        }
    }
}

/// Finite-difference the muzzle's world velocity from its position over
/// the last tick.
pub fn update_muzzle_kinematics(world: &mut World, dt: f32) {
    for (_entity, state) in world.query_mut::<&mut WeaponState>() {
        if !state.active {
            continue;
        }
        state.muzzle_velocity = (state.muzzle.position - state.last_muzzle_position) / dt;
        state.last_muzzle_position = state.muzzle.position;
    }
}

/// Drive the continuous-fire audio loop from the latched trigger state
/// and ammo availability.
pub fn update_continuous_fire(world: &mut World, events: &mut Vec<CombatEvent>) {
    for (entity, (state, config)) in world.query_mut::<(&mut WeaponState, &WeaponConfig)>() {
        if !config.continuous_fire_sound || !state.active {
            continue;
        }
        let firing = state.wants_to_shoot && state.has_ammo_for_shot(config);
        if firing && !state.loop_sound_playing {
            events.push(CombatEvent::ContinuousFireStart {
                weapon: entity_id(entity),
            });
            state.loop_sound_playing = true;
        } else if !firing && state.loop_sound_playing {
            events.push(CombatEvent::ContinuousFireEnd {
                weapon: entity_id(entity),
            });
            state.loop_sound_playing = false;
        }
    }
}
