//! Projectile integration, swept collision, and terminal resolution.
//!
//! Runs in two phases per tick: first every projectile moves and sweeps
//! against a collider snapshot while its components are borrowed, then
//! the collected hits and overlap damage are applied against the world.

use glam::Vec3;
use hecs::{Entity, World};

use brimstone_core::components::Damageable;
use brimstone_core::config::ProjectileConfig;
use brimstone_core::enums::ProjectilePhase;
use brimstone_core::events::CombatEvent;
use brimstone_core::types::{clamp_magnitude, Position, SimTime, Velocity};

use crate::collision::{self, ColliderShape, SweepHit};
use crate::projectile::{PlantContact, ProjectileState};
use crate::systems::{damage, entity_id};

/// A validated terminal hit, resolved after the flight borrows end.
struct PendingHit {
    projectile: Entity,
    point: Vec3,
    normal: Vec3,
    target: Entity,
}

pub fn run(
    world: &mut World,
    time: &SimTime,
    events: &mut Vec<CombatEvent>,
    despawns: &mut Vec<Entity>,
) {
    let now = time.now();
    let dt = time.dt();
    let shapes = collision::gather_colliders(world);

    let mut hits: Vec<PendingHit> = Vec::new();
    let mut overlap_damage: Vec<(Entity, Entity, f32)> = Vec::new();
    let mut expired_plants: Vec<Entity> = Vec::new();

    for (entity, (state, pos, vel, config)) in world.query_mut::<(
        &mut ProjectileState,
        &mut Position,
        &mut Velocity,
        &ProjectileConfig,
    )>() {
        match state.phase {
            ProjectilePhase::Flying => {
                pos.0 += vel.0 * dt;
                if config.inherit_weapon_velocity {
                    pos.0 += state.inherited_muzzle_velocity * dt;
                }

                // Drift toward the aim-camera center line, consumed in
                // proportion to distance traveled.
                if let Some(correction) = &mut state.correction {
                    if !correction.finished() && config.trajectory_correction_distance > 0.0 {
                        let traveled = pos.0.distance(state.last_root_position);
                        let remaining = correction.full - correction.consumed;
                        let step = clamp_magnitude(
                            correction.full * (traveled / config.trajectory_correction_distance),
                            remaining.length(),
                        );
                        correction.consumed += step;
                        pos.0 += step;
                    }
                }

                state.forward = vel.0.normalize_or(state.forward);
                if config.gravity_down_acceleration > 0.0 {
                    vel.0 += Vec3::NEG_Y * config.gravity_down_acceleration * dt;
                }

                let mut closest: Option<SweepHit> = None;
                for hit in
                    collision::sweep_sphere(&shapes, state.last_root_position, pos.0, config.radius)
                {
                    let shape = &shapes[hit.shape_index];
                    // Targets a piercing projectile has already entered
                    // are pass-through; they must not mask the next
                    // surface.
                    if config.pierces && state.overlaps.contains(&shape.entity) {
                        continue;
                    }
                    if !hit_valid(shape, state, config.plants, now) {
                        continue;
                    }
                    if closest.map_or(true, |c| hit.distance < c.distance) {
                        closest = Some(hit);
                    }
                }
                if let Some(hit) = closest {
                    // A zero-distance hit started inside the volume; fall
                    // back to the projectile's own pose for the contact.
                    let (point, normal) = if hit.distance <= 0.0 {
                        (pos.0, -state.forward)
                    } else {
                        (hit.point, hit.normal)
                    };
                    hits.push(PendingHit {
                        projectile: entity,
                        point,
                        normal,
                        target: shapes[hit.shape_index].entity,
                    });
                }

                // Piercing projectiles damage every target they have
                // entered on every tick. Entries come from the sweep,
                // including zero-distance hits when spawned inside.
                if config.pierces {
                    for target in &state.overlaps {
                        overlap_damage.push((*target, state.owner, config.damage));
                    }
                }

                state.last_root_position = pos.0;
            }
            ProjectilePhase::Planted => {
                if let Some(plant) = &state.plant {
                    events.push(CombatEvent::PlantPulse {
                        socket: entity_id(plant.socket),
                        planted_at: plant.planted_at,
                        position: pos.0,
                    });
                    if plant.planted_at + plant.delay_to_destroy < now {
                        expired_plants.push(entity);
                    }
                }
            }
        }
    }

    for (target, attacker, amount) in overlap_damage {
        damage::inflict_damage(world, target, amount, false, attacker, events);
    }
    for hit in hits {
        resolve_hit(
            world, events, despawns, hit.projectile, hit.point, hit.normal, hit.target,
        );
    }
    for entity in expired_plants {
        events.push(CombatEvent::ProjectileDestroyed {
            projectile: entity_id(entity),
        });
        despawns.push(entity);
    }
    for entity in despawns.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Hit validity filter. Rejects explicitly ignored colliders, trigger
/// volumes without a damageable capability, and the firer's own volumes.
/// A rejected plant socket is still remembered so a planting projectile
/// can start its destroy timer.
fn hit_valid(shape: &ColliderShape, state: &mut ProjectileState, plants: bool, now: f32) -> bool {
    if shape.ignore_hits {
        return false;
    }
    if shape.is_trigger && !shape.damageable {
        if plants && state.plant.is_none() {
            if let Some(delay) = shape.plant_delay {
                state.plant = Some(PlantContact {
                    socket: shape.entity,
                    planted_at: now,
                    delay_to_destroy: delay,
                });
            }
        }
        return false;
    }
    if state.ignored.contains(&shape.entity) {
        return false;
    }
    true
}

/// Terminal resolution for one validated hit: damage, impact cues, then
/// despawn, pierce on, or plant depending on the projectile.
pub(crate) fn resolve_hit(
    world: &mut World,
    events: &mut Vec<CombatEvent>,
    despawns: &mut Vec<Entity>,
    projectile: Entity,
    point: Vec3,
    normal: Vec3,
    target: Entity,
) {
    let (damage_amount, area, pierces, plants, fx_offset, owner) = {
        let Ok(config) = world.get::<&ProjectileConfig>(projectile) else {
            return;
        };
        let Ok(state) = world.get::<&ProjectileState>(projectile) else {
            return;
        };
        (
            config.damage,
            config.area_of_damage,
            config.pierces,
            config.plants,
            config.impact_fx_offset,
            state.owner,
        )
    };
    let target_damageable = world.satisfies::<&Damageable>(target).unwrap_or(false);

    // A piercing projectile passes through damageable targets; the
    // per-tick overlap pass applies their damage. Impact cues still fire
    // on the entry hit.
    if pierces && target_damageable {
        let mut entered = false;
        if let Ok(mut state) = world.get::<&mut ProjectileState>(projectile) {
            if !state.overlaps.contains(&target) {
                state.overlaps.push(target);
                entered = true;
            }
        }
        if entered {
            events.push(CombatEvent::ImpactFx {
                position: point + normal * fx_offset,
                normal,
            });
            events.push(CombatEvent::ImpactSfx { position: point });
        }
        return;
    }

    if let Some(area) = area {
        damage::inflict_damage_in_area(world, &area, damage_amount, point, owner, events);
    } else if !plants {
        damage::inflict_damage(world, target, damage_amount, false, owner, events);
    }

    events.push(CombatEvent::ImpactFx {
        position: point + normal * fx_offset,
        normal,
    });
    events.push(CombatEvent::ImpactSfx { position: point });

    if plants {
        if let Ok(mut state) = world.get::<&mut ProjectileState>(projectile) {
            state.phase = ProjectilePhase::Planted;
            state.up = normal;
        }
        if let Ok(mut vel) = world.get::<&mut Velocity>(projectile) {
            vel.0 = Vec3::ZERO;
        }
        events.push(CombatEvent::ProjectilePlanted {
            projectile: entity_id(projectile),
            position: point,
            normal,
        });
    } else {
        events.push(CombatEvent::ProjectileDestroyed {
            projectile: entity_id(projectile),
        });
        despawns.push(projectile);
    }
}

/// Resolve a hit between the aim camera and the muzzle at spawn time, so
/// a projectile never flies off from inside geometry the camera ray would
/// have hit first.
#[allow(clippy::too_many_arguments)]
pub(crate) fn resolve_spawn_occlusion(
    world: &mut World,
    events: &mut Vec<CombatEvent>,
    despawns: &mut Vec<Entity>,
    shapes: &[ColliderShape],
    projectile: Entity,
    from: Vec3,
    to: Vec3,
    now: f32,
) {
    let mut closest: Option<(f32, Vec3, Vec3, Entity)> = None;
    {
        let Ok(mut state) = world.get::<&mut ProjectileState>(projectile) else {
            return;
        };
        let Ok(config) = world.get::<&ProjectileConfig>(projectile) else {
            return;
        };
        for hit in collision::sweep_sphere(shapes, from, to, 0.0) {
            let shape = &shapes[hit.shape_index];
            if !hit_valid(shape, &mut state, config.plants, now) {
                continue;
            }
            if closest.map_or(true, |(d, ..)| hit.distance < d) {
                closest = Some((hit.distance, hit.point, hit.normal, shape.entity));
            }
        }
    }
    if let Some((_, point, normal, target)) = closest {
        resolve_hit(world, events, despawns, projectile, point, normal, target);
    }
}
