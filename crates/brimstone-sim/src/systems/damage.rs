//! Damage application.
//!
//! Damage to a missing or already-dead target is a no-op, never an error.

use glam::Vec3;
use hecs::{Entity, World};

use brimstone_core::components::Damageable;
use brimstone_core::config::AreaOfDamage;
use brimstone_core::events::CombatEvent;
use brimstone_core::types::Position;

use crate::systems::entity_id;

/// Apply point damage to one target.
pub fn inflict_damage(
    world: &mut World,
    target: Entity,
    amount: f32,
    is_explosive: bool,
    attacker: Entity,
    events: &mut Vec<CombatEvent>,
) {
    let Ok(mut damageable) = world.get::<&mut Damageable>(target) else {
        return;
    };
    if damageable.dead {
        return;
    }
    damageable.health -= amount;
    if damageable.health <= 0.0 {
        damageable.health = 0.0;
        damageable.dead = true;
    }
    events.push(CombatEvent::DamageDealt {
        target: entity_id(target),
        attacker: entity_id(attacker),
        amount,
        is_explosive,
    });
}

/// Apply area damage around a point, with linear falloff from full damage
/// at the center to `damage_ratio_at_edge` at the radius.
pub fn inflict_damage_in_area(
    world: &mut World,
    area: &AreaOfDamage,
    amount: f32,
    center: Vec3,
    attacker: Entity,
    events: &mut Vec<CombatEvent>,
) {
    let mut targets = Vec::new();
    for (entity, (pos, _)) in world.query::<(&Position, &Damageable)>().iter() {
        let distance = pos.0.distance(center);
        if distance <= area.radius {
            targets.push((entity, distance));
        }
    }
    for (entity, distance) in targets {
        let falloff = 1.0 - (1.0 - area.damage_ratio_at_edge) * (distance / area.radius);
        inflict_damage(world, entity, amount * falloff, true, attacker, events);
    }
}
