//! End-of-tick lifetime enforcement.
//!
//! The hard lifetime applies regardless of flight phase: a planted
//! projectile whose socket never expires it is still removed here.

use hecs::{Entity, World};

use brimstone_core::config::ProjectileConfig;
use brimstone_core::events::CombatEvent;
use brimstone_core::types::SimTime;

use crate::projectile::ProjectileState;
use crate::systems::entity_id;

pub fn run(
    world: &mut World,
    time: &SimTime,
    events: &mut Vec<CombatEvent>,
    despawns: &mut Vec<Entity>,
) {
    let now = time.now();
    for (entity, (state, config)) in world.query::<(&ProjectileState, &ProjectileConfig)>().iter() {
        if state.shoot_time + config.max_lifetime <= now {
            despawns.push(entity);
        }
    }
    for entity in despawns.drain(..) {
        events.push(CombatEvent::ProjectileDestroyed {
            projectile: entity_id(entity),
        });
        let _ = world.despawn(entity);
    }
}
