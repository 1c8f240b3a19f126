//! The simulation engine facade.
//!
//! Owns the ECS world, the fixed-tick clock, the seeded RNG, and the
//! event queue. External collaborators (loadout, skills) are injected
//! explicitly; the engine never reaches out to ambient state.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use brimstone_core::components::{AmmoPool, WeaponState};
use brimstone_core::config::{WeaponConfig, WeaponSetupError};
use brimstone_core::contracts::{LoadoutBonus, SkillProvider};
use brimstone_core::events::CombatEvent;
use brimstone_core::types::{CameraPose, MuzzlePose, SimTime, TriggerIntent};

use crate::systems::{self, entity_id};
use crate::weapon::WeaponOwner;

/// Engine construction parameters.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed. Identical seeds and inputs replay identical event
    /// streams.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    events: Vec<CombatEvent>,
    despawn_buffer: Vec<Entity>,
    loadout: Option<Box<dyn LoadoutBonus>>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            loadout: None,
        }
    }

    /// Inject the loadout bonus provider. Bonuses apply to each weapon
    /// once, at its first tick after activation.
    pub fn with_loadout_bonus(mut self, loadout: Box<dyn LoadoutBonus>) -> Self {
        self.loadout = Some(loadout);
        self
    }

    /// Spawn a weapon held by `owner`. A defective config aborts the
    /// spawn instead of producing a weapon that misbehaves mid-tick.
    pub fn spawn_weapon(
        &mut self,
        config: WeaponConfig,
        owner: Entity,
        muzzle: MuzzlePose,
    ) -> Result<Entity, WeaponSetupError> {
        config.validate()?;
        if !muzzle.forward.is_finite() || muzzle.forward.length_squared() < 1e-6 {
            return Err(WeaponSetupError::MissingMuzzle);
        }
        let state = WeaponState::new(&config, muzzle);
        let name = config.name.clone();
        let entity = self.world.spawn((state, config, WeaponOwner(owner)));
        log::debug!("spawned weapon {name:?} as {entity:?}");
        Ok(entity)
    }

    /// Show or hide a weapon. Hidden weapons neither fire nor regenerate.
    pub fn show_weapon(&mut self, weapon: Entity, shown: bool) {
        if let Ok(state) = self.world.query_one_mut::<&mut WeaponState>(weapon) {
            state.active = shown;
            self.events.push(CombatEvent::WeaponShown {
                weapon: entity_id(weapon),
                shown,
            });
            if shown {
                self.events.push(CombatEvent::WeaponChangeSfx {
                    weapon: entity_id(weapon),
                });
            }
        }
    }

    /// Update the muzzle pose from the animation rig. Muzzle velocity is
    /// finite-differenced from consecutive poses each tick.
    pub fn set_muzzle_pose(&mut self, weapon: Entity, muzzle: MuzzlePose) {
        if let Ok(state) = self.world.query_one_mut::<&mut WeaponState>(weapon) {
            state.muzzle = muzzle;
        }
    }

    /// Set or clear the aim camera used for trajectory correction and
    /// spawn-time occlusion checks.
    pub fn set_aim_camera(&mut self, weapon: Entity, camera: Option<CameraPose>) {
        if let Ok(state) = self.world.query_one_mut::<&mut WeaponState>(weapon) {
            state.aim_camera = camera;
        }
    }

    /// Dispatch one trigger intent. Runs immediately against the current
    /// clock; returns whether the intent was handled.
    pub fn handle_shoot_inputs(&mut self, weapon: Entity, intent: TriggerIntent) -> bool {
        systems::fire_control::handle_shoot_inputs(
            &mut self.world,
            &mut self.rng,
            &mut self.events,
            weapon,
            &intent,
            self.time.now(),
        )
    }

    /// Apply one skill unlock event to every weapon. Multiplicative
    /// delay reductions stack across unlock events.
    pub fn apply_skill_unlock(&mut self, skills: &dyn SkillProvider) {
        for (_entity, state) in self.world.query_mut::<&mut WeaponState>() {
            state.delay_between_shots *= skills.fire_delay_multiplier(state.mode);
            state.is_buffed |= skills.is_buffed(state.mode);
        }
    }

    /// Advance the simulation by one tick and drain the events it
    /// produced.
    pub fn tick(&mut self) -> Vec<CombatEvent> {
        self.apply_loadout_bonuses();
        systems::ammo::run(&mut self.world, &self.time);
        systems::fire_control::update_charging(&mut self.world, &self.time);
        systems::fire_control::update_muzzle_kinematics(&mut self.world, self.time.dt());
        systems::fire_control::update_continuous_fire(&mut self.world, &mut self.events);
        systems::projectile_flight::run(
            &mut self.world,
            &self.time,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        systems::cleanup::run(
            &mut self.world,
            &self.time,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        self.time.advance();
        std::mem::take(&mut self.events)
    }

    fn apply_loadout_bonuses(&mut self) {
        let Some(loadout) = &self.loadout else {
            return;
        };
        for (_entity, state) in self.world.query_mut::<&mut WeaponState>() {
            if !state.active || state.loadout_applied {
                continue;
            }
            match &mut state.ammo {
                AmmoPool::GrenadesLauncher { pool, .. } => {
                    *pool += loadout.extra_grenades();
                }
                AmmoPool::Blaster {
                    spare_magazines, ..
                } => {
                    *spare_magazines += loadout.extra_magazines();
                }
                _ => {}
            }
            state.loadout_applied = true;
            state.recompute_ratios();
        }
    }

    // --- UI readouts ---

    pub fn current_ammo(&self, weapon: Entity) -> i32 {
        self.weapon_state(weapon).map_or(0, |s| s.current_ammo())
    }

    pub fn current_magazines(&self, weapon: Entity) -> i32 {
        self.weapon_state(weapon)
            .map_or(0, |s| s.current_magazines())
    }

    pub fn ammo_ratio(&self, weapon: Entity) -> f32 {
        self.weapon_state(weapon).map_or(0.0, |s| s.ammo_ratio)
    }

    pub fn cooling_ratio(&self, weapon: Entity) -> f32 {
        self.weapon_state(weapon).map_or(1.0, |s| s.cooling_ratio)
    }

    /// Reserve required to fund one more shot of this weapon.
    pub fn ammo_needed_to_shoot(&self, weapon: Entity) -> f32 {
        self.world
            .get::<&WeaponConfig>(weapon)
            .map_or(0.0, |c| c.ammo_needed_to_shoot())
    }

    pub fn is_charging(&self, weapon: Entity) -> bool {
        self.weapon_state(weapon).map_or(false, |s| s.charge.is_some())
    }

    /// Accumulated charge in [0, 1]; 0 when not charging.
    pub fn current_charge(&self, weapon: Entity) -> f32 {
        self.weapon_state(weapon)
            .and_then(|s| s.charge.map(|c| c.charge))
            .unwrap_or(0.0)
    }

    fn weapon_state(&self, weapon: Entity) -> Option<WeaponState> {
        self.world
            .get::<&WeaponState>(weapon)
            .ok()
            .map(|s| (*s).clone())
    }

    // --- Direct access for world setup and inspection ---

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn time(&self) -> &SimTime {
        &self.time
    }
}
