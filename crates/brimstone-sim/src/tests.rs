use glam::Vec3;

use brimstone_core::components::WeaponState;
use brimstone_core::config::{AreaOfDamage, ProjectileConfig, WeaponConfig, WeaponSetupError};
use brimstone_core::contracts::{LoadoutBonus, SkillProvider};
use brimstone_core::enums::ShootMode;
use brimstone_core::events::CombatEvent;
use brimstone_core::types::{CameraPose, MuzzlePose, TriggerIntent};

use crate::engine::{SimConfig, SimulationEngine};
use crate::projectile::ProjectileState;
use crate::world_setup;

fn engine() -> SimulationEngine {
    SimulationEngine::new(SimConfig { seed: 7 })
}

fn muzzle() -> MuzzlePose {
    MuzzlePose {
        position: Vec3::ZERO,
        forward: Vec3::Z,
    }
}

fn press() -> TriggerIntent {
    TriggerIntent {
        pressed: true,
        held: true,
        ..Default::default()
    }
}

fn hold() -> TriggerIntent {
    TriggerIntent {
        held: true,
        ..Default::default()
    }
}

fn release() -> TriggerIntent {
    TriggerIntent {
        released: true,
        ..Default::default()
    }
}

/// Spawn a weapon held by a fresh actor and show it.
fn ready_weapon(engine: &mut SimulationEngine, config: WeaponConfig) -> hecs::Entity {
    let owner = engine.world_mut().spawn(());
    let weapon = engine
        .spawn_weapon(config, owner, muzzle())
        .expect("valid config");
    engine.show_weapon(weapon, true);
    weapon
}

fn projectile_count(engine: &SimulationEngine) -> usize {
    engine.world().query::<&ProjectileState>().iter().count()
}

// ---- Ammo economy ----

#[test]
fn test_blaster_empties_magazine_then_reloads_from_spares() {
    let mut engine = engine();
    let weapon = ready_weapon(
        &mut engine,
        WeaponConfig {
            mode: ShootMode::Blaster,
            magazine_capacity: 10.0,
            spare_magazines: 2.0,
            delay_between_shots: 0.0,
            reload_delay: 0.5,
            reload_rate: 20.0,
            ..Default::default()
        },
    );

    for _ in 0..10 {
        assert!(engine.handle_shoot_inputs(weapon, press()));
        engine.tick();
    }
    assert_eq!(engine.current_ammo(weapon), 0);
    assert_eq!(engine.current_magazines(weapon), 2);
    // Empty magazine blocks further shots until the reload completes.
    assert!(!engine.handle_shoot_inputs(weapon, press()));

    for _ in 0..150 {
        engine.tick();
    }
    assert_eq!(engine.current_ammo(weapon), 10);
    assert_eq!(engine.current_magazines(weapon), 1);
    assert!(engine.handle_shoot_inputs(weapon, press()));
}

#[test]
fn test_empty_blaster_magazine_delays_reload_by_one_second() {
    let mut engine = engine();
    let weapon = ready_weapon(
        &mut engine,
        WeaponConfig {
            mode: ShootMode::Blaster,
            magazine_capacity: 1.0,
            spare_magazines: 1.0,
            delay_between_shots: 0.0,
            reload_delay: 0.2,
            reload_rate: 100.0,
            ..Default::default()
        },
    );

    assert!(engine.handle_shoot_inputs(weapon, press()));
    // One second in: the delay window has not opened yet because the
    // empty magazine nudged the last-shot timestamp forward.
    for _ in 0..60 {
        engine.tick();
    }
    assert_eq!(engine.current_ammo(weapon), 0);
    // Shortly after 1.2s the reload runs and completes.
    for _ in 0..20 {
        engine.tick();
    }
    assert_eq!(engine.current_ammo(weapon), 1);
    assert_eq!(engine.current_magazines(weapon), 0);
}

#[test]
fn test_machine_gun_burst_limited_by_cooling() {
    let mut engine = engine();
    let weapon = ready_weapon(
        &mut engine,
        WeaponConfig {
            mode: ShootMode::MachineGun,
            ammo_capacity: 20.0,
            cooling_capacity: 5.0,
            delay_between_shots: 0.0,
            reload_delay: 0.5,
            reload_rate: 10.0,
            ..Default::default()
        },
    );

    let mut shots = 0;
    for _ in 0..10 {
        if engine.handle_shoot_inputs(weapon, hold()) {
            shots += 1;
        }
        engine.tick();
    }
    // Five units of cooling fund exactly five shots.
    assert_eq!(shots, 5);
    assert_eq!(engine.current_ammo(weapon), 15);
    assert!(engine.cooling_ratio(weapon) < 0.2);

    // Idle past the reload delay; cooling regenerates and firing
    // resumes.
    for _ in 0..90 {
        engine.tick();
    }
    assert!((engine.cooling_ratio(weapon) - 1.0).abs() < 1e-4);
    assert!(engine.handle_shoot_inputs(weapon, hold()));
}

#[test]
fn test_grenade_launcher_draws_from_shared_pool() {
    let mut engine = engine();
    let weapon = ready_weapon(
        &mut engine,
        WeaponConfig {
            mode: ShootMode::GrenadesLauncher,
            grenades_in_weapon: 2.0,
            grenades_total: 5.0,
            delay_between_shots: 0.0,
            reload_delay: 0.1,
            reload_rate: 50.0,
            ..Default::default()
        },
    );

    assert!(engine.handle_shoot_inputs(weapon, press()));
    engine.tick();
    assert!(engine.handle_shoot_inputs(weapon, press()));
    engine.tick();
    // Loaded grenades are spent; the pool holds what's left.
    assert_eq!(engine.current_ammo(weapon), 3);
    assert!(!engine.handle_shoot_inputs(weapon, press()));

    for _ in 0..30 {
        engine.tick();
    }
    assert!(engine.handle_shoot_inputs(weapon, press()));
}

#[test]
fn test_last_grenade_fires_without_waiting_for_reload() {
    let mut engine = engine();
    let weapon = ready_weapon(
        &mut engine,
        WeaponConfig {
            mode: ShootMode::GrenadesLauncher,
            grenades_in_weapon: 1.0,
            grenades_total: 2.0,
            delay_between_shots: 0.0,
            reload_delay: 5.0,
            ..Default::default()
        },
    );

    assert!(engine.handle_shoot_inputs(weapon, press()));
    engine.tick();
    // A pool of exactly one is still fireable; no reload is scheduled
    // for it.
    assert!(engine.handle_shoot_inputs(weapon, press()));
    engine.tick();
    assert_eq!(engine.current_ammo(weapon), 0);
}

#[test]
fn test_manual_requires_press_edge_and_reserve() {
    let mut engine = engine();
    let weapon = ready_weapon(
        &mut engine,
        WeaponConfig {
            mode: ShootMode::Manual,
            delay_between_shots: 0.0,
            ..Default::default()
        },
    );

    // Holding without a press edge never fires.
    assert!(!engine.handle_shoot_inputs(weapon, hold()));
    assert!(engine.handle_shoot_inputs(weapon, press()));
    engine.tick();
    // The reserve funded exactly one shot.
    assert!(!engine.handle_shoot_inputs(weapon, press()));
}

// ---- Charge weapons ----

fn charge_config() -> WeaponConfig {
    WeaponConfig {
        mode: ShootMode::Charge,
        bullets_per_shot: 4,
        delay_between_shots: 0.0,
        max_charge_duration: 0.5,
        ammo_used_on_start_charge: 0.1,
        ammo_usage_rate_while_charging: 0.2,
        ..Default::default()
    }
}

#[test]
fn test_charge_accrues_monotonically_and_fires_on_release() {
    let mut engine = engine();
    let weapon = ready_weapon(&mut engine, charge_config());

    let mut last_charge = 0.0;
    for _ in 0..40 {
        engine.handle_shoot_inputs(weapon, hold());
        engine.tick();
        let charge = engine.current_charge(weapon);
        assert!(charge >= last_charge, "charge must never decrease");
        last_charge = charge;
    }
    assert!(engine.is_charging(weapon));
    assert!((last_charge - 1.0).abs() < 1e-4);

    assert!(engine.handle_shoot_inputs(weapon, release()));
    let events = engine.tick();
    assert!(events.iter().any(|e| matches!(
        e,
        CombatEvent::ShotFired { bullets: 4, .. }
    )));
    // Charge resets exactly, not approximately.
    assert!(!engine.is_charging(weapon));
    assert_eq!(engine.current_charge(weapon), 0.0);
}

#[test]
fn test_charge_accrual_halts_when_reserve_cannot_fund_it() {
    let mut engine = engine();
    let mut config = charge_config();
    // Each accrued unit of charge costs thirty units of reserve, far
    // more than the reserve holds.
    config.ammo_usage_rate_while_charging = 30.0;
    let weapon = ready_weapon(&mut engine, config);

    for _ in 0..60 {
        engine.handle_shoot_inputs(weapon, hold());
        engine.tick();
    }
    assert!(engine.is_charging(weapon));
    assert_eq!(engine.current_charge(weapon), 0.0);
}

// ---- Projectile flight ----

fn rifle_config(projectile: ProjectileConfig) -> WeaponConfig {
    WeaponConfig {
        mode: ShootMode::Manual,
        delay_between_shots: 0.0,
        projectile,
        ..Default::default()
    }
}

fn run_ticks(engine: &mut SimulationEngine, ticks: usize) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    for _ in 0..ticks {
        events.extend(engine.tick());
    }
    events
}

#[test]
fn test_projectile_hits_target_and_despawns() {
    let mut engine = engine();
    let weapon = ready_weapon(&mut engine, rifle_config(ProjectileConfig::default()));
    let target = world_setup::spawn_target(engine.world_mut(), Vec3::new(0.0, 0.0, 2.0), 0.5, 100.0);

    assert!(engine.handle_shoot_inputs(weapon, press()));
    let events = run_ticks(&mut engine, 20);

    let target_id = target.to_bits().get();
    assert!(events.iter().any(|e| matches!(
        e,
        CombatEvent::DamageDealt { target, amount, .. }
            if *target == target_id && (*amount - 40.0).abs() < 1e-4
    )));
    assert!(events
        .iter()
        .any(|e| matches!(e, CombatEvent::ImpactFx { .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, CombatEvent::ProjectileDestroyed { .. })));
    assert_eq!(projectile_count(&engine), 0);
}

#[test]
fn test_hit_filter_skips_marked_and_owner_geometry() {
    let mut engine = engine();
    let owner = engine.world_mut().spawn(());
    // The firer's own body sits right on the muzzle.
    engine.world_mut().spawn((
        brimstone_core::types::Position(Vec3::new(0.0, 0.0, 0.2)),
        crate::projectile::Collider {
            radius: 0.4,
            is_trigger: false,
            ignore_hits: false,
            owner: Some(owner),
        },
    ));
    world_setup::spawn_ignored_surface(engine.world_mut(), Vec3::new(0.0, 0.0, 1.0), 0.4);
    let target = world_setup::spawn_target(engine.world_mut(), Vec3::new(0.0, 0.0, 2.0), 0.4, 100.0);

    let weapon = engine
        .spawn_weapon(rifle_config(ProjectileConfig::default()), owner, muzzle())
        .unwrap();
    engine.show_weapon(weapon, true);

    assert!(engine.handle_shoot_inputs(weapon, press()));
    let events = run_ticks(&mut engine, 20);

    let target_id = target.to_bits().get();
    assert!(events.iter().any(|e| matches!(
        e,
        CombatEvent::DamageDealt { target, .. } if *target == target_id
    )));
}

#[test]
fn test_trigger_without_damageable_is_passed_through() {
    let mut engine = engine();
    let weapon = ready_weapon(&mut engine, rifle_config(ProjectileConfig::default()));
    // A plant socket is a trigger with no damageable capability; a
    // non-planting projectile flies straight through it.
    world_setup::spawn_plant_socket(engine.world_mut(), Vec3::new(0.0, 0.0, 1.0), 0.4, 1.0);
    let target = world_setup::spawn_target(engine.world_mut(), Vec3::new(0.0, 0.0, 2.0), 0.4, 100.0);

    assert!(engine.handle_shoot_inputs(weapon, press()));
    let events = run_ticks(&mut engine, 20);

    let target_id = target.to_bits().get();
    assert!(events.iter().any(|e| matches!(
        e,
        CombatEvent::DamageDealt { target, .. } if *target == target_id
    )));
}

#[test]
fn test_piercing_projectile_damages_every_overlap_each_tick() {
    let mut engine = engine();
    let projectile = ProjectileConfig {
        pierces: true,
        damage: 10.0,
        radius: 0.05,
        ..Default::default()
    };
    let weapon = ready_weapon(&mut engine, rifle_config(projectile));
    let a = world_setup::spawn_target(engine.world_mut(), Vec3::new(0.0, 0.0, 1.0), 0.4, 10_000.0);
    let b = world_setup::spawn_target(engine.world_mut(), Vec3::new(0.0, 0.0, 1.8), 0.4, 10_000.0);
    world_setup::spawn_surface(engine.world_mut(), Vec3::new(0.0, 0.0, 3.0), 0.3);

    assert!(engine.handle_shoot_inputs(weapon, press()));
    let events = run_ticks(&mut engine, 30);

    let hits_on = |entity: hecs::Entity| {
        let id = entity.to_bits().get();
        events
            .iter()
            .filter(|e| matches!(e, CombatEvent::DamageDealt { target, .. } if *target == id))
            .count()
    };
    // Overlapped targets take damage on every tick until the solid
    // wall stops the projectile, not once per target.
    assert!(hits_on(a) >= 3, "first target hit {} times", hits_on(a));
    assert!(hits_on(b) >= 3, "second target hit {} times", hits_on(b));
    // Impact cues fire once per entered target plus once for the wall.
    let impacts = events
        .iter()
        .filter(|e| matches!(e, CombatEvent::ImpactFx { .. }))
        .count();
    assert_eq!(impacts, 3);
    assert!(events
        .iter()
        .any(|e| matches!(e, CombatEvent::ProjectileDestroyed { .. })));
    assert_eq!(projectile_count(&engine), 0);
}

#[test]
fn test_planting_projectile_freezes_pulses_and_expires() {
    let mut engine = engine();
    let projectile = ProjectileConfig {
        plants: true,
        radius: 0.05,
        ..Default::default()
    };
    let weapon = ready_weapon(&mut engine, rifle_config(projectile));
    let socket =
        world_setup::spawn_plant_socket(engine.world_mut(), Vec3::new(0.0, 0.0, 1.0), 0.45, 0.1);
    world_setup::spawn_surface(engine.world_mut(), Vec3::new(0.0, 0.0, 1.2), 0.1);

    assert!(engine.handle_shoot_inputs(weapon, press()));
    let events = run_ticks(&mut engine, 30);

    let socket_id = socket.to_bits().get();
    assert!(events
        .iter()
        .any(|e| matches!(e, CombatEvent::ProjectilePlanted { .. })));
    assert!(events.iter().any(|e| matches!(
        e,
        CombatEvent::PlantPulse { socket, .. } if *socket == socket_id
    )));
    assert!(events
        .iter()
        .any(|e| matches!(e, CombatEvent::ProjectileDestroyed { .. })));
    assert_eq!(projectile_count(&engine), 0);
}

#[test]
fn test_area_damage_falls_off_with_distance() {
    let mut engine = engine();
    let projectile = ProjectileConfig {
        damage: 100.0,
        area_of_damage: Some(AreaOfDamage {
            radius: 2.0,
            damage_ratio_at_edge: 0.5,
        }),
        ..Default::default()
    };
    let weapon = ready_weapon(&mut engine, rifle_config(projectile));
    world_setup::spawn_surface(engine.world_mut(), Vec3::new(0.0, 0.0, 2.0), 0.2);
    let near = world_setup::spawn_target(engine.world_mut(), Vec3::new(0.5, 0.0, 2.0), 0.1, 1000.0);
    let far = world_setup::spawn_target(engine.world_mut(), Vec3::new(1.5, 0.0, 2.0), 0.1, 1000.0);

    assert!(engine.handle_shoot_inputs(weapon, press()));
    let events = run_ticks(&mut engine, 20);

    let amount_for = |entity: hecs::Entity| {
        let id = entity.to_bits().get();
        events.iter().find_map(|e| match e {
            CombatEvent::DamageDealt {
                target,
                amount,
                is_explosive,
                ..
            } if *target == id => {
                assert!(is_explosive);
                Some(*amount)
            }
            _ => None,
        })
    };
    let near_amount = amount_for(near).expect("near target damaged");
    let far_amount = amount_for(far).expect("far target damaged");
    assert!(near_amount > far_amount);
    assert!(far_amount >= 50.0);
}

#[test]
fn test_projectile_expires_at_hard_lifetime() {
    let mut engine = engine();
    let projectile = ProjectileConfig {
        max_lifetime: 0.05,
        ..Default::default()
    };
    let weapon = ready_weapon(&mut engine, rifle_config(projectile));

    assert!(engine.handle_shoot_inputs(weapon, press()));
    engine.tick();
    assert_eq!(projectile_count(&engine), 1);
    let events = run_ticks(&mut engine, 10);
    assert!(events
        .iter()
        .any(|e| matches!(e, CombatEvent::ProjectileDestroyed { .. })));
    assert_eq!(projectile_count(&engine), 0);
}

#[test]
fn test_trajectory_correction_snaps_to_camera_line() {
    let mut engine = engine();
    let projectile = ProjectileConfig {
        trajectory_correction_distance: 0.0,
        ..Default::default()
    };
    let owner = engine.world_mut().spawn(());
    let off_center = MuzzlePose {
        position: Vec3::new(0.5, 0.0, 0.0),
        forward: Vec3::Z,
    };
    let weapon = engine
        .spawn_weapon(rifle_config(projectile), owner, off_center)
        .unwrap();
    engine.show_weapon(weapon, true);
    engine.set_aim_camera(
        weapon,
        Some(CameraPose {
            position: Vec3::ZERO,
            forward: Vec3::Z,
        }),
    );

    assert!(engine.handle_shoot_inputs(weapon, press()));
    // Zero correction distance snaps the spawn position onto the
    // camera center line.
    let mut found = false;
    for (_e, (_state, pos)) in engine
        .world()
        .query::<(&ProjectileState, &brimstone_core::types::Position)>()
        .iter()
    {
        assert!(pos.0.x.abs() < 1e-4, "spawned at {:?}", pos.0);
        found = true;
    }
    assert!(found);
}

#[test]
fn test_spawn_occlusion_resolves_geometry_between_camera_and_muzzle() {
    let mut engine = engine();
    let weapon = ready_weapon(&mut engine, rifle_config(ProjectileConfig::default()));
    engine.set_aim_camera(
        weapon,
        Some(CameraPose {
            position: Vec3::new(0.0, 0.0, -1.0),
            forward: Vec3::Z,
        }),
    );
    world_setup::spawn_surface(engine.world_mut(), Vec3::new(0.0, 0.0, -0.5), 0.2);

    assert!(engine.handle_shoot_inputs(weapon, press()));
    let events = engine.tick();
    assert!(events
        .iter()
        .any(|e| matches!(e, CombatEvent::ProjectileDestroyed { .. })));
    assert_eq!(projectile_count(&engine), 0);
}

// ---- Fire control surface ----

#[test]
fn test_hidden_weapon_does_not_fire() {
    let mut engine = engine();
    let owner = engine.world_mut().spawn(());
    let weapon = engine
        .spawn_weapon(rifle_config(ProjectileConfig::default()), owner, muzzle())
        .unwrap();
    assert!(!engine.handle_shoot_inputs(weapon, press()));

    engine.show_weapon(weapon, true);
    let events = engine.tick();
    assert!(events.iter().any(|e| matches!(
        e,
        CombatEvent::WeaponShown { shown: true, .. }
    )));
    assert!(events
        .iter()
        .any(|e| matches!(e, CombatEvent::WeaponChangeSfx { .. })));
    assert!(engine.handle_shoot_inputs(weapon, press()));
}

#[test]
fn test_melee_swing_reports_handled_while_delayed() {
    let mut engine = engine();
    let weapon = ready_weapon(
        &mut engine,
        WeaponConfig {
            mode: ShootMode::Melee,
            delay_between_shots: 0.5,
            ..Default::default()
        },
    );
    let swing = TriggerIntent {
        melee: true,
        ..Default::default()
    };

    assert!(engine.handle_shoot_inputs(weapon, swing));
    // A second swing inside the delay window is still handled, it
    // just does not produce another shot.
    assert!(engine.handle_shoot_inputs(weapon, swing));
    let events = engine.tick();
    let shots = events
        .iter()
        .filter(|e| matches!(e, CombatEvent::ShotFired { .. }))
        .count();
    assert_eq!(shots, 1);
}

#[test]
fn test_continuous_fire_loop_starts_and_stops() {
    let mut engine = engine();
    let weapon = ready_weapon(
        &mut engine,
        WeaponConfig {
            mode: ShootMode::MachineGun,
            ammo_capacity: 50.0,
            cooling_capacity: 50.0,
            delay_between_shots: 0.0,
            continuous_fire_sound: true,
            ..Default::default()
        },
    );

    engine.handle_shoot_inputs(weapon, hold());
    let events = engine.tick();
    assert!(events
        .iter()
        .any(|e| matches!(e, CombatEvent::ContinuousFireStart { .. })));
    assert!(!events
        .iter()
        .any(|e| matches!(e, CombatEvent::ShootSfx { .. })));

    engine.handle_shoot_inputs(weapon, TriggerIntent::default());
    let events = engine.tick();
    assert!(events
        .iter()
        .any(|e| matches!(e, CombatEvent::ContinuousFireEnd { .. })));
}

// ---- Injection points ----

struct TwoSpareMagazines;

impl LoadoutBonus for TwoSpareMagazines {
    fn extra_grenades(&self) -> f32 {
        0.0
    }
    fn extra_magazines(&self) -> f32 {
        2.0
    }
}

#[test]
fn test_loadout_bonus_applies_once_after_activation() {
    let mut engine =
        SimulationEngine::new(SimConfig { seed: 7 }).with_loadout_bonus(Box::new(TwoSpareMagazines));
    let weapon = ready_weapon(
        &mut engine,
        WeaponConfig {
            mode: ShootMode::Blaster,
            magazine_capacity: 10.0,
            spare_magazines: 1.0,
            ..Default::default()
        },
    );

    engine.tick();
    assert_eq!(engine.current_magazines(weapon), 3);
    engine.tick();
    assert_eq!(engine.current_magazines(weapon), 3);
}

struct HalvedDelay;

impl SkillProvider for HalvedDelay {
    fn is_buffed(&self, _mode: ShootMode) -> bool {
        true
    }
    fn fire_delay_multiplier(&self, _mode: ShootMode) -> f32 {
        0.5
    }
}

#[test]
fn test_skill_unlock_shortens_delay_and_buffs_projectile() {
    let mut engine = engine();
    let config = WeaponConfig {
        mode: ShootMode::Manual,
        delay_between_shots: 0.5,
        projectile_buffed: Some(ProjectileConfig {
            damage: 80.0,
            ..Default::default()
        }),
        ..Default::default()
    };
    let weapon = ready_weapon(&mut engine, config);
    let target = world_setup::spawn_target(engine.world_mut(), Vec3::new(0.0, 0.0, 2.0), 0.5, 1000.0);

    engine.apply_skill_unlock(&HalvedDelay);
    {
        let state = engine.world().get::<&WeaponState>(weapon).unwrap();
        assert!((state.delay_between_shots - 0.25).abs() < 1e-5);
        assert!(state.is_buffed);
    }

    assert!(engine.handle_shoot_inputs(weapon, press()));
    let events = run_ticks(&mut engine, 20);
    let target_id = target.to_bits().get();
    assert!(events.iter().any(|e| matches!(
        e,
        CombatEvent::DamageDealt { target, amount, .. }
            if *target == target_id && (*amount - 80.0).abs() < 1e-4
    )));
}

// ---- Setup errors ----

#[test]
fn test_defective_config_rejected_at_spawn() {
    let mut engine = engine();
    let owner = engine.world_mut().spawn(());
    let bad = WeaponConfig {
        mode: ShootMode::Blaster,
        magazine_capacity: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        engine.spawn_weapon(bad, owner, muzzle()),
        Err(WeaponSetupError::InvalidAmmoCapacity { .. })
    ));

    let no_muzzle = MuzzlePose {
        position: Vec3::ZERO,
        forward: Vec3::ZERO,
    };
    assert!(matches!(
        engine.spawn_weapon(WeaponConfig::default(), owner, no_muzzle),
        Err(WeaponSetupError::MissingMuzzle)
    ));
}

// ---- Determinism ----

fn spread_session(seed: u64) -> String {
    let mut engine = SimulationEngine::new(SimConfig { seed });
    let weapon = ready_weapon(
        &mut engine,
        WeaponConfig {
            mode: ShootMode::Manual,
            delay_between_shots: 0.0,
            bullet_spread_angle_deg: 30.0,
            bullets_per_shot: 6,
            ..Default::default()
        },
    );
    world_setup::spawn_target(engine.world_mut(), Vec3::new(0.0, 0.0, 2.0), 1.5, 10_000.0);

    engine.handle_shoot_inputs(weapon, press());
    let events = run_ticks(&mut engine, 30);
    serde_json::to_string(&events).unwrap()
}

#[test]
fn test_same_seed_replays_identical_event_stream() {
    assert_eq!(spread_session(11), spread_session(11));
}

#[test]
fn test_different_seed_scatters_differently() {
    assert_ne!(spread_session(11), spread_session(12));
}
