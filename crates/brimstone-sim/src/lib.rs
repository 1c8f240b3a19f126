//! Simulation engine for the brimstone combat core.
//!
//! Owns the hecs ECS world, runs the weapon and projectile systems at a
//! fixed tick rate, and emits `CombatEvent`s for external collaborators.

pub mod collision;
pub mod engine;
pub mod policy;
pub mod projectile;
pub mod systems;
pub mod weapon;
pub mod world_setup;

pub use brimstone_core as core;
pub use engine::SimulationEngine;

#[cfg(test)]
mod tests;
