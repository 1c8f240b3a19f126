//! Core types and definitions for the brimstone combat simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! weapon/projectile configuration, ammo state, events, contracts, and
//! constants. It has no dependency on the ECS or any runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod enums;
pub mod events;
pub mod types;
