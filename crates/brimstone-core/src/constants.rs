//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Fire control ---

/// Default minimum duration between two shots (seconds).
pub const DEFAULT_DELAY_BETWEEN_SHOTS: f32 = 0.5;

/// Spread is expressed as a fraction of this angle: a spread of 180°
/// interpolates all the way to a fully random direction.
pub const SPREAD_FULL_ANGLE_DEG: f32 = 180.0;

// --- Ammo economy ---

/// Default reload/cooling speed (units per second).
pub const DEFAULT_RELOAD_RATE: f32 = 1.0;

/// Default delay after the last shot before reload/cooling starts (seconds).
pub const DEFAULT_RELOAD_DELAY: f32 = 2.0;

/// Emptying a blaster magazine shifts the last-shot timestamp forward by
/// this much, delaying the reload window by one extra second.
pub const BLASTER_EMPTY_RELOAD_NUDGE_SECS: f32 = 1.0;

/// Cooling ratio at which a machine gun is no longer considered overheated.
pub const COOLING_READY_RATIO: f32 = 0.2;

// --- Charge weapons ---

/// Default duration to reach maximum charge (seconds).
pub const DEFAULT_MAX_CHARGE_DURATION: f32 = 2.0;

/// A fully accumulated charge.
pub const FULL_CHARGE: f32 = 1.0;

// --- Projectiles ---

/// Default projectile speed (m/s).
pub const DEFAULT_PROJECTILE_SPEED: f32 = 20.0;

/// Default projectile collision radius (meters).
pub const DEFAULT_PROJECTILE_RADIUS: f32 = 0.01;

/// Default projectile lifetime before hard expiry (seconds).
pub const DEFAULT_PROJECTILE_LIFETIME: f32 = 5.0;

/// Default projectile damage.
pub const DEFAULT_PROJECTILE_DAMAGE: f32 = 40.0;

/// Default offset along the hit normal at which impact FX spawn (meters).
pub const DEFAULT_IMPACT_FX_OFFSET: f32 = 0.1;
