//! Spacewar - a two-player orbital duel around a gravity well
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, heat, menu state)
//! - `scheduler`: Fixed-timestep tick pacing against a monotonic clock
//! - `game`: Host loop tying the simulation to a frontend
//! - `hud`: Read-only status readouts for renderers
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod hud;
pub mod scheduler;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use game::{Frontend, Game};
pub use sim::Bounds;
pub use tuning::Tuning;

use glam::DVec2;

/// Game configuration constants
///
/// Positions use doubled vertical resolution: one vertical unit is half a
/// terminal row, so a cell is square.
pub mod consts {
    /// Physics normalisation interval (one nominal tick = 1/30 s)
    pub const NOMINAL_TICK_NANOS: f64 = 33_333_333.3;
    /// Default pacing rate of the scheduler
    pub const TICK_RATE_HZ: u32 = 50;
    /// Longest interval a single tick may simulate (0.1 s)
    pub const MAX_STEP_NANOS: i64 = 100_000_000;

    /// Playfield size in terminal cells
    pub const FIELD_HEIGHT: u32 = 51;
    pub const FIELD_WIDTH: u32 = 101;

    /// Spawn points (y, x) in sub-cell units
    pub const P1_SPAWN: (f64, f64) = (76.5, 25.5);
    pub const P2_SPAWN: (f64, f64) = (26.5, 75.5);

    /// Engine acceleration per nominal tick
    pub const THRUST_ACCEL: f64 = 0.005;
    /// Gravitational constant of the well (force = -G / r²)
    pub const GRAVITY_CONST: f64 = 2.0;
    /// Velocity magnitude cap, per nominal tick
    pub const MAX_SPEED: f64 = 1.0;

    /// Ships closer than this to the well are destroyed
    pub const WELL_KILL_RADIUS: f64 = 1.0;
    /// Ships closer than this to each other are both destroyed
    pub const SHIP_COLLISION_RADIUS: f64 = 2.0;
    /// Torpedo-to-ship hit distance
    pub const TORPEDO_HIT_RADIUS: f64 = 2.0;
    /// Torpedo-to-torpedo annihilation distance
    pub const TORPEDO_MUTUAL_RADIUS: f64 = 2.0;

    /// Score awarded to the opponent of a ship struck by a torpedo
    pub const HIT_REWARD: i32 = 250;
    /// Score removed from a destroyed ship
    pub const DESTRUCTION_PENALTY: i32 = 50;
    /// Score that wins the match (or its negation, which loses it)
    pub const WIN_SCORE: i32 = 1000;

    /// Torpedo spawn distance from the ship centre
    pub const MUZZLE_OFFSET: f64 = 2.0;
    /// Torpedo speed added to the ship velocity on launch
    pub const MUZZLE_SPEED: f64 = 0.5;
    /// Torpedo lifetime in nanoseconds
    pub const TORPEDO_FUSE_NANOS: i64 = i32::MAX as i64;

    /// Engine temperature above which the engine locks out
    pub const HEAT_LIMIT: f64 = 100.0;
    /// Temperature set on overheat; cools back to zero before thrust resumes
    pub const LOCKOUT_TEMP: f64 = -100.0;

    /// Trail history is sampled every this many ticks
    pub const TRAIL_SAMPLE_PERIOD: u64 = 4;
}

/// Squared distance of an offset vector
#[inline]
pub fn distance_squared(delta: DVec2) -> f64 {
    delta.x.abs() * delta.x.abs() + delta.y.abs() * delta.y.abs()
}

/// Distance between two points
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    distance_squared(a - b).sqrt()
}

/// Magnitude of a velocity vector
#[inline]
pub fn speed(vel: DVec2) -> f64 {
    (vel.y * vel.y + vel.x * vel.x).sqrt()
}

/// Wrap a coordinate into `[min, max)`
///
/// Per-tick displacement is normally far smaller than the span, so a single
/// correction is tried first; anything further out is reduced modulo the span.
#[inline]
pub fn wrap_coord(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    let wrapped = if value >= max {
        value - span
    } else if value < min {
        value + span
    } else {
        return value;
    };

    let wrapped = if (min..max).contains(&wrapped) {
        wrapped
    } else {
        min + (wrapped - min).rem_euclid(span)
    };
    // Rounding can land a value just below `min` exactly on `max`
    if wrapped >= max { min } else { wrapped }
}
