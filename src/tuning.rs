//! Data-driven game balance
//!
//! Every gameplay constant in [`crate::consts`] has a field here. A tuning
//! file only needs the keys it wants to override; the rest keep defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Runtime-tunable physics and scoring values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Pacing ===
    /// Scheduler tick rate (ticks per wall-clock second)
    pub tick_rate_hz: u32,
    /// Multiplier on the frame-normalised step `d`
    pub physics_speed: f64,
    /// Longest interval one tick simulates; longer stalls are dropped
    pub max_step_nanos: i64,

    // === Field ===
    /// Playfield height in cells
    pub field_height: u32,
    /// Playfield width in cells
    pub field_width: u32,
    /// Player 1 spawn point (y, x)
    pub p1_spawn: (f64, f64),
    /// Player 2 spawn point (y, x)
    pub p2_spawn: (f64, f64),

    // === Forces ===
    pub thrust_accel: f64,
    pub gravity_const: f64,
    pub max_speed: f64,

    // === Hazards ===
    pub well_kill_radius: f64,
    pub ship_collision_radius: f64,
    pub torpedo_hit_radius: f64,
    pub torpedo_mutual_radius: f64,

    // === Scoring ===
    pub hit_reward: i32,
    pub destruction_penalty: i32,
    pub win_score: i32,

    // === Weapons ===
    pub muzzle_offset: f64,
    pub muzzle_speed: f64,
    /// Torpedo lifetime in nanoseconds
    pub torpedo_fuse_nanos: i64,

    // === Engine ===
    pub heat_limit: f64,
    pub lockout_temp: f64,

    /// Ticks between trail samples
    pub trail_sample_period: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            physics_speed: 1.0,
            max_step_nanos: MAX_STEP_NANOS,

            field_height: FIELD_HEIGHT,
            field_width: FIELD_WIDTH,
            p1_spawn: P1_SPAWN,
            p2_spawn: P2_SPAWN,

            thrust_accel: THRUST_ACCEL,
            gravity_const: GRAVITY_CONST,
            max_speed: MAX_SPEED,

            well_kill_radius: WELL_KILL_RADIUS,
            ship_collision_radius: SHIP_COLLISION_RADIUS,
            torpedo_hit_radius: TORPEDO_HIT_RADIUS,
            torpedo_mutual_radius: TORPEDO_MUTUAL_RADIUS,

            hit_reward: HIT_REWARD,
            destruction_penalty: DESTRUCTION_PENALTY,
            win_score: WIN_SCORE,

            muzzle_offset: MUZZLE_OFFSET,
            muzzle_speed: MUZZLE_SPEED,
            torpedo_fuse_nanos: TORPEDO_FUSE_NANOS,

            heat_limit: HEAT_LIMIT,
            lockout_temp: LOCKOUT_TEMP,

            trail_sample_period: TRAIL_SAMPLE_PERIOD,
        }
    }
}

impl Tuning {
    /// Parse a JSON tuning document and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load a tuning file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning: {e}");
                Self::default()
            }
        }
    }

    /// Nanoseconds between scheduler ticks
    pub fn tick_interval_nanos(&self) -> i64 {
        1_000_000_000 / i64::from(self.tick_rate_hz.max(1))
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("tick_rate_hz", f64::from(self.tick_rate_hz)),
            ("physics_speed", self.physics_speed),
            ("max_step_nanos", self.max_step_nanos as f64),
            ("max_speed", self.max_speed),
            ("well_kill_radius", self.well_kill_radius),
            ("ship_collision_radius", self.ship_collision_radius),
            ("torpedo_hit_radius", self.torpedo_hit_radius),
            ("torpedo_mutual_radius", self.torpedo_mutual_radius),
            ("heat_limit", self.heat_limit),
            ("trail_sample_period", self.trail_sample_period as f64),
            ("torpedo_fuse_nanos", self.torpedo_fuse_nanos as f64),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::UnsafeValue {
                    name,
                    value,
                    expected: "finite and > 0",
                });
            }
        }

        if self.lockout_temp >= 0.0 || !self.lockout_temp.is_finite() {
            return Err(ConfigError::UnsafeValue {
                name: "lockout_temp",
                value: self.lockout_temp,
                expected: "< 0",
            });
        }
        if self.win_score <= 0 {
            return Err(ConfigError::UnsafeValue {
                name: "win_score",
                value: f64::from(self.win_score),
                expected: "> 0",
            });
        }
        // Wrap margins take two half-rows top and bottom, one column each side
        if self.field_height < 3 || self.field_width < 3 {
            return Err(ConfigError::UnsafeValue {
                name: "field_size",
                value: f64::from(self.field_height.min(self.field_width)),
                expected: ">= 3 cells on each axis",
            });
        }
        Ok(())
    }
}
