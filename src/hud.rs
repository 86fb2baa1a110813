//! Status readouts for the player panels
//!
//! Everything here is derived from [`GameState`] and never feeds back into
//! the simulation. Renderers format these values however they like.

use serde::{Deserialize, Serialize};

use crate::sim::{EngineState, GameState, PlayerId, Ship, Torpedo};
use crate::tuning::Tuning;

/// Speeds above this fraction of the cap read as exactly 100%
const FULL_SPEED_DISPLAY: f64 = 0.995;

/// Engine panel state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineStatus {
    Idle,
    FullPower,
    Overheated,
}

/// Remaining torpedo lifetime, bucketed for the low-fuse indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuseTier {
    /// More than half the fuse left
    Full,
    /// More than a quarter left
    Half,
    Low,
}

/// Weapon panel state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponStatus {
    /// Tube empty, can fire
    Ready,
    /// Torpedo in flight
    Armed(FuseTier),
}

/// Everything one player panel shows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipReadout {
    pub score: i32,
    pub heading_degrees: u32,
    /// Current speed as a percentage of the cap
    pub speed_percent: f64,
    /// Direction of travel in degrees clockwise from north
    pub travel_degrees: f64,
    pub engine: EngineStatus,
    /// Temperature over the heat limit, negative during lockout
    pub heat: f64,
    pub weapon: WeaponStatus,
}

pub fn engine_status(ship: &Ship) -> EngineStatus {
    match EngineState::of(ship) {
        EngineState::Overheated => EngineStatus::Overheated,
        EngineState::Cool if ship.thrust => EngineStatus::FullPower,
        EngineState::Cool => EngineStatus::Idle,
    }
}

pub fn fuse_tier(torpedo: &Torpedo, full_fuse_nanos: i64) -> FuseTier {
    if torpedo.fuse_nanos > full_fuse_nanos / 2 {
        FuseTier::Full
    } else if torpedo.fuse_nanos > full_fuse_nanos / 4 {
        FuseTier::Half
    } else {
        FuseTier::Low
    }
}

/// Speed as a percentage of `max_speed`, snapping to 100 near the cap
pub fn speed_percent(ship: &Ship, max_speed: f64) -> f64 {
    let fraction = ship.body.speed() / max_speed;
    if fraction > FULL_SPEED_DISPLAY {
        100.0
    } else {
        fraction * 100.0
    }
}

/// Bearing of the velocity vector, clockwise from north, in `[0, 360)`
pub fn travel_degrees(ship: &Ship) -> f64 {
    let vel = ship.body.vel;
    (vel.y.atan2(vel.x).to_degrees() + 450.0).rem_euclid(360.0)
}

pub fn readout(state: &GameState, player: PlayerId, tuning: &Tuning) -> ShipReadout {
    let ship = state.ship(player);
    ShipReadout {
        score: ship.score,
        heading_degrees: ship.heading.degrees(),
        speed_percent: speed_percent(ship, tuning.max_speed),
        travel_degrees: travel_degrees(ship),
        engine: engine_status(ship),
        heat: ship.temperature / tuning.heat_limit,
        weapon: match state.torpedo(player) {
            None => WeaponStatus::Ready,
            Some(torpedo) => WeaponStatus::Armed(fuse_tier(torpedo, tuning.torpedo_fuse_nanos)),
        },
    }
}
