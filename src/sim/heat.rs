//! Engine heat limiter
//!
//! Thrusting heats the engine at half a degree per nominal tick, idling cools
//! it at the same rate. Going over the limit locks the engine out: the
//! temperature drops to the lockout value and has to count back up to zero
//! (one degree per nominal tick) before thrust works again.

use serde::{Deserialize, Serialize};

use super::state::Ship;
use crate::tuning::Tuning;

/// Engine condition as seen by the limiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Temperature in `[0, limit]`, thrust allowed
    Cool,
    /// Temperature below zero, thrust forbidden until it recovers
    Overheated,
}

impl EngineState {
    pub fn of(ship: &Ship) -> Self {
        if ship.overheated() {
            EngineState::Overheated
        } else {
            EngineState::Cool
        }
    }
}

/// Advance the engine temperature by `d` nominal ticks
///
/// Returns true when thrust may be applied this tick.
pub fn regulate(ship: &mut Ship, d: f64, tuning: &Tuning) -> bool {
    if ship.temperature > tuning.heat_limit {
        overheat(ship, tuning);
        return false;
    }

    if ship.overheated() {
        ship.temperature = (ship.temperature + d).min(0.0);
        return false;
    }

    if !ship.thrust {
        ship.temperature = (ship.temperature - d / 2.0).max(0.0);
        return false;
    }

    ship.temperature += d / 2.0;
    if ship.temperature > tuning.heat_limit {
        overheat(ship, tuning);
    }
    true
}

fn overheat(ship: &mut Ship, tuning: &Tuning) {
    log::debug!("{:?} engine overheated", ship.id);
    ship.thrust = false;
    ship.temperature = tuning.lockout_temp;
}
