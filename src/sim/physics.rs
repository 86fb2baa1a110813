//! Per-tick integration: thrust, gravity, speed cap, movement, wraparound
//!
//! All rates are "per nominal tick"; `d` scales them by how many nominal
//! ticks actually elapsed, so trajectories do not depend on poll timing.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::heat;
use super::state::{Body, GameState};
use crate::consts::NOMINAL_TICK_NANOS;
use crate::tuning::Tuning;
use crate::{distance_squared, wrap_coord};

/// Playfield size in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub height: u32,
    pub width: u32,
}

impl Bounds {
    /// Smallest field that still has room inside the wrap margins
    pub const MIN_CELLS: u32 = 3;

    pub fn new(height: u32, width: u32) -> Self {
        Self {
            height: height.max(Self::MIN_CELLS),
            width: width.max(Self::MIN_CELLS),
        }
    }

    /// Vertical extent `[min, max)` in half-row units
    pub fn y_range(&self) -> (f64, f64) {
        (2.0, 2.0 * f64::from(self.height) - 2.0)
    }

    /// Horizontal extent `[min, max)` in columns
    pub fn x_range(&self) -> (f64, f64) {
        (1.0, f64::from(self.width) - 1.0)
    }

    /// Bring a position back into the field on both axes
    pub fn wrap(&self, pos: DVec2) -> DVec2 {
        let (y_min, y_max) = self.y_range();
        let (x_min, x_max) = self.x_range();
        DVec2::new(
            wrap_coord(pos.x, x_min, x_max),
            wrap_coord(pos.y, y_min, y_max),
        )
    }

    pub fn contains(&self, pos: DVec2) -> bool {
        let (y_min, y_max) = self.y_range();
        let (x_min, x_max) = self.x_range();
        (y_min..y_max).contains(&pos.y) && (x_min..x_max).contains(&pos.x)
    }
}

impl From<&Tuning> for Bounds {
    fn from(tuning: &Tuning) -> Self {
        Bounds::new(tuning.field_height, tuning.field_width)
    }
}

/// Frame-normalised step for an elapsed interval
#[inline]
pub fn step_scale(delta_nanos: i64, physics_speed: f64) -> f64 {
    delta_nanos as f64 / NOMINAL_TICK_NANOS * physics_speed
}

/// Inverse-square pull of the well on a body at `pos`, per nominal tick
///
/// Zero at the singularity itself; ships that close have already been
/// destroyed by the well-impact check.
pub fn gravity_accel(pos: DVec2, well: DVec2, gravity_const: f64) -> DVec2 {
    let offset = pos - well;
    let r2 = distance_squared(offset);
    if r2 == 0.0 {
        return DVec2::ZERO;
    }
    let r = r2.sqrt();
    let g = -gravity_const / r2;
    offset / r * g
}

/// Uniformly rescale velocity so its magnitude is at most `max_speed`
pub fn cap_speed(body: &mut Body, max_speed: f64) {
    let speed = body.speed();
    if speed > max_speed {
        body.vel *= max_speed / speed;
    }
}

/// Move by one step and wrap into the field
pub fn advance(body: &mut Body, d: f64, bounds: &Bounds) {
    body.pos += body.vel * d;
    body.pos = bounds.wrap(body.pos);
}

/// Integrate every ship and live torpedo by `d` nominal ticks
pub fn integrate(state: &mut GameState, tuning: &Tuning, bounds: &Bounds, d: f64) {
    // A zero period never samples
    let sample_trail = state.ticks.checked_rem(tuning.trail_sample_period) == Some(0);
    let well = state.well.pos;

    for ship in &mut state.ships {
        if sample_trail {
            ship.body.shift_trail();
        }

        if heat::regulate(ship, d, tuning) {
            ship.body.vel += ship.heading.thrust_vector() * tuning.thrust_accel * d;
        }

        ship.body.vel += gravity_accel(ship.body.pos, well, tuning.gravity_const) * d;
        cap_speed(&mut ship.body, tuning.max_speed);
        advance(&mut ship.body, d, bounds);
    }

    // Torpedoes coast: no thrust, no gravity
    for torpedo in state.torpedoes.iter_mut().flatten() {
        if sample_trail {
            torpedo.body.shift_trail();
        }
        cap_speed(&mut torpedo.body, tuning.max_speed);
        advance(&mut torpedo.body, d, bounds);
    }
}
