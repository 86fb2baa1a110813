//! Compass headings and unit thrust lookup
//!
//! Screen space: `y` grows downward, so north is negative `y`.

use std::f64::consts::FRAC_1_SQRT_2;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One of the eight compass headings a ship can face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// Component axis for [`Heading::unit_thrust`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Y,
    X,
}

impl Heading {
    pub const ALL: [Heading; 8] = [
        Heading::N,
        Heading::NE,
        Heading::E,
        Heading::SE,
        Heading::S,
        Heading::SW,
        Heading::W,
        Heading::NW,
    ];

    /// Index 0..8, clockwise from north
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Heading for any index, wrapping modulo 8
    #[inline]
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(8) as usize]
    }

    /// Rotate one step counter-clockwise
    pub fn turn_left(self) -> Self {
        Self::from_index(i32::from(self.index()) - 1)
    }

    /// Rotate one step clockwise
    pub fn turn_right(self) -> Self {
        Self::from_index(i32::from(self.index()) + 1)
    }

    /// Compass bearing in degrees
    pub fn degrees(self) -> u32 {
        u32::from(self.index()) * 45
    }

    /// Thrust component along one axis, normalised so every heading has unit magnitude
    pub fn unit_thrust(self, axis: Axis) -> f64 {
        let magnitude = if self.index() % 2 == 0 {
            1.0
        } else {
            FRAC_1_SQRT_2
        };

        // The x component of a heading is the y component of the heading 90° clockwise
        let facing = match axis {
            Axis::Y => self,
            Axis::X => Self::from_index(i32::from(self.index()) + 2),
        };

        let direction = match facing {
            Heading::N | Heading::NE | Heading::NW => -1.0,
            Heading::S | Heading::SE | Heading::SW => 1.0,
            Heading::E | Heading::W => 0.0,
        };

        magnitude * direction
    }

    /// Unit thrust as a vector
    #[inline]
    pub fn thrust_vector(self) -> DVec2 {
        DVec2::new(self.unit_thrust(Axis::X), self.unit_thrust(Axis::Y))
    }
}
