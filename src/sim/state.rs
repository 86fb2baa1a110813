//! Game state and core simulation types
//!
//! One gravity well, two ships, and at most one torpedo per ship. The whole
//! state is a single owned value threaded through the tick functions.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::heading::Heading;
use crate::speed;
use crate::tuning::Tuning;

/// Player identity, also the index into the ship and torpedo arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The opposing player
    #[inline]
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// What destroyed a ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cause {
    /// Fell inside the well's kill radius
    Well,
    /// Rammed the other ship
    Collision,
    /// Struck by a torpedo
    Torpedo,
}

/// Things that happened during a tick, for renderers, audio and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ShipDestroyed { player: PlayerId, cause: Cause },
    TorpedoFired { owner: PlayerId },
    TorpedoExpired { owner: PlayerId },
    TorpedoHit {
        owner: PlayerId,
        target: PlayerId,
        credited: PlayerId,
    },
    /// Both torpedoes annihilated each other
    TorpedoCollision,
    Paused,
    Resumed,
    /// A fresh match began after a win
    MatchStarted,
    Won { winner: PlayerId },
    Quit,
}

/// The central gravity source. Never moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityWell {
    pub pos: DVec2,
}

impl GravityWell {
    /// Well at the centre of a field of `height` x `width` cells
    pub fn centered(height: u32, width: u32) -> Self {
        Self {
            pos: DVec2::new(f64::from(width) / 2.0, f64::from(height) + 0.5),
        }
    }
}

/// Number of trail samples kept per body
pub const TRAIL_LENGTH: usize = 3;

/// Position, velocity and afterimage history shared by ships and torpedoes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Sampled past positions for rendering (newest first)
    pub trail: [DVec2; TRAIL_LENGTH],
}

impl Body {
    /// Body at rest, trail collapsed onto its position
    pub fn at_rest(pos: DVec2) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            trail: [pos; TRAIL_LENGTH],
        }
    }

    /// Push the current position into the trail, dropping the oldest sample
    pub fn shift_trail(&mut self) {
        self.trail.rotate_right(1);
        self.trail[0] = self.pos;
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        speed(self.vel)
    }
}

/// A player ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: PlayerId,
    pub body: Body,
    pub heading: Heading,
    /// Engine engaged (toggled by input, forced off by overheat)
    pub thrust: bool,
    pub score: i32,
    /// Engine temperature; negative values are the overheat cooldown
    pub temperature: f64,
    /// Tick on which the ship was last destroyed
    #[serde(skip)]
    destroyed_on: Option<u64>,
}

impl Ship {
    pub fn new(id: PlayerId, tuning: &Tuning) -> Self {
        Self {
            id,
            body: Body::at_rest(spawn_point(id, tuning)),
            heading: default_heading(id),
            thrust: false,
            score: 0,
            temperature: 0.0,
            destroyed_on: None,
        }
    }

    /// Destroy the ship and put it back at its spawn point
    ///
    /// The penalty is charged once per tick; further resets on the same tick
    /// only reapply the spawn state. Returns true if the penalty was charged.
    pub fn respawn(&mut self, tuning: &Tuning, tick: u64) -> bool {
        self.body = Body::at_rest(spawn_point(self.id, tuning));
        self.heading = default_heading(self.id);
        self.thrust = false;

        if self.destroyed_on == Some(tick) {
            return false;
        }
        self.destroyed_on = Some(tick);
        self.score -= tuning.destruction_penalty;
        true
    }

    /// Position of the torpedo tube: `offset` cells ahead along the heading
    pub fn nose(&self, offset: f64) -> DVec2 {
        self.body.pos + self.heading.thrust_vector() * offset
    }

    /// Engine is in overheat lockout
    #[inline]
    pub fn overheated(&self) -> bool {
        self.temperature < 0.0
    }
}

/// Spawn position for a player
pub fn spawn_point(id: PlayerId, tuning: &Tuning) -> DVec2 {
    let (y, x) = match id {
        PlayerId::One => tuning.p1_spawn,
        PlayerId::Two => tuning.p2_spawn,
    };
    DVec2::new(x, y)
}

/// Heading a player spawns with (facing each other across the well)
pub fn default_heading(id: PlayerId) -> Heading {
    match id {
        PlayerId::One => Heading::N,
        PlayerId::Two => Heading::S,
    }
}

/// A live torpedo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torpedo {
    pub body: Body,
    /// Remaining lifetime in nanoseconds
    pub fuse_nanos: i64,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub well: GravityWell,
    /// Ships indexed by [`PlayerId::index`]
    pub ships: [Ship; 2],
    /// Torpedo slot per owner, `None` when the tube is ready
    pub torpedoes: [Option<Torpedo>; 2],
    /// Play ticks simulated this match
    pub ticks: u64,
}

impl GameState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            well: GravityWell::centered(tuning.field_height, tuning.field_width),
            ships: [
                Ship::new(PlayerId::One, tuning),
                Ship::new(PlayerId::Two, tuning),
            ],
            torpedoes: [None, None],
            ticks: 0,
        }
    }

    #[inline]
    pub fn ship(&self, id: PlayerId) -> &Ship {
        &self.ships[id.index()]
    }

    #[inline]
    pub fn ship_mut(&mut self, id: PlayerId) -> &mut Ship {
        &mut self.ships[id.index()]
    }

    #[inline]
    pub fn torpedo(&self, owner: PlayerId) -> Option<&Torpedo> {
        self.torpedoes[owner.index()].as_ref()
    }

    /// Start a fresh match: ships at spawn, scores zeroed, tubes empty
    pub fn reset_match(&mut self, tuning: &Tuning) {
        self.ships = [
            Ship::new(PlayerId::One, tuning),
            Ship::new(PlayerId::Two, tuning),
        ];
        self.torpedoes = [None, None];
        self.ticks = 0;
    }

    /// Winner by score, if any. Player one is checked first.
    pub fn winner(&self, win_score: i32) -> Option<PlayerId> {
        PlayerId::ALL.into_iter().find(|&id| {
            self.ship(id).score >= win_score || self.ship(id.other()).score <= -win_score
        })
    }
}
