//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time enters only as the elapsed nanoseconds of each tick
//! - Fixed iteration order (player one before player two)
//! - No rendering, terminal or clock dependencies

pub mod collision;
pub mod heading;
pub mod heat;
pub mod menu;
pub mod physics;
pub mod state;
pub mod tick;

pub use heading::{Axis, Heading};
pub use heat::EngineState;
pub use menu::{MenuState, Mode, Selection};
pub use physics::Bounds;
pub use state::{Body, Cause, GameEvent, GameState, GravityWell, PlayerId, Ship, Torpedo};
pub use tick::{InputEvent, TickOutcome, fire, tick};
