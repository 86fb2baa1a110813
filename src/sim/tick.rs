//! One committed simulation tick
//!
//! Inputs are applied first, in arrival order. Then, if playing, physics
//! runs once: ship hazards, integration, torpedo hazards, win check.

use serde::{Deserialize, Serialize};

use super::collision::{resolve_ship_hazards, resolve_torpedo_hazards};
use super::menu::{MenuState, Transition};
use super::physics::{Bounds, integrate, step_scale};
use super::state::{Body, GameEvent, GameState, PlayerId, Torpedo};
use crate::tuning::Tuning;

/// Logical input, already decoded from raw keys by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    ToggleThrust(PlayerId),
    TurnLeft(PlayerId),
    TurnRight(PlayerId),
    Fire(PlayerId),
    /// Pause, resume, or activate the highlighted menu entry
    Confirm,
    ToggleMenuSelection,
}

/// What a tick produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    /// Quit was confirmed; the host loop should stop
    pub quit: bool,
}

/// Launch a torpedo from `owner`'s nose if its tube is empty
///
/// The torpedo inherits the ship's velocity plus a muzzle boost along the
/// heading. Returns false if a torpedo of this owner is still live.
pub fn fire(state: &mut GameState, owner: PlayerId, tuning: &Tuning) -> bool {
    if state.torpedo(owner).is_some() {
        return false;
    }

    let ship = state.ship(owner);
    let mut body = Body::at_rest(ship.nose(tuning.muzzle_offset));
    body.vel = ship.body.vel + ship.heading.thrust_vector() * tuning.muzzle_speed;

    state.torpedoes[owner.index()] = Some(Torpedo {
        body,
        fuse_nanos: tuning.torpedo_fuse_nanos,
    });
    log::debug!("{owner:?} fired at {:?}", body.pos);
    true
}

/// Apply one input event. Returns true if it quit the game.
fn apply_input(
    state: &mut GameState,
    menu: &mut MenuState,
    input: InputEvent,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> bool {
    match input {
        InputEvent::Confirm => match menu.confirm() {
            Transition::Resume => {
                log::info!("Resumed");
                events.push(GameEvent::Resumed);
            }
            Transition::NewMatch => {
                state.reset_match(tuning);
                log::info!("New match started");
                events.push(GameEvent::MatchStarted);
            }
            Transition::Pause => {
                log::info!("Paused");
                events.push(GameEvent::Paused);
            }
            Transition::Quit => {
                log::info!("Quit selected");
                events.push(GameEvent::Quit);
                return true;
            }
        },
        InputEvent::ToggleMenuSelection => menu.toggle_selection(),

        // Ship controls are frozen while the menu is up
        _ if !menu.is_playing() => {}
        InputEvent::ToggleThrust(player) => {
            let ship = state.ship_mut(player);
            ship.thrust = !ship.thrust;
        }
        InputEvent::TurnLeft(player) => {
            let ship = state.ship_mut(player);
            ship.heading = ship.heading.turn_left();
        }
        InputEvent::TurnRight(player) => {
            let ship = state.ship_mut(player);
            ship.heading = ship.heading.turn_right();
        }
        InputEvent::Fire(owner) => {
            if fire(state, owner, tuning) {
                events.push(GameEvent::TorpedoFired { owner });
            }
        }
    }
    false
}

/// Commit one tick covering `delta_nanos` of wall-clock time
///
/// At most `tuning.max_step_nanos` is simulated; the rest of a long stall is
/// dropped so no body can cross more than a fraction of the field in one step.
pub fn tick(
    state: &mut GameState,
    menu: &mut MenuState,
    inputs: &[InputEvent],
    delta_nanos: i64,
    bounds: &Bounds,
    tuning: &Tuning,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    for &input in inputs {
        if apply_input(state, menu, input, tuning, &mut outcome.events) {
            outcome.quit = true;
            return outcome;
        }
    }

    let delta_nanos = delta_nanos.min(tuning.max_step_nanos);
    if !menu.is_playing() || delta_nanos <= 0 {
        return outcome;
    }

    let d = step_scale(delta_nanos, tuning.physics_speed);
    log::trace!("tick {} delta={}ns d={:.4}", state.ticks, delta_nanos, d);

    resolve_ship_hazards(state, tuning, &mut outcome.events);
    integrate(state, tuning, bounds, d);
    resolve_torpedo_hazards(state, tuning, delta_nanos, &mut outcome.events);
    state.ticks += 1;

    if let Some(winner) = state.winner(tuning.win_score) {
        menu.declare_winner(winner);
        log::info!(
            "{winner:?} wins ({} - {})",
            state.ship(PlayerId::One).score,
            state.ship(PlayerId::Two).score
        );
        outcome.events.push(GameEvent::Won { winner });
    }

    outcome
}
