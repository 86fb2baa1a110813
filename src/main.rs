//! Spacewar entry point
//!
//! Runs a headless demo match between two autopilots. The terminal frontend
//! lives outside this crate; anything implementing [`Frontend`] can drive the
//! same loop.
//!
//! Usage: `spacewar [TUNING.json] [--realtime]`

use glam::DVec2;

use spacewar::game::{Frontend, Game};
use spacewar::hud;
use spacewar::scheduler::{ManualClock, MonotonicClock};
use spacewar::sim::{Bounds, GameEvent, GameState, Heading, InputEvent, MenuState, PlayerId};
use spacewar::tuning::Tuning;

/// Ticks after which an undecided demo match is abandoned
const DEMO_TICK_LIMIT: u64 = 20_000;
/// Autopilot throttle band (fraction of the speed cap)
const CRUISE_MIN: f64 = 0.25;
const CRUISE_MAX: f64 = 0.55;

/// Two autopilots that chase and shoot each other
struct DemoFrontend {
    tuning: Tuning,
    bounds: Bounds,
    /// Snapshot of the last presented tick
    last: Option<(GameState, MenuState)>,
    started: bool,
    quitting: bool,
}

impl DemoFrontend {
    fn new(tuning: Tuning) -> Self {
        let bounds = Bounds::from(&tuning);
        Self {
            tuning,
            bounds,
            last: None,
            started: false,
            quitting: false,
        }
    }

    /// Heading index pointing from `from` toward `to`
    fn bearing(from: DVec2, to: DVec2) -> Heading {
        let delta = to - from;
        let degrees = delta.x.atan2(-delta.y).to_degrees();
        Heading::from_index((degrees / 45.0).round() as i32)
    }

    fn pilot(state: &GameState, player: PlayerId, inputs: &mut Vec<InputEvent>) {
        let ship = state.ship(player);
        let target = state.ship(player.other()).body.pos;
        let desired = Self::bearing(ship.body.pos, target);

        let diff = (i32::from(desired.index()) - i32::from(ship.heading.index())).rem_euclid(8);
        match diff {
            0 => {
                if state.torpedo(player).is_none() {
                    inputs.push(InputEvent::Fire(player));
                }
            }
            1..=4 => inputs.push(InputEvent::TurnRight(player)),
            _ => inputs.push(InputEvent::TurnLeft(player)),
        }

        let speed = ship.body.speed();
        if (ship.thrust && speed > CRUISE_MAX) || (!ship.thrust && speed < CRUISE_MIN) {
            inputs.push(InputEvent::ToggleThrust(player));
        }
    }
}

impl Frontend for DemoFrontend {
    fn drain_events(&mut self) -> Vec<InputEvent> {
        let mut inputs = Vec::new();
        if self.quitting {
            return inputs;
        }
        if !self.started {
            self.started = true;
            inputs.push(InputEvent::Confirm);
            return inputs;
        }

        let Some((state, menu)) = &self.last else {
            return inputs;
        };

        let over_time = state.ticks >= DEMO_TICK_LIMIT;
        if menu.winner.is_some() || over_time {
            if menu.is_playing() {
                inputs.push(InputEvent::Confirm);
            }
            inputs.push(InputEvent::ToggleMenuSelection);
            inputs.push(InputEvent::Confirm);
            self.quitting = true;
            return inputs;
        }

        for player in PlayerId::ALL {
            Self::pilot(state, player, &mut inputs);
        }
        inputs
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn present(&mut self, state: &GameState, menu: &MenuState, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Won { winner } => log::info!("Winner: {winner:?}"),
                GameEvent::TorpedoHit { .. } | GameEvent::ShipDestroyed { .. } => {
                    log::debug!("tick {}: {event:?}", state.ticks)
                }
                _ => {}
            }
        }

        if state.ticks % 250 == 0 && menu.is_playing() {
            for player in PlayerId::ALL {
                let readout = hud::readout(state, player, &self.tuning);
                log::info!(
                    "{player:?}: score {:>5} heading {:03} speed {:5.1}% travel {:5.1} {:?} {:?}",
                    readout.score,
                    readout.heading_degrees,
                    readout.speed_percent,
                    readout.travel_degrees,
                    readout.engine,
                    readout.weapon,
                );
            }
        }

        self.last = Some((state.clone(), *menu));
    }
}

fn main() {
    env_logger::init();
    log::info!("Spacewar starting...");

    let mut realtime = false;
    let mut tuning_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--realtime" => realtime = true,
            path => tuning_path = Some(path.to_string()),
        }
    }

    let tuning = match tuning_path {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };

    let mut game = Game::new(tuning.clone());
    let mut frontend = DemoFrontend::new(tuning);
    let ticks = if realtime {
        game.run(&mut frontend, &MonotonicClock)
    } else {
        game.run(&mut frontend, &ManualClock::new())
    };

    let p1 = game.state.ship(PlayerId::One).score;
    let p2 = game.state.ship(PlayerId::Two).score;
    match game.menu.winner {
        Some(winner) => println!("{winner:?} wins {p1} - {p2} after {ticks} ticks"),
        None => println!("No winner ({p1} - {p2}) after {ticks} ticks"),
    }
}
