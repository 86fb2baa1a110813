//! Host loop: paces ticks and connects the simulation to a frontend
//!
//! The frontend owns the terminal (or whatever surface it draws on) and
//! decodes raw keys into [`InputEvent`]s. The game owns all simulation state.

use crate::scheduler::{Clock, Pace, Scheduler};
use crate::sim::{Bounds, GameEvent, GameState, InputEvent, MenuState, TickOutcome, tick};
use crate::tuning::Tuning;

/// Input, playfield and presentation collaborator
pub trait Frontend {
    /// Every input event received since the last call, oldest first
    fn drain_events(&mut self) -> Vec<InputEvent>;

    /// Current playfield size
    fn bounds(&self) -> Bounds;

    /// Show the state after a committed tick
    fn present(&mut self, state: &GameState, menu: &MenuState, events: &[GameEvent]);
}

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub menu: MenuState,
    pub tuning: Tuning,
}

impl Game {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: GameState::new(&tuning),
            menu: MenuState::default(),
            tuning,
        }
    }

    /// Commit exactly one tick
    pub fn step(
        &mut self,
        inputs: &[InputEvent],
        delta_nanos: i64,
        bounds: &Bounds,
    ) -> TickOutcome {
        tick(
            &mut self.state,
            &mut self.menu,
            inputs,
            delta_nanos,
            bounds,
            &self.tuning,
        )
    }

    /// Run until quit is confirmed. Returns the number of ticks committed.
    pub fn run<F: Frontend, C: Clock>(&mut self, frontend: &mut F, clock: &C) -> u64 {
        let mut scheduler = Scheduler::new(clock, self.tuning.tick_interval_nanos());
        let mut committed = 0u64;
        log::info!("Game loop running at {} Hz", self.tuning.tick_rate_hz);

        loop {
            match scheduler.poll(clock) {
                Pace::Wait { nanos } => clock.sleep(nanos),
                Pace::Ready { delta_nanos } => {
                    let inputs = frontend.drain_events();
                    let bounds = frontend.bounds();
                    let outcome = self.step(&inputs, delta_nanos, &bounds);
                    committed += 1;

                    if outcome.quit {
                        log::info!("Quitting after {committed} ticks");
                        return committed;
                    }
                    frontend.present(&self.state, &self.menu, &outcome.events);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualClock;
    use crate::sim::{Mode, PlayerId};
    use std::collections::VecDeque;

    /// Feeds one scripted batch of inputs per tick
    struct Scripted {
        batches: VecDeque<Vec<InputEvent>>,
        presented: Vec<(u64, Mode)>,
    }

    impl Frontend for Scripted {
        fn drain_events(&mut self) -> Vec<InputEvent> {
            self.batches.pop_front().unwrap_or_default()
        }

        fn bounds(&self) -> Bounds {
            Bounds::new(51, 101)
        }

        fn present(&mut self, state: &GameState, menu: &MenuState, _events: &[GameEvent]) {
            self.presented.push((state.ticks, menu.mode));
        }
    }

    #[test]
    fn test_run_until_quit() {
        let mut game = Game::new(Tuning::default());
        let mut frontend = Scripted {
            batches: VecDeque::from(vec![
                vec![InputEvent::Confirm],
                vec![InputEvent::ToggleThrust(PlayerId::One)],
                vec![],
                vec![InputEvent::Confirm],
                vec![InputEvent::ToggleMenuSelection, InputEvent::Confirm],
            ]),
            presented: Vec::new(),
        };
        let clock = ManualClock::new();

        let ticks = game.run(&mut frontend, &clock);

        assert_eq!(ticks, 5);
        assert_eq!(
            frontend.presented,
            vec![
                (1, Mode::Playing),
                (2, Mode::Playing),
                (3, Mode::Playing),
                (3, Mode::Menu),
            ]
        );
        assert!(game.state.ship(PlayerId::One).thrust);
        // 50 Hz pacing on a simulated clock: one interval per tick
        assert_eq!(clock.now(), 5 * game.tuning.tick_interval_nanos());
    }

    #[test]
    fn test_step_is_frame_rate_independent_for_coasting() {
        let tuning = Tuning::default();
        let bounds = Bounds::from(&tuning);
        let mut coarse = Game::new(tuning.clone());
        let mut fine = Game::new(tuning);
        for game in [&mut coarse, &mut fine] {
            game.step(&[InputEvent::Confirm], 1, &bounds);
            // No gravity, so ship one coasts in a straight line
            game.tuning.gravity_const = 0.0;
            game.state.ships[0].body.vel = glam::DVec2::new(0.3, 0.0);
        }

        let start = coarse.state.ships[0].body.pos;
        coarse.step(&[], 40_000_000, &bounds);
        for _ in 0..2 {
            fine.step(&[], 20_000_000, &bounds);
        }

        let moved_coarse = coarse.state.ships[0].body.pos - start;
        let moved_fine = fine.state.ships[0].body.pos - start;
        assert!((moved_coarse - moved_fine).length() < 1e-9);
    }
}
