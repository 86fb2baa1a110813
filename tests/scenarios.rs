//! End-to-end match scenarios driven through the public tick API

use glam::DVec2;

use spacewar::consts::NOMINAL_TICK_NANOS;
use spacewar::scheduler::{Clock, ManualClock, Pace, Scheduler};
use spacewar::sim::{
    Body, Bounds, Cause, GameEvent, GameState, Heading, InputEvent, MenuState, Mode, PlayerId,
    TickOutcome, Torpedo, tick,
};
use spacewar::Tuning;

const NOMINAL: i64 = NOMINAL_TICK_NANOS as i64;

struct Match {
    state: GameState,
    menu: MenuState,
    bounds: Bounds,
    tuning: Tuning,
}

impl Match {
    fn with_tuning(tuning: Tuning) -> Self {
        let mut game = Self {
            state: GameState::new(&tuning),
            menu: MenuState::default(),
            bounds: Bounds::from(&tuning),
            tuning,
        };
        game.step(&[InputEvent::Confirm], 0);
        assert_eq!(game.menu.mode, Mode::Playing);
        game
    }

    fn started() -> Self {
        Self::with_tuning(Tuning::default())
    }

    fn step(&mut self, inputs: &[InputEvent], delta_nanos: i64) -> TickOutcome {
        tick(
            &mut self.state,
            &mut self.menu,
            inputs,
            delta_nanos,
            &self.bounds,
            &self.tuning,
        )
    }
}

fn resting_torpedo(pos: DVec2) -> Option<Torpedo> {
    Some(Torpedo {
        body: Body::at_rest(pos),
        fuse_nanos: i64::from(i32::MAX),
    })
}

#[test]
fn test_hit_wins_and_confirm_starts_fresh_match() {
    let mut game = Match::started();
    game.state.ships[0].score = 995;
    let target = game.state.ship(PlayerId::Two).body.pos;
    game.state.torpedoes[0] = resting_torpedo(target);

    let outcome = game.step(&[], NOMINAL);

    assert_eq!(game.state.ship(PlayerId::One).score, 1245);
    assert_eq!(game.state.ship(PlayerId::Two).score, -50);
    assert!(outcome.events.contains(&GameEvent::Won {
        winner: PlayerId::One
    }));
    assert_eq!(game.menu.mode, Mode::Menu);
    assert_eq!(game.menu.winner, Some(PlayerId::One));

    // Physics is frozen on the result screen
    let frozen = game.state.clone();
    game.step(&[InputEvent::Fire(PlayerId::Two)], NOMINAL);
    assert_eq!(game.state, frozen);

    let outcome = game.step(&[InputEvent::Confirm], 0);
    assert!(outcome.events.contains(&GameEvent::MatchStarted));
    assert_eq!(game.menu.mode, Mode::Playing);
    assert_eq!(game.menu.winner, None);
    assert_eq!(game.state, GameState::new(&game.tuning));
}

#[test]
fn test_gravity_pulls_toward_well() {
    let mut game = Match::started();
    let well = game.state.well.pos;
    game.state.ships[0].body = Body::at_rest(well + DVec2::new(0.0, 10.0));

    game.step(&[], NOMINAL);

    // g = -G / r² = -0.02 along the radial unit vector
    let ship = game.state.ship(PlayerId::One);
    assert!(ship.body.vel.x.abs() < 1e-12);
    assert!((ship.body.vel.y + 0.02).abs() < 1e-6);
    assert!(ship.body.speed() < game.tuning.max_speed);
    assert!(ship.body.pos.y < well.y + 10.0);
    assert!(ship.body.pos.y > well.y);
}

#[test]
fn test_fire_facing_north() {
    let mut game = Match::started();
    let ship_pos = game.state.ship(PlayerId::One).body.pos;
    assert_eq!(game.state.ship(PlayerId::One).heading, Heading::N);

    let outcome = game.step(
        &[InputEvent::Fire(PlayerId::One), InputEvent::Fire(PlayerId::One)],
        0,
    );

    let torpedo = game.state.torpedo(PlayerId::One).copied();
    let torpedo = torpedo.unwrap_or_else(|| panic!("tube should be occupied"));
    assert_eq!(torpedo.body.pos, DVec2::new(ship_pos.x, ship_pos.y - 2.0));
    assert_eq!(torpedo.body.vel, DVec2::new(0.0, -0.5));
    assert_eq!(torpedo.fuse_nanos, i64::from(i32::MAX));

    // One torpedo per owner: the second press is ignored
    let fired = outcome
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::TorpedoFired { .. }))
        .count();
    assert_eq!(fired, 1);
}

#[test]
fn test_overheated_engine_locks_out() {
    let mut game = Match::started();
    let ship = &mut game.state.ships[0];
    ship.thrust = true;
    ship.temperature = 101.0;

    game.step(&[], NOMINAL);

    let ship = game.state.ship(PlayerId::One);
    assert!(!ship.thrust);
    assert_eq!(ship.temperature, game.tuning.lockout_temp);

    // Re-engaging during lockout does nothing until the engine recovers
    let before = game.state.ship(PlayerId::One).body.vel;
    game.tuning.gravity_const = 0.0;
    game.step(&[InputEvent::ToggleThrust(PlayerId::One)], NOMINAL);
    let ship = game.state.ship(PlayerId::One);
    assert!(ship.thrust);
    assert_eq!(ship.body.vel, before);
    assert!(ship.temperature > game.tuning.lockout_temp && ship.temperature < 0.0);
}

#[test]
fn test_double_destruction_charges_once() {
    let mut game = Match::started();
    let spawn = game.state.ship(PlayerId::One).body.pos;
    game.state.ships[0].body = Body::at_rest(game.state.well.pos);
    // Waiting at the respawn point
    game.state.torpedoes[1] = resting_torpedo(spawn);

    let outcome = game.step(&[], NOMINAL);

    assert_eq!(game.state.ship(PlayerId::One).score, -50);
    assert_eq!(game.state.ship(PlayerId::Two).score, 250);
    let destroyed: Vec<_> = outcome
        .events
        .iter()
        .filter_map(|e| match e {
            GameEvent::ShipDestroyed { player, cause } => Some((*player, *cause)),
            _ => None,
        })
        .collect();
    assert_eq!(destroyed, vec![(PlayerId::One, Cause::Well)]);
    assert!(game.state.torpedo(PlayerId::Two).is_none());
}

#[test]
fn test_ramming_destroys_both() {
    let mut game = Match::started();
    let meet = DVec2::new(10.0, 10.0);
    game.state.ships[0].body = Body::at_rest(meet);
    game.state.ships[1].body = Body::at_rest(meet + DVec2::new(1.0, 0.0));

    game.step(&[], NOMINAL);

    assert_eq!(game.state.ship(PlayerId::One).score, -50);
    assert_eq!(game.state.ship(PlayerId::Two).score, -50);
    assert_eq!(game.state.ship(PlayerId::Two).heading, Heading::S);
}

#[test]
fn test_torpedoes_annihilate() {
    let mut game = Match::started();
    let spot = DVec2::new(50.0, 20.0);
    game.state.torpedoes = [resting_torpedo(spot), resting_torpedo(spot + DVec2::new(0.0, 1.5))];

    let outcome = game.step(&[], NOMINAL);

    assert_eq!(game.state.torpedoes, [None, None]);
    assert!(outcome.events.contains(&GameEvent::TorpedoCollision));
}

#[test]
fn test_ship_wraps_across_edge() {
    let tuning = Tuning {
        gravity_const: 0.0,
        ..Tuning::default()
    };
    let mut game = Match::with_tuning(tuning);
    game.state.ships[0].body.pos = DVec2::new(99.9, 40.0);
    game.state.ships[0].body.vel = DVec2::new(0.5, 0.0);

    game.step(&[], NOMINAL);

    let pos = game.state.ship(PlayerId::One).body.pos;
    assert!((pos.x - 1.4).abs() < 1e-6);
    assert!(game.bounds.contains(pos));
}

#[test]
fn test_late_tick_carries_elapsed_time() {
    let tuning = Tuning {
        gravity_const: 0.0,
        ..Tuning::default()
    };
    let mut game = Match::with_tuning(tuning);
    game.state.ships[0].body.vel = DVec2::new(0.0, -0.1);
    let start = game.state.ship(PlayerId::One).body.pos;

    let clock = ManualClock::new();
    let mut scheduler = Scheduler::new(&clock, game.tuning.tick_interval_nanos());
    clock.advance(NOMINAL * 2);

    let Pace::Ready { delta_nanos } = scheduler.poll(&clock) else {
        panic!("a tick should be due");
    };
    game.step(&[], delta_nanos);
    assert!(matches!(scheduler.poll(&clock), Pace::Wait { .. }));

    // Two nominal ticks of travel in a single step
    let moved = game.state.ship(PlayerId::One).body.pos - start;
    assert!((moved.y + 0.2).abs() < 1e-6);
    assert_eq!(game.state.ticks, 1);
    assert_eq!(clock.now(), NOMINAL * 2);
}

#[test]
fn test_long_stall_stays_in_field() {
    let mut game = Match::started();
    game.state.ships[1].body.pos = DVec2::new(10.0, 20.0);
    game.state.ships[1].body.vel = DVec2::new(0.9, 0.0);
    game.step(&[InputEvent::Fire(PlayerId::One)], 0);
    let mut runaway = Body::at_rest(DVec2::new(90.0, 90.0));
    runaway.vel = DVec2::new(1.0, 1.0);
    game.state.torpedoes[1] = Some(Torpedo {
        body: runaway,
        fuse_nanos: i64::from(i32::MAX),
    });
    let starts: Vec<DVec2> = game.state.ships.iter().map(|s| s.body.pos).collect();

    game.step(&[], 10_000_000_000);

    let bodies = game
        .state
        .ships
        .iter()
        .map(|s| s.body)
        .chain(game.state.torpedoes.iter().flatten().map(|t| t.body));
    for body in bodies {
        assert!(game.bounds.contains(body.pos), "escaped field: {:?}", body.pos);
    }

    // Only the capped step was simulated
    let max_travel =
        game.tuning.max_speed * game.tuning.max_step_nanos as f64 / NOMINAL_TICK_NANOS;
    for (ship, start) in game.state.ships.iter().zip(starts) {
        assert!(ship.body.pos.distance(start) <= max_travel + 1e-9);
    }
}

#[test]
fn test_quit_from_menu() {
    let mut game = Match::started();
    let outcome = game.step(
        &[
            InputEvent::Confirm,
            InputEvent::ToggleMenuSelection,
            InputEvent::Confirm,
            InputEvent::Fire(PlayerId::One),
        ],
        NOMINAL,
    );
    assert!(outcome.quit);
    assert_eq!(outcome.events, vec![GameEvent::Paused, GameEvent::Quit]);
    assert!(game.state.torpedo(PlayerId::One).is_none());
}
