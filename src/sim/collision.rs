//! Collision detection and lifecycle resolution
//!
//! Ship hazards (well impact, ramming) are checked on positions before
//! integration, so a ship inside the kill radius is respawned before the
//! near-singular gravity term can touch its velocity. Torpedo hazards (fuse,
//! hits, mutual annihilation) are checked after integration.

use glam::DVec2;

use super::state::{Cause, GameEvent, GameState, PlayerId};
use crate::distance;
use crate::tuning::Tuning;

/// True if two points are strictly closer than `radius`
#[inline]
pub fn within(a: DVec2, b: DVec2, radius: f64) -> bool {
    distance(a, b) < radius
}

/// Respawn a ship, recording the destruction the first time it happens this tick
fn destroy(
    state: &mut GameState,
    player: PlayerId,
    cause: Cause,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    let tick = state.ticks;
    if state.ship_mut(player).respawn(tuning, tick) {
        log::debug!("{player:?} destroyed ({cause:?}) on tick {tick}");
        events.push(GameEvent::ShipDestroyed { player, cause });
    }
}

/// Well impact and ship-ship collision, on pre-integration positions
pub fn resolve_ship_hazards(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    for player in PlayerId::ALL {
        if within(
            state.ship(player).body.pos,
            state.well.pos,
            tuning.well_kill_radius,
        ) {
            destroy(state, player, Cause::Well, tuning, events);
        }
    }

    if within(
        state.ship(PlayerId::One).body.pos,
        state.ship(PlayerId::Two).body.pos,
        tuning.ship_collision_radius,
    ) {
        for player in PlayerId::ALL {
            destroy(state, player, Cause::Collision, tuning, events);
        }
    }
}

/// Fuse expiry, torpedo hits and torpedo-torpedo collision
///
/// A torpedo can strike either ship, its owner included; the struck ship's
/// opponent is always the one credited.
pub fn resolve_torpedo_hazards(
    state: &mut GameState,
    tuning: &Tuning,
    delta_nanos: i64,
    events: &mut Vec<GameEvent>,
) {
    for owner in PlayerId::ALL {
        let slot = &mut state.torpedoes[owner.index()];
        if let Some(torpedo) = slot.as_mut() {
            torpedo.fuse_nanos = torpedo.fuse_nanos.saturating_sub(delta_nanos);
        }
        if slot.is_some_and(|torpedo| torpedo.fuse_nanos < 0) {
            *slot = None;
            log::debug!("{owner:?} torpedo fuse expired");
            events.push(GameEvent::TorpedoExpired { owner });
        }
    }

    for owner in PlayerId::ALL {
        for target in PlayerId::ALL {
            let Some(torpedo) = state.torpedo(owner) else {
                break;
            };
            if !within(
                torpedo.body.pos,
                state.ship(target).body.pos,
                tuning.torpedo_hit_radius,
            ) {
                continue;
            }

            state.torpedoes[owner.index()] = None;
            destroy(state, target, Cause::Torpedo, tuning, events);
            let credited = target.other();
            state.ship_mut(credited).score += tuning.hit_reward;
            log::debug!("{owner:?} torpedo hit {target:?}, {credited:?} credited");
            events.push(GameEvent::TorpedoHit {
                owner,
                target,
                credited,
            });
        }
    }

    if let [Some(a), Some(b)] = &state.torpedoes
        && within(a.body.pos, b.body.pos, tuning.torpedo_mutual_radius)
    {
        state.torpedoes = [None, None];
        log::debug!("torpedoes collided");
        events.push(GameEvent::TorpedoCollision);
    }
}
