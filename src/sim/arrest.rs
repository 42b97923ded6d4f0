//! Arrest tracking and terminal outcomes
//!
//! A pursuer is *in range* when it is within the arrest distance of the player
//! with a clear line of sight. The arrest timer only starts while the player is
//! stopped, then keeps charging while any pursuer stays in range (moving no
//! longer helps). Losing every pursuer resets it to zero on the spot.

use super::geometry::line_of_sight;
use super::state::{Car, Outcome, WorldState};
use crate::tuning::Tuning;

/// Is this pursuer close enough and unobstructed to count toward an arrest?
pub fn in_arrest_range(world: &WorldState, pursuer: &Car, tuning: &Tuning) -> bool {
    let player = &world.player;
    player.pos.distance(pursuer.pos) < tuning.arrest_distance
        && line_of_sight(player.pos, pursuer.pos, world.obstacle_rects())
}

/// Pursuers currently counting toward an arrest, in world order
pub fn pursuers_in_range<'a>(
    world: &'a WorldState,
    tuning: &'a Tuning,
) -> impl Iterator<Item = &'a Car> + 'a {
    world
        .pursuers
        .iter()
        .filter(move |p| in_arrest_range(world, p, tuning))
}

/// Advance the arrest timer by `dt`
pub fn update_arrest_timer(world: &mut WorldState, tuning: &Tuning, dt: f32) {
    let eligible = pursuers_in_range(world, tuning).next().is_some();

    if world.arrest_timer == 0.0 {
        let stopped = world.player.speed.abs() < tuning.stopped_speed;
        if eligible && stopped {
            world.arrest_timer += dt;
        }
    } else if eligible {
        world.arrest_timer += dt;
    } else {
        world.arrest_timer = 0.0;
    }
}

/// Record a terminal outcome if one has been reached. Outcomes are permanent.
pub fn check_outcome(world: &mut WorldState, tuning: &Tuning) -> Option<Outcome> {
    if world.outcome.is_some() {
        return world.outcome;
    }

    if world.arrest_timer >= tuning.arrest_time_limit {
        world.outcome = Some(Outcome::Busted);
        log::info!("BUSTED after {:.2}s in arrest range", world.arrest_timer);
    } else if world.player.health <= 0.0 {
        world.outcome = Some(Outcome::Wasted);
        log::info!("WASTED at tick {}", world.time_ticks);
    }
    world.outcome
}
