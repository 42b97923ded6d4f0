//! Simulation step
//!
//! Advances the world by one tick in a fixed order:
//! 1. Player: controls, contact with pursuers, obstacles
//! 2. Each pursuer in order: contact with the (already moved) player or AI,
//!    then obstacles
//! 3. Arrest timer, then terminal outcome
//!
//! Pursuers react only to the player and static obstacles, never to each other.

use rand::Rng;

use super::ai;
use super::arrest::{check_outcome, update_arrest_timer};
use super::collision::{ObstacleResult, apply_car_contact, cars_overlap, resolve_obstacles};
use super::motion::{DriveIntent, apply_drive};
use super::state::WorldState;
use crate::tuning::Tuning;

/// Advance the world in place by one tick. An ended world is left untouched.
pub fn tick<R: Rng>(
    world: &mut WorldState,
    input: &DriveIntent,
    dt: f32,
    tuning: &Tuning,
    rng: &mut R,
) {
    if world.ended() {
        return;
    }
    world.time_ticks += 1;

    update_player(world, input, dt, tuning);
    update_pursuers(world, dt, tuning, rng);

    update_arrest_timer(world, tuning, dt);
    check_outcome(world, tuning);
}

/// Pure form of [`tick`]: returns the next world, leaving `world` as it was
pub fn step<R: Rng>(
    world: &WorldState,
    input: &DriveIntent,
    dt: f32,
    tuning: &Tuning,
    rng: &mut R,
) -> WorldState {
    let mut next = world.clone();
    tick(&mut next, input, dt, tuning, rng);
    next
}

fn update_player(world: &mut WorldState, input: &DriveIntent, dt: f32, tuning: &Tuning) {
    let player = &mut world.player;
    player.decay_cooldown(dt);
    player.last_collision = None;

    apply_drive(player, input, tuning);

    // First overlapping pursuer only
    if let Some(cop) = world.pursuers.iter().find(|cop| cars_overlap(player, cop)) {
        apply_car_contact(player, cop.pos, tuning);
    }

    let obstacles = world.obstacles.iter().map(|o| &o.rect);
    if resolve_obstacles(player, obstacles, tuning) == ObstacleResult::Blocked {
        log::trace!("Player blocked at ({:.1}, {:.1})", player.pos.x, player.pos.y);
    }
}

fn update_pursuers<R: Rng>(world: &mut WorldState, dt: f32, tuning: &Tuning, rng: &mut R) {
    let player = &world.player;
    let obstacles = &world.obstacles;

    for (i, cop) in world.pursuers.iter_mut().enumerate() {
        cop.decay_cooldown(dt);
        let prev_collision = cop.last_collision.take();

        if cars_overlap(cop, player) {
            // Contact overrides steering for this tick
            apply_car_contact(cop, player.pos, tuning);
        } else {
            let decision = ai::decide(cop, player, prev_collision, rng, tuning, dt);
            log::trace!("Pursuer {i}: {decision:?}");
        }

        resolve_obstacles(cop, obstacles.iter().map(|o| &o.rect), tuning);
    }
}
