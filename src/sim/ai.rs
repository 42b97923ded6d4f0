//! Pursuit AI
//!
//! Each tick a pursuer not in contact with the player picks a target speed and
//! steers, in priority order:
//! 1. Recovering: brake, then back out while turning (after a wall hit)
//! 2. Standoff: close to the player, stop and turn to face them
//! 3. Chase: full speed toward the player; a wall hit last tick starts recovery
//!
//! The chosen target speed is then approached at the acceleration rate.

use rand::Rng;

use super::motion::approach;
use super::state::{AiState, Car, CollisionKind};
use crate::tuning::Tuning;
use crate::{bearing, shortest_turn};

/// Which branch a pursuer took this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Braking,
    BackingOut,
    Standoff,
    Chase,
    /// Wall hit last tick: recovery starts now
    EnterRecovery,
}

/// Steer `pursuer` and set its speed for this tick.
///
/// `prev_collision` is what the pursuer hit during the previous tick.
pub fn decide<R: Rng>(
    pursuer: &mut Car,
    player: &Car,
    prev_collision: Option<CollisionKind>,
    rng: &mut R,
    tuning: &Tuning,
    dt: f32,
) -> Decision {
    let (target_speed, decision) = match pursuer.ai_state() {
        Some(AiState::Recovering { timer, turn_sign }) => {
            recover(pursuer, timer - dt, turn_sign, tuning)
        }
        _ => pursue(pursuer, player, prev_collision, rng, tuning),
    };

    pursuer.speed = approach(pursuer.speed, target_speed, tuning.acceleration);
    decision
}

fn recover(pursuer: &mut Car, timer: f32, turn_sign: f32, tuning: &Tuning) -> (f32, Decision) {
    let result = if timer > tuning.recovery_brake_until {
        (0.0, Decision::Braking)
    } else {
        pursuer.turn(tuning.turn_speed * turn_sign);
        (tuning.pursuer_reverse_speed, Decision::BackingOut)
    };

    pursuer.set_ai_state(if timer > 0.0 {
        AiState::Recovering { timer, turn_sign }
    } else {
        AiState::Pursuing
    });
    result
}

fn pursue<R: Rng>(
    pursuer: &mut Car,
    player: &Car,
    prev_collision: Option<CollisionKind>,
    rng: &mut R,
    tuning: &Tuning,
) -> (f32, Decision) {
    let distance = pursuer.pos.distance(player.pos);
    // Coincident cars have no bearing; keep the current heading
    let target_heading = bearing(pursuer.pos, player.pos).unwrap_or(pursuer.heading);
    let diff = shortest_turn(pursuer.heading, target_heading);

    if distance < tuning.min_dist_to_player {
        // Face the player without snapping
        if diff.abs() > tuning.turn_speed {
            pursuer.turn(tuning.turn_speed.copysign(diff));
        }
        return (0.0, Decision::Standoff);
    }

    let (target_speed, decision) = if prev_collision == Some(CollisionKind::Wall) {
        let turn_sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        pursuer.set_ai_state(AiState::Recovering {
            timer: tuning.recovery_duration,
            turn_sign,
        });
        log::debug!(
            "Pursuer stuck at ({:.0}, {:.0}), recovering (turn {})",
            pursuer.pos.x,
            pursuer.pos.y,
            turn_sign
        );
        (0.0, Decision::EnterRecovery)
    } else {
        (pursuer.max_speed, Decision::Chase)
    };

    if diff.abs() > tuning.turn_speed {
        pursuer.turn(tuning.turn_speed.copysign(diff));
    } else {
        pursuer.heading = target_heading;
    }
    (target_speed, decision)
}
