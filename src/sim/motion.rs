//! Car kinematics
//!
//! Speed and heading change by fixed per-tick amounts and translation is
//! `heading_vector * speed` per tick. None of it scales with `dt`; only
//! cooldowns and timers do.

use glam::Vec2;

use super::state::Car;
use crate::heading_vector;
use crate::tuning::Tuning;

/// Discrete player controls for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveIntent {
    pub turn_left: bool,
    pub turn_right: bool,
    pub accelerate: bool,
    pub brake: bool,
}

/// Move `current` toward `target` by at most `step`, never overshooting
#[inline]
pub fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else if current > target {
        (current - step).max(target)
    } else {
        current
    }
}

/// Tentative per-tick displacement for a car
#[inline]
pub fn displacement(car: &Car) -> Vec2 {
    heading_vector(car.heading) * car.speed
}

/// Apply player controls: turn, then accelerate/brake or coast under friction
pub fn apply_drive(car: &mut Car, intent: &DriveIntent, tuning: &Tuning) {
    if intent.turn_left {
        car.turn(tuning.turn_speed);
    }
    if intent.turn_right {
        car.turn(-tuning.turn_speed);
    }

    let mut target_speed = 0.0;
    if intent.accelerate {
        target_speed = car.max_speed;
    }
    // Brake wins when both are held
    if intent.brake {
        target_speed = -car.max_speed / 2.0;
    }

    car.speed = if target_speed != 0.0 {
        approach(car.speed, target_speed, tuning.acceleration)
    } else {
        approach(car.speed, 0.0, tuning.friction)
    };
}
