//! Gameplay balance
//!
//! Every simulation function reads its constants from a `Tuning` instead of
//! `consts` directly, so balance can be loaded from JSON. Missing keys fall
//! back to the compiled defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} is out of range (got {value})")]
    Invalid { field: &'static str, value: f32 },
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Motion (per tick) ===
    pub acceleration: f32,
    pub friction: f32,
    /// Degrees per tick
    pub turn_speed: f32,
    pub player_max_speed: f32,
    pub pursuer_max_speed: f32,
    pub pursuer_reverse_speed: f32,

    // === Pursuit & arrest ===
    pub arrest_distance: f32,
    pub min_dist_to_player: f32,
    /// Seconds
    pub arrest_time_limit: f32,
    pub stopped_speed: f32,
    /// Seconds
    pub recovery_duration: f32,
    /// Remaining recovery time at which braking turns into backing out
    pub recovery_brake_until: f32,
    pub pursuer_count: usize,

    // === Damage & contact ===
    pub max_health: f32,
    pub damage_on_wall: f32,
    pub damage_on_car: f32,
    /// Seconds
    pub collision_cooldown: f32,
    pub bounce_factor: f32,
    pub knockback_distance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            acceleration: ACCELERATION,
            friction: FRICTION,
            turn_speed: TURN_SPEED,
            player_max_speed: PLAYER_MAX_SPEED,
            pursuer_max_speed: PURSUER_MAX_SPEED,
            pursuer_reverse_speed: PURSUER_REVERSE_SPEED,

            arrest_distance: ARREST_DISTANCE,
            min_dist_to_player: MIN_DIST_TO_PLAYER,
            arrest_time_limit: ARREST_TIME_LIMIT,
            stopped_speed: STOPPED_SPEED,
            recovery_duration: RECOVERY_DURATION,
            recovery_brake_until: RECOVERY_BRAKE_UNTIL,
            pursuer_count: PURSUER_COUNT,

            max_health: MAX_HEALTH,
            damage_on_wall: DAMAGE_ON_WALL,
            damage_on_car: DAMAGE_ON_CAR,
            collision_cooldown: COLLISION_COOLDOWN_TIME,
            bounce_factor: BOUNCE_FACTOR,
            knockback_distance: KNOCKBACK_DISTANCE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would stall or invert the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("acceleration", self.acceleration),
            ("friction", self.friction),
            ("turn_speed", self.turn_speed),
            ("player_max_speed", self.player_max_speed),
            ("pursuer_max_speed", self.pursuer_max_speed),
            ("arrest_distance", self.arrest_distance),
            ("arrest_time_limit", self.arrest_time_limit),
            ("recovery_duration", self.recovery_duration),
            ("max_health", self.max_health),
            ("collision_cooldown", self.collision_cooldown),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::Invalid { field, value });
            }
        }

        let non_negative = [
            ("min_dist_to_player", self.min_dist_to_player),
            ("stopped_speed", self.stopped_speed),
            ("damage_on_wall", self.damage_on_wall),
            ("damage_on_car", self.damage_on_car),
            ("knockback_distance", self.knockback_distance),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(TuningError::Invalid { field, value });
            }
        }

        if !(self.pursuer_reverse_speed < 0.0
            && -self.pursuer_reverse_speed <= self.pursuer_max_speed)
        {
            return Err(TuningError::Invalid {
                field: "pursuer_reverse_speed",
                value: self.pursuer_reverse_speed,
            });
        }
        if !(self.recovery_brake_until >= 0.0
            && self.recovery_brake_until <= self.recovery_duration)
        {
            return Err(TuningError::Invalid {
                field: "recovery_brake_until",
                value: self.recovery_brake_until,
            });
        }
        // Bounces must damp, never amplify, so speeds stay within max
        if !(self.bounce_factor <= 0.0 && self.bounce_factor >= -1.0) {
            return Err(TuningError::Invalid {
                field: "bounce_factor",
                value: self.bounce_factor,
            });
        }
        Ok(())
    }
}
