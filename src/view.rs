//! Read-only queries for a renderer or HUD
//!
//! Nothing here mutates the world; colours are plain RGB triples.

use glam::Vec2;

use crate::sim::arrest::pursuers_in_range;
use crate::sim::state::{AiState, Car, Outcome, WorldState};
use crate::tuning::Tuning;

pub type Rgb = [u8; 3];

pub const COLOR_PLAYER: Rgb = [255, 0, 0];
/// Player while the damage cooldown is running
pub const COLOR_PLAYER_HIT: Rgb = [255, 100, 100];
pub const COLOR_PURSUER_NORMAL: Rgb = [0, 0, 255];
pub const COLOR_PURSUER_STOP: Rgb = [255, 100, 100];
pub const COLOR_PURSUER_STUCK: Rgb = [255, 255, 0];

/// Visible pursuer behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PursuerPhase {
    Normal,
    /// Recovery, still braking
    Stopping,
    /// Recovery, backing out
    Stuck,
}

pub fn pursuer_phase(car: &Car, tuning: &Tuning) -> PursuerPhase {
    match car.ai_state() {
        Some(AiState::Recovering { timer, .. }) if timer > tuning.recovery_brake_until => {
            PursuerPhase::Stopping
        }
        Some(AiState::Recovering { timer, .. }) if timer > 0.0 => PursuerPhase::Stuck,
        _ => PursuerPhase::Normal,
    }
}

pub fn car_color(car: &Car, tuning: &Tuning) -> Rgb {
    if car.is_player() {
        return if car.damage_cooldown > 0.0 {
            COLOR_PLAYER_HIT
        } else {
            COLOR_PLAYER
        };
    }
    match pursuer_phase(car, tuning) {
        PursuerPhase::Normal => COLOR_PURSUER_NORMAL,
        PursuerPhase::Stopping => COLOR_PURSUER_STOP,
        PursuerPhase::Stuck => COLOR_PURSUER_STUCK,
    }
}

/// Arrest progress in [0, 1]
pub fn arrest_fraction(world: &WorldState, tuning: &Tuning) -> f32 {
    (world.arrest_timer / tuning.arrest_time_limit).clamp(0.0, 1.0)
}

/// Player-to-pursuer lines for every pursuer charging the arrest timer
pub fn sight_lines(world: &WorldState, tuning: &Tuning) -> Vec<(Vec2, Vec2)> {
    if world.arrest_timer <= 0.0 {
        return Vec::new();
    }
    pursuers_in_range(world, tuning)
        .map(|cop| (world.player.pos, cop.pos))
        .collect()
}

/// Status lines: health and arrest progress, then position
pub fn hud_lines(world: &WorldState, tuning: &Tuning) -> [String; 2] {
    let p = &world.player;
    let health_pct = (p.health / p.max_health * 100.0) as i32;
    let busted_pct = (arrest_fraction(world, tuning) * 100.0) as i32;
    [
        format!("HP: {health_pct}% | Busted: {busted_pct}%"),
        format!("Pos: {}, {}", p.pos.x as i32, p.pos.y as i32),
    ]
}

/// Game-over banner text, if the session has ended
pub fn banner(world: &WorldState) -> Option<&'static str> {
    world.outcome.map(|o| match o {
        Outcome::Busted => "BUSTED!",
        Outcome::Wasted => "WASTED",
    })
}
