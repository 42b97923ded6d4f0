//! Pursuit - a top-down police chase simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (car motion, collisions, pursuit AI, arrest)
//! - `world_gen`: Obstacle layout and spawn placement
//! - `session`: Seeded session ownership and restart
//! - `tuning`: Data-driven game balance
//! - `view`: Read-only queries for a renderer/HUD

pub mod session;
pub mod sim;
pub mod tuning;
pub mod view;
pub mod world_gen;

pub use session::{Session, SessionError};
pub use tuning::{Tuning, TuningError};
pub use world_gen::SpawnError;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the tick-coupled motion tuning)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// World dimensions
    pub const MAP_WIDTH: f32 = 4000.0;
    pub const MAP_HEIGHT: f32 = 4000.0;
    /// Thickness of the four enclosing boundary walls
    pub const BOUNDARY_THICKNESS: f32 = 50.0;

    /// Speed change per tick while driving toward a target speed
    pub const ACCELERATION: f32 = 0.15;
    /// Speed decay per tick with no drive input (smaller than acceleration)
    pub const FRICTION: f32 = 0.05;
    /// Heading change per tick, degrees
    pub const TURN_SPEED: f32 = 3.0;

    pub const PLAYER_MAX_SPEED: f32 = 6.0;
    pub const PURSUER_MAX_SPEED: f32 = 6.3;
    /// Backing-out speed during stuck recovery
    pub const PURSUER_REVERSE_SPEED: f32 = -2.0;

    /// Pursuers closer than this count toward an arrest
    pub const ARREST_DISTANCE: f32 = 150.0;
    /// Pursuers closer than this stop and hold position
    pub const MIN_DIST_TO_PLAYER: f32 = 60.0;
    /// Seconds of continuous arrest eligibility before "busted"
    pub const ARREST_TIME_LIMIT: f32 = 5.0;
    /// Player speed magnitude below which an arrest may begin
    pub const STOPPED_SPEED: f32 = 0.5;

    pub const DAMAGE_ON_WALL: f32 = 5.0;
    pub const DAMAGE_ON_CAR: f32 = 15.0;
    /// Seconds between contact damage applications
    pub const COLLISION_COOLDOWN_TIME: f32 = 1.0;
    pub const MAX_HEALTH: f32 = 100.0;

    /// Speed multiplier on impact
    pub const BOUNCE_FACTOR: f32 = -0.5;
    /// Separation applied to a car struck by another car
    pub const KNOCKBACK_DISTANCE: f32 = 10.0;

    /// Car footprint (axis aligned, not rotated with heading)
    pub const CAR_WIDTH: f32 = 30.0;
    pub const CAR_HEIGHT: f32 = 20.0;

    /// Stuck recovery: total duration and the remaining time at which braking ends
    pub const RECOVERY_DURATION: f32 = 1.0;
    pub const RECOVERY_BRAKE_UNTIL: f32 = 0.5;

    /// World generation
    pub const BUILDING_COUNT: usize = 40;
    pub const BUILDING_MIN_SIZE: i32 = 50;
    pub const BUILDING_MAX_SIZE: i32 = 200;
    /// Placement attempts allowed per requested building
    pub const BUILDING_ATTEMPTS_PER_SLOT: usize = 50;
    /// Side of the building-free square around the player start
    pub const SAFE_ZONE_SIZE: f32 = 300.0;
    pub const PLAYER_START_X: f32 = 500.0;
    pub const PLAYER_START_Y: f32 = MAP_HEIGHT / 2.0;
    /// Spawn positions keep this far from the map edge
    pub const SPAWN_MARGIN: f32 = 100.0;
    /// Clear square required around a spawn point
    pub const SPAWN_PROBE_SIZE: f32 = 40.0;
    pub const MAX_SPAWN_ATTEMPTS: usize = 1000;
    pub const PURSUER_COUNT: usize = 1;
}

/// Normalize a heading to [0, 360) degrees
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Shortest signed rotation from `from` to `to`, in (-180, 180] degrees
#[inline]
pub fn shortest_turn(from: f32, to: f32) -> f32 {
    let diff = (to - from + 180.0).rem_euclid(360.0) - 180.0;
    if diff <= -180.0 { diff + 360.0 } else { diff }
}

/// Unit direction for a heading in degrees.
///
/// World y grows downward, so a counter-clockwise heading has a negative y component.
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), -rad.sin())
}

/// Heading (degrees) pointing from `from` toward `to`, or `None` when the points coincide
#[inline]
pub fn bearing(from: Vec2, to: Vec2) -> Option<f32> {
    let d = to - from;
    if d.length_squared() <= f32::EPSILON {
        return None;
    }
    Some(normalize_degrees((-d.y).atan2(d.x).to_degrees()))
}
