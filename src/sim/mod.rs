//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Randomness only through a caller-supplied, seedable RNG
//! - Stable iteration order (pursuers in list order)
//! - No rendering or platform dependencies

pub mod ai;
pub mod arrest;
pub mod collision;
pub mod geometry;
pub mod motion;
pub mod state;
pub mod tick;

pub use ai::Decision;
pub use arrest::{check_outcome, pursuers_in_range, update_arrest_timer};
pub use collision::{ObstacleResult, apply_car_contact, cars_overlap, resolve_obstacles};
pub use geometry::{Rect, line_of_sight};
pub use motion::{DriveIntent, apply_drive, approach};
pub use state::{AiState, Car, CollisionKind, Obstacle, ObstacleKind, Outcome, Role, WorldState};
pub use tick::{step, tick};
