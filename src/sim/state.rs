//! World state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::{CAR_HEIGHT, CAR_WIDTH};
use crate::normalize_degrees;
use crate::tuning::Tuning;

/// What a car hit during its most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Wall,
    OtherCar,
}

/// Pursuer behaviour state carried between ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AiState {
    /// Chasing or holding a standoff, decided fresh each tick
    Pursuing,
    /// Stuck after a wall hit: brake, then back out turning in `turn_sign` direction
    Recovering { timer: f32, turn_sign: f32 },
}

/// Who drives a car
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Player,
    Pursuer { ai: AiState },
}

/// A car in the world (player or pursuer)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    pub pos: Vec2,
    /// Degrees in [0, 360), 0 = +x, counter-clockwise
    pub heading: f32,
    /// Signed; magnitude never exceeds `max_speed`
    pub speed: f32,
    pub max_speed: f32,
    pub health: f32,
    pub max_health: f32,
    pub role: Role,
    /// Collision recorded during the most recently completed tick
    pub last_collision: Option<CollisionKind>,
    /// Seconds until contact damage may apply again
    pub damage_cooldown: f32,
}

impl Car {
    pub fn player(pos: Vec2, tuning: &Tuning) -> Self {
        Self::new(pos, tuning.player_max_speed, tuning.max_health, Role::Player)
    }

    pub fn pursuer(pos: Vec2, tuning: &Tuning) -> Self {
        Self::new(
            pos,
            tuning.pursuer_max_speed,
            tuning.max_health,
            Role::Pursuer {
                ai: AiState::Pursuing,
            },
        )
    }

    fn new(pos: Vec2, max_speed: f32, max_health: f32, role: Role) -> Self {
        Self {
            pos,
            heading: 0.0,
            speed: 0.0,
            max_speed,
            health: max_health,
            max_health,
            role,
            last_collision: None,
            damage_cooldown: 0.0,
        }
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        matches!(self.role, Role::Player)
    }

    #[inline]
    pub fn collided(&self) -> bool {
        self.last_collision.is_some()
    }

    /// Pursuer AI state, `None` for the player
    pub fn ai_state(&self) -> Option<AiState> {
        match self.role {
            Role::Pursuer { ai } => Some(ai),
            Role::Player => None,
        }
    }

    pub fn set_ai_state(&mut self, state: AiState) {
        if let Role::Pursuer { ai } = &mut self.role {
            *ai = state;
        }
    }

    /// Footprint at the current position
    pub fn footprint(&self) -> Rect {
        footprint_at(self.pos)
    }

    /// Rotate by `delta` degrees, keeping the heading normalized
    pub fn turn(&mut self, delta: f32) {
        self.heading = normalize_degrees(self.heading + delta);
    }

    /// Subtract contact damage if the cooldown has elapsed. Returns whether damage applied.
    pub fn take_contact_damage(&mut self, amount: f32, cooldown: f32) -> bool {
        if self.damage_cooldown > 0.0 {
            return false;
        }
        self.health = (self.health - amount).clamp(0.0, self.max_health);
        self.damage_cooldown = cooldown;
        true
    }

    /// Count the damage cooldown down by elapsed time
    pub fn decay_cooldown(&mut self, dt: f32) {
        if self.damage_cooldown > 0.0 {
            self.damage_cooldown = (self.damage_cooldown - dt).max(0.0);
        }
    }
}

/// Axis-aligned car footprint centred on `pos`
pub fn footprint_at(pos: Vec2) -> Rect {
    Rect::from_center(pos, Vec2::new(CAR_WIDTH, CAR_HEIGHT))
}

/// Obstacle classification (affects colour only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Building,
    /// Map-enclosing wall
    Boundary,
}

/// A solid static rectangle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub kind: ObstacleKind,
    pub color: [u8; 3],
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Arrest timer reached its limit
    Busted,
    /// Player health reached zero
    Wasted,
}

/// Complete world state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    pub player: Car,
    /// Updated in order each tick
    pub pursuers: Vec<Car>,
    pub obstacles: Vec<Obstacle>,
    /// Seconds of continuous arrest eligibility (0 while not charging)
    pub arrest_timer: f32,
    /// Terminal outcome; set once and never cleared
    pub outcome: Option<Outcome>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl WorldState {
    pub fn new(player: Car, pursuers: Vec<Car>, obstacles: Vec<Obstacle>) -> Self {
        Self {
            player,
            pursuers,
            obstacles,
            arrest_timer: 0.0,
            outcome: None,
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn ended(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn is_busted(&self) -> bool {
        self.outcome == Some(Outcome::Busted)
    }

    #[inline]
    pub fn is_wasted(&self) -> bool {
        self.outcome == Some(Outcome::Wasted)
    }

    /// Obstacle rectangles, for geometry queries
    pub fn obstacle_rects(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.obstacles.iter().map(|o| &o.rect)
    }
}
