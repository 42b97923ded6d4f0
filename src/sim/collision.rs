//! Collision detection and response for cars
//!
//! Cars are axis-aligned boxes. Two kinds of contact:
//! - Car vs obstacle: the move is refused. The player bounces back and takes
//!   wall damage, and a pursuer moving forward stops dead.
//! - Car vs car (player vs each pursuer only): the struck car bounces, is
//!   knocked back along the centre-to-centre line and takes car damage.
//!
//! Contact damage is gated by the car's damage cooldown.

use glam::Vec2;

use super::geometry::{Rect, overlaps_any};
use super::motion::displacement;
use super::state::{Car, CollisionKind, footprint_at};
use crate::heading_vector;
use crate::tuning::Tuning;

/// Result of resolving a car against the obstacle set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleResult {
    /// Tentative position committed
    Moved,
    /// Move refused, car stays put
    Blocked,
}

/// Try to move `car` by its per-tick displacement.
///
/// A collision flag already set this tick (by car-vs-car contact) survives a
/// clean move; a wall hit overrides it.
pub fn resolve_obstacles<'a>(
    car: &mut Car,
    obstacles: impl IntoIterator<Item = &'a Rect>,
    tuning: &Tuning,
) -> ObstacleResult {
    let next = car.pos + displacement(car);

    if !overlaps_any(&footprint_at(next), obstacles) {
        car.pos = next;
        return ObstacleResult::Moved;
    }

    car.last_collision = Some(CollisionKind::Wall);
    if car.is_player() {
        car.speed *= tuning.bounce_factor;
        if car.take_contact_damage(tuning.damage_on_wall, tuning.collision_cooldown) {
            log::debug!("Player hit a wall, health {:.0}", car.health);
        }
    } else if car.speed > 0.0 {
        // Pursuers stop without bouncing so the AI can see it is stuck
        car.speed = 0.0;
    }
    ObstacleResult::Blocked
}

/// Do the footprints of two cars overlap at their current positions?
#[inline]
pub fn cars_overlap(a: &Car, b: &Car) -> bool {
    a.footprint().intersects(&b.footprint())
}

/// Response for `struck` after overlapping a car centred at `other_pos`.
///
/// No obstacle check happens here; the caller runs `resolve_obstacles`
/// afterwards from the pushed-out position.
pub fn apply_car_contact(struck: &mut Car, other_pos: Vec2, tuning: &Tuning) {
    struck.speed *= tuning.bounce_factor;
    struck.last_collision = Some(CollisionKind::OtherCar);

    let away = (struck.pos - other_pos).normalize_or_zero();
    // Coincident centres have no separating axis; back out along the car's own heading
    let away = if away == Vec2::ZERO {
        -heading_vector(struck.heading)
    } else {
        away
    };
    struck.pos += away * tuning.knockback_distance;

    if struck.take_contact_damage(tuning.damage_on_car, tuning.collision_cooldown) {
        log::debug!(
            "{} took car contact damage, health {:.0}",
            if struck.is_player() { "Player" } else { "Pursuer" },
            struck.health
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_ahead() -> Vec<Rect> {
        // Car at origin spans x in [-15, 15]; wall starts at x = 16
        vec![Rect::new(16.0, -50.0, 40.0, 100.0)]
    }

    #[test]
    fn test_free_move_commits_position() {
        let tuning = Tuning::default();
        let mut car = Car::player(Vec2::ZERO, &tuning);
        car.speed = 3.0;
        car.heading = 180.0;
        let result = resolve_obstacles(&mut car, &wall_ahead(), &tuning);
        assert_eq!(result, ObstacleResult::Moved);
        assert!((car.pos.x + 3.0).abs() < 1e-4);
        assert_eq!(car.last_collision, None);
    }

    #[test]
    fn test_player_bounces_and_takes_damage() {
        let tuning = Tuning::default();
        let mut car = Car::player(Vec2::ZERO, &tuning);
        car.speed = 4.0;

        let result = resolve_obstacles(&mut car, &wall_ahead(), &tuning);
        assert_eq!(result, ObstacleResult::Blocked);
        assert_eq!(car.pos, Vec2::ZERO);
        assert_eq!(car.speed, -2.0);
        assert_eq!(car.health, tuning.max_health - tuning.damage_on_wall);
        assert_eq!(car.damage_cooldown, tuning.collision_cooldown);
        assert_eq!(car.last_collision, Some(CollisionKind::Wall));
    }

    #[test]
    fn test_wall_damage_gated_by_cooldown() {
        let tuning = Tuning::default();
        let mut car = Car::player(Vec2::ZERO, &tuning);
        car.speed = 4.0;
        car.damage_cooldown = 0.3;
        resolve_obstacles(&mut car, &wall_ahead(), &tuning);
        assert_eq!(car.health, tuning.max_health);
        assert_eq!(car.damage_cooldown, 0.3);
    }

    #[test]
    fn test_pursuer_stops_without_bounce() {
        let tuning = Tuning::default();
        let mut car = Car::pursuer(Vec2::ZERO, &tuning);
        car.speed = 4.0;
        resolve_obstacles(&mut car, &wall_ahead(), &tuning);
        assert_eq!(car.speed, 0.0);
        assert_eq!(car.health, tuning.max_health);
        assert_eq!(car.last_collision, Some(CollisionKind::Wall));
    }

    #[test]
    fn test_pursuer_reversing_into_wall_keeps_speed() {
        let tuning = Tuning::default();
        let mut car = Car::pursuer(Vec2::ZERO, &tuning);
        car.heading = 180.0;
        car.speed = -2.0;
        resolve_obstacles(&mut car, &wall_ahead(), &tuning);
        assert_eq!(car.speed, -2.0);
        assert_eq!(car.pos, Vec2::ZERO);
    }

    #[test]
    fn test_car_contact_flag_survives_clean_move() {
        let tuning = Tuning::default();
        let mut car = Car::player(Vec2::ZERO, &tuning);
        car.last_collision = Some(CollisionKind::OtherCar);
        resolve_obstacles(&mut car, &[] as &[Rect], &tuning);
        assert_eq!(car.last_collision, Some(CollisionKind::OtherCar));
    }

    #[test]
    fn test_car_contact_knockback_and_damage() {
        let tuning = Tuning::default();
        let mut car = Car::player(Vec2::new(100.0, 100.0), &tuning);
        car.speed = 2.0;
        apply_car_contact(&mut car, Vec2::new(110.0, 100.0), &tuning);

        assert_eq!(car.pos, Vec2::new(90.0, 100.0));
        assert_eq!(car.speed, -1.0);
        assert_eq!(car.health, tuning.max_health - tuning.damage_on_car);
        assert_eq!(car.last_collision, Some(CollisionKind::OtherCar));

        // Second contact inside the cooldown: knockback yes, damage no
        apply_car_contact(&mut car, Vec2::new(100.0, 100.0), &tuning);
        assert_eq!(car.pos, Vec2::new(80.0, 100.0));
        assert_eq!(car.health, tuning.max_health - tuning.damage_on_car);
    }

    #[test]
    fn test_coincident_centres_back_out() {
        let tuning = Tuning::default();
        let mut car = Car::pursuer(Vec2::new(50.0, 50.0), &tuning);
        apply_car_contact(&mut car, Vec2::new(50.0, 50.0), &tuning);
        assert!((car.pos.x - 40.0).abs() < 1e-4);
        assert!((car.pos.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_cars_overlap() {
        let tuning = Tuning::default();
        let a = Car::player(Vec2::ZERO, &tuning);
        let b = Car::pursuer(Vec2::new(29.0, 0.0), &tuning);
        let c = Car::pursuer(Vec2::new(30.0, 0.0), &tuning);
        assert!(cars_overlap(&a, &b));
        assert!(!cars_overlap(&a, &c));
    }
}
