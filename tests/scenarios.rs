//! End-to-end scenarios driven through the public API

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use pursuit::consts::SIM_DT;
use pursuit::sim::{
    AiState, Car, CollisionKind, DriveIntent, Obstacle, ObstacleKind, Outcome, Rect, WorldState,
    line_of_sight, tick,
};
use pursuit::world_gen::boundary_walls;
use pursuit::{Session, Tuning};

fn building(rect: Rect) -> Obstacle {
    Obstacle {
        rect,
        kind: ObstacleKind::Building,
        color: [100, 100, 100],
    }
}

#[test]
fn stopped_player_in_sight_gets_busted() {
    let tuning = Tuning::default();
    let player = Car::player(Vec2::new(2000.0, 2000.0), &tuning);
    let mut cop = Car::pursuer(Vec2::new(2100.0, 2000.0), &tuning);
    cop.heading = 180.0;
    let mut world = WorldState::new(player, vec![cop], boundary_walls());
    let mut rng = Pcg32::seed_from_u64(1);

    let mut ticks = 0;
    while !world.ended() && ticks < 600 {
        tick(&mut world, &DriveIntent::default(), SIM_DT, &tuning, &mut rng);
        ticks += 1;
        assert!(world.arrest_timer >= 0.0);
        assert!(world.player.health >= 0.0);
    }

    assert!(world.ended());
    assert!(world.is_busted());
    assert!(!world.is_wasted());
    // Charging began on the first tick and never reset
    let elapsed = ticks as f32 * SIM_DT;
    assert!(elapsed >= tuning.arrest_time_limit - 1e-3);
    assert!(elapsed < tuning.arrest_time_limit + 3.0 * SIM_DT);
}

#[test]
fn pursuer_recovers_after_driving_into_wall() {
    let tuning = Tuning::default();
    let player = Car::player(Vec2::new(1500.0, 1000.0), &tuning);
    let mut cop = Car::pursuer(Vec2::new(1000.0, 1000.0), &tuning);
    cop.speed = 3.0;
    let mut world = WorldState::new(
        player,
        vec![cop],
        vec![building(Rect::new(1016.0, 900.0, 80.0, 200.0))],
    );
    let mut rng = Pcg32::seed_from_u64(9);
    let dt = 0.125;
    let idle = DriveIntent::default();

    // Tick 1: drives into the wall
    tick(&mut world, &idle, dt, &tuning, &mut rng);
    assert_eq!(world.pursuers[0].last_collision, Some(CollisionKind::Wall));

    // Tick 2: enters recovery
    tick(&mut world, &idle, dt, &tuning, &mut rng);
    let turn_sign = match world.pursuers[0].ai_state() {
        Some(AiState::Recovering { timer, turn_sign }) => {
            assert!(timer > 0.0);
            turn_sign
        }
        other => panic!("expected recovery, got {other:?}"),
    };
    assert_eq!(world.pursuers[0].speed, 0.0);

    // First half: full stop
    for _ in 0..3 {
        let heading = world.pursuers[0].heading;
        tick(&mut world, &idle, dt, &tuning, &mut rng);
        assert_eq!(world.pursuers[0].speed, 0.0);
        assert_eq!(world.pursuers[0].heading, heading);
    }

    // Second half: reversing while rotating by the chosen sign
    for _ in 0..5 {
        let heading = world.pursuers[0].heading;
        tick(&mut world, &idle, dt, &tuning, &mut rng);
        let cop = &world.pursuers[0];
        assert!(cop.speed < 0.0);
        let turned = pursuit::shortest_turn(heading, cop.heading);
        assert!((turned - tuning.turn_speed * turn_sign).abs() < 1e-3);
    }
    assert_eq!(world.pursuers[0].ai_state(), Some(AiState::Pursuing));
}

#[test]
fn overlapping_cars_separate_by_knockback() {
    let tuning = Tuning::default();
    let player = Car::player(Vec2::new(1000.0, 1000.0), &tuning);
    let cop = Car::pursuer(Vec2::new(1005.0, 1000.0), &tuning);
    let mut world = WorldState::new(player, vec![cop], Vec::new());
    let mut rng = Pcg32::seed_from_u64(4);

    tick(&mut world, &DriveIntent::default(), SIM_DT, &tuning, &mut rng);

    let player = &world.player;
    let cop = &world.pursuers[0];
    assert_eq!(player.last_collision, Some(CollisionKind::OtherCar));
    assert_eq!(cop.last_collision, Some(CollisionKind::OtherCar));

    // Pushed 10 units apart along the centre line, in opposite directions
    assert!((player.pos - Vec2::new(990.0, 1000.0)).length() < 1e-3);
    assert!((cop.pos - Vec2::new(1015.0, 1000.0)).length() < 1e-3);

    assert_eq!(player.health, tuning.max_health - tuning.damage_on_car);
    assert_eq!(player.damage_cooldown, tuning.collision_cooldown);
}

#[test]
fn overlapping_cars_bounce_speed() {
    let tuning = Tuning::default();
    let mut player = Car::player(Vec2::new(1000.0, 1000.0), &tuning);
    player.heading = 90.0;
    player.speed = 4.0;
    let mut cop = Car::pursuer(Vec2::new(1005.0, 1000.0), &tuning);
    cop.speed = 2.0;
    let mut world = WorldState::new(player, vec![cop], Vec::new());
    let mut rng = Pcg32::seed_from_u64(4);

    tick(&mut world, &DriveIntent::default(), SIM_DT, &tuning, &mut rng);

    // Friction first (4.0 -> 3.95), then the bounce
    let expected = (4.0 - tuning.friction) * tuning.bounce_factor;
    assert!((world.player.speed - expected).abs() < 1e-5);
    assert!((world.player.pos.x - 990.0).abs() < 1e-3);

    // The pursuer skips steering and just bounces off the moved player
    let cop = &world.pursuers[0];
    assert_eq!(cop.speed, 2.0 * tuning.bounce_factor);
    assert!(cop.pos.x > 1005.0);
}

#[test]
fn car_damage_waits_for_cooldown() {
    let tuning = Tuning::default();
    let mut player = Car::player(Vec2::new(1000.0, 1000.0), &tuning);
    player.damage_cooldown = 0.5;
    let cop = Car::pursuer(Vec2::new(1005.0, 1000.0), &tuning);
    let mut world = WorldState::new(player, vec![cop], Vec::new());
    let mut rng = Pcg32::seed_from_u64(4);

    tick(&mut world, &DriveIntent::default(), SIM_DT, &tuning, &mut rng);
    assert_eq!(world.player.health, tuning.max_health);
    assert!((world.player.pos.x - 990.0).abs() < 1e-3);
}

#[test]
fn repeated_wall_hits_waste_the_player() {
    let tuning = Tuning::default();
    let player = Car::player(Vec2::new(1000.0, 1000.0), &tuning);
    let obstacles = vec![building(Rect::new(1020.0, 900.0, 60.0, 200.0))];
    let mut world = WorldState::new(player, Vec::new(), obstacles);
    let mut rng = Pcg32::seed_from_u64(12);
    let floor_it = DriveIntent {
        accelerate: true,
        ..Default::default()
    };

    let mut ticks = 0;
    while !world.ended() && ticks < 5000 {
        tick(&mut world, &floor_it, 0.1, &tuning, &mut rng);
        ticks += 1;
        assert!(world.player.health >= 0.0);
        assert!(world.player.speed.abs() <= world.player.max_speed);
    }

    assert!(world.is_wasted());
    assert!(!world.is_busted());
    assert_eq!(world.outcome, Some(Outcome::Wasted));
    assert_eq!(world.player.health, 0.0);
}

#[test]
fn line_of_sight_is_symmetric_around_buildings() {
    let rects = [
        Rect::new(100.0, 100.0, 50.0, 50.0),
        Rect::new(300.0, 0.0, 20.0, 400.0),
    ];
    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(200.0, 200.0),
        Vec2::new(125.0, 300.0),
        Vec2::new(500.0, 50.0),
    ];
    for a in points {
        for b in points {
            assert_eq!(
                line_of_sight(a, b, &rects),
                line_of_sight(b, a, &rects),
                "{a} <-> {b}"
            );
        }
    }
}

#[test]
fn session_runs_and_restarts() {
    let mut session = Session::new(31337, Tuning::default()).unwrap();
    let input = DriveIntent {
        accelerate: true,
        turn_left: true,
        ..Default::default()
    };
    for _ in 0..600 {
        session.step(&input, SIM_DT);
        let world = session.world();
        assert!(world.player.speed.abs() <= world.player.max_speed);
        for cop in &world.pursuers {
            assert!(cop.speed.abs() <= cop.max_speed);
            assert!((0.0..360.0).contains(&cop.heading));
        }
        assert!((0.0..=world.player.max_health).contains(&world.player.health));
    }

    let world = session.restart().unwrap();
    assert_eq!(world.time_ticks, 0);
    assert!(!world.ended());
}

#[test]
fn prepared_world_runs_through_session() {
    let tuning = Tuning::default();
    let player = Car::player(Vec2::new(2000.0, 2000.0), &tuning);
    let mut cop = Car::pursuer(Vec2::new(2100.0, 2000.0), &tuning);
    cop.heading = 180.0;
    let world = WorldState::new(player, vec![cop], boundary_walls());
    let mut session = Session::with_world(4, tuning, world).unwrap();

    while !session.world().ended() && session.world().time_ticks < 600 {
        session.step(&DriveIntent::default(), SIM_DT);
    }
    assert!(session.world().is_busted());

    // Ended sessions stay frozen until restarted
    let ticks = session.world().time_ticks;
    session.step(&DriveIntent::default(), SIM_DT);
    assert_eq!(session.world().time_ticks, ticks);

    let world = session.restart().unwrap();
    assert!(!world.ended());
    assert_eq!(world.time_ticks, 0);
}
