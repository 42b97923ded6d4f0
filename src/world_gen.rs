//! World generation
//!
//! Random building layout, enclosing boundary walls and spawn placement.
//! Everything draws from the caller's RNG, so a seed reproduces a layout.

use glam::Vec2;
use rand::Rng;
use thiserror::Error;

use crate::consts::*;
use crate::sim::geometry::{Rect, overlaps_any};
use crate::sim::state::{Car, Obstacle, ObstacleKind, WorldState};
use crate::tuning::Tuning;

/// Boundary walls are drawn black
const BOUNDARY_COLOR: [u8; 3] = [0, 0, 0];

/// Generation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    /// The obstacle field left no open spot within the attempt budget
    #[error("no open spawn position after {attempts} attempts")]
    NoOpenPosition { attempts: usize },
}

/// Place up to `count` non-overlapping buildings that avoid every `forbidden` rect.
///
/// Gives up after `count * BUILDING_ATTEMPTS_PER_SLOT` tries, so a crowded map
/// yields fewer buildings rather than hanging.
pub fn generate_buildings<R: Rng>(rng: &mut R, count: usize, forbidden: &[Rect]) -> Vec<Obstacle> {
    let mut buildings: Vec<Obstacle> = Vec::with_capacity(count);
    let max_attempts = count * BUILDING_ATTEMPTS_PER_SLOT;
    let mut attempts = 0;

    while buildings.len() < count && attempts < max_attempts {
        attempts += 1;
        let w = rng.random_range(BUILDING_MIN_SIZE..=BUILDING_MAX_SIZE);
        let h = rng.random_range(BUILDING_MIN_SIZE..=BUILDING_MAX_SIZE);
        let x = rng.random_range(0..=MAP_WIDTH as i32 - w);
        let y = rng.random_range(0..=MAP_HEIGHT as i32 - h);
        let rect = Rect::new(x as f32, y as f32, w as f32, h as f32);

        if overlaps_any(&rect, forbidden) || overlaps_any(&rect, buildings.iter().map(|b| &b.rect))
        {
            continue;
        }

        let color = [
            rng.random_range(80..=120),
            rng.random_range(80..=120),
            rng.random_range(80..=120),
        ];
        buildings.push(Obstacle {
            rect,
            kind: ObstacleKind::Building,
            color,
        });
    }

    if buildings.len() < count {
        log::warn!(
            "Placed {} of {} buildings after {} attempts",
            buildings.len(),
            count,
            attempts
        );
    }
    buildings
}

/// Four walls just outside the map edges
pub fn boundary_walls() -> Vec<Obstacle> {
    let t = BOUNDARY_THICKNESS;
    [
        Rect::new(-t, 0.0, t, MAP_HEIGHT),
        Rect::new(MAP_WIDTH, 0.0, t, MAP_HEIGHT),
        Rect::new(0.0, -t, MAP_WIDTH, t),
        Rect::new(0.0, MAP_HEIGHT, MAP_WIDTH, t),
    ]
    .into_iter()
    .map(|rect| Obstacle {
        rect,
        kind: ObstacleKind::Boundary,
        color: BOUNDARY_COLOR,
    })
    .collect()
}

/// Random point whose clear square misses every obstacle and every `occupied` rect
pub fn find_spawn<R: Rng>(
    rng: &mut R,
    obstacles: &[Obstacle],
    occupied: &[Rect],
) -> Result<Vec2, SpawnError> {
    let probe_size = Vec2::splat(SPAWN_PROBE_SIZE);
    let (lo, hi_x, hi_y) = (
        SPAWN_MARGIN as i32,
        (MAP_WIDTH - SPAWN_MARGIN) as i32,
        (MAP_HEIGHT - SPAWN_MARGIN) as i32,
    );

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let pos = Vec2::new(
            rng.random_range(lo..=hi_x) as f32,
            rng.random_range(lo..=hi_y) as f32,
        );
        let probe = Rect::from_center(pos, probe_size);
        if !overlaps_any(&probe, obstacles.iter().map(|o| &o.rect))
            && !overlaps_any(&probe, occupied)
        {
            return Ok(pos);
        }
    }
    Err(SpawnError::NoOpenPosition {
        attempts: MAX_SPAWN_ATTEMPTS,
    })
}

/// Build a fresh world: player at the fixed start, buildings, walls, pursuers
pub fn generate_world<R: Rng>(rng: &mut R, tuning: &Tuning) -> Result<WorldState, SpawnError> {
    let player_start = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
    let safe_zone = Rect::from_center(player_start, Vec2::splat(SAFE_ZONE_SIZE));

    let mut obstacles = generate_buildings(rng, BUILDING_COUNT, &[safe_zone]);
    obstacles.extend(boundary_walls());

    let player = Car::player(player_start, tuning);
    let mut occupied = vec![player.footprint()];
    let mut pursuers = Vec::with_capacity(tuning.pursuer_count);
    for _ in 0..tuning.pursuer_count {
        let pos = find_spawn(rng, &obstacles, &occupied)?;
        let cop = Car::pursuer(pos, tuning);
        occupied.push(cop.footprint());
        pursuers.push(cop);
    }

    log::info!(
        "Generated world: {} obstacles, {} pursuers",
        obstacles.len(),
        pursuers.len()
    );
    Ok(WorldState::new(player, pursuers, obstacles))
}
