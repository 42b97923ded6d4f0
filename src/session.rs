//! A play session: seeded RNG, tuning and the current world

use rand::SeedableRng;
use rand_pcg::Pcg32;

use thiserror::Error;

use crate::sim::{DriveIntent, WorldState, tick};
use crate::tuning::{Tuning, TuningError};
use crate::world_gen::{SpawnError, generate_world};

/// Why a session could not start
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),
    #[error(transparent)]
    Spawn(#[from] SpawnError),
}

/// Owns everything needed to run and restart the simulation
#[derive(Debug, Clone)]
pub struct Session {
    seed: u64,
    tuning: Tuning,
    /// Shared by world generation and pursuer AI
    rng: Pcg32,
    world: WorldState,
}

impl Session {
    /// Start a session with a freshly generated world
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, SessionError> {
        tuning.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = generate_world(&mut rng, &tuning)?;
        log::info!("Started session with seed {}", seed);
        Ok(Self {
            seed,
            tuning,
            rng,
            world,
        })
    }

    /// Start a session on a prepared world (no generation)
    pub fn with_world(seed: u64, tuning: Tuning, world: WorldState) -> Result<Self, SessionError> {
        tuning.validate()?;
        Ok(Self {
            seed,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            world,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Advance one tick with the given controls and elapsed seconds
    pub fn step(&mut self, input: &DriveIntent, dt: f32) {
        tick(&mut self.world, input, dt, &self.tuning, &mut self.rng);
    }

    /// Discard the world and generate a new layout from the session RNG.
    ///
    /// On failure the previous world is kept.
    pub fn restart(&mut self) -> Result<&WorldState, SpawnError> {
        self.world = generate_world(&mut self.rng, &self.tuning)?;
        log::info!("Session restarted");
        Ok(&self.world)
    }
}
