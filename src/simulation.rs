use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::error::ConfigError;
use crate::interaction::{InteractionParams, InteractivityMatrix, apply_interactivity};
use crate::particle::{ParticleGroup, create_group};

/// Groups, coefficients and parameters of one run, advanced a frame at a time.
pub struct Simulation {
    groups: Vec<ParticleGroup>,
    matrix: InteractivityMatrix,
    params: InteractionParams,
    frame: u64,
}

impl Simulation {
    /// Spawns every configured group, in order, from `rng`. `config` must
    /// already be validated.
    pub fn new<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let arena = config.arena();
        let groups: Vec<_> = config
            .groups
            .iter()
            .map(|group| create_group(group.name.as_str(), group.count, &arena, group.color, &mut *rng))
            .collect();

        log::info!(
            "created {} groups of {} particles in a {}x{} arena",
            groups.len(),
            groups.first().map_or(0, ParticleGroup::len),
            arena.width,
            arena.height
        );

        Self {
            groups,
            matrix: config.interactivity_matrix(),
            params: config.interaction_params(),
            frame: 0,
        }
    }

    /// Validates `config` and seeds the generator from `seed`, falling back to
    /// the config's seed and then to a random one. Returns the seed actually used.
    pub fn from_config(config: &Config, seed: Option<u64>) -> Result<(Self, u64), ConfigError> {
        config.validate()?;
        let seed = seed.or(config.seed).unwrap_or_else(rand::random);
        log::info!("using seed {}", seed);
        let mut rng = StdRng::seed_from_u64(seed);
        Ok((Self::new(config, &mut rng), seed))
    }

    pub fn step(&mut self) {
        apply_interactivity(&mut self.groups, &self.matrix, &self.params);
        self.frame += 1;
        log::trace!("frame {} done", self.frame);
    }

    pub fn groups(&self) -> &[ParticleGroup] {
        &self.groups
    }

    pub fn params(&self) -> &InteractionParams {
        &self.params
    }

    pub fn matrix(&self) -> &InteractivityMatrix {
        &self.matrix
    }

    /// Number of completed steps.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
