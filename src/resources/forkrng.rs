//! Random source for fork generation.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

/// Random number generator used to draw people counts.
///
/// Seed it with [`ForkRng::with_seed`] for a reproducible sequence of forks.
#[derive(Resource, Debug, Clone)]
pub struct ForkRng(pub Rng);

impl Default for ForkRng {
    fn default() -> Self {
        ForkRng(Rng::new())
    }
}

impl ForkRng {
    pub fn with_seed(seed: u64) -> Self {
        ForkRng(Rng::with_seed(seed))
    }
}
