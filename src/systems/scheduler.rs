//! Fork scheduling system.
//!
//! Counts idle frames while no fork is on screen and activates a freshly
//! generated fork once the cooldown elapses.

use bevy_ecs::prelude::*;
use log::info;

use crate::resources::fork::{ActiveFork, Branch};
use crate::resources::forkrng::ForkRng;
use crate::resources::gameconfig::GameConfig;
use crate::resources::scheduler::ForkScheduler;
use crate::resources::screensize::ScreenSize;
use crate::systems::forkgen::generate_fork;

pub fn fork_scheduler_system(
    mut active: ResMut<ActiveFork>,
    mut scheduler: ResMut<ForkScheduler>,
    mut rng: ResMut<ForkRng>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
) {
    if !scheduler.tick(active.is_active()) {
        return;
    }
    let fork = generate_fork(&mut rng.0, &config, &screen);
    info!(
        "New fork: {} people on branch A, {} on branch B",
        fork.people(Branch::A),
        fork.people(Branch::B)
    );
    active.activate(fork);
}
