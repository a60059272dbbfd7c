//! World setup and the per-frame schedule.
//!
//! [`setup`] inserts every resource the simulation needs, spawns the trolley
//! and registers the observers. [`add_simulation_systems`] wires the
//! simulation systems into a schedule, in frame order:
//!
//! ```text
//! FrameSet::Input -> FrameSet::Simulate -> FrameSet::Render
//!                    (decision -> motion -> scheduler)
//! ```
//!
//! Input and rendering need a Raylib window; `main` adds them to their sets.
//! Tests run the simulation sets alone against a window-less world.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::trolley::Trolley;
use crate::events::fork::{reset_trolley_observer, tally_sacrifice_observer};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::fork::ActiveFork;
use crate::resources::forkrng::ForkRng;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::scheduler::ForkScheduler;
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;
use crate::systems::decision::choose_branch_system;
use crate::systems::motion::fork_motion_system;
use crate::systems::scheduler::fork_scheduler_system;

/// Stages of one frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Simulate,
    Render,
}

/// Populate `world` with the simulation state and spawn the trolley.
///
/// Passing a `seed` makes the sequence of generated forks reproducible.
pub fn setup(world: &mut World, config: GameConfig, seed: Option<u64>) -> Entity {
    let screen = ScreenSize::from_config(&config);

    world.insert_resource(screen);
    world.insert_resource(ActiveFork::default());
    world.insert_resource(Score::default());
    world.insert_resource(ForkScheduler::new(config.cooldown_frames));
    world.insert_resource(match seed {
        Some(seed) => ForkRng::with_seed(seed),
        None => ForkRng::default(),
    });
    world.insert_resource(InputState::default());

    let trolley = world
        .spawn((
            Trolley::new(config.trolley_width, config.trolley_height, screen.track_y()),
            MapPosition::new(screen.center_x(), screen.track_y()),
            Rotation::default(),
        ))
        .id();

    world.insert_resource(config);

    world.spawn(Observer::new(tally_sacrifice_observer));
    world.spawn(Observer::new(reset_trolley_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();

    info!(
        "Simulation ready on a {}x{} screen{}",
        screen.w,
        screen.h,
        seed.map(|s| format!(", seed {}", s)).unwrap_or_default()
    );

    trolley
}

/// Add the frame ordering and the simulation systems to `schedule`.
pub fn add_simulation_systems(schedule: &mut Schedule) {
    schedule.configure_sets((FrameSet::Input, FrameSet::Simulate, FrameSet::Render).chain());
    schedule.add_systems(
        (
            choose_branch_system,
            fork_motion_system,
            fork_scheduler_system,
        )
            .chain()
            .in_set(FrameSet::Simulate),
    );
}
