//! Fork generation.

use fastrand::Rng;
use raylib::prelude::Vector2;

use crate::resources::fork::Fork;
use crate::resources::gameconfig::GameConfig;
use crate::resources::screensize::ScreenSize;

/// Fewest people that can stand on a branch.
pub const MIN_PEOPLE: u32 = 1;
/// Most people that can stand on a branch.
pub const MAX_PEOPLE: u32 = 10;

/// Build a fresh undecided fork at the right edge of the screen, on the main
/// track line, with an independent uniform people count on each branch.
pub fn generate_fork(rng: &mut Rng, config: &GameConfig, screen: &ScreenSize) -> Fork {
    let people_a = rng.u32(MIN_PEOPLE..=MAX_PEOPLE);
    let people_b = rng.u32(MIN_PEOPLE..=MAX_PEOPLE);
    let origin = Vector2 {
        x: screen.right_edge(),
        y: screen.track_y(),
    };
    Fork::new(
        origin,
        config.branch_length,
        config.divergence_angle,
        people_a,
        people_b,
    )
}
