//! Fork lifecycle events and their observers.
//!
//! - [`BranchChosenEvent`] is triggered once per fork, when the player's choice
//!   is accepted. [`tally_sacrifice_observer`] adds the branch's people to the
//!   [`Score`].
//! - [`ForkClearedEvent`] is triggered when the active fork scrolls off the
//!   left edge. [`reset_trolley_observer`] puts the trolley back on the main
//!   line and restarts the scheduler cooldown.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::trolley::Trolley;
use crate::resources::fork::Branch;
use crate::resources::scheduler::ForkScheduler;
use crate::resources::score::Score;

/// The player committed the trolley to `branch`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchChosenEvent {
    pub branch: Branch,
    /// People standing on the chosen branch.
    pub people: u32,
}

/// The active fork left the screen.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForkClearedEvent {
    /// Branch that was chosen, or `None` if the fork passed undecided.
    pub chosen: Option<Branch>,
}

/// Add the people on the chosen branch to the score.
pub fn tally_sacrifice_observer(trigger: On<BranchChosenEvent>, mut score: ResMut<Score>) {
    let event = trigger.event();
    score.record_decision(event.people);
    info!(
        "Branch {:?} chosen, {} sacrificed (total {})",
        event.branch,
        event.people,
        score.sacrificed()
    );
}

/// Return the trolley to neutral and restart the cooldown.
///
/// Runs whether or not the fork was decided. An undecided fork only counts as
/// an abstention; the sacrificed total is untouched.
pub fn reset_trolley_observer(
    trigger: On<ForkClearedEvent>,
    mut trolleys: Query<(&mut MapPosition, &mut Rotation, &Trolley)>,
    mut scheduler: ResMut<ForkScheduler>,
    mut score: ResMut<Score>,
) {
    let event = trigger.event();
    for (mut position, mut rotation, trolley) in trolleys.iter_mut() {
        position.pos.y = trolley.rest_y;
        rotation.degrees = 0.0;
    }
    scheduler.reset();

    match event.chosen {
        Some(branch) => debug!("Fork cleared after choosing branch {:?}", branch),
        None => {
            score.record_abstention();
            debug!("Fork cleared without a decision");
        }
    }
}
