//! Branch decision system.
//!
//! Turns a direction key press into a decision on the active fork. A fork
//! accepts exactly one decision; presses after that, or while no fork is on
//! screen, are ignored.

use bevy_ecs::prelude::*;
use log::debug;

use crate::events::fork::BranchChosenEvent;
use crate::resources::fork::ActiveFork;
use crate::resources::input::InputState;

pub fn choose_branch_system(
    input: Res<InputState>,
    mut active: ResMut<ActiveFork>,
    mut commands: Commands,
) {
    let Some(branch) = input.requested_branch() else {
        return;
    };
    let Some(fork) = active.get_mut() else {
        debug!("Branch {:?} requested with no fork on screen", branch);
        return;
    };

    match fork.decide(branch) {
        Some(people) => commands.trigger(BranchChosenEvent { branch, people }),
        None => debug!("Fork already decided, ignoring branch {:?}", branch),
    }
}
