//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`InputState`]. Pressing the debug key triggers a
//! [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let poll = |state: &mut BoolState| {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
        state.just_released = rl.is_key_released(state.key_binding);
    };

    poll(&mut input.branch_a);
    poll(&mut input.branch_b);
    poll(&mut input.quit);
    poll(&mut input.debug_toggle);

    if input.debug_toggle.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
