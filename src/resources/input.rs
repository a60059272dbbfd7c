//! Per-frame keyboard input resource.
//!
//! Captures the handful of keys the game reacts to: the two branch choices,
//! quitting and the debug overlay toggle. Arrow keys pick the branch.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::fork::Branch;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Choose branch A (default: Up arrow).
    pub branch_a: BoolState,
    /// Choose branch B (default: Down arrow).
    pub branch_b: BoolState,
    /// Leave the game (default: Escape).
    pub quit: BoolState,
    /// Toggle the debug overlay (default: F11).
    pub debug_toggle: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            branch_a: BoolState::bound_to(KeyboardKey::KEY_UP),
            branch_b: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            quit: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            debug_toggle: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Branch requested this frame, if any.
    ///
    /// Branch A is checked first, so pressing both keys on the same frame
    /// picks A.
    pub fn requested_branch(&self) -> Option<Branch> {
        if self.branch_a.just_pressed {
            Some(Branch::A)
        } else if self.branch_b.just_pressed {
            Some(Branch::B)
        } else {
            None
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.just_pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.branch_a.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.branch_b.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.quit.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.debug_toggle.key_binding, KeyboardKey::KEY_F11);
        assert!(!input.branch_a.active);
        assert!(!input.quit_requested());
    }

    #[test]
    fn test_requested_branch() {
        let mut input = InputState::default();
        assert_eq!(input.requested_branch(), None);

        input.branch_b.just_pressed = true;
        assert_eq!(input.requested_branch(), Some(Branch::B));

        input.branch_a.just_pressed = true;
        assert_eq!(input.requested_branch(), Some(Branch::A));
    }

    #[test]
    fn test_held_key_is_not_a_request() {
        let mut input = InputState::default();
        input.branch_a.active = true;
        assert_eq!(input.requested_branch(), None);
    }
}
