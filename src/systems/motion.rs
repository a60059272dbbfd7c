//! Fork and trolley motion.
//!
//! Every frame while a fork is active:
//! 1. the fork scrolls left by `scroll_speed`;
//! 2. if decided, the transition advances by `transition_step`, the trolley
//!    turns toward the chosen branch's angle by at most `rotation_speed` and
//!    drifts vertically by `sin(angle) * vertical_offset`;
//! 3. once the whole fork is past the left edge it is cleared and a
//!    [`ForkClearedEvent`] is triggered.
//!
//! All steps are per frame, so the pace is tied to the target frame rate.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::trolley::Trolley;
use crate::events::fork::ForkClearedEvent;
use crate::resources::fork::ActiveFork;
use crate::resources::gameconfig::GameConfig;
use crate::resources::screensize::ScreenSize;

/// Move `current` toward `target` by a fixed `step`, landing exactly on
/// `target` once it is within one step.
pub fn approach_angle(current: f32, target: f32, step: f32) -> f32 {
    let remaining = target - current;
    if remaining.abs() <= step {
        target
    } else {
        current + step.copysign(remaining)
    }
}

pub fn fork_motion_system(
    mut active: ResMut<ActiveFork>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
    mut trolleys: Query<(&mut MapPosition, &mut Rotation), With<Trolley>>,
    mut commands: Commands,
) {
    let Some(fork) = active.get_mut() else {
        return;
    };

    fork.scroll(config.scroll_speed);

    if let Some(target) = fork.decision().map(|decision| decision.target_angle()) {
        fork.advance_transition(config.transition_step);
        for (mut position, mut rotation) in trolleys.iter_mut() {
            rotation.degrees = approach_angle(rotation.degrees, target, config.rotation_speed);
            position.pos.y += rotation.radians().sin() * config.vertical_offset;
        }
    }

    if !fork.has_scrolled_past(screen.left_edge()) {
        return;
    }
    let chosen = fork.decision().map(|decision| decision.branch());
    active.clear();
    commands.trigger(ForkClearedEvent { chosen });
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_approach_steps_toward_target() {
        assert!(approx_eq(approach_angle(0.0, -30.0, 2.0), -2.0));
        assert!(approx_eq(approach_angle(0.0, 30.0, 2.0), 2.0));
    }

    #[test]
    fn test_approach_snaps_within_one_step() {
        assert!(approx_eq(approach_angle(-29.0, -30.0, 2.0), -30.0));
        assert!(approx_eq(approach_angle(-30.0, -30.0, 2.0), -30.0));
    }

    #[test]
    fn test_approach_never_overshoots() {
        let mut angle = 0.0;
        for _ in 0..100 {
            angle = approach_angle(angle, 25.0, 3.0);
            assert!(angle <= 25.0);
        }
        assert!(approx_eq(angle, 25.0));
    }
}
