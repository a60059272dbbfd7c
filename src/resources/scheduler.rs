//! Cooldown between forks.

use bevy_ecs::prelude::Resource;

/// Counts idle frames and says when the next fork is due.
///
/// The counter only runs while no fork is active and restarts from zero every
/// time it fires or a fork is cleared.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForkScheduler {
    frames_idle: u32,
    cooldown: u32,
}

impl ForkScheduler {
    pub fn new(cooldown: u32) -> Self {
        ForkScheduler {
            frames_idle: 0,
            cooldown: cooldown.max(1),
        }
    }

    pub fn frames_idle(&self) -> u32 {
        self.frames_idle
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    /// Advance one frame. Returns `true` when a new fork should be generated
    /// this frame. Never fires while `fork_active` is set.
    pub fn tick(&mut self, fork_active: bool) -> bool {
        if fork_active {
            return false;
        }
        self.frames_idle += 1;
        if self.frames_idle >= self.cooldown {
            self.frames_idle = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.frames_idle = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_exact_cooldown_frame() {
        let mut scheduler = ForkScheduler::new(180);
        for frame in 1..180 {
            assert!(!scheduler.tick(false), "fired early on frame {}", frame);
        }
        assert!(scheduler.tick(false));
        assert_eq!(scheduler.frames_idle(), 0);
    }

    #[test]
    fn test_never_fires_while_fork_active() {
        let mut scheduler = ForkScheduler::new(3);
        for _ in 0..10 {
            assert!(!scheduler.tick(true));
        }
        assert_eq!(scheduler.frames_idle(), 0);
    }

    #[test]
    fn test_zero_cooldown_is_clamped() {
        let mut scheduler = ForkScheduler::new(0);
        assert_eq!(scheduler.cooldown(), 1);
        assert!(scheduler.tick(false));
    }

    #[test]
    fn test_reset_restarts_count() {
        let mut scheduler = ForkScheduler::new(5);
        scheduler.tick(false);
        scheduler.tick(false);
        scheduler.reset();
        assert_eq!(scheduler.frames_idle(), 0);
    }
}
