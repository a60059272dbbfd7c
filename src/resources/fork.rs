//! The active track fork and its decision state machine.
//!
//! At most one [`Fork`] exists at a time; [`ActiveFork`] holds it. A fork moves
//! through the phases reported by [`ActiveFork::phase`]:
//!
//! ```text
//! NoFork -> Undecided -> Transitioning(p) -> Settled -> (scrolled off) -> NoFork
//! ```
//!
//! Only the scheduler creates forks and only player input decides them. The
//! divergence angles stored in the fork never change; the angle a chosen branch
//! is drawn at is derived from the transition progress each time it is asked.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::geometry::TrackSegment;

/// One of the two branches of a fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Diverges at `-D` degrees. Chosen with the up key, label above the endpoint.
    A,
    /// Diverges at `+D` degrees. Chosen with the down key, label below the endpoint.
    B,
}

impl Branch {
    pub const ALL: [Branch; 2] = [Branch::A, Branch::B];

    /// Sign applied to the fork's divergence angle for this branch.
    pub fn angle_sign(self) -> f32 {
        match self {
            Branch::A => -1.0,
            Branch::B => 1.0,
        }
    }
}

/// Immutable definition of one branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForkBranch {
    /// Angle the branch leaves the main line at, in degrees.
    pub divergence_angle: f32,
    /// People standing on the branch.
    pub people: u32,
}

/// The player's choice for a fork.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    branch: Branch,
    target_angle: f32,
    progress: f32,
}

impl Decision {
    fn new(branch: Branch, target_angle: f32) -> Self {
        Decision {
            branch,
            target_angle,
            progress: 0.0,
        }
    }

    pub fn branch(&self) -> Branch {
        self.branch
    }

    /// Divergence angle of the chosen branch; the trolley rotates toward it.
    pub fn target_angle(&self) -> f32 {
        self.target_angle
    }

    /// Transition progress in `[0.0, 1.0]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Advance progress by `step`, clamped to `1.0`. Negative steps are ignored
    /// so progress never goes backwards.
    pub fn advance(&mut self, step: f32) {
        self.progress = (self.progress + step.max(0.0)).min(1.0);
    }

    pub fn is_settled(&self) -> bool {
        self.progress >= 1.0
    }

    /// Angle the chosen branch is drawn at: eases linearly from the divergence
    /// angle back to the main line as progress goes from 0 to 1.
    pub fn display_angle(&self) -> f32 {
        self.target_angle * (1.0 - self.progress)
    }
}

/// A two-branch fork scrolling toward the trolley.
#[derive(Debug, Clone, PartialEq)]
pub struct Fork {
    origin: Vector2,
    length: f32,
    branch_a: ForkBranch,
    branch_b: ForkBranch,
    decision: Option<Decision>,
}

impl Fork {
    /// Build an undecided fork with branches at `-divergence` (A) and
    /// `+divergence` (B) degrees.
    pub fn new(
        origin: Vector2,
        length: f32,
        divergence: f32,
        people_a: u32,
        people_b: u32,
    ) -> Self {
        Fork {
            origin,
            length,
            branch_a: ForkBranch {
                divergence_angle: Branch::A.angle_sign() * divergence,
                people: people_a,
            },
            branch_b: ForkBranch {
                divergence_angle: Branch::B.angle_sign() * divergence,
                people: people_b,
            },
            decision: None,
        }
    }

    /// Shared origin of both branches.
    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn branch(&self, branch: Branch) -> &ForkBranch {
        match branch {
            Branch::A => &self.branch_a,
            Branch::B => &self.branch_b,
        }
    }

    pub fn people(&self, branch: Branch) -> u32 {
        self.branch(branch).people
    }

    pub fn decision(&self) -> Option<&Decision> {
        self.decision.as_ref()
    }

    pub fn is_decided(&self) -> bool {
        self.decision.is_some()
    }

    /// Record the player's choice.
    ///
    /// Returns the number of people on the chosen branch when the choice is
    /// accepted, or `None` if this fork was already decided. The first choice
    /// stands for the rest of the fork's life.
    pub fn decide(&mut self, branch: Branch) -> Option<u32> {
        if self.decision.is_some() {
            return None;
        }
        let chosen = *self.branch(branch);
        self.decision = Some(Decision::new(branch, chosen.divergence_angle));
        Some(chosen.people)
    }

    /// Move the whole fork left by `dx`. Both branches hang off the same origin
    /// so the fork stays rigid.
    pub fn scroll(&mut self, dx: f32) {
        self.origin.x -= dx;
    }

    /// Advance the transition of a decided fork. No-op while undecided.
    pub fn advance_transition(&mut self, step: f32) {
        if let Some(decision) = self.decision.as_mut() {
            decision.advance(step);
        }
    }

    /// Angle `branch` should currently be drawn at.
    pub fn display_angle(&self, branch: Branch) -> f32 {
        match self.decision {
            Some(decision) if decision.branch == branch => decision.display_angle(),
            _ => self.branch(branch).divergence_angle,
        }
    }

    /// Current segment for `branch`, built from the fork origin and its
    /// display angle.
    pub fn segment(&self, branch: Branch) -> TrackSegment {
        TrackSegment::new(self.origin, self.display_angle(branch), self.length)
    }

    /// Whether `branch` is drawn: both while undecided, only the chosen one after.
    pub fn is_drawn(&self, branch: Branch) -> bool {
        match self.decision {
            Some(decision) => decision.branch == branch,
            None => true,
        }
    }

    pub fn visible_branches(&self) -> ArrayVec<Branch, 2> {
        Branch::ALL
            .into_iter()
            .filter(|branch| self.is_drawn(*branch))
            .collect()
    }

    /// True once the whole fork lies left of `left_edge`.
    pub fn has_scrolled_past(&self, left_edge: f32) -> bool {
        self.origin.x + self.length < left_edge
    }
}

/// Coarse view of the decision state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForkPhase {
    NoFork,
    Undecided,
    /// Decided, progress still below `1.0`.
    Transitioning(f32),
    /// Decided, progress reached `1.0`.
    Settled,
}

/// Resource holding the single active fork, if any.
#[derive(Resource, Debug, Default, Clone)]
pub struct ActiveFork {
    fork: Option<Fork>,
}

impl ActiveFork {
    pub fn get(&self) -> Option<&Fork> {
        self.fork.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut Fork> {
        self.fork.as_mut()
    }

    pub fn is_active(&self) -> bool {
        self.fork.is_some()
    }

    /// Make `fork` the active fork.
    ///
    /// # Panics
    ///
    /// Panics if a fork is already active.
    pub fn activate(&mut self, fork: Fork) {
        assert!(
            self.fork.is_none(),
            "tried to activate a fork while another one is active"
        );
        self.fork = Some(fork);
    }

    /// Remove and return the active fork.
    pub fn clear(&mut self) -> Option<Fork> {
        self.fork.take()
    }

    pub fn phase(&self) -> ForkPhase {
        match self.fork.as_ref().map(|fork| fork.decision()) {
            None => ForkPhase::NoFork,
            Some(None) => ForkPhase::Undecided,
            Some(Some(decision)) if decision.is_settled() => ForkPhase::Settled,
            Some(Some(decision)) => ForkPhase::Transitioning(decision.progress()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn sample_fork() -> Fork {
        Fork::new(Vector2 { x: 800.0, y: 300.0 }, 300.0, 30.0, 4, 7)
    }

    #[test]
    fn test_new_fork_is_symmetric_and_undecided() {
        let fork = sample_fork();
        assert!(approx_eq(fork.branch(Branch::A).divergence_angle, -30.0));
        assert!(approx_eq(fork.branch(Branch::B).divergence_angle, 30.0));
        assert_eq!(fork.people(Branch::A), 4);
        assert_eq!(fork.people(Branch::B), 7);
        assert!(!fork.is_decided());
        assert_eq!(fork.visible_branches().as_slice(), &[Branch::A, Branch::B]);
    }

    #[test]
    fn test_decide_returns_people_once() {
        let mut fork = sample_fork();
        assert_eq!(fork.decide(Branch::A), Some(4));
        assert_eq!(fork.decide(Branch::B), None);
        assert_eq!(fork.decide(Branch::A), None);
        let decision = fork.decision().unwrap();
        assert_eq!(decision.branch(), Branch::A);
        assert!(approx_eq(decision.target_angle(), -30.0));
        assert!(approx_eq(decision.progress(), 0.0));
    }

    #[test]
    fn test_decided_fork_draws_only_chosen_branch() {
        let mut fork = sample_fork();
        fork.decide(Branch::B);
        assert!(fork.is_drawn(Branch::B));
        assert!(!fork.is_drawn(Branch::A));
        assert_eq!(fork.visible_branches().as_slice(), &[Branch::B]);
    }

    #[test]
    fn test_progress_clamps_at_one() {
        let mut fork = sample_fork();
        fork.decide(Branch::A);
        let mut last = 0.0;
        for _ in 0..80 {
            fork.advance_transition(0.02);
            let progress = fork.decision().unwrap().progress();
            assert!(progress >= last);
            assert!(progress <= 1.0);
            last = progress;
        }
        assert!(approx_eq(last, 1.0));
    }

    #[test]
    fn test_advance_ignored_while_undecided() {
        let mut fork = sample_fork();
        fork.advance_transition(0.5);
        assert!(fork.decision().is_none());
    }

    #[test]
    fn test_display_angle_eases_to_main_line() {
        let mut fork = sample_fork();
        fork.decide(Branch::A);
        assert!(approx_eq(fork.display_angle(Branch::A), -30.0));
        fork.advance_transition(0.5);
        assert!(approx_eq(fork.display_angle(Branch::A), -15.0));
        fork.advance_transition(0.5);
        assert!(approx_eq(fork.display_angle(Branch::A), 0.0));
        // the other branch keeps its definition
        assert!(approx_eq(fork.display_angle(Branch::B), 30.0));
        assert!(approx_eq(fork.branch(Branch::A).divergence_angle, -30.0));
    }

    #[test]
    fn test_scroll_moves_both_segments() {
        let mut fork = sample_fork();
        let a_before = fork.segment(Branch::A).endpoint();
        let b_before = fork.segment(Branch::B).endpoint();
        fork.scroll(2.0);
        let a_after = fork.segment(Branch::A);
        let b_after = fork.segment(Branch::B);
        assert_eq!(a_after.origin, b_after.origin);
        assert!(approx_eq(a_after.origin.x, 798.0));
        assert!(approx_eq(a_after.endpoint().x, a_before.x - 2.0));
        assert!(approx_eq(b_after.endpoint().x, b_before.x - 2.0));
    }

    #[test]
    fn test_has_scrolled_past_needs_whole_length() {
        let mut fork = Fork::new(Vector2 { x: 0.0, y: 300.0 }, 300.0, 30.0, 1, 1);
        assert!(!fork.has_scrolled_past(0.0));
        fork.scroll(300.0);
        assert!(!fork.has_scrolled_past(0.0));
        fork.scroll(1.0);
        assert!(fork.has_scrolled_past(0.0));
    }

    #[test]
    fn test_phase_progression() {
        let mut active = ActiveFork::default();
        assert_eq!(active.phase(), ForkPhase::NoFork);
        active.activate(sample_fork());
        assert_eq!(active.phase(), ForkPhase::Undecided);
        active.get_mut().unwrap().decide(Branch::B);
        assert_eq!(active.phase(), ForkPhase::Transitioning(0.0));
        active.get_mut().unwrap().advance_transition(1.0);
        assert_eq!(active.phase(), ForkPhase::Settled);
        assert!(active.clear().is_some());
        assert_eq!(active.phase(), ForkPhase::NoFork);
    }

    #[test]
    #[should_panic(expected = "another one is active")]
    fn test_second_activation_panics() {
        let mut active = ActiveFork::default();
        active.activate(sample_fork());
        active.activate(sample_fork());
    }

    #[test]
    fn test_branch_helpers() {
        assert_eq!(Branch::ALL, [Branch::A, Branch::B]);
        assert!(approx_eq(Branch::A.angle_sign(), -1.0));
        assert!(approx_eq(Branch::B.angle_sign(), 1.0));
    }
}
