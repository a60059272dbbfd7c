//! Running tally of the player's choices.

use bevy_ecs::prelude::Resource;

/// Score resource.
///
/// `sacrificed` only ever grows, by the people count of each chosen branch.
/// Forks that scroll away undecided are counted as abstentions and cost
/// nothing.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    sacrificed: u32,
    decisions: u32,
    abstentions: u32,
}

impl Score {
    /// Total people on every branch the player has chosen.
    pub fn sacrificed(&self) -> u32 {
        self.sacrificed
    }

    pub fn decisions(&self) -> u32 {
        self.decisions
    }

    pub fn abstentions(&self) -> u32 {
        self.abstentions
    }

    /// Record one decision that sent the trolley over `people`.
    pub fn record_decision(&mut self, people: u32) {
        self.sacrificed = self.sacrificed.saturating_add(people);
        self.decisions += 1;
    }

    /// Record a fork that left the screen without a choice.
    pub fn record_abstention(&mut self) {
        self.abstentions += 1;
    }

    /// Text shown in the corner of the screen.
    pub fn label(&self) -> String {
        format!("Sacrificed: {}", self.sacrificed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_accumulates_decisions() {
        let mut score = Score::default();
        score.record_decision(4);
        score.record_decision(7);
        assert_eq!(score.sacrificed(), 11);
        assert_eq!(score.decisions(), 2);
        assert_eq!(score.label(), "Sacrificed: 11");
    }

    #[test]
    fn test_abstention_costs_nothing() {
        let mut score = Score::default();
        score.record_decision(3);
        score.record_abstention();
        assert_eq!(score.sacrificed(), 3);
        assert_eq!(score.abstentions(), 1);
    }
}
