//! Rating calculator trait
//!
//! This module defines the interface for post-match rating updates and the
//! result type shared by its implementations.

use crate::types::{MatchOutcome, MatchParticipant, MatchScore, PlayerId, RatingChange};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Result of a rating calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingCalculationResult {
    /// Rating changes for every participant assigned to a team
    pub rating_changes: Vec<RatingChange>,
    /// Pre-match rating sum of team A
    pub team_a_sum: f64,
    /// Pre-match rating sum of team B
    pub team_b_sum: f64,
    /// Expected score of team A (0.0 to 1.0)
    pub expected_a: f64,
    /// Expected score of team B, always `1 - expected_a`
    pub expected_b: f64,
    pub outcome: MatchOutcome,
}

/// Trait for calculating rating changes after matches
pub trait RatingCalculator: Send + Sync {
    /// Calculate rating changes for the participants of a finished match
    ///
    /// # Arguments
    /// * `current_ratings` - Ratings before the match; unknown players start
    ///   from [`initial_rating`](Self::initial_rating)
    /// * `participants` - Team, goals and id of everyone in the match record
    /// * `score` - Final score of the match
    fn calculate_rating_changes(
        &self,
        current_ratings: &HashMap<PlayerId, f64>,
        participants: &[MatchParticipant],
        score: MatchScore,
    ) -> RatingCalculationResult;

    /// Get the initial rating for new players
    fn initial_rating(&self) -> f64;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// New ratings after the match.
    ///
    /// Returns `current_ratings` with every team participant's new rating
    /// written in. Participants without a team are left untouched.
    fn update(
        &self,
        current_ratings: &HashMap<PlayerId, f64>,
        participants: &[MatchParticipant],
        score: MatchScore,
    ) -> HashMap<PlayerId, f64> {
        let result = self.calculate_rating_changes(current_ratings, participants, score);
        apply_changes(current_ratings, &result.rating_changes)
    }
}

/// Write rating changes over a copy of `current_ratings`
pub fn apply_changes(
    current_ratings: &HashMap<PlayerId, f64>,
    changes: &[RatingChange],
) -> HashMap<PlayerId, f64> {
    let mut ratings = current_ratings.clone();
    for change in changes {
        ratings.insert(change.player_id, change.new_rating);
    }
    ratings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchTeam;

    #[test]
    fn test_apply_changes() {
        let current = HashMap::from([(1, 1000.0), (2, 1100.0)]);
        let changes = vec![
            RatingChange {
                player_id: 1,
                team: MatchTeam::A,
                goals: 0,
                old_rating: 1000.0,
                new_rating: 1010.0,
                delta: 10.0,
            },
            RatingChange {
                player_id: 3,
                team: MatchTeam::B,
                goals: 1,
                old_rating: 1000.0,
                new_rating: 992.5,
                delta: -7.5,
            },
        ];

        let updated = apply_changes(&current, &changes);
        assert_eq!(updated[&1], 1010.0);
        assert_eq!(updated[&2], 1100.0);
        assert_eq!(updated[&3], 992.5);
        assert_eq!(current[&1], 1000.0);
    }
}
