//! Team Elo rating updates with a per-goal bonus
//!
//! Each team is treated as a single Elo player whose rating is the sum of
//! its members' ratings. Every member of a team receives the team's Elo
//! delta plus a fixed bonus per goal they scored.

use crate::config::RatingConfig;
use crate::rating::calculator::{RatingCalculationResult, RatingCalculator};
use crate::types::{MatchParticipant, MatchScore, MatchTeam, PlayerId, RatingChange};
use crate::utils::rating_or_default;
use skillratings::elo::{expected_score, EloRating};
use std::collections::HashMap;
use tracing::debug;

/// Maximum rating change from the match result alone
pub const K_FACTOR: f64 = 50.0;

/// Rating points awarded per goal scored
pub const GOAL_BONUS: f64 = 2.5;

/// Elo rating calculator over team rating sums
#[derive(Debug, Clone, Default)]
pub struct EloRatingCalculator {
    config: RatingConfig,
}

impl EloRatingCalculator {
    /// Create a new Elo rating calculator
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Expected scores `(team A, team B)` for the given rating sums
    pub fn team_expectations(team_a_sum: f64, team_b_sum: f64) -> (f64, f64) {
        expected_score(
            &EloRating { rating: team_a_sum },
            &EloRating { rating: team_b_sum },
        )
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn calculate_rating_changes(
        &self,
        current_ratings: &HashMap<PlayerId, f64>,
        participants: &[MatchParticipant],
        score: MatchScore,
    ) -> RatingCalculationResult {
        // Snapshot pre-match ratings of everyone on a team
        let rated: Vec<(&MatchParticipant, MatchTeam, f64)> = participants
            .iter()
            .filter_map(|p| {
                p.team.map(|team| {
                    let rating =
                        rating_or_default(current_ratings, p.player_id, self.config.base_rating);
                    (p, team, rating)
                })
            })
            .collect();

        let (team_a_sum, team_b_sum) =
            rated
                .iter()
                .fold((0.0, 0.0), |(a, b), (_, team, rating)| match team {
                    MatchTeam::A => (a + rating, b),
                    MatchTeam::B => (a, b + rating),
                });

        let (expected_a, expected_b) = Self::team_expectations(team_a_sum, team_b_sum);
        let outcome = score.outcome();
        let (actual_a, actual_b) = outcome.points();

        let rating_changes = rated
            .into_iter()
            .map(|(participant, team, old_rating)| {
                let (actual, expected) = match team {
                    MatchTeam::A => (actual_a, expected_a),
                    MatchTeam::B => (actual_b, expected_b),
                };
                let delta = self.config.k_factor * (actual - expected)
                    + self.config.goal_bonus * f64::from(participant.goals);

                RatingChange {
                    player_id: participant.player_id,
                    team,
                    goals: participant.goals,
                    old_rating,
                    new_rating: old_rating + delta,
                    delta,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            "Rated match {}-{}: sums {:.1} vs {:.1}, expected {:.4}/{:.4}, {} changes",
            score.team_a,
            score.team_b,
            team_a_sum,
            team_b_sum,
            expected_a,
            expected_b,
            rating_changes.len()
        );

        RatingCalculationResult {
            rating_changes,
            team_a_sum,
            team_b_sum,
            expected_a,
            expected_b,
            outcome,
        }
    }

    fn initial_rating(&self) -> f64 {
        self.config.base_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }
}
