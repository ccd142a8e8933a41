//! Common types shared by the team balancer and the rating updater

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for players (league database primary key)
pub type PlayerId = u64;

/// Rating assumed for any player without a stored rating
pub const DEFAULT_RATING: f64 = 1000.0;

/// A player available for a session, as seen by the team balancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: PlayerId,
    pub rating: f64,
    pub is_goalkeeper: bool,
}

impl Candidate {
    pub fn new(id: PlayerId, rating: f64, is_goalkeeper: bool) -> Self {
        Self {
            id,
            rating,
            is_goalkeeper,
        }
    }

    /// Build a candidate from a ratings map, falling back to `base_rating`
    /// when the player has never been rated
    pub fn from_ratings(
        id: PlayerId,
        is_goalkeeper: bool,
        ratings: &HashMap<PlayerId, f64>,
        base_rating: f64,
    ) -> Self {
        Self::new(
            id,
            crate::utils::rating_or_default(ratings, id, base_rating),
            is_goalkeeper,
        )
    }
}

/// How a [`TeamSplit`] was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitKind {
    /// Exhaustive search over every team A combination
    Exact,
    /// Single greedy pass over the rating-sorted pool
    Greedy,
    /// Team size was zero, everyone is on the bench
    NoTeams,
    /// Not enough players for two teams, everyone is on team A
    InsufficientPlayers,
}

impl SplitKind {
    /// Whether the split is a degenerate one the caller should surface
    pub fn is_degenerate(&self) -> bool {
        matches!(self, SplitKind::NoTeams | SplitKind::InsufficientPlayers)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SplitKind::Exact => "exact",
            SplitKind::Greedy => "greedy",
            SplitKind::NoTeams => "no_teams",
            SplitKind::InsufficientPlayers => "insufficient_players",
        }
    }
}

impl std::fmt::Display for SplitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Partition of a candidate pool into two teams and a bench
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSplit {
    pub team_a: Vec<PlayerId>,
    pub team_b: Vec<PlayerId>,
    pub bench: Vec<PlayerId>,
    /// Raw `|sum(A) - sum(B)|` of the chosen split, without any penalty
    pub balance_score: f64,
    pub kind: SplitKind,
}

/// Team a participant played for in a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchTeam {
    A,
    B,
}

impl std::fmt::Display for MatchTeam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchTeam::A => write!(f, "A"),
            MatchTeam::B => write!(f, "B"),
        }
    }
}

/// A player's line in a finished match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchParticipant {
    pub player_id: PlayerId,
    /// `None` for players who were in the match record but not on a team
    #[serde(default)]
    pub team: Option<MatchTeam>,
    #[serde(default)]
    pub goals: u32,
}

impl MatchParticipant {
    pub fn new(player_id: PlayerId, team: Option<MatchTeam>, goals: u32) -> Self {
        Self {
            player_id,
            team,
            goals,
        }
    }
}

/// Final score of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub team_a: u32,
    pub team_b: u32,
}

impl MatchScore {
    pub fn new(team_a: u32, team_b: u32) -> Self {
        Self { team_a, team_b }
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.team_a.cmp(&self.team_b) {
            std::cmp::Ordering::Greater => MatchOutcome::TeamAWin,
            std::cmp::Ordering::Less => MatchOutcome::TeamBWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

/// Result of a match from the teams' point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    TeamAWin,
    TeamBWin,
    Draw,
}

impl MatchOutcome {
    /// Actual scores `(team A, team B)` used by the Elo update
    pub fn points(&self) -> (f64, f64) {
        match self {
            MatchOutcome::TeamAWin => (1.0, 0.0),
            MatchOutcome::TeamBWin => (0.0, 1.0),
            MatchOutcome::Draw => (0.5, 0.5),
        }
    }
}

/// Rating change for a single participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub team: MatchTeam,
    pub goals: u32,
    pub old_rating: f64,
    pub new_rating: f64,
    pub delta: f64,
}
