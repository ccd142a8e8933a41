//! JSON request and response shapes for the command-line driver
//!
//! The engine trusts its inputs; this is the layer that rejects duplicate
//! ids and malformed numbers before they reach it.

use crate::error::{EngineError, Result};
use crate::rating::RatingCalculationResult;
use crate::types::{Candidate, MatchParticipant, MatchScore, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One available player in a balancing request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    #[serde(default)]
    pub is_goalkeeper: bool,
    /// Current rating; unrated players take the base rating
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Request to balance a session's available players
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    pub players: Vec<RosterEntry>,
    /// Overrides the configured team size
    #[serde(default)]
    pub team_size: Option<usize>,
}

impl BalanceRequest {
    /// Deserialize and validate a balance request from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let request: Self =
            serde_json::from_slice(bytes).map_err(|e| EngineError::InvalidInput {
                reason: format!("Failed to deserialize balance request: {}", e),
            })?;

        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_unique(self.players.iter().map(|p| p.id))?;

        if let Some(entry) = self
            .players
            .iter()
            .find(|p| p.rating.is_some_and(|r| !r.is_finite()))
        {
            return Err(EngineError::InvalidInput {
                reason: format!("Player {} has a non-finite rating", entry.id),
            }
            .into());
        }

        Ok(())
    }

    /// Candidate pool, using `base_rating` for unrated players
    pub fn candidates(&self, base_rating: f64) -> Vec<Candidate> {
        self.players
            .iter()
            .map(|p| Candidate::new(p.id, p.rating.unwrap_or(base_rating), p.is_goalkeeper))
            .collect()
    }
}

/// Request to rate a finished match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateRequest {
    /// Current ratings; players missing here are treated as unrated
    #[serde(default)]
    pub ratings: HashMap<PlayerId, f64>,
    pub participants: Vec<MatchParticipant>,
    pub score: MatchScore,
}

impl RateRequest {
    /// Deserialize and validate a rate request from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let request: Self =
            serde_json::from_slice(bytes).map_err(|e| EngineError::InvalidInput {
                reason: format!("Failed to deserialize rate request: {}", e),
            })?;

        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<()> {
        if self.participants.is_empty() {
            return Err(EngineError::InvalidInput {
                reason: "Match has no participants".to_string(),
            }
            .into());
        }

        ensure_unique(self.participants.iter().map(|p| p.player_id))?;

        if let Some((id, _)) = self.ratings.iter().find(|(_, r)| !r.is_finite()) {
            return Err(EngineError::InvalidInput {
                reason: format!("Player {} has a non-finite rating", id),
            }
            .into());
        }

        Ok(())
    }
}

/// Output of the `rate` command
#[derive(Debug, Clone, Serialize)]
pub struct RateResponse {
    pub result: RatingCalculationResult,
    /// Full ratings map after the match
    pub ratings: HashMap<PlayerId, f64>,
}

fn ensure_unique(ids: impl Iterator<Item = PlayerId>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(EngineError::InvalidInput {
                reason: format!("Duplicate player id {}", id),
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchTeam;

    #[test]
    fn test_balance_request_parsing() {
        let json = br#"{
            "players": [
                {"id": 1, "is_goalkeeper": true, "rating": 1100.0},
                {"id": 2},
                {"id": 3, "rating": 950.5}
            ],
            "team_size": 1
        }"#;

        let request = BalanceRequest::from_bytes(json).unwrap();
        assert_eq!(request.team_size, Some(1));

        let pool = request.candidates(1000.0);
        assert_eq!(pool[0], Candidate::new(1, 1100.0, true));
        assert_eq!(pool[1], Candidate::new(2, 1000.0, false));
        assert_eq!(pool[2].rating, 950.5);
    }

    #[test]
    fn test_balance_request_duplicate_ids() {
        let json = br#"{"players": [{"id": 1}, {"id": 1}]}"#;
        let err = BalanceRequest::from_bytes(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate player id 1"));
    }

    #[test]
    fn test_balance_request_malformed() {
        assert!(BalanceRequest::from_bytes(b"{\"players\": 3}").is_err());
    }

    #[test]
    fn test_rate_request_parsing() {
        let json = br#"{
            "ratings": {"1": 1010.0, "2": 990.0},
            "participants": [
                {"player_id": 1, "team": "A", "goals": 2},
                {"player_id": 2, "team": "B"},
                {"player_id": 3}
            ],
            "score": {"team_a": 2, "team_b": 0}
        }"#;

        let request = RateRequest::from_bytes(json).unwrap();
        assert_eq!(request.ratings[&1], 1010.0);
        assert_eq!(request.participants[0].team, Some(MatchTeam::A));
        assert_eq!(request.participants[0].goals, 2);
        assert_eq!(request.participants[1].goals, 0);
        assert_eq!(request.participants[2].team, None);
        assert_eq!(request.score, MatchScore::new(2, 0));
    }

    #[test]
    fn test_rate_request_rejects_empty_and_duplicates() {
        let empty = br#"{"participants": [], "score": {"team_a": 0, "team_b": 0}}"#;
        assert!(RateRequest::from_bytes(empty).is_err());

        let duplicate = br#"{
            "participants": [{"player_id": 4, "team": "A"}, {"player_id": 4, "team": "B"}],
            "score": {"team_a": 1, "team_b": 1}
        }"#;
        assert!(RateRequest::from_bytes(duplicate).is_err());
    }
}
