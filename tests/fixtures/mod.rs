//! Test fixtures for integration testing

#![allow(dead_code)]

use calcio_engine::types::{Candidate, MatchParticipant, MatchTeam, PlayerId, TeamSplit};
use std::collections::{HashMap, HashSet};

/// Builds candidate pools with sequential ids starting at 1
#[derive(Debug, Default)]
pub struct PoolBuilder {
    candidates: Vec<Candidate>,
}

impl PoolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an outfield player
    pub fn player(mut self, rating: f64) -> Self {
        let id = self.next_id();
        self.candidates.push(Candidate::new(id, rating, false));
        self
    }

    /// Add a goalkeeper
    pub fn keeper(mut self, rating: f64) -> Self {
        let id = self.next_id();
        self.candidates.push(Candidate::new(id, rating, true));
        self
    }

    /// Add `count` outfield players with the same rating
    pub fn players(mut self, count: usize, rating: f64) -> Self {
        for _ in 0..count {
            self = self.player(rating);
        }
        self
    }

    pub fn build(self) -> Vec<Candidate> {
        self.candidates
    }

    fn next_id(&self) -> PlayerId {
        self.candidates.len() as PlayerId + 1
    }
}

/// Pool with a spread of ratings and two goalkeepers, typical of a session
pub fn session_pool(size: usize) -> Vec<Candidate> {
    (0..size)
        .map(|i| {
            let id = i as PlayerId + 1;
            let rating = 850.0 + ((i * 37) % 11) as f64 * 30.0;
            Candidate::new(id, rating, i == 2 || i == 7)
        })
        .collect()
}

/// Sum of the ratings of `ids` within `pool`
pub fn team_sum(pool: &[Candidate], ids: &[PlayerId]) -> f64 {
    ids.iter()
        .map(|id| {
            pool.iter()
                .find(|c| c.id == *id)
                .map(|c| c.rating)
                .unwrap_or_else(|| panic!("player {} not in pool", id))
        })
        .sum()
}

/// Number of goalkeepers among `ids` within `pool`
pub fn keeper_count(pool: &[Candidate], ids: &[PlayerId]) -> usize {
    ids.iter()
        .filter(|id| pool.iter().any(|c| c.id == **id && c.is_goalkeeper))
        .count()
}

/// Assert that a split is a partition of the pool with the expected sizes
pub fn assert_partition(pool: &[Candidate], split: &TeamSplit, team_size: usize) {
    let mut seen = HashSet::new();
    for id in split
        .team_a
        .iter()
        .chain(&split.team_b)
        .chain(&split.bench)
    {
        assert!(seen.insert(*id), "player {} assigned twice", id);
    }

    let pool_ids: HashSet<PlayerId> = pool.iter().map(|c| c.id).collect();
    assert_eq!(seen, pool_ids, "split does not cover the pool");

    assert_eq!(split.team_a.len(), team_size.min(pool.len()));
    if pool.len() > team_size {
        assert_eq!(split.team_b.len(), team_size.min(pool.len() - team_size));
    }
}

/// Participants for a match, team A first
pub fn participants(team_a: &[(PlayerId, u32)], team_b: &[(PlayerId, u32)]) -> Vec<MatchParticipant> {
    team_a
        .iter()
        .map(|&(id, goals)| MatchParticipant::new(id, Some(MatchTeam::A), goals))
        .chain(
            team_b
                .iter()
                .map(|&(id, goals)| MatchParticipant::new(id, Some(MatchTeam::B), goals)),
        )
        .collect()
}

/// Ratings map with the same rating for every id
pub fn flat_ratings(ids: impl IntoIterator<Item = PlayerId>, rating: f64) -> HashMap<PlayerId, f64> {
    ids.into_iter().map(|id| (id, rating)).collect()
}
