//! Team balancer: degenerate-case handling and strategy selection

use crate::balance::exact::ExactStrategy;
use crate::balance::greedy::GreedyStrategy;
use crate::balance::score::GoalkeeperWeights;
use crate::balance::strategy::BalancingStrategy;
use crate::config::BalanceConfig;
use crate::types::{Candidate, PlayerId, SplitKind, TeamSplit, DEFAULT_RATING};
use crate::utils::rating_sum;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Largest pool searched exhaustively by default
pub const DEFAULT_EXACT_THRESHOLD: usize = 14;

/// Upper bound accepted for the exact threshold; `C(20, 10)` is ~185k splits
pub const MAX_EXACT_THRESHOLD: usize = 20;

/// Partitions a pool of candidates into two teams and a bench
#[derive(Debug)]
pub struct TeamBalancer {
    exact: Box<dyn BalancingStrategy>,
    heuristic: Box<dyn BalancingStrategy>,
    exact_threshold: usize,
    base_rating: f64,
}

impl Default for TeamBalancer {
    fn default() -> Self {
        Self::new(&BalanceConfig::default(), DEFAULT_RATING)
    }
}

impl TeamBalancer {
    /// Create a balancer using the exact and greedy strategies
    pub fn new(config: &BalanceConfig, base_rating: f64) -> Self {
        let weights = GoalkeeperWeights {
            missing_penalty: config.goalkeeper_missing_penalty,
            imbalance_weight: config.goalkeeper_imbalance_weight,
        };

        Self::with_strategies(
            Box::new(ExactStrategy::new(weights)),
            Box::new(GreedyStrategy),
            config.exact_threshold,
            base_rating,
        )
    }

    /// Create a balancer with custom strategies on either side of the threshold
    pub fn with_strategies(
        exact: Box<dyn BalancingStrategy>,
        heuristic: Box<dyn BalancingStrategy>,
        exact_threshold: usize,
        base_rating: f64,
    ) -> Self {
        Self {
            exact,
            heuristic,
            exact_threshold,
            base_rating,
        }
    }

    pub fn exact_threshold(&self) -> usize {
        self.exact_threshold
    }

    pub fn base_rating(&self) -> f64 {
        self.base_rating
    }

    /// Strategy used for a pool of `pool_size` candidates
    pub fn strategy_for(&self, pool_size: usize) -> &dyn BalancingStrategy {
        if pool_size <= self.exact_threshold {
            self.exact.as_ref()
        } else {
            self.heuristic.as_ref()
        }
    }

    /// Partition `pool` into team A, team B and bench.
    ///
    /// Never fails: a zero team size benches everyone and a pool no larger
    /// than one team puts everyone on team A. Both cases are reported through
    /// [`TeamSplit::kind`].
    pub fn balance(&self, pool: &[Candidate], team_size: usize) -> TeamSplit {
        if pool.iter().any(|c| !c.rating.is_finite()) {
            warn!("Balancing a pool that contains non-finite ratings");
        }

        if team_size == 0 {
            debug!("Team size is zero, benching all {} players", pool.len());
            return TeamSplit {
                team_a: Vec::new(),
                team_b: Vec::new(),
                bench: pool.iter().map(|c| c.id).collect(),
                balance_score: 0.0,
                kind: SplitKind::NoTeams,
            };
        }

        if pool.len() <= team_size {
            info!(
                "Not enough players for two teams ({} available, team size {}), all go to team A",
                pool.len(),
                team_size
            );
            return TeamSplit {
                team_a: pool.iter().map(|c| c.id).collect(),
                team_b: Vec::new(),
                bench: Vec::new(),
                balance_score: rating_sum(pool).abs(),
                kind: SplitKind::InsufficientPlayers,
            };
        }

        let strategy = self.strategy_for(pool.len());
        debug!(
            "Balancing {} players into teams of {} using {} strategy",
            pool.len(),
            team_size,
            strategy.kind()
        );

        let split = strategy.split(pool, team_size);
        debug!(
            "Balanced teams: A={:?} B={:?} bench={:?} gap={:.1}",
            split.team_a, split.team_b, split.bench, split.balance_score
        );
        split
    }

    /// Balance a roster of `(player, is_goalkeeper)` entries against a ratings
    /// map, using the base rating for players that have none
    pub fn balance_roster(
        &self,
        roster: &[(PlayerId, bool)],
        ratings: &HashMap<PlayerId, f64>,
        team_size: usize,
    ) -> TeamSplit {
        let pool: Vec<Candidate> = roster
            .iter()
            .map(|&(id, is_goalkeeper)| {
                Candidate::from_ratings(id, is_goalkeeper, ratings, self.base_rating)
            })
            .collect();
        self.balance(&pool, team_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_pool(size: u64) -> Vec<Candidate> {
        (1..=size).map(|id| Candidate::new(id, 1000.0, false)).collect()
    }

    #[test]
    fn test_zero_team_size_benches_everyone() {
        let balancer = TeamBalancer::default();
        let split = balancer.balance(&equal_pool(10), 0);

        assert!(split.team_a.is_empty());
        assert!(split.team_b.is_empty());
        assert_eq!(split.bench, (1..=10).collect::<Vec<_>>());
        assert_eq!(split.kind, SplitKind::NoTeams);
        assert!(split.kind.is_degenerate());
    }

    #[test]
    fn test_insufficient_players_all_on_team_a() {
        let balancer = TeamBalancer::default();
        let split = balancer.balance(&equal_pool(5), 5);

        assert_eq!(split.team_a, vec![1, 2, 3, 4, 5]);
        assert!(split.team_b.is_empty());
        assert!(split.bench.is_empty());
        assert_eq!(split.kind, SplitKind::InsufficientPlayers);
        assert_eq!(split.balance_score, 5000.0);
    }

    #[test]
    fn test_empty_pool() {
        let balancer = TeamBalancer::default();
        let split = balancer.balance(&[], 5);

        assert!(split.team_a.is_empty());
        assert_eq!(split.kind, SplitKind::InsufficientPlayers);
    }

    #[test]
    fn test_strategy_selection_by_threshold() {
        let balancer = TeamBalancer::default();
        assert_eq!(balancer.strategy_for(10).kind(), SplitKind::Exact);
        assert_eq!(balancer.strategy_for(14).kind(), SplitKind::Exact);
        assert_eq!(balancer.strategy_for(15).kind(), SplitKind::Greedy);

        assert_eq!(balancer.balance(&equal_pool(14), 5).kind, SplitKind::Exact);
        assert_eq!(balancer.balance(&equal_pool(20), 5).kind, SplitKind::Greedy);
    }

    #[test]
    fn test_custom_threshold() {
        let config = BalanceConfig {
            exact_threshold: 6,
            ..BalanceConfig::default()
        };
        let balancer = TeamBalancer::new(&config, DEFAULT_RATING);
        assert_eq!(balancer.balance(&equal_pool(8), 3).kind, SplitKind::Greedy);
    }

    #[test]
    fn test_balance_roster_uses_base_rating() {
        let balancer = TeamBalancer::default();
        let roster: Vec<(PlayerId, bool)> = (1..=4).map(|id| (id, false)).collect();
        let ratings = HashMap::from([(1, 1200.0), (2, 800.0)]);

        let split = balancer.balance_roster(&roster, &ratings, 2);

        // Unrated players 3 and 4 count as 1000 each
        assert_eq!(split.balance_score, 0.0);
        assert_eq!(split.team_a.len(), 2);
        assert_eq!(split.team_b.len(), 2);
    }

    #[test]
    fn test_large_pool_partition() {
        let pool: Vec<Candidate> = (1..=20)
            .map(|id| Candidate::new(id, 1000.0 + (id % 5) as f64 * 50.0, false))
            .collect();
        let split = TeamBalancer::default().balance(&pool, 5);

        assert_eq!(split.team_a.len(), 5);
        assert_eq!(split.team_b.len(), 5);
        assert_eq!(split.bench.len(), 10);
    }
}
