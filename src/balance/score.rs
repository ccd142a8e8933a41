//! Scoring of candidate splits for the exact strategy

use crate::types::Candidate;
use crate::utils::rating_difference;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Score added when either team has no goalkeeper while the pool has some
pub const GOALKEEPER_MISSING_PENALTY: f64 = 1000.0;

/// Score added per goalkeeper of difference between the two teams
pub const GOALKEEPER_IMBALANCE_WEIGHT: f64 = 50.0;

/// Weights used to fold goalkeeper distribution into a split's score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalkeeperWeights {
    pub missing_penalty: f64,
    pub imbalance_weight: f64,
}

impl Default for GoalkeeperWeights {
    fn default() -> Self {
        Self {
            missing_penalty: GOALKEEPER_MISSING_PENALTY,
            imbalance_weight: GOALKEEPER_IMBALANCE_WEIGHT,
        }
    }
}

impl GoalkeeperWeights {
    /// Penalty for a split with `keepers_a` and `keepers_b` goalkeepers.
    ///
    /// Zero when the pool has no goalkeepers or consists only of
    /// goalkeepers, in which case the split is judged on ratings alone.
    pub fn penalty(
        &self,
        keepers_a: usize,
        keepers_b: usize,
        pool_keepers: usize,
        pool_size: usize,
    ) -> f64 {
        if pool_keepers == 0 || pool_keepers == pool_size {
            0.0
        } else if keepers_a == 0 || keepers_b == 0 {
            self.missing_penalty
        } else {
            self.imbalance_weight * keepers_a.abs_diff(keepers_b) as f64
        }
    }
}

/// Score of one team A / team B split; lower is better
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitScore {
    pub rating_gap: f64,
    pub goalkeeper_penalty: f64,
    pub goalkeeper_imbalance: usize,
}

impl SplitScore {
    /// Score the split given by indices into `pool`
    pub fn evaluate(
        pool: &[Candidate],
        team_a: &[usize],
        team_b: &[usize],
        pool_keepers: usize,
        weights: &GoalkeeperWeights,
    ) -> Self {
        let sum_a: f64 = team_a.iter().map(|&i| pool[i].rating).sum();
        let sum_b: f64 = team_b.iter().map(|&i| pool[i].rating).sum();
        let keepers_a = team_a.iter().filter(|&&i| pool[i].is_goalkeeper).count();
        let keepers_b = team_b.iter().filter(|&&i| pool[i].is_goalkeeper).count();

        Self {
            rating_gap: rating_difference(sum_a, sum_b),
            goalkeeper_penalty: weights.penalty(keepers_a, keepers_b, pool_keepers, pool.len()),
            goalkeeper_imbalance: keepers_a.abs_diff(keepers_b),
        }
    }

    /// Rating gap plus goalkeeper penalty
    pub fn total(&self) -> f64 {
        self.rating_gap + self.goalkeeper_penalty
    }

    /// Order by penalized gap first, then by goalkeeper imbalance
    pub fn compare(&self, other: &Self) -> Ordering {
        self.total()
            .total_cmp(&other.total())
            .then(self.goalkeeper_imbalance.cmp(&other.goalkeeper_imbalance))
    }

    pub fn is_better_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Candidate> {
        vec![
            Candidate::new(1, 1000.0, true),
            Candidate::new(2, 1000.0, true),
            Candidate::new(3, 1100.0, false),
            Candidate::new(4, 900.0, false),
        ]
    }

    #[test]
    fn test_penalty_without_goalkeepers() {
        let weights = GoalkeeperWeights::default();
        assert_eq!(weights.penalty(0, 0, 0, 10), 0.0);
    }

    #[test]
    fn test_penalty_for_missing_goalkeeper() {
        let weights = GoalkeeperWeights::default();
        assert_eq!(weights.penalty(2, 0, 2, 10), 1000.0);
        assert_eq!(weights.penalty(0, 0, 1, 10), 1000.0);
    }

    #[test]
    fn test_penalty_for_imbalance() {
        let weights = GoalkeeperWeights::default();
        assert_eq!(weights.penalty(1, 1, 2, 10), 0.0);
        assert_eq!(weights.penalty(3, 1, 4, 10), 100.0);
    }

    #[test]
    fn test_all_goalkeeper_pool_is_not_penalized() {
        let weights = GoalkeeperWeights::default();
        assert_eq!(weights.penalty(5, 4, 9, 9), 0.0);
    }

    #[test]
    fn test_evaluate_split() {
        let pool = pool();
        let weights = GoalkeeperWeights::default();

        let mixed = SplitScore::evaluate(&pool, &[0, 2], &[1, 3], 2, &weights);
        assert_eq!(mixed.rating_gap, 200.0);
        assert_eq!(mixed.goalkeeper_penalty, 0.0);
        assert_eq!(mixed.goalkeeper_imbalance, 0);

        let stacked = SplitScore::evaluate(&pool, &[0, 1], &[2, 3], 2, &weights);
        assert_eq!(stacked.rating_gap, 0.0);
        assert_eq!(stacked.goalkeeper_penalty, 1000.0);
        assert!(mixed.is_better_than(&stacked));
    }

    #[test]
    fn test_ties_prefer_lower_goalkeeper_imbalance() {
        let balanced = SplitScore {
            rating_gap: 100.0,
            goalkeeper_penalty: 0.0,
            goalkeeper_imbalance: 0,
        };
        let skewed = SplitScore {
            rating_gap: 50.0,
            goalkeeper_penalty: 50.0,
            goalkeeper_imbalance: 1,
        };

        assert!(balanced.is_better_than(&skewed));
        assert!(!skewed.is_better_than(&balanced));
        assert!(!balanced.is_better_than(&balanced));
    }
}
