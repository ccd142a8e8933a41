//! Exhaustive balancing for small pools
//!
//! Every `team_size` combination of the pool is tried as team A. Team B is
//! the strongest `team_size` players left over and the rest sit on the
//! bench. Cost is `O(C(n, team_size) * n log n)`, which is why the balancer
//! only uses this strategy below its threshold.

use crate::balance::score::{GoalkeeperWeights, SplitScore};
use crate::balance::strategy::{assemble_split, BalancingStrategy};
use crate::types::{Candidate, SplitKind, TeamSplit};
use crate::utils::{goalkeeper_count, sorted_by_rating_desc};
use itertools::Itertools;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ExactStrategy {
    weights: GoalkeeperWeights,
}

impl ExactStrategy {
    pub fn new(weights: GoalkeeperWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &GoalkeeperWeights {
        &self.weights
    }
}

impl BalancingStrategy for ExactStrategy {
    fn kind(&self) -> SplitKind {
        SplitKind::Exact
    }

    fn split(&self, pool: &[Candidate], team_size: usize) -> TeamSplit {
        let pool_keepers = goalkeeper_count(pool);
        let mut best: Option<(SplitScore, Vec<usize>, Vec<usize>)> = None;
        let mut evaluated = 0usize;

        for team_a in (0..pool.len()).combinations(team_size) {
            let mut remaining: Vec<usize> =
                (0..pool.len()).filter(|i| !team_a.contains(i)).collect();
            sorted_by_rating_desc(pool, &mut remaining);

            let team_b = &remaining[..team_size.min(remaining.len())];
            let score = SplitScore::evaluate(pool, &team_a, team_b, pool_keepers, &self.weights);
            evaluated += 1;

            let improves = best
                .as_ref()
                .map_or(true, |(best_score, _, _)| score.is_better_than(best_score));
            if improves {
                best = Some((score, team_a, remaining));
            }
        }

        let Some((score, team_a, remaining)) = best else {
            // Unreachable for pools larger than one team; bench everyone
            let everyone: Vec<usize> = (0..pool.len()).collect();
            return assemble_split(pool, &[], &[], &everyone, SplitKind::Exact);
        };

        debug!(
            "Exact search evaluated {} splits, best gap {:.1} with goalkeeper penalty {:.1}",
            evaluated, score.rating_gap, score.goalkeeper_penalty
        );

        let (team_b, bench) = remaining.split_at(team_size.min(remaining.len()));
        assemble_split(pool, &team_a, team_b, bench, SplitKind::Exact)
    }
}
