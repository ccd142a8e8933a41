//! Greedy balancing for large pools
//!
//! Seeds one goalkeeper per team, then hands each remaining player, from
//! strongest to weakest, to whichever open team currently has the lower
//! rating sum. Runs in `O(n log n)` and gives no optimality guarantee.

use crate::balance::strategy::{assemble_split, BalancingStrategy};
use crate::types::{Candidate, SplitKind, TeamSplit};
use crate::utils::sorted_by_rating_desc;

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl BalancingStrategy for GreedyStrategy {
    fn kind(&self) -> SplitKind {
        SplitKind::Greedy
    }

    fn split(&self, pool: &[Candidate], team_size: usize) -> TeamSplit {
        let mut order: Vec<usize> = (0..pool.len()).collect();
        sorted_by_rating_desc(pool, &mut order);

        let mut team_a = Vec::with_capacity(team_size);
        let mut team_b = Vec::with_capacity(team_size);
        let mut bench = Vec::new();
        let mut sum_a = 0.0;
        let mut sum_b = 0.0;

        // Strongest keeper to A, next one to B
        let seeds: Vec<usize> = order
            .iter()
            .copied()
            .filter(|&i| pool[i].is_goalkeeper)
            .take(2)
            .collect();
        if let Some(&keeper) = seeds.first() {
            team_a.push(keeper);
            sum_a += pool[keeper].rating;
        }
        if let Some(&keeper) = seeds.get(1) {
            team_b.push(keeper);
            sum_b += pool[keeper].rating;
        }

        for i in order.into_iter().filter(|i| !seeds.contains(i)) {
            let a_open = team_a.len() < team_size;
            let b_open = team_b.len() < team_size;

            match (a_open, b_open) {
                (true, true) if sum_a <= sum_b => {
                    team_a.push(i);
                    sum_a += pool[i].rating;
                }
                (_, true) => {
                    team_b.push(i);
                    sum_b += pool[i].rating;
                }
                (true, false) => {
                    team_a.push(i);
                    sum_a += pool[i].rating;
                }
                (false, false) => bench.push(i),
            }
        }

        assemble_split(pool, &team_a, &team_b, &bench, SplitKind::Greedy)
    }
}
