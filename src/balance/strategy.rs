//! Balancing strategy trait
//!
//! A strategy only handles the regular case: a non-zero team size and a
//! pool strictly larger than one team. Degenerate pools are resolved by
//! [`TeamBalancer`](crate::balance::TeamBalancer) before a strategy runs.

use crate::types::{Candidate, SplitKind, TeamSplit};
use crate::utils::rating_difference;

/// Trait for team balancing algorithms
pub trait BalancingStrategy: Send + Sync + std::fmt::Debug {
    /// Kind reported on the splits this strategy produces
    fn kind(&self) -> SplitKind;

    /// Partition `pool` into team A, team B and bench.
    ///
    /// Requires `team_size > 0` and `pool.len() > team_size`.
    fn split(&self, pool: &[Candidate], team_size: usize) -> TeamSplit;
}

/// Build a [`TeamSplit`] from index lists into `pool`
pub(crate) fn assemble_split(
    pool: &[Candidate],
    team_a: &[usize],
    team_b: &[usize],
    bench: &[usize],
    kind: SplitKind,
) -> TeamSplit {
    let sum_a: f64 = team_a.iter().map(|&i| pool[i].rating).sum();
    let sum_b: f64 = team_b.iter().map(|&i| pool[i].rating).sum();
    let ids = |indices: &[usize]| indices.iter().map(|&i| pool[i].id).collect::<Vec<_>>();

    TeamSplit {
        team_a: ids(team_a),
        team_b: ids(team_b),
        bench: ids(bench),
        balance_score: rating_difference(sum_a, sum_b),
        kind,
    }
}
