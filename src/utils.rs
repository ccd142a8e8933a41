//! Small rating helpers shared by the balancer and the rating updater

use crate::types::{Candidate, PlayerId};
use std::collections::HashMap;

/// Calculate the absolute difference between two ratings
pub fn rating_difference(rating1: f64, rating2: f64) -> f64 {
    (rating1 - rating2).abs()
}

/// Sum of ratings over a set of candidates
pub fn rating_sum<'a, I>(candidates: I) -> f64
where
    I: IntoIterator<Item = &'a Candidate>,
{
    candidates.into_iter().map(|c| c.rating).sum()
}

/// Number of goalkeepers in a set of candidates
pub fn goalkeeper_count<'a, I>(candidates: I) -> usize
where
    I: IntoIterator<Item = &'a Candidate>,
{
    candidates.into_iter().filter(|c| c.is_goalkeeper).count()
}

/// Indices of `candidates` sorted by rating, highest first.
///
/// The sort is stable so equal ratings keep their input order.
pub fn sorted_by_rating_desc(candidates: &[Candidate], indices: &mut [usize]) {
    indices.sort_by(|&a, &b| candidates[b].rating.total_cmp(&candidates[a].rating));
}

/// Look up a rating, falling back to `base_rating` for unknown players
pub fn rating_or_default(ratings: &HashMap<PlayerId, f64>, id: PlayerId, base_rating: f64) -> f64 {
    ratings.get(&id).copied().unwrap_or(base_rating)
}
