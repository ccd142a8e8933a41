//! Post-match rating updates
//!
//! This module provides the rating calculator interface and a team Elo
//! implementation, built on the skillratings crate, that adds a bonus per
//! goal scored.

pub mod calculator;
pub mod elo;

// Re-export commonly used types
pub use calculator::{apply_changes, RatingCalculationResult, RatingCalculator};
pub use elo::{EloRatingCalculator, GOAL_BONUS, K_FACTOR};
