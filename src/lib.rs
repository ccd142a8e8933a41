//! Calcio Engine - team balancing and skill ratings for league sessions
//!
//! This crate provides the algorithmic core of a five-a-side league
//! backend: splitting a session's available players into two balanced
//! teams and a bench, and updating player ratings after a match with a
//! team Elo model plus a per-goal bonus.

pub mod balance;
pub mod config;
pub mod error;
pub mod metrics;
pub mod rating;
pub mod requests;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{EngineError, Result};
pub use types::*;

// Re-export key components
pub use balance::{BalancingStrategy, TeamBalancer};
pub use rating::{EloRatingCalculator, RatingCalculator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
