//! Team balancing for league sessions
//!
//! This module splits the available players of a session into two
//! equal-size teams and a bench, minimizing the rating gap between the
//! teams while spreading goalkeepers. Small pools are searched
//! exhaustively; large pools use a greedy pass.

pub mod balancer;
pub mod exact;
pub mod greedy;
pub mod score;
pub mod strategy;

// Re-export commonly used types
pub use balancer::{TeamBalancer, DEFAULT_EXACT_THRESHOLD, MAX_EXACT_THRESHOLD};
pub use exact::ExactStrategy;
pub use greedy::GreedyStrategy;
pub use score::{GoalkeeperWeights, SplitScore};
pub use strategy::BalancingStrategy;
