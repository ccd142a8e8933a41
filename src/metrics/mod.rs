//! Metrics for balancing and rating runs
//!
//! This module provides Prometheus metrics collection for callers of the
//! engine.

pub mod collector;

pub use collector::{BalanceMetrics, MetricsCollector, MetricsTimer, RatingMetrics};
