//! Metrics collection using Prometheus
//!
//! The engine functions are pure, so metrics are recorded by whoever calls
//! them (the command-line driver here, the league backend in production).

use crate::error::EngineError;
use crate::rating::RatingCalculationResult;
use crate::types::{SplitKind, TeamSplit};
use anyhow::Result;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main metrics collector for the engine
#[derive(Clone)]
pub struct MetricsCollector {
    /// Prometheus registry
    registry: Arc<Registry>,

    /// Team balancing metrics
    balance_metrics: BalanceMetrics,

    /// Rating update metrics
    rating_metrics: RatingMetrics,
}

/// Team balancing metrics
#[derive(Clone)]
pub struct BalanceMetrics {
    /// Balancing runs by split kind
    pub balance_runs_total: IntCounterVec,

    /// Rating gap of the chosen split
    pub balance_gap: Histogram,

    /// Time spent balancing
    pub balance_duration: Histogram,
}

/// Rating update metrics
#[derive(Clone)]
pub struct RatingMetrics {
    /// Matches rated
    pub matches_rated_total: IntCounter,

    /// Individual rating changes applied
    pub rating_changes_total: IntCounter,

    /// Size of individual rating changes
    pub rating_delta: Histogram,

    /// Rating calculation time
    pub rating_calculation_duration: Histogram,
}

impl MetricsCollector {
    /// Create a new metrics collector with default registry
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());
        Self::with_registry(registry)
    }

    /// Create a new metrics collector with custom registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let balance_metrics = BalanceMetrics::new(&registry)?;
        let rating_metrics = RatingMetrics::new(&registry)?;

        Ok(Self {
            registry,
            balance_metrics,
            rating_metrics,
        })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    pub fn balance(&self) -> &BalanceMetrics {
        &self.balance_metrics
    }

    pub fn rating(&self) -> &RatingMetrics {
        &self.rating_metrics
    }

    /// Record a finished balancing run
    pub fn record_balance(&self, split: &TeamSplit, duration: Duration) {
        self.balance_metrics
            .balance_runs_total
            .with_label_values(&[split.kind.as_str()])
            .inc();

        if !split.kind.is_degenerate() {
            self.balance_metrics.balance_gap.observe(split.balance_score);
        }

        self.balance_metrics
            .balance_duration
            .observe(duration.as_secs_f64());
    }

    /// Record a finished rating update
    pub fn record_rating_update(&self, result: &RatingCalculationResult, duration: Duration) {
        self.rating_metrics.matches_rated_total.inc();
        self.rating_metrics
            .rating_changes_total
            .inc_by(result.rating_changes.len() as u64);

        for change in &result.rating_changes {
            self.rating_metrics.rating_delta.observe(change.delta.abs());
        }

        self.rating_metrics
            .rating_calculation_duration
            .observe(duration.as_secs_f64());
    }

    /// Number of balancing runs recorded for a split kind
    pub fn balance_runs(&self, kind: SplitKind) -> u64 {
        self.balance_metrics
            .balance_runs_total
            .with_label_values(&[kind.as_str()])
            .get()
    }

    /// Encode all metrics in the Prometheus text format
    pub fn encode_text(&self) -> Result<String> {
        let metric_families = self.registry.gather();
        let encoder = prometheus::TextEncoder::new();
        encoder
            .encode_to_string(&metric_families)
            .map_err(|e| {
                EngineError::MetricsError {
                    message: format!("Failed to encode metrics: {}", e),
                }
                .into()
            })
    }

    /// Create a timer for measuring operation duration
    pub fn start_timer(&self) -> MetricsTimer {
        MetricsTimer::new()
    }
}

/// Timer for measuring operation durations
pub struct MetricsTimer {
    start: Instant,
}

impl MetricsTimer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get the elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return the duration
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}

impl BalanceMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let balance_runs_total = IntCounterVec::new(
            Opts::new("calcio_balance_runs_total", "Total team balancing runs"),
            &["kind"],
        )?;
        registry.register(Box::new(balance_runs_total.clone()))?;

        let balance_gap = Histogram::with_opts(
            HistogramOpts::new(
                "calcio_balance_gap_rating",
                "Rating gap between the balanced teams",
            )
            .buckets(vec![0.0, 10.0, 25.0, 50.0, 100.0, 200.0, 400.0, 800.0]),
        )?;
        registry.register(Box::new(balance_gap.clone()))?;

        let balance_duration = Histogram::with_opts(
            HistogramOpts::new(
                "calcio_balance_duration_seconds",
                "Team balancing time",
            )
            .buckets(vec![0.0001, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
        )?;
        registry.register(Box::new(balance_duration.clone()))?;

        Ok(Self {
            balance_runs_total,
            balance_gap,
            balance_duration,
        })
    }
}

impl RatingMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let matches_rated_total =
            IntCounter::new("calcio_matches_rated_total", "Total matches rated")?;
        registry.register(Box::new(matches_rated_total.clone()))?;

        let rating_changes_total = IntCounter::new(
            "calcio_rating_changes_total",
            "Total individual rating changes",
        )?;
        registry.register(Box::new(rating_changes_total.clone()))?;

        let rating_delta = Histogram::with_opts(
            HistogramOpts::new("calcio_rating_delta", "Absolute rating change per player")
                .buckets(vec![1.0, 2.5, 5.0, 10.0, 25.0, 50.0, 100.0]),
        )?;
        registry.register(Box::new(rating_delta.clone()))?;

        let rating_calculation_duration = Histogram::with_opts(
            HistogramOpts::new(
                "calcio_rating_calculation_duration_seconds",
                "Rating calculation time",
            )
            .buckets(vec![0.0001, 0.001, 0.005, 0.01, 0.05, 0.1]),
        )?;
        registry.register(Box::new(rating_calculation_duration.clone()))?;

        Ok(Self {
            matches_rated_total,
            rating_changes_total,
            rating_delta,
            rating_calculation_duration,
        })
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new().expect("Failed to create default metrics collector")
    }
}
