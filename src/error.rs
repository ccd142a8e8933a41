//! Error types for the engine and its command-line driver
//!
//! The balancing and rating functions themselves never fail; these errors
//! cover configuration, input decoding and metrics registration.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific engine scenarios
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Metrics error: {message}")]
    MetricsError { message: String },
}
