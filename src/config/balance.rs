//! Team balancing configuration

use crate::balance::score::{GOALKEEPER_IMBALANCE_WEIGHT, GOALKEEPER_MISSING_PENALTY};
use crate::balance::{DEFAULT_EXACT_THRESHOLD, MAX_EXACT_THRESHOLD};
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Players per team in a regular session
pub const DEFAULT_TEAM_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Players per team
    pub team_size: usize,
    /// Largest pool size still searched exhaustively
    pub exact_threshold: usize,
    /// Score added when a team has no goalkeeper while the pool has some
    pub goalkeeper_missing_penalty: f64,
    /// Score added per goalkeeper of difference between the teams
    pub goalkeeper_imbalance_weight: f64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            goalkeeper_missing_penalty: GOALKEEPER_MISSING_PENALTY,
            goalkeeper_imbalance_weight: GOALKEEPER_IMBALANCE_WEIGHT,
        }
    }
}

impl BalanceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.exact_threshold > MAX_EXACT_THRESHOLD {
            return Err(EngineError::ConfigurationError {
                message: format!(
                    "Exact threshold {} exceeds the maximum of {}",
                    self.exact_threshold, MAX_EXACT_THRESHOLD
                ),
            }
            .into());
        }

        if !self.goalkeeper_missing_penalty.is_finite() || self.goalkeeper_missing_penalty < 0.0 {
            return Err(EngineError::ConfigurationError {
                message: "Goalkeeper missing penalty must be a non-negative number".to_string(),
            }
            .into());
        }

        if !self.goalkeeper_imbalance_weight.is_finite() || self.goalkeeper_imbalance_weight < 0.0
        {
            return Err(EngineError::ConfigurationError {
                message: "Goalkeeper imbalance weight must be a non-negative number".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
