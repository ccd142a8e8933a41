//! Rating system configuration

use crate::error::{EngineError, Result};
use crate::rating::elo::{GOAL_BONUS, K_FACTOR};
use crate::types::DEFAULT_RATING;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Rating given to players who have never been rated
    pub base_rating: f64,
    pub k_factor: f64,
    /// Rating points awarded per goal scored
    pub goal_bonus: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            base_rating: DEFAULT_RATING,
            k_factor: K_FACTOR,
            goal_bonus: GOAL_BONUS,
        }
    }
}

impl RatingConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.base_rating.is_finite() {
            return Err(EngineError::ConfigurationError {
                message: "Base rating must be finite".to_string(),
            }
            .into());
        }

        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(EngineError::ConfigurationError {
                message: "K factor must be positive".to_string(),
            }
            .into());
        }

        if !self.goal_bonus.is_finite() || self.goal_bonus < 0.0 {
            return Err(EngineError::ConfigurationError {
                message: "Goal bonus must be non-negative".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
