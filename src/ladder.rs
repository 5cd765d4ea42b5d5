//! Geometric price ladder for grid bots
//!
//! Levels start at the lower limit and each one grows the previous level by
//! a fixed percentage until the upper limit is reached. The upper limit is
//! always the final level.

use serde::Serialize;
use tracing::debug;

/// Ordered, strictly increasing price levels between two limits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceLadder {
    levels: Vec<f64>,
}

/// Why a ladder could not be generated
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LadderError {
    #[error("lower limit must be positive, got {0}")]
    NonPositiveLower(f64),

    #[error("lower limit {lower} must be below upper limit {upper}")]
    EmptyRange { lower: f64, upper: f64 },

    #[error("grid step must be positive, got {0}%")]
    NonPositiveStep(f64),

    #[error("ladder exceeds {0} price levels")]
    TooManyLevels(usize),
}

impl PriceLadder {
    /// Generate the ladder from `lower` to `upper`, growing by `step_percent`
    /// of the current level each time. At most `max_levels` levels are built.
    pub fn generate(
        lower: f64,
        upper: f64,
        step_percent: f64,
        max_levels: usize,
    ) -> Result<Self, LadderError> {
        if lower <= 0.0 {
            return Err(LadderError::NonPositiveLower(lower));
        }
        if lower >= upper {
            return Err(LadderError::EmptyRange { lower, upper });
        }
        if step_percent <= 0.0 {
            return Err(LadderError::NonPositiveStep(step_percent));
        }

        let rate = step_percent / 100.0;
        let mut levels = vec![lower];
        let mut current = lower;

        while current < upper {
            if levels.len() >= max_levels {
                return Err(LadderError::TooManyLevels(max_levels));
            }

            let next = current + current * rate;
            if next >= upper {
                levels.push(upper);
                break;
            }
            // Step too small to move the price in f64
            if next <= current {
                return Err(LadderError::TooManyLevels(max_levels));
            }

            levels.push(next);
            current = next;
        }

        debug!(
            "Generated {} price levels from {} to {} at {}%",
            levels.len(),
            lower,
            upper,
            step_percent
        );

        Ok(PriceLadder { levels })
    }

    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Number of price levels, both limits included
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Number of gaps between consecutive levels
    pub fn intervals(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// Even split of `total` across the intervals, `None` for a single-level ladder
    pub fn investment_per_interval(&self, total: f64) -> Option<f64> {
        match self.intervals() {
            0 => None,
            n => Some(total / n as f64),
        }
    }
}
