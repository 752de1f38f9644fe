use core_sim::VenueQuotes;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StrategyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbitrageOpportunity {
    pub spread: Decimal,
    pub expected_profit: Decimal,
}

/// Flags cross-venue spreads wider than `threshold` and books a fixed share
/// of the spread as profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArbitrageDetector {
    threshold: Decimal,
    capture_rate: Decimal,
}

impl ArbitrageDetector {
    pub fn new(threshold: Decimal, capture_rate: Decimal) -> Result<Self, StrategyError> {
        if threshold < Decimal::ZERO {
            return Err(StrategyError::NegativeArbitrageThreshold(threshold));
        }
        if capture_rate < Decimal::ZERO || capture_rate > Decimal::ONE {
            return Err(StrategyError::CaptureRateOutOfRange(capture_rate));
        }

        Ok(Self {
            threshold,
            capture_rate,
        })
    }

    /// `Some` only when `|spread|` is strictly above the threshold.
    pub fn detect(&self, quotes: VenueQuotes) -> Option<ArbitrageOpportunity> {
        let spread = quotes.spread();
        if spread.abs() <= self.threshold {
            return None;
        }

        Some(ArbitrageOpportunity {
            spread,
            expected_profit: spread.abs() * self.capture_rate,
        })
    }
}

impl Default for ArbitrageDetector {
    fn default() -> Self {
        Self {
            threshold: Decimal::new(50, 0),
            capture_rate: Decimal::new(1, 2),
        }
    }
}
