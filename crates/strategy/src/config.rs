use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arbitrage::ArbitrageDetector;
use crate::error::StrategyError;
use crate::signal::EmaCrossover;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub fast_span: usize,
    pub slow_span: usize,
    pub arbitrage_threshold: Decimal,
    pub capture_rate: Decimal,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            fast_span: 9,
            slow_span: 21,
            arbitrage_threshold: Decimal::new(50, 0),
            capture_rate: Decimal::new(1, 2),
        }
    }
}

impl StrategyConfig {
    pub fn crossover(&self) -> Result<EmaCrossover, StrategyError> {
        EmaCrossover::new(self.fast_span, self.slow_span)
    }

    pub fn arbitrage(&self) -> Result<ArbitrageDetector, StrategyError> {
        ArbitrageDetector::new(self.arbitrage_threshold, self.capture_rate)
    }
}
