use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("moving average span must be positive")]
    ZeroSpan,
    #[error("fast span {fast} must be shorter than slow span {slow}")]
    FastSpanNotShorter { fast: usize, slow: usize },
    #[error("arbitrage threshold must be non-negative, got {0}")]
    NegativeArbitrageThreshold(Decimal),
    #[error("capture rate must be within [0, 1], got {0}")]
    CaptureRateOutOfRange(Decimal),
}
