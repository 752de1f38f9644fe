use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimConfigError {
    #[error("start price must be non-negative, got {0}")]
    NegativeStartPrice(Decimal),
    #[error("max step must be non-negative, got {0}")]
    NegativeMaxStep(Decimal),
    #[error("venue band is inverted: low {low} exceeds high {high}")]
    InvertedVenueBand { low: Decimal, high: Decimal },
    #[error("outcome min factor must be non-negative, got {0}")]
    NegativeOutcomeFactor(Decimal),
    #[error("outcome band is inverted: min {min} exceeds max {max}")]
    InvertedOutcomeBand { min: Decimal, max: Decimal },
}
