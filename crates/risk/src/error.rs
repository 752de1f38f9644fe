use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RiskError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ConfigViolation),
}

/// Which construction input was rejected, with the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("initial capital must be positive, got {0}")]
    NonPositiveCapital(Decimal),
    #[error("risk per trade must be a percentage in (0, 100], got {0}")]
    RiskPctOutOfRange(Decimal),
    #[error("max daily loss must be a percentage in [0, 100], got {0}")]
    MaxDailyLossPctOutOfRange(Decimal),
}

impl From<ConfigViolation> for RiskError {
    fn from(violation: ConfigViolation) -> Self {
        Self::InvalidConfiguration(violation)
    }
}
