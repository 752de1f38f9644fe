use core_sim::SimConfigError;
use risk::RiskError;
use strategy::StrategyError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Risk(#[from] RiskError),
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    #[error(transparent)]
    Sim(#[from] SimConfigError),
    #[error("max iterations must be positive")]
    ZeroIterations,
    #[error("price history window must hold at least one price")]
    EmptyHistoryWindow,
    #[error("stop loss must be a percentage in (0, 100), got {0}")]
    StopLossPctOutOfRange(rust_decimal::Decimal),
}
