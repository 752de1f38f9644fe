use rust_decimal::Decimal;
use serde::Serialize;
use strategy::Signal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeKind {
    Arbitrage,
    Directional,
}

impl TradeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arbitrage => "arbitrage",
            Self::Directional => "directional",
        }
    }
}

/// One realized trade, in the order it was applied to the risk engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeRecord {
    pub iteration: u32,
    pub kind: TradeKind,
    pub pnl: Decimal,
    pub capital_after: Decimal,
}

impl TradeRecord {
    pub fn new(iteration: u32, kind: TradeKind, pnl: Decimal, capital_after: Decimal) -> Self {
        Self {
            iteration,
            kind,
            pnl,
            capital_after,
        }
    }

    pub fn is_win(&self) -> bool {
        self.pnl > Decimal::ZERO
    }
}

/// What a single loop iteration did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Halted,
    Traded(TradeRecord),
    NoTrade(Signal),
}
