use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigViolation;

/// Session parameters for a [`crate::RiskEngine`]. Percentages are given as
/// percent values, so `1.0` means 1%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskConfig {
    pub initial_capital: Decimal,
    pub risk_pct: Decimal,
    pub max_daily_loss_pct: Decimal,
}

impl RiskConfig {
    pub fn new(initial_capital: Decimal, risk_pct: Decimal, max_daily_loss_pct: Decimal) -> Self {
        Self {
            initial_capital,
            risk_pct,
            max_daily_loss_pct,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigViolation> {
        if self.initial_capital <= Decimal::ZERO {
            return Err(ConfigViolation::NonPositiveCapital(self.initial_capital));
        }
        if self.risk_pct <= Decimal::ZERO || self.risk_pct > Decimal::ONE_HUNDRED {
            return Err(ConfigViolation::RiskPctOutOfRange(self.risk_pct));
        }
        if self.max_daily_loss_pct < Decimal::ZERO
            || self.max_daily_loss_pct > Decimal::ONE_HUNDRED
        {
            return Err(ConfigViolation::MaxDailyLossPctOutOfRange(
                self.max_daily_loss_pct,
            ));
        }

        Ok(())
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            initial_capital: Decimal::new(10_000, 0),
            risk_pct: Decimal::ONE,
            max_daily_loss_pct: Decimal::new(3, 0),
        }
    }
}
