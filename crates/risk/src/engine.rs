use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::RiskConfig;
use crate::error::RiskError;

/// Per-session capital, sizing and loss-limit state.
///
/// Every realized trade goes through [`RiskEngine::update_pnl`]. Losses
/// accumulate into `daily_loss` and never unwind, so once the loss ceiling is
/// reached [`RiskEngine::can_trade`] stays false for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskEngine {
    initial_capital: Decimal,
    capital: Decimal,
    risk_fraction: Decimal,
    max_daily_loss: Decimal,
    daily_loss: Decimal,
}

impl RiskEngine {
    pub fn new(
        capital: Decimal,
        risk_pct: Decimal,
        max_daily_loss_pct: Decimal,
    ) -> Result<Self, RiskError> {
        Self::from_config(RiskConfig::new(capital, risk_pct, max_daily_loss_pct))
    }

    pub fn from_config(config: RiskConfig) -> Result<Self, RiskError> {
        config.validate()?;

        let max_daily_loss =
            config.initial_capital * (config.max_daily_loss_pct / Decimal::ONE_HUNDRED);

        Ok(Self {
            initial_capital: config.initial_capital,
            capital: config.initial_capital,
            risk_fraction: config.risk_pct / Decimal::ONE_HUNDRED,
            max_daily_loss,
            daily_loss: Decimal::ZERO,
        })
    }

    pub fn can_trade(&self) -> bool {
        self.daily_loss < self.max_daily_loss
    }

    /// Quantity such that a stop-out costs `risk_fraction` of current capital.
    /// A zero stop distance yields zero. A size too large to represent
    /// saturates at `Decimal::MAX` (or `Decimal::MIN` for negative capital).
    pub fn calculate_position_size(&self, entry: Decimal, stop_loss: Decimal) -> Decimal {
        let risk_amount = self.capital.saturating_mul(self.risk_fraction);
        let stop_distance = entry.saturating_sub(stop_loss).abs();

        if stop_distance.is_zero() {
            return Decimal::ZERO;
        }

        risk_amount
            .checked_div(stop_distance)
            .unwrap_or_else(|| saturated(risk_amount))
    }

    /// Applies a realized pnl. Capital and accumulated loss saturate at the
    /// `Decimal` bounds instead of overflowing.
    pub fn update_pnl(&mut self, pnl: Decimal) {
        let was_tradable = self.can_trade();

        self.capital = self.capital.checked_add(pnl).unwrap_or_else(|| {
            warn!(%pnl, capital = %self.capital, "capital overflowed, saturating");
            saturated(pnl)
        });
        if pnl < Decimal::ZERO {
            self.daily_loss = self.daily_loss.saturating_add(pnl.abs());
        }

        debug!(
            %pnl,
            capital = %self.capital,
            daily_loss = %self.daily_loss,
            "applied realized pnl"
        );

        if was_tradable && !self.can_trade() {
            warn!(
                daily_loss = %self.daily_loss,
                max_daily_loss = %self.max_daily_loss,
                "max daily loss reached, trading halted for session"
            );
        }
    }

    pub fn initial_capital(&self) -> Decimal {
        self.initial_capital
    }

    pub fn capital(&self) -> Decimal {
        self.capital
    }

    pub fn risk_fraction(&self) -> Decimal {
        self.risk_fraction
    }

    pub fn max_daily_loss(&self) -> Decimal {
        self.max_daily_loss
    }

    pub fn daily_loss(&self) -> Decimal {
        self.daily_loss
    }

    pub fn remaining_loss_budget(&self) -> Decimal {
        (self.max_daily_loss - self.daily_loss).max(Decimal::ZERO)
    }
}

fn saturated(sign_of: Decimal) -> Decimal {
    if sign_of.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}
