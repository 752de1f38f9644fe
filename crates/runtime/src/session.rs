use std::collections::VecDeque;
use std::time::Duration;

use core_sim::{
    OutcomeModel, PriceFeed, SimConfig, SyntheticPriceFeed, SyntheticVenueQuotes,
    UniformOutcome, VenueQuoteSource,
};
use risk::{RiskConfig, RiskEngine};
use rust_decimal::Decimal;
use strategy::{ArbitrageDetector, EmaCrossover, Signal, SignalSource, StrategyConfig};
use tracing::{debug, error, info};

use crate::error::SessionError;
use crate::events::{StepOutcome, TradeKind, TradeRecord};
use crate::report::SessionReport;

const DEFAULT_MAX_ITERATIONS: u32 = 30;
const DEFAULT_HISTORY_LEN: usize = 120;
const DEFAULT_STOP_LOSS_PCT: i64 = 2;
const DEFAULT_DECISION_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_iterations: u32,
    pub history_len: usize,
    /// Stop distance below entry, in percent of the entry price.
    pub stop_loss_pct: Decimal,
    pub decision_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            history_len: DEFAULT_HISTORY_LEN,
            stop_loss_pct: Decimal::from(DEFAULT_STOP_LOSS_PCT),
            decision_interval: Duration::from_millis(DEFAULT_DECISION_INTERVAL_MS),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.max_iterations == 0 {
            return Err(SessionError::ZeroIterations);
        }
        if self.history_len == 0 {
            return Err(SessionError::EmptyHistoryWindow);
        }
        if self.stop_loss_pct <= Decimal::ZERO || self.stop_loss_pct >= Decimal::ONE_HUNDRED {
            return Err(SessionError::StopLossPctOutOfRange(self.stop_loss_pct));
        }

        Ok(())
    }
}

/// External market inputs consumed by a session.
#[derive(Debug, Clone)]
pub struct MarketInputs<F, Q, O> {
    pub feed: F,
    pub venues: Q,
    pub outcome: O,
}

/// Drives one trading session: checks the loss gate, reads the market,
/// takes arbitrage or directional trades, and feeds realized pnl back into
/// the risk engine it owns.
#[derive(Debug)]
pub struct TradingSession<F, Q, O, S> {
    risk: RiskEngine,
    market: MarketInputs<F, Q, O>,
    signals: S,
    arbitrage: ArbitrageDetector,
    config: SessionConfig,
    history: VecDeque<Decimal>,
    trades: Vec<TradeRecord>,
    iterations_run: u32,
    halted: bool,
}

pub type SyntheticSession =
    TradingSession<SyntheticPriceFeed, SyntheticVenueQuotes, UniformOutcome, EmaCrossover>;

impl SyntheticSession {
    pub fn synthetic(
        risk: RiskConfig,
        sim: &SimConfig,
        strategy_config: &StrategyConfig,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        sim.validate()?;
        let risk = RiskEngine::from_config(risk)?;
        let signals = strategy_config.crossover()?;
        let arbitrage = strategy_config.arbitrage()?;
        let market = MarketInputs {
            feed: sim.price_feed(),
            venues: sim.venue_quotes(),
            outcome: sim.outcome(),
        };

        Self::new(risk, market, signals, arbitrage, config)
    }
}

impl<F, Q, O, S> TradingSession<F, Q, O, S>
where
    F: PriceFeed,
    Q: VenueQuoteSource,
    O: OutcomeModel,
    S: SignalSource,
{
    /// Validates `config` and fills the price window from `market.feed`.
    pub fn new(
        risk: RiskEngine,
        mut market: MarketInputs<F, Q, O>,
        signals: S,
        arbitrage: ArbitrageDetector,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        let history = (0..config.history_len)
            .map(|_| market.feed.next_price())
            .collect();

        Ok(Self {
            risk,
            market,
            signals,
            arbitrage,
            config,
            history,
            trades: Vec::new(),
            iterations_run: 0,
            halted: false,
        })
    }

    pub fn risk(&self) -> &RiskEngine {
        &self.risk
    }

    pub fn trades(&self) -> &[TradeRecord] {
        &self.trades
    }

    pub fn iterations_run(&self) -> u32 {
        self.iterations_run
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn step(&mut self) -> StepOutcome {
        if self.halted {
            return StepOutcome::Halted;
        }
        if !self.risk.can_trade() {
            self.halted = true;
            error!(
                daily_loss = %self.risk.daily_loss(),
                max_daily_loss = %self.risk.max_daily_loss(),
                iterations_run = self.iterations_run,
                "max daily loss reached, bot stopped"
            );
            return StepOutcome::Halted;
        }

        self.iterations_run += 1;
        let iteration = self.iterations_run;
        self.advance_history();
        let signal = self.signals.signal(self.history.make_contiguous());

        let quotes = self.market.venues.next_quotes();
        if let Some(opportunity) = self.arbitrage.detect(quotes) {
            debug!(iteration, spread = %opportunity.spread, "arbitrage spread detected");
            let profit = opportunity.expected_profit;
            return StepOutcome::Traded(self.apply_trade(iteration, TradeKind::Arbitrage, profit));
        }

        if signal != Signal::Buy {
            return StepOutcome::NoTrade(signal);
        }
        let Some(entry) = self.history.back().copied() else {
            return StepOutcome::NoTrade(signal);
        };

        let stop_loss = entry * (Decimal::ONE - self.config.stop_loss_pct / Decimal::ONE_HUNDRED);
        let size = self.risk.calculate_position_size(entry, stop_loss);
        let exit = self.market.outcome.exit_price(entry);
        let pnl = (exit - entry) * size;
        debug!(iteration, %entry, %stop_loss, %size, %exit, "directional trade closed");

        StepOutcome::Traded(self.apply_trade(iteration, TradeKind::Directional, pnl))
    }

    /// Steps until the iteration budget is spent or the loss gate closes.
    /// Arbitrage fills go straight to the next iteration without pacing.
    pub async fn run(mut self) -> SessionReport {
        info!(
            capital = %self.risk.capital(),
            max_daily_loss = %self.risk.max_daily_loss(),
            max_iterations = self.config.max_iterations,
            "session started"
        );

        while self.iterations_run < self.config.max_iterations {
            match self.step() {
                StepOutcome::Halted => break,
                StepOutcome::Traded(TradeRecord {
                    kind: TradeKind::Arbitrage,
                    ..
                }) => continue,
                StepOutcome::Traded(_) | StepOutcome::NoTrade(_) => self.pace().await,
            }
        }

        let report = self.into_report();
        info!(
            final_capital = %report.final_capital,
            total_pnl = %report.total_pnl,
            trades = report.trade_count(),
            halted = report.halted,
            "session finished"
        );
        report
    }

    pub fn into_report(self) -> SessionReport {
        let halted = self.halted || !self.risk.can_trade();
        SessionReport::new(
            self.risk.initial_capital(),
            self.risk.capital(),
            self.trades,
            halted,
            self.iterations_run,
        )
    }

    fn advance_history(&mut self) {
        let price = self.market.feed.next_price();
        if self.history.len() == self.config.history_len {
            self.history.pop_front();
        }
        self.history.push_back(price);
    }

    fn apply_trade(&mut self, iteration: u32, kind: TradeKind, pnl: Decimal) -> TradeRecord {
        self.risk.update_pnl(pnl);
        let trade = TradeRecord::new(iteration, kind, pnl, self.risk.capital());
        self.trades.push(trade.clone());
        trade
    }

    async fn pace(&self) {
        if self.config.decision_interval.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.config.decision_interval).await;
        }
    }
}
