use std::{env, str::FromStr, time::Duration};

use core_sim::SimConfig;
use risk::RiskConfig;
use runtime::SessionConfig;
use rust_decimal::Decimal;
use thiserror::Error;

const DEFAULT_INITIAL_CAPITAL: i64 = 10_000;
const DEFAULT_RISK_PER_TRADE_PCT: i64 = 1;
const DEFAULT_MAX_DAILY_LOSS_PCT: i64 = 3;
const DEFAULT_MAX_ITERATIONS: u32 = 30;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_DECISION_INTERVAL_MS: u64 = 50;
const DEFAULT_JOURNAL_OUTPUT_PATH: &str = "artifacts/trades.csv";

const ENV_INITIAL_CAPITAL: &str = "BOT_INITIAL_CAPITAL";
const ENV_RISK_PER_TRADE_PCT: &str = "BOT_RISK_PER_TRADE_PCT";
const ENV_MAX_DAILY_LOSS_PCT: &str = "BOT_MAX_DAILY_LOSS_PCT";
const ENV_MAX_ITERATIONS: &str = "BOT_MAX_ITERATIONS";
const ENV_SEED: &str = "BOT_SEED";
const ENV_DECISION_INTERVAL_MS: &str = "BOT_DECISION_INTERVAL_MS";
const ENV_JOURNAL_OUTPUT: &str = "BOT_JOURNAL_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub initial_capital: Decimal,
    pub risk_per_trade_pct: Decimal,
    pub max_daily_loss_pct: Decimal,
    pub max_iterations: u32,
    pub seed: u64,
    pub decision_interval_ms: u64,
    pub journal_output_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("BOT_INITIAL_CAPITAL must be a positive decimal")]
    InvalidInitialCapital,
    #[error("BOT_RISK_PER_TRADE_PCT must be a percentage between 0 and 100")]
    InvalidRiskPerTradePct,
    #[error("BOT_MAX_DAILY_LOSS_PCT must be a percentage between 0 and 100")]
    InvalidMaxDailyLossPct,
    #[error("BOT_MAX_ITERATIONS must be a positive integer")]
    InvalidMaxIterations,
    #[error("BOT_SEED must be an unsigned 64-bit integer")]
    InvalidSeed,
    #[error("BOT_DECISION_INTERVAL_MS must be a non-negative integer")]
    InvalidDecisionIntervalMs,
    #[error("BOT_JOURNAL_OUTPUT must not be empty or whitespace")]
    InvalidJournalOutputPath,
    #[error("{0} contains non-unicode data")]
    NonUnicode(&'static str),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let initial_capital = parse_env(
            ENV_INITIAL_CAPITAL,
            Decimal::from(DEFAULT_INITIAL_CAPITAL),
            ConfigError::InvalidInitialCapital,
            |value: &Decimal| *value > Decimal::ZERO,
        )?;

        let risk_per_trade_pct = parse_env(
            ENV_RISK_PER_TRADE_PCT,
            Decimal::from(DEFAULT_RISK_PER_TRADE_PCT),
            ConfigError::InvalidRiskPerTradePct,
            is_percentage,
        )?;

        let max_daily_loss_pct = parse_env(
            ENV_MAX_DAILY_LOSS_PCT,
            Decimal::from(DEFAULT_MAX_DAILY_LOSS_PCT),
            ConfigError::InvalidMaxDailyLossPct,
            is_percentage,
        )?;

        let max_iterations = parse_env(
            ENV_MAX_ITERATIONS,
            DEFAULT_MAX_ITERATIONS,
            ConfigError::InvalidMaxIterations,
            |value: &u32| *value > 0,
        )?;

        let seed = parse_env(ENV_SEED, DEFAULT_SEED, ConfigError::InvalidSeed, |_| true)?;

        let decision_interval_ms = parse_env(
            ENV_DECISION_INTERVAL_MS,
            DEFAULT_DECISION_INTERVAL_MS,
            ConfigError::InvalidDecisionIntervalMs,
            |_| true,
        )?;

        let journal_output_path = match env::var(ENV_JOURNAL_OUTPUT) {
            Ok(value) => {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidJournalOutputPath);
                }
                value
            }
            Err(env::VarError::NotPresent) => DEFAULT_JOURNAL_OUTPUT_PATH.to_owned(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicode(ENV_JOURNAL_OUTPUT));
            }
        };

        Ok(Self {
            initial_capital,
            risk_per_trade_pct,
            max_daily_loss_pct,
            max_iterations,
            seed,
            decision_interval_ms,
            journal_output_path,
        })
    }

    pub fn risk_config(&self) -> RiskConfig {
        RiskConfig::new(
            self.initial_capital,
            self.risk_per_trade_pct,
            self.max_daily_loss_pct,
        )
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig::with_seed(self.seed)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            max_iterations: self.max_iterations,
            decision_interval: Duration::from_millis(self.decision_interval_ms),
            ..SessionConfig::default()
        }
    }
}

fn is_percentage(value: &Decimal) -> bool {
    *value > Decimal::ZERO && *value <= Decimal::ONE_HUNDRED
}

fn parse_env<T: FromStr>(
    key: &'static str,
    default_value: T,
    invalid_error: ConfigError,
    is_valid: impl Fn(&T) -> bool,
) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            let parsed = value.trim().parse::<T>().map_err(|_| invalid_error.clone())?;
            if !is_valid(&parsed) {
                return Err(invalid_error);
            }
            Ok(parsed)
        }
        Err(env::VarError::NotPresent) => Ok(default_value),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NonUnicode(key)),
    }
}
