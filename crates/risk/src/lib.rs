//! Position sizing and session loss limits for a single trading session.

pub mod config;
pub mod engine;
pub mod error;

pub use config::RiskConfig;
pub use engine::RiskEngine;
pub use error::{ConfigViolation, RiskError};
