use runtime::{SessionError, SessionReport, SyntheticSession};
use strategy::StrategyConfig;
use tracing::{info, warn};

use crate::config::Config;

pub async fn run_session(config: &Config) -> Result<SessionReport, SessionError> {
    info!(seed = config.seed, "starting synthetic trading session");

    let session = SyntheticSession::synthetic(
        config.risk_config(),
        &config.sim_config(),
        &StrategyConfig::default(),
        config.session_config(),
    )?;
    let report = session.run().await;

    if report.trade_count() == 0 {
        warn!("no trades executed");
    }
    Ok(report)
}
