pub mod error;
pub mod events;
pub mod journal;
pub mod logging;
pub mod report;
pub mod session;

pub use error::SessionError;
pub use events::{StepOutcome, TradeKind, TradeRecord};
pub use journal::{TradeJournalCsvWriter, TRADE_JOURNAL_CSV_HEADER};
pub use report::SessionReport;
pub use session::{MarketInputs, SessionConfig, SyntheticSession, TradingSession};

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use core_sim::SimConfig;
    use risk::RiskConfig;
    use strategy::StrategyConfig;

    use crate::{SessionConfig, SyntheticSession, TradeJournalCsvWriter};

    #[tokio::test(flavor = "current_thread")]
    async fn synthetic_session_report_serializes_and_journals() {
        let config = SessionConfig {
            decision_interval: Duration::ZERO,
            ..SessionConfig::default()
        };
        let report = SyntheticSession::synthetic(
            RiskConfig::default(),
            &SimConfig::default(),
            &StrategyConfig::default(),
            config,
        )
        .unwrap()
        .run()
        .await;

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["initial_capital"], "10000");
        assert_eq!(
            json["trades"].as_array().map(Vec::len),
            Some(report.trade_count())
        );

        let mut journal = TradeJournalCsvWriter::new(Vec::new());
        journal.write_report(&report).unwrap();
        let csv = String::from_utf8(journal.into_inner()).unwrap();
        assert_eq!(csv.lines().count(), report.trade_count() + 1);
    }
}
