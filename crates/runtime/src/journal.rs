use std::io::{self, Write};

use rust_decimal::Decimal;
use tracing::info;

use crate::events::TradeRecord;
use crate::report::SessionReport;

pub const TRADE_JOURNAL_CSV_HEADER: &str = "trade,iteration,kind,pnl,cumulative_pnl,capital\n";

/// Writes a session's trades as CSV, one row per realized trade.
pub struct TradeJournalCsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> TradeJournalCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(TRADE_JOURNAL_CSV_HEADER.as_bytes())
    }

    pub fn append_trades(&mut self, trades: &[TradeRecord]) -> io::Result<()> {
        let mut cumulative = Decimal::ZERO;
        for (index, trade) in trades.iter().enumerate() {
            cumulative = cumulative.saturating_add(trade.pnl);
            writeln!(
                self.writer,
                "{},{},{},{},{cumulative},{}",
                index + 1,
                trade.iteration,
                trade.kind.as_str(),
                trade.pnl,
                trade.capital_after
            )?;
        }
        Ok(())
    }

    /// Header plus every trade in `report`, flushed before returning.
    pub fn write_report(&mut self, report: &SessionReport) -> io::Result<()> {
        self.write_header()?;
        self.append_trades(&report.trades)?;
        self.writer.flush()?;
        info!(trades = report.trade_count(), "trade journal written");
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
