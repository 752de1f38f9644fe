use rust_decimal::Decimal;
use serde::Serialize;

use crate::events::TradeRecord;

const WIN_RATE_DP: u32 = 2;

/// Aggregate results of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub initial_capital: Decimal,
    pub final_capital: Decimal,
    pub total_pnl: Decimal,
    /// Percent of trades with positive pnl; `None` when nothing traded.
    pub win_rate_pct: Option<Decimal>,
    /// Cumulative pnl after each trade.
    pub equity_curve: Vec<Decimal>,
    pub trades: Vec<TradeRecord>,
    pub halted: bool,
    pub iterations_run: u32,
}

impl SessionReport {
    pub fn new(
        initial_capital: Decimal,
        final_capital: Decimal,
        trades: Vec<TradeRecord>,
        halted: bool,
        iterations_run: u32,
    ) -> Self {
        let equity_curve = equity_curve(&trades);
        let total_pnl = equity_curve.last().copied().unwrap_or(Decimal::ZERO);

        Self {
            initial_capital,
            final_capital,
            total_pnl,
            win_rate_pct: win_rate_pct(&trades),
            equity_curve,
            trades,
            halted,
            iterations_run,
        }
    }

    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }
}

fn equity_curve(trades: &[TradeRecord]) -> Vec<Decimal> {
    trades
        .iter()
        .scan(Decimal::ZERO, |cumulative, trade| {
            *cumulative = cumulative.saturating_add(trade.pnl);
            Some(*cumulative)
        })
        .collect()
}

fn win_rate_pct(trades: &[TradeRecord]) -> Option<Decimal> {
    if trades.is_empty() {
        return None;
    }

    let wins = trades.iter().filter(|trade| trade.is_win()).count();
    let rate = Decimal::from(wins) * Decimal::ONE_HUNDRED / Decimal::from(trades.len());
    Some(rate.round_dp(WIN_RATE_DP))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::SessionReport;
    use crate::events::{TradeKind, TradeRecord};

    fn trade(pnl: Decimal) -> TradeRecord {
        TradeRecord::new(1, TradeKind::Directional, pnl, Decimal::ZERO)
    }

    #[test]
    fn aggregates_pnl_win_rate_and_equity_curve() {
        let trades = vec![trade(dec!(10)), trade(dec!(-4)), trade(dec!(0)), trade(dec!(2.5))];

        let report = SessionReport::new(dec!(1000), dec!(1008.5), trades, false, 4);

        assert_eq!(report.total_pnl, dec!(8.5));
        assert_eq!(report.win_rate_pct, Some(dec!(50)));
        assert_eq!(
            report.equity_curve,
            vec![dec!(10), dec!(6), dec!(6), dec!(8.5)]
        );
        assert_eq!(report.trade_count(), 4);
    }

    #[test]
    fn win_rate_is_rounded_to_two_places() {
        let trades = vec![trade(dec!(1)), trade(dec!(1)), trade(dec!(-1))];

        let report = SessionReport::new(dec!(1000), dec!(1001), trades, false, 3);

        assert_eq!(report.win_rate_pct, Some(dec!(66.67)));
    }

    #[test]
    fn empty_session_has_no_win_rate() {
        let report = SessionReport::new(dec!(1000), dec!(1000), Vec::new(), true, 0);

        assert_eq!(report.total_pnl, Decimal::ZERO);
        assert_eq!(report.win_rate_pct, None);
        assert!(report.equity_curve.is_empty());
    }
}
