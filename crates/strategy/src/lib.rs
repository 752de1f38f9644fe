pub mod arbitrage;
pub mod config;
pub mod error;
pub mod signal;

pub use arbitrage::{ArbitrageDetector, ArbitrageOpportunity};
pub use config::StrategyConfig;
pub use error::StrategyError;
pub use signal::{ema, EmaCrossover, Signal, SignalSource};

#[cfg(test)]
mod tests {
    use core_sim::{PriceFeed, SimConfig, VenueQuoteSource};

    use crate::{ArbitrageDetector, EmaCrossover, SignalSource};

    #[test]
    fn crossover_signal_is_reproducible_for_a_seed() {
        let history = |seed| {
            let mut feed = SimConfig::with_seed(seed).price_feed();
            (0..120).map(|_| feed.next_price()).collect::<Vec<_>>()
        };
        let crossover = EmaCrossover::default();

        assert_eq!(crossover.signal(&history(7)), crossover.signal(&history(7)));
    }

    #[test]
    fn detector_profit_is_share_of_absolute_spread() {
        let mut venues = SimConfig::with_seed(3).venue_quotes();
        let detector = ArbitrageDetector::default();

        for _ in 0..200 {
            let quotes = venues.next_quotes();
            if let Some(opportunity) = detector.detect(quotes) {
                assert_eq!(opportunity.spread, quotes.spread());
                assert_eq!(
                    opportunity.expected_profit,
                    quotes.spread().abs() * rust_decimal::Decimal::new(1, 2)
                );
            }
        }
    }
}
