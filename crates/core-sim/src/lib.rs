//! Seeded synthetic market inputs: a price walk, two-venue quotes and
//! trade outcomes.

mod config;
mod error;
mod feed;
mod generators;

pub use config::SimConfig;
pub use error::SimConfigError;
pub use feed::{OutcomeModel, PriceFeed, VenueQuoteSource, VenueQuotes};
pub use generators::{SyntheticPriceFeed, SyntheticVenueQuotes, UniformOutcome};

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::{PriceFeed, SimConfig, SimConfigError, VenueQuoteSource};

    #[test]
    fn sim_config_defaults_match_reference_market() {
        let config = SimConfig::default();

        assert_eq!(config.seed, 42);
        assert_eq!(config.start_price, dec!(30000));
        assert_eq!(config.venue_low, dec!(30000));
        assert_eq!(config.venue_high, dec!(31000));
        assert_eq!(config.outcome_min_factor, dec!(0.97));
        assert_eq!(config.outcome_max_factor, dec!(1.03));
    }

    #[test]
    fn feeds_built_from_same_config_replay_identically() {
        let config = SimConfig::with_seed(9);

        let mut first = config.price_feed();
        let mut second = config.price_feed();
        assert_eq!(first.next_price(), second.next_price());

        let mut quotes_a = config.venue_quotes();
        let mut quotes_b = config.venue_quotes();
        assert_eq!(quotes_a.next_quotes(), quotes_b.next_quotes());
    }

    #[test]
    fn default_sim_config_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_bands() {
        let venues = SimConfig {
            venue_low: dec!(31000),
            venue_high: dec!(30000),
            ..SimConfig::default()
        };
        assert_eq!(
            venues.validate(),
            Err(SimConfigError::InvertedVenueBand {
                low: dec!(31000),
                high: dec!(30000),
            })
        );

        let outcome = SimConfig {
            outcome_min_factor: dec!(1.03),
            outcome_max_factor: dec!(0.97),
            ..SimConfig::default()
        };
        assert_eq!(
            outcome.validate(),
            Err(SimConfigError::InvertedOutcomeBand {
                min: dec!(1.03),
                max: dec!(0.97),
            })
        );
    }

    #[test]
    fn rejects_negative_walk_parameters() {
        let config = SimConfig {
            max_step: dec!(-1),
            ..SimConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(SimConfigError::NegativeMaxStep(dec!(-1)))
        );
    }
}
