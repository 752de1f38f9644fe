use rust_decimal::Decimal;

use crate::feed::{OutcomeModel, PriceFeed, VenueQuoteSource, VenueQuotes};

const PRICE_DP: u32 = 2;
const FACTOR_DP: u32 = 6;
const UNIT_BITS: u32 = 53;

/// Seeded bounded random walk. Each step moves at most `max_step` and the
/// price never goes below zero.
#[derive(Debug, Clone)]
pub struct SyntheticPriceFeed {
    state: u64,
    price: Decimal,
    max_step: Decimal,
}

impl SyntheticPriceFeed {
    pub fn new(seed: u64, start_price: Decimal, max_step: Decimal) -> Self {
        assert!(
            start_price >= Decimal::ZERO,
            "start_price must be non-negative"
        );
        assert!(max_step >= Decimal::ZERO, "max_step must be non-negative");

        Self {
            state: seed,
            price: start_price,
            max_step,
        }
    }
}

impl PriceFeed for SyntheticPriceFeed {
    fn next_price(&mut self) -> Decimal {
        let unit = next_unit(&mut self.state);
        let delta = (unit * Decimal::TWO - Decimal::ONE) * self.max_step;
        self.price = (self.price + delta).max(Decimal::ZERO).round_dp(PRICE_DP);
        self.price
    }
}

/// Independent uniform quotes for two venues within `[low, high]`.
#[derive(Debug, Clone)]
pub struct SyntheticVenueQuotes {
    state: u64,
    low: Decimal,
    high: Decimal,
}

impl SyntheticVenueQuotes {
    pub fn new(seed: u64, low: Decimal, high: Decimal) -> Self {
        assert!(low <= high, "low must not exceed high");

        Self {
            state: seed,
            low,
            high,
        }
    }
}

impl VenueQuoteSource for SyntheticVenueQuotes {
    fn next_quotes(&mut self) -> VenueQuotes {
        let venue_a = uniform(&mut self.state, self.low, self.high).round_dp(PRICE_DP);
        let venue_b = uniform(&mut self.state, self.low, self.high).round_dp(PRICE_DP);

        VenueQuotes { venue_a, venue_b }
    }
}

/// Closes each position at `entry * U(min_factor, max_factor)`.
#[derive(Debug, Clone)]
pub struct UniformOutcome {
    state: u64,
    min_factor: Decimal,
    max_factor: Decimal,
}

impl UniformOutcome {
    pub fn new(seed: u64, min_factor: Decimal, max_factor: Decimal) -> Self {
        assert!(
            min_factor >= Decimal::ZERO,
            "min_factor must be non-negative"
        );
        assert!(
            min_factor <= max_factor,
            "min_factor must not exceed max_factor"
        );

        Self {
            state: seed,
            min_factor,
            max_factor,
        }
    }
}

impl OutcomeModel for UniformOutcome {
    fn exit_price(&mut self, entry: Decimal) -> Decimal {
        let factor =
            uniform(&mut self.state, self.min_factor, self.max_factor).round_dp(FACTOR_DP);
        entry * factor
    }
}

fn next_u64(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

/// Uniform in `[0, 1]` from the top 53 bits of the next LCG state.
fn next_unit(state: &mut u64) -> Decimal {
    let bits = next_u64(state) >> (64 - UNIT_BITS);
    let scale = (1_u64 << UNIT_BITS) - 1;
    Decimal::from(bits) / Decimal::from(scale)
}

fn uniform(state: &mut u64, low: Decimal, high: Decimal) -> Decimal {
    low + (high - low) * next_unit(state)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::{SyntheticPriceFeed, SyntheticVenueQuotes, UniformOutcome};
    use crate::feed::{OutcomeModel, PriceFeed, VenueQuoteSource};

    #[test]
    fn seeded_generators_are_deterministic() {
        let mut price_a = SyntheticPriceFeed::new(42, dec!(30000), dec!(25));
        let mut price_b = SyntheticPriceFeed::new(42, dec!(30000), dec!(25));

        let mut quotes_a = SyntheticVenueQuotes::new(42, dec!(30000), dec!(31000));
        let mut quotes_b = SyntheticVenueQuotes::new(42, dec!(30000), dec!(31000));

        let ticks_a: Vec<_> = (0..10)
            .map(|_| (price_a.next_price(), quotes_a.next_quotes()))
            .collect();
        let ticks_b: Vec<_> = (0..10)
            .map(|_| (price_b.next_price(), quotes_b.next_quotes()))
            .collect();

        assert_eq!(ticks_a, ticks_b);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut price_a = SyntheticPriceFeed::new(1, dec!(30000), dec!(25));
        let mut price_b = SyntheticPriceFeed::new(2, dec!(30000), dec!(25));

        let path_a: Vec<_> = (0..10).map(|_| price_a.next_price()).collect();
        let path_b: Vec<_> = (0..10).map(|_| price_b.next_price()).collect();

        assert_ne!(path_a, path_b);
    }

    #[test]
    fn price_steps_stay_within_max_step() {
        let mut feed = SyntheticPriceFeed::new(7, dec!(30000), dec!(25));
        let mut previous = dec!(30000);

        for _ in 0..1_000 {
            let price = feed.next_price();
            assert!((price - previous).abs() <= dec!(25.01));
            previous = price;
        }
    }

    #[test]
    fn price_walk_is_floored_at_zero() {
        let mut feed = SyntheticPriceFeed::new(3, dec!(1), dec!(50));

        for _ in 0..1_000 {
            assert!(feed.next_price() >= Decimal::ZERO);
        }
    }

    #[test]
    fn venue_quotes_stay_within_band() {
        let mut quotes = SyntheticVenueQuotes::new(11, dec!(30000), dec!(31000));

        for _ in 0..1_000 {
            let sample = quotes.next_quotes();
            assert!((dec!(30000)..=dec!(31000)).contains(&sample.venue_a));
            assert!((dec!(30000)..=dec!(31000)).contains(&sample.venue_b));
        }
    }

    #[test]
    fn outcome_exit_stays_within_factor_band() {
        let mut outcome = UniformOutcome::new(5, dec!(0.97), dec!(1.03));

        for _ in 0..1_000 {
            let exit = outcome.exit_price(dec!(100));
            assert!((dec!(97)..=dec!(103)).contains(&exit));
        }
    }

    #[test]
    #[should_panic(expected = "start_price must be non-negative")]
    fn price_feed_rejects_negative_start_price() {
        let _ = SyntheticPriceFeed::new(1, dec!(-1), dec!(1));
    }

    #[test]
    #[should_panic(expected = "min_factor must not exceed max_factor")]
    fn outcome_rejects_inverted_band() {
        let _ = UniformOutcome::new(1, dec!(1.03), dec!(0.97));
    }
}
