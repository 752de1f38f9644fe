use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SimConfigError;
use crate::generators::{SyntheticPriceFeed, SyntheticVenueQuotes, UniformOutcome};

const VENUE_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;
const OUTCOME_SEED_SALT: u64 = 0xc2b2_ae3d_27d4_eb4f;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    pub seed: u64,
    pub start_price: Decimal,
    pub max_step: Decimal,
    pub venue_low: Decimal,
    pub venue_high: Decimal,
    pub outcome_min_factor: Decimal,
    pub outcome_max_factor: Decimal,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_price: Decimal::new(30_000, 0),
            max_step: Decimal::new(25, 0),
            venue_low: Decimal::new(30_000, 0),
            venue_high: Decimal::new(31_000, 0),
            outcome_min_factor: Decimal::new(97, 2),
            outcome_max_factor: Decimal::new(103, 2),
        }
    }
}

impl SimConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Checks the bounds the generator constructors assert on.
    pub fn validate(&self) -> Result<(), SimConfigError> {
        if self.start_price < Decimal::ZERO {
            return Err(SimConfigError::NegativeStartPrice(self.start_price));
        }
        if self.max_step < Decimal::ZERO {
            return Err(SimConfigError::NegativeMaxStep(self.max_step));
        }
        if self.venue_low > self.venue_high {
            return Err(SimConfigError::InvertedVenueBand {
                low: self.venue_low,
                high: self.venue_high,
            });
        }
        if self.outcome_min_factor < Decimal::ZERO {
            return Err(SimConfigError::NegativeOutcomeFactor(
                self.outcome_min_factor,
            ));
        }
        if self.outcome_min_factor > self.outcome_max_factor {
            return Err(SimConfigError::InvertedOutcomeBand {
                min: self.outcome_min_factor,
                max: self.outcome_max_factor,
            });
        }
        Ok(())
    }

    pub fn price_feed(&self) -> SyntheticPriceFeed {
        SyntheticPriceFeed::new(self.seed, self.start_price, self.max_step)
    }

    pub fn venue_quotes(&self) -> SyntheticVenueQuotes {
        SyntheticVenueQuotes::new(
            self.seed ^ VENUE_SEED_SALT,
            self.venue_low,
            self.venue_high,
        )
    }

    pub fn outcome(&self) -> UniformOutcome {
        UniformOutcome::new(
            self.seed ^ OUTCOME_SEED_SALT,
            self.outcome_min_factor,
            self.outcome_max_factor,
        )
    }
}
