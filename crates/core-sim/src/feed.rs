use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Source of the traded instrument's price, one observation per call.
pub trait PriceFeed {
    fn next_price(&mut self) -> Decimal;
}

/// Simultaneous quotes for the same instrument on two venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueQuotes {
    pub venue_a: Decimal,
    pub venue_b: Decimal,
}

impl VenueQuotes {
    /// `venue_b - venue_a`; positive when venue B is richer.
    pub fn spread(&self) -> Decimal {
        self.venue_b - self.venue_a
    }
}

pub trait VenueQuoteSource {
    fn next_quotes(&mut self) -> VenueQuotes;
}

/// Decides where a position opened at `entry` is closed.
pub trait OutcomeModel {
    fn exit_price(&mut self, entry: Decimal) -> Decimal;
}

impl<T: PriceFeed + ?Sized> PriceFeed for Box<T> {
    fn next_price(&mut self) -> Decimal {
        (**self).next_price()
    }
}

impl<T: VenueQuoteSource + ?Sized> VenueQuoteSource for Box<T> {
    fn next_quotes(&mut self) -> VenueQuotes {
        (**self).next_quotes()
    }
}

impl<T: OutcomeModel + ?Sized> OutcomeModel for Box<T> {
    fn exit_price(&mut self, entry: Decimal) -> Decimal {
        (**self).exit_price(entry)
    }
}
