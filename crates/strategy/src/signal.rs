use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StrategyError;

const DEFAULT_FAST_SPAN: usize = 9;
const DEFAULT_SLOW_SPAN: usize = 21;
const EMA_DP: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

/// Turns a price history, oldest first, into a trading signal.
pub trait SignalSource {
    fn signal(&self, prices: &[Decimal]) -> Signal;
}

/// Span-weighted exponential mean of `prices`, oldest first.
///
/// Weights are normalized over the observations seen so far, so early values
/// are not biased toward the first price. The result is rounded to 12 decimal
/// places. Returns `None` when `prices` is empty or `span` is zero.
pub fn ema(prices: &[Decimal], span: usize) -> Option<Decimal> {
    if prices.is_empty() || span == 0 {
        return None;
    }

    let alpha = Decimal::TWO / Decimal::from(span + 1);
    let decay = Decimal::ONE - alpha;
    let mut weighted_sum = Decimal::ZERO;
    let mut weight_total = Decimal::ZERO;

    for price in prices {
        weighted_sum = weighted_sum * decay + *price;
        weight_total = weight_total * decay + Decimal::ONE;
    }

    Some((weighted_sum / weight_total).round_dp(EMA_DP))
}

/// Fast/slow EMA crossover: buy while the fast average is above the slow one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmaCrossover {
    fast_span: usize,
    slow_span: usize,
}

impl EmaCrossover {
    pub fn new(fast_span: usize, slow_span: usize) -> Result<Self, StrategyError> {
        if fast_span == 0 || slow_span == 0 {
            return Err(StrategyError::ZeroSpan);
        }
        if fast_span >= slow_span {
            return Err(StrategyError::FastSpanNotShorter {
                fast: fast_span,
                slow: slow_span,
            });
        }

        Ok(Self {
            fast_span,
            slow_span,
        })
    }

    pub fn fast_span(&self) -> usize {
        self.fast_span
    }

    pub fn slow_span(&self) -> usize {
        self.slow_span
    }
}

impl Default for EmaCrossover {
    fn default() -> Self {
        Self {
            fast_span: DEFAULT_FAST_SPAN,
            slow_span: DEFAULT_SLOW_SPAN,
        }
    }
}

impl SignalSource for EmaCrossover {
    fn signal(&self, prices: &[Decimal]) -> Signal {
        let (Some(fast), Some(slow)) = (ema(prices, self.fast_span), ema(prices, self.slow_span))
        else {
            return Signal::Hold;
        };

        if fast > slow {
            Signal::Buy
        } else if fast < slow {
            Signal::Sell
        } else {
            Signal::Hold
        }
    }
}
