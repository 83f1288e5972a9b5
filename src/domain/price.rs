//! Synthetic price path generation.
//!
//! A multiplicative random walk: each period the previous price moves by a
//! relative change drawn uniformly from `[-v, +v]`, where `v` is the phase's
//! volatility. Prices are not clamped, so long runs can drift toward zero or
//! grow without bound.

use rand::Rng;

use crate::domain::phase::StrategyPhase;

pub struct PriceGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> PriceGenerator<R> {
    pub fn new(rng: R) -> Self {
        PriceGenerator { rng }
    }

    pub fn next_price(&mut self, previous_price: f64, phase: StrategyPhase) -> f64 {
        let volatility = phase.volatility();
        let change = self.rng.gen_range(-volatility..=volatility);
        previous_price * (1.0 + change)
    }
}
