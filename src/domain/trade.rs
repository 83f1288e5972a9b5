//! Executed trade records.

use crate::domain::phase::StrategyPhase;
use crate::domain::signal::Side;

/// An order as the simulation submits it to the ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Order {
    pub period: usize,
    pub phase: StrategyPhase,
    pub side: Side,
    pub quantity: f64,
}

/// A filled order. `cash_delta` is the signed change to the GBP balance:
/// negative cost for buys, positive proceeds for sells.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub period: usize,
    pub phase: StrategyPhase,
    pub side: Side,
    pub quantity: f64,
    pub price: f64,
    pub cash_delta: f64,
}

impl Trade {
    pub fn strategy_name(&self) -> &'static str {
        self.phase.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_buy() -> Trade {
        Trade {
            period: 12,
            phase: StrategyPhase::EmaEarly,
            side: Side::Buy,
            quantity: 100_000.0,
            price: 0.87,
            cash_delta: -87_000.0,
        }
    }

    #[test]
    fn trade_fields() {
        let trade = sample_buy();
        assert_eq!(trade.period, 12);
        assert_eq!(trade.side, Side::Buy);
        assert!((trade.quantity - 100_000.0).abs() < f64::EPSILON);
        assert!((trade.price - 0.87).abs() < f64::EPSILON);
    }

    #[test]
    fn strategy_name_follows_phase() {
        let mut trade = sample_buy();
        assert_eq!(trade.strategy_name(), "EMA (early)");
        trade.phase = StrategyPhase::RsiMid;
        assert_eq!(trade.strategy_name(), "RSI");
    }
}
