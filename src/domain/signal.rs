//! Trade signals derived from the full price history.

use std::fmt;

use crate::domain::indicator::{calculate_ema, calculate_rsi, IndicatorType};

pub const EMA_SPAN: usize = 10;
pub const RSI_PERIOD: usize = 14;
pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// The order side this signal asks for, if any.
    pub fn side(&self) -> Option<Side> {
        match self {
            Signal::Buy => Some(Side::Buy),
            Signal::Sell => Some(Side::Sell),
            Signal::Hold => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.pad("BUY"),
            Side::Sell => f.pad("SELL"),
        }
    }
}

/// Price above its EMA(10) is a Buy, below is a Sell.
pub fn ema_signal(prices: &[f64]) -> Signal {
    ema_crossover(prices, EMA_SPAN)
}

/// RSI(14) under 30 is a Buy (oversold), over 70 a Sell (overbought).
///
/// An undefined RSI (flat window) compares false both ways and holds.
pub fn rsi_signal(prices: &[f64]) -> Signal {
    rsi_threshold(prices, RSI_PERIOD)
}

/// Evaluate `indicator` with its own span or period.
pub fn evaluate(indicator: IndicatorType, prices: &[f64]) -> Signal {
    match indicator {
        IndicatorType::Ema(span) => ema_crossover(prices, span),
        IndicatorType::Rsi(period) => rsi_threshold(prices, period),
    }
}

fn ema_crossover(prices: &[f64], span: usize) -> Signal {
    if prices.len() < span {
        return Signal::Hold;
    }

    let ema = calculate_ema(prices, span);
    match (prices.last(), ema.last()) {
        (Some(&price), Some(&average)) if price > average => Signal::Buy,
        (Some(&price), Some(&average)) if price < average => Signal::Sell,
        _ => Signal::Hold,
    }
}

fn rsi_threshold(prices: &[f64], period: usize) -> Signal {
    if prices.len() < period {
        return Signal::Hold;
    }

    match calculate_rsi(prices, period).last() {
        Some(&rsi) if rsi < RSI_OVERSOLD => Signal::Buy,
        Some(&rsi) if rsi > RSI_OVERBOUGHT => Signal::Sell,
        _ => Signal::Hold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rising(n: usize) -> Vec<f64> {
        (0..n).map(|i| 1.0 + i as f64 * 0.01).collect()
    }

    fn falling(n: usize) -> Vec<f64> {
        (0..n).map(|i| 1.0 - i as f64 * 0.01).collect()
    }

    #[test]
    fn ema_holds_on_short_history() {
        for n in 0..EMA_SPAN {
            assert_eq!(ema_signal(&rising(n)), Signal::Hold, "n = {}", n);
        }
    }

    #[test]
    fn ema_buys_above_rising_average() {
        let prices = [1.0, 1.01, 1.02, 1.03, 1.04, 1.05, 1.06, 1.07, 1.08, 1.09, 1.10];
        assert_eq!(ema_signal(&prices), Signal::Buy);
    }

    #[test]
    fn ema_sells_below_falling_average() {
        assert_eq!(ema_signal(&falling(12)), Signal::Sell);
    }

    #[test]
    fn ema_holds_on_flat_prices() {
        assert_eq!(ema_signal(&[1.0; 15]), Signal::Hold);
    }

    #[test]
    fn rsi_holds_on_short_history() {
        for n in 0..RSI_PERIOD {
            assert_eq!(rsi_signal(&falling(n)), Signal::Hold, "n = {}", n);
        }
    }

    #[test]
    fn rsi_falling_prices_buy_not_sell() {
        // Every move is down: mean gain is 0, RSI is 0, which is oversold.
        assert_eq!(rsi_signal(&falling(14)), Signal::Buy);
        assert_eq!(rsi_signal(&falling(30)), Signal::Buy);
    }

    #[test]
    fn rsi_rising_prices_sell() {
        assert_eq!(rsi_signal(&rising(14)), Signal::Sell);
    }

    #[test]
    fn rsi_flat_prices_hold() {
        assert_eq!(rsi_signal(&[0.86; 20]), Signal::Hold);
    }

    #[test]
    fn rsi_balanced_moves_hold() {
        let prices: Vec<f64> = (0..20)
            .map(|i| if i % 2 == 0 { 1.0 } else { 1.01 })
            .collect();
        assert_eq!(rsi_signal(&prices), Signal::Hold);
    }

    #[test]
    fn evaluate_dispatches_on_indicator() {
        let prices = falling(14);
        assert_eq!(evaluate(IndicatorType::Ema(10), &prices), Signal::Sell);
        assert_eq!(evaluate(IndicatorType::Rsi(14), &prices), Signal::Buy);
    }

    #[test]
    fn evaluate_uses_the_indicator_span() {
        let prices = rising(5);
        assert_eq!(ema_signal(&prices), Signal::Hold);
        assert_eq!(evaluate(IndicatorType::Ema(3), &prices), Signal::Buy);
        assert_eq!(evaluate(IndicatorType::Ema(6), &prices), Signal::Hold);
    }

    #[test]
    fn evaluate_uses_the_indicator_period() {
        let prices = falling(4);
        assert_eq!(rsi_signal(&prices), Signal::Hold);
        assert_eq!(evaluate(IndicatorType::Rsi(4), &prices), Signal::Buy);
    }

    #[test]
    fn zero_span_holds() {
        assert_eq!(evaluate(IndicatorType::Ema(0), &rising(5)), Signal::Hold);
        assert_eq!(evaluate(IndicatorType::Rsi(0), &falling(5)), Signal::Hold);
    }

    #[test]
    fn signal_side() {
        assert_eq!(Signal::Buy.side(), Some(Side::Buy));
        assert_eq!(Signal::Sell.side(), Some(Side::Sell));
        assert_eq!(Signal::Hold.side(), None);
    }

    #[test]
    fn side_display() {
        assert_eq!(Side::Buy.to_string(), "BUY");
        assert_eq!(Side::Sell.to_string(), "SELL");
    }
}
