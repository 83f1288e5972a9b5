//! Technical indicator implementations over a plain price history.
//!
//! Every series has one entry per price (most recent last). Positions where
//! the indicator is not yet defined hold `f64::NAN`, so comparisons against
//! them are always false.

pub mod ema;
pub mod rsi;

use std::fmt;

pub use ema::calculate_ema;
pub use rsi::calculate_rsi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorType {
    Ema(usize),
    Rsi(usize),
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorType::Ema(span) => write!(f, "EMA({})", span),
            IndicatorType::Rsi(period) => write!(f, "RSI({})", period),
        }
    }
}

/// Simple trailing mean over `window` values.
///
/// Positions with fewer than `window` values available are NaN.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return vec![f64::NAN; values.len()];
    }

    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i + 1 < window {
                f64::NAN
            } else {
                values[i + 1 - window..=i].iter().sum::<f64>() / window as f64
            }
        })
        .collect()
}
