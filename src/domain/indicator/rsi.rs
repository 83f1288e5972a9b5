//! RSI (Relative Strength Index) with simple rolling means.
//!
//! gain[i] = max(P[i]-P[i-1], 0), loss[i] = max(P[i-1]-P[i], 0), and the first
//! position contributes zero to both. Average gain/loss are plain trailing
//! means over `period` positions, so the first defined RSI sits at index
//! `period - 1`.
//!
//! Formula: RSI = 100 - (100 / (1 + avg_gain / avg_loss)), evaluated with IEEE
//! division: avg_loss == 0 with gains gives RS = inf and RSI = 100, while a
//! flat window (0/0) gives NaN.

use super::rolling_mean;

/// Per-position gains and losses. Position 0 has no predecessor and is zero.
pub fn gains_and_losses(prices: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut gains = Vec::with_capacity(prices.len());
    let mut losses = Vec::with_capacity(prices.len());

    for (i, &price) in prices.iter().enumerate() {
        let change = if i == 0 { 0.0 } else { price - prices[i - 1] };
        gains.push(if change > 0.0 { change } else { 0.0 });
        losses.push(if change < 0.0 { -change } else { 0.0 });
    }

    (gains, losses)
}

pub fn calculate_rsi(prices: &[f64], period: usize) -> Vec<f64> {
    let (gains, losses) = gains_and_losses(prices);
    let avg_gain = rolling_mean(&gains, period);
    let avg_loss = rolling_mean(&losses, period);

    avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(&gain, &loss)| {
            let rs = gain / loss;
            100.0 - 100.0 / (1.0 + rs)
        })
        .collect()
}
