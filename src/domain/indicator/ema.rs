//! Exponential Moving Average.
//!
//! alpha = 2/(span+1), EMA[0] = P[0], EMA[i] = P[i]*alpha + EMA[i-1]*(1-alpha).
//! No warmup: the recursion is seeded with the first price and carries the
//! whole history forward, so every position is defined.

pub fn calculate_ema(prices: &[f64], span: usize) -> Vec<f64> {
    if span == 0 || prices.is_empty() {
        return Vec::new();
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut values = Vec::with_capacity(prices.len());
    let mut ema = prices[0];
    values.push(ema);

    for &price in &prices[1..] {
        ema = alpha * price + (1.0 - alpha) * ema;
        values.push(ema);
    }

    values
}
