//! End-of-run summary and equity statistics.

use super::portfolio::{EquityPoint, Portfolio};
use super::signal::Side;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub initial_balance: f64,
    pub final_value: f64,
    pub profit_loss: f64,
    /// Profit/loss as a percentage of the initial GBP balance.
    pub profit_loss_pct: f64,
    pub base_cash: f64,
    pub quote_holdings: f64,
    pub final_price: f64,
    pub total_trades: usize,
    pub buys: usize,
    pub sells: usize,
    pub rejected_trades: usize,
    pub max_drawdown: f64,
    pub max_drawdown_duration: usize,
}

impl Summary {
    pub fn compute(portfolio: &Portfolio, rejected_trades: usize) -> Self {
        let initial_balance = portfolio.initial_balance();
        let final_value = portfolio.total_value();
        let profit_loss = final_value - initial_balance;

        let profit_loss_pct = if initial_balance > 0.0 {
            profit_loss / initial_balance * 100.0
        } else {
            0.0
        };

        let buys = portfolio
            .trades()
            .iter()
            .filter(|t| t.side == Side::Buy)
            .count();
        let total_trades = portfolio.trade_count();

        let (max_drawdown, max_drawdown_duration) = compute_drawdown(portfolio.equity_curve());

        Summary {
            initial_balance,
            final_value,
            profit_loss,
            profit_loss_pct,
            base_cash: portfolio.base_cash(),
            quote_holdings: portfolio.quote_holdings(),
            final_price: portfolio.current_price(),
            total_trades,
            buys,
            sells: total_trades - buys,
            rejected_trades,
            max_drawdown,
            max_drawdown_duration,
        }
    }
}

/// Largest peak-to-trough fall as a fraction of the peak, and the longest run
/// of consecutive periods spent below a peak.
pub fn compute_drawdown(equity_curve: &[EquityPoint]) -> (f64, usize) {
    let Some(first) = equity_curve.first() else {
        return (0.0, 0);
    };

    let mut peak = first.equity;
    let mut max_dd = 0.0_f64;
    let mut max_dd_duration = 0usize;
    let mut current_dd_duration = 0usize;

    for point in equity_curve {
        if point.equity >= peak {
            peak = point.equity;
            current_dd_duration = 0;
        } else if peak > 0.0 {
            let dd = (peak - point.equity) / peak;
            max_dd = max_dd.max(dd);
            current_dd_duration += 1;
            max_dd_duration = max_dd_duration.max(current_dd_duration);
        }
    }

    (max_dd, max_dd_duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::phase::StrategyPhase;
    use approx::assert_relative_eq;

    fn make_equity_curve(values: &[f64]) -> Vec<EquityPoint> {
        values
            .iter()
            .enumerate()
            .map(|(period, &equity)| EquityPoint { period, equity })
            .collect()
    }

    #[test]
    fn drawdown_empty_curve() {
        assert_eq!(compute_drawdown(&[]), (0.0, 0));
    }

    #[test]
    fn drawdown_monotonic_rise() {
        let curve = make_equity_curve(&[100.0, 110.0, 120.0]);
        assert_eq!(compute_drawdown(&curve), (0.0, 0));
    }

    #[test]
    fn drawdown_peak_to_trough() {
        let curve = make_equity_curve(&[100.0, 120.0, 90.0, 105.0, 130.0, 117.0]);
        let (dd, duration) = compute_drawdown(&curve);
        assert_relative_eq!(dd, 0.25);
        assert_eq!(duration, 2);
    }

    #[test]
    fn summary_untouched_portfolio() {
        let portfolio = Portfolio::new(1_000_000.0, 0.86);
        let summary = Summary::compute(&portfolio, 0);

        assert_relative_eq!(summary.final_value, 1_000_000.0);
        assert_eq!(summary.profit_loss, 0.0);
        assert_eq!(summary.profit_loss_pct, 0.0);
        assert_eq!(summary.total_trades, 0);
        assert_eq!(summary.max_drawdown, 0.0);
    }

    #[test]
    fn summary_after_profitable_round_trip() {
        let mut portfolio = Portfolio::new(1_000_000.0, 0.80);
        assert!(portfolio.execute_trade(1, StrategyPhase::EmaEarly, Side::Buy, 100_000.0));
        portfolio.mark_price(0.90);
        assert!(portfolio.execute_trade(2, StrategyPhase::EmaEarly, Side::Sell, 100_000.0));

        let summary = Summary::compute(&portfolio, 3);
        assert_relative_eq!(summary.profit_loss, 10_000.0, epsilon = 1e-6);
        assert_relative_eq!(summary.profit_loss_pct, 1.0, epsilon = 1e-9);
        assert_eq!(summary.total_trades, 2);
        assert_eq!(summary.buys, 1);
        assert_eq!(summary.sells, 1);
        assert_eq!(summary.rejected_trades, 3);
        assert_relative_eq!(summary.final_price, 0.90);
        assert_eq!(summary.quote_holdings, 0.0);
    }

    #[test]
    fn summary_marks_open_holdings() {
        let mut portfolio = Portfolio::new(1_000_000.0, 0.80);
        assert!(portfolio.execute_trade(1, StrategyPhase::RsiMid, Side::Buy, 100_000.0));
        portfolio.mark_price(0.70);

        let summary = Summary::compute(&portfolio, 0);
        assert_relative_eq!(summary.final_value, 990_000.0, epsilon = 1e-6);
        assert_relative_eq!(summary.profit_loss_pct, -1.0, epsilon = 1e-9);
    }
}
