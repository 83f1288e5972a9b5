//! Two-currency portfolio ledger and equity tracking.
//!
//! GBP is held as cash, EUR as holdings. Balances only change through
//! [`Portfolio::execute_trade`], which refuses any trade that would take
//! either balance below zero.

use super::execution::{self, ExecutionOutcome};
use super::phase::StrategyPhase;
use super::signal::Side;
use super::trade::{Order, Trade};

#[derive(Debug, Clone, PartialEq)]
pub struct EquityPoint {
    pub period: usize,
    pub equity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub(super) base_cash: f64,
    pub(super) quote_holdings: f64,
    pub(super) initial_balance: f64,
    pub(super) current_price: f64,
    pub(super) trades: Vec<Trade>,
    pub(super) equity_curve: Vec<EquityPoint>,
}

impl Portfolio {
    pub fn new(initial_balance: f64, initial_price: f64) -> Self {
        Portfolio {
            base_cash: initial_balance,
            quote_holdings: 0.0,
            initial_balance,
            current_price: initial_price,
            trades: Vec::new(),
            equity_curve: Vec::new(),
        }
    }

    pub fn base_cash(&self) -> f64 {
        self.base_cash
    }

    pub fn quote_holdings(&self) -> f64 {
        self.quote_holdings
    }

    pub fn initial_balance(&self) -> f64 {
        self.initial_balance
    }

    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }

    pub fn equity_curve(&self) -> &[EquityPoint] {
        &self.equity_curve
    }

    /// Move the mark-to-market price; trades execute at this price.
    pub fn mark_price(&mut self, price: f64) {
        self.current_price = price;
    }

    /// Execute `quantity` EUR on `side` at the current price.
    ///
    /// Returns `false` without touching any state when funds or holdings are
    /// insufficient.
    ///
    /// # Panics
    ///
    /// Panics if `quantity` is not a finite positive number.
    pub fn execute_trade(
        &mut self,
        period: usize,
        phase: StrategyPhase,
        side: Side,
        quantity: f64,
    ) -> bool {
        let order = Order {
            period,
            phase,
            side,
            quantity,
        };
        execution::execute(self, &order).is_filled()
    }

    /// Same as [`Portfolio::execute_trade`] but reports why an order was refused.
    pub fn execute_order(&mut self, order: &Order) -> ExecutionOutcome {
        execution::execute(self, order)
    }

    pub fn total_value(&self) -> f64 {
        self.base_cash + self.quote_holdings * self.current_price
    }

    pub fn record_equity(&mut self, period: usize) {
        let equity = self.total_value();
        self.equity_curve.push(EquityPoint { period, equity });
    }

    pub(super) fn record_trade(&mut self, trade: Trade) {
        self.trades.push(trade);
    }
}
