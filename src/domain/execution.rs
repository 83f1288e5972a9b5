//! Trade execution against the portfolio ledger.
//!
//! Fills are all-or-nothing at the portfolio's current price. A buy needs
//! enough GBP to pay for the whole quantity, a sell needs the whole quantity
//! of EUR on hand; otherwise the order is refused and nothing changes.

use super::portfolio::Portfolio;
use super::signal::Side;
use super::trade::{Order, Trade};

/// Result of an execution attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    Filled(Trade),
    InsufficientFunds { required: f64, available: f64 },
    InsufficientHoldings { required: f64, available: f64 },
}

impl ExecutionOutcome {
    pub fn is_filled(&self) -> bool {
        matches!(self, ExecutionOutcome::Filled(_))
    }

    pub fn trade(&self) -> Option<&Trade> {
        match self {
            ExecutionOutcome::Filled(trade) => Some(trade),
            _ => None,
        }
    }
}

/// Execute an order.
///
/// Steps:
/// 1. Price the order at the portfolio's current price
/// 2. Check GBP (buy) or EUR (sell) availability; refuse without mutation
/// 3. Move balances
/// 4. Append the trade to the log
///
/// # Panics
///
/// Panics if the order quantity is not a finite positive number.
pub fn execute(portfolio: &mut Portfolio, order: &Order) -> ExecutionOutcome {
    assert!(
        order.quantity.is_finite() && order.quantity > 0.0,
        "trade quantity must be positive and finite, got {}",
        order.quantity
    );

    let price = portfolio.current_price;
    let notional = order.quantity * price;

    let cash_delta = match order.side {
        Side::Buy => {
            if notional > portfolio.base_cash {
                tracing::debug!(
                    period = order.period,
                    required = notional,
                    available = portfolio.base_cash,
                    "buy refused: insufficient GBP"
                );
                return ExecutionOutcome::InsufficientFunds {
                    required: notional,
                    available: portfolio.base_cash,
                };
            }
            portfolio.base_cash -= notional;
            portfolio.quote_holdings += order.quantity;
            -notional
        }
        Side::Sell => {
            if order.quantity > portfolio.quote_holdings {
                tracing::debug!(
                    period = order.period,
                    required = order.quantity,
                    available = portfolio.quote_holdings,
                    "sell refused: insufficient EUR"
                );
                return ExecutionOutcome::InsufficientHoldings {
                    required: order.quantity,
                    available: portfolio.quote_holdings,
                };
            }
            portfolio.quote_holdings -= order.quantity;
            portfolio.base_cash += notional;
            notional
        }
    };

    let trade = Trade {
        period: order.period,
        phase: order.phase,
        side: order.side,
        quantity: order.quantity,
        price,
        cash_delta,
    };
    portfolio.record_trade(trade.clone());

    ExecutionOutcome::Filled(trade)
}
