//! Line-oriented console report adapter implementing ReportPort.
//!
//! One line per executed trade as the run progresses, then a summary block.

use std::io::{self, Write};

use crate::domain::error::FxsimError;
use crate::domain::metrics::Summary;
use crate::domain::trade::Trade;
use crate::ports::report_port::ReportPort;

pub struct ConsoleReport<W: Write> {
    out: W,
}

impl ConsoleReport<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleReport { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        ConsoleReport { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn format_trade(trade: &Trade) -> String {
    format!(
        "Period {:>3} | {:<11} | {:<4} {:.0} EUR @ {:.4}",
        trade.period,
        trade.strategy_name(),
        trade.side,
        trade.quantity,
        trade.price,
    )
}

pub fn format_summary(summary: &Summary) -> Vec<String> {
    let pnl_sign = if summary.profit_loss >= 0.0 { "+" } else { "" };
    vec![
        "=== Simulation Summary ===".to_string(),
        format!("Final Value:      {:.2} GBP", summary.final_value),
        format!(
            "Profit/Loss:      {}{:.2} GBP ({}{:.2}%)",
            pnl_sign, summary.profit_loss, pnl_sign, summary.profit_loss_pct
        ),
        format!("EUR Holdings:     {:.2}", summary.quote_holdings),
        format!("GBP Cash:         {:.2}", summary.base_cash),
        format!("Final Rate:       {:.4}", summary.final_price),
        format!(
            "Total Trades:     {} ({} buys, {} sells)",
            summary.total_trades, summary.buys, summary.sells
        ),
        format!("Rejected Orders:  {}", summary.rejected_trades),
        format!(
            "Max Drawdown:     -{:.2}% ({} periods)",
            summary.max_drawdown * 100.0,
            summary.max_drawdown_duration
        ),
    ]
}

impl<W: Write> ReportPort for ConsoleReport<W> {
    fn trade_executed(&mut self, trade: &Trade) -> Result<(), FxsimError> {
        writeln!(self.out, "{}", format_trade(trade))?;
        Ok(())
    }

    fn summary(&mut self, summary: &Summary) -> Result<(), FxsimError> {
        writeln!(self.out)?;
        for line in format_summary(summary) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
