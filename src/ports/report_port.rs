//! Reporting port trait.

use crate::domain::error::FxsimError;
use crate::domain::metrics::Summary;
use crate::domain::trade::Trade;

/// Port for publishing simulation progress and the final summary.
pub trait ReportPort {
    /// Called once per filled order, in execution order.
    fn trade_executed(&mut self, trade: &Trade) -> Result<(), FxsimError>;

    /// Called once when the run ends.
    fn summary(&mut self, summary: &Summary) -> Result<(), FxsimError>;
}
