#![allow(dead_code)]

use fxsim::domain::error::FxsimError;
use fxsim::domain::metrics::Summary;
use fxsim::domain::simulation::SimulationConfig;
use fxsim::domain::trade::Trade;
use fxsim::ports::report_port::ReportPort;

/// Report sink that keeps everything it is given.
#[derive(Default)]
pub struct RecordingReport {
    pub trades: Vec<Trade>,
    pub summaries: Vec<Summary>,
}

impl ReportPort for RecordingReport {
    fn trade_executed(&mut self, trade: &Trade) -> Result<(), FxsimError> {
        self.trades.push(trade.clone());
        Ok(())
    }

    fn summary(&mut self, summary: &Summary) -> Result<(), FxsimError> {
        self.summaries.push(summary.clone());
        Ok(())
    }
}

/// Report sink whose writes always fail.
pub struct FailingReport;

impl ReportPort for FailingReport {
    fn trade_executed(&mut self, _trade: &Trade) -> Result<(), FxsimError> {
        Err(std::io::Error::other("sink closed").into())
    }

    fn summary(&mut self, _summary: &Summary) -> Result<(), FxsimError> {
        Err(std::io::Error::other("sink closed").into())
    }
}

pub fn seeded_config(seed: u64) -> SimulationConfig {
    SimulationConfig {
        seed: Some(seed),
        ..SimulationConfig::default()
    }
}

pub fn rising(n: usize, start: f64, step: f64) -> Vec<f64> {
    (0..n).map(|i| start + i as f64 * step).collect()
}

pub fn falling(n: usize, start: f64, step: f64) -> Vec<f64> {
    (0..n).map(|i| start - i as f64 * step).collect()
}
