//! Simulation engine and period loop.
//!
//! Each period: pick the phase, generate the next price, evaluate the phase's
//! signal over the whole history, submit a fixed-size order for any Buy/Sell,
//! then record equity. The run ends after `total_periods` periods.

use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::FxsimError;
use super::execution::ExecutionOutcome;
use super::metrics::Summary;
use super::phase::StrategyPhase;
use super::portfolio::Portfolio;
use super::price::PriceGenerator;
use super::signal::{self, Signal};
use super::trade::Order;
use crate::ports::report_port::ReportPort;

pub const DEFAULT_INITIAL_PRICE: f64 = 0.86;
pub const DEFAULT_INITIAL_BALANCE: f64 = 1_000_000.0;
pub const DEFAULT_TOTAL_PERIODS: usize = 60;
pub const DEFAULT_TRADE_SIZE: f64 = 100_000.0;
/// Upper bound accepted for `total_periods` from configuration.
pub const MAX_TOTAL_PERIODS: usize = 100_000;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Starting EUR-per-GBP rate.
    pub initial_price: f64,
    /// Starting GBP cash.
    pub initial_balance: f64,
    pub total_periods: usize,
    /// EUR quantity of every order.
    pub trade_size: f64,
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Wall-clock pause between periods for console pacing.
    pub pacing_delay: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            initial_price: DEFAULT_INITIAL_PRICE,
            initial_balance: DEFAULT_INITIAL_BALANCE,
            total_periods: DEFAULT_TOTAL_PERIODS,
            trade_size: DEFAULT_TRADE_SIZE,
            seed: None,
            pacing_delay: Duration::ZERO,
        }
    }
}

/// What happened in a single period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodOutcome {
    pub period: usize,
    pub phase: StrategyPhase,
    pub price: f64,
    pub signal: Signal,
    /// `None` when the signal was Hold.
    pub execution: Option<ExecutionOutcome>,
}

#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub prices: Vec<f64>,
    pub portfolio: Portfolio,
    pub summary: Summary,
}

pub struct Simulation<R: Rng> {
    config: SimulationConfig,
    generator: PriceGenerator<R>,
    prices: Vec<f64>,
    portfolio: Portfolio,
    periods_elapsed: usize,
    rejected_trades: usize,
}

impl<R: Rng> Simulation<R> {
    pub fn new(config: SimulationConfig, rng: R) -> Self {
        let portfolio = Portfolio::new(config.initial_balance, config.initial_price);
        let prices = vec![config.initial_price];

        Simulation {
            config,
            generator: PriceGenerator::new(rng),
            prices,
            portfolio,
            periods_elapsed: 0,
            rejected_trades: 0,
        }
    }

    /// Price history: the initial price followed by one price per period.
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn periods_elapsed(&self) -> usize {
        self.periods_elapsed
    }

    pub fn rejected_trades(&self) -> usize {
        self.rejected_trades
    }

    pub fn is_finished(&self) -> bool {
        self.periods_elapsed >= self.config.total_periods
    }

    /// Advance one period. Returns `None` once the run is finished.
    pub fn step(&mut self) -> Option<PeriodOutcome> {
        if self.is_finished() {
            return None;
        }

        let period = self.periods_elapsed;
        let phase = StrategyPhase::from_period(period);
        if period == 0 || StrategyPhase::from_period(period - 1) != phase {
            tracing::debug!(period, %phase, "entering phase");
        }

        let previous = self.prices[self.prices.len() - 1];
        let price = self.generator.next_price(previous, phase);
        self.prices.push(price);
        self.portfolio.mark_price(price);

        let signal = signal::evaluate(phase.indicator(), &self.prices);
        let execution = signal.side().map(|side| {
            let order = Order {
                period,
                phase,
                side,
                quantity: self.config.trade_size,
            };
            let outcome = self.portfolio.execute_order(&order);
            if !outcome.is_filled() {
                self.rejected_trades += 1;
            }
            outcome
        });

        self.portfolio.record_equity(period);
        self.periods_elapsed += 1;

        Some(PeriodOutcome {
            period,
            phase,
            price,
            signal,
            execution,
        })
    }

    /// Run every remaining period, reporting executed trades as they happen
    /// and the summary at the end.
    pub fn run(mut self, report: &mut dyn ReportPort) -> Result<SimulationResult, FxsimError> {
        while let Some(outcome) = self.step() {
            if let Some(trade) = outcome.execution.as_ref().and_then(|e| e.trade()) {
                report.trade_executed(trade)?;
            }
            if !self.config.pacing_delay.is_zero() && !self.is_finished() {
                thread::sleep(self.config.pacing_delay);
            }
        }

        let summary = Summary::compute(&self.portfolio, self.rejected_trades);
        report.summary(&summary)?;

        tracing::info!(
            periods = self.periods_elapsed,
            trades = summary.total_trades,
            rejected = summary.rejected_trades,
            final_value = summary.final_value,
            "simulation finished"
        );

        Ok(SimulationResult {
            prices: self.prices,
            portfolio: self.portfolio,
            summary,
        })
    }
}

/// Run one simulation with a `StdRng` seeded from `config.seed`, or from OS
/// entropy when no seed is set.
pub fn run_simulation(
    config: &SimulationConfig,
    report: &mut dyn ReportPort,
) -> Result<SimulationResult, FxsimError> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!(
        periods = config.total_periods,
        initial_price = config.initial_price,
        initial_balance = config.initial_balance,
        seed = ?config.seed,
        "starting simulation"
    );

    Simulation::new(config.clone(), rng).run(report)
}
