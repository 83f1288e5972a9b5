//! Strategy phases: which indicator drives trading and how volatile the
//! synthetic market is, selected from the period index.

use std::fmt;

use crate::domain::indicator::IndicatorType;
use crate::domain::signal::{EMA_SPAN, RSI_PERIOD};

/// First period of the RSI phase.
pub const RSI_PHASE_START: usize = 20;
/// First period of the late EMA phase.
pub const LATE_EMA_PHASE_START: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyPhase {
    EmaEarly,
    RsiMid,
    EmaLate,
}

impl StrategyPhase {
    /// Periods [0,20) trade on EMA, [20,40) on RSI, everything after on EMA.
    pub fn from_period(period: usize) -> Self {
        if period < RSI_PHASE_START {
            StrategyPhase::EmaEarly
        } else if period < LATE_EMA_PHASE_START {
            StrategyPhase::RsiMid
        } else {
            StrategyPhase::EmaLate
        }
    }

    /// Indicator driving this phase; its parameter is the span or period the
    /// signal is evaluated with.
    pub fn indicator(&self) -> IndicatorType {
        match self {
            StrategyPhase::EmaEarly | StrategyPhase::EmaLate => IndicatorType::Ema(EMA_SPAN),
            StrategyPhase::RsiMid => IndicatorType::Rsi(RSI_PERIOD),
        }
    }

    /// Half-width of the uniform relative price change drawn each period.
    pub fn volatility(&self) -> f64 {
        match self {
            StrategyPhase::RsiMid => 0.05,
            StrategyPhase::EmaEarly | StrategyPhase::EmaLate => 0.02,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StrategyPhase::EmaEarly => "EMA (early)",
            StrategyPhase::RsiMid => "RSI",
            StrategyPhase::EmaLate => "EMA (late)",
        }
    }
}

impl fmt::Display for StrategyPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
