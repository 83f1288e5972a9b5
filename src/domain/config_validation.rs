//! Simulation configuration loading and validation.
//!
//! Keys live in the `[simulation]` section; every key is optional and falls
//! back to the built-in default. A key that is present but malformed is an
//! error rather than a silent default.

use std::str::FromStr;
use std::time::Duration;

use crate::domain::error::FxsimError;
use crate::domain::simulation::{SimulationConfig, MAX_TOTAL_PERIODS};
use crate::ports::config_port::ConfigPort;

pub const SECTION: &str = "simulation";

/// Build a validated [`SimulationConfig`] from a config source.
pub fn build_simulation_config(config: &dyn ConfigPort) -> Result<SimulationConfig, FxsimError> {
    let defaults = SimulationConfig::default();

    let pacing_ms: u64 = parse_key(config, "pacing_delay_ms")?.unwrap_or(0);

    let sim = SimulationConfig {
        initial_price: parse_key(config, "initial_price")?.unwrap_or(defaults.initial_price),
        initial_balance: parse_key(config, "initial_balance")?
            .unwrap_or(defaults.initial_balance),
        total_periods: parse_key(config, "total_periods")?.unwrap_or(defaults.total_periods),
        trade_size: parse_key(config, "trade_size")?.unwrap_or(defaults.trade_size),
        seed: parse_key(config, "seed")?,
        pacing_delay: Duration::from_millis(pacing_ms),
    };

    validate_simulation_config(&sim)?;
    Ok(sim)
}

pub fn validate_simulation_config(config: &SimulationConfig) -> Result<(), FxsimError> {
    validate_initial_price(config)?;
    validate_initial_balance(config)?;
    validate_total_periods(config)?;
    validate_trade_size(config)?;
    Ok(())
}

fn parse_key<T: FromStr>(config: &dyn ConfigPort, key: &str) -> Result<Option<T>, FxsimError> {
    match config.get_string(SECTION, key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            FxsimError::invalid(SECTION, key, format!("cannot parse {:?}", raw))
        }),
    }
}

fn validate_initial_price(config: &SimulationConfig) -> Result<(), FxsimError> {
    if !config.initial_price.is_finite() || config.initial_price <= 0.0 {
        return Err(FxsimError::invalid(
            SECTION,
            "initial_price",
            "initial_price must be positive",
        ));
    }
    Ok(())
}

fn validate_initial_balance(config: &SimulationConfig) -> Result<(), FxsimError> {
    if !config.initial_balance.is_finite() || config.initial_balance < 0.0 {
        return Err(FxsimError::invalid(
            SECTION,
            "initial_balance",
            "initial_balance must be non-negative",
        ));
    }
    Ok(())
}

fn validate_total_periods(config: &SimulationConfig) -> Result<(), FxsimError> {
    if config.total_periods > MAX_TOTAL_PERIODS {
        return Err(FxsimError::invalid(
            SECTION,
            "total_periods",
            format!("total_periods must be at most {}", MAX_TOTAL_PERIODS),
        ));
    }
    Ok(())
}

fn validate_trade_size(config: &SimulationConfig) -> Result<(), FxsimError> {
    if !config.trade_size.is_finite() || config.trade_size <= 0.0 {
        return Err(FxsimError::invalid(
            SECTION,
            "trade_size",
            "trade_size must be positive",
        ));
    }
    Ok(())
}
