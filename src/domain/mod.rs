//! Core domain types and logic.

pub mod phase;
pub mod price;
pub mod indicator;
pub mod signal;
pub mod trade;
pub mod portfolio;
pub mod execution;
pub mod metrics;
pub mod simulation;
pub mod config_validation;
pub mod error;
