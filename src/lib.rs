//! fxsim: GBP/EUR strategy simulation harness.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`], wiring in [`runner`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod runner;
