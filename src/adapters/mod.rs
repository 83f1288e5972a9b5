//! Concrete adapter implementations for ports.

pub mod console_report;
pub mod file_config_adapter;
