//! Entry-point orchestration: configuration, simulation, console report.

use std::path::Path;
use std::process::ExitCode;

use crate::adapters::console_report::ConsoleReport;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::{build_simulation_config, validate_simulation_config};
use crate::domain::error::FxsimError;
use crate::domain::simulation::{run_simulation, SimulationConfig, SimulationResult};
use crate::ports::report_port::ReportPort;

/// Run one simulation with the built-in defaults and print to stdout.
pub fn run() -> ExitCode {
    run_with(&SimulationConfig::default())
}

pub fn run_with(config: &SimulationConfig) -> ExitCode {
    let mut report = ConsoleReport::stdout();
    exit_code(run_to(config, &mut report))
}

/// Load `[simulation]` settings from an INI file, then run. Library callers
/// only; the binary always runs with defaults.
pub fn run_from_file<P: AsRef<Path>>(path: P) -> ExitCode {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "loading config");
    let config =
        FileConfigAdapter::from_file(path).and_then(|adapter| build_simulation_config(&adapter));
    match config {
        Ok(config) => run_with(&config),
        Err(e) => exit_code(Err(e)),
    }
}

/// Validate `config` and run it against any report sink.
pub fn run_to(
    config: &SimulationConfig,
    report: &mut dyn ReportPort,
) -> Result<SimulationResult, FxsimError> {
    validate_simulation_config(config)?;
    run_simulation(config, report)
}

fn exit_code(result: Result<SimulationResult, FxsimError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
