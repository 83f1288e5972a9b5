use std::io;
use tracing::Level;

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    fxsim::runner::run()
}
