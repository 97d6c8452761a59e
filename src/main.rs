use std::process::ExitCode;

use tenzies::{console, Config};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = match Config::load(std::env::args().skip(1)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("tenzies: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // logs go to stderr so they don't trample the table
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();

    match console::play(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(%e, "game ended unexpectedly");
            ExitCode::FAILURE
        }
    }
}
