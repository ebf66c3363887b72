//! `duration-ms` binary entry point.
//!
//! Results go to stdout. Errors and empty results are reported on stderr
//! regardless of the log filter; `tracing` carries diagnostics only.

use std::process::ExitCode;

use duration_ms::cli::Command;
use duration_ms::config::Config;
use duration_ms::error::AppError;

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", AppError::from(e));
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            config
                .log_level
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!(
        "Configuration loaded: log_level={}, default_style={}",
        config.log_level,
        config.default_style
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", AppError::from(e));
            return ExitCode::FAILURE;
        }
    };

    match command.execute(&config) {
        Ok(Some(output)) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            match command {
                Command::Format { .. } => eprintln!("duration is zero"),
                Command::Parse { .. } | Command::Help => eprintln!("no duration recognized"),
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
