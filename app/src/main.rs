//! `dino-reserve` binary: list restaurants, render floor plans, and run the
//! signup form from the terminal.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use dino_reserve::{Cli, CliError, ConsoleNotifier, ReserveSettings, cli};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_error) = writeln!(io::stderr().lock(), "error: {err}") {
                warn!(error = %write_error, "failed to report command error");
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<(), CliError> {
    let settings = ReserveSettings::load_from_iter([OsString::from("dino-reserve")]).map_err(
        |error| CliError::Config {
            message: error.to_string(),
        },
    )?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    let mut stdout = io::stdout().lock();
    runtime.block_on(cli::run(
        cli,
        &settings,
        Arc::new(ConsoleNotifier),
        &mut stdout,
    ))
}
